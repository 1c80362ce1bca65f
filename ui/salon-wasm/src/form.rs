//! Contact form validation.
//!
//! Submission stays on the page: a valid form gets a local acknowledgment
//! dialog and is reset.

use crate::dom;
use crate::events;
use crate::state::App;
use anyhow::{Context, Result};
use cs_interactions::{ContactFields, FieldError};
use std::rc::Rc;
use tracing::{debug, info};
use web_sys::{Element, HtmlFormElement, HtmlInputElement};

pub struct ContactForm {
    form: HtmlFormElement,
    name: HtmlInputElement,
    email: HtmlInputElement,
    phone: HtmlInputElement,
    name_error: Element,
    contact_error: Element,
    ack: String,
}

fn input(id: &str) -> Result<HtmlInputElement> {
    dom::by_id_typed::<HtmlInputElement>(id).with_context(|| format!("missing input #{id}"))
}

fn as_el<T: AsRef<Element>>(t: &T) -> &Element {
    t.as_ref()
}

fn element(id: &str) -> Result<Element> {
    dom::by_id(id).with_context(|| format!("missing element #{id}"))
}

impl ContactForm {
    /// `Ok(None)` when the page has no contact form at all.
    pub fn bind(ack: &str) -> Result<Option<ContactForm>> {
        let Some(form) = dom::by_id_typed::<HtmlFormElement>("contactForm") else {
            return Ok(None);
        };
        Ok(Some(ContactForm {
            form,
            name: input("name")?,
            email: input("email")?,
            phone: input("phone")?,
            name_error: element("nameError")?,
            contact_error: element("contactError")?,
            ack: ack.to_owned(),
        }))
    }

    fn fields(&self) -> ContactFields {
        ContactFields {
            name: self.name.value(),
            email: self.email.value(),
            phone: self.phone.value(),
        }
    }

    fn targets(&self, kind: FieldError) -> (&Element, Vec<&Element>) {
        match kind {
            FieldError::Name => (&self.name_error, vec![as_el(&self.name)]),
            FieldError::Contact => (
                &self.contact_error,
                vec![as_el(&self.email), as_el(&self.phone)],
            ),
        }
    }

    fn show_error(&self, kind: FieldError) {
        let (message, inputs) = self.targets(kind);
        dom::add_class(message, "show");
        for el in inputs {
            dom::add_class(el, "error");
        }
    }

    fn clear_error(&self, kind: FieldError) {
        let (message, inputs) = self.targets(kind);
        dom::remove_class(message, "show");
        for el in inputs {
            dom::remove_class(el, "error");
        }
    }

    fn validate_and_submit(&self) {
        for kind in FieldError::ALL {
            self.clear_error(kind);
        }

        let result = self.fields().validate();
        if !result.is_valid() {
            debug!(errors = ?result.errors, "contact form rejected");
            for kind in &result.errors {
                self.show_error(*kind);
            }
            return;
        }

        let _ = dom::window().alert_with_message(&self.ack);
        self.form.reset();
        info!("contact form acknowledged");
    }

    fn clear_if_resolved(&self, edited: FieldError) {
        if let Some(kind) = self.fields().resolved(edited) {
            self.clear_error(kind);
        }
    }
}

pub fn setup_validation(app: &App) -> Result<()> {
    let Some(form) = ContactForm::bind(&app.config.copy.contact_ack)? else {
        return Ok(());
    };
    let form = Rc::new(form);

    let f = form.clone();
    events::listen(&form.form, "submit", move |e: web_sys::Event| {
        e.prevent_default();
        f.validate_and_submit();
    })?;

    let f = form.clone();
    events::listen(&form.name, "input", move |_: web_sys::Event| {
        f.clear_if_resolved(FieldError::Name);
    })?;

    for field in [&form.email, &form.phone] {
        let f = form.clone();
        events::listen(field, "input", move |_: web_sys::Event| {
            f.clear_if_resolved(FieldError::Contact);
        })
        .map_err(|err| err.context("contact input listener"))?;
    }

    Ok(())
}
