//! Page-level error boundary.
//!
//! Script errors and unhandled rejections are logged and kept out of the
//! user's way. Broken images are swapped for a text placeholder; other
//! failed resources are only logged.

use crate::dom;
use crate::events;
use crate::state::App;
use anyhow::Result;
use tracing::warn;
use wasm_bindgen::JsCast;
use web_sys::{Element, ErrorEvent, Event, PromiseRejectionEvent};

fn handle_resource_error(target: &Element, placeholder: &str) {
    match target.tag_name().to_ascii_uppercase().as_str() {
        "IMG" => {
            warn!(src = ?target.get_attribute("src"), "image failed to load");
            dom::set_style(target, "display", "none");
            let Some(parent) = target.parent_node() else {
                return;
            };
            let Ok(fallback) = dom::create_element("div") else {
                return;
            };
            fallback.set_class_name("image-fallback");
            fallback.set_text_content(Some(placeholder));
            let before: &web_sys::Node = target;
            let _ = parent.insert_before(&fallback, Some(before));
        }
        "SCRIPT" => warn!(src = ?target.get_attribute("src"), "external script failed to load"),
        "LINK" => warn!(href = ?target.get_attribute("href"), "external stylesheet failed to load"),
        other => warn!(tag = other, "resource failed to load"),
    }
}

pub fn install(app: &App) -> Result<()> {
    let window = dom::window();

    events::listen(&window, "error", |e: Event| {
        if let Some(err) = e.dyn_ref::<ErrorEvent>() {
            warn!(message = %err.message(), "JavaScript error caught: {:?}", err.error());
            e.prevent_default();
        }
    })?;

    events::listen(&window, "unhandledrejection", |e: PromiseRejectionEvent| {
        warn!("unhandled promise rejection: {:?}", e.reason());
        e.prevent_default();
    })?;

    // Resource errors do not bubble; only a capture listener on the window
    // sees them. Script errors target the window itself and are skipped here.
    let placeholder = app.config.copy.image_fallback.clone();
    events::listen_capture(&window, "error", move |e: Event| {
        let Some(target) = e.target().and_then(|t| t.dyn_into::<Element>().ok()) else {
            return;
        };
        handle_resource_error(&target, &placeholder);
    })
}
