//! Hero section: entry animation, staggered text lines, rotating messages
//! and the background parallax.

use crate::dom;
use crate::events;
use crate::state::App;
use anyhow::Result;
use cs_interactions::{
    HERO_ENTRY_TRANSITION, HeroEntryFrame, Throttle, parallax_transform, parse_delay,
};
use cs_view_state::MessageRotation;
use gloo_timers::callback::{Interval, Timeout};
use tracing::debug;
use web_sys::Element;

fn apply_frame(el: &Element, frame: HeroEntryFrame) {
    dom::set_style(el, "opacity", frame.opacity);
    dom::set_style(el, "transform", frame.transform);
}

pub fn setup_entry(app: &App) {
    let (Some(_), Some(content)) = (&app.els.hero_section, &app.els.hero_content) else {
        return;
    };
    apply_frame(content, HeroEntryFrame::HIDDEN);

    let content = content.clone();
    let app2 = app.clone();
    Timeout::new(app.config.hero.entry_delay_ms, move || {
        dom::set_style(&content, "transition", HERO_ENTRY_TRANSITION);
        apply_frame(&content, HeroEntryFrame::SHOWN);
        setup_text_sequence(&app2);
    })
    .forget();
}

/// Each line shows after its own `data-delay`; the CTA follows last.
pub fn setup_text_sequence(app: &App) {
    for line in &app.els.hero_lines {
        let delay = parse_delay(line.get_attribute("data-delay").as_deref(), 0);
        let line = line.clone();
        Timeout::new(delay, move || dom::add_class(&line, "visible")).forget();
    }

    if let Some(cta) = &app.els.hero_cta {
        let delay = parse_delay(
            cta.get_attribute("data-delay").as_deref(),
            app.config.hero.cta_default_delay_ms,
        );
        let cta = cta.clone();
        Timeout::new(delay, move || dom::add_class(&cta, "visible")).forget();
    }
}

pub fn setup_message_rotation(app: &App) {
    let messages = app.els.hero_messages.clone();
    let mut rotation = MessageRotation::new(messages.len());
    let Some(first) = rotation.start() else {
        return;
    };
    dom::add_class(&messages[first], "active");

    let interval = app.config.hero.message_interval_ms;
    debug!(count = messages.len(), interval, "hero message rotation started");
    Interval::new(interval, move || {
        if let Some(step) = rotation.tick() {
            dom::remove_class(&messages[step.previous], "active");
            dom::add_class(&messages[step.next], "active");
        }
    })
    .forget();
}

pub fn setup_parallax(app: &App) -> Result<()> {
    let (Some(_), Some(image)) = (&app.els.hero_section, &app.els.hero_image) else {
        return Ok(());
    };

    let image = image.clone();
    let rate = app.config.hero.parallax_rate;
    let mut throttle = Throttle::new(app.config.hero.parallax_throttle_ms);
    events::listen(&dom::window(), "scroll", move |_: web_sys::Event| {
        if throttle.permit(dom::now_ms()) {
            dom::set_style(&image, "transform", &parallax_transform(dom::scroll_y(), rate));
        }
    })
}
