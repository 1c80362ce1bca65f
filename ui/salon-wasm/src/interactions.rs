//! Pointer and scroll micro-interactions.

use crate::dom::{self, js_err};
use crate::events;
use crate::state::App;
use anyhow::{Context, Result};
use cs_interactions::{
    CardTilt, RIPPLE_KEYFRAMES, RippleGeometry, Throttle, card_tilt, is_mobile, ripple_geometry,
};
use gloo_timers::callback::Timeout;
use web_sys::{Element, MouseEvent, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

fn smooth_scroll_to(target: &Element) {
    let opts = ScrollIntoViewOptions::new();
    opts.set_behavior(ScrollBehavior::Smooth);
    opts.set_block(ScrollLogicalPosition::Start);
    target.scroll_into_view_with_scroll_into_view_options(&opts);
}

/// In-page anchors scroll smoothly instead of jumping.
pub fn setup_smooth_scroll(app: &App) -> Result<()> {
    for link in &app.els.anchors {
        let link2 = link.clone();
        events::listen(link, "click", move |e: MouseEvent| {
            e.prevent_default();
            let href = link2.get_attribute("href").unwrap_or_default();
            let id = href.strip_prefix('#').unwrap_or(&href);
            if let Some(target) = dom::by_id(id) {
                smooth_scroll_to(&target);
            }
        })?;
    }
    Ok(())
}

pub fn setup_scroll_indicator(app: &App) -> Result<()> {
    let Some(indicator) = &app.els.scroll_indicator else {
        return Ok(());
    };
    events::listen(indicator, "click", |_: MouseEvent| {
        if let Some(content) = dom::by_id("content") {
            smooth_scroll_to(&content);
        }
    })
}

pub fn setup_card_hover(app: &App) -> Result<()> {
    for card in &app.els.cards {
        let c = card.clone();
        events::listen(card, "mouseenter", move |_: MouseEvent| {
            dom::set_style(&c, "transform", CardTilt::LIFT);
            dom::set_style(&c, "transition", "all 0.3s ease");
        })?;

        let c = card.clone();
        events::listen(card, "mouseleave", move |_: MouseEvent| {
            dom::set_style(&c, "transform", CardTilt::REST);
        })?;

        let c = card.clone();
        events::listen(card, "mousemove", move |e: MouseEvent| {
            let tilt = card_tilt(dom::rect(&c), f64::from(e.client_x()), f64::from(e.client_y()));
            dom::set_style(&c, "transform", &tilt.transform());
        })?;
    }
    Ok(())
}

fn spawn_ripple(host: &Element, e: &MouseEvent) -> Result<()> {
    let geometry = ripple_geometry(dom::rect(host), f64::from(e.client_x()), f64::from(e.client_y()));
    let ripple = dom::create_element("span")?;
    ripple
        .set_attribute("style", &geometry.css_text())
        .map_err(js_err)?;

    dom::set_style(host, "position", "relative");
    dom::set_style(host, "overflow", "hidden");
    host.append_child(&ripple).map_err(js_err)?;

    Timeout::new(RippleGeometry::LIFETIME_MS, move || ripple.remove()).forget();
    Ok(())
}

pub fn setup_button_ripple(app: &App) -> Result<()> {
    for button in &app.els.ripple_buttons {
        let host = button.clone();
        events::listen(button, "click", move |e: MouseEvent| {
            if let Err(err) = spawn_ripple(&host, &e) {
                tracing::debug!("ripple skipped: {err:#}");
            }
        })?;
    }
    Ok(())
}

/// Injects the `ripple` keyframes the ripple spans animate with.
pub fn add_ripple_styles() -> Result<()> {
    let style = dom::create_element("style")?;
    style.set_text_content(Some(RIPPLE_KEYFRAMES));
    let head = dom::document().head().context("document has no <head>")?;
    head.append_child(&style).map_err(js_err)?;
    Ok(())
}

/// Hides the 3D scene on narrow viewports.
pub fn setup_responsive(app: &App) -> Result<()> {
    let spline = app.els.spline_container.clone();
    let breakpoint = app.config.responsive.mobile_breakpoint_px;
    let apply = move || {
        if let Some(container) = &spline {
            let display = if is_mobile(dom::inner_width(), breakpoint) { "none" } else { "block" };
            dom::set_style(container, "display", display);
        }
    };
    apply();

    let mut throttle = Throttle::new(app.config.responsive.resize_throttle_ms);
    events::listen(&dom::window(), "resize", move |_: web_sys::Event| {
        if throttle.permit(dom::now_ms()) {
            apply();
        }
    })
}
