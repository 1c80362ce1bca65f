//! DOM element bindings.
//!
//! Every handle the page controllers use is resolved once at startup in
//! `PageElements::bind()`. All of them are optional: a page without a hero
//! or without cards simply skips the matching behaviour.

use anyhow::{Result, anyhow};
use cs_interactions::Rect;
use cs_view_state::DocumentReadiness;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlElement, NodeList, Window};

// ── Helpers ──

pub fn document() -> Document {
    gloo_utils::document()
}

pub fn window() -> Window {
    gloo_utils::window()
}

/// `JsValue` errors carry no `std::error::Error` impl; fold them into anyhow
/// at the boundary.
pub fn js_err(value: JsValue) -> anyhow::Error {
    match value.as_string() {
        Some(msg) => anyhow!(msg),
        None => anyhow!("{:?}", value),
    }
}

pub fn by_id(id: &str) -> Option<Element> {
    document().get_element_by_id(id)
}

pub fn by_id_typed<T: JsCast>(id: &str) -> Option<T> {
    by_id(id).and_then(|e| e.dyn_into::<T>().ok())
}

pub fn query(selector: &str) -> Option<Element> {
    document().query_selector(selector).ok()?
}

fn collect(nl: NodeList) -> Vec<Element> {
    let mut v = Vec::new();
    for i in 0..nl.length() {
        if let Some(e) = nl.item(i) {
            if let Ok(el) = e.dyn_into::<Element>() {
                v.push(el);
            }
        }
    }
    v
}

/// All matches for `selector`; an invalid selector yields nothing.
pub fn query_all(selector: &str) -> Vec<Element> {
    document()
        .query_selector_all(selector)
        .map(collect)
        .unwrap_or_default()
}

pub fn query_within(parent: &Element, selector: &str) -> Option<Element> {
    parent.query_selector(selector).ok()?
}

pub fn add_class(el: &Element, cls: &str) {
    let _ = el.class_list().add_1(cls);
}

pub fn remove_class(el: &Element, cls: &str) {
    let _ = el.class_list().remove_1(cls);
}

pub fn as_html(el: &Element) -> Option<&HtmlElement> {
    el.dyn_ref::<HtmlElement>()
}

pub fn set_style(el: &Element, property: &str, value: &str) {
    if let Some(html) = as_html(el) {
        let _ = html.style().set_property(property, value);
    }
}

pub fn create_element(tag: &str) -> Result<Element> {
    document().create_element(tag).map_err(js_err)
}

pub fn rect(el: &Element) -> Rect {
    let r = el.get_bounding_client_rect();
    Rect {
        left: r.left(),
        top: r.top(),
        width: r.width(),
        height: r.height(),
    }
}

pub fn scroll_y() -> f64 {
    window().scroll_y().unwrap_or(0.0)
}

pub fn inner_height() -> f64 {
    window()
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0)
}

pub fn inner_width() -> f64 {
    window()
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0)
}

pub fn readiness() -> DocumentReadiness {
    DocumentReadiness::from_ready_state(&document().ready_state())
}

pub fn now_ms() -> f64 {
    js_sys::Date::now()
}

// ── PageElements struct ──

/// Page regions used by the hero and interaction controllers.
/// Clone-friendly (all inner types are reference-counted via JS GC).
#[derive(Clone, Default)]
pub struct PageElements {
    // Hero
    pub hero_section: Option<Element>,
    pub hero_content: Option<Element>,
    pub hero_image: Option<Element>,
    pub hero_lines: Vec<Element>,
    pub hero_cta: Option<Element>,
    pub hero_messages: Vec<Element>,
    pub scroll_indicator: Option<Element>,

    // Interactions
    pub anchors: Vec<Element>,
    pub cards: Vec<Element>,
    pub ripple_buttons: Vec<Element>,
    pub spline_container: Option<Element>,
}

impl PageElements {
    /// Resolve all DOM references. Call once the DOM is parsed.
    pub fn bind() -> PageElements {
        let hero_section = query(".hero-section");
        let hero_image = hero_section.as_ref().and_then(|s| query_within(s, "img"));

        PageElements {
            hero_section,
            hero_content: query(".hero-content-wrapper"),
            hero_image,
            hero_lines: query_all(".hero-text-line"),
            hero_cta: query(".hero-cta"),
            hero_messages: query_all(".hero-message"),
            scroll_indicator: query(".hero-section .animate-bounce"),

            anchors: query_all(r##"a[href^="#"]"##),
            cards: query_all(".glass-card"),
            ripple_buttons: query_all(r#"a[class*="bg-gradient"], button[class*="bg-gradient"]"#),
            spline_container: query(".spline-container"),
        }
    }
}
