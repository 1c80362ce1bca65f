//! Bridge to the Lucide icon library loaded by the page.
//!
//! The library is optional: when `window.lucide.createIcons` is not a
//! function this does nothing.

use crate::dom;
use js_sys::{Function, Reflect};
use tracing::debug;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

pub fn render() {
    let lucide = match Reflect::get(&dom::window(), &JsValue::from_str("lucide")) {
        Ok(v) if !v.is_undefined() && !v.is_null() => v,
        _ => return,
    };
    let create = Reflect::get(&lucide, &JsValue::from_str("createIcons")).unwrap_or(JsValue::UNDEFINED);
    let Some(create) = create.dyn_ref::<Function>() else {
        debug!("lucide present without createIcons");
        return;
    };
    match create.call0(&lucide) {
        Ok(_) => debug!("icons rendered"),
        Err(err) => debug!("createIcons failed: {:?}", err),
    }
}
