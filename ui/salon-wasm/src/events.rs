//! Event listener helpers.
//!
//! Page listeners live as long as the page, so every closure is handed to
//! the browser and forgotten.

use crate::dom::js_err;
use anyhow::Result;
use wasm_bindgen::convert::FromWasmAbi;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{AddEventListenerOptions, EventTarget};

pub fn listen<E, F>(target: &EventTarget, event: &str, handler: F) -> Result<()>
where
    E: FromWasmAbi + 'static,
    F: FnMut(E) + 'static,
{
    let cb = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    target
        .add_event_listener_with_callback(event, cb.as_ref().unchecked_ref())
        .map_err(js_err)?;
    cb.forget();
    Ok(())
}

/// Capture-phase listener. Needed for events that do not bubble, such as a
/// resource `error`.
pub fn listen_capture<E, F>(target: &EventTarget, event: &str, handler: F) -> Result<()>
where
    E: FromWasmAbi + 'static,
    F: FnMut(E) + 'static,
{
    let opts = AddEventListenerOptions::new();
    opts.set_capture(true);
    listen_with_options(target, event, &opts, handler)
}

pub fn listen_once<E, F>(target: &EventTarget, event: &str, handler: F) -> Result<()>
where
    E: FromWasmAbi + 'static,
    F: FnMut(E) + 'static,
{
    let opts = AddEventListenerOptions::new();
    opts.set_once(true);
    listen_with_options(target, event, &opts, handler)
}

fn listen_with_options<E, F>(
    target: &EventTarget,
    event: &str,
    opts: &AddEventListenerOptions,
    handler: F,
) -> Result<()>
where
    E: FromWasmAbi + 'static,
    F: FnMut(E) + 'static,
{
    let cb = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    target
        .add_event_listener_with_callback_and_add_event_listener_options(
            event,
            cb.as_ref().unchecked_ref(),
            opts,
        )
        .map_err(js_err)?;
    cb.forget();
    Ok(())
}
