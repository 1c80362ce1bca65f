//! Scroll position persistence across reloads, and the reveal catch-up that
//! follows a restored jump.

use crate::dom;
use crate::events;
use crate::state::{App, SessionSlot};
use anyhow::Result;
use cs_view_state::{NavigationKind, ScrollPositionStore, Viewport};
use gloo_timers::callback::Timeout;
use tracing::{debug, info};
use wasm_bindgen::JsValue;

fn store(app: &App) -> ScrollPositionStore<SessionSlot> {
    ScrollPositionStore::new(SessionSlot::new(&app.config.scroll_storage_key))
}

/// Navigation Timing `type` of the current document.
fn navigation_kind() -> NavigationKind {
    let Some(perf) = dom::window().performance() else {
        return NavigationKind::Unknown;
    };
    let entry = perf.get_entries_by_type("navigation").get(0);
    js_sys::Reflect::get(&entry, &JsValue::from_str("type"))
        .ok()
        .and_then(|v| v.as_string())
        .map(|t| NavigationKind::from_timing_type(&t))
        .unwrap_or(NavigationKind::Unknown)
}

pub fn capture_on_unload(app: &App) -> Result<()> {
    let app = app.clone();
    events::listen(&dom::window(), "beforeunload", move |_: web_sys::Event| {
        store(&app).capture(dom::scroll_y());
    })
}

/// Consumes the stored offset and jumps to it. Reconciliation is scheduled
/// as the restore's continuation, after the record is deleted.
pub fn restore_on_load(app: &App) -> Option<u32> {
    let navigation = navigation_kind();
    store(app).restore_then(navigation, |offset| {
        dom::window().scroll_to_with_x_and_y(0.0, f64::from(offset));
        info!(offset, ?navigation, "scroll position restored");

        let app = app.clone();
        Timeout::new(app.config.reconcile_delay_ms, move || {
            reconcile(&app, offset);
        })
        .forget();
    })
}

pub fn reconcile(app: &App, offset: u32) {
    let viewport = Viewport {
        offset: f64::from(offset),
        height: dom::inner_height(),
    };
    let revealed = app.reveal.borrow_mut().reconcile(viewport);
    debug!(offset, revealed, "post-restore reconciliation done");
}
