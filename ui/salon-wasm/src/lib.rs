//! Oizumi Care Salon page runtime.
//!
//! Interactive layer of the salon's static page, compiled to WASM: reveal
//! animations, scroll restoration, hero effects, micro-interactions, the
//! contact form and a page-level error boundary. Each concern lives in its
//! own module; the state machines behind them live in the `cs-*` crates.

pub mod dom;
pub mod errors;
pub mod events;
pub mod form;
pub mod hero;
pub mod icons;
pub mod interactions;
pub mod logging;
pub mod observer;
pub mod scroll;
pub mod state;

use anyhow::Result;
use cs_view_state::{Bootstrap, Trigger};
use state::App;
use tracing::{debug, warn};
use wasm_bindgen::prelude::*;

/// WASM entry point – called automatically when the module is instantiated.
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    // Improve panic messages in the browser console
    console_error_panic_hook::set_once();

    match dom::readiness().dom_ready_trigger() {
        Trigger::Immediate => boot(),
        Trigger::OnEvent(event) => {
            events::listen_once(&dom::document(), event, |_: web_sys::Event| boot())
                .map_err(|err| JsValue::from_str(&format!("{err:#}")))?;
        }
    }
    Ok(())
}

/// Runs `f` once the page has fully loaded, or right away if it already has.
fn on_load<F: FnOnce() + 'static>(f: F) -> Result<()> {
    match dom::readiness().load_trigger() {
        Trigger::Immediate => {
            f();
            Ok(())
        }
        Trigger::OnEvent(event) => {
            let mut f = Some(f);
            events::listen_once(&dom::window(), event, move |_: web_sys::Event| {
                if let Some(f) = f.take() {
                    f();
                }
            })
        }
    }
}

fn boot() {
    let (config, config_error) = state::load_config();
    logging::init(&config.log_level);
    if let Some(err) = config_error {
        warn!("page config rejected, using defaults: {err}");
    }

    let app = App::bind(config);
    let mut sequence = steps(&app);
    match sequence.initialize() {
        Ok(report) if report.is_clean() => debug!("all setup steps completed"),
        Ok(report) => warn!(failed = ?report.failed, "page running with degraded features"),
        Err(err) => debug!("{err}"),
    }
}

/// Main initialisation sequence. Steps are independent; one failing does
/// not stop the rest.
fn steps(app: &App) -> Bootstrap<anyhow::Error> {
    let mut boot = Bootstrap::new();

    let a = app.clone();
    boot.step("error-boundary", move || errors::install(&a));

    // Animation
    let a = app.clone();
    boot.step("reveal-observer", move || observer::watch(&a.reveal));
    let a = app.clone();
    boot.step("hero-entry", move || {
        hero::setup_entry(&a);
        Ok(())
    });
    let a = app.clone();
    boot.step("parallax", move || hero::setup_parallax(&a));
    let a = app.clone();
    boot.step("hero-rotation", move || {
        hero::setup_message_rotation(&a);
        Ok(())
    });

    // Interaction
    let a = app.clone();
    boot.step("smooth-scroll", move || interactions::setup_smooth_scroll(&a));
    let a = app.clone();
    boot.step("card-hover", move || interactions::setup_card_hover(&a));
    let a = app.clone();
    boot.step("button-ripple", move || interactions::setup_button_ripple(&a));
    let a = app.clone();
    boot.step("scroll-indicator", move || interactions::setup_scroll_indicator(&a));

    // Form
    let a = app.clone();
    boot.step("contact-form", move || form::setup_validation(&a));

    // Utility
    let a = app.clone();
    boot.step("responsive", move || interactions::setup_responsive(&a));
    let a = app.clone();
    boot.step("scroll-restoration", move || {
        scroll::capture_on_unload(&a)?;
        let a2 = a.clone();
        on_load(move || {
            scroll::restore_on_load(&a2);
        })
    });
    boot.step("icons", || {
        icons::render();
        on_load(icons::render)
    });
    boot.step("ripple-styles", interactions::add_ripple_styles);

    boot
}
