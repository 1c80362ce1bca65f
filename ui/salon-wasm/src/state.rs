//! Application context.
//!
//! One `App` is built at start and cloned into every controller and
//! listener that needs it. WASM is single-threaded, so shared pieces sit
//! behind `Rc<RefCell<_>>`.

use crate::dom::{self, PageElements};
use crate::observer::VisibilityObserver;
use cs_page_config::{ConfigError, PageConfig};
use cs_view_state::{ScrollSlot, SlotError};
use std::cell::RefCell;
use std::rc::Rc;

const CONFIG_ELEMENT_ID: &str = "salon-config";

#[derive(Clone)]
pub struct App {
    pub config: Rc<PageConfig>,
    pub els: Rc<PageElements>,
    pub reveal: Rc<RefCell<VisibilityObserver>>,
}

impl App {
    /// Must run after the DOM is parsed: element handles are resolved here.
    pub fn bind(config: PageConfig) -> App {
        let reveal = VisibilityObserver::bind(&config.reveal_regions);
        App {
            config: Rc::new(config),
            els: Rc::new(PageElements::bind()),
            reveal: Rc::new(RefCell::new(reveal)),
        }
    }
}

/// Reads `<script type="application/json" id="salon-config">`. A missing
/// block means defaults; a broken one means defaults plus the error, which
/// the caller logs once logging is up.
pub fn load_config() -> (PageConfig, Option<ConfigError>) {
    let raw = dom::by_id(CONFIG_ELEMENT_ID).and_then(|el| el.text_content());
    match raw {
        Some(text) if !text.trim().is_empty() => match PageConfig::from_json(&text) {
            Ok(config) => (config, None),
            Err(err) => (PageConfig::default(), Some(err)),
        },
        _ => (PageConfig::default(), None),
    }
}

// ── sessionStorage slot ──

/// `None` when storage is missing or access throws (sandboxed frames,
/// disabled cookies).
fn session_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.session_storage().ok()?
}

fn rejected(err: wasm_bindgen::JsValue) -> SlotError {
    SlotError::Rejected(dom::js_err(err).to_string())
}

pub struct SessionSlot {
    key: String,
}

impl SessionSlot {
    pub fn new(key: &str) -> Self {
        Self {
            key: key.to_owned(),
        }
    }
}

impl ScrollSlot for SessionSlot {
    fn read(&self) -> Result<Option<String>, SlotError> {
        let storage = session_storage().ok_or(SlotError::Unavailable)?;
        storage.get_item(&self.key).map_err(rejected)
    }

    fn write(&self, value: &str) -> Result<(), SlotError> {
        let storage = session_storage().ok_or(SlotError::Unavailable)?;
        storage.set_item(&self.key, value).map_err(rejected)
    }

    fn remove(&self) -> Result<(), SlotError> {
        let storage = session_storage().ok_or(SlotError::Unavailable)?;
        storage.remove_item(&self.key).map_err(rejected)
    }
}
