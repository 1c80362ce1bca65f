//! Single-slot scroll offset that survives exactly one reload.

use std::cell::RefCell;
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SlotError {
    /// Storage is missing or blocked (sandboxed frame, disabled cookies).
    #[error("session storage unavailable")]
    Unavailable,
    #[error("storage rejected the operation: {0}")]
    Rejected(String),
}

/// A single session-scoped storage slot. The browser implementation wraps
/// `sessionStorage`; tests use [`InMemorySlot`].
pub trait ScrollSlot {
    fn read(&self) -> Result<Option<String>, SlotError>;
    fn write(&self, value: &str) -> Result<(), SlotError>;
    fn remove(&self) -> Result<(), SlotError>;
}

#[derive(Default)]
pub struct InMemorySlot {
    value: RefCell<Option<String>>,
}

impl InMemorySlot {
    pub fn with_value(value: &str) -> Self {
        Self {
            value: RefCell::new(Some(value.to_owned())),
        }
    }

    pub fn peek(&self) -> Option<String> {
        self.value.borrow().clone()
    }
}

impl ScrollSlot for InMemorySlot {
    fn read(&self) -> Result<Option<String>, SlotError> {
        Ok(self.peek())
    }

    fn write(&self, value: &str) -> Result<(), SlotError> {
        *self.value.borrow_mut() = Some(value.to_owned());
        Ok(())
    }

    fn remove(&self) -> Result<(), SlotError> {
        self.value.borrow_mut().take();
        Ok(())
    }
}

impl<S: ScrollSlot + ?Sized> ScrollSlot for &S {
    fn read(&self) -> Result<Option<String>, SlotError> {
        (**self).read()
    }

    fn write(&self, value: &str) -> Result<(), SlotError> {
        (**self).write(value)
    }

    fn remove(&self) -> Result<(), SlotError> {
        (**self).remove()
    }
}

/// How the current document was reached, per the Navigation Timing `type`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationKind {
    Navigate,
    Reload,
    BackForward,
    Unknown,
}

impl NavigationKind {
    pub fn from_timing_type(raw: &str) -> Self {
        match raw {
            "navigate" => Self::Navigate,
            "reload" => Self::Reload,
            "back_forward" => Self::BackForward,
            _ => Self::Unknown,
        }
    }

    /// A fresh navigation must not inherit an offset left by an earlier page
    /// life. Unknown keeps the replay so older browsers still restore.
    pub fn replays_scroll(self) -> bool {
        !matches!(self, Self::Navigate)
    }
}

/// Base-10 integer pixels. Negative or non-finite offsets are stored as 0.
pub fn encode_offset(scroll_y: f64) -> String {
    if scroll_y.is_finite() && scroll_y > 0.0 {
        format!("{}", scroll_y.round() as u64)
    } else {
        "0".to_owned()
    }
}

/// Accepts the leading integer part like `parseInt`, so `"1200.5"` reads as
/// 1200. Anything without leading digits is rejected.
pub fn parse_offset(raw: &str) -> Option<u32> {
    let digits: String = raw
        .trim_start()
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    if digits.is_empty() {
        return None;
    }
    Some(u32::try_from(digits.parse::<u64>().ok()?).unwrap_or(u32::MAX))
}

pub struct ScrollPositionStore<S> {
    slot: S,
}

impl<S: ScrollSlot> ScrollPositionStore<S> {
    pub fn new(slot: S) -> Self {
        Self { slot }
    }

    /// Storage failures are logged and swallowed: losing the offset only
    /// costs the restore.
    pub fn capture(&self, scroll_y: f64) {
        let encoded = encode_offset(scroll_y);
        match self.slot.write(&encoded) {
            Ok(()) => debug!(offset = %encoded, "scroll offset captured"),
            Err(err) => warn!(offset = %encoded, "scroll offset not saved: {err}"),
        }
    }

    /// Reads and deletes the record. A later call finds nothing.
    pub fn take(&self) -> Option<u32> {
        let raw = match self.slot.read() {
            Ok(raw) => raw?,
            Err(err) => {
                warn!("scroll record unreadable: {err}");
                return None;
            }
        };
        if let Err(err) = self.slot.remove() {
            warn!("scroll record not deleted: {err}");
        }
        let parsed = parse_offset(&raw);
        if parsed.is_none() {
            debug!(raw = %raw, "discarding unreadable scroll record");
        }
        parsed
    }

    /// Consumes the record unconditionally, but only hands back the offset
    /// when the navigation kind allows a replay.
    pub fn restore(&self, navigation: NavigationKind) -> Option<u32> {
        let offset = self.take()?;
        if navigation.replays_scroll() {
            Some(offset)
        } else {
            debug!(offset, ?navigation, "stale scroll record dropped");
            None
        }
    }

    /// [`restore`](Self::restore), then `then(offset)` once the record is
    /// already gone. Nothing runs when there is no offset to replay.
    pub fn restore_then<F>(&self, navigation: NavigationKind, then: F) -> Option<u32>
    where
        F: FnOnce(u32),
    {
        let offset = self.restore(navigation)?;
        then(offset);
        Some(offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reconcile::{Viewport, reconcile};
    use crate::reveal::{RevealRegistry, RevealState};

    /// Storage that is present in the API but refuses every access.
    struct BlockedSlot;

    impl ScrollSlot for BlockedSlot {
        fn read(&self) -> Result<Option<String>, SlotError> {
            Err(SlotError::Unavailable)
        }

        fn write(&self, _value: &str) -> Result<(), SlotError> {
            Err(SlotError::Rejected("QuotaExceededError".to_owned()))
        }

        fn remove(&self) -> Result<(), SlotError> {
            Err(SlotError::Unavailable)
        }
    }

    #[test]
    fn restore_consumes_the_record() {
        let slot = InMemorySlot::default();
        let store = ScrollPositionStore::new(&slot);

        store.capture(1200.0);
        assert_eq!(slot.peek().as_deref(), Some("1200"));

        assert_eq!(store.restore(NavigationKind::Reload), Some(1200));
        assert_eq!(store.restore(NavigationKind::Reload), None);
        assert_eq!(slot.peek(), None);
    }

    #[test]
    fn reload_at_1200_reveals_in_bounds_nodes_after_record_is_gone() {
        let slot = InMemorySlot::default();
        let store = ScrollPositionStore::new(&slot);
        store.capture(1200.0);

        let mut registry = RevealRegistry::new();
        let tops = [1300.0, 1800.0, 2600.0];
        let ids: Vec<_> = tops.iter().map(|_| registry.register(0)).collect();

        let mut record_at_reconcile = Some("unset".to_owned());
        let restored = store.restore_then(NavigationKind::Reload, |offset| {
            record_at_reconcile = slot.peek();
            let viewport = Viewport {
                offset: f64::from(offset),
                height: 900.0,
            };
            reconcile(&mut registry, viewport, |id| tops.get(id.index()).copied());
        });

        assert_eq!(restored, Some(1200));
        assert_eq!(record_at_reconcile, None);
        assert_eq!(store.restore(NavigationKind::Reload), None);
        assert_eq!(registry.state(ids[0]), Some(RevealState::Visible));
        assert_eq!(registry.state(ids[1]), Some(RevealState::Visible));
        assert_eq!(registry.state(ids[2]), Some(RevealState::Pending));
    }

    #[test]
    fn continuation_is_skipped_without_an_offset() {
        let store = ScrollPositionStore::new(InMemorySlot::with_value("640"));
        let mut ran = false;

        assert_eq!(store.restore_then(NavigationKind::Navigate, |_| ran = true), None);
        assert!(!ran);
    }

    #[test]
    fn blocked_storage_degrades_to_no_restore() {
        let store = ScrollPositionStore::new(BlockedSlot);
        let mut ran = false;

        store.capture(1200.0);
        assert_eq!(store.take(), None);
        assert_eq!(store.restore_then(NavigationKind::Reload, |_| ran = true), None);
        assert!(!ran);
    }

    #[test]
    fn fresh_navigation_drops_stale_record() {
        let slot = InMemorySlot::with_value("640");
        let store = ScrollPositionStore::new(&slot);

        assert_eq!(store.restore(NavigationKind::Navigate), None);
        assert_eq!(slot.peek(), None);
    }

    #[test]
    fn back_forward_and_unknown_replay() {
        let store = ScrollPositionStore::new(InMemorySlot::with_value("10"));
        assert_eq!(store.restore(NavigationKind::BackForward), Some(10));

        let store = ScrollPositionStore::new(InMemorySlot::with_value("20"));
        assert_eq!(store.restore(NavigationKind::Unknown), Some(20));
    }

    #[test]
    fn unreadable_record_is_still_deleted() {
        let slot = InMemorySlot::with_value("abc");
        let store = ScrollPositionStore::new(&slot);

        assert_eq!(store.take(), None);
        assert_eq!(slot.peek(), None);
    }

    #[test]
    fn capture_overwrites_single_slot() {
        let slot = InMemorySlot::default();
        let store = ScrollPositionStore::new(&slot);

        store.capture(100.0);
        store.capture(300.4);
        assert_eq!(store.take(), Some(300));
        assert_eq!(store.take(), None);
    }

    #[test]
    fn offset_encoding_edges() {
        assert_eq!(encode_offset(0.0), "0");
        assert_eq!(encode_offset(-12.0), "0");
        assert_eq!(encode_offset(f64::NAN), "0");
        assert_eq!(encode_offset(1199.6), "1200");

        assert_eq!(parse_offset("1200"), Some(1200));
        assert_eq!(parse_offset(" 1200.5"), Some(1200));
        assert_eq!(parse_offset("12px"), Some(12));
        assert_eq!(parse_offset("-5"), None);
        assert_eq!(parse_offset(""), None);
    }

    #[test]
    fn navigation_kind_from_timing() {
        assert_eq!(NavigationKind::from_timing_type("reload"), NavigationKind::Reload);
        assert_eq!(
            NavigationKind::from_timing_type("back_forward"),
            NavigationKind::BackForward
        );
        assert_eq!(NavigationKind::from_timing_type("navigate"), NavigationKind::Navigate);
        assert_eq!(NavigationKind::from_timing_type("prerender"), NavigationKind::Unknown);
    }
}
