//! View-state synchronization for the salon page.
//!
//! Everything here is platform-free: the browser glue in `salon-wasm` feeds
//! DOM measurements and storage access in through plain values and the
//! [`ScrollSlot`] trait, so the ordering rules can be tested on the host.

pub mod bootstrap;
pub mod reconcile;
pub mod reveal;
pub mod rotation;
pub mod scroll_record;

pub use bootstrap::{BootReport, BootState, Bootstrap, BootstrapError, DocumentReadiness, Trigger};
pub use reconcile::{Viewport, reconcile};
pub use reveal::{NodeId, RevealRegistry, RevealSource, RevealState};
pub use rotation::{MessageRotation, RotationStep};
pub use scroll_record::{
    InMemorySlot, NavigationKind, ScrollPositionStore, ScrollSlot, SlotError, encode_offset,
    parse_offset,
};
