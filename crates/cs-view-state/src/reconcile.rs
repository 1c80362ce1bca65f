//! Catch-up pass after a restored scroll jump.
//!
//! Intersection observers report crossings, not "already inside after a
//! teleport", so nodes that were in view when the page jumped may never get a
//! callback. This pass measures them directly.

use crate::reveal::{NodeId, RevealRegistry, RevealSource};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub offset: f64,
    pub height: f64,
}

impl Viewport {
    pub fn bottom(&self) -> f64 {
        self.offset + self.height
    }

    pub fn contains_top(&self, document_top: f64) -> bool {
        document_top <= self.bottom()
    }
}

/// Reveals every pending node whose document-relative top edge is at or
/// above the viewport's bottom edge. `top_of` returns `None` for nodes that
/// can no longer be measured; those stay pending.
pub fn reconcile<F>(registry: &mut RevealRegistry, viewport: Viewport, mut top_of: F) -> Vec<NodeId>
where
    F: FnMut(NodeId) -> Option<f64>,
{
    let pending: Vec<NodeId> = registry.pending().collect();
    let revealed: Vec<NodeId> = pending
        .into_iter()
        .filter(|id| top_of(*id).is_some_and(|top| viewport.contains_top(top)))
        .filter(|id| registry.reveal(*id, RevealSource::Reconcile))
        .collect();

    debug!(
        offset = viewport.offset,
        height = viewport.height,
        revealed = revealed.len(),
        "view state reconciled"
    );
    revealed
}
