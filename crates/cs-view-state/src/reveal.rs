//! One-shot reveal bookkeeping.
//!
//! Every animated element gets a [`NodeId`] when it is registered. It starts
//! `Pending` and watched; the first reveal flips it to `Visible` and drops it
//! from the observation set. Nothing ever moves a node back.

use std::collections::BTreeSet;
use tracing::debug;

/// Index into the registry, in registration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealState {
    Pending,
    Visible,
}

/// What caused a node to be revealed. Only used for logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealSource {
    Intersection,
    Reconcile,
    Fallback,
}

#[derive(Debug, Clone, Copy)]
struct Node {
    region: usize,
    state: RevealState,
}

#[derive(Debug, Default)]
pub struct RevealRegistry {
    nodes: Vec<Node>,
    watching: BTreeSet<NodeId>,
}

impl RevealRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, region: usize) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            region,
            state: RevealState::Pending,
        });
        self.watching.insert(id);
        id
    }

    pub fn state(&self, id: NodeId) -> Option<RevealState> {
        self.nodes.get(id.index()).map(|n| n.state)
    }

    pub fn region_of(&self, id: NodeId) -> Option<usize> {
        self.nodes.get(id.index()).map(|n| n.region)
    }

    pub fn is_watching(&self, id: NodeId) -> bool {
        self.watching.contains(&id)
    }

    pub fn watching_count(&self) -> usize {
        self.watching.len()
    }

    pub fn pending(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes
            .iter()
            .enumerate()
            .filter(|(_, n)| n.state == RevealState::Pending)
            .map(|(idx, _)| NodeId(idx))
    }

    /// Returns `true` only for the call that actually flipped the node.
    pub fn reveal(&mut self, id: NodeId, source: RevealSource) -> bool {
        let Some(node) = self.nodes.get_mut(id.index()) else {
            return false;
        };
        self.watching.remove(&id);
        if node.state == RevealState::Visible {
            return false;
        }
        node.state = RevealState::Visible;
        debug!(node = id.0, region = node.region, ?source, "node revealed");
        true
    }

    /// Applies one observer callback batch of `(node, is_intersecting)` pairs.
    /// Returns the nodes that became visible, so the caller can update their
    /// classes and unobserve them.
    pub fn apply_intersections<I>(&mut self, entries: I) -> Vec<NodeId>
    where
        I: IntoIterator<Item = (NodeId, bool)>,
    {
        entries
            .into_iter()
            .filter(|(_, intersecting)| *intersecting)
            .filter_map(|(id, _)| self.reveal(id, RevealSource::Intersection).then_some(id))
            .collect()
    }

    pub fn reveal_all(&mut self, source: RevealSource) -> Vec<NodeId> {
        let pending: Vec<NodeId> = self.pending().collect();
        pending
            .into_iter()
            .filter(|id| self.reveal(*id, source))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reveal_fires_once_across_reentries() {
        let mut registry = RevealRegistry::new();
        let a = registry.register(0);

        let mut transitions = 0;
        for round in 0..5 {
            let intersecting = round % 2 == 0;
            transitions += registry.apply_intersections([(a, intersecting)]).len();
        }

        assert_eq!(transitions, 1);
        assert_eq!(registry.state(a), Some(RevealState::Visible));
    }

    #[test]
    fn leaving_the_viewport_does_not_revert() {
        let mut registry = RevealRegistry::new();
        let a = registry.register(0);

        registry.apply_intersections([(a, true)]);
        registry.apply_intersections([(a, false)]);

        assert_eq!(registry.state(a), Some(RevealState::Visible));
    }

    #[test]
    fn revealed_nodes_leave_the_observation_set() {
        let mut registry = RevealRegistry::new();
        let a = registry.register(0);
        let b = registry.register(1);
        assert_eq!(registry.watching_count(), 2);

        let shown = registry.apply_intersections([(a, true), (b, false)]);

        assert_eq!(shown, vec![a]);
        assert!(!registry.is_watching(a));
        assert!(registry.is_watching(b));
        assert_eq!(registry.pending().collect::<Vec<_>>(), vec![b]);
        assert_eq!(registry.region_of(b), Some(1));
    }

    #[test]
    fn duplicate_entries_in_one_batch_count_once() {
        let mut registry = RevealRegistry::new();
        let a = registry.register(0);

        let shown = registry.apply_intersections([(a, true), (a, true)]);
        assert_eq!(shown, vec![a]);
    }

    #[test]
    fn reveal_all_skips_already_visible() {
        let mut registry = RevealRegistry::new();
        let a = registry.register(0);
        let b = registry.register(0);
        registry.reveal(a, RevealSource::Intersection);

        let shown = registry.reveal_all(RevealSource::Fallback);

        assert_eq!(shown, vec![b]);
        assert_eq!(registry.watching_count(), 0);
        assert_eq!(registry.pending().count(), 0);
    }

    #[test]
    fn unknown_ids_are_ignored() {
        let mut registry = RevealRegistry::new();
        assert!(!registry.reveal(NodeId(7), RevealSource::Reconcile));
        assert_eq!(registry.pending().count(), 0);
        assert_eq!(registry.state(NodeId(7)), None);
    }
}
