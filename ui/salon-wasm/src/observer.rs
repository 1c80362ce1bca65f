//! Scroll-triggered reveal.
//!
//! Elements are resolved from the configured regions once, tagged with
//! `data-reveal-id` and tracked in a `RevealRegistry`. Each region gets its
//! own `IntersectionObserver` with that region's threshold and margin.
//! Without observer support every node is revealed up front.

use crate::dom::{self, js_err};
use anyhow::Result;
use cs_page_config::{PENDING_CLASS, RevealRegion, VISIBLE_CLASS};
use cs_view_state::{NodeId, RevealRegistry, RevealSource, Viewport};
use js_sys::Array;
use std::cell::RefCell;
use std::rc::Rc;
use tracing::{debug, info, warn};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

const NODE_ATTR: &str = "data-reveal-id";

pub struct VisibilityObserver {
    registry: RevealRegistry,
    elements: Vec<Element>,
    regions: Vec<RevealRegion>,
    observers: Vec<Option<IntersectionObserver>>,
}

impl VisibilityObserver {
    /// Resolves the regions into typed node handles. An element matched by
    /// more than one region belongs to the first.
    pub fn bind(regions: &[RevealRegion]) -> Self {
        let mut registry = RevealRegistry::new();
        let mut elements = Vec::new();

        for (idx, region) in regions.iter().enumerate() {
            for el in dom::query_all(&region.selector) {
                if el.has_attribute(NODE_ATTR) {
                    continue;
                }
                let id = registry.register(idx);
                let _ = el.set_attribute(NODE_ATTR, &id.0.to_string());
                if region.mark_pending {
                    dom::add_class(&el, PENDING_CLASS);
                }
                elements.push(el);
            }
        }

        debug!(nodes = elements.len(), regions = regions.len(), "reveal nodes bound");
        Self {
            registry,
            elements,
            regions: regions.to_vec(),
            observers: vec![None; regions.len()],
        }
    }

    pub fn node_count(&self) -> usize {
        self.elements.len()
    }

    fn element(&self, id: NodeId) -> Option<&Element> {
        self.elements.get(id.index())
    }

    fn node_of(el: &Element) -> Option<NodeId> {
        el.get_attribute(NODE_ATTR)?.parse().ok().map(NodeId)
    }

    /// Pushes freshly revealed nodes to the DOM and stops observing them.
    fn apply(&self, revealed: &[NodeId]) {
        for id in revealed {
            let Some(el) = self.element(*id) else {
                continue;
            };
            dom::remove_class(el, PENDING_CLASS);
            dom::add_class(el, VISIBLE_CLASS);
            let observer = self
                .registry
                .region_of(*id)
                .and_then(|r| self.observers.get(r))
                .and_then(Option::as_ref);
            if let Some(observer) = observer {
                observer.unobserve(el);
            }
        }
    }

    fn on_entries(&mut self, entries: Array) {
        let batch: Vec<(NodeId, bool)> = entries
            .iter()
            .filter_map(|e| e.dyn_into::<IntersectionObserverEntry>().ok())
            .filter_map(|entry| Some((Self::node_of(&entry.target())?, entry.is_intersecting())))
            .collect();
        let revealed = self.registry.apply_intersections(batch);
        self.apply(&revealed);
    }

    pub fn reveal_all(&mut self, source: RevealSource) -> usize {
        let revealed = self.registry.reveal_all(source);
        self.apply(&revealed);
        revealed.len()
    }

    /// Reveals pending nodes already inside the viewport after a scroll jump.
    pub fn reconcile(&mut self, viewport: Viewport) -> usize {
        let scroll = dom::scroll_y();
        let elements = &self.elements;
        let revealed = cs_view_state::reconcile(&mut self.registry, viewport, |id| {
            elements.get(id.index()).map(|el| dom::rect(el).top + scroll)
        });
        self.apply(&revealed);
        revealed.len()
    }
}

fn observer_supported() -> bool {
    js_sys::Reflect::has(&dom::window(), &JsValue::from_str("IntersectionObserver"))
        .unwrap_or(false)
}

fn build_observer(
    shared: &Rc<RefCell<VisibilityObserver>>,
    region: &RevealRegion,
) -> Result<IntersectionObserver> {
    let handle = shared.clone();
    let cb = Closure::wrap(Box::new(move |entries: Array, _: IntersectionObserver| {
        handle.borrow_mut().on_entries(entries);
    }) as Box<dyn FnMut(Array, IntersectionObserver)>);

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(region.threshold));
    init.set_root_margin(&region.root_margin());

    let observer =
        IntersectionObserver::new_with_options(cb.as_ref().unchecked_ref(), &init).map_err(js_err)?;
    cb.forget();
    Ok(observer)
}

/// Starts watching every bound node. Falls back to revealing everything when
/// the platform has no `IntersectionObserver` or it refuses the options.
pub fn watch(shared: &Rc<RefCell<VisibilityObserver>>) -> Result<()> {
    if !observer_supported() {
        let shown = shared.borrow_mut().reveal_all(RevealSource::Fallback);
        warn!(shown, "IntersectionObserver unavailable, revealing all nodes");
        return Ok(());
    }

    let regions = shared.borrow().regions.clone();
    let mut observers = Vec::with_capacity(regions.len());
    for region in &regions {
        match build_observer(shared, region) {
            Ok(observer) => observers.push(Some(observer)),
            Err(err) => {
                warn!(selector = %region.selector, "observer setup failed: {err:#}");
                observers.push(None);
            }
        }
    }

    let mut this = shared.borrow_mut();
    this.observers = observers;

    let mut orphans = Vec::new();
    for (idx, el) in this.elements.iter().enumerate() {
        let id = NodeId(idx);
        let observer = this
            .registry
            .region_of(id)
            .and_then(|r| this.observers.get(r))
            .and_then(Option::as_ref);
        match observer {
            Some(observer) => observer.observe(el),
            None => orphans.push(id),
        }
    }

    // Nodes whose region has no observer would otherwise stay hidden forever.
    for id in &orphans {
        this.registry.reveal(*id, RevealSource::Fallback);
    }
    this.apply(&orphans);

    info!(
        nodes = this.node_count(),
        watching = this.registry.watching_count(),
        "reveal observer armed"
    );
    Ok(())
}
