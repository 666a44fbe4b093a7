//! DOM access behind a trait
//!
//! The session only measures boxes, finds `.object` children and writes
//! inline styles. `web` implements that for `web_sys::HtmlElement`; tests
//! use an in-memory element.

use crate::domain::geometry::Rect;

#[cfg(target_arch = "wasm32")]
pub mod web;

pub trait DomElement: Clone {
    /// Border box relative to the viewport.
    fn bounding_rect(&self) -> Rect;

    /// Descendants matching `selector`, in document order.
    fn query_all(&self, selector: &str) -> Vec<Self>;

    fn set_style(&self, property: &str, value: &str);
}

/// One-time style prep so per-frame updates only touch `transform`.
pub fn prepare_for_transforms<E: DomElement>(element: &E) {
    element.set_style("will-change", "transform");
    element.set_style("position", "absolute");
    element.set_style("left", "0");
    element.set_style("top", "0");
}
