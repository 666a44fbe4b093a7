//! Body registry: body id -> bound DOM element and its measured size.
//!
//! Walls are never registered, so a failed lookup means "not renderable".

use std::collections::HashMap;

use crate::domain::geometry::ElementSize;
use crate::rigid_body::BodyHandle;

/// One element driven by one dynamic body.
#[derive(Clone, Debug)]
pub struct Binding<E> {
    pub element: E,
    pub width: f32,
    pub height: f32,
}

impl<E> Binding<E> {
    pub fn new(element: E, size: ElementSize) -> Self {
        Self {
            element,
            width: size.width,
            height: size.height,
        }
    }

    pub fn size(&self) -> ElementSize {
        ElementSize { width: self.width, height: self.height }
    }
}

pub struct BodyRegistry<E> {
    bindings: HashMap<BodyHandle, Binding<E>>,
}

impl<E> BodyRegistry<E> {
    pub fn new() -> Self {
        Self { bindings: HashMap::new() }
    }

    pub fn bind(&mut self, body: BodyHandle, binding: Binding<E>) {
        self.bindings.insert(body, binding);
    }

    #[inline]
    pub fn get(&self, body: BodyHandle) -> Option<&Binding<E>> {
        self.bindings.get(&body)
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    pub fn clear(&mut self) {
        self.bindings.clear();
    }
}

impl<E> Default for BodyRegistry<E> {
    fn default() -> Self {
        Self::new()
    }
}
