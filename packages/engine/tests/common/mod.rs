use std::cell::{Cell, RefCell};
use std::rc::Rc;

use tumble_engine::dom::DomElement;
use tumble_engine::domain::Rect;

/// Flat in-memory element: one level of `.object` children.
#[derive(Clone)]
pub struct FakeElement {
    class: &'static str,
    rect: Rc<Cell<Rect>>,
    children: Rc<RefCell<Vec<FakeElement>>>,
    transform: Rc<RefCell<Option<String>>>,
}

impl FakeElement {
    pub fn new(class: &'static str, width: f32, height: f32) -> Self {
        Self {
            class,
            rect: Rc::new(Cell::new(Rect::new(0.0, 0.0, width, height))),
            children: Rc::new(RefCell::new(Vec::new())),
            transform: Rc::new(RefCell::new(None)),
        }
    }

    pub fn container_with(width: f32, height: f32, objects: &[(f32, f32)]) -> Self {
        let container = Self::new("object-container", width, height);
        for &(w, h) in objects {
            container.children.borrow_mut().push(Self::new("object", w, h));
        }
        container
    }

    pub fn transform_of(&self, idx: usize) -> Option<String> {
        self.children.borrow()[idx].transform.borrow().clone()
    }
}

impl DomElement for FakeElement {
    fn bounding_rect(&self) -> Rect {
        self.rect.get()
    }

    fn query_all(&self, selector: &str) -> Vec<Self> {
        let class = selector.trim_start_matches('.');
        self.children.borrow().iter().filter(|c| c.class == class).cloned().collect()
    }

    fn set_style(&self, property: &str, value: &str) {
        if property == "transform" {
            *self.transform.borrow_mut() = Some(value.to_string());
        }
    }
}
