use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

use super::DomElement;
use crate::domain::geometry::Rect;

impl DomElement for HtmlElement {
    fn bounding_rect(&self) -> Rect {
        let r = self.get_bounding_client_rect();
        Rect::new(r.left() as f32, r.top() as f32, r.width() as f32, r.height() as f32)
    }

    fn query_all(&self, selector: &str) -> Vec<Self> {
        let list = match self.query_selector_all(selector) {
            Ok(list) => list,
            Err(_) => {
                engine_warn!("invalid selector: {}", selector);
                return Vec::new();
            }
        };
        (0..list.length())
            .filter_map(|i| list.get(i))
            .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
            .collect()
    }

    fn set_style(&self, property: &str, value: &str) {
        if self.style().set_property(property, value).is_err() {
            engine_warn!("failed to set style {}: {}", property, value);
        }
    }
}
