use cursor_core::{is_actionable, HoverTarget, RawInput};
use glam::Vec2;
use wasm_bindgen::JsCast;
use web_sys as web;

/// DOM element seen through the engine's hover capability query.
pub struct DomTarget(pub web::Element);

impl HoverTarget for DomTarget {
    fn tag_name(&self) -> String {
        self.0.tag_name()
    }

    fn parent(&self) -> Option<Self> {
        self.0.parent_element().map(DomTarget)
    }
}

#[inline]
pub fn mouse_point(ev: &web::MouseEvent) -> Vec2 {
    Vec2::new(ev.client_x() as f32, ev.client_y() as f32)
}

// ---------------- Touch helpers ----------------
pub fn touch_points(list: &web::TouchList) -> Vec<Vec2> {
    (0..list.length())
        .filter_map(|i| list.get(i))
        .map(|t| Vec2::new(t.client_x() as f32, t.client_y() as f32))
        .collect()
}

/// Hover sample for a `mouseover`; a target that is not an element counts as "not hovering".
pub fn hover_sample(ev: &web::Event) -> RawInput<'static> {
    let target = ev
        .target()
        .and_then(|t| t.dyn_into::<web::Element>().ok())
        .map(DomTarget);
    RawInput::Over {
        actionable: is_actionable(target.as_ref()),
    }
}
