//! Pointer event helpers.

use graph::model::Point;
use wasm_bindgen::JsCast;
use web_sys::PointerEvent;

/// Viewport coordinates of a pointer event.
#[must_use]
pub fn pointer_point(ev: &PointerEvent) -> Point {
    Point { x: f64::from(ev.client_x()), y: f64::from(ev.client_y()) }
}

/// True when the pointer went down on an interactive control.
///
/// Card and zone surfaces start drags on pointerdown; buttons and links
/// inside them must keep their click behavior instead.
#[must_use]
pub fn pointer_over_control(ev: &PointerEvent) -> bool {
    ev.target()
        .and_then(|target| target.dyn_into::<web_sys::Element>().ok())
        .is_some_and(|el| el.closest("button, a").is_ok_and(|found| found.is_some()))
}
