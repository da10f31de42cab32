//! Window-level pointer gesture wiring.

use graph::drag::DragController;
use graph::model::Point;
use leptos::ev;
use leptos::prelude::*;

use crate::util::pointer::pointer_point;

/// Attach `pointermove`/`pointerup` listeners to the window while the
/// controller has an active gesture, and detach them when it goes idle.
///
/// Listeners live on the window rather than the element so a fast drag
/// that leaves the element keeps tracking, matching how whiteboard tools
/// behave. The effect re-runs whenever the controller changes state; the
/// `on_cleanup` registered on the active run removes both listeners before
/// the next run or on component disposal.
pub fn use_window_gesture(
    controller: RwSignal<DragController>,
    on_pointer_move: impl Fn(Point) + Clone + 'static,
) {
    Effect::new(move |_| {
        if !controller.get().is_active() {
            return;
        }

        let on_move = on_pointer_move.clone();
        let move_handle = window_event_listener(ev::pointermove, move |ev| {
            on_move(pointer_point(&ev));
        });
        let up_handle = window_event_listener(ev::pointerup, move |_| {
            controller.update(|c| c.release());
        });

        on_cleanup(move || {
            move_handle.remove();
            up_handle.remove();
        });
    });
}
