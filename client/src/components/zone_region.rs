//! Draggable, resizable background zone.

use graph::drag::DragController;
use graph::model::EntityId;
use leptos::prelude::*;

use crate::components::edit_zone_dialog::EditZoneDialog;
use crate::state::graph::GraphState;
use crate::util::confirm::confirm;
use crate::util::gesture::use_window_gesture;
use crate::util::pointer::{pointer_over_control, pointer_point};

/// One labeled zone, rendered behind the cards. The body drags the zone;
/// the corner handle resizes it. Both gestures share one controller so
/// they are mutually exclusive.
#[component]
pub fn ZoneRegion(id: EntityId) -> impl IntoView {
    let graph = expect_context::<RwSignal<GraphState>>();
    let id = StoredValue::new(id);

    let zone = Memo::new(move |_| id.with_value(|id| graph.with(|g| g.zone(id))));
    let controller = RwSignal::new(DragController::new());
    let show_edit = RwSignal::new(false);

    use_window_gesture(controller, move |pointer| {
        let active = controller.get_untracked();
        let Some(mut record) = zone.get_untracked() else {
            return;
        };
        if let Some(position) = active.drag_to(pointer) {
            record.position = position;
        } else if let Some(size) = active.resize_to(pointer) {
            record.size = size;
        } else {
            return;
        }
        graph.update(|g| g.update_zone(record));
    });

    let on_pointer_down = move |ev: leptos::ev::PointerEvent| {
        if pointer_over_control(&ev) {
            return;
        }
        if let Some(record) = zone.get_untracked() {
            ev.prevent_default();
            controller.update(|c| c.press(pointer_point(&ev), record.position));
        }
    };

    let on_resize_down = move |ev: leptos::ev::PointerEvent| {
        ev.stop_propagation();
        ev.prevent_default();
        if let Some(record) = zone.get_untracked() {
            controller.update(|c| c.press_resize(record.position));
        }
    };

    let on_delete = move |_| {
        if confirm("Delete this zone?") {
            id.with_value(|id| graph.update(|g| g.delete_zone(id)));
        }
    };

    move || {
        zone.get().map(|record| {
            let dialog_zone = record.clone();

            view! {
                <div
                    class="zone"
                    class:zone--active=move || controller.get().is_active()
                    style:left=format!("{}px", record.position.x)
                    style:top=format!("{}px", record.position.y)
                    style:width=format!("{}px", record.size.width)
                    style:height=format!("{}px", record.size.height)
                    style:background-color=record.color.clone()
                    style:border-color=record.border_color()
                    on:pointerdown=on_pointer_down
                >
                    <header class="zone__header">
                        <span class="zone__name">{record.name.clone()}</span>
                        <div class="zone__actions">
                            <button
                                class="zone__btn"
                                title="Edit zone"
                                on:click=move |_| show_edit.set(true)
                            >
                                "\u{270e}"
                            </button>
                            <button class="zone__btn" title="Delete zone" on:click=on_delete>
                                "\u{00d7}"
                            </button>
                        </div>
                    </header>

                    <div class="zone__resize-handle" on:pointerdown=on_resize_down></div>
                </div>

                <Show when=move || show_edit.get()>
                    <EditZoneDialog
                        zone=dialog_zone.clone()
                        on_update=Callback::new(move |updated| {
                            graph.update(|g| g.update_zone(updated));
                        })
                        on_close=Callback::new(move |()| show_edit.set(false))
                    />
                </Show>
            }
        })
    }
}
