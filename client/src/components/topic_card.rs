//! Draggable card for a single topic node.

use graph::consts::{NODE_HEIGHT, NODE_WIDTH};
use graph::drag::DragController;
use graph::model::EntityId;
use leptos::prelude::*;

use crate::components::edit_node_dialog::EditNodeDialog;
use crate::state::graph::GraphState;
use crate::util::confirm::confirm;
use crate::util::gesture::use_window_gesture;
use crate::util::pointer::{pointer_over_control, pointer_point};

/// One topic card, keyed by id and looked up reactively so the component
/// survives store updates while it is being dragged.
#[component]
pub fn TopicCard(id: EntityId) -> impl IntoView {
    let graph = expect_context::<RwSignal<GraphState>>();
    let id = StoredValue::new(id);

    let node = Memo::new(move |_| id.with_value(|id| graph.with(|g| g.node(id))));
    let controller = RwSignal::new(DragController::new());
    let show_edit = RwSignal::new(false);

    use_window_gesture(controller, move |pointer| {
        let Some(position) = controller.get_untracked().drag_to(pointer) else {
            return;
        };
        if let Some(mut record) = node.get_untracked() {
            record.position = position;
            graph.update(|g| g.update_node(record));
        }
    });

    let on_pointer_down = move |ev: leptos::ev::PointerEvent| {
        if pointer_over_control(&ev) {
            return;
        }
        if let Some(record) = node.get_untracked() {
            ev.prevent_default();
            controller.update(|c| c.press(pointer_point(&ev), record.position));
        }
    };

    let on_delete = move |_| {
        if confirm("Delete this topic?") {
            id.with_value(|id| graph.update(|g| g.delete_node(id)));
        }
    };

    // A missing record renders nothing; the keyed list normally removes the
    // component first, but deletion and the removal can race within a tick.
    move || {
        node.get().map(|record| {
            let color = graph.with(|g| g.category_color(&record.category_id));
            let links = record.links.clone();
            let dialog_node = record.clone();

            view! {
                <div
                    class="topic-card"
                    class:topic-card--dragging=move || controller.get().is_dragging()
                    style:left=format!("{}px", record.position.x)
                    style:top=format!("{}px", record.position.y)
                    style:width=format!("{NODE_WIDTH}px")
                    style:height=format!("{NODE_HEIGHT}px")
                    style:border-left-color=color.clone()
                    on:pointerdown=on_pointer_down
                >
                    <header class="topic-card__header">
                        <span class="topic-card__dot" style:background-color=color.clone()></span>
                        <h3 class="topic-card__title">{record.title.clone()}</h3>
                        <div class="topic-card__actions">
                            <button
                                class="topic-card__btn"
                                title="Edit topic"
                                on:click=move |_| show_edit.set(true)
                            >
                                "\u{270e}"
                            </button>
                            <button class="topic-card__btn" title="Delete topic" on:click=on_delete>
                                "\u{00d7}"
                            </button>
                        </div>
                    </header>

                    <p class="topic-card__description">{record.description.clone()}</p>

                    <Show when=move || !links.is_empty()>
                        <ul class="topic-card__links">
                            {record
                                .links
                                .iter()
                                .enumerate()
                                .map(|(i, href)| {
                                    view! {
                                        <li>
                                            <a href=href.clone() target="_blank" rel="noreferrer">
                                                {format!("Link {}", i + 1)}
                                            </a>
                                        </li>
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </ul>
                    </Show>
                </div>

                <Show when=move || show_edit.get()>
                    <EditNodeDialog
                        node=dialog_node.clone()
                        on_update=Callback::new(move |updated| {
                            graph.update(|g| g.update_node(updated));
                        })
                        on_close=Callback::new(move |()| show_edit.set(false))
                    />
                </Show>
            }
        })
    }
}
