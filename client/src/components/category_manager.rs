//! Modal dialog for editing the category list.

use graph::model::Category;
use leptos::prelude::*;

use crate::state::graph::GraphState;
use crate::util::rows;

/// Category manager. Edits a local copy of the list and only commits it
/// on Save; Cancel discards every change. The last category cannot be
/// deleted so every topic always has a color to fall back on.
#[component]
pub fn CategoryManager(on_save: Callback<Vec<Category>>, on_close: Callback<()>) -> impl IntoView {
    let graph = expect_context::<RwSignal<GraphState>>();

    let edited = RwSignal::new(graph.with_untracked(GraphState::categories));

    let set_name = move |index: usize, value: String| {
        edited.update(|list| {
            if let Some(category) = list.get_mut(index) {
                category.name = value;
            }
        });
    };

    let set_color = move |index: usize, value: String| {
        edited.update(|list| {
            if let Some(category) = list.get_mut(index) {
                category.color = value;
            }
        });
    };

    let remove = move |index: usize| {
        edited.update(|list| rows::remove_row(list, index));
    };

    let add = move |_| {
        edited.update(|list| {
            list.push(Category {
                id: uuid::Uuid::new_v4().to_string(),
                name: "New category".to_owned(),
                color: "#6366f1".to_owned(),
            });
        });
    };

    let save = move |_| {
        on_save.run(edited.get());
        on_close.run(());
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div class="dialog dialog--wide" on:click=move |ev| ev.stop_propagation()>
                <h2>"Manage Categories"</h2>

                <div class="category-manager__rows">
                    // Rows are keyed by index so the inputs persist (and keep
                    // focus) while their values change under them.
                    <For
                        each={move || (0..edited.with(Vec::len)).collect::<Vec<_>>()}
                        key=|index| *index
                        let:index
                    >
                        <div class="category-manager__row">
                            <input
                                class="dialog__input dialog__input--color"
                                type="color"
                                prop:value=move || {
                                    edited.with(|list| {
                                        list.get(index).map(|c| c.color.clone()).unwrap_or_default()
                                    })
                                }
                                on:input=move |ev| set_color(index, event_target_value(&ev))
                            />
                            <input
                                class="dialog__input"
                                type="text"
                                prop:value=move || {
                                    edited.with(|list| {
                                        list.get(index).map(|c| c.name.clone()).unwrap_or_default()
                                    })
                                }
                                on:input=move |ev| set_name(index, event_target_value(&ev))
                            />
                            <button
                                class="btn btn--small"
                                disabled=move || edited.with(|list| list.len() <= 1)
                                title="Delete category"
                                on:click=move |_| remove(index)
                            >
                                "\u{00d7}"
                            </button>
                        </div>
                    </For>
                </div>

                <button class="btn btn--small" on:click=add>
                    "+ Add category"
                </button>

                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_close.run(())>
                        "Cancel"
                    </button>
                    <button class="btn btn--primary" on:click=save>
                        "Save"
                    </button>
                </div>
            </div>
        </div>
    }
}
