//! Modal dialog for editing an existing topic node.

use graph::model::TopicNode;
use leptos::prelude::*;

use crate::state::graph::GraphState;
use crate::util::rows;

/// Edit-topic dialog, pre-filled from the current record. Position and
/// parent links are left untouched; only the descriptive fields change.
#[component]
pub fn EditNodeDialog(
    node: TopicNode,
    on_update: Callback<TopicNode>,
    on_close: Callback<()>,
) -> impl IntoView {
    let graph = expect_context::<RwSignal<GraphState>>();

    let original = StoredValue::new(node.clone());
    let title = RwSignal::new(node.title);
    let description = RwSignal::new(node.description);
    let category_id = RwSignal::new(node.category_id);
    let links = RwSignal::new(if node.links.is_empty() {
        vec![String::new()]
    } else {
        node.links
    });

    let set_link = move |index: usize, value: String| {
        links.update(|list| rows::set_row(list, index, value));
    };
    let remove_link = move |index: usize| {
        links.update(|list| rows::remove_row(list, index));
    };

    let submit = Callback::new(move |()| {
        let name = title.get();
        if name.trim().is_empty() {
            return;
        }
        let mut updated = original.get_value();
        updated.title = name.trim().to_owned();
        updated.description = description.get().trim().to_owned();
        updated.category_id = category_id.get();
        updated.links = links.get().into_iter().filter(|l| !l.trim().is_empty()).collect();
        on_update.run(updated);
        on_close.run(());
    });

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Edit Topic"</h2>

                <label class="dialog__label">
                    "Title"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || title.get()
                        on:input=move |ev| title.set(event_target_value(&ev))
                    />
                </label>

                <label class="dialog__label">
                    "Description"
                    <textarea
                        class="dialog__input"
                        prop:value=move || description.get()
                        on:input=move |ev| description.set(event_target_value(&ev))
                    ></textarea>
                </label>

                <label class="dialog__label">
                    "Category"
                    <select
                        class="dialog__input"
                        on:change=move |ev| category_id.set(event_target_value(&ev))
                    >
                        <For
                            each=move || graph.with(GraphState::categories)
                            key=|c| c.id.clone()
                            let:category
                        >
                            {
                                let value = category.id.clone();
                                let selected_id = category.id.clone();
                                view! {
                                    <option
                                        value=value
                                        selected=move || category_id.get() == selected_id
                                    >
                                        {category.name.clone()}
                                    </option>
                                }
                            }
                        </For>
                    </select>
                </label>

                <fieldset class="dialog__fieldset">
                    <legend>"Links"</legend>
                    // Rows are keyed by index so the inputs persist (and keep
                    // focus) while their values change under them.
                    <For
                        each={move || (0..links.with(Vec::len)).collect::<Vec<_>>()}
                        key=|index| *index
                        let:index
                    >
                        <div class="dialog__link-row">
                            <input
                                class="dialog__input"
                                type="url"
                                placeholder="https://..."
                                prop:value=move || {
                                    links.with(|list| list.get(index).cloned().unwrap_or_default())
                                }
                                on:input=move |ev| set_link(index, event_target_value(&ev))
                            />
                            <Show when=move || links.with(|list| list.len() > 1)>
                                <button
                                    class="btn btn--small"
                                    title="Remove link"
                                    on:click=move |_| remove_link(index)
                                >
                                    "\u{00d7}"
                                </button>
                            </Show>
                        </div>
                    </For>
                    <button
                        class="btn btn--small"
                        on:click=move |_| links.update(|list| list.push(String::new()))
                    >
                        "+ Add link"
                    </button>
                </fieldset>

                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_close.run(())>
                        "Cancel"
                    </button>
                    <button class="btn btn--primary" on:click=move |_| submit.run(())>
                        "Save"
                    </button>
                </div>
            </div>
        </div>
    }
}
