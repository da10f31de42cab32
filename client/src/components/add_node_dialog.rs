//! Modal dialog for creating a topic node.

use graph::model::{Point, TopicNode};
use leptos::prelude::*;

use crate::state::graph::GraphState;
use crate::util::rows;

/// Create-topic dialog. New topics land at a fixed spot near the top of
/// the canvas; the user drags them into place afterwards.
#[component]
pub fn AddNodeDialog(on_add: Callback<TopicNode>, on_close: Callback<()>) -> impl IntoView {
    let graph = expect_context::<RwSignal<GraphState>>();

    let title = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let category_id = RwSignal::new(
        graph.with_untracked(|g| g.categories().first().map(|c| c.id.clone()).unwrap_or_default()),
    );
    let links = RwSignal::new(vec![String::new()]);
    let selected_parents = RwSignal::new(Vec::<String>::new());

    let set_link = move |index: usize, value: String| {
        links.update(|list| rows::set_row(list, index, value));
    };
    let remove_link = move |index: usize| {
        links.update(|list| rows::remove_row(list, index));
    };

    let toggle_parent = move |id: String| {
        selected_parents.update(|parents| {
            if let Some(pos) = parents.iter().position(|p| *p == id) {
                parents.remove(pos);
            } else {
                parents.push(id);
            }
        });
    };

    let submit = Callback::new(move |()| {
        let name = title.get();
        if name.trim().is_empty() {
            return;
        }
        let node = TopicNode {
            id: uuid::Uuid::new_v4().to_string(),
            title: name.trim().to_owned(),
            description: description.get().trim().to_owned(),
            category_id: category_id.get(),
            links: links.get().into_iter().filter(|l| !l.trim().is_empty()).collect(),
            position: Point { x: 300.0, y: 50.0 },
            parent_ids: selected_parents.get(),
        };
        on_add.run(node);
        on_close.run(());
    });

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Add Topic"</h2>

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

                <fieldset class="dialog__fieldset">
                    <legend>"Parent topics"</legend>
                    <For
                        each=move || graph.with(GraphState::nodes)
                        key=|n| n.id.clone()
                        let:candidate
                    >
                        {
                            let candidate_id = candidate.id.clone();
                            let checked_id = candidate.id.clone();
                            view! {
                                <label class="dialog__check">
                                    <input
                                        type="checkbox"
                                        prop:checked=move || {
                                            selected_parents.with(|p| p.contains(&checked_id))
                                        }
                                        on:change=move |_| toggle_parent(candidate_id.clone())
                                    />
                                    {candidate.title.clone()}
                                </label>
                            }
                        }
                    </For>
                </fieldset>

                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_close.run(())>
                        "Cancel"
                    </button>
                    <button class="btn btn--primary" on:click=move |_| submit.run(())>
                        "Add"
                    </button>
                </div>
            </div>
        </div>
    }
}
