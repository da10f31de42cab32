//! Collapsible sidebar with editing actions and the category legend.

use leptos::prelude::*;

use crate::state::graph::GraphState;
use crate::state::ui::UiState;

/// Sidebar panel. Opens the add/manage dialogs via [`UiState`] flags and
/// shows the category legend read from the graph store.
#[component]
pub fn Sidebar() -> impl IntoView {
    let graph = expect_context::<RwSignal<GraphState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let open = move || ui.with(|u| u.sidebar_open);
    let toggle = move |_| ui.update(|u| u.sidebar_open = !u.sidebar_open);

    let categories = Memo::new(move |_| graph.with(GraphState::categories));

    view! {
        <button
            class="sidebar-toggle"
            title=move || if open() { "Collapse sidebar" } else { "Expand sidebar" }
            on:click=toggle
        >
            {move || if open() { "\u{2039}" } else { "\u{203a}" }}
        </button>

        <Show when=open>
            <aside class="sidebar">
                <h1 class="sidebar__title">"Learning Roadmap"</h1>

                <div class="sidebar__actions">
                    <button
                        class="btn btn--primary"
                        on:click=move |_| ui.update(|u| u.show_add_node_dialog = true)
                    >
                        "+ Add Topic"
                    </button>
                    <button
                        class="btn"
                        on:click=move |_| ui.update(|u| u.show_add_zone_dialog = true)
                    >
                        "+ Add Zone"
                    </button>
                    <button
                        class="btn"
                        on:click=move |_| ui.update(|u| u.show_category_manager = true)
                    >
                        "Manage Categories"
                    </button>
                </div>

                <h2 class="sidebar__heading">"Categories"</h2>
                <ul class="sidebar__legend">
                    <For each=move || categories.get() key=|c| c.id.clone() let:category>
                        <li class="sidebar__legend-item">
                            <span
                                class="sidebar__swatch"
                                style:background-color=category.color.clone()
                            ></span>
                            {category.name.clone()}
                        </li>
                    </For>
                </ul>

                <p class="sidebar__tip">
                    "Drag cards to rearrange. Drag a zone's corner handle to resize it."
                </p>
            </aside>
        </Show>
    }
}
