//! The single roadmap page: sidebar, canvas, and the global dialogs.

use leptos::prelude::*;

use crate::components::add_node_dialog::AddNodeDialog;
use crate::components::add_zone_dialog::AddZoneDialog;
use crate::components::category_manager::CategoryManager;
use crate::components::graph_canvas::GraphCanvas;
use crate::components::sidebar::Sidebar;
use crate::state::graph::GraphState;
use crate::state::ui::UiState;

/// Roadmap page. The canvas fills the viewport next to the sidebar; the
/// add/manage dialogs are mounted here so they overlay the whole page.
#[component]
pub fn RoadmapPage() -> impl IntoView {
    let graph = expect_context::<RwSignal<GraphState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    view! {
        <div class="roadmap-page">
            <Sidebar/>

            <main class="roadmap-page__main">
                <GraphCanvas/>
            </main>

            <Show when=move || ui.with(|u| u.show_add_node_dialog)>
                <AddNodeDialog
                    on_add=Callback::new(move |node| graph.update(|g| g.add_node(node)))
                    on_close=Callback::new(move |()| {
                        ui.update(|u| u.show_add_node_dialog = false);
                    })
                />
            </Show>

            <Show when=move || ui.with(|u| u.show_add_zone_dialog)>
                <AddZoneDialog
                    on_add=Callback::new(move |zone| graph.update(|g| g.add_zone(zone)))
                    on_close=Callback::new(move |()| {
                        ui.update(|u| u.show_add_zone_dialog = false);
                    })
                />
            </Show>

            <Show when=move || ui.with(|u| u.show_category_manager)>
                <CategoryManager
                    on_save=Callback::new(move |categories| {
                        graph.update(|g| g.update_categories(categories));
                    })
                    on_close=Callback::new(move |()| {
                        ui.update(|u| u.show_category_manager = false);
                    })
                />
            </Show>
        </div>
    }
}
