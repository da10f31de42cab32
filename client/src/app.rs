//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::roadmap::RoadmapPage;
use crate::state::graph::GraphState;
use crate::state::ui::UiState;

/// Root application component.
///
/// Provides the shared state contexts and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Provide reactive state contexts for all child components.
    let graph = RwSignal::new(GraphState::default());
    let ui = RwSignal::new(UiState::default());

    provide_context(graph);
    provide_context(ui);

    view! {
        <Stylesheet id="leptos" href="/style.css"/>
        <Title text="Learning Roadmap"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=RoadmapPage/>
            </Routes>
        </Router>
    }
}
