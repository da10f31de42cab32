//! Scrollable canvas hosting zones, connectors, and topic cards.

use leptos::prelude::*;

use crate::components::topic_card::TopicCard;
use crate::components::zone_region::ZoneRegion;
use crate::state::graph::GraphState;

/// The main canvas surface.
///
/// Renders three layers in z-order: zones at the back, the connector SVG
/// overlay in the middle, topic cards on top. Cards and zones are keyed by
/// id so a position update during a drag patches the existing component
/// instead of recreating it, which would tear down the gesture listeners
/// mid-drag.
#[component]
pub fn GraphCanvas() -> impl IntoView {
    let graph = expect_context::<RwSignal<GraphState>>();

    let extents = Memo::new(move |_| graph.with(GraphState::extents));
    let width = move || format!("{}px", extents.get().0);
    let height = move || format!("{}px", extents.get().1);

    let overlay = Memo::new(move |_| graph.with(GraphState::overlay_svg));
    let node_ids = Memo::new(move |_| graph.with(GraphState::node_ids));
    let zone_ids = Memo::new(move |_| graph.with(GraphState::zone_ids));

    view! {
        <div class="canvas">
            <div class="canvas__surface" style:width=width style:height=height>
                <For each=move || zone_ids.get() key=Clone::clone let:id>
                    <ZoneRegion id=id/>
                </For>

                <div class="canvas__connectors" inner_html=move || overlay.get()></div>

                <For each=move || node_ids.get() key=Clone::clone let:id>
                    <TopicCard id=id/>
                </For>
            </div>
        </div>
    }
}
