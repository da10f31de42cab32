//! Reusable UI components for the roadmap canvas.

pub mod add_node_dialog;
pub mod add_zone_dialog;
pub mod category_manager;
pub mod edit_node_dialog;
pub mod edit_zone_dialog;
pub mod graph_canvas;
pub mod sidebar;
pub mod topic_card;
pub mod zone_region;
