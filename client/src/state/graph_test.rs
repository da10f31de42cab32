use graph::model::{Category, Point, Size, Zone};

use super::*;

fn sample_node(id: &str) -> TopicNode {
    node(id, "Sample", "", "ml", &[], 10.0, 20.0, &[])
}

fn sample_zone(id: &str) -> Zone {
    Zone {
        id: id.to_owned(),
        name: "Area".to_owned(),
        position: Point { x: 100.0, y: 100.0 },
        size: Size { width: 400.0, height: 300.0 },
        color: "#e0e7ff".to_owned(),
    }
}

// =============================================================
// Seed data
// =============================================================

#[test]
fn default_state_seeds_seven_nodes() {
    let state = GraphState::default();
    assert_eq!(state.node_ids().len(), 7);
    assert!(state.zone_ids().is_empty());
}

#[test]
fn default_state_seeds_four_categories() {
    let state = GraphState::default();
    let ids: Vec<_> = state.categories().iter().map(|c| c.id.clone()).collect();
    assert_eq!(ids, ["math", "ml", "dl", "nlp"]);
}

#[test]
fn seed_attention_node_position_matches_roadmap() {
    let state = GraphState::default();
    let attention = state.node("6").unwrap();
    assert_eq!(attention.position, Point { x: 300.0, y: 670.0 });
    assert_eq!(attention.parent_ids, ["5"]);
}

#[test]
fn seed_neural_networks_has_two_parents() {
    let state = GraphState::default();
    let nn = state.node("3").unwrap();
    assert_eq!(nn.parent_ids, ["2", "1"]);
}

// =============================================================
// Node mutations
// =============================================================

#[test]
fn add_node_appends_to_id_list() {
    let mut state = GraphState::empty();
    state.add_node(sample_node("a"));
    state.add_node(sample_node("b"));
    assert_eq!(state.node_ids(), ["a", "b"]);
}

#[test]
fn update_node_moves_position_in_place() {
    let mut state = GraphState::empty();
    state.add_node(sample_node("a"));
    state.add_node(sample_node("b"));

    let mut moved = sample_node("a");
    moved.position = Point { x: 240.0, y: 290.0 };
    state.update_node(moved);

    assert_eq!(state.node("a").unwrap().position, Point { x: 240.0, y: 290.0 });
    assert_eq!(state.node_ids(), ["a", "b"]);
}

#[test]
fn update_unknown_node_is_ignored() {
    let mut state = GraphState::empty();
    state.update_node(sample_node("ghost"));
    assert!(state.node_ids().is_empty());
}

#[test]
fn delete_node_leaves_children_with_dangling_parent() {
    let mut state = GraphState::empty();
    state.add_node(sample_node("a"));
    let mut child = sample_node("b");
    child.parent_ids = vec!["a".to_owned()];
    state.add_node(child);

    state.delete_node("a");

    assert_eq!(state.node_ids(), ["b"]);
    assert_eq!(state.node("b").unwrap().parent_ids, ["a"]);
}

// =============================================================
// Zone mutations
// =============================================================

#[test]
fn zone_lifecycle_add_update_delete() {
    let mut state = GraphState::empty();
    state.add_zone(sample_zone("z1"));

    let mut resized = sample_zone("z1");
    resized.size = Size { width: 500.0, height: 350.0 };
    state.update_zone(resized);
    assert_eq!(state.zone("z1").unwrap().size.width, 500.0);

    state.delete_zone("z1");
    assert!(state.zone_ids().is_empty());
}

// =============================================================
// Categories
// =============================================================

#[test]
fn update_categories_replaces_the_full_list() {
    let mut state = GraphState::empty();
    state.update_categories(vec![
        Category { id: "x".to_owned(), name: "X".to_owned(), color: "#111111".to_owned() },
        Category { id: "y".to_owned(), name: "Y".to_owned(), color: "#222222".to_owned() },
    ]);
    assert_eq!(state.categories().len(), 2);
    assert_eq!(state.category_color("y"), "#222222");
    assert!(state.can_remove_category());
}

#[test]
fn empty_state_cannot_remove_last_category() {
    let state = GraphState::empty();
    assert!(!state.can_remove_category());
}

#[test]
fn category_color_falls_back_for_unknown_id() {
    let state = GraphState::empty();
    assert_eq!(state.category_color("missing"), graph::consts::DEFAULT_CATEGORY_COLOR);
}

// =============================================================
// Derived geometry
// =============================================================

#[test]
fn extents_of_empty_state_hit_the_floor() {
    let state = GraphState::empty();
    assert_eq!(state.extents(), (2000.0, 1500.0));
}

#[test]
fn overlay_svg_for_seed_contains_connectors() {
    let state = GraphState::default();
    let markup = state.overlay_svg();
    assert!(markup.starts_with("<svg"));
    // Node "3" has two parents, so the seed has one path per edge: 7.
    assert_eq!(markup.matches("<path").count(), 7);
}
