use super::*;
use crate::model::Point;

fn node(id: &str, x: f64, y: f64, parents: &[&str]) -> TopicNode {
    TopicNode {
        id: id.to_owned(),
        title: format!("Topic {id}"),
        description: String::new(),
        category_id: "ml".to_owned(),
        links: Vec::new(),
        position: Point::new(x, y),
        parent_ids: parents.iter().map(|&p| p.to_owned()).collect(),
    }
}

#[test]
fn overlay_is_sized_to_the_canvas_and_ignores_pointer_events() {
    let svg = overlay_svg(&[], 2000.0, 1500.0);
    assert!(svg.starts_with("<svg "));
    assert!(svg.ends_with("</svg>"));
    assert!(svg.contains("width=\"2000\""));
    assert!(svg.contains("height=\"1500\""));
    assert!(svg.contains("pointer-events:none"));
}

#[test]
fn overlay_defines_the_arrowhead_marker_once() {
    let nodes = vec![node("1", 0.0, 0.0, &[]), node("2", 0.0, 200.0, &["1"])];
    let svg = overlay_svg(&nodes, 2000.0, 1500.0);
    assert_eq!(svg.matches("<marker id=\"arrowhead\"").count(), 1);
    assert!(svg.contains("marker-end=\"url(#arrowhead)\""));
}

#[test]
fn overlay_emits_one_path_per_connector() {
    let nodes = vec![
        node("1", 100.0, 50.0, &[]),
        node("2", 300.0, 150.0, &["1"]),
        node("3", 300.0, 280.0, &["2", "1", "missing"]),
    ];
    let svg = overlay_svg(&nodes, 2000.0, 1500.0);
    assert_eq!(svg.matches("<path d=\"M ").count(), 3);
}

#[test]
fn overlay_with_no_edges_has_no_paths() {
    let nodes = vec![node("1", 100.0, 50.0, &[])];
    let svg = overlay_svg(&nodes, 2000.0, 1500.0);
    assert_eq!(svg.matches("<path d=\"M ").count(), 0);
}

#[test]
fn overlay_is_idempotent_for_the_same_inputs() {
    let nodes = vec![node("1", 0.0, 0.0, &[]), node("2", 0.0, 200.0, &["1"])];
    assert_eq!(overlay_svg(&nodes, 2000.0, 1500.0), overlay_svg(&nodes, 2000.0, 1500.0));
}
