//! Pure geometry: connector anchors, bezier paths, and canvas extents.
//!
//! Everything here is a function of the current entity lists and nothing
//! else. Results are recomputed on every render; nothing is cached, so the
//! same inputs always produce the same output.

#[cfg(test)]
#[path = "geometry_test.rs"]
mod geometry_test;

use crate::consts::{CANVAS_MIN_HEIGHT, CANVAS_MIN_WIDTH, NODE_HEIGHT, NODE_WIDTH};
use crate::model::{TopicNode, Zone};

/// Endpoints of a connector: parent bottom-center to child top-center.
///
/// Anchors use the fixed node footprint and ignore zones and other nodes;
/// connectors may visually cross content.
#[must_use]
pub fn connector_anchors(parent: &TopicNode, child: &TopicNode) -> (f64, f64, f64, f64) {
    let x1 = parent.position.x + NODE_WIDTH / 2.0;
    let y1 = parent.position.y + NODE_HEIGHT;
    let x2 = child.position.x + NODE_WIDTH / 2.0;
    let y2 = child.position.y;
    (x1, y1, x2, y2)
}

/// Cubic bezier path string between two anchor points.
///
/// Both control points sit at the vertical midpoint between the endpoints,
/// each keeping its endpoint's x. The curve is vertical-tangent at both
/// ends and grows diagonal as the endpoints diverge horizontally.
#[must_use]
pub fn bezier_path(x1: f64, y1: f64, x2: f64, y2: f64) -> String {
    let mid_y = (y1 + y2) / 2.0;
    format!("M {x1} {y1} C {x1} {mid_y}, {x2} {mid_y}, {x2} {y2}")
}

/// Size of the scrollable canvas surface.
///
/// The surface always contains every node footprint and zone extent and
/// never shrinks below the floor values. Adding an entity never decreases
/// the result.
#[must_use]
pub fn canvas_extents(nodes: &[TopicNode], zones: &[Zone]) -> (f64, f64) {
    let mut width = CANVAS_MIN_WIDTH;
    let mut height = CANVAS_MIN_HEIGHT;
    for node in nodes {
        width = width.max(node.position.x + NODE_WIDTH);
        height = height.max(node.position.y + NODE_HEIGHT);
    }
    for zone in zones {
        width = width.max(zone.position.x + zone.size.width);
        height = height.max(zone.position.y + zone.size.height);
    }
    (width, height)
}

/// One drawable connector between a parent node and a child node.
#[derive(Debug, Clone, PartialEq)]
pub struct Connector {
    /// Stable key derived from the (parent, child) id pair.
    pub key: String,
    /// SVG path data from the parent's bottom anchor to the child's top
    /// anchor.
    pub path: String,
}

/// The full connector set for the current node list.
///
/// For every node, every entry of `parent_ids` in order yields one
/// connector when the referenced node exists. Dangling ids are skipped
/// silently and duplicate parent references produce duplicate (stacked)
/// connectors.
#[must_use]
pub fn connectors(nodes: &[TopicNode]) -> Vec<Connector> {
    let mut out = Vec::new();
    for node in nodes {
        for parent_id in &node.parent_ids {
            let Some(parent) = nodes.iter().find(|n| &n.id == parent_id) else {
                continue;
            };
            let (x1, y1, x2, y2) = connector_anchors(parent, node);
            out.push(Connector {
                key: format!("{parent_id}-{}", node.id),
                path: bezier_path(x1, y1, x2, y2),
            });
        }
    }
    out
}
