//! Entity model: topic nodes, zones, categories, and the in-memory store.
//!
//! This module defines the records that describe what is on the canvas and
//! the runtime store that owns the canonical lists (`GraphStore`). Records
//! serialize with camelCase field names, matching the application's wire
//! shape. All mutations replace whole records by id; callers never send
//! deltas.
//!
//! References between records are soft: a node's `parent_ids` and
//! `category_id` are plain identifiers resolved by lookup at render time,
//! and a missing target is a normal branch, not an error.

#[cfg(test)]
#[path = "model_test.rs"]
mod model_test;

use serde::{Deserialize, Serialize};

use crate::consts::DEFAULT_CATEGORY_COLOR;

/// Unique identifier for a node, zone, or category.
///
/// Ids are caller-supplied, unique for the lifetime of the process, and
/// never reused after deletion.
pub type EntityId = String;

/// A point in canvas pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A width/height pair in canvas pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// A learning-topic node on the canvas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopicNode {
    /// Unique identifier for this node.
    pub id: EntityId,
    /// Display title.
    pub title: String,
    /// Short free-form description shown on the card.
    pub description: String,
    /// Soft reference into the category list; unknown ids fall back to
    /// [`DEFAULT_CATEGORY_COLOR`] when rendering.
    pub category_id: EntityId,
    /// Ordered external link URLs; may be empty.
    pub links: Vec<String>,
    /// Top-left corner of the card in canvas pixels.
    pub position: Point,
    /// Ids of the nodes this topic depends on. Directed, not validated for
    /// acyclicity; dangling ids are skipped when drawing connectors and
    /// duplicates produce stacked connectors.
    pub parent_ids: Vec<EntityId>,
}

/// A labeled background region used to visually group nodes.
///
/// Zones carry no graph edges; they are purely decorative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Zone {
    /// Unique identifier for this zone.
    pub id: EntityId,
    /// Display label shown in the zone's corner.
    pub name: String,
    /// Top-left corner in canvas pixels.
    pub position: Point,
    /// Region extent; clamped to the documented minimums while resizing.
    pub size: Size,
    /// Background fill as a hex color string, rendered at reduced opacity.
    /// The border is the same color with an alpha suffix appended.
    pub color: String,
}

impl Zone {
    /// Border color derived from the fill color by appending an alpha
    /// suffix, as the original styling does.
    #[must_use]
    pub fn border_color(&self) -> String {
        format!("{}{}", self.color, crate::consts::ZONE_BORDER_ALPHA)
    }
}

/// A named, colored tag assigned to nodes for visual grouping.
///
/// Categories have a lifecycle independent from nodes: deleting one does
/// not touch the nodes that reference it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    /// Unique identifier, referenced by `TopicNode::category_id`.
    pub id: EntityId,
    /// Display name.
    pub name: String,
    /// Hex color string; not validated beyond being a string.
    pub color: String,
}

/// In-memory store of the canonical entity lists.
///
/// Lists keep insertion order, which is also render order. The store holds
/// no interaction state; drag offsets and dialog flags live with the UI.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GraphStore {
    nodes: Vec<TopicNode>,
    zones: Vec<Zone>,
    categories: Vec<Category>,
}

impl GraphStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store from pre-built lists, preserving their order.
    #[must_use]
    pub fn with_entities(nodes: Vec<TopicNode>, zones: Vec<Zone>, categories: Vec<Category>) -> Self {
        Self { nodes, zones, categories }
    }

    // ── Nodes ───────────────────────────────────────────────────

    /// All nodes in insertion order.
    #[must_use]
    pub fn nodes(&self) -> &[TopicNode] {
        &self.nodes
    }

    /// Look up a node by id.
    #[must_use]
    pub fn node(&self, id: &str) -> Option<&TopicNode> {
        self.nodes.iter().find(|n| n.id == id)
    }

    /// Append a node.
    pub fn add_node(&mut self, node: TopicNode) {
        self.nodes.push(node);
    }

    /// Replace the node with the same id. Returns false if no node matched.
    pub fn update_node(&mut self, node: TopicNode) -> bool {
        match self.nodes.iter_mut().find(|n| n.id == node.id) {
            Some(slot) => {
                *slot = node;
                true
            }
            None => false,
        }
    }

    /// Remove a node by id, returning it if it was present. References to
    /// the removed id in other nodes' `parent_ids` are left dangling on
    /// purpose; connector drawing skips them.
    pub fn remove_node(&mut self, id: &str) -> Option<TopicNode> {
        let index = self.nodes.iter().position(|n| n.id == id)?;
        Some(self.nodes.remove(index))
    }

    // ── Zones ───────────────────────────────────────────────────

    /// All zones in insertion order.
    #[must_use]
    pub fn zones(&self) -> &[Zone] {
        &self.zones
    }

    /// Look up a zone by id.
    #[must_use]
    pub fn zone(&self, id: &str) -> Option<&Zone> {
        self.zones.iter().find(|z| z.id == id)
    }

    /// Append a zone.
    pub fn add_zone(&mut self, zone: Zone) {
        self.zones.push(zone);
    }

    /// Replace the zone with the same id. Returns false if no zone matched.
    pub fn update_zone(&mut self, zone: Zone) -> bool {
        match self.zones.iter_mut().find(|z| z.id == zone.id) {
            Some(slot) => {
                *slot = zone;
                true
            }
            None => false,
        }
    }

    /// Remove a zone by id, returning it if it was present.
    pub fn remove_zone(&mut self, id: &str) -> Option<Zone> {
        let index = self.zones.iter().position(|z| z.id == id)?;
        Some(self.zones.remove(index))
    }

    // ── Categories ──────────────────────────────────────────────

    /// All categories in insertion order.
    #[must_use]
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Look up a category by id.
    #[must_use]
    pub fn category(&self, id: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    /// Replace the whole category list. Nodes referencing ids absent from
    /// the new list keep their reference and render with the fallback color.
    pub fn set_categories(&mut self, categories: Vec<Category>) {
        self.categories = categories;
    }

    /// Color for a category id, falling back to the default when the id has
    /// no matching category.
    #[must_use]
    pub fn category_color(&self, id: &str) -> &str {
        self.category(id).map_or(DEFAULT_CATEGORY_COLOR, |c| c.color.as_str())
    }

    /// Whether a category row may be deleted: the list never drops below
    /// one remaining category.
    #[must_use]
    pub fn can_remove_category(&self) -> bool {
        self.categories.len() > 1
    }

    /// Number of nodes currently in the store.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if the store contains no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
