//! Graph state: the topic/zone/category store plus its mutation surface.

#[cfg(test)]
#[path = "graph_test.rs"]
mod graph_test;

use graph::geometry;
use graph::model::{Category, EntityId, GraphStore, Point, TopicNode, Zone};
use graph::svg;

/// Reactive graph state provided via context as `RwSignal<GraphState>`.
///
/// Wraps the [`GraphStore`] and exposes the mutation methods the UI calls.
/// All reads clone out of the store so callers never hold borrows across
/// reactive updates.
#[derive(Clone, Debug, PartialEq)]
pub struct GraphState {
    store: GraphStore,
}

impl Default for GraphState {
    fn default() -> Self {
        Self { store: seed_store() }
    }
}

impl GraphState {
    /// Empty state with only the default category set.
    #[must_use]
    pub fn empty() -> Self {
        let mut store = GraphStore::new();
        store.set_categories(vec![Category {
            id: "general".to_owned(),
            name: "General".to_owned(),
            color: "#3b82f6".to_owned(),
        }]);
        Self { store }
    }

    // ── mutations ──────────────────────────────────────────────────────

    pub fn add_node(&mut self, node: TopicNode) {
        log::debug!("add node {}", node.id);
        self.store.add_node(node);
    }

    pub fn update_node(&mut self, node: TopicNode) {
        if !self.store.update_node(node) {
            log::debug!("update for unknown node ignored");
        }
    }

    pub fn delete_node(&mut self, id: &str) {
        log::debug!("delete node {id}");
        self.store.remove_node(id);
    }

    pub fn add_zone(&mut self, zone: Zone) {
        log::debug!("add zone {}", zone.id);
        self.store.add_zone(zone);
    }

    pub fn update_zone(&mut self, zone: Zone) {
        if !self.store.update_zone(zone) {
            log::debug!("update for unknown zone ignored");
        }
    }

    pub fn delete_zone(&mut self, id: &str) {
        log::debug!("delete zone {id}");
        self.store.remove_zone(id);
    }

    pub fn update_categories(&mut self, categories: Vec<Category>) {
        log::debug!("replace categories ({} entries)", categories.len());
        self.store.set_categories(categories);
    }

    // ── reads ──────────────────────────────────────────────────────────

    #[must_use]
    pub fn node(&self, id: &str) -> Option<TopicNode> {
        self.store.node(id).cloned()
    }

    #[must_use]
    pub fn zone(&self, id: &str) -> Option<Zone> {
        self.store.zone(id).cloned()
    }

    #[must_use]
    pub fn node_ids(&self) -> Vec<EntityId> {
        self.store.nodes().iter().map(|n| n.id.clone()).collect()
    }

    #[must_use]
    pub fn zone_ids(&self) -> Vec<EntityId> {
        self.store.zones().iter().map(|z| z.id.clone()).collect()
    }

    #[must_use]
    pub fn nodes(&self) -> Vec<TopicNode> {
        self.store.nodes().to_vec()
    }

    #[must_use]
    pub fn categories(&self) -> Vec<Category> {
        self.store.categories().to_vec()
    }

    #[must_use]
    pub fn category_color(&self, id: &str) -> String {
        self.store.category_color(id).to_owned()
    }

    #[must_use]
    pub fn can_remove_category(&self) -> bool {
        self.store.can_remove_category()
    }

    /// Canvas surface size covering every entity, with the minimum floor.
    #[must_use]
    pub fn extents(&self) -> (f64, f64) {
        geometry::canvas_extents(self.store.nodes(), self.store.zones())
    }

    /// Connector overlay markup for the current node set.
    #[must_use]
    pub fn overlay_svg(&self) -> String {
        let (width, height) = self.extents();
        svg::overlay_svg(self.store.nodes(), width, height)
    }
}

// ── seed data ──────────────────────────────────────────────────────────

fn node(
    id: &str,
    title: &str,
    description: &str,
    category_id: &str,
    links: &[&str],
    x: f64,
    y: f64,
    parent_ids: &[&str],
) -> TopicNode {
    TopicNode {
        id: id.to_owned(),
        title: title.to_owned(),
        description: description.to_owned(),
        category_id: category_id.to_owned(),
        links: links.iter().map(|l| (*l).to_owned()).collect(),
        position: Point { x, y },
        parent_ids: parent_ids.iter().map(|p| (*p).to_owned()).collect(),
    }
}

/// Starter roadmap: a small ML curriculum so a fresh session has something
/// to drag around.
fn seed_store() -> GraphStore {
    GraphStore::with_entities(
        vec![
            node(
                "1",
                "Linear Algebra",
                "Vectors, matrices, and the operations deep learning is built on.",
                "math",
                &["https://example.com/linear-algebra"],
                100.0,
                50.0,
                &[],
            ),
            node(
                "2",
                "Logistic Regression",
                "The simplest learned classifier and the gateway to gradients.",
                "ml",
                &[],
                300.0,
                150.0,
                &["1"],
            ),
            node(
                "3",
                "Neural Networks",
                "Stacked linear layers with nonlinearities, trained by backprop.",
                "dl",
                &["https://example.com/neural-nets"],
                300.0,
                280.0,
                &["2", "1"],
            ),
            node(
                "4",
                "RNN",
                "Recurrent networks for sequence data.",
                "dl",
                &[],
                500.0,
                410.0,
                &["3"],
            ),
            node(
                "5",
                "LSTM / GRU",
                "Gated recurrent cells that survive long sequences.",
                "dl",
                &[],
                500.0,
                540.0,
                &["4"],
            ),
            node(
                "6",
                "Attention Mechanism",
                "Weighted context lookups that replaced recurrence.",
                "nlp",
                &[],
                300.0,
                670.0,
                &["5"],
            ),
            node(
                "7",
                "Transformer",
                "Attention is all you need.",
                "nlp",
                &["https://example.com/transformer"],
                300.0,
                800.0,
                &["6"],
            ),
        ],
        Vec::new(),
        vec![
            Category {
                id: "math".to_owned(),
                name: "Math Foundations".to_owned(),
                color: "#f59e0b".to_owned(),
            },
            Category {
                id: "ml".to_owned(),
                name: "Machine Learning".to_owned(),
                color: "#3b82f6".to_owned(),
            },
            Category {
                id: "dl".to_owned(),
                name: "Deep Learning".to_owned(),
                color: "#a855f7".to_owned(),
            },
            Category {
                id: "nlp".to_owned(),
                name: "NLP".to_owned(),
                color: "#10b981".to_owned(),
            },
        ],
    )
}
