//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain: `graph` owns the topic/zone/category records
//! and `ui` owns dialog visibility and sidebar flags, so components can
//! depend on small focused models.

pub mod graph;
pub mod ui;
