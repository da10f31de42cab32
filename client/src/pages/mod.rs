//! Page-level components, one per route.

pub mod roadmap;
