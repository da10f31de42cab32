//! Layout and interaction engine for the roadmap canvas.
//!
//! This crate holds everything about the canvas that does not touch the DOM:
//! the entity model and its canonical store, the pointer drag/resize state
//! machine, connector geometry, and the SVG overlay markup builder. The
//! Leptos client wires pointer events and render output to this crate and
//! owns nothing beyond transient UI flags.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`model`] | Entity records and the in-memory [`model::GraphStore`] |
//! | [`drag`] | Pointer drag/resize state machine |
//! | [`geometry`] | Connector anchors, bezier paths, canvas extents |
//! | [`svg`] | Connector overlay `<svg>` markup |
//! | [`consts`] | Shared numeric and color constants |

pub mod consts;
pub mod drag;
pub mod geometry;
pub mod model;
pub mod svg;
