//! # client
//!
//! Leptos CSR frontend for the roadmap canvas. Renders the editable topic
//! graph: draggable topic cards, resizable zones, the connector overlay,
//! and the form-driven dialogs that edit the underlying records.
//!
//! All geometric and interaction logic lives in the `graph` crate; this
//! crate wires pointer events to it and holds the reactive state signals.

use log::Level;

pub mod app;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
    let _ = console_log::init_with_level(Level::Debug);
    console_error_panic_hook::set_once();
}
