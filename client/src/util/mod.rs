//! Small browser-facing helpers shared by the canvas components.

pub mod confirm;
pub mod gesture;
pub mod pointer;
pub mod rows;
