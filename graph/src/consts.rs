//! Shared numeric and color constants for the roadmap canvas.

// ── Node footprint ──────────────────────────────────────────────

/// Fixed visual width of a topic card, in canvas pixels.
pub const NODE_WIDTH: f64 = 300.0;

/// Fixed visual height of a topic card, in canvas pixels.
pub const NODE_HEIGHT: f64 = 100.0;

// ── Zone sizing ─────────────────────────────────────────────────

/// Minimum zone width enforced while resizing.
pub const ZONE_MIN_WIDTH: f64 = 200.0;

/// Minimum zone height enforced while resizing.
pub const ZONE_MIN_HEIGHT: f64 = 150.0;

// ── Canvas floor ────────────────────────────────────────────────

/// The scrollable surface never shrinks below this width.
pub const CANVAS_MIN_WIDTH: f64 = 2000.0;

/// The scrollable surface never shrinks below this height.
pub const CANVAS_MIN_HEIGHT: f64 = 1500.0;

// ── Colors ──────────────────────────────────────────────────────

/// Fill color for topic cards whose category id has no matching category.
pub const DEFAULT_CATEGORY_COLOR: &str = "#94a3b8";

/// Hex alpha suffix appended to a zone's fill color for its border.
pub const ZONE_BORDER_ALPHA: &str = "CC";

/// Stroke color for connector paths and their arrowheads.
pub const CONNECTOR_STROKE: &str = "#cbd5e1";
