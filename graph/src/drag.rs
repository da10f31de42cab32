//! Pointer interaction state machine for draggable, resizable entities.
//!
//! Each positioned entity on the canvas (topic card or zone) owns one
//! [`DragController`]. The controller tracks the active gesture between
//! pointer-down and pointer-up and carries the context captured at press
//! time: the pointer-to-entity offset for drags, the fixed top-left corner
//! for resizes. Dragging and Resizing are mutually exclusive by
//! construction since both live in the same enum.
//!
//! The controller is deliberately free of event plumbing. The UI layer
//! feeds it pointer positions and applies the returned position/size to the
//! entity record; window-level listeners are attached only while a gesture
//! is active.

#[cfg(test)]
#[path = "drag_test.rs"]
mod drag_test;

use crate::consts::{ZONE_MIN_HEIGHT, ZONE_MIN_WIDTH};
use crate::model::{Point, Size};

/// The active gesture being tracked between pointer-down and pointer-up.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DragState {
    /// No gesture in progress; waiting for the next pointer-down.
    #[default]
    Idle,
    /// The entity is being moved across the canvas.
    Dragging {
        /// Pointer-to-entity offset captured at press time:
        /// `pointer - entity.position`.
        offset: Point,
    },
    /// The zone is being resized by its corner handle.
    Resizing {
        /// The zone's top-left corner, fixed for the whole gesture.
        origin: Point,
    },
}

/// New entity position for a pointer at `pointer` with a drag offset
/// captured at press time. Clamped to non-negative in both axes.
#[must_use]
pub fn dragged_position(pointer: Point, offset: Point) -> Point {
    Point {
        x: (pointer.x - offset.x).max(0.0),
        y: (pointer.y - offset.y).max(0.0),
    }
}

/// New zone size for a pointer at `pointer` with the zone's top-left at
/// `origin`. Clamped to the documented zone minimums.
#[must_use]
pub fn resized_size(pointer: Point, origin: Point) -> Size {
    Size {
        width: (pointer.x - origin.x).max(ZONE_MIN_WIDTH),
        height: (pointer.y - origin.y).max(ZONE_MIN_HEIGHT),
    }
}

/// Per-entity drag/resize state machine: Idle → Dragging|Resizing → Idle.
#[derive(Debug, Clone, Copy, Default)]
pub struct DragController {
    state: DragState,
}

impl DragController {
    /// A controller in the Idle state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current gesture state.
    #[must_use]
    pub fn state(&self) -> DragState {
        self.state
    }

    /// Whether a drag or resize is in progress.
    #[must_use]
    pub fn is_active(&self) -> bool {
        !matches!(self.state, DragState::Idle)
    }

    /// Whether the entity is being dragged.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging { .. })
    }

    /// Whether the entity is being resized.
    #[must_use]
    pub fn is_resizing(&self) -> bool {
        matches!(self.state, DragState::Resizing { .. })
    }

    /// Pointer-down over the entity body. Enters Dragging and captures the
    /// pointer-to-entity offset. Ignored unless Idle, so a resize in
    /// progress is never hijacked by a drag.
    pub fn press(&mut self, pointer: Point, position: Point) {
        if matches!(self.state, DragState::Idle) {
            self.state = DragState::Dragging {
                offset: Point::new(pointer.x - position.x, pointer.y - position.y),
            };
        }
    }

    /// Pointer-down on the resize handle. Enters Resizing with the entity's
    /// current top-left as the fixed origin. Ignored unless Idle.
    pub fn press_resize(&mut self, origin: Point) {
        if matches!(self.state, DragState::Idle) {
            self.state = DragState::Resizing { origin };
        }
    }

    /// Pointer-move while Dragging: the entity's new position, clamped to
    /// non-negative. `None` when not dragging.
    #[must_use]
    pub fn drag_to(&self, pointer: Point) -> Option<Point> {
        match self.state {
            DragState::Dragging { offset } => Some(dragged_position(pointer, offset)),
            _ => None,
        }
    }

    /// Pointer-move while Resizing: the zone's new size, clamped to the
    /// minimums. `None` when not resizing.
    #[must_use]
    pub fn resize_to(&self, pointer: Point) -> Option<Size> {
        match self.state {
            DragState::Resizing { origin } => Some(resized_size(pointer, origin)),
            _ => None,
        }
    }

    /// Pointer-up: back to Idle regardless of the active gesture. No
    /// snapping, no inertia.
    pub fn release(&mut self) {
        self.state = DragState::Idle;
    }
}
