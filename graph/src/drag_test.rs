use super::*;

// =============================================================
// DragState
// =============================================================

#[test]
fn drag_state_default_is_idle() {
    assert_eq!(DragState::default(), DragState::Idle);
}

#[test]
fn controller_starts_idle() {
    let c = DragController::new();
    assert!(!c.is_active());
    assert!(!c.is_dragging());
    assert!(!c.is_resizing());
}

// =============================================================
// Pure formulas
// =============================================================

#[test]
fn dragged_position_subtracts_offset() {
    let pos = dragged_position(Point::new(250.0, 300.0), Point::new(10.0, 10.0));
    assert_eq!(pos, Point::new(240.0, 290.0));
}

#[test]
fn dragged_position_clamps_each_axis_independently() {
    let pos = dragged_position(Point::new(5.0, 300.0), Point::new(50.0, 10.0));
    assert_eq!(pos, Point::new(0.0, 290.0));
    let pos = dragged_position(Point::new(250.0, 2.0), Point::new(10.0, 50.0));
    assert_eq!(pos, Point::new(240.0, 0.0));
}

#[test]
fn resized_size_derives_from_fixed_origin() {
    let size = resized_size(Point::new(700.0, 500.0), Point::new(100.0, 100.0));
    assert_eq!(size, Size::new(600.0, 400.0));
}

#[test]
fn resized_size_clamps_to_minimums() {
    let size = resized_size(Point::new(120.0, 110.0), Point::new(100.0, 100.0));
    assert_eq!(size, Size::new(200.0, 150.0));
    // Pointer left/above the origin still yields the minimum.
    let size = resized_size(Point::new(0.0, 0.0), Point::new(100.0, 100.0));
    assert_eq!(size, Size::new(200.0, 150.0));
}

// =============================================================
// Drag gesture
// =============================================================

#[test]
fn press_captures_pointer_to_entity_offset() {
    let mut c = DragController::new();
    c.press(Point::new(110.0, 60.0), Point::new(100.0, 50.0));
    assert_eq!(c.state(), DragState::Dragging { offset: Point::new(10.0, 10.0) });
}

#[test]
fn drag_move_emits_clamped_position_every_event() {
    let mut c = DragController::new();
    c.press(Point::new(110.0, 60.0), Point::new(100.0, 50.0));
    assert_eq!(c.drag_to(Point::new(250.0, 300.0)), Some(Point::new(240.0, 290.0)));
    assert_eq!(c.drag_to(Point::new(251.0, 301.0)), Some(Point::new(241.0, 291.0)));
    assert_eq!(c.drag_to(Point::new(3.0, 3.0)), Some(Point::new(0.0, 0.0)));
}

#[test]
fn drag_then_release_stops_further_updates() {
    let mut c = DragController::new();
    c.press(Point::new(110.0, 60.0), Point::new(100.0, 50.0));
    assert_eq!(c.drag_to(Point::new(250.0, 300.0)), Some(Point::new(240.0, 290.0)));
    c.release();
    assert!(!c.is_active());
    assert_eq!(c.drag_to(Point::new(400.0, 400.0)), None);
}

#[test]
fn drag_to_is_none_while_idle() {
    let c = DragController::new();
    assert_eq!(c.drag_to(Point::new(100.0, 100.0)), None);
}

// =============================================================
// Resize gesture
// =============================================================

#[test]
fn press_resize_fixes_the_origin_for_the_gesture() {
    let mut c = DragController::new();
    c.press_resize(Point::new(100.0, 100.0));
    assert!(c.is_resizing());
    assert_eq!(c.resize_to(Point::new(700.0, 500.0)), Some(Size::new(600.0, 400.0)));
    // The origin does not move even as sizes are emitted.
    assert_eq!(c.resize_to(Point::new(350.0, 280.0)), Some(Size::new(250.0, 180.0)));
}

#[test]
fn resize_to_is_none_while_dragging() {
    let mut c = DragController::new();
    c.press(Point::new(0.0, 0.0), Point::new(0.0, 0.0));
    assert_eq!(c.resize_to(Point::new(700.0, 500.0)), None);
}

#[test]
fn release_ends_a_resize() {
    let mut c = DragController::new();
    c.press_resize(Point::new(100.0, 100.0));
    c.release();
    assert_eq!(c.resize_to(Point::new(700.0, 500.0)), None);
}

// =============================================================
// Mutual exclusivity
// =============================================================

#[test]
fn press_is_ignored_while_resizing() {
    let mut c = DragController::new();
    c.press_resize(Point::new(100.0, 100.0));
    c.press(Point::new(110.0, 60.0), Point::new(100.0, 50.0));
    assert!(c.is_resizing());
    assert!(!c.is_dragging());
}

#[test]
fn press_resize_is_ignored_while_dragging() {
    let mut c = DragController::new();
    c.press(Point::new(110.0, 60.0), Point::new(100.0, 50.0));
    c.press_resize(Point::new(100.0, 100.0));
    assert!(c.is_dragging());
    assert!(!c.is_resizing());
}

#[test]
fn repeated_press_keeps_the_first_offset() {
    let mut c = DragController::new();
    c.press(Point::new(110.0, 60.0), Point::new(100.0, 50.0));
    c.press(Point::new(500.0, 500.0), Point::new(0.0, 0.0));
    assert_eq!(c.state(), DragState::Dragging { offset: Point::new(10.0, 10.0) });
}
