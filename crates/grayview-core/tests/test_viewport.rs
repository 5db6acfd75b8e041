use approx::assert_relative_eq;

use grayview_core::viewport::{display_to_grid, GridHit, ViewportTransform};

// ---------------------------------------------------------------------------
// Coordinate mapping
// ---------------------------------------------------------------------------

#[test]
fn test_origin_maps_to_origin() {
    for display in [(1.0, 1.0), (640.0, 480.0), (3.0, 1000.0)] {
        for grid in [(1, 1), (2, 2), (1920, 1080)] {
            assert_eq!(
                display_to_grid(0.0, 0.0, display, grid),
                Some(GridHit::Inside { x: 0, y: 0 })
            );
        }
    }
}

#[test]
fn test_mapping_scales_display_to_grid() {
    // 2x2 grid shown at 10x10: each grid cell covers 5 display units.
    assert_eq!(
        display_to_grid(4.9, 4.9, (10.0, 10.0), (2, 2)),
        Some(GridHit::Inside { x: 0, y: 0 })
    );
    assert_eq!(
        display_to_grid(5.0, 5.0, (10.0, 10.0), (2, 2)),
        Some(GridHit::Inside { x: 1, y: 1 })
    );
}

#[test]
fn test_mapping_out_of_range_is_a_first_class_outcome() {
    assert_eq!(
        display_to_grid(27.0, 27.0, (10.0, 10.0), (2, 2)),
        Some(GridHit::Outside)
    );
    assert_eq!(
        display_to_grid(-1.0, 3.0, (10.0, 10.0), (2, 2)),
        Some(GridHit::Outside)
    );
}

#[test]
fn test_mapping_undefined_without_display_extent() {
    assert_eq!(display_to_grid(3.0, 3.0, (0.0, 10.0), (2, 2)), None);
    assert_eq!(display_to_grid(3.0, 3.0, (10.0, -4.0), (2, 2)), None);
}

// ---------------------------------------------------------------------------
// Discrete zoom
// ---------------------------------------------------------------------------

#[test]
fn test_discrete_zoom_operators() {
    let mut vp = ViewportTransform::new();
    assert_eq!(vp.zoom_factor(), 1.0);

    vp.zoom_in();
    vp.zoom_in();
    assert_eq!(vp.zoom_factor(), 4.0);

    vp.zoom_out();
    assert_eq!(vp.zoom_factor(), 2.0);

    vp.zoom_reset();
    assert_eq!(vp.zoom_factor(), 1.0);
}

#[test]
fn test_set_zoom_factor_ignores_non_positive_values() {
    let mut vp = ViewportTransform::new();
    vp.set_zoom_factor(2.5);
    assert_eq!(vp.zoom_factor(), 2.5);

    vp.set_zoom_factor(0.0);
    assert_eq!(vp.zoom_factor(), 2.5);
    vp.set_zoom_factor(-1.0);
    assert_eq!(vp.zoom_factor(), 2.5);
}

// ---------------------------------------------------------------------------
// Wheel zoom accumulator
// ---------------------------------------------------------------------------

#[test]
fn test_wheel_zoom_is_split_invariant() {
    let mut single = ViewportTransform::new();
    single.wheel_zoom(240.0);

    let mut split = ViewportTransform::new();
    split.wheel_zoom(120.0);
    split.wheel_zoom(120.0);

    assert_relative_eq!(single.zoom_factor(), split.zoom_factor(), epsilon = 1e-12);
    assert_relative_eq!(single.zoom_factor(), 1.1 * 1.1, epsilon = 1e-12);
}

#[test]
fn test_wheel_zoom_carries_fractional_remainder() {
    let mut vp = ViewportTransform::new();
    vp.wheel_zoom(60.0);
    // Sub-notch delta: no zoom yet.
    assert_eq!(vp.zoom_factor(), 1.0);

    vp.wheel_zoom(60.0);
    assert_relative_eq!(vp.zoom_factor(), 1.1, epsilon = 1e-12);
}

#[test]
fn test_wheel_zoom_negative_deltas_zoom_out() {
    let mut vp = ViewportTransform::new();
    vp.wheel_zoom(-120.0);
    assert_relative_eq!(vp.zoom_factor(), 1.0 / 1.1, epsilon = 1e-12);

    // Sub-notch negative deltas accumulate the same way.
    let mut split = ViewportTransform::new();
    split.wheel_zoom(-60.0);
    assert_eq!(split.zoom_factor(), 1.0);
    split.wheel_zoom(-60.0);
    assert_relative_eq!(split.zoom_factor(), 1.0 / 1.1, epsilon = 1e-12);
}

#[test]
fn test_wheel_zoom_split_invariance_from_arbitrary_start() {
    let mut single = ViewportTransform::new();
    single.set_zoom_factor(3.7);
    single.wheel_zoom(300.0);

    let mut split = ViewportTransform::new();
    split.set_zoom_factor(3.7);
    split.wheel_zoom(100.0);
    split.wheel_zoom(100.0);
    split.wheel_zoom(100.0);

    assert_relative_eq!(single.zoom_factor(), split.zoom_factor(), epsilon = 1e-12);
}

// ---------------------------------------------------------------------------
// Pan state machine
// ---------------------------------------------------------------------------

#[test]
fn test_drag_pans_against_pointer_motion() {
    let mut vp = ViewportTransform::new();
    assert!(vp.pointer_pressed((100.0, 100.0), false));
    assert!(vp.is_panning());

    // Pointer moves +10/+20 -> content offset moves -10/-20, clamped at 0.
    let offset = vp.pointer_moved((110.0, 120.0), (500.0, 500.0)).unwrap();
    assert_eq!(offset, (0.0, 0.0));

    // Pointer moves -30/-5 from the press point -> offset +30/+5.
    let offset = vp.pointer_moved((70.0, 95.0), (500.0, 500.0)).unwrap();
    assert_eq!(offset, (30.0, 5.0));

    vp.pointer_released();
    assert!(!vp.is_panning());
    // Release leaves the last clamped offset in place.
    assert_eq!(vp.pan_offset(), (30.0, 5.0));
}

#[test]
fn test_pan_offset_is_clamped_to_scrollable_extent() {
    let mut vp = ViewportTransform::new();
    vp.pointer_pressed((0.0, 0.0), false);

    let offset = vp.pointer_moved((-1000.0, -2000.0), (40.0, 25.0)).unwrap();
    assert_eq!(offset, (40.0, 25.0));

    let offset = vp.pointer_moved((1000.0, 2000.0), (40.0, 25.0)).unwrap();
    assert_eq!(offset, (0.0, 0.0));
}

#[test]
fn test_press_over_scroll_control_does_not_start_panning() {
    let mut vp = ViewportTransform::new();
    assert!(!vp.pointer_pressed((10.0, 10.0), true));
    assert!(!vp.is_panning());
    assert!(vp.pointer_moved((50.0, 50.0), (100.0, 100.0)).is_none());
}

#[test]
fn test_moves_while_idle_are_ignored() {
    let mut vp = ViewportTransform::new();
    assert!(vp.pointer_moved((50.0, 50.0), (100.0, 100.0)).is_none());
    assert_eq!(vp.pan_offset(), (0.0, 0.0));
}

#[test]
fn test_capture_loss_abandons_the_drag() {
    let mut vp = ViewportTransform::new();
    vp.pointer_pressed((0.0, 0.0), false);
    vp.pointer_moved((-10.0, 0.0), (100.0, 100.0));

    vp.capture_lost();
    assert!(!vp.is_panning());
    assert_eq!(vp.pan_offset(), (10.0, 0.0));

    // Further moves do nothing once capture is gone.
    assert!(vp.pointer_moved((-90.0, 0.0), (100.0, 100.0)).is_none());
    assert_eq!(vp.pan_offset(), (10.0, 0.0));
}

// ---------------------------------------------------------------------------
// Reset
// ---------------------------------------------------------------------------

#[test]
fn test_reset_restores_defaults_and_abandons_drag() {
    let mut vp = ViewportTransform::new();
    vp.zoom_in();
    vp.pointer_pressed((0.0, 0.0), false);
    vp.pointer_moved((-15.0, -25.0), (100.0, 100.0));

    vp.reset();
    assert_eq!(vp.zoom_factor(), 1.0);
    assert_eq!(vp.pan_offset(), (0.0, 0.0));
    assert!(!vp.is_panning());
}
