//! Zoom/pan state and the display-to-grid coordinate mapping.

/// Raw wheel delta that makes up one discrete zoom step (Win32 WHEEL_DELTA
/// convention).
pub const WHEEL_DELTA_PER_NOTCH: f64 = 120.0;

/// Multiplicative zoom change per wheel notch (10%).
pub const ZOOM_STEP: f64 = 1.1;

/// Result of mapping a display-space pointer position onto the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GridHit {
    Inside { x: usize, y: usize },
    /// Pointer maps outside the grid. A first-class outcome, not an error.
    Outside,
}

/// Map a display-space pointer position to grid coordinates.
///
/// Returns `None` when the display surface has no positive extent (the
/// mapping is undefined).
pub fn display_to_grid(
    px: f64,
    py: f64,
    display_size: (f64, f64),
    grid_size: (usize, usize),
) -> Option<GridHit> {
    let (display_w, display_h) = display_size;
    if display_w <= 0.0 || display_h <= 0.0 {
        return None;
    }

    let (grid_w, grid_h) = grid_size;
    let gx = (px * grid_w as f64 / display_w).floor();
    let gy = (py * grid_h as f64 / display_h).floor();

    if gx < 0.0 || gy < 0.0 || gx >= grid_w as f64 || gy >= grid_h as f64 {
        return Some(GridHit::Outside);
    }

    Some(GridHit::Inside {
        x: gx as usize,
        y: gy as usize,
    })
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum DragState {
    Idle,
    Panning {
        press_pos: (f64, f64),
        start_offset: (f64, f64),
    },
}

/// Zoom factor and pan offset plus the drag state machine driving them.
///
/// Reset to defaults whenever a new image replaces the old one; mutated
/// only through the explicit zoom/pan operations below.
#[derive(Clone, Copy, Debug)]
pub struct ViewportTransform {
    zoom_factor: f64,
    pan_offset: (f64, f64),
    wheel_remainder: f64,
    drag: DragState,
}

impl Default for ViewportTransform {
    fn default() -> Self {
        Self {
            zoom_factor: 1.0,
            pan_offset: (0.0, 0.0),
            wheel_remainder: 0.0,
            drag: DragState::Idle,
        }
    }
}

impl ViewportTransform {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn zoom_factor(&self) -> f64 {
        self.zoom_factor
    }

    /// Restore a persisted zoom factor. Non-positive values are ignored.
    pub fn set_zoom_factor(&mut self, zoom: f64) {
        if zoom > 0.0 {
            self.zoom_factor = zoom;
        }
    }

    pub fn pan_offset(&self) -> (f64, f64) {
        self.pan_offset
    }

    pub fn is_panning(&self) -> bool {
        matches!(self.drag, DragState::Panning { .. })
    }

    pub fn zoom_in(&mut self) {
        self.zoom_factor *= 2.0;
    }

    pub fn zoom_out(&mut self) {
        self.zoom_factor /= 2.0;
    }

    pub fn zoom_reset(&mut self) {
        self.zoom_factor = 1.0;
    }

    /// Accumulate a raw wheel delta, consuming whole notches.
    ///
    /// Fractional remainders carry over to the next event, so the final
    /// zoom depends only on the summed delta, not on how events were split.
    pub fn wheel_zoom(&mut self, raw_delta: f64) {
        self.wheel_remainder += raw_delta;

        let notches = (self.wheel_remainder / WHEEL_DELTA_PER_NOTCH).trunc();
        if notches != 0.0 {
            self.zoom_factor *= ZOOM_STEP.powi(notches as i32);
            self.wheel_remainder -= notches * WHEEL_DELTA_PER_NOTCH;
        }
    }

    /// Press event. Transitions idle -> panning unless the press landed on
    /// a scroll-control widget that must retain the gesture (the caller
    /// decides that; it is a UI concern). Returns whether panning started.
    pub fn pointer_pressed(&mut self, pos: (f64, f64), over_scroll_control: bool) -> bool {
        if over_scroll_control {
            return false;
        }
        self.drag = DragState::Panning {
            press_pos: pos,
            start_offset: self.pan_offset,
        };
        true
    }

    /// Move event. While panning, drags the content against the pointer
    /// and clamps each axis into `[0, scrollable_extent]`. Returns the new
    /// offset, or `None` when not panning.
    pub fn pointer_moved(
        &mut self,
        pos: (f64, f64),
        scrollable_extent: (f64, f64),
    ) -> Option<(f64, f64)> {
        let DragState::Panning {
            press_pos,
            start_offset,
        } = self.drag
        else {
            return None;
        };

        let new_offset = (
            (start_offset.0 - (pos.0 - press_pos.0)).clamp(0.0, scrollable_extent.0.max(0.0)),
            (start_offset.1 - (pos.1 - press_pos.1)).clamp(0.0, scrollable_extent.1.max(0.0)),
        );
        self.pan_offset = new_offset;
        Some(new_offset)
    }

    /// Release event. The last clamped offset stays in place.
    pub fn pointer_released(&mut self) {
        self.drag = DragState::Idle;
    }

    /// Involuntary loss of pointer capture ends the drag the same way a
    /// release does.
    pub fn capture_lost(&mut self) {
        self.drag = DragState::Idle;
    }

    /// Back to defaults: zoom 1.0, no offset, any in-progress drag
    /// abandoned. Invoked whenever a new image is loaded.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
