use crate::grid::PixelProvider;
use crate::viewport::{display_to_grid, GridHit};

/// Status text shown when no pixel is under the pointer.
pub const UNDEFINED_STATUS: &str = "0,0: undefined";

/// Answers "what value is under the pointer" by composing the coordinate
/// mapping with the current grid. Owns nothing beyond the displayed
/// status string.
pub struct InteractionController {
    status_text: String,
}

impl Default for InteractionController {
    fn default() -> Self {
        Self::new()
    }
}

impl InteractionController {
    pub fn new() -> Self {
        Self {
            status_text: UNDEFINED_STATUS.to_string(),
        }
    }

    pub fn status_text(&self) -> &str {
        &self.status_text
    }

    /// Pointer-move event. Without a current image this does nothing; an
    /// undefined or out-of-range mapping yields the fixed literal.
    pub fn pointer_moved(
        &mut self,
        provider: Option<&dyn PixelProvider>,
        pos: (f64, f64),
        display_size: (f64, f64),
    ) {
        let Some(provider) = provider else {
            return;
        };

        let grid_size = (provider.width(), provider.height());
        match display_to_grid(pos.0, pos.1, display_size, grid_size) {
            Some(GridHit::Inside { x, y }) => {
                self.status_text = format!("{x},{y}: {}", provider.value_text(x, y));
            }
            Some(GridHit::Outside) | None => {
                self.status_text = UNDEFINED_STATUS.to_string();
            }
        }
    }

    /// Pointer-leave event: unconditionally the fixed literal.
    pub fn pointer_left(&mut self) {
        self.status_text = UNDEFINED_STATUS.to_string();
    }
}
