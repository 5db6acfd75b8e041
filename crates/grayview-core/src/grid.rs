use std::fmt::Display;

use ndarray::Array2;
use num_traits::ToPrimitive;

use crate::error::{GrayviewError, Result};
use crate::normalize;

/// Numeric sample element: ordering, float conversion and a natural
/// decimal text form. One trait covers both the integer and the
/// floating-point storage kinds the loaders produce.
pub trait Sample: Copy + PartialOrd + Display + std::fmt::Debug + ToPrimitive {}

impl<T: Copy + PartialOrd + Display + std::fmt::Debug + ToPrimitive> Sample for T {}

/// Uniform access to a loaded image at the display/status boundary.
///
/// The normalization loop stays monomorphic per storage kind; this trait
/// is only consumed where the UI needs one shape for all of them.
pub trait PixelProvider: std::fmt::Debug {
    fn width(&self) -> usize;
    fn height(&self) -> usize;
    fn min(&self) -> f32;
    fn max(&self) -> f32;
    /// Byte-per-pixel buffer, row-major (`index = y * width + x`).
    fn indexed_data(&self) -> &[u8];
    fn format_label(&self) -> &str;
    /// Decimal text of the raw sample at (x, y).
    ///
    /// Callers must bounds-check first; out-of-bounds coordinates are a
    /// programming error, not a recoverable condition.
    fn value_text(&self, x: usize, y: usize) -> String;
}

/// Immutable grid of raw samples with min/max computed once at
/// construction and the normalized indexed buffer derived from them.
///
/// A grid is only ever replaced wholesale; the indexed buffer is never
/// patched incrementally.
#[derive(Debug)]
pub struct SampleGrid<T: Sample> {
    data: Array2<T>,
    min: f32,
    max: f32,
    indexed: Vec<u8>,
    format_label: String,
}

impl<T: Sample> SampleGrid<T> {
    /// Build a grid from sample data, shape = (height, width).
    ///
    /// Scans every cell exactly once for min/max, then normalizes into
    /// the indexed buffer.
    pub fn new(data: Array2<T>, format_label: impl Into<String>) -> Result<Self> {
        let (height, width) = data.dim();
        if width == 0 || height == 0 {
            return Err(GrayviewError::InvalidDimensions { width, height });
        }

        let mut min = f32::INFINITY;
        let mut max = f32::NEG_INFINITY;
        for v in data.iter() {
            if let Some(v) = v.to_f32() {
                if v < min {
                    min = v;
                }
                if v > max {
                    max = v;
                }
            }
        }
        if min > max {
            // No comparable samples (e.g. all NaN): treat as a constant image.
            min = 0.0;
            max = 0.0;
        }

        let indexed = normalize::indexed_data(&data, min, max);

        Ok(Self {
            data,
            min,
            max,
            indexed,
            format_label: format_label.into(),
        })
    }

    pub fn width(&self) -> usize {
        self.data.ncols()
    }

    pub fn height(&self) -> usize {
        self.data.nrows()
    }

    pub fn min(&self) -> f32 {
        self.min
    }

    pub fn max(&self) -> f32 {
        self.max
    }

    /// Raw sample at (x, y). Precondition: in bounds.
    pub fn value(&self, x: usize, y: usize) -> T {
        debug_assert!(x < self.width() && y < self.height());
        self.data[[y, x]]
    }
}

impl<T: Sample> PixelProvider for SampleGrid<T> {
    fn width(&self) -> usize {
        self.width()
    }

    fn height(&self) -> usize {
        self.height()
    }

    fn min(&self) -> f32 {
        self.min
    }

    fn max(&self) -> f32 {
        self.max
    }

    fn indexed_data(&self) -> &[u8] {
        &self.indexed
    }

    fn format_label(&self) -> &str {
        &self.format_label
    }

    fn value_text(&self, x: usize, y: usize) -> String {
        self.value(x, y).to_string()
    }
}
