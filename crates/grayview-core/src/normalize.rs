use ndarray::Array2;

use crate::grid::Sample;

/// Normalize raw samples into a byte-per-pixel indexed buffer via
/// min/max linear scaling.
///
/// All arithmetic is f32 regardless of the sample's own numeric kind, so
/// identical inputs always yield a byte-identical buffer. For a constant
/// grid (`min == max`) every `value - min` is zero, so the scale choice is
/// irrelevant and the whole buffer comes out zero.
pub fn indexed_data<T: Sample>(data: &Array2<T>, min: f32, max: f32) -> Vec<u8> {
    let scale = if min == max { 1.0 } else { 255.0 / (max - min) };

    data.iter()
        .map(|v| {
            let normalized = (v.to_f32().unwrap_or(min) - min) * scale;
            // Truncation toward zero, clamped into the byte range.
            normalized.clamp(0.0, 255.0) as u8
        })
        .collect()
}
