use std::path::Path;

use ndarray::Array2;

use crate::error::{GrayviewError, Result};
use crate::grid::{PixelProvider, SampleGrid};

pub const FORMAT_LABEL: &str = "Gray16 (u16)";

/// Load a grayscale PNG as 16-bit integer samples.
pub fn load(path: &Path) -> Result<Box<dyn PixelProvider>> {
    let img = image::open(path)?;

    match img.color() {
        image::ColorType::L8 | image::ColorType::L16 => {}
        other => {
            return Err(GrayviewError::DecodeFailure(format!(
                "expected a grayscale PNG, got {other:?}"
            )))
        }
    }

    let gray = img.to_luma16();
    let (w, h) = gray.dimensions();
    let mut data = Array2::<u16>::zeros((h as usize, w as usize));

    for row in 0..h as usize {
        for col in 0..w as usize {
            data[[row, col]] = gray.get_pixel(col as u32, row as u32).0[0];
        }
    }

    Ok(Box::new(SampleGrid::new(data, FORMAT_LABEL)?))
}
