use approx::assert_relative_eq;
use ndarray::Array2;

use grayview_core::error::GrayviewError;
use grayview_core::grid::{PixelProvider, SampleGrid};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn grid_2x2_mixed() -> SampleGrid<i32> {
    // Row-major: (x=0,y=0)=0, (x=1,y=0)=255, (x=0,y=1)=128, (x=1,y=1)=64
    let data = Array2::from_shape_vec((2, 2), vec![0, 255, 128, 64]).unwrap();
    SampleGrid::new(data, "INT_FMT").unwrap()
}

// ---------------------------------------------------------------------------
// Construction and min/max
// ---------------------------------------------------------------------------

#[test]
fn test_min_max_and_indexed_data_for_int_grid() {
    let grid = grid_2x2_mixed();

    assert_eq!(grid.width(), 2);
    assert_eq!(grid.height(), 2);
    assert_eq!(grid.min(), 0.0);
    assert_eq!(grid.max(), 255.0);
    assert_eq!(grid.format_label(), "INT_FMT");

    // index = y * width + x
    assert_eq!(grid.indexed_data(), &[0, 255, 128, 64]);

    assert_eq!(grid.value(1, 0), 255);
    assert_eq!(grid.value_text(1, 0), "255");
    assert_eq!(grid.value_text(1, 1), "64");
}

#[test]
fn test_constant_grid_normalizes_to_all_zero() {
    let data = Array2::from_elem((2, 2), 5.0f32);
    let grid = SampleGrid::new(data, "FLT_FMT").unwrap();

    assert_eq!(grid.min(), 5.0);
    assert_eq!(grid.max(), 5.0);
    assert!(grid.indexed_data().iter().all(|&b| b == 0));
    assert_eq!(grid.value_text(0, 0), "5");
}

#[test]
fn test_min_never_exceeds_max() {
    let data = Array2::from_shape_fn((7, 5), |(r, c)| (r * 5 + c) as f32 * 0.37 - 3.0);
    let grid = SampleGrid::new(data, "ramp").unwrap();

    assert!(grid.min() <= grid.max());
    assert_relative_eq!(grid.min(), -3.0);
    assert_relative_eq!(grid.max(), 34.0 * 0.37 - 3.0);
}

#[test]
fn test_negative_values_normalize_from_min() {
    let data = Array2::from_shape_vec((1, 3), vec![-10.0f32, 0.0, 10.0]).unwrap();
    let grid = SampleGrid::new(data, "signed").unwrap();

    assert_eq!(grid.min(), -10.0);
    assert_eq!(grid.max(), 10.0);
    // scale = 255/20 = 12.75; truncation toward zero
    assert_eq!(grid.indexed_data(), &[0, 127, 255]);
}

#[test]
fn test_u16_samples() {
    let data = Array2::from_shape_vec((1, 2), vec![0u16, 255]).unwrap();
    let grid = SampleGrid::new(data, "Gray16 (u16)").unwrap();

    assert_eq!(grid.indexed_data(), &[0, 255]);
    assert_eq!(grid.value_text(1, 0), "255");
}

#[test]
fn test_zero_dimensions_are_rejected() {
    let data = Array2::<f32>::zeros((0, 4));
    let err = SampleGrid::new(data, "empty").unwrap_err();
    assert!(matches!(
        err,
        GrayviewError::InvalidDimensions { width: 4, height: 0 }
    ));
}

// ---------------------------------------------------------------------------
// Determinism
// ---------------------------------------------------------------------------

#[test]
fn test_normalization_is_deterministic() {
    let make = || {
        let data = Array2::from_shape_fn((16, 16), |(r, c)| ((r * 31 + c * 17) % 97) as f32 * 0.83);
        SampleGrid::new(data, "det").unwrap()
    };

    let a = make();
    let b = make();
    assert_eq!(a.indexed_data(), b.indexed_data());
}

#[test]
fn test_indexed_bytes_cover_full_range_bounds() {
    let data = Array2::from_shape_fn((32, 32), |(r, c)| (r * 32 + c) as f32);
    let grid = SampleGrid::new(data, "ramp").unwrap();

    assert_eq!(grid.indexed_data().len(), 32 * 32);
    assert_eq!(grid.indexed_data()[0], 0);
    // Every byte stays within [0, 255] by construction; the first cell of
    // a monotone ramp must map to 0.
    assert!(grid.indexed_data().windows(2).all(|w| w[0] <= w[1]));
}

// ---------------------------------------------------------------------------
// Provider boundary
// ---------------------------------------------------------------------------

#[test]
fn test_provider_trait_object_access() {
    let grid = grid_2x2_mixed();
    let provider: &dyn PixelProvider = &grid;

    assert_eq!(provider.width(), 2);
    assert_eq!(provider.height(), 2);
    assert_eq!(provider.min(), 0.0);
    assert_eq!(provider.max(), 255.0);
    assert_eq!(provider.format_label(), "INT_FMT");
    assert_eq!(provider.value_text(0, 1), "128");
}
