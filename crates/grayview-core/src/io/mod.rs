pub mod dds;
pub mod png;

use std::path::Path;

use tracing::info;

use crate::error::{GrayviewError, Result};
use crate::grid::PixelProvider;

/// Load an image file, dispatching on the lowercased file extension.
///
/// A failed load returns an error and touches no state; the caller keeps
/// whatever image it was already displaying.
pub fn load(path: &Path) -> Result<Box<dyn PixelProvider>> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default();

    let provider = match ext.as_str() {
        "png" => png::load(path)?,
        "dds" => dds::load(path)?,
        other => return Err(GrayviewError::UnsupportedFormat(other.to_string())),
    };

    info!(
        "Loaded {}: {}x{} {} (range {}..{})",
        path.display(),
        provider.width(),
        provider.height(),
        provider.format_label(),
        provider.min(),
        provider.max()
    );

    Ok(provider)
}
