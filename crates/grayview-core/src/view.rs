use crate::error::{GrayviewError, Result};
use crate::grid::PixelProvider;
use crate::palette::{self, PaletteTable};

/// The currently displayed image: grid, indexed bytes and the RGB
/// expansion travel as one unit.
///
/// A new load builds a complete bundle before the old one is replaced, so
/// no event ever observes a grid paired with a stale or half-built buffer.
#[derive(Debug)]
pub struct DisplayImage {
    provider: Box<dyn PixelProvider>,
    palette_name: String,
    rgb: Vec<u8>,
}

impl DisplayImage {
    pub fn new(
        provider: Box<dyn PixelProvider>,
        palettes: &PaletteTable,
        palette_name: &str,
    ) -> Result<Self> {
        let entry = palettes
            .get(palette_name)
            .ok_or_else(|| GrayviewError::UnknownPalette(palette_name.to_string()))?;
        let rgb = palette::apply(provider.indexed_data(), entry);

        Ok(Self {
            provider,
            palette_name: palette_name.to_string(),
            rgb,
        })
    }

    /// Re-expand the cached indexed buffer with another palette. A failed
    /// lookup leaves the bundle unchanged.
    pub fn repaint(&mut self, palettes: &PaletteTable, palette_name: &str) -> Result<()> {
        let entry = palettes
            .get(palette_name)
            .ok_or_else(|| GrayviewError::UnknownPalette(palette_name.to_string()))?;
        self.rgb = palette::apply(self.provider.indexed_data(), entry);
        self.palette_name = palette_name.to_string();
        Ok(())
    }

    pub fn provider(&self) -> &dyn PixelProvider {
        self.provider.as_ref()
    }

    pub fn palette_name(&self) -> &str {
        &self.palette_name
    }

    /// RGB buffer of size width*height*3, consumed by the display layer.
    pub fn rgb(&self) -> &[u8] {
        &self.rgb
    }

    pub fn width(&self) -> usize {
        self.provider.width()
    }

    pub fn height(&self) -> usize {
        self.provider.height()
    }
}
