/// Convert a packed RGB buffer (3 bytes per pixel, row-major) to an egui
/// ColorImage.
pub fn rgb_to_color_image(rgb: &[u8], width: usize, height: usize) -> egui::ColorImage {
    debug_assert_eq!(rgb.len(), width * height * 3);

    let pixels = rgb
        .chunks_exact(3)
        .map(|c| egui::Color32::from_rgb(c[0], c[1], c[2]))
        .collect();

    egui::ColorImage {
        size: [width, height],
        pixels,
        source_size: Default::default(),
    }
}
