use grayview_core::grid::PixelProvider;

use crate::app::GrayviewApp;

pub fn show(ctx: &egui::Context, app: &mut GrayviewApp) {
    egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
        ui.add_space(2.0);

        ui.horizontal(|ui| {
            ui.label(app.controller.status_text());
            ui.separator();

            match app.image.as_ref().map(|i| i.provider()) {
                Some(provider) => {
                    ui.label(format!("{}x{}", provider.width(), provider.height()));
                    ui.separator();
                    ui.label(format!("{}..{}", provider.min(), provider.max()));
                    ui.separator();
                    ui.label(provider.format_label());
                }
                None => {
                    ui.label("0x0");
                    ui.separator();
                    ui.label("0..0");
                    ui.separator();
                    ui.label("undefined");
                }
            }

            ui.separator();
            ui.label(format!("Zoom: {:.0}%", app.viewport.zoom_factor() * 100.0));
            ui.separator();
            ui.label(format!("Palette: {}", app.selected_palette));
        });

        // Most recent log line (load reports, errors).
        if let Some(msg) = app.log_messages.last() {
            ui.label(msg.clone());
        }

        ui.add_space(2.0);
    });
}
