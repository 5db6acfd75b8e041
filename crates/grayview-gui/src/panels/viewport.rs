use grayview_core::viewport::WHEEL_DELTA_PER_NOTCH;

use crate::app::GrayviewApp;

// egui reports roughly 50 points of scroll per physical wheel step; rescale
// into the 120-unit notch convention the zoom accumulator expects.
const POINTS_PER_WHEEL_STEP: f32 = 50.0;

pub fn show(ctx: &egui::Context, app: &mut GrayviewApp) {
    egui::CentralPanel::default().show(ctx, |ui| {
        let rect = ui.available_rect_before_wrap();
        paint_background(ui, rect);

        let (Some(texture_id), Some(image_size)) = (
            app.texture.as_ref().map(|t| t.id()),
            app.image
                .as_ref()
                .map(|i| egui::vec2(i.width() as f32, i.height() as f32)),
        ) else {
            show_placeholder(ui);
            return;
        };

        let response = ui.allocate_rect(rect, egui::Sense::click_and_drag());

        handle_zoom(ui, &response, app);

        let display_size = image_size * app.viewport.zoom_factor() as f32;
        let scrollable_extent = (
            f64::from((display_size.x - rect.width()).max(0.0)),
            f64::from((display_size.y - rect.height()).max(0.0)),
        );
        handle_pan(&response, app, scrollable_extent);

        let (pan_x, pan_y) = app.viewport.pan_offset();
        let img_rect = egui::Rect::from_min_size(
            rect.min - egui::vec2(pan_x as f32, pan_y as f32),
            display_size,
        );

        draw_image(ui, texture_id, img_rect);
        handle_hover(&response, app, img_rect, display_size);
    });
}

fn paint_background(ui: &egui::Ui, rect: egui::Rect) {
    ui.painter()
        .rect_filled(rect, 0.0, egui::Color32::from_gray(30));
}

fn handle_zoom(ui: &egui::Ui, response: &egui::Response, app: &mut GrayviewApp) {
    let scroll_delta = ui.input(|i| i.raw_scroll_delta.y);
    if scroll_delta == 0.0 || !response.hovered() {
        return;
    }

    let raw = f64::from(scroll_delta / POINTS_PER_WHEEL_STEP) * WHEEL_DELTA_PER_NOTCH;
    app.viewport.wheel_zoom(raw);
}

fn handle_pan(response: &egui::Response, app: &mut GrayviewApp, scrollable_extent: (f64, f64)) {
    if response.drag_started_by(egui::PointerButton::Primary) {
        if let Some(pos) = response.interact_pointer_pos() {
            app.viewport
                .pointer_pressed((f64::from(pos.x), f64::from(pos.y)), false);
        }
    }

    if response.dragged_by(egui::PointerButton::Primary) {
        if let Some(pos) = response.interact_pointer_pos() {
            app.viewport
                .pointer_moved((f64::from(pos.x), f64::from(pos.y)), scrollable_extent);
        }
    }

    if response.drag_stopped() {
        app.viewport.pointer_released();
    }
}

fn handle_hover(
    response: &egui::Response,
    app: &mut GrayviewApp,
    img_rect: egui::Rect,
    display_size: egui::Vec2,
) {
    match response.hover_pos() {
        Some(pos) => {
            let local = pos - img_rect.min;
            let provider = app.image.as_ref().map(|i| i.provider());
            app.controller.pointer_moved(
                provider,
                (f64::from(local.x), f64::from(local.y)),
                (f64::from(display_size.x), f64::from(display_size.y)),
            );
        }
        None => app.controller.pointer_left(),
    }
}

fn draw_image(ui: &egui::Ui, texture_id: egui::TextureId, img_rect: egui::Rect) {
    ui.painter().image(
        texture_id,
        img_rect,
        egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
        egui::Color32::WHITE,
    );
}

fn show_placeholder(ui: &mut egui::Ui) {
    ui.centered_and_justified(|ui| {
        ui.label(
            egui::RichText::new("Open or drop a PNG/DDS image to begin")
                .size(18.0)
                .color(egui::Color32::from_gray(100)),
        );
    });
}
