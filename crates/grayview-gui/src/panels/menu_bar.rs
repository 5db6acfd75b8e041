use crate::app::GrayviewApp;

pub fn show(ctx: &egui::Context, app: &mut GrayviewApp) {
    egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
        egui::MenuBar::new().ui(ui, |ui| {
            ui.menu_button("File", |ui| {
                let open_shortcut =
                    egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::O);
                if ui
                    .add(
                        egui::Button::new("Open...")
                            .shortcut_text(ctx.format_shortcut(&open_shortcut)),
                    )
                    .clicked()
                {
                    ui.close();
                    open_file(ctx, app);
                }

                ui.separator();

                let quit_shortcut =
                    egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::Q);
                if ui
                    .add(
                        egui::Button::new("Quit")
                            .shortcut_text(ctx.format_shortcut(&quit_shortcut)),
                    )
                    .clicked()
                {
                    ui.close();
                    ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                }
            });

            ui.menu_button("View", |ui| {
                if ui.button("Zoom In").clicked() {
                    ui.close();
                    app.viewport.zoom_in();
                }
                if ui.button("Zoom Out").clicked() {
                    ui.close();
                    app.viewport.zoom_out();
                }
                if ui.button("Reset Zoom").clicked() {
                    ui.close();
                    app.viewport.zoom_reset();
                }

                ui.separator();

                ui.menu_button("Palette", |ui| {
                    let names: Vec<&'static str> =
                        app.palettes.entries().iter().map(|e| e.name).collect();
                    for name in names {
                        if ui.radio(app.selected_palette == name, name).clicked() {
                            ui.close();
                            app.select_palette(ctx, name);
                        }
                    }
                });
            });

            ui.menu_button("Help", |ui| {
                if ui.button("About").clicked() {
                    ui.close();
                    app.show_about = true;
                }
            });
        });

        // Keyboard shortcuts (consumed outside menus)
        if ctx.input_mut(|i| {
            i.consume_shortcut(&egui::KeyboardShortcut::new(
                egui::Modifiers::COMMAND,
                egui::Key::O,
            ))
        }) {
            open_file(ctx, app);
        }
        if ctx.input_mut(|i| {
            i.consume_shortcut(&egui::KeyboardShortcut::new(
                egui::Modifiers::COMMAND,
                egui::Key::Q,
            ))
        }) {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }
    });
}

fn open_file(ctx: &egui::Context, app: &mut GrayviewApp) {
    if let Some(path) = rfd::FileDialog::new()
        .add_filter("Image files", &["png", "dds"])
        .add_filter("PNG files", &["png"])
        .add_filter("DDS files", &["dds"])
        .add_filter("All files", &["*"])
        .pick_file()
    {
        app.load_image(ctx, &path);
    }
}
