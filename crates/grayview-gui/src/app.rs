use std::path::{Path, PathBuf};

use grayview_core::controller::InteractionController;
use grayview_core::palette::PaletteTable;
use grayview_core::view::DisplayImage;
use grayview_core::viewport::ViewportTransform;
use tracing::warn;

use crate::convert::rgb_to_color_image;
use crate::panels;
use crate::settings::Settings;

pub struct GrayviewApp {
    pub palettes: PaletteTable,
    pub image: Option<DisplayImage>,
    pub texture: Option<egui::TextureHandle>,
    pub viewport: ViewportTransform,
    pub controller: InteractionController,
    pub selected_palette: String,
    pub filename: String,
    pub log_messages: Vec<String>,
    pub show_about: bool,
    settings: Settings,
}

impl GrayviewApp {
    pub fn new(settings: Settings) -> Self {
        let palettes = PaletteTable::new();
        // Fall back to the first catalog entry if the persisted name is stale.
        let selected_palette = if palettes.get(&settings.palette).is_some() {
            settings.palette.clone()
        } else {
            palettes.entries()[0].name.to_string()
        };

        let mut viewport = ViewportTransform::new();
        viewport.set_zoom_factor(settings.zoom_factor);

        Self {
            palettes,
            image: None,
            texture: None,
            viewport,
            controller: InteractionController::new(),
            selected_palette,
            filename: String::new(),
            log_messages: Vec::new(),
            show_about: false,
            settings,
        }
    }

    pub fn add_log(&mut self, msg: String) {
        self.log_messages.push(msg);
    }

    pub fn window_title(&self) -> String {
        if self.filename.is_empty() {
            "Grayview".to_string()
        } else {
            format!("Grayview - {}", self.filename)
        }
    }

    /// Load an image and replace the displayed bundle. A failed load
    /// keeps the current image completely unchanged.
    pub fn load_image(&mut self, ctx: &egui::Context, path: &Path) {
        let loaded = grayview_core::io::load(path).and_then(|provider| {
            DisplayImage::new(provider, &self.palettes, &self.selected_palette)
        });

        match loaded {
            Ok(image) => {
                self.filename = path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_default();
                self.image = Some(image);
                self.rebuild_texture(ctx);
                self.viewport.reset();
                self.controller.pointer_left();
                self.add_log(format!("Opened: {}", path.display()));
                ctx.send_viewport_cmd(egui::ViewportCommand::Title(self.window_title()));
            }
            Err(e) => {
                self.add_log(format!("Error loading image: {e}"));
            }
        }
    }

    /// Switch the active palette and re-expand the RGB buffer.
    pub fn select_palette(&mut self, ctx: &egui::Context, name: &str) {
        if self.palettes.get(name).is_none() || name == self.selected_palette {
            return;
        }

        if let Some(image) = self.image.as_mut() {
            if let Err(e) = image.repaint(&self.palettes, name) {
                self.add_log(format!("Error applying palette: {e}"));
                return;
            }
        }

        self.selected_palette = name.to_string();
        self.rebuild_texture(ctx);
    }

    fn rebuild_texture(&mut self, ctx: &egui::Context) {
        let Some(ref image) = self.image else {
            self.texture = None;
            return;
        };

        let color_image = rgb_to_color_image(image.rgb(), image.width(), image.height());
        self.texture = Some(ctx.load_texture("viewport", color_image, egui::TextureOptions::NEAREST));
    }

    fn handle_dropped_files(&mut self, ctx: &egui::Context) {
        let dropped: Vec<PathBuf> = ctx.input(|i| {
            i.raw
                .dropped_files
                .iter()
                .filter_map(|f| f.path.clone())
                .collect()
        });

        // Only one file is supported right now.
        if let Some(path) = dropped.first() {
            self.load_image(ctx, path);
        }
    }

    fn persist_settings(&mut self, ctx: &egui::Context) {
        self.settings.palette = self.selected_palette.clone();
        self.settings.zoom_factor = self.viewport.zoom_factor();
        if let Some(rect) = ctx.input(|i| i.viewport().inner_rect) {
            self.settings.window_width = rect.width();
            self.settings.window_height = rect.height();
        }

        if let Err(e) = self.settings.save() {
            warn!("Failed to save settings: {e}");
        }
    }
}

impl eframe::App for GrayviewApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_dropped_files(ctx);

        panels::menu_bar::show(ctx, self);
        panels::status::show(ctx, self);
        panels::viewport::show(ctx, self);

        if self.show_about {
            egui::Window::new("About Grayview")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.heading("Grayview");
                        ui.label("Scientific grayscale image viewer");
                        ui.add_space(8.0);
                        ui.label(format!("Version {}", env!("CARGO_PKG_VERSION")));
                        ui.add_space(8.0);
                        if ui.button("Close").clicked() {
                            self.show_about = false;
                        }
                    });
                });
        }

        if ctx.input(|i| i.viewport().close_requested()) {
            self.persist_settings(ctx);
        }
    }
}
