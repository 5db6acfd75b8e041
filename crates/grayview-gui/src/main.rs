mod app;
mod convert;
mod panels;
mod settings;

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let settings = settings::Settings::load();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([settings.window_width, settings.window_height])
            .with_min_inner_size([400.0, 300.0])
            .with_title("Grayview"),
        ..Default::default()
    };

    eframe::run_native(
        "Grayview",
        options,
        Box::new(|_cc| Ok(Box::new(app::GrayviewApp::new(settings)))),
    )
}
