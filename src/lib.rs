pub mod app;
pub mod config;
pub mod error;
pub mod layout;
pub mod logging;
pub mod preview;
pub mod toolbar;
pub mod ui;
pub use error::{AppError, AppResult};

/// Entrypoint used by the demo binary.
pub fn run() -> AppResult<()> {
    logging::init();
    tracing::info!("starting previewbar");

    let startup_config = app::StartupConfig::from_args(std::env::args().skip(1));
    let toolbar_config = config::load_toolbar_config();
    let app = app::App::new(startup_config, toolbar_config);
    tracing::info!(prefix = app.control_prefix(), "resolved toolbar control prefix");
    app.run()
}
