// Prevent console window in addition to Slint window in Windows release builds when, e.g., starting the app via file manager. Ignored on other platforms.
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

slint::include_modules!();

mod adapter;
mod config;
mod error;
mod export;
mod file_utils;
mod image_loader;
mod photo;
mod startup;
mod state;
mod ui;
mod viewer;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut logger = env_logger::Builder::from_default_env();
    #[cfg(debug_assertions)]
    logger.filter_level(log::LevelFilter::Debug);
    logger.init();

    let app = AppWindow::new()?;
    let app_state = state::AppState::new(&app);

    // Setup all UI event handlers
    ui::setup_handlers(&app, &app_state);
    startup::configure_startup_loading(&app);

    app.run()?;

    // Queued exports that have not started are dropped with the window.
    let pending = app_state.exports.pending();
    if pending > 0 {
        log::info!("Window closed with {} export(s) pending", pending);
    }
    app_state.exports.cancel_pending();
    if !app_state.exports.wait_idle(config::EXPORT_DRAIN_TIMEOUT) {
        log::warn!(
            "Abandoning {} export(s) still running after {:?}",
            app_state.exports.pending(),
            config::EXPORT_DRAIN_TIMEOUT
        );
    }

    Ok(())
}
