//! Application entry point for the fractal tree viewer.
//!
//! This binary installs the tracing subscriber, sets up eframe/egui and
//! delegates all interactive logic and rendering to [`Viewer`] from the
//! `viewer` module.

mod viewer;

use std::time::Duration;

use tracing_subscriber::EnvFilter;
use viewer::Viewer;

/// Configures the global tracing subscriber.
///
/// The filter comes from `RUST_LOG` and defaults to `info`.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();
}

/// Starts the native eframe application.
///
/// The window is titled `"Fractal Tree"`; all UI state and rendering are
/// handled by [`Viewer`].
///
/// ### Returns
/// - `Ok(())` if the application runs to completion without errors.
/// - `Err` if eframe fails to create the native window or event loop.
fn main() -> eframe::Result<()> {
    init_tracing();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Fractal Tree")
            .with_inner_size([1280.0, 800.0]),
        ..Default::default()
    };

    tracing::info!("starting fractal tree viewer");

    eframe::run_native(
        "Fractal Tree",
        options,
        Box::new(|_cc| {
            // egui's frame clock starts at zero.
            Ok(Box::new(Viewer::new(Duration::ZERO)))
        }),
    )
}
