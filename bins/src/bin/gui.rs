// SPDX-License-Identifier: GPL-3.0-or-later

//!
//! The Reserva desktop app
//!

use clap::Parser;
use eframe::egui::ViewportBuilder;
use reserva_gui::{DEFAULT_WINDOW_SIZE, ReservaApp, ReservationDetails};
use simplelog::{
    ColorChoice, CombinedLogger, ConfigBuilder, LevelFilter, TermLogger, TerminalMode,
};
use std::path::PathBuf;

#[macro_use]
extern crate log;
extern crate simplelog;

/// The Reserva reservation demo
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Path to a reservation JSON config.  Falls back to the platform config
    /// directory, then to the built-in demo reservation.
    #[arg(long)]
    config: Option<PathBuf>,
}

/// Entry point for the native GUI desktop application
fn main() -> Result<(), eframe::Error> {
    // Setup logging
    let config_log = ConfigBuilder::new().add_filter_allow_str("reserva").build();

    CombinedLogger::init(vec![TermLogger::new(
        LevelFilter::Debug,
        config_log,
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )])
    .unwrap();

    let cli = Cli::parse();

    // Load the reservation details.  A broken config shouldn't stop the demo
    // from coming up, so fall back to the defaults on error.
    let details = match ReservationDetails::load(cli.config.as_deref()) {
        Ok(details) => details,
        Err(error) => {
            error!("Config error ({error}), using the demo details");
            ReservationDetails::default()
        }
    };

    // Setup the main window's default options
    let main_viewport_options = ViewportBuilder::default()
        .with_inner_size([DEFAULT_WINDOW_SIZE.width, DEFAULT_WINDOW_SIZE.height]);

    // Setup the eframe options for a native application
    let options = eframe::NativeOptions {
        viewport: main_viewport_options,
        ..Default::default()
    };

    info!("Launching application");

    // Run the application
    eframe::run_native(
        "Reserva",
        options,
        Box::new(|_cc| Ok(Box::new(ReservaApp::new(details)))),
    )
}
