// SPDX-License-Identifier: GPL-3.0-or-later

//!
//! *Part of the wider Reserva project*
//!
//! This library crate provides the GUI parts of the Reserva desktop
//! application: the date-range picker widget and the reservation box that
//! composes two of them into a from/to pair.
//!

mod app;
mod common;
mod components;
mod config;
mod consts;

pub use app::ReservaApp;
pub use config::{ConfigError, ReservationDetails};
pub use consts::DEFAULT_WINDOW_SIZE;

#[macro_use]
extern crate log;
