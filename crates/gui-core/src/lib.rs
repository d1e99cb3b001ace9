// SPDX-License-Identifier: GPL-3.0-or-later

//!
//! *Part of the wider Reserva project*
//!
//! This library crate includes the small egui building blocks that the
//! Reserva desktop GUI application uses and that other projects may also
//! wish to use.
//!

mod egui;

pub use egui::*;
