// SPDX-License-Identifier: GPL-3.0-or-later

//!
//! All Reserva GUI components
//!

mod date_picker;
mod reservation_box;
mod reservation_date;

pub use date_picker::*;
pub use reservation_box::*;
pub use reservation_date::*;
