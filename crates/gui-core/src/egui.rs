// SPDX-License-Identifier: GPL-3.0-or-later

//!
//! egui helpers
//!

mod draw;
mod helpers;
mod label;

pub use draw::*;
pub use helpers::*;
pub use label::*;
