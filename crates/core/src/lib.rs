// SPDX-License-Identifier: MIT

//!
//! *Part of the wider Reserva project*
//!
//! This crate defines the pure date model and picker logic used across the
//! Reserva project: the validated calendar [`Date`] type, inclusive
//! [`date_range`] expansion, the calendar month grid, unavailable-date
//! configuration, and the range-selection rules.
//!
//! Everything here is synchronous, deterministic, and UI-free: the GUI crate
//! recomputes grids and selection decisions from these functions on demand
//! rather than caching them.
//!

mod date;
mod grid;
mod range;
mod selection;
mod unavailable;

pub use date::*;
pub use grid::*;
pub use range::*;
pub use selection::*;
pub use unavailable::*;
