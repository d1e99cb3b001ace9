// SPDX-License-Identifier: GPL-3.0-or-later

//!
//! Some configuration consts
//!

pub struct WindowSize {
    pub width: f32,
    pub height: f32,
}

pub const DEFAULT_WINDOW_SIZE: WindowSize = WindowSize {
    width: 420.0,
    height: 640.0,
};

pub const DAY_CELL_SIZE: f32 = 34.0;
pub const DATE_FIELD_WIDTH: f32 = 110.0;

pub static CLEAR_BUTTON_WIDTH: f32 = 18.0;

pub static PREVIOUS_MONTH_SYMBOL: &str = "◀";
pub static NEXT_MONTH_SYMBOL: &str = "▶";
pub static CLEAR_SYMBOL: &str = "✖";
pub static RANGE_ARROW_SYMBOL: &str = "➡";
pub static STAR_SYMBOL: &str = "★";
