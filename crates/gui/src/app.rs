// SPDX-License-Identifier: GPL-3.0-or-later

//!
//! Reserva egui desktop app
//!

use crate::components::ReservationBoxGui;
use crate::config::ReservationDetails;
use eframe::App;
use eframe::egui::{CentralPanel, Context};
use reserva_gui_core::{Draw, Label, widget_y_spacing};

/// All data needed for the Reserva (egui) desktop app
pub struct ReservaApp {
    /// The reservation box filling the main window
    reservation_box: ReservationBoxGui,
}

impl ReservaApp {
    /// Create a new `ReservaApp`
    pub fn new(details: ReservationDetails) -> Self {
        Self {
            reservation_box: ReservationBoxGui::new(details),
        }
    }
}

impl App for ReservaApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        CentralPanel::default().show(ctx, |ui| {
            let space = widget_y_spacing(ui);
            ui.add_space(space * 2.0);
            ui.vertical_centered(|ui| {
                Label::heading(ui, "Reserva");
            });
            ui.separator();

            self.reservation_box.draw(ctx, ui);
        });
    }
}
