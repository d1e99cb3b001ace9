// SPDX-License-Identifier: GPL-3.0-or-later

//!
//! Everything for one endpoint field of the reservation date pair
//!

use crate::common::SelectionChange;
use crate::components::DatePickerGui;
use crate::consts::{CLEAR_BUTTON_WIDTH, CLEAR_SYMBOL, DATE_FIELD_WIDTH};
use eframe::egui::{self, Context, RichText, Ui, Vec2};
use reserva_core::{Date, DisabledDays, PickerRole, Selection};
use reserva_gui_core::body_text_height;
use tokio::sync::mpsc::UnboundedSender;

/// GUI component for one endpoint of the date pair: the collapsed field
/// showing the chosen date (or a placeholder), an inline clear button, and
/// the picker popup it toggles.
///
/// Clearing emits `None` for this endpoint and never touches the other one.
#[derive(Debug)]
pub struct ReservationDateGui {
    /// Which selection endpoint this field edits
    role: PickerRole,

    /// Placeholder shown while no date is selected.  e.g. "Check in"
    empty_label: String,

    /// Whether the picker popup is open
    picker_open: bool,

    /// The picker popup
    picker: DatePickerGui,

    /// Emits clear actions upward (day clicks are emitted by the picker)
    tx_selection: UnboundedSender<SelectionChange>,
}

impl ReservationDateGui {
    /// Create a new ReservationDateGui with a closed picker
    pub fn new(
        role: PickerRole,
        empty_label: &str,
        initial_date: Option<Date>,
        tx_selection: UnboundedSender<SelectionChange>,
    ) -> Self {
        Self {
            role,
            empty_label: empty_label.to_string(),
            picker_open: false,
            picker: DatePickerGui::new(role, initial_date, tx_selection.clone()),
            tx_selection,
        }
    }

    pub fn draw(
        &mut self,
        ctx: &Context,
        ui: &mut Ui,
        selection: &Selection,
        disabled: &DisabledDays,
    ) {
        let selected = selection.endpoint(self.role);

        ui.vertical(|ui| {
            ui.horizontal(|ui| {
                self.draw_field(ui, selected);
                if selected.is_some() {
                    self.draw_clear_button(ui);
                }
            });

            if self.picker_open {
                egui::Frame::group(ui.style()).show(ui, |ui| {
                    if self.picker.draw(ctx, ui, selection, disabled) {
                        self.picker_open = false;
                    }
                });
            }
        });
    }

    /// The collapsed field: the selected date (or placeholder) that toggles
    /// the picker popup
    fn draw_field(&mut self, ui: &mut Ui, selected: Option<Date>) {
        let text = match selected {
            Some(date) => RichText::new(date.as_long_date_format()),
            None => RichText::new(self.empty_label.as_str()).weak(),
        };

        let field = ui.add(egui::Button::new(text).min_size(Vec2::new(DATE_FIELD_WIDTH, 0.0)));
        if field.clicked() {
            self.picker_open = !self.picker_open;
            if self.picker_open {
                // Reopen on the month of the current selection
                self.picker.show_month_of(selected);
            }
            debug!(
                "{:?} picker {}",
                self.role,
                if self.picker_open { "opened" } else { "closed" }
            );
        }
    }

    fn draw_clear_button(&mut self, ui: &mut Ui) {
        let button_height = body_text_height(ui);
        let clear = ui.add_sized(
            [CLEAR_BUTTON_WIDTH, button_height],
            egui::Button::new(RichText::new(CLEAR_SYMBOL)),
        );
        if clear.clicked() {
            debug!("Clearing {:?} selection", self.role);
            let _ = self.tx_selection.send(SelectionChange {
                role: self.role,
                date: None,
            });
        }
    }
}
