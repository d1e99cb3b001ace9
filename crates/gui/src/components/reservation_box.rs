// SPDX-License-Identifier: GPL-3.0-or-later

//!
//! The reservation box: price, rating, reserve button, and the from/to
//! date pair
//!

use crate::common::{SelectionChange, UnboundedChannel};
use crate::config::ReservationDetails;
use crate::consts::{RANGE_ARROW_SYMBOL, STAR_SYMBOL};
use eframe::egui::{Align, Context, Layout, Ui};
use reserva_core::{Date, DisabledDays, PickerRole, Selection};
use reserva_gui_core::{Draw, Label, widget_y_spacing};

use crate::components::ReservationDateGui;

/// GUI component composing the whole reservation box.
///
/// This is the single owner of the selection pair.  The two date fields and
/// their pickers only ever notify changes over the channel; the messages are
/// drained here at the start of every frame, so a navigation or click is
/// fully applied before the next event is seen.
pub struct ReservationBoxGui {
    /// What is being reserved: price, rating, labels, unavailable dates
    details: ReservationDetails,

    /// The selection pair owned here and passed down to both fields
    selection: Selection,

    /// Flat disabled-day set expanded from the configured unavailable dates
    disabled: DisabledDays,

    /// Unbounded channel over which the pickers and clear buttons notify
    /// selection changes
    channel_selection: UnboundedChannel<SelectionChange>,

    /// The "check in" endpoint field
    check_in: ReservationDateGui,

    /// The "check out" endpoint field
    check_out: ReservationDateGui,
}

impl ReservationBoxGui {
    /// Create a new ReservationBoxGui from the reservation details
    pub fn new(details: ReservationDetails) -> Self {
        let channel_selection: UnboundedChannel<SelectionChange> =
            tokio::sync::mpsc::unbounded_channel().into();

        let disabled = DisabledDays::from_specs(&details.unavailable_dates);
        let selection = Selection {
            start: details.start_date,
            end: details.end_date,
        };

        let check_in = ReservationDateGui::new(
            PickerRole::Start,
            "Check in",
            details.start_date,
            channel_selection.tx.clone(),
        );
        let check_out = ReservationDateGui::new(
            PickerRole::End,
            "Check out",
            details.end_date,
            channel_selection.tx.clone(),
        );

        Self {
            details,
            selection,
            disabled,
            channel_selection,
            check_in,
            check_out,
        }
    }

    /// Drain and apply the selection changes the pickers emitted since the
    /// previous frame
    fn apply_selection_changes(&mut self) {
        while let Ok(change) = self.channel_selection.rx.try_recv() {
            debug!(
                "Selection change: {:?} -> {:?}",
                change.role,
                change.date.map(|date| date.as_day_key())
            );
            self.selection.set(change.role, change.date);
        }
    }

    fn draw_summary_row(&mut self, ui: &mut Ui) {
        ui.horizontal(|ui| {
            Label::sub_heading(
                ui,
                &format!("{} {}", self.details.price, self.details.currency_symbol),
            );
            Label::strong(ui, &format!("{:.1} {}", self.details.rating, STAR_SYMBOL));
            Label::weak(ui, &format!("({})", self.details.rating_count));

            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                if ui.button(&self.details.reserve_button_label).clicked() {
                    self.handle_reserve_click();
                }
            });
        });
    }

    /// There is no backend: reserving just logs the selected pair
    fn handle_reserve_click(&self) {
        let format = |date: Option<Date>| match date {
            Some(date) => date.as_long_date_format(),
            None => String::from("None"),
        };
        info!(
            "Reserve clicked: start = {}, end = {}",
            format(self.selection.start),
            format(self.selection.end)
        );
    }
}

impl Draw for ReservationBoxGui {
    fn draw(&mut self, ctx: &Context, ui: &mut Ui) {
        self.apply_selection_changes();

        self.draw_summary_row(ui);
        ui.separator();

        ui.horizontal(|ui| {
            self.check_in.draw(ctx, ui, &self.selection, &self.disabled);
            ui.label(RANGE_ARROW_SYMBOL);
            self.check_out
                .draw(ctx, ui, &self.selection, &self.disabled);
        });
        let spacing = widget_y_spacing(ui);
        ui.add_space(spacing);
    }
}
