// SPDX-License-Identifier: GPL-3.0-or-later

//!
//! Everything for the month-calendar picker popup
//!

use crate::common::SelectionChange;
use crate::consts::{DAY_CELL_SIZE, NEXT_MONTH_SYMBOL, PREVIOUS_MONTH_SYMBOL};
use eframe::egui::{self, Context, RichText, Ui, Vec2};
use reserva_core::{
    Date, DayCell, DisabledDays, DisplayedMonth, PickerRole, PickerRules, Selection,
    WEEKDAY_SHORT_LABELS,
};
use reserva_gui_core::Label;
use tokio::sync::mpsc::UnboundedSender;

/// GUI component for one month-calendar picker.
///
/// The component owns only its displayed-month cursor.  The selection pair
/// and the disabled-day set are owned by the reservation box and passed in
/// per frame; a legal day click is emitted upward as a [`SelectionChange`],
/// an illegal one is a silent no-op.
#[derive(Debug)]
pub struct DatePickerGui {
    /// Which selection endpoint a day click mutates
    role: PickerRole,

    /// The month currently shown as a grid
    displayed_month: DisplayedMonth,

    /// Emits successful selections upward
    tx_selection: UnboundedSender<SelectionChange>,
}

impl DatePickerGui {
    /// Create a new DatePickerGui showing the month of `initial_date` (today
    /// when none is given)
    pub fn new(
        role: PickerRole,
        initial_date: Option<Date>,
        tx_selection: UnboundedSender<SelectionChange>,
    ) -> Self {
        let displayed_month = match initial_date {
            Some(date) => DisplayedMonth::from_date(date),
            None => DisplayedMonth::current(),
        };
        Self {
            role,
            displayed_month,
            tx_selection,
        }
    }

    /// Point the grid at the month containing `date`.  Used when the popup
    /// reopens so it shows the current selection rather than wherever the
    /// user last navigated to.
    pub fn show_month_of(&mut self, date: Option<Date>) {
        if let Some(date) = date {
            self.displayed_month = DisplayedMonth::from_date(date);
        }
    }

    /// Draw the picker.  Returns true when a day was selected this frame so
    /// the caller can close the popup.
    pub fn draw(
        &mut self,
        _ctx: &Context,
        ui: &mut Ui,
        selection: &Selection,
        disabled: &DisabledDays,
    ) -> bool {
        self.draw_header(ui);
        ui.separator();
        self.draw_grid(ui, selection, disabled)
    }

    fn draw_header(&mut self, ui: &mut Ui) {
        ui.horizontal(|ui| {
            if ui.button(PREVIOUS_MONTH_SYMBOL).clicked() {
                self.displayed_month.previous();
            }
            Label::strong(ui, &self.displayed_month.label());
            if ui.button(NEXT_MONTH_SYMBOL).clicked() {
                self.displayed_month.next();
            }
        });
    }

    fn draw_grid(&mut self, ui: &mut Ui, selection: &Selection, disabled: &DisabledDays) -> bool {
        let rules = PickerRules::new(self.role, *selection, disabled);
        let today = Date::today();
        let cells = self.displayed_month.grid();
        let mut selected = false;

        egui::Grid::new(("picker_grid", self.role))
            .min_col_width(DAY_CELL_SIZE)
            .show(ui, |ui| {
                for weekday in WEEKDAY_SHORT_LABELS {
                    Label::weak(ui, weekday);
                }
                ui.end_row();

                for week in cells.chunks(7) {
                    for cell in week {
                        if self.draw_day_cell(ui, cell, &rules, today) {
                            selected = true;
                        }
                    }
                    ui.end_row();
                }
            });

        selected
    }

    /// Draw one day cell.  Returns true when the cell was clicked and the
    /// click produced a selection.
    fn draw_day_cell(
        &self,
        ui: &mut Ui,
        cell: &DayCell,
        rules: &PickerRules<'_>,
        today: Date,
    ) -> bool {
        let class = rules.classify(cell, today);

        let mut text = RichText::new(format!("{:02}", cell.day_of_month.value()));
        if class.outside_month {
            text = text.weak();
        }
        if class.is_today {
            text = text.underline();
        }

        let mut button = egui::Button::new(text).min_size(Vec2::splat(DAY_CELL_SIZE));
        let range_fill = ui.visuals().selection.bg_fill;
        if class.connected {
            button = button.fill(range_fill);
        } else if class.is_start || class.is_end {
            button = button.fill(range_fill.linear_multiply(0.8));
        } else if class.in_range {
            button = button.fill(range_fill.linear_multiply(0.3));
        }

        let response = ui.add_enabled(!class.disabled, button);
        if response.clicked() {
            match rules.propose(cell.date) {
                Some(date) => {
                    debug!("Emitting {:?} selection {}", self.role, date.as_day_key());
                    let _ = self.tx_selection.send(SelectionChange {
                        role: self.role,
                        date: Some(date),
                    });
                    return true;
                }
                None => {
                    // The endpoints are legal but the span between them
                    // crosses a disabled day: swallow the click
                    debug!("Rejected {:?} selection {}", self.role, cell.date.as_day_key());
                }
            }
        }
        false
    }
}
