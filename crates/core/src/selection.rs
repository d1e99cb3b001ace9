// SPDX-License-Identifier: MIT

//!
//! Range-selection legality and per-cell render classification
//!

use crate::{Date, DayCell, DisabledDays, date_range};
use log::debug;

/// Which endpoint of the range a picker instance mutates.
///
/// The role is fixed per picker instance; a from/to pair is represented by
/// composing two pickers, one of each role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PickerRole {
    Start,
    End,
}

/// The currently selected range endpoints.
///
/// Both endpoints are independently optional and independently clearable.
/// Nothing at this level forces `start` <= `end`; ordering is enforced only
/// when a new endpoint is proposed (see [`PickerRules::propose`]).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Selection {
    pub start: Option<Date>,
    pub end: Option<Date>,
}

impl Selection {
    /// The endpoint a picker of the given role mutates
    pub fn endpoint(&self, role: PickerRole) -> Option<Date> {
        match role {
            PickerRole::Start => self.start,
            PickerRole::End => self.end,
        }
    }

    /// Replace one endpoint, leaving the other untouched
    pub fn set(&mut self, role: PickerRole, date: Option<Date>) {
        match role {
            PickerRole::Start => self.start = date,
            PickerRole::End => self.end = date,
        }
    }

    /// Whether the day lies strictly between the two endpoints (false
    /// unless both are set)
    pub fn in_range(&self, day: Date) -> bool {
        match (self.start, self.end) {
            (Some(start), Some(end)) => start < day && day < end,
            _ => false,
        }
    }

    /// Whether both endpoints are set
    pub fn is_complete(&self) -> bool {
        self.start.is_some() && self.end.is_some()
    }
}

/// Derived render state for one grid cell.  Computed per frame from the
/// current selection; never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayClass {
    pub is_today: bool,
    pub is_start: bool,
    pub is_end: bool,
    pub in_range: bool,
    pub disabled: bool,
    pub outside_month: bool,
    /// Start or end cell of a fully selected range, drawn joined to the
    /// in-range days between them
    pub connected: bool,
}

/// The selection rules for one picker instance: its role, the current
/// externally-owned selection, and the disabled-day set.
///
/// A stateless view over borrowed state: construct it fresh wherever a
/// click or a render pass needs a decision.
#[derive(Debug, Clone, Copy)]
pub struct PickerRules<'a> {
    role: PickerRole,
    selection: Selection,
    disabled: &'a DisabledDays,
}

impl<'a> PickerRules<'a> {
    pub fn new(role: PickerRole, selection: Selection, disabled: &'a DisabledDays) -> Self {
        PickerRules {
            role,
            selection,
            disabled,
        }
    }

    /// Whether the given day may be clicked at all.
    ///
    /// A day is not selectable when it is disabled, or when it falls on the
    /// wrong side of the already-selected counterpart endpoint: a start must
    /// come strictly before an existing end, an end strictly after an
    /// existing start.
    pub fn is_selectable(&self, day: Date) -> bool {
        match self.role {
            PickerRole::Start => {
                if let Some(end) = self.selection.end {
                    if day >= end {
                        return false;
                    }
                }
            }
            PickerRole::End => {
                if let Some(start) = self.selection.start {
                    if day <= start {
                        return false;
                    }
                }
            }
        }
        !self.disabled.contains(&day)
    }

    /// Propose the given day as the new value for this picker's endpoint.
    ///
    /// Returns the day to emit, or `None` when the proposal is rejected: the
    /// day itself is not selectable, or the tentative pair would span a
    /// disabled day.  The span check is what stops a range whose endpoints
    /// are both free from straddling a blocked date in between.  Rejection
    /// is silent; no state changes here.
    pub fn propose(&self, day: Date) -> Option<Date> {
        if !self.is_selectable(day) {
            return None;
        }

        let (start, end) = match self.role {
            PickerRole::Start => (Some(day), self.selection.end),
            PickerRole::End => (self.selection.start, Some(day)),
        };

        if let (Some(start), Some(end)) = (start, end) {
            let straddles_disabled = date_range(start, end)
                .iter()
                .any(|span_day| self.disabled.contains(span_day));
            if straddles_disabled {
                debug!(
                    "Rejecting {:?} selection {}: span {} -> {} crosses a disabled day",
                    self.role,
                    day.as_day_key(),
                    start.as_day_key(),
                    end.as_day_key()
                );
                return None;
            }
        }

        Some(day)
    }

    /// Classify one grid cell for rendering
    pub fn classify(&self, cell: &DayCell, today: Date) -> DayClass {
        let is_start = self.selection.start == Some(cell.date);
        let is_end = self.selection.end == Some(cell.date);
        DayClass {
            is_today: cell.date == today,
            is_start,
            is_end,
            in_range: self.selection.in_range(cell.date),
            disabled: !self.is_selectable(cell.date),
            outside_month: !cell.is_current_month,
            connected: (is_start || is_end) && self.selection.is_complete(),
        }
    }
}
