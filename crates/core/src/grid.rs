// SPDX-License-Identifier: MIT

//!
//! The calendar month grid: the displayed month and its day cells
//!

use crate::{Date, Day, Month, Year};
use log::debug;

/// Short weekday labels for the grid header, Monday first
pub static WEEKDAY_SHORT_LABELS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

/// One rendered cell of the calendar grid.
///
/// Cells are created fresh on every grid build and never mutated;
/// `is_current_month` is false for the leading/trailing cells that belong to
/// the adjacent months but are shown to complete whole weeks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayCell {
    pub date: Date,
    pub day_of_month: Day,
    pub is_current_month: bool,
}

impl DayCell {
    fn new(date: Date, is_current_month: bool) -> Self {
        DayCell {
            date,
            day_of_month: date.day(),
            is_current_month,
        }
    }
}

/// The (year, month) pair currently visible as a calendar grid.
///
/// Only navigation mutates it.  Because no day-of-month is stored, stepping
/// a month is implicitly pinned to the 1st: navigating forward from a 31st
/// can never skip a short month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayedMonth {
    month: Month,
    year: Year,
}

impl DisplayedMonth {
    /// The month containing the given date
    pub fn from_date(date: Date) -> Self {
        DisplayedMonth {
            month: date.month(),
            year: date.year(),
        }
    }

    /// The month containing today
    pub fn current() -> Self {
        Self::from_date(Date::today())
    }

    pub fn month(&self) -> Month {
        self.month
    }

    pub fn year(&self) -> Year {
        self.year
    }

    /// Step forward one calendar month, rolling December into January.
    /// Saturates at December [`crate::MAX_YEAR`].
    pub fn next(&mut self) {
        *self = Self::from_date(Date::last_of(self.month, self.year).next_day());
        debug!("Displayed month -> {}", self.label());
    }

    /// Step back one calendar month, rolling January into December.
    /// Saturates at January [`crate::MIN_YEAR`].
    pub fn previous(&mut self) {
        *self = Self::from_date(Date::first_of(self.month, self.year).previous_day());
        debug!("Displayed month -> {}", self.label());
    }

    /// The month header label: full month name and 4-digit year.
    /// e.g. "May 2022"
    pub fn label(&self) -> String {
        format!("{} {:04}", self.month.name(), self.year.value())
    }

    /// All cells of the displayed grid in chronological order: trailing days
    /// of the previous month, every day of this month, then leading days of
    /// the next month, aligned so the grid begins on a Monday and ends on a
    /// Sunday.
    ///
    /// The trailing count is `6 - weekday(last day)` with Monday = 0, so a
    /// month whose last day is a Sunday gets no trailing cells at all and
    /// renders fewer weeks than its neighbours.  That unevenness is the
    /// intended behaviour.
    ///
    /// Padding stops at the calendar bounds: December [`crate::MAX_YEAR`]
    /// and January [`crate::MIN_YEAR`] have no adjacent month to pad from,
    /// so their outermost week may be short.
    pub fn grid(&self) -> Vec<DayCell> {
        let mut cells = self.previous_month_cells();
        cells.extend(self.current_month_cells());
        cells.extend(self.next_month_cells());
        cells
    }

    fn current_month_cells(&self) -> Vec<DayCell> {
        let mut cells = Vec::with_capacity(self.month.length(self.year) as usize);
        let mut date = Date::first_of(self.month, self.year);
        let last = Date::last_of(self.month, self.year);
        loop {
            cells.push(DayCell::new(date, true));
            if date == last {
                break;
            }
            date = date.next_day();
        }
        cells
    }

    fn previous_month_cells(&self) -> Vec<DayCell> {
        let first = Date::first_of(self.month, self.year);
        let leading = first.weekday_from_monday();
        let mut cells = Vec::with_capacity(leading as usize);
        let mut date = first;
        for _ in 0..leading {
            let previous = date.previous_day();
            // previous_day saturates at the calendar start
            if previous == date {
                break;
            }
            date = previous;
            cells.push(DayCell::new(date, false));
        }
        cells.reverse();
        cells
    }

    fn next_month_cells(&self) -> Vec<DayCell> {
        let last = Date::last_of(self.month, self.year);
        let trailing = 6 - last.weekday_from_monday();
        let mut cells = Vec::with_capacity(trailing as usize);
        let mut date = last;
        for _ in 0..trailing {
            let next = date.next_day();
            // next_day saturates at the calendar end
            if next == date {
                break;
            }
            date = next;
            cells.push(DayCell::new(date, false));
        }
        cells
    }
}

#[cfg(test)]
mod test {
    use super::DisplayedMonth;
    use crate::Date;

    fn displayed(month: i64, year: i64) -> DisplayedMonth {
        DisplayedMonth::from_date(Date::from(1, month, year).unwrap())
    }

    #[test]
    fn may_2022() {
        // 1st May 2022 was a Sunday, 31st May a Tuesday: 6 leading cells and
        // 5 trailing cells around the 31 days of May
        let grid = displayed(5, 2022).grid();
        assert_eq!(grid.len(), 42);

        assert_eq!(grid[0].date, Date::from(25, 4, 2022).unwrap());
        assert!(!grid[0].is_current_month);
        assert_eq!(grid[0].date.weekday_from_monday(), 0);

        assert_eq!(grid[41].date, Date::from(5, 6, 2022).unwrap());
        assert!(!grid[41].is_current_month);
        assert_eq!(grid[41].date.weekday_from_monday(), 6);

        let current: Vec<_> = grid.iter().filter(|cell| cell.is_current_month).collect();
        assert_eq!(current.len(), 31);
        for (index, cell) in current.iter().enumerate() {
            assert_eq!(cell.day_of_month.value() as usize, index + 1);
            assert_eq!(cell.date, Date::from(index as i64 + 1, 5, 2022).unwrap());
        }
    }

    #[test]
    fn whole_weeks_monday_to_sunday() {
        for year in [2020, 2021, 2022, 2023] {
            for month in 1..=12 {
                let grid = displayed(month, year).grid();
                assert_eq!(grid.len() % 7, 0);
                assert_eq!(grid.first().unwrap().date.weekday_from_monday(), 0);
                assert_eq!(grid.last().unwrap().date.weekday_from_monday(), 6);
            }
        }
    }

    #[test]
    fn month_ending_on_sunday_gets_no_trailing_cells() {
        // 31st January 2021 was a Sunday, so the grid stops there
        let grid = displayed(1, 2021).grid();
        assert_eq!(grid.len(), 35);
        assert_eq!(grid.last().unwrap().date, Date::from(31, 1, 2021).unwrap());
        assert!(grid.last().unwrap().is_current_month);
    }

    #[test]
    fn exact_fit_month_has_no_padding() {
        // February 2021 ran Monday 1st to Sunday 28th: four exact weeks
        let grid = displayed(2, 2021).grid();
        assert_eq!(grid.len(), 28);
        assert!(grid.iter().all(|cell| cell.is_current_month));
    }

    #[test]
    fn grid_is_deterministic() {
        let displayed = displayed(3, 2022);
        assert_eq!(displayed.grid(), displayed.grid());
    }

    #[test]
    fn navigation_round_trip() {
        let mut displayed = displayed(3, 2022);
        displayed.previous();
        assert_eq!(displayed.label(), "February 2022");
        displayed.next();
        assert_eq!(displayed.label(), "March 2022");
    }

    #[test]
    fn navigation_pins_to_first_of_month() {
        // Stepping forward from 31st January must land on February
        let mut displayed = DisplayedMonth::from_date(Date::from(31, 1, 2022).unwrap());
        displayed.next();
        assert_eq!(displayed.label(), "February 2022");
    }

    #[test]
    fn grid_stops_at_the_calendar_end() {
        // December 9999 has no following month to pad from.  31st December
        // 9999 is a Friday, so the final week is short rather than padded
        // with repeats of the saturated day.
        let grid = displayed(12, 9999).grid();
        assert_eq!(grid.last().unwrap().date, Date::from(31, 12, 9999).unwrap());
        assert!(grid.last().unwrap().is_current_month);
        assert_eq!(grid[0].date.weekday_from_monday(), 0);

        // 1st December 9999 is a Wednesday: 2 leading cells, no trailing
        assert_eq!(grid.len(), 33);
        for pair in grid.windows(2) {
            assert!(pair[0].date < pair[1].date);
        }
    }

    #[test]
    fn grid_stops_at_the_calendar_start() {
        // 1st January of year 1 is a Monday, so the grid needs no leading
        // cells and stays whole weeks
        let grid = displayed(1, 1).grid();
        assert_eq!(grid[0].date, Date::from(1, 1, 1).unwrap());
        assert_eq!(grid.len(), 35);
        assert_eq!(grid.last().unwrap().date.weekday_from_monday(), 6);
        for pair in grid.windows(2) {
            assert!(pair[0].date < pair[1].date);
        }
    }

    #[test]
    fn label_pads_the_year_to_four_digits() {
        assert_eq!(displayed(3, 999).label(), "March 0999");
        assert_eq!(displayed(5, 2022).label(), "May 2022");
    }

    #[test]
    fn navigation_rolls_over_year() {
        let mut december = displayed(12, 2021);
        december.next();
        assert_eq!(december.label(), "January 2022");

        let mut january = displayed(1, 2022);
        january.previous();
        assert_eq!(january.label(), "December 2021");
    }
}
