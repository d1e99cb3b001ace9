// SPDX-License-Identifier: MIT

//!
//! Inclusive calendar-day range expansion
//!

use crate::Date;

/// Every calendar day from `start` to `end` inclusive, in ascending order.
///
/// The returned sequence has length `(end - start in whole days) + 1`, so
/// `date_range(d, d)` is `[d]`.  If `end` is before `start` the result is
/// empty; callers supplying such a range have a configuration error and it
/// is absorbed rather than reported.
pub fn date_range(start: Date, end: Date) -> Vec<Date> {
    let mut days = Vec::new();
    let mut day = start;
    while day <= end {
        days.push(day);
        if day == end {
            break;
        }
        day = day.next_day();
    }
    days
}
