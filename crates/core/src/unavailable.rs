// SPDX-License-Identifier: MIT

//!
//! Unavailable-date configuration and the flat disabled-day set
//!

use crate::{Date, date_range};
use log::warn;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// One entry of unavailable-date configuration: either a single calendar day
/// or a closed range of days (both endpoints inclusive, `from` <= `to`).
///
/// In JSON the two variants are distinguished by shape, so a configuration
/// can mix them freely:
///
/// ```json
/// [
///     { "day": 10, "month": 5, "year": 2022 },
///     { "from": { "day": 28, "month": 5, "year": 2022 },
///       "to":   { "day": 30, "month": 5, "year": 2022 } }
/// ]
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum UnavailableDate {
    /// A single unavailable calendar day
    Single(Date),

    /// An inclusive span of unavailable calendar days
    Range { from: Date, to: Date },
}

/// The flat set of individual disabled calendar days, expanded from
/// [`UnavailableDate`] configuration for membership testing.
///
/// Recomputed from configuration on demand; never updated incrementally.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DisabledDays(BTreeSet<Date>);

impl DisabledDays {
    /// Expand configuration entries into the flat day set.  A range with
    /// `from` after `to` is a configuration error: it expands to nothing
    /// and is logged rather than failing.
    pub fn from_specs(specs: &[UnavailableDate]) -> Self {
        let mut days = BTreeSet::new();
        for spec in specs {
            match spec {
                UnavailableDate::Single(date) => {
                    days.insert(*date);
                }
                UnavailableDate::Range { from, to } => {
                    if from > to {
                        warn!(
                            "Ignoring inverted unavailable range {} -> {}",
                            from.as_day_key(),
                            to.as_day_key()
                        );
                    }
                    days.extend(date_range(*from, *to));
                }
            }
        }
        DisabledDays(days)
    }

    /// Whether the given calendar day is disabled
    pub fn contains(&self, day: &Date) -> bool {
        self.0.contains(day)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

#[cfg(test)]
mod test {
    use super::{DisabledDays, UnavailableDate};
    use crate::Date;

    fn date(day: i64, month: i64, year: i64) -> Date {
        Date::from(day, month, year).unwrap()
    }

    #[test]
    fn single_date() {
        let disabled = DisabledDays::from_specs(&[UnavailableDate::Single(date(10, 5, 2022))]);
        assert!(disabled.contains(&date(10, 5, 2022)));
        assert!(!disabled.contains(&date(9, 5, 2022)));
        assert!(!disabled.contains(&date(11, 5, 2022)));
        assert_eq!(disabled.len(), 1);
    }

    #[test]
    fn range_expands_inclusive() {
        let disabled = DisabledDays::from_specs(&[UnavailableDate::Range {
            from: date(28, 5, 2022),
            to: date(30, 5, 2022),
        }]);
        assert!(disabled.contains(&date(28, 5, 2022)));
        assert!(disabled.contains(&date(29, 5, 2022)));
        assert!(disabled.contains(&date(30, 5, 2022)));
        assert!(!disabled.contains(&date(27, 5, 2022)));
        assert!(!disabled.contains(&date(31, 5, 2022)));
    }

    #[test]
    fn inverted_range_expands_to_nothing() {
        let disabled = DisabledDays::from_specs(&[UnavailableDate::Range {
            from: date(30, 5, 2022),
            to: date(28, 5, 2022),
        }]);
        assert!(disabled.is_empty());
    }

    #[test]
    fn deserialize_mixed_specs() {
        let json = r#"[
            { "day": 10, "month": 5, "year": 2022 },
            { "from": { "day": 28, "month": 5, "year": 2022 },
              "to":   { "day": 30, "month": 5, "year": 2022 } }
        ]"#;
        let specs: Vec<UnavailableDate> = serde_json::from_str(json).unwrap();
        assert_eq!(specs.len(), 2);
        assert_eq!(specs[0], UnavailableDate::Single(date(10, 5, 2022)));
        assert_eq!(
            specs[1],
            UnavailableDate::Range {
                from: date(28, 5, 2022),
                to: date(30, 5, 2022),
            }
        );

        let disabled = DisabledDays::from_specs(&specs);
        assert_eq!(disabled.len(), 4);
    }
}
