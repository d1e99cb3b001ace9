// SPDX-License-Identifier: MIT

//!
//! The Reserva calendar date type
//!

use chrono::Datelike;
use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

/// The minimum year allowed in the Reserva system
pub const MIN_YEAR: i64 = 1;

/// The maximum year allowed in the Reserva system
pub const MAX_YEAR: i64 = 9999;

/// Full month names, January first
static MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Abbreviated month names, January first
static MONTH_NAMES_SHORT: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Errors that can arise in relation to a [`Date`]
#[derive(Error, Debug, Clone)]
pub enum DateError {
    /// The day number is not allowed (must be 1 <= day <= 31)
    #[error("Day `{0}` is not allowed")]
    InvalidDay(i64),

    /// The month number is not allowed (must be 1 <= month <= 12)
    #[error("Month `{0}` is not allowed")]
    InvalidMonth(i64),

    /// The year number is not allowed (must be [`MIN_YEAR`] <= year <= [`MAX_YEAR`])
    #[error("Year `{0}` is not allowed")]
    InvalidYear(i64),

    /// The day number does not exist in the given month.  e.g. 30th February
    #[error("Day `{day}` does not exist in {month} {year}")]
    DayNotInMonth { day: u8, month: Month, year: Year },
}

/// The Reserva calendar date type
///
/// A date at calendar-day granularity: no time-of-day, no timezone.  All
/// three fields must be set and the day must exist in the month (leap years
/// accounted for), so an instantiated `Date` is always a real calendar day.
///
/// Field order matters for the derived ordering: year, then month, then day.
#[derive(Serialize, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Debug, Hash)]
pub struct Date {
    year: Year,
    month: Month,
    day: Day,
}

/// The Reserva day-of-month type
#[rustfmt::skip]
#[derive(derive_more::Display, Serialize, Eq, PartialEq, Clone, Copy, Debug, Hash, PartialOrd, Ord)]
pub struct Day(u8);

/// The Reserva month type
#[rustfmt::skip]
#[derive(Serialize, Eq, PartialEq, Clone, Copy, Debug, Hash, PartialOrd, Ord)]
pub struct Month(u8);

/// The Reserva year type
///
/// The minimum year allowed is [`MIN_YEAR`].  The maximum year allowed is
/// [`MAX_YEAR`]
#[rustfmt::skip]
#[derive(derive_more::Display, Serialize, Eq, PartialEq, Clone, Copy, Debug, Hash, PartialOrd, Ord)]
pub struct Year(i32);

impl Day {
    pub fn value(&self) -> u8 {
        self.0
    }
}

impl Month {
    pub fn value(&self) -> u8 {
        self.0
    }

    /// The full month name.  e.g. "January"
    pub fn name(&self) -> &'static str {
        MONTH_NAMES[(self.0 - 1) as usize]
    }

    /// The abbreviated month name.  e.g. "Jan"
    pub fn short_name(&self) -> &'static str {
        MONTH_NAMES_SHORT[(self.0 - 1) as usize]
    }

    /// The number of days in this month for the given year (leap years
    /// accounted for)
    pub fn length(&self, year: Year) -> u8 {
        match self.0 {
            1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
            4 | 6 | 9 | 11 => 30,
            2 if year.is_leap_year() => 29,
            2 => 28,
            _ => unreachable!("Month is validated on construction"),
        }
    }
}

impl std::fmt::Display for Month {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl Year {
    pub fn value(&self) -> i32 {
        self.0
    }

    pub fn min() -> Self {
        Year(MIN_YEAR as i32)
    }

    pub fn max() -> Self {
        Year(MAX_YEAR as i32)
    }

    /// Whether this is a leap year in the proleptic Gregorian calendar
    pub fn is_leap_year(&self) -> bool {
        (self.0 % 4 == 0 && self.0 % 100 != 0) || self.0 % 400 == 0
    }
}

impl TryFrom<i64> for Day {
    type Error = DateError;
    fn try_from(value: i64) -> Result<Self, Self::Error> {
        if (1..=31).contains(&value) {
            Ok(Day(value as u8))
        } else {
            Err(DateError::InvalidDay(value))
        }
    }
}

impl TryFrom<i64> for Month {
    type Error = DateError;
    fn try_from(value: i64) -> Result<Self, Self::Error> {
        if (1..=12).contains(&value) {
            Ok(Month(value as u8))
        } else {
            Err(DateError::InvalidMonth(value))
        }
    }
}

impl TryFrom<i64> for Year {
    type Error = DateError;
    fn try_from(value: i64) -> Result<Self, Self::Error> {
        if (MIN_YEAR..=MAX_YEAR).contains(&value) {
            Ok(Year(value as i32))
        } else {
            Err(DateError::InvalidYear(value))
        }
    }
}

impl<'de> Deserialize<'de> for Day {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = i64::deserialize(deserializer)?;
        Day::try_from(value).map_err(serde::de::Error::custom)
    }
}

impl<'de> Deserialize<'de> for Month {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = i64::deserialize(deserializer)?;
        Month::try_from(value).map_err(serde::de::Error::custom)
    }
}

impl<'de> Deserialize<'de> for Year {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = i64::deserialize(deserializer)?;
        Year::try_from(value).map_err(serde::de::Error::custom)
    }
}

impl Date {
    /// Today's date, at calendar-day granularity, in the local timezone
    pub fn today() -> Self {
        let now = chrono::Local::now().date_naive();
        Self::from(now.day() as i64, now.month() as i64, now.year() as i64)
            .expect("the current date is a valid calendar day")
    }

    /// Create a new [`Date`] if the result will be valid
    pub fn from(day: i64, month: i64, year: i64) -> Result<Date, DateError> {
        let year = Year::try_from(year)?;
        let month = Month::try_from(month)?;
        let day = Day::try_from(day)?;
        if day.value() > month.length(year) {
            return Err(DateError::DayNotInMonth {
                day: day.value(),
                month,
                year,
            });
        }
        Ok(Date { year, month, day })
    }

    /// The first day of the given month
    pub fn first_of(month: Month, year: Year) -> Date {
        Date {
            year,
            month,
            day: Day(1),
        }
    }

    /// The last day of the given month
    pub fn last_of(month: Month, year: Year) -> Date {
        Date {
            year,
            month,
            day: Day(month.length(year)),
        }
    }

    /// Get the [`Date`]'s day
    pub fn day(&self) -> Day {
        self.day
    }

    /// Get the [`Date`]'s month
    pub fn month(&self) -> Month {
        self.month
    }

    /// Get the [`Date`]'s year
    pub fn year(&self) -> Year {
        self.year
    }

    /// The weekday index with Monday = 0 .. Sunday = 6
    pub fn weekday_from_monday(&self) -> u8 {
        self.to_naive().weekday().num_days_from_monday() as u8
    }

    /// The calendar day after this one, rolling over month and year
    /// boundaries.  Saturates at 31st December [`MAX_YEAR`].
    pub fn next_day(&self) -> Date {
        if self.day.value() < self.month.length(self.year) {
            return Date {
                day: Day(self.day.value() + 1),
                ..*self
            };
        }
        if self.month.value() < 12 {
            return Date {
                year: self.year,
                month: Month(self.month.value() + 1),
                day: Day(1),
            };
        }
        if self.year == Year::max() {
            return *self;
        }
        Date {
            year: Year(self.year.value() + 1),
            month: Month(1),
            day: Day(1),
        }
    }

    /// The calendar day before this one, rolling over month and year
    /// boundaries.  Saturates at 1st January [`MIN_YEAR`].
    pub fn previous_day(&self) -> Date {
        if self.day.value() > 1 {
            return Date {
                day: Day(self.day.value() - 1),
                ..*self
            };
        }
        if self.month.value() > 1 {
            let month = Month(self.month.value() - 1);
            return Date::last_of(month, self.year);
        }
        if self.year == Year::min() {
            return *self;
        }
        let year = Year(self.year.value() - 1);
        Date::last_of(Month(12), year)
    }

    /// e.g. "23 May 2022" format (zero-padded day, abbreviated month)
    pub fn as_long_date_format(&self) -> String {
        format!(
            "{:02} {} {}",
            self.day.value(),
            self.month.short_name(),
            self.year
        )
    }

    /// Stable `day-month-year` key for calendar-day equality and testing.
    /// e.g. "23-5-2022"
    pub fn as_day_key(&self) -> String {
        format!("{}-{}-{}", self.day, self.month.value(), self.year)
    }

    fn to_naive(self) -> chrono::NaiveDate {
        chrono::NaiveDate::from_ymd_opt(
            self.year.value(),
            self.month.value() as u32,
            self.day.value() as u32,
        )
        .expect("Date is validated on construction")
    }
}

#[derive(Deserialize)]
struct RawDate {
    day: i64,
    month: i64,
    year: i64,
}

impl<'de> Deserialize<'de> for Date {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw_date = RawDate::deserialize(deserializer)?;
        Date::from(raw_date.day, raw_date.month, raw_date.year).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod test {
    use super::Date;

    #[test]
    fn from() {
        // Should return error
        assert!(Date::from(0, 1, 2022).is_err());
        assert!(Date::from(32, 1, 2022).is_err());
        assert!(Date::from(1, 0, 2022).is_err());
        assert!(Date::from(1, 13, 2022).is_err());
        assert!(Date::from(1, 1, 0).is_err());
        assert!(Date::from(1, 1, 10_000).is_err());

        // Days that don't exist in their month
        assert!(Date::from(31, 4, 2022).is_err());
        assert!(Date::from(30, 2, 2022).is_err());
        assert!(Date::from(29, 2, 2021).is_err());

        // Should be ok
        assert!(Date::from(1, 1, 1).is_ok());
        assert!(Date::from(31, 12, 9999).is_ok());
        assert!(Date::from(29, 2, 2020).is_ok());
    }

    #[test]
    fn cmp() {
        let date_1 = Date::from(23, 5, 2022).unwrap();
        let date_2 = Date::from(24, 5, 2022).unwrap();
        let date_3 = Date::from(1, 6, 2022).unwrap();
        let date_4 = Date::from(1, 1, 2023).unwrap();
        assert!(date_1 < date_2);
        assert!(date_2 < date_3);
        assert!(date_3 < date_4);
        assert!(date_1 == date_1);
        assert!(date_1 != date_2);
    }

    #[test]
    fn weekday() {
        // 1st May 2022 was a Sunday
        assert_eq!(Date::from(1, 5, 2022).unwrap().weekday_from_monday(), 6);
        // 1st February 2021 was a Monday
        assert_eq!(Date::from(1, 2, 2021).unwrap().weekday_from_monday(), 0);
        // 1st January 2022 was a Saturday
        assert_eq!(Date::from(1, 1, 2022).unwrap().weekday_from_monday(), 5);
    }

    #[test]
    fn next_day() {
        let date = Date::from(23, 5, 2022).unwrap();
        assert_eq!(date.next_day(), Date::from(24, 5, 2022).unwrap());

        // Month rollover
        let date = Date::from(31, 5, 2022).unwrap();
        assert_eq!(date.next_day(), Date::from(1, 6, 2022).unwrap());

        // Year rollover
        let date = Date::from(31, 12, 2022).unwrap();
        assert_eq!(date.next_day(), Date::from(1, 1, 2023).unwrap());

        // Leap day
        let date = Date::from(28, 2, 2020).unwrap();
        assert_eq!(date.next_day(), Date::from(29, 2, 2020).unwrap());
    }

    #[test]
    fn previous_day() {
        let date = Date::from(23, 5, 2022).unwrap();
        assert_eq!(date.previous_day(), Date::from(22, 5, 2022).unwrap());

        // Month rollover
        let date = Date::from(1, 6, 2022).unwrap();
        assert_eq!(date.previous_day(), Date::from(31, 5, 2022).unwrap());

        // Year rollover
        let date = Date::from(1, 1, 2023).unwrap();
        assert_eq!(date.previous_day(), Date::from(31, 12, 2022).unwrap());

        // Leap day
        let date = Date::from(1, 3, 2020).unwrap();
        assert_eq!(date.previous_day(), Date::from(29, 2, 2020).unwrap());
    }

    #[test]
    fn formatting() {
        let date = Date::from(23, 5, 2022).unwrap();
        assert_eq!(date.as_long_date_format(), "23 May 2022");
        assert_eq!(date.as_day_key(), "23-5-2022");

        let date = Date::from(5, 10, 2022).unwrap();
        assert_eq!(date.as_long_date_format(), "05 Oct 2022");
    }

    #[test]
    fn deserialize() {
        let date: Date = serde_json::from_str(r#"{"day": 10, "month": 5, "year": 2022}"#).unwrap();
        assert_eq!(date, Date::from(10, 5, 2022).unwrap());

        // A day that doesn't exist in its month must be rejected
        let result: Result<Date, _> =
            serde_json::from_str(r#"{"day": 30, "month": 2, "year": 2022}"#);
        assert!(result.is_err());
    }
}
