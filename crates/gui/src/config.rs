// SPDX-License-Identifier: GPL-3.0-or-later

//!
//! Reserva GUI config
//!

use directories_next::ProjectDirs;
use log::info;
use reserva_core::{Date, UnavailableDate};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

const PROJECT_QUALIFIER: &str = "org";
const ORG_NAME: &str = "Reserva";
const APPLICATION_NAME: &str = "Reserva";
const CONFIG_FILE_NAME: &str = "reservation.json";

/// Errors that can arise while loading the reservation configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Could not read the configuration file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Could not parse the configuration file: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Could not determine the project directories")]
    ProjectDirs,
}

/// Everything the reservation box is configured with.
///
/// Loaded from a JSON file when one exists; the built-in default is the
/// demo reservation.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ReservationDetails {
    /// Price per night
    pub price: u32,

    /// Currency symbol shown next to the price
    pub currency_symbol: String,

    /// Star rating out of 5
    pub rating: f32,

    /// Number of ratings
    pub rating_count: u32,

    /// Label on the reserve button
    pub reserve_button_label: String,

    /// Optional pre-selected start of the range
    pub start_date: Option<Date>,

    /// Optional pre-selected end of the range
    pub end_date: Option<Date>,

    /// Days and day spans that cannot be selected
    pub unavailable_dates: Vec<UnavailableDate>,
}

impl Default for ReservationDetails {
    fn default() -> Self {
        Self {
            price: 298,
            currency_symbol: String::from("zł"),
            rating: 3.5,
            rating_count: 123,
            reserve_button_label: String::from("Reserve Date"),
            start_date: None,
            end_date: None,
            unavailable_dates: vec![
                UnavailableDate::Single(Date::from(10, 5, 2022).unwrap()),
                UnavailableDate::Range {
                    from: Date::from(28, 5, 2022).unwrap(),
                    to: Date::from(30, 5, 2022).unwrap(),
                },
            ],
        }
    }
}

impl ReservationDetails {
    /// Load reservation details from the given file, or from the default
    /// config location when no path is supplied.  A missing file is not an
    /// error: the built-in demo details are used instead.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => default_config_file_path()?,
        };
        if !path.exists() {
            info!("No reservation config at {path:?}, using the demo details");
            return Ok(Self::default());
        }

        info!("Loading reservation config from {path:?}");
        let data = fs::read_to_string(&path)?;
        let details: ReservationDetails = serde_json::from_str(&data)?;
        info!("Reservation config loaded = {details:?}");
        Ok(details)
    }
}

/// Get the project directories (e.g. where the config is stored)
fn project_dirs() -> Result<ProjectDirs, ConfigError> {
    ProjectDirs::from(PROJECT_QUALIFIER, ORG_NAME, APPLICATION_NAME)
        .ok_or(ConfigError::ProjectDirs)
}

/// Get the default path to the config
fn default_config_file_path() -> Result<PathBuf, ConfigError> {
    Ok(project_dirs()?
        .config_dir()
        .to_path_buf()
        .join(CONFIG_FILE_NAME))
}

#[cfg(test)]
mod test {
    use super::ReservationDetails;
    use reserva_core::{Date, UnavailableDate};

    #[test]
    fn default_is_the_demo_reservation() {
        let details = ReservationDetails::default();
        assert_eq!(details.price, 298);
        assert_eq!(details.currency_symbol, "zł");
        assert_eq!(details.rating_count, 123);
        assert_eq!(details.unavailable_dates.len(), 2);
        assert_eq!(details.start_date, None);
        assert_eq!(details.end_date, None);
    }

    #[test]
    fn parses_full_config() {
        let json = r#"{
            "price": 150,
            "currency_symbol": "€",
            "rating": 4.5,
            "rating_count": 87,
            "reserve_button_label": "Book now",
            "start_date": { "day": 12, "month": 5, "year": 2022 },
            "unavailable_dates": [
                { "day": 10, "month": 5, "year": 2022 },
                { "from": { "day": 28, "month": 5, "year": 2022 },
                  "to":   { "day": 30, "month": 5, "year": 2022 } }
            ]
        }"#;
        let details: ReservationDetails = serde_json::from_str(json).unwrap();
        assert_eq!(details.price, 150);
        assert_eq!(details.reserve_button_label, "Book now");
        assert_eq!(details.start_date, Some(Date::from(12, 5, 2022).unwrap()));
        // Fields left out fall back to the defaults
        assert_eq!(details.end_date, None);
        assert_eq!(
            details.unavailable_dates[0],
            UnavailableDate::Single(Date::from(10, 5, 2022).unwrap())
        );
    }
}
