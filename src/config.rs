//! Tracker configuration loaded via `OrthoConfig`.

use mockable::Clock;
use ortho_config::OrthoConfig;
use serde::Deserialize;
use thiserror::Error;

use crate::calendar::Calendar;

/// Default look-back, in days, for the application time series.
pub const DEFAULT_PROGRESS_WINDOW_DAYS: u32 = 30;

/// Errors raised while interpreting loaded settings.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SettingsError {
    /// The configured offset is not a valid UTC offset.
    #[error("invalid UTC offset of {0} minutes, expected a value within ±24 hours")]
    InvalidUtcOffset(i32),
}

/// Settings controlling how the tracker interprets calendar days.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "CAREERLOG")]
pub struct TrackerSettings {
    /// Offset of the tracker's calendar from UTC, in minutes east.
    ///
    /// When unset the server's local offset is used.
    pub utc_offset_minutes: Option<i32>,
    /// Default number of days covered by the application time series.
    #[ortho_config(default = 30)]
    pub progress_window_days: u32,
}

impl TrackerSettings {
    /// Returns the configured time-series window in days.
    #[must_use]
    pub const fn progress_window_days(&self) -> u32 {
        self.progress_window_days
    }

    /// Builds the calendar the tracker should use for "today".
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::InvalidUtcOffset`] when the configured offset
    /// is out of range.
    pub fn calendar(&self, clock: &impl Clock) -> Result<Calendar, SettingsError> {
        match self.utc_offset_minutes {
            Some(minutes) => Calendar::from_utc_offset_minutes(minutes)
                .ok_or(SettingsError::InvalidUtcOffset(minutes)),
            None => Ok(Calendar::server_local(clock)),
        }
    }
}
