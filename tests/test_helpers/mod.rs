//! Clock and instant helpers shared by integration test binaries.

use chrono::{DateTime, Local, NaiveDate, TimeZone, Utc};
use mockable::Clock;

/// Clock pinned to a single instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(DateTime<Utc>);

impl FixedClock {
    /// Creates a clock that always reads `now`.
    #[must_use]
    pub const fn at(now: DateTime<Utc>) -> Self {
        Self(now)
    }
}

impl Clock for FixedClock {
    fn local(&self) -> DateTime<Local> {
        self.0.with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Builds a UTC instant from calendar parts.
///
/// # Panics
///
/// Panics when the parts do not name a real instant.
#[must_use]
pub fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, minute, 0)
        .single()
        .expect("valid test instant")
}

/// Wednesday 2026-10-14, mid-afternoon UTC.
#[must_use]
pub fn reference_instant() -> DateTime<Utc> {
    at(2026, 10, 14, 15, 30)
}

/// Parses an ISO date from a scenario and returns late evening that day.
///
/// # Errors
///
/// Returns an error when `raw` is not a `YYYY-MM-DD` date.
pub fn evening_of(raw: &str) -> Result<DateTime<Utc>, eyre::Report> {
    let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|err| eyre::eyre!("invalid scenario date {raw}: {err}"))?;
    date.and_hms_opt(23, 0, 0)
        .map(|naive| naive.and_utc())
        .ok_or_else(|| eyre::eyre!("no evening on {raw}"))
}
