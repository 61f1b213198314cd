//! Shared fixtures for unit tests.

use chrono::{DateTime, Local, TimeZone, Utc};
use mockable::Clock;

use crate::owner::UserId;

/// Clock frozen at a fixed instant.
#[derive(Debug, Clone, Copy)]
pub struct FixtureClock {
    utc_now: DateTime<Utc>,
}

impl FixtureClock {
    pub const fn at(utc_now: DateTime<Utc>) -> Self {
        Self { utc_now }
    }
}

impl Clock for FixtureClock {
    fn local(&self) -> DateTime<Local> {
        self.utc_now.with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.utc_now
    }
}

/// Builds a UTC timestamp from calendar parts.
pub fn timestamp(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, minute, 0)
        .single()
        .expect("valid fixture timestamp")
}

/// Wednesday 2026-10-14, mid-afternoon UTC.
pub fn fixture_now() -> DateTime<Utc> {
    timestamp(2026, 10, 14, 15, 30)
}

pub fn fixture_clock() -> FixtureClock {
    FixtureClock::at(fixture_now())
}

pub fn owner() -> UserId {
    UserId::new()
}
