//! Per-day application counts for progress charts.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Number of applications recorded on one calendar day.
///
/// `date` serializes as `YYYY-MM-DD` in the tracker's calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DailyApplicationCount {
    /// Local calendar day.
    pub date: NaiveDate,
    /// Applications dated on that day. Never zero.
    pub count: u64,
}
