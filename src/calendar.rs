//! Calendar-day arithmetic in an explicit timezone.
//!
//! Goal windows, "today" and the per-day application series are all defined
//! in terms of local calendar days. [`Calendar`] pins the timezone as a fixed
//! UTC offset so the same instant always maps to the same local day,
//! regardless of where the process runs.

use chrono::{
    DateTime, Datelike, Days, FixedOffset, Months, NaiveDate, NaiveDateTime, NaiveTime, Offset,
    TimeDelta, TimeZone, Utc,
};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Half-open instant range `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimeRange {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

impl TimeRange {
    /// Creates a range from its inclusive start and exclusive end.
    #[must_use]
    pub const fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self { start, end }
    }

    /// Returns the inclusive lower bound.
    #[must_use]
    pub const fn start(&self) -> DateTime<Utc> {
        self.start
    }

    /// Returns the exclusive upper bound.
    #[must_use]
    pub const fn end(&self) -> DateTime<Utc> {
        self.end
    }

    /// Returns `true` when `instant` lies in `[start, end)`.
    #[must_use]
    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        self.start <= instant && instant < self.end
    }
}

/// Local calendar anchored at a fixed UTC offset.
///
/// # Examples
///
/// ```
/// use careerlog::calendar::Calendar;
/// use chrono::{TimeZone, Utc};
///
/// let calendar = Calendar::utc();
/// let instant = Utc.with_ymd_and_hms(2026, 10, 18, 15, 45, 0).unwrap();
/// assert_eq!(calendar.date_key(instant), "2026-10-18");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Calendar {
    offset: FixedOffset,
}

impl Calendar {
    /// Creates a calendar for the given offset.
    #[must_use]
    pub const fn new(offset: FixedOffset) -> Self {
        Self { offset }
    }

    /// Creates a calendar whose days run midnight-to-midnight UTC.
    #[must_use]
    pub fn utc() -> Self {
        Self::new(Utc.fix())
    }

    /// Creates a calendar from an offset expressed in minutes east of UTC.
    ///
    /// Returns `None` when the offset is outside ±24 hours.
    #[must_use]
    pub fn from_utc_offset_minutes(minutes: i32) -> Option<Self> {
        let seconds = minutes.checked_mul(60)?;
        FixedOffset::east_opt(seconds).map(Self::new)
    }

    /// Creates a calendar using the offset the clock reports for local time.
    #[must_use]
    pub fn server_local(clock: &impl Clock) -> Self {
        Self::new(clock.local().offset().fix())
    }

    /// Returns the configured UTC offset.
    #[must_use]
    pub const fn offset(&self) -> FixedOffset {
        self.offset
    }

    /// Returns the local calendar date containing `instant`.
    #[must_use]
    pub fn local_date(&self, instant: DateTime<Utc>) -> NaiveDate {
        instant.with_timezone(&self.offset).date_naive()
    }

    /// Returns the UTC instant of local midnight at the start of `date`.
    ///
    /// Saturates at the representable bounds for dates at the edge of the
    /// calendar.
    #[must_use]
    pub fn midnight(&self, date: NaiveDate) -> DateTime<Utc> {
        let local_midnight = date.and_time(NaiveTime::MIN);
        let offset_seconds = i64::from(self.offset.local_minus_utc());
        let utc_midnight = TimeDelta::try_seconds(offset_seconds)
            .and_then(|shift| local_midnight.checked_sub_signed(shift))
            .unwrap_or(if offset_seconds > 0 {
                NaiveDateTime::MIN
            } else {
                NaiveDateTime::MAX
            });
        Utc.from_utc_datetime(&utc_midnight)
    }

    /// Floors `instant` to the local midnight that starts its day.
    #[must_use]
    pub fn start_of_day(&self, instant: DateTime<Utc>) -> DateTime<Utc> {
        self.midnight(self.local_date(instant))
    }

    /// Returns the local day containing `instant`.
    #[must_use]
    pub fn day_range(&self, instant: DateTime<Utc>) -> TimeRange {
        let date = self.local_date(instant);
        self.date_span(date, date.succ_opt().unwrap_or(NaiveDate::MAX))
    }

    /// Returns the Sunday-started week containing `instant`.
    #[must_use]
    pub fn week_range(&self, instant: DateTime<Utc>) -> TimeRange {
        let date = self.local_date(instant);
        let back = Days::new(u64::from(date.weekday().num_days_from_sunday()));
        let first = date.checked_sub_days(back).unwrap_or(NaiveDate::MIN);
        let next = first.checked_add_days(Days::new(7)).unwrap_or(NaiveDate::MAX);
        self.date_span(first, next)
    }

    /// Returns the calendar month containing `instant`.
    #[must_use]
    pub fn month_range(&self, instant: DateTime<Utc>) -> TimeRange {
        let date = self.local_date(instant);
        let first = date.with_day(1).unwrap_or(date);
        let next = first
            .checked_add_months(Months::new(1))
            .unwrap_or(NaiveDate::MAX);
        self.date_span(first, next)
    }

    /// Renders the local date of `instant` as `YYYY-MM-DD`.
    #[must_use]
    pub fn date_key(&self, instant: DateTime<Utc>) -> String {
        self.local_date(instant).format("%Y-%m-%d").to_string()
    }

    fn date_span(&self, first: NaiveDate, next: NaiveDate) -> TimeRange {
        TimeRange::new(self.midnight(first), self.midnight(next))
    }
}

impl Default for Calendar {
    fn default() -> Self {
        Self::utc()
    }
}
