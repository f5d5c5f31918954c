//! Reference calendar for date parsing and period boundaries.
//!
//! Every calendar question the ledger asks (what day a timestamp falls on,
//! which month bucket it belongs to, when the current week started) is
//! answered in a single configured timezone. Expense dates themselves are
//! stored as UTC instants.

use chrono::{
    DateTime, Datelike, Days, Months, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, TimeZone,
    Utc,
};
use chrono_tz::Tz;

use crate::summary::Period;

/// Naive date-time layouts, tried in order.
const DATE_TIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Date-only layouts, interpreted as midnight. Numeric fields may be
/// unpadded (`2024-1-5`).
const DATE_FORMATS: [&str; 5] = ["%Y-%m-%d", "%Y/%m/%d", "%B %d, %Y", "%B %d %Y", "%d %B %Y"];

/// Year-month layouts as (separator, full-date layout), completed with day 1.
const YEAR_MONTH_FORMATS: [(&str, &str); 2] = [("-", "%Y-%m-%d"), ("/", "%Y/%m/%d")];

/// Calendar anchored to one IANA timezone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReferenceCalendar {
    tz: Tz,
}

impl ReferenceCalendar {
    /// Creates a calendar for `tz`.
    #[must_use]
    pub const fn new(tz: Tz) -> Self {
        Self { tz }
    }

    /// Calendar anchored to UTC.
    #[must_use]
    pub const fn utc() -> Self {
        Self::new(Tz::UTC)
    }

    /// The reference timezone.
    #[must_use]
    pub const fn timezone(&self) -> Tz {
        self.tz
    }

    /// Parses a date string into a UTC instant.
    ///
    /// Accepted forms, tried in order:
    /// - RFC 3339 (`2024-01-10T08:30:00Z`) and RFC 2822
    /// - naive date-times: `2024-01-10T08:30[:00[.250]]`, `2024-01-10 08:30[:00]`
    /// - dates: `2024-01-10`, `2024-1-5`, `2024/01/10`, `January 10, 2024`,
    ///   `Jan 10 2024`, `10 January 2024`
    /// - year-month: `2024-01`, `2024/1` (the 1st of that month)
    ///
    /// Values without an offset are read in the reference timezone. Returns
    /// `None` for blank, malformed, or impossible dates.
    #[must_use]
    pub fn parse(&self, text: &str) -> Option<DateTime<Utc>> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }

        if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
            return Some(dt.with_timezone(&Utc));
        }
        if let Ok(dt) = DateTime::parse_from_rfc2822(text) {
            return Some(dt.with_timezone(&Utc));
        }

        for format in DATE_TIME_FORMATS {
            if let Ok(naive) = NaiveDateTime::parse_from_str(text, format) {
                return self.localize(naive);
            }
        }

        for format in DATE_FORMATS {
            if let Ok(date) = NaiveDate::parse_from_str(text, format) {
                return self.localize(date.and_time(NaiveTime::MIN));
            }
        }

        for (separator, format) in YEAR_MONTH_FORMATS {
            let first_of_month = format!("{text}{separator}1");
            if let Ok(date) = NaiveDate::parse_from_str(&first_of_month, format) {
                return self.localize(date.and_time(NaiveTime::MIN));
            }
        }

        None
    }

    /// Monthly bucket key `"{month}-{year}"`, month 1-12 without padding.
    #[must_use]
    pub fn month_year_key(&self, instant: DateTime<Utc>) -> String {
        let local = instant.with_timezone(&self.tz);
        format!("{}-{}", local.month(), local.year())
    }

    /// Start of the period containing `now`.
    ///
    /// Week: the most recent Sunday (today if `now` is a Sunday) at 00:00.
    /// Month: the 1st of the current month at 00:00.
    #[must_use]
    pub fn period_start(&self, period: Period, now: DateTime<Utc>) -> DateTime<Utc> {
        self.start_of_day(self.period_start_date(period, now))
    }

    /// First trigger instant strictly after `now`: next Sunday 00:00 for
    /// weeks, next 1st 00:00 for months.
    ///
    /// Returns `None` only when the date would overflow the calendar.
    #[must_use]
    pub fn next_trigger(&self, period: Period, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
        let current = self.period_start_date(period, now);
        let next = match period {
            Period::Week => current.checked_add_days(Days::new(7)),
            Period::Month => current.checked_add_months(Months::new(1)),
        }?;
        Some(self.start_of_day(next))
    }

    fn period_start_date(&self, period: Period, now: DateTime<Utc>) -> NaiveDate {
        let today = now.with_timezone(&self.tz).date_naive();
        match period {
            Period::Week => {
                let offset = u64::from(today.weekday().num_days_from_sunday());
                today.checked_sub_days(Days::new(offset)).unwrap_or(today)
            }
            Period::Month => today.with_day(1).unwrap_or(today),
        }
    }

    fn start_of_day(&self, date: NaiveDate) -> DateTime<Utc> {
        let midnight = date.and_time(NaiveTime::MIN);
        self.localize(midnight)
            .unwrap_or_else(|| Utc.from_utc_datetime(&midnight))
    }

    /// Maps a local wall-clock time to UTC. Ambiguous times take the earlier
    /// instant; times inside a DST gap move forward by one hour.
    fn localize(&self, naive: NaiveDateTime) -> Option<DateTime<Utc>> {
        self.tz
            .from_local_datetime(&naive)
            .earliest()
            .or_else(|| {
                let shifted = naive.checked_add_signed(TimeDelta::hours(1))?;
                self.tz.from_local_datetime(&shifted).earliest()
            })
            .map(|dt| dt.with_timezone(&Utc))
    }
}

impl Default for ReferenceCalendar {
    fn default() -> Self {
        Self::utc()
    }
}
