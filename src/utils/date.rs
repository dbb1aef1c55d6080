//! UTC datetime utilities without timezone dependencies.
//!
//! Provides a lightweight `DateTimeUtc` for the index `generated` stamp and
//! for dating new posts.
//!
//! # Examples
//!
//! ```ignore
//! let dt = DateTimeUtc::from_unix_millis(1_700_000_000_000);
//! assert_eq!(dt.to_rfc3339(), "2023-11-14T22:13:20.000Z");
//! assert_eq!(dt.compact_date(), "20231114");
//! ```

use std::time::{SystemTime, UNIX_EPOCH};

const MILLIS_PER_DAY: u64 = 86_400_000;

/// UTC datetime without timezone complexity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateTimeUtc {
    pub year: u16,
    pub month: u8,
    pub day: u8,
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
    pub millisecond: u16,
}

impl DateTimeUtc {
    #[cfg(test)]
    pub const fn new(year: u16, month: u8, day: u8, hour: u8, minute: u8, second: u8) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
            millisecond: 0,
        }
    }

    /// Current wall-clock time. Clocks set before 1970 read as the epoch.
    pub fn now() -> Self {
        Self::from_system_time(SystemTime::now())
    }

    pub fn from_system_time(time: SystemTime) -> Self {
        let millis = time
            .duration_since(UNIX_EPOCH)
            .map(|d| u64::try_from(d.as_millis()).unwrap_or(u64::MAX))
            .unwrap_or(0);
        Self::from_unix_millis(millis)
    }

    /// Build from milliseconds since the Unix epoch.
    #[allow(clippy::cast_possible_truncation)] // every component is range-reduced first
    pub fn from_unix_millis(millis: u64) -> Self {
        let days = millis / MILLIS_PER_DAY;
        let in_day = millis % MILLIS_PER_DAY;

        let (year, month, day) = civil_from_days(days);
        let secs = in_day / 1000;

        Self {
            year,
            month,
            day,
            hour: (secs / 3600) as u8,
            minute: ((secs / 60) % 60) as u8,
            second: (secs % 60) as u8,
            millisecond: (in_day % 1000) as u16,
        }
    }

    /// Format as RFC 3339 (ISO 8601) with millisecond precision.
    ///
    /// Returns: `YYYY-MM-DDTHH:MM:SS.mmmZ`
    pub fn to_rfc3339(self) -> String {
        format!(
            "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}.{:03}Z",
            self.year, self.month, self.day, self.hour, self.minute, self.second, self.millisecond
        )
    }

    /// Midnight of this day, as written into new post frontmatter.
    ///
    /// Returns: `YYYY-MM-DDT00:00:00Z`
    pub fn to_midnight_rfc3339(self) -> String {
        format!(
            "{:04}-{:02}-{:02}T00:00:00Z",
            self.year, self.month, self.day
        )
    }

    /// Date as used in content filename prefixes.
    ///
    /// Returns: `YYYYMMDD`
    pub fn compact_date(self) -> String {
        format!("{:04}{:02}{:02}", self.year, self.month, self.day)
    }
}

/// Convert days since 1970-01-01 into a (year, month, day) triple.
///
/// Proleptic Gregorian calendar, counted in 400-year eras of 146097 days.
#[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
fn civil_from_days(days: u64) -> (u16, u8, u8) {
    let z = days as i64 + 719_468;
    let era = z.div_euclid(146_097);
    let doe = z.rem_euclid(146_097);
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let day = doy - (153 * mp + 2) / 5 + 1;
    let month = if mp < 10 { mp + 3 } else { mp - 9 };
    let year = yoe + era * 400 + i64::from(month <= 2);

    (year.clamp(0, i64::from(u16::MAX)) as u16, month as u8, day as u8)
}
