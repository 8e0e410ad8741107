//! Calendar-date and time-of-day types for bell schedules.
//!
//! This module provides:
//! - `Date`: Type-safe calendar date wrapper around chrono::NaiveDate
//! - `Time`: Wall-clock time of day wrapper around chrono::NaiveTime
//! - `ClockFormat`: 12-hour or 24-hour display style for `Time`
//!
//! `Time` deliberately carries no calendar date: every comparison between two
//! `Time` values treats both as falling on the same nominal day.
//!
//! # Examples
//!
//! ```
//! use bell_core::types::time::{Date, Time};
//!
//! let date = Date::parse("2019-07-28").unwrap();
//! let start = Time::parse("08:25:00").unwrap();
//! let end = Time::parse("09:50:00").unwrap();
//!
//! assert_eq!(date.day(), 28);
//! assert_eq!(start.milliseconds_to(end), 85 * 60 * 1000);
//! ```

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime, Timelike, Weekday};
use std::fmt;
use std::ops::Sub;
use std::str::FromStr;

use super::error::{DateError, TimeError};

/// Type-safe calendar date wrapper around chrono::NaiveDate.
///
/// A `Date` never carries a time of day, so membership tests against a
/// bell schedule's date set are insensitive to the instant within the day.
///
/// # Examples
///
/// ```
/// use bell_core::types::time::Date;
///
/// let date = Date::from_ymd(2019, 7, 28).unwrap();
/// assert_eq!(date.year(), 2019);
/// assert_eq!(date.month(), 7);
///
/// // Timestamps are truncated to their calendar date
/// let parsed: Date = "2019-07-28T07:37:50.634Z".parse().unwrap();
/// assert_eq!(date, parsed);
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date(NaiveDate);

impl Date {
    /// Creates a Date from year, month, and day components.
    ///
    /// # Returns
    /// `Ok(Date)` if the date is valid, `Err(DateError::InvalidDate)` otherwise.
    ///
    /// # Examples
    ///
    /// ```
    /// use bell_core::types::time::Date;
    ///
    /// assert!(Date::from_ymd(2020, 2, 29).is_ok());
    /// assert!(Date::from_ymd(2019, 2, 29).is_err());
    /// ```
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self, DateError> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Date)
            .ok_or(DateError::InvalidDate { year, month, day })
    }

    /// Parses a date from an ISO 8601 string.
    ///
    /// Accepts a plain `YYYY-MM-DD` date, or a full timestamp whose date part
    /// is kept and whose time of day is discarded.
    ///
    /// # Examples
    ///
    /// ```
    /// use bell_core::types::time::Date;
    ///
    /// let plain = Date::parse("2019-08-27").unwrap();
    /// let stamp = Date::parse("2019-08-27T17:25:33").unwrap();
    /// assert_eq!(plain, stamp);
    ///
    /// assert!(Date::parse("not-a-date").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, DateError> {
        let trimmed = s.trim();
        let date_part = match trimmed.find(['T', ' ']) {
            Some(idx) => &trimmed[..idx],
            None => trimmed,
        };
        NaiveDate::parse_from_str(date_part, "%Y-%m-%d")
            .map(Date)
            .map_err(|e| DateError::ParseError(format!("'{}': {}", s, e)))
    }

    /// Returns the calendar date of a local date-time.
    pub fn from_datetime(datetime: &NaiveDateTime) -> Self {
        Date(datetime.date())
    }

    /// Returns the underlying NaiveDate.
    pub fn into_inner(self) -> NaiveDate {
        self.0
    }

    /// Returns the year component.
    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Returns the month component (1-12).
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// Returns the day component (1-31).
    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// Returns the day of the week.
    pub fn weekday(&self) -> Weekday {
        self.0.weekday()
    }

    /// Returns the date `days` days after (or before, if negative) this one.
    ///
    /// # Examples
    ///
    /// ```
    /// use bell_core::types::time::Date;
    ///
    /// let date = Date::from_ymd(2019, 7, 31).unwrap();
    /// assert_eq!(date.add_days(1), Date::from_ymd(2019, 8, 1).unwrap());
    /// assert_eq!(date.add_days(-31), Date::from_ymd(2019, 6, 30).unwrap());
    /// ```
    pub fn add_days(self, days: i64) -> Self {
        Date(self.0 + Duration::days(days))
    }

    /// Combines this date with a time of day into a local date-time.
    pub fn at(self, time: Time) -> NaiveDateTime {
        self.0.and_time(time.into_inner())
    }
}

impl Sub for Date {
    type Output = i64;

    /// Returns the number of days between two dates.
    fn sub(self, other: Self) -> i64 {
        (self.0 - other.0).num_days()
    }
}

impl FromStr for Date {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, DateError> {
        Date::parse(s)
    }
}

impl fmt::Display for Date {
    /// Formats the date as ISO 8601 (YYYY-MM-DD).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

impl From<NaiveDate> for Date {
    fn from(date: NaiveDate) -> Self {
        Date(date)
    }
}

/// Serialised as `YYYY-MM-DD`.
#[cfg(feature = "serde")]
impl serde::Serialize for Date {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Accepts anything [`Date::parse`] does, including full timestamps.
#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Date {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = <String as serde::Deserialize>::deserialize(deserializer)?;
        Date::parse(&s).map_err(serde::de::Error::custom)
    }
}

/// Display style for a time of day.
///
/// Which style a reader prefers is caller-owned state; the core only knows
/// how to render either.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ClockFormat {
    /// `8:25 AM`
    #[default]
    TwelveHour,
    /// `08:25`
    TwentyFourHour,
}

impl ClockFormat {
    /// Maps a "use 24-hour time" preference flag onto a format.
    pub fn from_24_hour_flag(use_24_hour_time: bool) -> Self {
        if use_24_hour_time {
            ClockFormat::TwentyFourHour
        } else {
            ClockFormat::TwelveHour
        }
    }
}

/// Wall-clock time of day, independent of any calendar date.
///
/// # Examples
///
/// ```
/// use bell_core::types::time::Time;
///
/// let start = Time::from_hms(8, 25, 0).unwrap();
/// let end: Time = "09:50:00".parse().unwrap();
///
/// assert!(start < end);
/// assert_eq!(end.milliseconds_to(start), -start.milliseconds_to(end));
/// assert_eq!(start.to_string(), "08:25:00");
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Time(NaiveTime);

impl Time {
    /// Creates a Time from hour, minute, and second components.
    ///
    /// # Returns
    /// `Ok(Time)` if the components are valid, `Err(TimeError::InvalidTime)` otherwise.
    pub fn from_hms(hour: u32, minute: u32, second: u32) -> Result<Self, TimeError> {
        NaiveTime::from_hms_opt(hour, minute, second)
            .map(Time)
            .ok_or(TimeError::InvalidTime {
                hour,
                minute,
                second,
            })
    }

    /// Extracts the time of day from a local date-time, discarding the date.
    ///
    /// # Examples
    ///
    /// ```
    /// use bell_core::types::time::Time;
    /// use chrono::NaiveDate;
    ///
    /// let instant = NaiveDate::from_ymd_opt(2019, 7, 28)
    ///     .unwrap()
    ///     .and_hms_opt(9, 0, 0)
    ///     .unwrap();
    /// assert_eq!(Time::from_datetime(&instant), Time::from_hms(9, 0, 0).unwrap());
    /// ```
    pub fn from_datetime(datetime: &NaiveDateTime) -> Self {
        Time(datetime.time())
    }

    /// Parses a time of day from `HH:MM:SS` (optionally with a fraction) or `HH:MM`.
    ///
    /// # Examples
    ///
    /// ```
    /// use bell_core::types::time::Time;
    ///
    /// assert_eq!(Time::parse("8:25").unwrap(), Time::parse("08:25:00").unwrap());
    /// assert!(Time::parse("25:00:00").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, TimeError> {
        let trimmed = s.trim();
        NaiveTime::parse_from_str(trimmed, "%H:%M:%S%.f")
            .or_else(|_| NaiveTime::parse_from_str(trimmed, "%H:%M"))
            .map(Time)
            .map_err(|e| TimeError::ParseError(format!("'{}': {}", s, e)))
    }

    /// Signed distance from `self` to `other` in milliseconds.
    ///
    /// Positive when `other` is later in the day than `self`. Both values are
    /// treated as times on the same nominal day.
    pub fn milliseconds_to(&self, other: Time) -> i64 {
        other.0.signed_duration_since(self.0).num_milliseconds()
    }

    /// Returns the hour component (0-23).
    pub fn hour(&self) -> u32 {
        self.0.hour()
    }

    /// Returns the minute component (0-59).
    pub fn minute(&self) -> u32 {
        self.0.minute()
    }

    /// Returns the second component (0-59).
    pub fn second(&self) -> u32 {
        self.0.second()
    }

    /// Returns the underlying NaiveTime.
    pub fn into_inner(self) -> NaiveTime {
        self.0
    }

    /// Formats the time for display in the given clock style.
    ///
    /// # Examples
    ///
    /// ```
    /// use bell_core::types::time::{ClockFormat, Time};
    ///
    /// let time = Time::from_hms(14, 5, 0).unwrap();
    /// assert_eq!(time.format(ClockFormat::TwelveHour), "2:05 PM");
    /// assert_eq!(time.format(ClockFormat::TwentyFourHour), "14:05");
    /// ```
    pub fn format(&self, clock: ClockFormat) -> String {
        match clock {
            ClockFormat::TwelveHour => self.0.format("%-I:%M %p").to_string(),
            ClockFormat::TwentyFourHour => self.0.format("%H:%M").to_string(),
        }
    }
}

impl FromStr for Time {
    type Err = TimeError;

    fn from_str(s: &str) -> Result<Self, TimeError> {
        Time::parse(s)
    }
}

impl fmt::Display for Time {
    /// Formats the time as `HH:MM:SS`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%H:%M:%S"))
    }
}

impl From<NaiveTime> for Time {
    fn from(time: NaiveTime) -> Self {
        Time(time)
    }
}
