//! Month calendar model for assigning dates to bell schedules.
//!
//! The month on display is a caller-owned [`MonthCursor`]; [`month_grid`]
//! lays out that month in Monday-first weeks and annotates each day with the
//! schedule governing it.

use crate::schedules::School;
use crate::types::error::DateError;
use crate::types::time::Date;
use chrono::{Datelike, Months, NaiveDate};
use std::fmt;
use std::str::FromStr;

/// A selected calendar month.
///
/// # Examples
///
/// ```
/// use bell_core::calendar::MonthCursor;
///
/// let cursor: MonthCursor = "2019-12".parse().unwrap();
/// assert_eq!(cursor.to_string(), "December 2019");
/// assert_eq!(cursor.next().to_string(), "January 2020");
/// assert_eq!(cursor.last_day().day(), 31);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthCursor {
    first: NaiveDate,
}

impl MonthCursor {
    /// Creates a cursor for the given month.
    ///
    /// # Errors
    ///
    /// `DateError::InvalidDate` if the month is outside 1..=12 or the year is
    /// out of range.
    pub fn new(year: i32, month: u32) -> Result<Self, DateError> {
        NaiveDate::from_ymd_opt(year, month, 1)
            .map(|first| Self { first })
            .ok_or(DateError::InvalidDate {
                year,
                month,
                day: 1,
            })
    }

    /// The month containing `date`.
    pub fn containing(date: Date) -> Self {
        let inner = date.into_inner();
        Self {
            first: inner.with_day(1).unwrap_or(inner),
        }
    }

    /// The year of the month.
    #[inline]
    pub fn year(&self) -> i32 {
        self.first.year()
    }

    /// The month number (1..=12).
    #[inline]
    pub fn month(&self) -> u32 {
        self.first.month()
    }

    /// The preceding month. Saturates at the earliest representable month.
    pub fn previous(&self) -> Self {
        self.first
            .checked_sub_months(Months::new(1))
            .map(|first| Self { first })
            .unwrap_or(*self)
    }

    /// The following month. Saturates at the latest representable month.
    pub fn next(&self) -> Self {
        self.first
            .checked_add_months(Months::new(1))
            .map(|first| Self { first })
            .unwrap_or(*self)
    }

    /// The first day of the month.
    pub fn first_day(&self) -> Date {
        Date::from(self.first)
    }

    /// The last day of the month.
    pub fn last_day(&self) -> Date {
        let last = self
            .first
            .checked_add_months(Months::new(1))
            .and_then(|next| next.pred_opt())
            .or_else(|| NaiveDate::from_ymd_opt(self.year(), 12, 31))
            .unwrap_or(self.first);
        Date::from(last)
    }

    /// Whether `date` falls in this month.
    pub fn contains(&self, date: Date) -> bool {
        date.year() == self.year() && date.month() == self.month()
    }
}

impl fmt::Display for MonthCursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.first.format("%B %Y"))
    }
}

impl FromStr for MonthCursor {
    type Err = DateError;

    /// Parses `YYYY-MM`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        NaiveDate::parse_from_str(&format!("{s}-01"), "%Y-%m-%d")
            .map(|first| Self { first })
            .map_err(|e| DateError::ParseError(format!("'{s}' is not a YYYY-MM month: {e}")))
    }
}

/// One day of a month grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayCell {
    /// The calendar date.
    pub date: Date,
    /// Whether the date belongs to the displayed month; leading and trailing
    /// days of neighbouring months are `false`.
    pub in_month: bool,
    /// Identifier of the schedule governing the date.
    pub schedule_id: Option<String>,
    /// Name of the schedule governing the date.
    pub schedule_name: Option<String>,
    /// Whether the governing schedule is the selected one.
    pub selected: bool,
}

/// Seven consecutive days, Monday through Sunday.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarWeek {
    /// The days of the week, Monday first.
    pub days: Vec<DayCell>,
}

/// Lays out the month in Monday-first weeks.
///
/// The grid starts on the Monday on or before the first of the month and
/// ends on the Sunday on or after the last, so every week is complete.
///
/// # Examples
///
/// ```
/// use bell_core::calendar::{month_grid, MonthCursor};
/// use bell_core::schedules::SchoolBuilder;
/// use chrono::NaiveDate;
///
/// let stamp = NaiveDate::from_ymd_opt(2019, 7, 4).unwrap().and_hms_opt(0, 0, 0).unwrap();
/// let school = SchoolBuilder::new()
///     .id("ths")
///     .name("The High School")
///     .creation_date(stamp)
///     .last_modified(stamp)
///     .build()
///     .unwrap();
///
/// // July 2019 starts on a Monday and ends on a Wednesday.
/// let weeks = month_grid(MonthCursor::new(2019, 7).unwrap(), &school, None);
/// assert_eq!(weeks.len(), 5);
/// assert_eq!(weeks[0].days[0].date.to_string(), "2019-07-01");
/// assert_eq!(weeks[4].days[6].date.to_string(), "2019-08-04");
/// ```
pub fn month_grid(cursor: MonthCursor, school: &School, selected: Option<&str>) -> Vec<CalendarWeek> {
    let first = cursor.first_day();
    let last = cursor.last_day();
    let start = first.add_days(-i64::from(first.weekday().num_days_from_monday()));
    let end = last.add_days(6 - i64::from(last.weekday().num_days_from_monday()));

    let cells: Vec<DayCell> = (0..=(end - start))
        .map(|offset| {
            let date = start.add_days(offset);
            let schedule = school.schedule_for_date(date);
            DayCell {
                date,
                in_month: cursor.contains(date),
                schedule_id: schedule.map(|s| s.id().to_string()),
                schedule_name: schedule.map(|s| s.name().to_string()),
                selected: match (schedule, selected) {
                    (Some(s), Some(id)) => s.id() == id,
                    _ => false,
                },
            }
        })
        .collect();

    cells
        .chunks(7)
        .map(|week| CalendarWeek {
            days: week.to_vec(),
        })
        .collect()
}
