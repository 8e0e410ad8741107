//! Time-state resolution for a school at an instant.
//!
//! This module provides:
//! - [`check_time_range`]: classify a time against an inclusive range
//! - [`sort_classes_by_start_time`]: chronological view over class periods
//! - [`time_state_for_date_at_school`]: the school's [`TimeState`] at an instant
//! - [`next_important_info`]: the next bell and the class it concerns
//! - [`current_activity_name`]: what a student is doing right now
//!
//! All instants are local wall-clock `NaiveDateTime`s in the school's
//! timezone; see [`crate::schedules::School::local_datetime`].
//!
//! # Examples
//!
//! ```
//! use bell_core::resolution::{check_time_range, TimeComparison};
//! use bell_core::types::Time;
//!
//! let start = Time::parse("08:25").unwrap();
//! let end = Time::parse("09:50").unwrap();
//!
//! assert_eq!(
//!     check_time_range(Time::parse("08:25").unwrap(), start, end),
//!     TimeComparison::IsDuringOrExactly
//! );
//! assert_eq!(
//!     check_time_range(Time::parse("09:50:01").unwrap(), start, end),
//!     TimeComparison::IsAfter
//! );
//! ```

use crate::schedules::{ClassPeriod, School};
use crate::types::time::{Date, Time};
use chrono::NaiveDateTime;
use std::fmt;
use tracing::warn;

/// Where a time falls relative to a range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeComparison {
    /// Strictly before the range start.
    IsBefore,
    /// Within the range or exactly on one of its bounds.
    IsDuringOrExactly,
    /// Strictly after the range end.
    IsAfter,
}

/// The school's situation at an instant.
///
/// Exactly one state holds for any instant. States are listed from the
/// coarsest to the most specific.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum TimeState {
    /// No bell schedule governs the date.
    DayOff,
    /// A schedule applies but the instant is outside the session span.
    OutsideSchoolHours,
    /// Within the session span but between classes.
    SchoolInClassOut,
    /// A class period is in progress.
    ClassInSession,
}

impl TimeState {
    /// Machine-readable name of the state.
    pub fn name(&self) -> &'static str {
        match self {
            TimeState::DayOff => "DAY_OFF",
            TimeState::OutsideSchoolHours => "OUTSIDE_SCHOOL_HOURS",
            TimeState::SchoolInClassOut => "SCHOOL_IN_CLASS_OUT",
            TimeState::ClassInSession => "CLASS_IN_SESSION",
        }
    }

    /// Human-readable description of the state.
    pub fn description(&self) -> &'static str {
        match self {
            TimeState::DayOff => "No school today",
            TimeState::OutsideSchoolHours => "School is not in session",
            TimeState::SchoolInClassOut => "Between classes",
            TimeState::ClassInSession => "Class is in session",
        }
    }
}

impl fmt::Display for TimeState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The next bell and the class it concerns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NextEvent<'a> {
    /// The class the bell relates to.
    pub class_period: &'a ClassPeriod,
    /// When the bell rings.
    pub time: Time,
}

impl NextEvent<'_> {
    /// Milliseconds from `now` until the bell; zero when it rings at `now`.
    pub fn milliseconds_from(&self, now: Time) -> i64 {
        now.milliseconds_to(self.time)
    }
}

/// Classifies `check` against the inclusive range `[start, end]`.
///
/// `IsBefore` when both bounds are still ahead, `IsAfter` when both are
/// behind, `IsDuringOrExactly` otherwise. An inverted range is logged and
/// classified by the same rule, so a time lying between the two bounds of
/// an inverted range counts as during.
pub fn check_time_range(check: Time, start: Time, end: Time) -> TimeComparison {
    if start.milliseconds_to(end) < 0 {
        warn!(%start, %end, "time range ends before it starts");
    }

    let start_check = check.milliseconds_to(start);
    let end_check = check.milliseconds_to(end);

    if start_check > 0 && end_check > 0 {
        TimeComparison::IsBefore
    } else if start_check < 0 && end_check < 0 {
        TimeComparison::IsAfter
    } else {
        TimeComparison::IsDuringOrExactly
    }
}

/// Returns the class periods in ascending start-time order.
///
/// The sort is stable, so periods sharing a start time keep their stored
/// order. The input is not modified.
pub fn sort_classes_by_start_time(classes: &[ClassPeriod]) -> Vec<&ClassPeriod> {
    let mut sorted: Vec<&ClassPeriod> = classes.iter().collect();
    sorted.sort_by(|a, b| (-a.start_time().milliseconds_to(b.start_time())).cmp(&0));
    sorted
}

/// Resolves the school's [`TimeState`] at a local instant.
///
/// # Examples
///
/// ```
/// use bell_core::resolution::{time_state_for_date_at_school, TimeState};
/// use bell_core::schedules::SchoolBuilder;
/// use chrono::NaiveDate;
///
/// let stamp = NaiveDate::from_ymd_opt(2019, 7, 28).unwrap().and_hms_opt(0, 0, 0).unwrap();
/// let school = SchoolBuilder::new()
///     .id("ths")
///     .name("The High School")
///     .creation_date(stamp)
///     .last_modified(stamp)
///     .build()
///     .unwrap();
///
/// let noon = NaiveDate::from_ymd_opt(2019, 7, 28).unwrap().and_hms_opt(12, 0, 0).unwrap();
/// assert_eq!(time_state_for_date_at_school(&noon, &school), TimeState::DayOff);
/// ```
pub fn time_state_for_date_at_school(datetime: &NaiveDateTime, school: &School) -> TimeState {
    let Some(schedule) = school.schedule_for_date(Date::from_datetime(datetime)) else {
        return TimeState::DayOff;
    };

    if !school.is_in_session(datetime) {
        return TimeState::OutsideSchoolHours;
    }

    match schedule.class_period_for_time(Time::from_datetime(datetime)) {
        Some(_) => TimeState::ClassInSession,
        None => TimeState::SchoolInClassOut,
    }
}

/// Finds the next bell at or after a local instant.
///
/// Boundaries are visited in chronological class order, start before end.
/// The first boundary not yet passed is the next bell. When the instant
/// falls inside the class owning that boundary, the event is reported
/// against the following class; if there is none, there is nothing further
/// to announce and `None` is returned. `None` is also returned when no
/// schedule governs the date or every boundary has passed.
pub fn next_important_info<'a>(
    datetime: &NaiveDateTime,
    school: &'a School,
) -> Option<NextEvent<'a>> {
    let schedule = school.schedule_for_date(Date::from_datetime(datetime))?;
    let now = Time::from_datetime(datetime);
    let classes = schedule.classes_by_start_time();

    for (i, class) in classes.iter().enumerate() {
        for time in [class.start_time(), class.end_time()] {
            if now.milliseconds_to(time) >= 0 {
                let class_period = if class.state_for_time(now) == TimeComparison::IsDuringOrExactly {
                    classes.get(i + 1).copied()?
                } else {
                    *class
                };
                return Some(NextEvent { class_period, time });
            }
        }
    }

    None
}

/// Describes what is happening at a local instant.
///
/// The class name while a class is in session, the school's passing period
/// name between classes, `None` outside the session span or on days off.
pub fn current_activity_name(datetime: &NaiveDateTime, school: &School) -> Option<String> {
    match time_state_for_date_at_school(datetime, school) {
        TimeState::ClassInSession => school
            .schedule_for_date(Date::from_datetime(datetime))
            .and_then(|s| s.class_period_for_time(Time::from_datetime(datetime)))
            .map(|p| p.name().to_string()),
        TimeState::SchoolInClassOut => Some(school.passing_period_name().to_string()),
        TimeState::DayOff | TimeState::OutsideSchoolHours => None,
    }
}
