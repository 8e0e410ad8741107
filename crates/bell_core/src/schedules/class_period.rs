//! Class period definition.

use super::error::ScheduleError;
use crate::resolution::{check_time_range, TimeComparison};
use crate::types::time::Time;
use chrono::NaiveDateTime;

/// A single named class or meeting within a bell schedule.
///
/// Bounded by a start and end time on the same day; the start always
/// precedes the end.
///
/// # Examples
///
/// ```
/// use bell_core::schedules::ClassPeriod;
/// use bell_core::resolution::TimeComparison;
/// use bell_core::types::Time;
/// use chrono::NaiveDate;
///
/// let created = NaiveDate::from_ymd_opt(2019, 8, 27)
///     .unwrap()
///     .and_hms_opt(17, 40, 43)
///     .unwrap();
/// let period = ClassPeriod::new(
///     "First Period",
///     Time::parse("08:25:00").unwrap(),
///     Time::parse("09:50:00").unwrap(),
///     created,
/// )
/// .unwrap();
///
/// assert_eq!(
///     period.state_for_time(Time::parse("08:25:00").unwrap()),
///     TimeComparison::IsDuringOrExactly
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassPeriod {
    name: String,
    start_time: Time,
    end_time: Time,
    creation_date: NaiveDateTime,
}

impl ClassPeriod {
    /// Creates a new class period.
    ///
    /// # Errors
    ///
    /// Returns `ScheduleError::InvalidPeriod` unless `start_time` is strictly
    /// before `end_time`.
    pub fn new(
        name: impl Into<String>,
        start_time: Time,
        end_time: Time,
        creation_date: NaiveDateTime,
    ) -> Result<Self, ScheduleError> {
        let name = name.into();
        if start_time >= end_time {
            return Err(ScheduleError::InvalidPeriod {
                name,
                start: start_time,
                end: end_time,
            });
        }

        Ok(Self {
            name,
            start_time,
            end_time,
            creation_date,
        })
    }

    /// Returns the display name of the period.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the time the period starts.
    #[inline]
    pub fn start_time(&self) -> Time {
        self.start_time
    }

    /// Returns the time the period ends.
    #[inline]
    pub fn end_time(&self) -> Time {
        self.end_time
    }

    /// Returns when the period was authored.
    #[inline]
    pub fn creation_date(&self) -> NaiveDateTime {
        self.creation_date
    }

    /// Classifies `time` against this period, inclusive of both bounds.
    pub fn state_for_time(&self, time: Time) -> TimeComparison {
        check_time_range(time, self.start_time, self.end_time)
    }

    /// Returns whether `time` falls within the period or on one of its bounds.
    #[inline]
    pub fn contains(&self, time: Time) -> bool {
        self.state_for_time(time) == TimeComparison::IsDuringOrExactly
    }

    /// Length of the period in milliseconds.
    pub fn duration_milliseconds(&self) -> i64 {
        self.start_time.milliseconds_to(self.end_time)
    }

    /// Returns whether the two periods share more than a boundary instant.
    ///
    /// Back-to-back periods (one ending exactly when the next starts) do not
    /// overlap.
    pub fn overlaps(&self, other: &ClassPeriod) -> bool {
        self.start_time < other.end_time && other.start_time < self.end_time
    }
}
