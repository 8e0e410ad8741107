//! BellSchedule implementation.

use super::class_period::ClassPeriod;
use super::error::ScheduleError;
use crate::resolution::sort_classes_by_start_time;
use crate::types::time::{Date, Time};
use chrono::NaiveDateTime;
use indexmap::IndexSet;

/// A named set of class periods bound to the calendar dates it governs.
///
/// The date set keeps dates in the order they were added, so a schedule
/// decoded from the wire re-encodes its date list unchanged. Class periods
/// keep their stored order as well; callers wanting chronological order use
/// [`BellSchedule::classes_by_start_time`].
///
/// # Examples
///
/// ```
/// use bell_core::schedules::{BellSchedule, ClassPeriod};
/// use bell_core::types::{Date, Time};
/// use chrono::NaiveDate;
///
/// let stamp = NaiveDate::from_ymd_opt(2019, 8, 27)
///     .unwrap()
///     .and_hms_opt(17, 25, 33)
///     .unwrap();
/// let first = ClassPeriod::new(
///     "First Period",
///     Time::parse("08:25:00").unwrap(),
///     Time::parse("09:50:00").unwrap(),
///     stamp,
/// )
/// .unwrap();
///
/// let mut schedule = BellSchedule::new(
///     "33d14ca5c91111e996ad181dea92ad79",
///     "Regular Schedule",
///     "/school/1/bellschedule/33d14ca5c91111e996ad181dea92ad79/",
///     [Date::parse("2019-08-27").unwrap()],
///     vec![first],
///     stamp,
/// )
/// .unwrap();
///
/// let date = Date::parse("2019-08-28").unwrap();
/// assert!(!schedule.contains_date(date));
/// schedule.add_date(date);
/// assert!(schedule.contains_date(date));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BellSchedule {
    id: String,
    name: String,
    display_name: Option<String>,
    endpoint: String,
    dates: IndexSet<Date>,
    class_periods: Vec<ClassPeriod>,
    creation_date: Option<NaiveDateTime>,
    last_modified: NaiveDateTime,
}

impl BellSchedule {
    /// Creates a bell schedule.
    ///
    /// Repeated dates collapse into one entry at the position of their first
    /// occurrence.
    ///
    /// # Errors
    ///
    /// Returns `ScheduleError::OverlappingPeriods` if any two class periods
    /// share more than a boundary instant.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        endpoint: impl Into<String>,
        dates: impl IntoIterator<Item = Date>,
        class_periods: Vec<ClassPeriod>,
        last_modified: NaiveDateTime,
    ) -> Result<Self, ScheduleError> {
        let id = id.into();
        validate_no_overlap(&id, &class_periods)?;

        Ok(Self {
            id,
            name: name.into(),
            display_name: None,
            endpoint: endpoint.into(),
            dates: dates.into_iter().collect(),
            class_periods,
            creation_date: None,
            last_modified,
        })
    }

    /// Sets the short display name shown in compact views.
    pub fn with_display_name(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = Some(display_name.into());
        self
    }

    /// Sets when the schedule was first authored.
    pub fn with_creation_date(mut self, creation_date: NaiveDateTime) -> Self {
        self.creation_date = Some(creation_date);
        self
    }

    /// Returns the schedule identifier.
    #[inline]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the full schedule name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the short display name, if one was supplied.
    #[inline]
    pub fn display_name(&self) -> Option<&str> {
        self.display_name.as_deref()
    }

    /// Returns the resource endpoint the schedule was loaded from.
    #[inline]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Returns when the schedule was first authored, if known.
    #[inline]
    pub fn creation_date(&self) -> Option<NaiveDateTime> {
        self.creation_date
    }

    /// Returns when the schedule was last modified.
    #[inline]
    pub fn last_modified(&self) -> NaiveDateTime {
        self.last_modified
    }

    /// Returns whether the schedule governs `date`.
    #[inline]
    pub fn contains_date(&self, date: Date) -> bool {
        self.dates.contains(&date)
    }

    /// Assigns `date` to this schedule.
    ///
    /// Returns `true` if the date was not already present. Adding a present
    /// date is a no-op.
    pub fn add_date(&mut self, date: Date) -> bool {
        self.dates.insert(date)
    }

    /// Removes `date` from this schedule.
    ///
    /// Returns `true` if the date was present. Removing an absent date is a
    /// no-op. The remaining dates keep their relative order.
    pub fn remove_date(&mut self, date: Date) -> bool {
        self.dates.shift_remove(&date)
    }

    /// Iterates over the governed dates in insertion order.
    pub fn dates(&self) -> impl Iterator<Item = Date> + '_ {
        self.dates.iter().copied()
    }

    /// Number of governed dates.
    #[inline]
    pub fn date_count(&self) -> usize {
        self.dates.len()
    }

    /// Returns all class periods in stored order.
    #[inline]
    pub fn all_classes(&self) -> &[ClassPeriod] {
        &self.class_periods
    }

    /// Returns the class periods ordered by start time.
    pub fn classes_by_start_time(&self) -> Vec<&ClassPeriod> {
        sort_classes_by_start_time(&self.class_periods)
    }

    /// Returns the period in progress at `time`, if any.
    ///
    /// Bounds are inclusive, so at the instant one period ends and the next
    /// begins both claim the time; the earlier-stored one is returned.
    pub fn class_period_for_time(&self, time: Time) -> Option<&ClassPeriod> {
        self.class_periods.iter().find(|p| p.contains(time))
    }

    /// Earliest start time across all periods.
    pub fn first_class_start(&self) -> Option<Time> {
        self.class_periods.iter().map(ClassPeriod::start_time).min()
    }

    /// Latest end time across all periods.
    pub fn last_class_end(&self) -> Option<Time> {
        self.class_periods.iter().map(ClassPeriod::end_time).max()
    }
}

fn validate_no_overlap(schedule_id: &str, periods: &[ClassPeriod]) -> Result<(), ScheduleError> {
    for (i, first) in periods.iter().enumerate() {
        if let Some(second) = periods[i + 1..].iter().find(|p| first.overlaps(p)) {
            return Err(ScheduleError::OverlappingPeriods {
                schedule_id: schedule_id.to_string(),
                first: first.name().to_string(),
                second: second.name().to_string(),
            });
        }
    }
    Ok(())
}
