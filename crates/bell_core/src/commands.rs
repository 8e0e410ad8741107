//! Date assignment commands.
//!
//! Every edit to a school's calendar goes through one of these functions.
//! Each returns a [`ScheduleChange`] describing what happened so callers
//! know whether anything needs persisting.
//!
//! # Examples
//!
//! ```
//! use bell_core::commands::{toggle_date, ScheduleChange};
//! use bell_core::schedules::{BellSchedule, SchoolBuilder};
//! use bell_core::types::Date;
//! use chrono::NaiveDate;
//!
//! let stamp = NaiveDate::from_ymd_opt(2019, 7, 4).unwrap().and_hms_opt(0, 0, 0).unwrap();
//! let regular = BellSchedule::new("regular", "Regular", "", Vec::<Date>::new(), Vec::new(), stamp)
//!     .unwrap();
//! let mut school = SchoolBuilder::new()
//!     .id("ths")
//!     .name("The High School")
//!     .bell_schedule(regular)
//!     .creation_date(stamp)
//!     .last_modified(stamp)
//!     .build()
//!     .unwrap();
//!
//! let date = Date::parse("2019-08-27").unwrap();
//! let on = toggle_date(&mut school, date, Some("regular")).unwrap();
//! assert!(matches!(on, ScheduleChange::Added { .. }));
//! let off = toggle_date(&mut school, date, Some("regular")).unwrap();
//! assert!(matches!(off, ScheduleChange::Removed { .. }));
//! ```

use crate::schedules::{School, ScheduleError};
use crate::types::time::Date;

/// Outcome of a date assignment command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScheduleChange {
    /// The date had no schedule and now belongs to `schedule_id`.
    Added {
        /// The assigned date.
        date: Date,
        /// The schedule now holding the date.
        schedule_id: String,
    },
    /// The date was released from `schedule_id`.
    Removed {
        /// The released date.
        date: Date,
        /// The schedule that held the date.
        schedule_id: String,
    },
    /// The date moved between schedules.
    Moved {
        /// The moved date.
        date: Date,
        /// The previous owner.
        from: String,
        /// The new owner.
        to: String,
    },
    /// Nothing changed.
    Unchanged {
        /// The date the command targeted.
        date: Date,
    },
}

impl ScheduleChange {
    /// The date the command targeted.
    pub fn date(&self) -> Date {
        match self {
            ScheduleChange::Added { date, .. }
            | ScheduleChange::Removed { date, .. }
            | ScheduleChange::Moved { date, .. }
            | ScheduleChange::Unchanged { date } => *date,
        }
    }

    /// Whether the school was modified.
    pub fn is_change(&self) -> bool {
        !matches!(self, ScheduleChange::Unchanged { .. })
    }
}

/// Assigns `date` to the schedule `schedule_id`, moving it if another
/// schedule holds it.
///
/// # Errors
///
/// `ScheduleError::UnknownSchedule` if the school has no such schedule.
pub fn assign_date(
    school: &mut School,
    date: Date,
    schedule_id: &str,
) -> Result<ScheduleChange, ScheduleError> {
    school.set_schedule_for_date(date, Some(schedule_id))
}

/// Releases `date` from whichever schedule holds it.
pub fn unassign_date(school: &mut School, date: Date) -> ScheduleChange {
    // No target id means no lookup can fail.
    school
        .set_schedule_for_date(date, None)
        .unwrap_or(ScheduleChange::Unchanged { date })
}

/// Handles a click on a calendar day.
///
/// Clicking a day already held by the selected schedule releases it;
/// otherwise the day is assigned to the selected schedule.
///
/// # Errors
///
/// - `ScheduleError::MissingSelection` if no schedule is selected
/// - `ScheduleError::UnknownSchedule` if the selection names no schedule
pub fn toggle_date(
    school: &mut School,
    date: Date,
    selected: Option<&str>,
) -> Result<ScheduleChange, ScheduleError> {
    let selected = selected.ok_or(ScheduleError::MissingSelection)?;

    let already_selected = school
        .schedule_for_date(date)
        .is_some_and(|s| s.id() == selected);
    if already_selected {
        Ok(unassign_date(school, date))
    } else {
        assign_date(school, date, selected)
    }
}
