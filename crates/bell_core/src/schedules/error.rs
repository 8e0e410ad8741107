//! Bell schedule error types.

use crate::types::time::{Date, Time};
use thiserror::Error;

/// Errors raised while building or editing schools and bell schedules.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    /// A class period's start time does not precede its end time.
    #[error("Class period '{name}' must start before it ends ({start} >= {end})")]
    InvalidPeriod {
        /// Name of the offending class period.
        name: String,
        /// The start time.
        start: Time,
        /// The end time.
        end: Time,
    },

    /// Two class periods in the same bell schedule overlap.
    #[error("Class periods '{first}' and '{second}' overlap in bell schedule '{schedule_id}'")]
    OverlappingPeriods {
        /// The bell schedule holding both periods.
        schedule_id: String,
        /// Name of the earlier-stored period.
        first: String,
        /// Name of the later-stored period.
        second: String,
    },

    /// No bell schedule with the given identifier exists in the school.
    #[error("Unknown bell schedule: {id}")]
    UnknownSchedule {
        /// The requested identifier.
        id: String,
    },

    /// A bell schedule identifier appears more than once in a school.
    #[error("Duplicate bell schedule identifier: {id}")]
    DuplicateSchedule {
        /// The repeated identifier.
        id: String,
    },

    /// A calendar date is assigned to more than one bell schedule.
    #[error("Date {date} is assigned to both '{first}' and '{second}'")]
    DateConflict {
        /// The doubly-assigned date.
        date: Date,
        /// The first schedule holding the date.
        first: String,
        /// The second schedule holding the date.
        second: String,
    },

    /// A date assignment was requested without a selected bell schedule.
    #[error("No bell schedule selected; select a schedule to assign a date")]
    MissingSelection,

    /// Missing required field in builder.
    #[error("Missing required field: {field}")]
    MissingField {
        /// The name of the missing field.
        field: &'static str,
    },

    /// The school's timezone identifier is not a known IANA zone.
    #[error("Unknown timezone: {timezone}")]
    UnknownTimezone {
        /// The unrecognised identifier.
        timezone: String,
    },
}
