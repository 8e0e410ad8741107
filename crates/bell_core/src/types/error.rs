//! Error types for calendar-date and time-of-day values.
//!
//! This module provides:
//! - `DateError`: Errors from date construction and parsing
//! - `TimeError`: Errors from time-of-day construction and parsing

use thiserror::Error;

/// Date-related errors.
///
/// # Examples
/// ```
/// use bell_core::types::DateError;
///
/// let err = DateError::InvalidDate { year: 2019, month: 2, day: 30 };
/// assert_eq!(format!("{}", err), "Invalid date: 2019-2-30");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DateError {
    /// Invalid date components (e.g., February 30th).
    #[error("Invalid date: {year}-{month}-{day}")]
    InvalidDate {
        /// Year component
        year: i32,
        /// Month component (1-12)
        month: u32,
        /// Day component (1-31)
        day: u32,
    },

    /// Failed to parse date string.
    #[error("Date parse error: {0}")]
    ParseError(String),
}

/// Time-of-day errors.
///
/// # Examples
/// ```
/// use bell_core::types::TimeError;
///
/// let err = TimeError::InvalidTime { hour: 25, minute: 0, second: 0 };
/// assert_eq!(format!("{}", err), "Invalid time: 25:00:00");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimeError {
    /// Invalid time components (e.g., 25:00).
    #[error("Invalid time: {hour:02}:{minute:02}:{second:02}")]
    InvalidTime {
        /// Hour component (0-23)
        hour: u32,
        /// Minute component (0-59)
        minute: u32,
        /// Second component (0-59)
        second: u32,
    },

    /// Failed to parse time string.
    #[error("Time parse error: {0}")]
    ParseError(String),
}
