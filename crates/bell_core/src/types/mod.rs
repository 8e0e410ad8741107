//! Calendar and clock value types.
//!
//! This module provides:
//! - `time`: `Date` (calendar date), `Time` (time of day) and `ClockFormat`
//! - `error`: Structured error types for date and time construction/parsing
//!
//! # Re-exports
//!
//! - [`Date`], [`Time`], [`ClockFormat`] from `time`
//! - [`DateError`], [`TimeError`] from `error`

pub mod error;
pub mod time;

pub use error::{DateError, TimeError};
pub use time::{ClockFormat, Date, Time};
