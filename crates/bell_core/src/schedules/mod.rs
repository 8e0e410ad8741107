//! Schools, bell schedules and class periods.
//!
//! This module provides:
//! - [`School`]: A school and the bell schedules it owns
//! - [`SchoolBuilder`]: Builder pattern for constructing schools
//! - [`BellSchedule`]: A named set of class periods bound to calendar dates
//! - [`ClassPeriod`]: A single named class within a bell schedule
//! - [`ScheduleError`]: Validation and lookup failures
//!
//! A school is assembled once and then edited only through date assignment,
//! which keeps every calendar date held by at most one bell schedule.
//!
//! # Examples
//!
//! ```
//! use bell_core::schedules::{BellSchedule, ClassPeriod, SchoolBuilder};
//! use bell_core::types::{Date, Time};
//! use chrono::NaiveDate;
//!
//! let stamp = NaiveDate::from_ymd_opt(2019, 8, 27).unwrap().and_hms_opt(17, 25, 33).unwrap();
//! let first = ClassPeriod::new(
//!     "First Period",
//!     Time::parse("08:25").unwrap(),
//!     Time::parse("09:50").unwrap(),
//!     stamp,
//! )
//! .unwrap();
//! let regular = BellSchedule::new(
//!     "regular",
//!     "Regular Schedule",
//!     "",
//!     [Date::parse("2019-08-27").unwrap()],
//!     vec![first],
//!     stamp,
//! )
//! .unwrap();
//!
//! let school = SchoolBuilder::new()
//!     .id("ths")
//!     .name("The High School")
//!     .bell_schedule(regular)
//!     .creation_date(stamp)
//!     .last_modified(stamp)
//!     .build()
//!     .unwrap();
//!
//! let at = Date::parse("2019-08-27").unwrap().at(Time::parse("09:00").unwrap());
//! assert!(school.is_in_session(&at));
//! ```

mod bell_schedule;
mod class_period;
mod error;
mod school;

pub use bell_schedule::BellSchedule;
pub use class_period::ClassPeriod;
pub use error::ScheduleError;
pub use school::{School, SchoolBuilder, DEFAULT_PASSING_PERIOD_NAME, DEFAULT_TIMEZONE};
