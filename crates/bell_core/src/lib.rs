//! # Bell Core (L1: Domain)
//!
//! Bell schedule domain model and time-state resolution for ClassClock.
//!
//! This crate provides:
//! - Calendar-date and time-of-day value types
//! - Schools, bell schedules and class periods with construction-time validation
//! - Resolution of a school's state at an instant and of the next bell
//! - Date assignment commands and a month calendar model
//! - A thread-safe school handle
//!
//! ## Design Principles
//!
//! - **Wall-clock semantics**: all instants are local to the school's timezone
//! - **Exclusive dates**: a calendar date belongs to at most one bell schedule
//! - **Explicit commands**: every edit reports a [`commands::ScheduleChange`]
//!
//! # Examples
//!
//! ```
//! use bell_core::prelude::*;
//! use chrono::NaiveDate;
//!
//! let stamp = NaiveDate::from_ymd_opt(2019, 7, 28).unwrap().and_hms_opt(7, 37, 50).unwrap();
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
//!     [Date::parse("2019-07-28").unwrap()],
//!     vec![first],
//!     stamp,
//! )
//! .unwrap();
//! let school = SchoolBuilder::new()
//!     .id("ths")
//!     .name("The High School")
//!     .bell_schedule(regular)
//!     .creation_date(stamp)
//!     .last_modified(stamp)
//!     .build()
//!     .unwrap();
//!
//! let now = Date::parse("2019-07-28").unwrap().at(Time::parse("08:00").unwrap());
//! assert_eq!(time_state_for_date_at_school(&now, &school), TimeState::OutsideSchoolHours);
//!
//! let next = next_important_info(&now, &school).unwrap();
//! assert_eq!(next.class_period.name(), "First Period");
//! assert_eq!(next.time, Time::parse("08:25").unwrap());
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod calendar;
pub mod commands;
pub mod resolution;
pub mod schedules;
pub mod shared;
pub mod types;

/// Commonly used items.
pub mod prelude {
    pub use crate::calendar::{month_grid, CalendarWeek, DayCell, MonthCursor};
    pub use crate::commands::{assign_date, toggle_date, unassign_date, ScheduleChange};
    pub use crate::resolution::{
        check_time_range, current_activity_name, next_important_info,
        sort_classes_by_start_time, time_state_for_date_at_school, NextEvent, TimeComparison,
        TimeState,
    };
    pub use crate::schedules::{BellSchedule, ClassPeriod, School, SchoolBuilder, ScheduleError};
    pub use crate::shared::SharedSchool;
    pub use crate::types::{ClockFormat, Date, DateError, Time, TimeError};
}
