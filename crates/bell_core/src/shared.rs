//! Thread-safe handle to a school.

use crate::commands::ScheduleChange;
use crate::schedules::{School, ScheduleError};
use crate::types::time::Date;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// A school shared between threads.
///
/// Clones share the same school. Every date mutation runs under a single
/// lock acquisition, so no reader observes a date held by two schedules.
///
/// A poisoned lock is recovered: each mutation is a single set insert or
/// remove, so the school is structurally valid even if a holder panicked.
#[derive(Debug, Clone)]
pub struct SharedSchool {
    inner: Arc<Mutex<School>>,
}

impl SharedSchool {
    /// Wraps a school for shared access.
    pub fn new(school: School) -> Self {
        Self {
            inner: Arc::new(Mutex::new(school)),
        }
    }

    fn lock(&self) -> MutexGuard<'_, School> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Runs `f` with shared access to the school.
    pub fn read<R>(&self, f: impl FnOnce(&School) -> R) -> R {
        f(&self.lock())
    }

    /// Runs `f` with exclusive access to the school.
    pub fn update<R>(&self, f: impl FnOnce(&mut School) -> R) -> R {
        f(&mut self.lock())
    }

    /// Assigns or releases a date atomically.
    ///
    /// See [`School::set_schedule_for_date`].
    pub fn set_schedule_for_date(
        &self,
        date: Date,
        target_id: Option<&str>,
    ) -> Result<ScheduleChange, ScheduleError> {
        self.lock().set_schedule_for_date(date, target_id)
    }

    /// Returns a copy of the current school.
    pub fn snapshot(&self) -> School {
        self.lock().clone()
    }
}

impl From<School> for SharedSchool {
    fn from(school: School) -> Self {
        Self::new(school)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedules::{BellSchedule, SchoolBuilder};
    use chrono::{NaiveDate, NaiveDateTime};
    use std::thread;

    fn stamp() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2019, 7, 4)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
    }

    fn school() -> School {
        let schedules = ["regular", "minimum", "rally"].map(|id| {
            BellSchedule::new(id, id, "", Vec::<Date>::new(), Vec::new(), stamp()).unwrap()
        });
        SchoolBuilder::new()
            .id("ths")
            .name("The High School")
            .bell_schedules(schedules)
            .creation_date(stamp())
            .last_modified(stamp())
            .build()
            .unwrap()
    }

    #[test]
    fn test_read_and_update() {
        let shared = SharedSchool::from(school());
        let date = Date::parse("2019-08-27").unwrap();

        let change = shared.set_schedule_for_date(date, Some("regular")).unwrap();
        assert!(change.is_change());
        assert_eq!(
            shared.read(|s| s.schedule_for_date(date).map(|b| b.id().to_string())),
            Some("regular".to_string())
        );

        shared.update(|s| s.set_schedule_for_date(date, None)).unwrap();
        assert!(shared.snapshot().schedule_for_date(date).is_none());
    }

    #[test]
    fn test_concurrent_assignments_keep_dates_exclusive() {
        let shared = SharedSchool::new(school());
        let ids = ["regular", "minimum", "rally"];
        let base = Date::parse("2019-09-02").unwrap();

        let handles: Vec<_> = (0..6)
            .map(|worker| {
                let shared = shared.clone();
                thread::spawn(move || {
                    for round in 0..50i64 {
                        let date = base.add_days(round % 5);
                        let target = if (worker + round) % 4 == 3 {
                            None
                        } else {
                            Some(ids[((worker + round) % 3) as usize])
                        };
                        shared.set_schedule_for_date(date, target).unwrap();
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        let school = shared.snapshot();
        for offset in 0..5 {
            let date = base.add_days(offset);
            let owners = school
                .bell_schedules()
                .iter()
                .filter(|s| s.contains_date(date))
                .count();
            assert!(owners <= 1);
        }
    }

    #[test]
    fn test_poisoned_lock_is_recovered() {
        let shared = SharedSchool::new(school());
        let poisoner = shared.clone();
        let _ = thread::spawn(move || {
            poisoner.update(|_| panic!("holder panicked"));
        })
        .join();

        let date = Date::parse("2019-08-27").unwrap();
        assert!(shared.set_schedule_for_date(date, Some("rally")).is_ok());
    }
}
