//! School aggregate and SchoolBuilder implementation.

use super::bell_schedule::BellSchedule;
use super::error::ScheduleError;
use crate::commands::ScheduleChange;
use crate::resolution::{check_time_range, TimeComparison};
use crate::types::time::{Date, Time};
use chrono::{DateTime, NaiveDateTime, Utc};
use chrono_tz::Tz;
use tracing::debug;

/// Name used for time between classes when a school does not supply one.
pub const DEFAULT_PASSING_PERIOD_NAME: &str = "Passing Period";

/// Timezone assumed when a school does not supply one.
pub const DEFAULT_TIMEZONE: &str = "UTC";

/// A school and the bell schedules it owns.
///
/// Every calendar date belongs to at most one of the school's bell
/// schedules. The builder rejects aggregates violating that, and
/// [`School::set_schedule_for_date`] preserves it.
///
/// # Examples
///
/// ```
/// use bell_core::schedules::{BellSchedule, SchoolBuilder};
/// use bell_core::types::Date;
/// use chrono::NaiveDate;
///
/// let stamp = NaiveDate::from_ymd_opt(2019, 7, 4)
///     .unwrap()
///     .and_hms_opt(13, 53, 37)
///     .unwrap();
/// let regular = BellSchedule::new(
///     "regular",
///     "Regular Schedule",
///     "",
///     [Date::parse("2019-07-28").unwrap()],
///     Vec::new(),
///     stamp,
/// )
/// .unwrap();
///
/// let school = SchoolBuilder::new()
///     .id("cb93cef79e9d11e986f2181dea92ad79")
///     .name("The High School")
///     .acronym("THS")
///     .bell_schedule(regular)
///     .creation_date(stamp)
///     .last_modified(stamp)
///     .build()
///     .unwrap();
///
/// let found = school.schedule_for_date(Date::parse("2019-07-28").unwrap());
/// assert_eq!(found.map(|s| s.id()), Some("regular"));
/// assert!(school.schedule_for_date(Date::parse("2019-07-27").unwrap()).is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct School {
    id: String,
    owner_id: String,
    name: String,
    acronym: String,
    endpoint: String,
    timezone: String,
    bell_schedules: Vec<BellSchedule>,
    passing_period_name: String,
    creation_date: NaiveDateTime,
    last_modified: NaiveDateTime,
}

impl School {
    /// Returns the school identifier.
    #[inline]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the identifier of the account owning the school.
    #[inline]
    pub fn owner_id(&self) -> &str {
        &self.owner_id
    }

    /// Returns the full school name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the school's acronym.
    #[inline]
    pub fn acronym(&self) -> &str {
        &self.acronym
    }

    /// Returns the resource endpoint the school was loaded from.
    #[inline]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Returns the IANA timezone identifier of the school's wall clock.
    #[inline]
    pub fn timezone(&self) -> &str {
        &self.timezone
    }

    /// Returns the label for time between classes.
    #[inline]
    pub fn passing_period_name(&self) -> &str {
        &self.passing_period_name
    }

    /// Returns when the school was created.
    #[inline]
    pub fn creation_date(&self) -> NaiveDateTime {
        self.creation_date
    }

    /// Returns when the school was last modified.
    #[inline]
    pub fn last_modified(&self) -> NaiveDateTime {
        self.last_modified
    }

    /// Returns the bell schedules in insertion order.
    #[inline]
    pub fn bell_schedules(&self) -> &[BellSchedule] {
        &self.bell_schedules
    }

    /// Looks up a bell schedule by identifier.
    pub fn schedule_by_id(&self, id: &str) -> Option<&BellSchedule> {
        self.bell_schedules.iter().find(|s| s.id() == id)
    }

    /// Adds a bell schedule to the school.
    ///
    /// # Errors
    ///
    /// Returns `ScheduleError::DuplicateSchedule` if the identifier is taken,
    /// or `ScheduleError::DateConflict` if one of its dates already belongs
    /// to another schedule.
    pub fn add_bell_schedule(&mut self, schedule: BellSchedule) -> Result<(), ScheduleError> {
        if self.schedule_by_id(schedule.id()).is_some() {
            return Err(ScheduleError::DuplicateSchedule {
                id: schedule.id().to_string(),
            });
        }
        for date in schedule.dates() {
            if let Some(owner) = self.schedule_for_date(date) {
                return Err(ScheduleError::DateConflict {
                    date,
                    first: owner.id().to_string(),
                    second: schedule.id().to_string(),
                });
            }
        }

        self.bell_schedules.push(schedule);
        Ok(())
    }

    /// Returns the bell schedule governing `date`, if any.
    ///
    /// Scans schedules in insertion order; the first one containing the date
    /// wins.
    pub fn schedule_for_date(&self, date: Date) -> Option<&BellSchedule> {
        self.bell_schedules.iter().find(|s| s.contains_date(date))
    }

    fn schedule_index_for_date(&self, date: Date) -> Option<usize> {
        self.bell_schedules.iter().position(|s| s.contains_date(date))
    }

    fn schedule_index(&self, id: &str) -> Option<usize> {
        self.bell_schedules.iter().position(|s| s.id() == id)
    }

    /// Returns whether classes are in session at the local instant.
    ///
    /// The session spans from the first class start to the last class end of
    /// the day's schedule, both bounds inclusive. Days without a schedule, or
    /// whose schedule has no periods, are never in session.
    pub fn is_in_session(&self, datetime: &NaiveDateTime) -> bool {
        let Some(schedule) = self.schedule_for_date(Date::from_datetime(datetime)) else {
            return false;
        };
        match (schedule.first_class_start(), schedule.last_class_end()) {
            (Some(start), Some(end)) => {
                check_time_range(Time::from_datetime(datetime), start, end)
                    == TimeComparison::IsDuringOrExactly
            }
            _ => false,
        }
    }

    /// Assigns `date` to the schedule identified by `target_id`, or releases
    /// it from its current schedule when `target_id` is `None`.
    ///
    /// A date already held by another schedule is moved: it is removed from
    /// the old owner and added to the target in one step, so it never
    /// belongs to two schedules. Targeting the schedule that already holds
    /// the date leaves it in place; toggle-off behaviour is the caller's
    /// decision (see [`crate::commands::toggle_date`]).
    ///
    /// # Errors
    ///
    /// Returns `ScheduleError::UnknownSchedule` without mutating anything if
    /// `target_id` names no schedule of this school.
    pub fn set_schedule_for_date(
        &mut self,
        date: Date,
        target_id: Option<&str>,
    ) -> Result<ScheduleChange, ScheduleError> {
        let target = match target_id {
            Some(id) => Some(
                self.schedule_index(id)
                    .ok_or_else(|| ScheduleError::UnknownSchedule { id: id.to_string() })?,
            ),
            None => None,
        };
        let current = self.schedule_index_for_date(date);

        let change = match (current, target) {
            (Some(current), Some(target)) if current == target => {
                ScheduleChange::Unchanged { date }
            }
            (Some(current), Some(target)) => {
                self.bell_schedules[current].remove_date(date);
                self.bell_schedules[target].add_date(date);
                ScheduleChange::Moved {
                    date,
                    from: self.bell_schedules[current].id().to_string(),
                    to: self.bell_schedules[target].id().to_string(),
                }
            }
            (None, Some(target)) => {
                self.bell_schedules[target].add_date(date);
                ScheduleChange::Added {
                    date,
                    schedule_id: self.bell_schedules[target].id().to_string(),
                }
            }
            (Some(current), None) => {
                self.bell_schedules[current].remove_date(date);
                ScheduleChange::Removed {
                    date,
                    schedule_id: self.bell_schedules[current].id().to_string(),
                }
            }
            (None, None) => ScheduleChange::Unchanged { date },
        };

        debug!(school = %self.id, %date, ?change, "schedule assignment applied");
        Ok(change)
    }

    /// Parses the school's timezone identifier.
    ///
    /// # Errors
    ///
    /// Returns `ScheduleError::UnknownTimezone` for identifiers outside the
    /// IANA database.
    pub fn tz(&self) -> Result<Tz, ScheduleError> {
        self.timezone
            .parse::<Tz>()
            .map_err(|_| ScheduleError::UnknownTimezone {
                timezone: self.timezone.clone(),
            })
    }

    /// Converts an absolute instant into the school's local wall-clock time.
    ///
    /// # Examples
    ///
    /// ```
    /// use bell_core::schedules::SchoolBuilder;
    /// use chrono::{NaiveDate, TimeZone, Utc};
    ///
    /// let stamp = NaiveDate::from_ymd_opt(2019, 7, 4).unwrap().and_hms_opt(0, 0, 0).unwrap();
    /// let school = SchoolBuilder::new()
    ///     .id("ths")
    ///     .name("The High School")
    ///     .timezone("America/Los_Angeles")
    ///     .creation_date(stamp)
    ///     .last_modified(stamp)
    ///     .build()
    ///     .unwrap();
    ///
    /// let instant = Utc.with_ymd_and_hms(2019, 7, 28, 16, 0, 0).unwrap();
    /// let local = school.local_datetime(instant).unwrap();
    /// assert_eq!(local.to_string(), "2019-07-28 09:00:00");
    /// ```
    pub fn local_datetime(&self, instant: DateTime<Utc>) -> Result<NaiveDateTime, ScheduleError> {
        Ok(instant.with_timezone(&self.tz()?).naive_local())
    }
}

/// Builder for constructing a [`School`].
///
/// `id`, `name`, `creation_date` and `last_modified` are required. The
/// timezone defaults to [`DEFAULT_TIMEZONE`] and the passing period name to
/// [`DEFAULT_PASSING_PERIOD_NAME`].
#[derive(Debug, Clone, Default)]
pub struct SchoolBuilder {
    id: Option<String>,
    owner_id: String,
    name: Option<String>,
    acronym: String,
    endpoint: String,
    timezone: Option<String>,
    bell_schedules: Vec<BellSchedule>,
    passing_period_name: Option<String>,
    creation_date: Option<NaiveDateTime>,
    last_modified: Option<NaiveDateTime>,
}

impl SchoolBuilder {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the school identifier.
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Sets the owning account identifier.
    pub fn owner_id(mut self, owner_id: impl Into<String>) -> Self {
        self.owner_id = owner_id.into();
        self
    }

    /// Sets the full school name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the acronym.
    pub fn acronym(mut self, acronym: impl Into<String>) -> Self {
        self.acronym = acronym.into();
        self
    }

    /// Sets the resource endpoint.
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Sets the IANA timezone identifier.
    pub fn timezone(mut self, timezone: impl Into<String>) -> Self {
        self.timezone = Some(timezone.into());
        self
    }

    /// Appends one bell schedule.
    pub fn bell_schedule(mut self, schedule: BellSchedule) -> Self {
        self.bell_schedules.push(schedule);
        self
    }

    /// Appends several bell schedules, keeping their order.
    pub fn bell_schedules(mut self, schedules: impl IntoIterator<Item = BellSchedule>) -> Self {
        self.bell_schedules.extend(schedules);
        self
    }

    /// Sets the label for time between classes.
    pub fn passing_period_name(mut self, name: impl Into<String>) -> Self {
        self.passing_period_name = Some(name.into());
        self
    }

    /// Sets the creation timestamp.
    pub fn creation_date(mut self, creation_date: NaiveDateTime) -> Self {
        self.creation_date = Some(creation_date);
        self
    }

    /// Sets the last-modified timestamp.
    pub fn last_modified(mut self, last_modified: NaiveDateTime) -> Self {
        self.last_modified = Some(last_modified);
        self
    }

    /// Builds the school.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - A required field is missing
    /// - Two bell schedules share an identifier
    /// - A date is assigned to more than one bell schedule
    pub fn build(self) -> Result<School, ScheduleError> {
        let id = self.id.ok_or(ScheduleError::MissingField { field: "id" })?;
        let name = self.name.ok_or(ScheduleError::MissingField { field: "name" })?;
        let creation_date = self
            .creation_date
            .ok_or(ScheduleError::MissingField {
                field: "creation_date",
            })?;
        let last_modified = self
            .last_modified
            .ok_or(ScheduleError::MissingField {
                field: "last_modified",
            })?;

        let mut school = School {
            id,
            owner_id: self.owner_id,
            name,
            acronym: self.acronym,
            endpoint: self.endpoint,
            timezone: self
                .timezone
                .unwrap_or_else(|| DEFAULT_TIMEZONE.to_string()),
            bell_schedules: Vec::with_capacity(self.bell_schedules.len()),
            passing_period_name: self
                .passing_period_name
                .unwrap_or_else(|| DEFAULT_PASSING_PERIOD_NAME.to_string()),
            creation_date,
            last_modified,
        };

        for schedule in self.bell_schedules {
            school.add_bell_schedule(schedule)?;
        }

        Ok(school)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedules::ClassPeriod;
    use chrono::{NaiveDate, TimeZone};

    fn stamp() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2019, 7, 28)
            .unwrap()
            .and_hms_opt(7, 37, 50)
            .unwrap()
    }

    fn d(s: &str) -> Date {
        Date::parse(s).unwrap()
    }

    fn at(s: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S").unwrap()
    }

    fn period(name: &str, start: &str, end: &str) -> ClassPeriod {
        ClassPeriod::new(
            name,
            Time::parse(start).unwrap(),
            Time::parse(end).unwrap(),
            stamp(),
        )
        .unwrap()
    }

    fn schedule(id: &str, dates: &[&str], periods: Vec<ClassPeriod>) -> BellSchedule {
        BellSchedule::new(id, id, "", dates.iter().map(|s| d(s)), periods, stamp()).unwrap()
    }

    fn school_with(schedules: Vec<BellSchedule>) -> School {
        SchoolBuilder::new()
            .id("cb93cef79e9d11e986f2181dea92ad79")
            .owner_id("1234567890")
            .name("The High School")
            .acronym("THS")
            .endpoint("/school/cb93cef79e9d11e986f2181dea92ad79/")
            .timezone("America/Los_Angeles")
            .passing_period_name("Transition Time")
            .bell_schedules(schedules)
            .creation_date(stamp())
            .last_modified(stamp())
            .build()
            .unwrap()
    }

    fn two_schedule_school() -> School {
        school_with(vec![
            schedule(
                "regular",
                &["2019-07-28", "2019-07-29"],
                vec![
                    period("First Period", "08:25", "09:55"),
                    period("Second Period", "10:05", "11:35"),
                ],
            ),
            schedule(
                "minimum",
                &["2019-07-30"],
                vec![period("First Period", "08:25", "09:10")],
            ),
        ])
    }

    fn owners(school: &School, date: Date) -> Vec<&str> {
        school
            .bell_schedules()
            .iter()
            .filter(|s| s.contains_date(date))
            .map(|s| s.id())
            .collect()
    }

    #[test]
    fn test_builder_accessors() {
        let school = two_schedule_school();
        assert_eq!(school.id(), "cb93cef79e9d11e986f2181dea92ad79");
        assert_eq!(school.owner_id(), "1234567890");
        assert_eq!(school.name(), "The High School");
        assert_eq!(school.acronym(), "THS");
        assert_eq!(school.endpoint(), "/school/cb93cef79e9d11e986f2181dea92ad79/");
        assert_eq!(school.timezone(), "America/Los_Angeles");
        assert_eq!(school.passing_period_name(), "Transition Time");
        assert_eq!(school.creation_date(), stamp());
        assert_eq!(school.last_modified(), stamp());
        assert_eq!(school.bell_schedules().len(), 2);
    }

    #[test]
    fn test_builder_defaults() {
        let school = SchoolBuilder::new()
            .id("s")
            .name("S")
            .creation_date(stamp())
            .last_modified(stamp())
            .build()
            .unwrap();
        assert_eq!(school.timezone(), DEFAULT_TIMEZONE);
        assert_eq!(school.passing_period_name(), DEFAULT_PASSING_PERIOD_NAME);
        assert!(school.bell_schedules().is_empty());
    }

    #[test]
    fn test_builder_missing_fields() {
        assert_eq!(
            SchoolBuilder::new().name("S").build().unwrap_err(),
            ScheduleError::MissingField { field: "id" }
        );
        assert_eq!(
            SchoolBuilder::new().id("s").build().unwrap_err(),
            ScheduleError::MissingField { field: "name" }
        );
        assert_eq!(
            SchoolBuilder::new()
                .id("s")
                .name("S")
                .creation_date(stamp())
                .build()
                .unwrap_err(),
            ScheduleError::MissingField {
                field: "last_modified"
            }
        );
    }

    #[test]
    fn test_builder_rejects_date_conflict() {
        let err = SchoolBuilder::new()
            .id("s")
            .name("S")
            .bell_schedule(schedule("a", &["2019-07-28"], Vec::new()))
            .bell_schedule(schedule("b", &["2019-07-29", "2019-07-28"], Vec::new()))
            .creation_date(stamp())
            .last_modified(stamp())
            .build()
            .unwrap_err();

        assert_eq!(
            err,
            ScheduleError::DateConflict {
                date: d("2019-07-28"),
                first: "a".to_string(),
                second: "b".to_string(),
            }
        );
    }

    #[test]
    fn test_add_bell_schedule_rejects_duplicate_id() {
        let mut school = two_schedule_school();
        let err = school
            .add_bell_schedule(schedule("regular", &[], Vec::new()))
            .unwrap_err();
        assert_eq!(
            err,
            ScheduleError::DuplicateSchedule {
                id: "regular".to_string()
            }
        );
        assert_eq!(school.bell_schedules().len(), 2);
    }

    #[test]
    fn test_schedule_lookup() {
        let school = two_schedule_school();
        assert_eq!(school.schedule_by_id("minimum").map(|s| s.name()), Some("minimum"));
        assert!(school.schedule_by_id("missing").is_none());
        assert_eq!(
            school.schedule_for_date(d("2019-07-30")).map(|s| s.id()),
            Some("minimum")
        );
        assert!(school.schedule_for_date(d("2019-07-27")).is_none());
    }

    #[test]
    fn test_is_in_session_span_is_inclusive() {
        let school = two_schedule_school();
        assert!(!school.is_in_session(&at("2019-07-28T08:00:00")));
        assert!(school.is_in_session(&at("2019-07-28T08:25:00")));
        assert!(school.is_in_session(&at("2019-07-28T10:00:00")));
        assert!(school.is_in_session(&at("2019-07-28T11:35:00")));
        assert!(!school.is_in_session(&at("2019-07-28T11:35:01")));
        assert!(!school.is_in_session(&at("2019-07-27T09:00:00")));
    }

    #[test]
    fn test_is_in_session_without_periods() {
        let school = school_with(vec![schedule("empty", &["2019-07-28"], Vec::new())]);
        assert!(!school.is_in_session(&at("2019-07-28T09:00:00")));
    }

    #[test]
    fn test_set_schedule_adds_unowned_date() {
        let mut school = two_schedule_school();
        let change = school
            .set_schedule_for_date(d("2019-08-01"), Some("minimum"))
            .unwrap();

        assert_eq!(
            change,
            ScheduleChange::Added {
                date: d("2019-08-01"),
                schedule_id: "minimum".to_string()
            }
        );
        assert_eq!(owners(&school, d("2019-08-01")), vec!["minimum"]);
    }

    #[test]
    fn test_set_schedule_moves_date() {
        let mut school = two_schedule_school();
        let change = school
            .set_schedule_for_date(d("2019-07-28"), Some("minimum"))
            .unwrap();

        assert_eq!(
            change,
            ScheduleChange::Moved {
                date: d("2019-07-28"),
                from: "regular".to_string(),
                to: "minimum".to_string()
            }
        );
        assert!(!school.schedule_by_id("regular").unwrap().contains_date(d("2019-07-28")));
        assert!(school.schedule_by_id("minimum").unwrap().contains_date(d("2019-07-28")));
    }

    #[test]
    fn test_set_schedule_none_removes_date() {
        let mut school = two_schedule_school();
        let change = school.set_schedule_for_date(d("2019-07-28"), None).unwrap();

        assert_eq!(
            change,
            ScheduleChange::Removed {
                date: d("2019-07-28"),
                schedule_id: "regular".to_string()
            }
        );
        assert!(owners(&school, d("2019-07-28")).is_empty());
    }

    #[test]
    fn test_set_schedule_same_target_keeps_date_in_place() {
        let mut school = two_schedule_school();
        let before: Vec<Date> = school.schedule_by_id("regular").unwrap().dates().collect();

        let change = school
            .set_schedule_for_date(d("2019-07-28"), Some("regular"))
            .unwrap();

        assert_eq!(change, ScheduleChange::Unchanged { date: d("2019-07-28") });
        let after: Vec<Date> = school.schedule_by_id("regular").unwrap().dates().collect();
        assert_eq!(before, after);
    }

    #[test]
    fn test_set_schedule_none_on_unowned_date_is_noop() {
        let mut school = two_schedule_school();
        let snapshot = school.clone();
        let change = school.set_schedule_for_date(d("2019-01-01"), None).unwrap();
        assert_eq!(change, ScheduleChange::Unchanged { date: d("2019-01-01") });
        assert_eq!(school, snapshot);
    }

    #[test]
    fn test_set_schedule_unknown_target_does_not_mutate() {
        let mut school = two_schedule_school();
        let snapshot = school.clone();
        let err = school
            .set_schedule_for_date(d("2019-07-28"), Some("nope"))
            .unwrap_err();
        assert_eq!(err, ScheduleError::UnknownSchedule { id: "nope".to_string() });
        assert_eq!(school, snapshot);
    }

    #[test]
    fn test_local_datetime() {
        let school = two_schedule_school();
        let instant = Utc.with_ymd_and_hms(2019, 7, 28, 15, 25, 0).unwrap();
        assert_eq!(
            school.local_datetime(instant).unwrap(),
            at("2019-07-28T08:25:00")
        );
    }

    #[test]
    fn test_unknown_timezone() {
        let school = SchoolBuilder::new()
            .id("s")
            .name("S")
            .timezone("America/Cupertino")
            .creation_date(stamp())
            .last_modified(stamp())
            .build()
            .unwrap();
        assert_eq!(
            school.tz().unwrap_err(),
            ScheduleError::UnknownTimezone {
                timezone: "America/Cupertino".to_string()
            }
        );
        assert!(school.local_datetime(Utc::now()).is_err());
    }

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        #[derive(Debug, Clone)]
        enum Op {
            Assign(u8, usize),
            Release(u8),
        }

        const IDS: [&str; 3] = ["regular", "minimum", "rally"];

        fn op_strategy() -> impl Strategy<Value = Op> {
            prop_oneof![
                (0u8..10, 0usize..3).prop_map(|(day, idx)| Op::Assign(day, idx)),
                (0u8..10).prop_map(Op::Release),
            ]
        }

        fn day(offset: u8) -> Date {
            d("2019-09-01").add_days(i64::from(offset))
        }

        proptest! {
            #![proptest_config(ProptestConfig::with_cases(200))]

            #[test]
            fn test_every_date_has_at_most_one_owner(
                ops in proptest::collection::vec(op_strategy(), 0..60),
            ) {
                let mut school = school_with(vec![
                    schedule("regular", &["2019-09-02"], Vec::new()),
                    schedule("minimum", &["2019-09-03"], Vec::new()),
                    schedule("rally", &[], Vec::new()),
                ]);

                for op in &ops {
                    match op {
                        Op::Assign(offset, idx) => {
                            school.set_schedule_for_date(day(*offset), Some(IDS[*idx])).unwrap();
                        }
                        Op::Release(offset) => {
                            school.set_schedule_for_date(day(*offset), None).unwrap();
                        }
                    }
                }

                for offset in 0u8..10 {
                    prop_assert!(owners(&school, day(offset)).len() <= 1);
                }
            }

            #[test]
            fn test_last_assignment_wins(
                offset in 0u8..10,
                first in 0usize..3,
                second in 0usize..3,
            ) {
                let mut school = school_with(vec![
                    schedule("regular", &[], Vec::new()),
                    schedule("minimum", &[], Vec::new()),
                    schedule("rally", &[], Vec::new()),
                ]);

                school.set_schedule_for_date(day(offset), Some(IDS[first])).unwrap();
                school.set_schedule_for_date(day(offset), Some(IDS[second])).unwrap();

                prop_assert_eq!(owners(&school, day(offset)), vec![IDS[second]]);
            }
        }
    }
}
