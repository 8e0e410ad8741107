//! Integration tests against recorded ClassClock API responses.

use adapter_jsonapi::{
    assemble_school, decode_bell_schedule, decode_bell_schedule_list, decode_school,
    encode_bell_schedule, encode_school,
};
use bell_core::prelude::*;
use chrono::NaiveDateTime;
use serde_json::Value;

const SCHOOL_ID: &str = "cb93cef79e9d11e986f2181dea92ad79";
const SCHEDULE_ID: &str = "33d14ca5c91111e996ad181dea92ad79";

const SCHOOL_RESPONSE: &str = r#"{
    "jsonapi": {"version": "1.0"},
    "data": {
        "type": "school",
        "id": "cb93cef79e9d11e986f2181dea92ad79",
        "links": {"self": "https://api.classclock.app/v0/school/cb93cef79e9d11e986f2181dea92ad79/"},
        "attributes": {
            "owner_id": "google-oauth2|11658634A847763B38395",
            "creation_date": "2019-07-04T13:53:37",
            "acronym": "THS",
            "last_modified": "2019-12-15T13:24:00.058171",
            "full_name": "The High School",
            "alternate_freeperiod_name": "Transition Time"
        }
    }
}"#;

const SCHEDULE_LIST_RESPONSE: &str = r#"{
    "jsonapi": {"version": "1.0"},
    "data": [
        {
            "type": "bellschedule",
            "id": "33d14ca5c91111e996ad181dea92ad79",
            "links": {"self": "https://api.classclock.app/v0/school/cb93cef79e9d11e986f2181dea92ad79/bellschedule/33d14ca5c91111e996ad181dea92ad79/"},
            "attributes": {"display_name": "Display Name", "full_name": "Regular Schedule"},
            "relationships": {
                "schools": {"links": {"self": "https://api.classclock.app/v0/school/cb93cef79e9d11e986f2181dea92ad79/"}}
            }
        }
    ]
}"#;

const SCHEDULE_RESPONSE: &str = r#"{
    "jsonapi": {"version": "1.0"},
    "data": {
        "type": "bellschedule",
        "id": "33d14ca5c91111e996ad181dea92ad79",
        "links": {"self": "https://api.classclock.app/v0/school/cb93cef79e9d11e986f2181dea92ad79/bellschedule/33d14ca5c91111e996ad181dea92ad79/"},
        "attributes": {
            "creation_date": "2019-08-27T17:25:33",
            "display_name": "Display Name",
            "last_modified": "2019-08-27T17:25:33",
            "dates": ["2019-08-27", "2019-08-28"],
            "meeting_times": [
                {"creation_date": "2019-08-27T17:40:43", "end_time": "10:05:00", "start_time": "09:50:00", "name": "Break"},
                {"creation_date": "2019-08-27T17:40:43", "end_time": "09:50:00", "start_time": "08:25:00", "name": "First Period"},
                {"creation_date": "2019-08-27T17:40:43", "end_time": "15:30:00", "start_time": "14:05:00", "name": "Fourth Period"},
                {"creation_date": "2019-08-27T17:40:43", "end_time": "12:30:00", "start_time": "11:55:00", "name": "Lunch"},
                {"creation_date": "2019-08-27T17:40:43", "end_time": "11:55:00", "start_time": "10:10:00", "name": "Second Period (Extended)"},
                {"creation_date": "2019-08-27T17:40:43", "end_time": "14:00:00", "start_time": "12:35:00", "name": "Third Period"}
            ],
            "full_name": "Regular Schedule"
        },
        "relationships": {
            "schools": {"links": {"self": "https://api.classclock.app/v0/school/cb93cef79e9d11e986f2181dea92ad79/"}}
        }
    }
}"#;

fn school() -> School {
    let schedule = decode_bell_schedule(SCHEDULE_RESPONSE).unwrap();
    assemble_school(decode_school(SCHOOL_RESPONSE).unwrap(), [schedule]).unwrap()
}

#[test]
fn test_schedule_list_summaries() {
    let summaries = decode_bell_schedule_list(SCHEDULE_LIST_RESPONSE).unwrap();
    assert_eq!(summaries.len(), 1);
    assert_eq!(summaries[0].id, SCHEDULE_ID);
    assert_eq!(summaries[0].name, "Regular Schedule");
    assert_eq!(summaries[0].display_name.as_deref(), Some("Display Name"));
    assert!(summaries[0].endpoint.ends_with("/bellschedule/33d14ca5c91111e996ad181dea92ad79/"));
}

#[test]
fn test_full_schedule_decodes() {
    let schedule = decode_bell_schedule(SCHEDULE_RESPONSE).unwrap();
    assert_eq!(schedule.id(), SCHEDULE_ID);
    assert_eq!(schedule.name(), "Regular Schedule");
    assert_eq!(schedule.display_name(), Some("Display Name"));
    assert_eq!(schedule.date_count(), 2);
    assert_eq!(schedule.all_classes().len(), 6);
    assert_eq!(schedule.first_class_start(), Some(Time::parse("08:25").unwrap()));
    assert_eq!(schedule.last_class_end(), Some(Time::parse("15:30").unwrap()));
}

#[test]
fn test_assembled_school_resolves() {
    let school = school();
    assert_eq!(school.id(), SCHOOL_ID);
    assert_eq!(school.passing_period_name(), "Transition Time");

    let at = |s: &str| NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S").unwrap();
    assert_eq!(
        time_state_for_date_at_school(&at("2019-08-27T12:00:00"), &school),
        TimeState::ClassInSession
    );
    assert_eq!(
        current_activity_name(&at("2019-08-27T12:32:00"), &school).as_deref(),
        Some("Transition Time")
    );
    assert_eq!(
        time_state_for_date_at_school(&at("2019-08-29T12:00:00"), &school),
        TimeState::DayOff
    );
}

#[test]
fn test_bell_schedule_round_trip_preserves_lists() {
    let original: Value = serde_json::from_str(SCHEDULE_RESPONSE).unwrap();
    let encoded =
        serde_json::to_value(encode_bell_schedule(&decode_bell_schedule(SCHEDULE_RESPONSE).unwrap()))
            .unwrap();

    let original_attributes = &original["data"]["attributes"];
    let encoded_attributes = &encoded["data"]["attributes"];
    assert_eq!(encoded_attributes["dates"], original_attributes["dates"]);
    assert_eq!(encoded_attributes["meeting_times"], original_attributes["meeting_times"]);
    assert_eq!(encoded_attributes["creation_date"], original_attributes["creation_date"]);
    assert_eq!(encoded["data"]["links"], original["data"]["links"]);
}

#[test]
fn test_school_round_trip_preserves_timestamps() {
    let original: Value = serde_json::from_str(SCHOOL_RESPONSE).unwrap();
    let encoded = serde_json::to_value(encode_school(&school())).unwrap();

    for field in ["full_name", "acronym", "owner_id", "creation_date", "last_modified"] {
        assert_eq!(
            encoded["data"]["attributes"][field],
            original["data"]["attributes"][field],
            "{field}"
        );
    }
    assert_eq!(encoded["data"]["attributes"]["timezone"], "UTC");
}

#[test]
fn test_round_trip_after_edit() {
    let mut school = school();
    let date = Date::parse("2019-08-29").unwrap();
    assign_date(&mut school, date, SCHEDULE_ID).unwrap();

    let schedule = school.schedule_by_id(SCHEDULE_ID).unwrap();
    let json = serde_json::to_string(&encode_bell_schedule(schedule)).unwrap();
    let decoded = decode_bell_schedule(&json).unwrap();
    let dates: Vec<String> = decoded.dates().map(|d| d.to_string()).collect();
    assert_eq!(dates, vec!["2019-08-27", "2019-08-28", "2019-08-29"]);
}

mod property_tests {
    use super::*;
    use proptest::prelude::*;

    fn stamp() -> NaiveDateTime {
        NaiveDateTime::parse_from_str("2019-08-27T17:40:43", "%Y-%m-%dT%H:%M:%S").unwrap()
    }

    /// Back-to-back or spaced periods from 07:00, each `(gap, length)` in minutes.
    fn periods(layout: &[(u32, u32)]) -> Vec<ClassPeriod> {
        let mut minute = 7 * 60;
        layout
            .iter()
            .enumerate()
            .map(|(i, &(gap, length))| {
                let start = minute + gap;
                minute = start + length;
                ClassPeriod::new(
                    format!("Period {i}"),
                    Time::from_hms(start / 60, start % 60, 0).unwrap(),
                    Time::from_hms(minute / 60, minute % 60, 0).unwrap(),
                    stamp(),
                )
                .unwrap()
            })
            .collect()
    }

    proptest! {
        #[test]
        fn test_encode_decode_preserves_dates_and_meeting_times(
            offsets in prop::collection::hash_set(0i64..3650, 0..20),
            layout in prop::collection::vec((0u32..30, 1u32..90), 0..8),
            reversed in any::<bool>(),
        ) {
            let base = Date::parse("2019-01-01").unwrap();
            let dates: Vec<Date> = offsets.into_iter().map(|days| base.add_days(days)).collect();
            let mut class_periods = periods(&layout);
            if reversed {
                class_periods.reverse();
            }
            let schedule = BellSchedule::new(
                SCHEDULE_ID,
                "Regular Schedule",
                "",
                dates,
                class_periods,
                stamp(),
            )
            .unwrap();

            let first = serde_json::to_value(encode_bell_schedule(&schedule)).unwrap();
            let decoded = decode_bell_schedule(&first.to_string()).unwrap();
            let second = serde_json::to_value(encode_bell_schedule(&decoded)).unwrap();

            prop_assert_eq!(
                &second["data"]["attributes"]["dates"],
                &first["data"]["attributes"]["dates"]
            );
            prop_assert_eq!(
                &second["data"]["attributes"]["meeting_times"],
                &first["data"]["attributes"]["meeting_times"]
            );
            prop_assert_eq!(decoded.dates().count(), schedule.date_count());
        }
    }
}
