//! Encoding the domain model as JSON:API documents.

use crate::document::{
    BellScheduleAttributes, BellScheduleDocument, Document, Links, MeetingTime, Resource,
    SchoolAttributes, SchoolDocument, BELL_SCHEDULE_TYPE, SCHOOL_TYPE,
};
use bell_core::schedules::{BellSchedule, School};
use std::collections::BTreeMap;

fn links(endpoint: &str) -> Option<Links> {
    (!endpoint.is_empty()).then(|| Links {
        self_link: endpoint.to_string(),
    })
}

/// Encodes a school's own attributes. Bell schedules are encoded separately.
pub fn encode_school(school: &School) -> SchoolDocument {
    Document::new(Resource {
        kind: SCHOOL_TYPE.to_string(),
        id: Some(school.id().to_string()),
        links: links(school.endpoint()),
        attributes: SchoolAttributes {
            full_name: school.name().to_string(),
            acronym: school.acronym().to_string(),
            owner_id: school.owner_id().to_string(),
            alternate_freeperiod_name: Some(school.passing_period_name().to_string()),
            timezone: Some(school.timezone().to_string()),
            creation_date: school.creation_date(),
            last_modified: school.last_modified(),
        },
        relationships: BTreeMap::new(),
    })
}

/// Encodes a bell schedule with its dates and meeting times in stored order.
pub fn encode_bell_schedule(schedule: &BellSchedule) -> BellScheduleDocument {
    Document::new(Resource {
        kind: BELL_SCHEDULE_TYPE.to_string(),
        id: Some(schedule.id().to_string()),
        links: links(schedule.endpoint()),
        attributes: BellScheduleAttributes {
            full_name: schedule.name().to_string(),
            display_name: schedule.display_name().map(str::to_string),
            creation_date: schedule.creation_date(),
            last_modified: schedule.last_modified(),
            dates: schedule.dates().collect(),
            meeting_times: schedule
                .all_classes()
                .iter()
                .map(|p| MeetingTime {
                    start_time: p.start_time(),
                    end_time: p.end_time(),
                    name: p.name().to_string(),
                    creation_date: p.creation_date(),
                })
                .collect(),
        },
        relationships: BTreeMap::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use bell_core::schedules::{ClassPeriod, SchoolBuilder};
    use bell_core::types::{Date, Time};
    use chrono::{NaiveDate, NaiveDateTime};
    use serde_json::json;

    fn stamp() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2019, 8, 27)
            .unwrap()
            .and_hms_opt(17, 25, 33)
            .unwrap()
    }

    #[test]
    fn test_encode_bell_schedule_shape() {
        let lunch = ClassPeriod::new(
            "Lunch",
            Time::parse("11:55").unwrap(),
            Time::parse("12:30").unwrap(),
            stamp(),
        )
        .unwrap();
        let schedule = BellSchedule::new(
            "regular",
            "Regular Schedule",
            "",
            [Date::parse("2019-08-28").unwrap(), Date::parse("2019-08-27").unwrap()],
            vec![lunch],
            stamp(),
        )
        .unwrap()
        .with_display_name("Display Name");

        let value = serde_json::to_value(encode_bell_schedule(&schedule)).unwrap();
        assert_eq!(
            value,
            json!({
                "jsonapi": {"version": "1.0"},
                "data": {
                    "type": "bellschedule",
                    "id": "regular",
                    "attributes": {
                        "full_name": "Regular Schedule",
                        "display_name": "Display Name",
                        "last_modified": "2019-08-27T17:25:33",
                        "dates": ["2019-08-28", "2019-08-27"],
                        "meeting_times": [{
                            "start_time": "11:55:00",
                            "end_time": "12:30:00",
                            "name": "Lunch",
                            "creation_date": "2019-08-27T17:25:33"
                        }]
                    }
                }
            })
        );
    }

    #[test]
    fn test_encode_school_writes_defaults_explicitly() {
        let school = SchoolBuilder::new()
            .id("ths")
            .name("The High School")
            .acronym("THS")
            .endpoint("/school/ths/")
            .creation_date(stamp())
            .last_modified(stamp())
            .build()
            .unwrap();

        let value = serde_json::to_value(encode_school(&school)).unwrap();
        assert_eq!(value["data"]["links"]["self"], "/school/ths/");
        assert_eq!(value["data"]["attributes"]["timezone"], "UTC");
        assert_eq!(
            value["data"]["attributes"]["alternate_freeperiod_name"],
            "Passing Period"
        );
        assert!(value["data"].get("relationships").is_none());
    }
}
