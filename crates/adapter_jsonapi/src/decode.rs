//! Decoding JSON:API documents into the domain model.
//!
//! Parsing tracks the JSON path so schema failures name the offending value.
//! A school and its bell schedules arrive as separate documents; decode each
//! and join them with [`assemble_school`].

use crate::document::{
    BellScheduleAttributes, BellScheduleDocument, BellScheduleListDocument, Resource,
    SchoolAttributes, SchoolDocument, BELL_SCHEDULE_TYPE, SCHOOL_TYPE,
};
use crate::error::DecodeError;
use bell_core::schedules::{
    BellSchedule, ClassPeriod, School, SchoolBuilder, DEFAULT_PASSING_PERIOD_NAME,
    DEFAULT_TIMEZONE,
};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

/// Summary of a bell schedule from a list response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BellScheduleSummary {
    /// Schedule identifier.
    pub id: String,
    /// Full schedule name.
    pub name: String,
    /// Short name, if the server supplied one.
    pub display_name: Option<String>,
    /// The schedule's endpoint.
    pub endpoint: String,
}

/// A decoded school resource awaiting its bell schedules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchoolRecord {
    /// School identifier.
    pub id: String,
    /// The school's endpoint.
    pub endpoint: String,
    /// The school's attributes.
    pub attributes: SchoolAttributes,
}

/// Parses JSON into `T`, recording the path of any failure.
pub fn parse_json<T: DeserializeOwned>(json: &str, resource: &'static str) -> Result<T, DecodeError> {
    let de = &mut serde_json::Deserializer::from_str(json);
    serde_path_to_error::deserialize(de).map_err(|e| DecodeError::malformed(resource, e))
}

fn check_resource<A>(
    resource: &Resource<A>,
    expected: &'static str,
) -> Result<String, DecodeError> {
    if resource.kind != expected {
        return Err(DecodeError::WrongType {
            expected,
            found: resource.kind.clone(),
        });
    }
    resource
        .id
        .clone()
        .ok_or(DecodeError::MissingId { resource: expected })
}

/// Decodes a school document.
///
/// # Errors
///
/// `DecodeError` if the JSON is malformed, the resource is not a school, or
/// it has no id.
pub fn decode_school(json: &str) -> Result<SchoolRecord, DecodeError> {
    let document: SchoolDocument = parse_json(json, SCHOOL_TYPE)?;
    school_record(document.data)
}

/// Validates an already-parsed school resource.
pub fn school_record(resource: Resource<SchoolAttributes>) -> Result<SchoolRecord, DecodeError> {
    let id = check_resource(&resource, SCHOOL_TYPE)?;
    debug!(school = %id, "decoded school resource");
    Ok(SchoolRecord {
        endpoint: resource.endpoint().to_string(),
        id,
        attributes: resource.attributes,
    })
}

/// Decodes a full bell schedule document.
///
/// # Errors
///
/// `DecodeError` if the JSON is malformed, the resource is not a bell
/// schedule or has no id, or its meeting times are inverted or overlap.
pub fn decode_bell_schedule(json: &str) -> Result<BellSchedule, DecodeError> {
    let document: BellScheduleDocument = parse_json(json, BELL_SCHEDULE_TYPE)?;
    bell_schedule_from_resource(document.data)
}

/// Converts an already-parsed bell schedule resource.
pub fn bell_schedule_from_resource(
    resource: Resource<BellScheduleAttributes>,
) -> Result<BellSchedule, DecodeError> {
    let id = check_resource(&resource, BELL_SCHEDULE_TYPE)?;
    let endpoint = resource.endpoint().to_string();
    let attributes = resource.attributes;
    let invalid = |source| DecodeError::Invalid {
        resource: BELL_SCHEDULE_TYPE,
        id: id.clone(),
        source,
    };

    let class_periods = attributes
        .meeting_times
        .into_iter()
        .map(|m| ClassPeriod::new(m.name, m.start_time, m.end_time, m.creation_date))
        .collect::<Result<Vec<_>, _>>()
        .map_err(invalid)?;

    let mut schedule = BellSchedule::new(
        id.clone(),
        attributes.full_name,
        endpoint,
        attributes.dates,
        class_periods,
        attributes.last_modified,
    )
    .map_err(invalid)?;
    if let Some(display_name) = attributes.display_name {
        schedule = schedule.with_display_name(display_name);
    }
    if let Some(creation_date) = attributes.creation_date {
        schedule = schedule.with_creation_date(creation_date);
    }

    debug!(
        schedule = %id,
        dates = schedule.date_count(),
        periods = schedule.all_classes().len(),
        "decoded bell schedule"
    );
    Ok(schedule)
}

/// Decodes a bell schedule list document.
///
/// # Errors
///
/// `DecodeError` if the JSON is malformed or any entry is not a bell
/// schedule or has no id.
pub fn decode_bell_schedule_list(json: &str) -> Result<Vec<BellScheduleSummary>, DecodeError> {
    let document: BellScheduleListDocument = parse_json(json, BELL_SCHEDULE_TYPE)?;
    document
        .data
        .into_iter()
        .map(|resource| {
            let id = check_resource(&resource, BELL_SCHEDULE_TYPE)?;
            Ok(BellScheduleSummary {
                endpoint: resource.endpoint().to_string(),
                id,
                name: resource.attributes.full_name,
                display_name: resource.attributes.display_name,
            })
        })
        .collect()
}

/// Joins a school resource with its bell schedules.
///
/// Missing optional attributes fall back to defaults: the timezone to UTC
/// and the passing period name to "Passing Period".
///
/// # Errors
///
/// `DecodeError::Invalid` if two schedules share an id or a date.
pub fn assemble_school(
    record: SchoolRecord,
    schedules: impl IntoIterator<Item = BellSchedule>,
) -> Result<School, DecodeError> {
    let attributes = record.attributes;
    let timezone = attributes.timezone.unwrap_or_else(|| {
        warn!(school = %record.id, "school has no timezone, assuming {DEFAULT_TIMEZONE}");
        DEFAULT_TIMEZONE.to_string()
    });
    let passing_period_name = attributes
        .alternate_freeperiod_name
        .unwrap_or_else(|| DEFAULT_PASSING_PERIOD_NAME.to_string());

    SchoolBuilder::new()
        .id(record.id.clone())
        .owner_id(attributes.owner_id)
        .name(attributes.full_name)
        .acronym(attributes.acronym)
        .endpoint(record.endpoint)
        .timezone(timezone)
        .passing_period_name(passing_period_name)
        .bell_schedules(schedules)
        .creation_date(attributes.creation_date)
        .last_modified(attributes.last_modified)
        .build()
        .map_err(|source| DecodeError::Invalid {
            resource: SCHOOL_TYPE,
            id: record.id,
            source,
        })
}
