//! Wire structures of the ClassClock JSON:API documents.
//!
//! These mirror the JSON one to one. Conversion to and from the domain model
//! lives in [`crate::decode`] and [`crate::encode`].

use bell_core::types::{Date, Time};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Resource type of a school.
pub const SCHOOL_TYPE: &str = "school";

/// Resource type of a bell schedule.
pub const BELL_SCHEDULE_TYPE: &str = "bellschedule";

/// Protocol version emitted by the encoder.
pub const JSONAPI_VERSION: &str = "1.0";

/// A top-level document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document<T> {
    /// Protocol information.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jsonapi: Option<JsonApi>,
    /// The primary data: a resource or a list of resources.
    pub data: T,
}

impl<T> Document<T> {
    /// Wraps primary data, declaring the protocol version.
    pub fn new(data: T) -> Self {
        Self {
            jsonapi: Some(JsonApi {
                version: JSONAPI_VERSION.to_string(),
            }),
            data,
        }
    }
}

/// The `jsonapi` member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JsonApi {
    /// Protocol version.
    pub version: String,
}

/// Links to related endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Links {
    /// The resource's own endpoint.
    #[serde(rename = "self")]
    pub self_link: String,
}

/// A relationship to another resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Relationship {
    /// Links to the related resource.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub links: Option<Links>,
}

/// A resource object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resource<A> {
    /// The resource type.
    #[serde(rename = "type")]
    pub kind: String,
    /// The resource identifier.
    #[serde(default)]
    pub id: Option<String>,
    /// Links to the resource.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub links: Option<Links>,
    /// Resource attributes.
    pub attributes: A,
    /// Relationships keyed by name.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub relationships: BTreeMap<String, Relationship>,
}

impl<A> Resource<A> {
    /// The `links.self` endpoint, empty when absent.
    pub fn endpoint(&self) -> &str {
        self.links.as_ref().map_or("", |l| l.self_link.as_str())
    }
}

/// Attributes of a school resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchoolAttributes {
    /// Full school name.
    pub full_name: String,
    /// Short name.
    pub acronym: String,
    /// Owning account.
    pub owner_id: String,
    /// Label for time between classes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alternate_freeperiod_name: Option<String>,
    /// IANA timezone identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
    /// Creation timestamp.
    pub creation_date: NaiveDateTime,
    /// Last modification timestamp.
    pub last_modified: NaiveDateTime,
}

/// Attributes of a full bell schedule resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BellScheduleAttributes {
    /// Full schedule name.
    pub full_name: String,
    /// Short name for compact displays.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// Creation timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creation_date: Option<NaiveDateTime>,
    /// Last modification timestamp.
    pub last_modified: NaiveDateTime,
    /// Dates the schedule governs.
    pub dates: Vec<Date>,
    /// The schedule's class periods.
    pub meeting_times: Vec<MeetingTime>,
}

/// A class period on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeetingTime {
    /// When the period starts.
    pub start_time: Time,
    /// When the period ends.
    pub end_time: Time,
    /// Period name.
    pub name: String,
    /// Creation timestamp.
    pub creation_date: NaiveDateTime,
}

/// Attributes of a bell schedule in a list response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BellScheduleListAttributes {
    /// Full schedule name.
    pub full_name: String,
    /// Short name for compact displays.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
}

/// A school document.
pub type SchoolDocument = Document<Resource<SchoolAttributes>>;

/// A full bell schedule document.
pub type BellScheduleDocument = Document<Resource<BellScheduleAttributes>>;

/// A bell schedule list document.
pub type BellScheduleListDocument = Document<Vec<Resource<BellScheduleListAttributes>>>;
