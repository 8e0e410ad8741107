//! # Adapter JSON:API (A: Adapter Layer)
//!
//! Reads and writes the JSON:API documents served by the ClassClock API.
//!
//! This crate provides:
//! - Wire structures for school and bell schedule documents
//! - Path-tracking decoders producing `bell_core` domain types
//! - Encoders reproducing the wire format from the domain model
//!
//! Decoding a bell schedule and encoding it again yields the same `dates`
//! and `meeting_times` lists, in the same order.
//!
//! # Examples
//!
//! ```
//! use adapter_jsonapi::{decode_bell_schedule, encode_bell_schedule};
//!
//! let json = r#"{
//!     "data": {
//!         "type": "bellschedule",
//!         "id": "regular",
//!         "attributes": {
//!             "full_name": "Regular Schedule",
//!             "last_modified": "2019-08-27T17:25:33",
//!             "dates": ["2019-08-27"],
//!             "meeting_times": [{
//!                 "name": "First Period",
//!                 "start_time": "08:25:00",
//!                 "end_time": "09:50:00",
//!                 "creation_date": "2019-08-27T17:40:43"
//!             }]
//!         }
//!     }
//! }"#;
//!
//! let schedule = decode_bell_schedule(json).unwrap();
//! assert_eq!(schedule.all_classes()[0].name(), "First Period");
//!
//! let encoded = encode_bell_schedule(&schedule);
//! assert_eq!(encoded.data.attributes.dates, schedule.dates().collect::<Vec<_>>());
//! ```

#![deny(missing_docs)]

pub mod decode;
pub mod document;
pub mod encode;
pub mod error;

pub use decode::{
    assemble_school, bell_schedule_from_resource, decode_bell_schedule,
    decode_bell_schedule_list, decode_school, parse_json, school_record, BellScheduleSummary,
    SchoolRecord,
};
pub use document::{BellScheduleDocument, SchoolDocument};
pub use encode::{encode_bell_schedule, encode_school};
pub use error::DecodeError;
