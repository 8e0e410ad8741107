//! School bundle persistence.
//!
//! A bundle file holds the school document and one document per bell
//! schedule, in the same JSON:API shape the API serves:
//!
//! ```json
//! { "school": { "data": { ... } }, "bell_schedules": [ { "data": { ... } } ] }
//! ```

use crate::error::{CliError, Result};
use adapter_jsonapi::{
    assemble_school, bell_schedule_from_resource, encode_bell_schedule, encode_school, parse_json,
    school_record, BellScheduleDocument, SchoolDocument,
};
use bell_core::schedules::School;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info};

/// On-disk layout of a school and its bell schedules.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchoolBundle {
    /// The school document.
    pub school: SchoolDocument,
    /// One document per bell schedule.
    #[serde(default)]
    pub bell_schedules: Vec<BellScheduleDocument>,
}

impl SchoolBundle {
    /// Encodes a school and all its bell schedules.
    pub fn from_school(school: &School) -> Self {
        Self {
            school: encode_school(school),
            bell_schedules: school
                .bell_schedules()
                .iter()
                .map(encode_bell_schedule)
                .collect(),
        }
    }

    /// Decodes and validates the bundle into a school.
    pub fn into_school(self) -> Result<School> {
        let record = school_record(self.school.data)?;
        let schedules = self
            .bell_schedules
            .into_iter()
            .map(|document| bell_schedule_from_resource(document.data))
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(assemble_school(record, schedules)?)
    }
}

/// Reads a school from a bundle file.
pub fn load(path: &Path) -> Result<School> {
    if !path.exists() {
        return Err(CliError::FileNotFound(path.display().to_string()));
    }
    let content = std::fs::read_to_string(path)?;
    let bundle: SchoolBundle = parse_json(&content, "school bundle")?;
    let school = bundle.into_school()?;
    debug!(
        path = %path.display(),
        school = %school.id(),
        schedules = school.bell_schedules().len(),
        "loaded school bundle"
    );
    Ok(school)
}

/// Writes a school to a bundle file, replacing its contents.
pub fn save(path: &Path, school: &School) -> Result<()> {
    let json = serde_json::to_string_pretty(&SchoolBundle::from_school(school))?;
    std::fs::write(path, json + "\n")?;
    info!(path = %path.display(), school = %school.id(), "saved school bundle");
    Ok(())
}
