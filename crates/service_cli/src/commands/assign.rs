//! Assign, unassign and toggle command implementations
//!
//! Edits which bell schedule governs a date and persists the result.

use bell_core::prelude::*;
use tracing::info;

use crate::config::CliConfig;
use crate::{store, Result};

/// A date edit requested on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateEdit<'a> {
    /// Put the date on the named schedule.
    Assign(&'a str),
    /// Take the date off whichever schedule holds it.
    Unassign,
    /// Calendar click with the given schedule selected.
    Toggle(Option<&'a str>),
}

/// Applies an edit to the school.
pub fn apply(school: &mut School, date: Date, edit: DateEdit<'_>) -> Result<ScheduleChange> {
    let change = match edit {
        DateEdit::Assign(schedule_id) => assign_date(school, date, schedule_id)?,
        DateEdit::Unassign => unassign_date(school, date),
        DateEdit::Toggle(selected) => toggle_date(school, date, selected)?,
    };
    Ok(change)
}

fn schedule_name<'a>(school: &'a School, id: &'a str) -> &'a str {
    school.schedule_by_id(id).map_or(id, |s| s.name())
}

/// One-line summary of a change.
pub fn describe(change: &ScheduleChange, school: &School) -> String {
    match change {
        ScheduleChange::Added { date, schedule_id } => {
            format!("{date}: now on {}", schedule_name(school, schedule_id))
        }
        ScheduleChange::Removed { date, schedule_id } => {
            format!("{date}: removed from {}", schedule_name(school, schedule_id))
        }
        ScheduleChange::Moved { date, from, to } => format!(
            "{date}: moved from {} to {}",
            schedule_name(school, from),
            schedule_name(school, to)
        ),
        ScheduleChange::Unchanged { date } => format!("{date}: unchanged"),
    }
}

/// Run an assign, unassign or toggle command
pub fn run(config: &CliConfig, date: Date, edit: DateEdit<'_>) -> Result<()> {
    let mut school = store::load(&config.data_file)?;
    let change = apply(&mut school, date, edit)?;

    if change.is_change() {
        store::save(&config.data_file, &school)?;
    } else {
        info!(%date, "nothing to save");
    }
    println!("{}", describe(&change, &school));
    Ok(())
}
