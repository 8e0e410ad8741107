//! Calendar command implementation
//!
//! Prints a month grid marking which days carry a bell schedule.

use bell_core::prelude::*;
use chrono::Utc;

use crate::config::CliConfig;
use crate::{store, CliError, Result};

const WEEKDAY_HEADER: &str = " Mo  Tu  We  Th  Fr  Sa  Su";

/// Marker for a day on the selected schedule.
pub const SELECTED_MARK: char = '*';

/// Marker for a day on any other schedule.
pub const SCHEDULED_MARK: char = '+';

fn cell(day: &DayCell) -> String {
    if !day.in_month {
        return "    ".to_string();
    }
    let mark = match (&day.schedule_id, day.selected) {
        (Some(_), true) => SELECTED_MARK,
        (Some(_), false) => SCHEDULED_MARK,
        (None, _) => ' ',
    };
    format!("{:>3}{}", day.date.day(), mark)
}

/// Renders the month grid followed by a legend of the month's schedules.
pub fn render(school: &School, cursor: MonthCursor, selected: Option<&str>) -> String {
    let weeks = month_grid(cursor, school, selected);

    let mut lines = vec![format!("{:^28}", cursor.to_string()), WEEKDAY_HEADER.to_string()];
    lines.extend(weeks.iter().map(|week| {
        let line: String = week.days.iter().map(cell).collect();
        line.trim_end().to_string()
    }));

    let mut legend: Vec<(&str, &str)> = weeks
        .iter()
        .flat_map(|w| w.days.iter())
        .filter(|d| d.in_month)
        .filter_map(|d| d.schedule_id.as_deref().zip(d.schedule_name.as_deref()))
        .collect();
    legend.sort_unstable();
    legend.dedup();
    lines.extend(legend.into_iter().map(|(id, name)| {
        let mark = if Some(id) == selected {
            SELECTED_MARK
        } else {
            SCHEDULED_MARK
        };
        format!("{mark} {name} [{id}]")
    }));

    lines.join("\n") + "\n"
}

/// Run the calendar command
pub fn run(config: &CliConfig, month: Option<MonthCursor>, selected: Option<&str>) -> Result<()> {
    let school = store::load(&config.data_file)?;
    if let Some(id) = selected {
        if school.schedule_by_id(id).is_none() {
            return Err(CliError::InvalidArgument(format!("Unknown bell schedule: {id}")));
        }
    }
    let cursor = match month {
        Some(cursor) => cursor,
        None => MonthCursor::containing(Date::from_datetime(&school.local_datetime(Utc::now())?)),
    };

    print!("{}", render(&school, cursor, selected));
    Ok(())
}
