//! Schedule command implementation
//!
//! Shows the bell schedule governing a date.

use bell_core::prelude::*;

use crate::config::CliConfig;
use crate::{store, Result};

/// Renders the schedule for `date`, periods in chronological order with
/// their length in minutes.
pub fn render(school: &School, date: Date, clock: ClockFormat) -> String {
    let Some(schedule) = school.schedule_for_date(date) else {
        return format!("{date}: no bell schedule (day off)\n");
    };

    let mut out = format!("{date}: {} [{}]\n", schedule.name(), schedule.id());
    for period in schedule.classes_by_start_time() {
        out.push_str(&format!(
            "  {:>8} - {:>8}  {} ({} min)\n",
            period.start_time().format(clock),
            period.end_time().format(clock),
            period.name(),
            period.duration_milliseconds() / 60_000
        ));
    }
    if schedule.all_classes().is_empty() {
        out.push_str("  (no class periods)\n");
    }
    out
}

/// Run the schedule command
pub fn run(config: &CliConfig, date: Date) -> Result<()> {
    let school = store::load(&config.data_file)?;
    print!("{}", render(&school, date, config.clock_format()));
    Ok(())
}
