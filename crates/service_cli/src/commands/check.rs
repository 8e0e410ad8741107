//! Check command implementation
//!
//! Validates the configuration and the school data file.

use bell_core::schedules::School;
use tracing::info;

use crate::config::CliConfig;
use crate::{store, Result};

/// Summarises a loaded school, failing if its timezone is unknown.
pub fn summarise(config: &CliConfig, school: &School) -> Result<String> {
    school.tz()?;

    let clock = if config.use_24_hour_time {
        "24-hour"
    } else {
        "12-hour"
    };
    let mut lines = vec![
        "Configuration:".to_string(),
        format!("  data file: {}", config.data_file.display()),
        format!("  log level: {}", config.log_level),
        format!("  clock:     {clock}"),
        format!("School: {} ({}) [{}]", school.name(), school.acronym(), school.id()),
        format!("  timezone:       {}", school.timezone()),
        format!("  passing period: {}", school.passing_period_name()),
    ];
    lines.extend(school.bell_schedules().iter().map(|schedule| {
        format!(
            "  {} [{}]: {} periods, {} dates",
            schedule.name(),
            schedule.id(),
            schedule.all_classes().len(),
            schedule.date_count()
        )
    }));
    lines.push("OK".to_string());

    Ok(lines.join("\n") + "\n")
}

/// Run the check command
pub fn run(config: &CliConfig) -> Result<()> {
    info!(data_file = %config.data_file.display(), "checking configuration");
    let school = store::load(&config.data_file)?;
    print!("{}", summarise(config, &school)?);
    Ok(())
}
