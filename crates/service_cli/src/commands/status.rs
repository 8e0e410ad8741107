//! Status command implementation
//!
//! Reports the school's time state, the current activity and the next bell.

use bell_core::prelude::*;
use chrono::{NaiveDateTime, Utc};
use tracing::info;

use crate::config::CliConfig;
use crate::{store, Result};

/// Formats a non-negative countdown as `H:MM:SS`.
pub fn format_countdown(milliseconds: i64) -> String {
    let seconds = milliseconds.max(0) / 1000;
    format!(
        "{}:{:02}:{:02}",
        seconds / 3600,
        (seconds % 3600) / 60,
        seconds % 60
    )
}

/// Renders the status report for a local instant.
pub fn render(school: &School, now: &NaiveDateTime, clock: ClockFormat) -> String {
    let state = time_state_for_date_at_school(now, school);
    let date = Date::from_datetime(now);
    let time = Time::from_datetime(now);

    let mut lines = vec![format!(
        "{} ({}) at {} {}",
        school.name(),
        school.acronym(),
        date,
        time.format(clock)
    )];
    if let Some(schedule) = school.schedule_for_date(date) {
        lines.push(format!("Schedule: {}", schedule.name()));
    }
    lines.push(format!("State:    {} ({})", state.description(), state));
    if let Some(activity) = current_activity_name(now, school) {
        lines.push(format!("Now:      {activity}"));
    }
    lines.push(match next_important_info(now, school) {
        Some(next) => format!(
            "Next:     {} at {} (in {})",
            next.class_period.name(),
            next.time.format(clock),
            format_countdown(next.milliseconds_from(time))
        ),
        None => "Next:     no more bells today".to_string(),
    });

    lines.join("\n") + "\n"
}

/// Run the status command
pub fn run(config: &CliConfig, at: Option<NaiveDateTime>) -> Result<()> {
    let school = store::load(&config.data_file)?;
    let now = match at {
        Some(at) => at,
        None => school.local_datetime(Utc::now())?,
    };
    info!(school = %school.id(), %now, "resolving status");

    print!("{}", render(&school, &now, config.clock_format()));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn at(s: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S").unwrap()
    }

    fn school() -> School {
        let stamp = at("2019-07-28T07:37:50");
        let p = |name: &str, start: &str, end: &str| {
            ClassPeriod::new(name, Time::parse(start).unwrap(), Time::parse(end).unwrap(), stamp)
                .unwrap()
        };
        let regular = BellSchedule::new(
            "regular",
            "Regular Schedule",
            "",
            [Date::parse("2019-07-28").unwrap()],
            vec![p("First Period", "08:25", "09:55"), p("Second Period", "10:05", "11:35")],
            stamp,
        )
        .unwrap();
        SchoolBuilder::new()
            .id("ths")
            .name("The High School")
            .acronym("THS")
            .passing_period_name("Transition Time")
            .bell_schedule(regular)
            .creation_date(stamp)
            .last_modified(stamp)
            .build()
            .unwrap()
    }

    #[test]
    fn test_format_countdown() {
        assert_eq!(format_countdown(0), "0:00:00");
        assert_eq!(format_countdown(25 * 60 * 1000), "0:25:00");
        assert_eq!(format_countdown(3_725_000), "1:02:05");
        assert_eq!(format_countdown(-5), "0:00:00");
    }

    proptest! {
        #[test]
        fn test_format_countdown_reads_back(milliseconds in 0i64..100 * 3_600_000) {
            let text = format_countdown(milliseconds);
            let parts: Vec<i64> = text.split(':').map(|p| p.parse().unwrap()).collect();
            prop_assert_eq!(parts.len(), 3);
            prop_assert!(parts[1] < 60 && parts[2] < 60);
            prop_assert_eq!(parts[0] * 3600 + parts[1] * 60 + parts[2], milliseconds / 1000);
        }
    }

    #[test]
    fn test_render_before_school() {
        let out = render(&school(), &at("2019-07-28T08:00:00"), ClockFormat::TwelveHour);
        assert!(out.starts_with("The High School (THS) at 2019-07-28 8:00 AM\n"));
        assert!(out.contains("Schedule: Regular Schedule"));
        assert!(out.contains("State:    School is not in session (OUTSIDE_SCHOOL_HOURS)"));
        assert!(out.contains("Next:     First Period at 8:25 AM (in 0:25:00)"));
        assert!(!out.contains("Now:"));
    }

    #[test]
    fn test_render_between_classes_24_hour() {
        let out = render(&school(), &at("2019-07-28T10:00:00"), ClockFormat::TwentyFourHour);
        assert!(out.contains("Now:      Transition Time"));
        assert!(out.contains("Next:     Second Period at 10:05 (in 0:05:00)"));
    }

    #[test]
    fn test_render_day_off() {
        let out = render(&school(), &at("2019-07-27T10:00:00"), ClockFormat::TwelveHour);
        assert!(out.contains("State:    No school today (DAY_OFF)"));
        assert!(out.contains("Next:     no more bells today"));
        assert!(!out.contains("Schedule:"));
    }
}
