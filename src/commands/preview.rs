use std::path::Path;

use anyhow::Result;
use owo_colors::OwoColorize;
use schedule_ics_core::date_range::DateRange;
use schedule_ics_core::event::{BusyStatus, CalendarEvent};
use schedule_ics_core::expand::expand_events;

use crate::config::AppConfig;

pub async fn run(
    file: &Path,
    start: Option<&str>,
    end: Option<&str>,
    cfg: &AppConfig,
) -> Result<()> {
    let schedule = super::read_schedule(file, cfg).await?;
    let range = DateRange::from_args(start, end)?;
    let events = expand_events(&schedule, range)?;

    if events.is_empty() {
        println!("{}", "No events in range.".dimmed());
        return Ok(());
    }

    for event in &events {
        println!("{}", render_event(event));
    }

    println!();
    println!("{} events over {} days", events.len(), range.len());

    Ok(())
}

fn render_event(event: &CalendarEvent) -> String {
    let when = format!(
        "{} {}-{}",
        event.start.format("%a %Y-%m-%d"),
        event.start.format("%H:%M"),
        event.end.format("%H:%M"),
    );

    let status = match event.busy_status {
        BusyStatus::Busy => event.busy_status.as_ics_str().red().to_string(),
        BusyStatus::Free => event.busy_status.as_ics_str().green().to_string(),
    };

    let mut line = format!("  {}  {:<4}  {}", when.dimmed(), status, event.summary);
    if !event.location.is_empty() {
        line.push_str(&format!(" @ {}", event.location));
    }
    line
}
