//! Expansion of a weekly schedule over a date range.
//!
//! Every date in the range is looked up against the weekly template
//! (weekends included) and each materializable item on that weekday becomes
//! one `CalendarEvent`. Events come out in date-then-item order.

use chrono::{DateTime, Datelike, NaiveDate, NaiveTime, Utc};
use uuid::Uuid;

use crate::constants::{
    CAMPUS_DESCRIPTION, CAMPUS_SUMMARY, DEFAULT_CALENDAR_NAME, OUTPUT_FILENAME, PRODUCT_ID,
};
use crate::date_range::DateRange;
use crate::error::{CoreError, CoreResult};
use crate::event::{BusyStatus, CalendarEvent, EventStatus, Transparency};
use crate::ics::CalendarDocument;
use crate::schedule::{Day, ItemKind, ScheduleEntry, ScheduleItem, WeeklySchedule};
use crate::sink::OutputSink;

/// Settings for encoding and delivering a calendar document.
#[derive(Debug, Clone)]
pub struct ExportOptions {
    pub calendar_name: String,
    pub product_id: String,
    pub filename: String,
    /// Written as DTSTAMP on every event
    pub stamp: DateTime<Utc>,
}

impl ExportOptions {
    /// Default calendar identity with a fixed generation timestamp.
    pub fn at(stamp: DateTime<Utc>) -> Self {
        ExportOptions {
            calendar_name: DEFAULT_CALENDAR_NAME.to_string(),
            product_id: PRODUCT_ID.to_string(),
            filename: OUTPUT_FILENAME.to_string(),
            stamp,
        }
    }
}

impl Default for ExportOptions {
    fn default() -> Self {
        ExportOptions::at(Utc::now())
    }
}

/// Expand `schedule` over `[start, end]` and encode the result.
///
/// Both dates are required (YYYY-MM-DD). An inverted range yields an empty
/// calendar rather than an error.
pub fn expand(
    schedule: &WeeklySchedule,
    start: Option<&str>,
    end: Option<&str>,
    options: &ExportOptions,
) -> CoreResult<CalendarDocument> {
    let range = DateRange::from_args(start, end)?;
    let events = expand_events(schedule, range)?;
    CalendarDocument::encode(&events, options)
}

/// Expand and hand the finished document to `sink`.
///
/// Nothing reaches the sink unless the whole expansion succeeds.
pub fn export(
    schedule: &WeeklySchedule,
    start: Option<&str>,
    end: Option<&str>,
    options: &ExportOptions,
    sink: &mut dyn OutputSink,
) -> CoreResult<CalendarDocument> {
    let document = expand(schedule, start, end, options)?;
    sink.deliver(&document)?;

    tracing::info!(
        events = document.event_count,
        filename = %document.filename,
        "exported calendar"
    );

    Ok(document)
}

/// Materialize every event in `range`, in date-then-item order.
pub fn expand_events(schedule: &WeeklySchedule, range: DateRange) -> CoreResult<Vec<CalendarEvent>> {
    let mut events = Vec::new();

    for date in range.days() {
        let day = Day::from(date.weekday());
        for (index, entry) in schedule.entries(day).iter().enumerate() {
            let ScheduleEntry::Item(item) = entry else {
                return Err(CoreError::ExpansionFailed(format!(
                    "{day} entry {index} is null ({date})"
                )));
            };
            if let Some(event) = materialize(date, day, index, item)? {
                events.push(event);
            }
        }
    }

    tracing::debug!(
        days = range.len(),
        events = events.len(),
        "expanded schedule"
    );

    Ok(events)
}

fn materialize(
    date: NaiveDate,
    day: Day,
    index: usize,
    item: &ScheduleItem,
) -> CoreResult<Option<CalendarEvent>> {
    let (Some(kind), Some(start_time), Some(end_time)) =
        (&item.kind, &item.start_time, &item.end_time)
    else {
        tracing::debug!(%date, %day, index, "skipping incomplete schedule item");
        return Ok(None);
    };

    let (summary, description, location, busy_status, status, transparency) = match kind {
        ItemKind::Teaching | ItemKind::Student => (
            item.class_name
                .clone()
                .unwrap_or_else(|| hours_label(kind)),
            item.description.clone().unwrap_or_default(),
            item.class_location.clone().unwrap_or_default(),
            BusyStatus::Busy,
            None,
            Transparency::Opaque,
        ),
        ItemKind::Campus => (
            CAMPUS_SUMMARY.to_string(),
            CAMPUS_DESCRIPTION.to_string(),
            String::new(),
            BusyStatus::Free,
            Some(EventStatus::Confirmed),
            Transparency::Transparent,
        ),
        ItemKind::Other(other) => {
            tracing::debug!(%date, %day, index, kind = %other, "skipping unknown item type");
            return Ok(None);
        }
    };

    let start = date.and_time(parse_wall_time(start_time)?);
    let end = date.and_time(parse_wall_time(end_time)?);

    Ok(Some(CalendarEvent {
        uid: event_uid(date, index, &summary),
        summary,
        description,
        location,
        start,
        end,
        busy_status,
        status,
        transparency,
    }))
}

/// "student" -> "Student Hours"
fn hours_label(kind: &ItemKind) -> String {
    let word = kind.as_str();
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => format!("{}{} Hours", first.to_uppercase(), chars.as_str()),
        None => "Hours".to_string(),
    }
}

fn event_uid(date: NaiveDate, index: usize, summary: &str) -> String {
    let key = format!("{}/{}/{}", date.format("%Y-%m-%d"), index, summary);
    format!("{}@schedule-ics", Uuid::new_v5(&Uuid::NAMESPACE_OID, key.as_bytes()))
}

/// Parse an `H:MM` or `HH:MM` 24-hour wall-clock time.
pub fn parse_wall_time(value: &str) -> CoreResult<NaiveTime> {
    let invalid = || CoreError::ExpansionFailed(format!("invalid time '{value}', expected HH:MM"));

    let (hours, minutes) = value.split_once(':').ok_or_else(invalid)?;
    let digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());

    if !digits(hours) || hours.len() > 2 || !digits(minutes) || minutes.len() != 2 {
        return Err(invalid());
    }

    let hours: u32 = hours.parse().map_err(|_| invalid())?;
    let minutes: u32 = minutes.parse().map_err(|_| invalid())?;

    NaiveTime::from_hms_opt(hours, minutes, 0).ok_or_else(invalid)
}
