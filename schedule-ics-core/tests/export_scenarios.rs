use chrono::{TimeZone, Utc};
use schedule_ics_core::sink::WriterSink;
use schedule_ics_core::{CoreError, ExportOptions, ScheduleSource, expand, export, load};

fn options() -> ExportOptions {
    ExportOptions::at(Utc.with_ymd_and_hms(2025, 1, 1, 8, 0, 0).unwrap())
}

fn load_json(json: &str) -> Result<schedule_ics_core::WeeklySchedule, CoreError> {
    load(&ScheduleSource::new("faculty.fschedule", json))
}

/// Unfolded property lines of each VEVENT
fn vevents(ics: &str) -> Vec<Vec<String>> {
    let unfolded = ics.replace("\r\n ", "");
    unfolded
        .split("BEGIN:VEVENT\r\n")
        .skip(1)
        .map(|block| {
            block
                .split("END:VEVENT")
                .next()
                .unwrap_or_default()
                .lines()
                .map(str::to_string)
                .collect()
        })
        .collect()
}

fn property<'a>(event: &'a [String], name: &str) -> Option<&'a str> {
    let prefix = format!("{name}:");
    event
        .iter()
        .find_map(|line| line.strip_prefix(prefix.as_str()))
}

#[test]
fn single_teaching_block_on_a_monday() {
    let schedule = load_json(
        r#"{"schedule":{"monday":[{"type":"teaching","startTime":"09:00","endTime":"10:30","className":"CS101"}]}}"#,
    )
    .unwrap();

    let doc = expand(&schedule, Some("2025-01-06"), Some("2025-01-06"), &options()).unwrap();
    let events = vevents(&doc.content);

    assert_eq!(doc.event_count, 1);
    assert_eq!(events.len(), 1);
    assert_eq!(property(&events[0], "SUMMARY"), Some("CS101"));
    assert_eq!(property(&events[0], "DTSTART"), Some("20250106T090000"));
    assert_eq!(property(&events[0], "DTEND"), Some("20250106T103000"));
    assert_eq!(property(&events[0], "X-MICROSOFT-CDO-BUSYSTATUS"), Some("BUSY"));
}

#[test]
fn campus_block_is_free_time() {
    let schedule = load_json(
        r#"{"schedule":{"monday":[{"type":"campus","startTime":"09:00","endTime":"10:30"}]}}"#,
    )
    .unwrap();

    let doc = expand(&schedule, Some("2025-01-06"), Some("2025-01-06"), &options()).unwrap();
    let events = vevents(&doc.content);

    assert_eq!(events.len(), 1);
    assert_eq!(
        property(&events[0], "SUMMARY"),
        Some("On Campus (Available for Meetings)")
    );
    assert_eq!(property(&events[0], "X-MICROSOFT-CDO-BUSYSTATUS"), Some("FREE"));
    assert_eq!(property(&events[0], "TRANSP"), Some("TRANSPARENT"));
    assert_eq!(property(&events[0], "STATUS"), Some("CONFIRMED"));
}

#[test]
fn item_without_end_time_is_skipped() {
    let schedule = load_json(
        r#"{"schedule":{"monday":[{"type":"teaching","startTime":"09:00","className":"CS101"}]}}"#,
    )
    .unwrap();

    let doc = expand(&schedule, Some("2025-01-06"), Some("2025-01-06"), &options()).unwrap();

    assert_eq!(doc.event_count, 0);
    assert!(vevents(&doc.content).is_empty());
}

#[test]
fn file_without_schedule_produces_nothing() {
    let err = load_json(r#"{"monday":[]}"#).unwrap_err();
    assert!(matches!(err, CoreError::MissingScheduleField), "got {err:?}");
}

#[test]
fn week_with_tuesday_and_friday_entries() {
    let schedule = load_json(
        r#"{"schedule":{
            "friday":[{"type":"student","startTime":"13:00","endTime":"14:00"}],
            "tuesday":[{"type":"teaching","startTime":"10:00","endTime":"11:15","className":"MATH200","classLocation":"Room 12"}]
        }}"#,
    )
    .unwrap();

    // Saturday 2025-01-04 .. Friday 2025-01-10
    let doc = expand(&schedule, Some("2025-01-04"), Some("2025-01-10"), &options()).unwrap();
    let events = vevents(&doc.content);

    let starts: Vec<_> = events
        .iter()
        .map(|e| property(e, "DTSTART").unwrap_or_default().to_string())
        .collect();
    assert_eq!(starts, vec!["20250107T100000", "20250110T130000"]);
    assert_eq!(property(&events[0], "LOCATION"), Some("Room 12"));
    assert_eq!(property(&events[1], "SUMMARY"), Some("Student Hours"));
}

#[test]
fn export_is_idempotent() {
    let schedule = load_json(
        r#"{"schedule":{
            "monday":[{"type":"teaching","startTime":"09:00","endTime":"10:30","className":"CS101"}],
            "wednesday":[{"type":"campus","startTime":"12:00","endTime":"16:00"}]
        }}"#,
    )
    .unwrap();

    let mut first = WriterSink::new(Vec::new());
    let mut second = WriterSink::new(Vec::new());
    export(&schedule, Some("2025-01-01"), Some("2025-05-31"), &options(), &mut first).unwrap();
    export(&schedule, Some("2025-01-01"), Some("2025-05-31"), &options(), &mut second).unwrap();

    assert_eq!(first.into_inner(), second.into_inner());
}

#[test]
fn wrong_extension_is_rejected() {
    let err = load(&ScheduleSource::new(
        "faculty.json",
        r#"{"schedule":{}}"#,
    ))
    .unwrap_err();
    assert!(matches!(err, CoreError::InvalidExtension { .. }), "got {err:?}");
}

#[test]
fn numeric_time_aborts_the_export() {
    let schedule = load_json(
        r#"{"schedule":{"monday":[{"type":"teaching","startTime":900,"endTime":1030}]}}"#,
    )
    .unwrap();

    let mut sink = WriterSink::new(Vec::new());
    let err = export(&schedule, Some("2025-01-06"), Some("2025-01-06"), &options(), &mut sink)
        .unwrap_err();

    assert!(matches!(err, CoreError::ExpansionFailed(_)), "got {err:?}");
    assert!(sink.into_inner().is_empty());
}
