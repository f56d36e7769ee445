//! ICS file generation.

use crate::error::CoreResult;
use crate::event::{CalendarEvent, Transparency};
use crate::expand::ExportOptions;
use chrono::NaiveDateTime;
use icalendar::{Calendar, Component, EventLike};

/// Generate .ics content holding one VEVENT per event, in the given order
pub fn generate_ics(events: &[CalendarEvent], options: &ExportOptions) -> CoreResult<String> {
    let mut cal = Calendar::new();
    cal.name(&options.calendar_name);

    // Caller-supplied so repeated exports are byte-identical
    let dtstamp = options.stamp.format("%Y%m%dT%H%M%SZ").to_string();

    for event in events {
        let mut ics_event = icalendar::Event::new();
        ics_event.uid(&event.uid);
        ics_event.add_property("DTSTAMP", &dtstamp);
        // icalendar escapes TEXT values (backslash, `;`, `,`, newline)
        ics_event.summary(&event.summary);

        add_floating_datetime(&mut ics_event, "DTSTART", &event.start);
        add_floating_datetime(&mut ics_event, "DTEND", &event.end);

        ics_event.description(&event.description);
        ics_event.location(&event.location);

        ics_event.add_property("X-MICROSOFT-CDO-BUSYSTATUS", event.busy_status.as_ics_str());

        if let Some(status) = event.status {
            ics_event.add_property("STATUS", status.as_ics_str());
        }

        // TRANSP - only emit if TRANSPARENT (OPAQUE is the default)
        if event.transparency == Transparency::Transparent {
            ics_event.add_property("TRANSP", "TRANSPARENT");
        }

        cal.push(ics_event.done());
    }

    let cal = cal.done();

    Ok(strip_ics_bloat(&cal.to_string(), &options.product_id))
}

/// Clean up ICS output from the icalendar crate
/// - Replace PRODID with our product identifier
/// - Remove CALSCALE:GREGORIAN (it's the default)
fn strip_ics_bloat(ics: &str, product_id: &str) -> String {
    let mut result = String::with_capacity(ics.len());

    for line in ics.lines() {
        if line.starts_with("PRODID:") {
            result.push_str("PRODID:");
            result.push_str(product_id);
            result.push_str("\r\n");
            continue;
        }

        if line == "CALSCALE:GREGORIAN" {
            continue;
        }

        result.push_str(line);
        result.push_str("\r\n");
    }

    result
}

/// Floating datetime (no Z, no TZID)
fn add_floating_datetime(ics_event: &mut icalendar::Event, name: &str, time: &NaiveDateTime) {
    ics_event.add_property(name, time.format("%Y%m%dT%H%M%S").to_string());
}
