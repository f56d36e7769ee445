//! iCalendar document generation.
//!
//! This module encodes expanded events as an RFC 5545 calendar.

mod generate;

pub use generate::generate_ics;

use crate::constants::CALENDAR_MIME_TYPE;
use crate::error::CoreResult;
use crate::event::CalendarEvent;
use crate::expand::ExportOptions;

/// A fully encoded calendar, ready for an output sink.
#[derive(Debug, Clone, PartialEq)]
pub struct CalendarDocument {
    pub filename: String,
    pub content: String,
    pub event_count: usize,
}

impl CalendarDocument {
    pub fn encode(events: &[CalendarEvent], options: &ExportOptions) -> CoreResult<Self> {
        Ok(CalendarDocument {
            filename: options.filename.clone(),
            content: generate_ics(events, options)?,
            event_count: events.len(),
        })
    }

    pub fn mime_type(&self) -> &'static str {
        CALENDAR_MIME_TYPE
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.content.as_bytes()
    }
}
