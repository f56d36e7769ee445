//! Dated calendar events produced by schedule expansion.
//!
//! Times are floating wall-clock times: they are written to the calendar
//! without a timezone and interpreted in the viewer's local zone.

use chrono::NaiveDateTime;

/// A single dated occurrence of a schedule item.
#[derive(Debug, Clone, PartialEq)]
pub struct CalendarEvent {
    /// Stable identifier, derived from the date, item position and summary
    pub uid: String,
    pub summary: String,
    pub description: String,
    pub location: String,
    pub start: NaiveDateTime,
    /// Not guaranteed to be after `start`; source times are passed through as-is
    pub end: NaiveDateTime,
    pub busy_status: BusyStatus,
    /// Only set for availability blocks
    pub status: Option<EventStatus>,
    pub transparency: Transparency,
}

/// Free/busy classification (X-MICROSOFT-CDO-BUSYSTATUS)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BusyStatus {
    Busy,
    Free,
}

impl BusyStatus {
    pub fn as_ics_str(self) -> &'static str {
        match self {
            BusyStatus::Busy => "BUSY",
            BusyStatus::Free => "FREE",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventStatus {
    Confirmed,
}

impl EventStatus {
    pub fn as_ics_str(self) -> &'static str {
        match self {
            EventStatus::Confirmed => "CONFIRMED",
        }
    }
}

/// Event transparency (busy/free status)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transparency {
    /// Event blocks time on calendar (default)
    Opaque,
    /// Event does not block time (shows as free)
    Transparent,
}
