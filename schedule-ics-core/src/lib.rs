//! Core library for schedule-ics.
//!
//! Turns a weekly faculty schedule template into dated iCalendar events:
//! - `loader` validates and parses schedule files into a `WeeklySchedule`
//! - `expand` maps the weekly template onto a closed date range
//! - `ics` encodes the resulting events as a `CalendarDocument`
//! - `sink` delivers finished documents

pub mod constants;
pub mod date_range;
pub mod error;
pub mod event;
pub mod expand;
pub mod ics;
pub mod loader;
pub mod schedule;
pub mod sink;

pub use error::{CoreError, CoreResult};
pub use expand::{ExportOptions, expand, expand_events, export};
pub use ics::CalendarDocument;
pub use loader::{ScheduleSource, load};
pub use schedule::{Day, ItemKind, ScheduleEntry, ScheduleItem, WeeklySchedule};
