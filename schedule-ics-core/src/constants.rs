/// File extension (without the dot) marking a weekly schedule file.
pub const SCHEDULE_EXTENSION: &str = "fschedule";

/// Calendar name written as NAME / X-WR-CALNAME.
pub const DEFAULT_CALENDAR_NAME: &str = "Faculty Schedule";

/// PRODID of generated documents.
pub const PRODUCT_ID: &str = "-//schedule-ics//Faculty Schedule Export//EN";

/// Filename handed to the output sink.
pub const OUTPUT_FILENAME: &str = "faculty_schedule.ics";

/// MIME type of generated documents.
pub const CALENDAR_MIME_TYPE: &str = "text/calendar; charset=utf-8";

pub const CAMPUS_SUMMARY: &str = "On Campus (Available for Meetings)";

pub const CAMPUS_DESCRIPTION: &str =
    "Available on campus for meetings and drop-in questions. Email to schedule a time.";
