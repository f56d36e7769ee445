//! Schedule file loading.

use std::path::Path;

use serde_json::Value;

use crate::constants::SCHEDULE_EXTENSION;
use crate::error::{CoreError, CoreResult};
use crate::schedule::{WeeklySchedule, is_falsy};

/// Raw schedule input: the file name (used for the extension check) and its bytes.
#[derive(Debug, Clone)]
pub struct ScheduleSource {
    pub name: String,
    pub bytes: Vec<u8>,
}

impl ScheduleSource {
    pub fn new(name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        ScheduleSource {
            name: name.into(),
            bytes: bytes.into(),
        }
    }

    /// Read a schedule file from disk.
    pub fn from_path(path: &Path) -> CoreResult<Self> {
        let bytes = std::fs::read(path)?;
        Ok(ScheduleSource::new(display_name(path), bytes))
    }

    pub fn has_extension(&self, extension: &str) -> bool {
        self.name.ends_with(&format!(".{extension}"))
    }
}

/// File name component of a path, falling back to the full path.
pub fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string_lossy().into_owned())
}

/// Load a schedule using the default `.fschedule` extension.
pub fn load(source: &ScheduleSource) -> CoreResult<WeeklySchedule> {
    load_with_extension(source, SCHEDULE_EXTENSION)
}

/// Validate and parse a schedule file.
///
/// The extension is checked before any decoding. Item-level problems are not
/// reported here; expansion skips incomplete items and fails on bad times
/// or `null` entries.
pub fn load_with_extension(source: &ScheduleSource, extension: &str) -> CoreResult<WeeklySchedule> {
    if !source.has_extension(extension) {
        return Err(CoreError::InvalidExtension {
            name: source.name.clone(),
            extension: extension.to_string(),
        });
    }

    let text = std::str::from_utf8(&source.bytes)
        .map_err(|e| CoreError::MalformedDocument(e.to_string()))?;

    let document: Value =
        serde_json::from_str(text).map_err(|e| CoreError::MalformedDocument(e.to_string()))?;

    let schedule = match document.get("schedule") {
        None => return Err(CoreError::MissingScheduleField),
        Some(value) if is_falsy(value) => return Err(CoreError::MissingScheduleField),
        Some(Value::Object(map)) => WeeklySchedule::from_json_map(map),
        Some(_) => {
            tracing::debug!(file = %source.name, "'schedule' is not an object, no days defined");
            WeeklySchedule::new()
        }
    };

    tracing::debug!(file = %source.name, "loaded schedule");

    Ok(schedule)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::{Day, ItemKind};

    fn source(json: &str) -> ScheduleSource {
        ScheduleSource::new("fall.fschedule", json.as_bytes())
    }

    #[test]
    fn rejects_wrong_extension_before_parsing() {
        let src = ScheduleSource::new("fall.json", "not even json");
        let err = load(&src).unwrap_err();
        assert!(
            matches!(err, CoreError::InvalidExtension { ref name, .. } if name == "fall.json"),
            "got {err:?}"
        );
    }

    #[test]
    fn extension_check_is_case_sensitive() {
        let src = ScheduleSource::new("fall.FSCHEDULE", r#"{"schedule":{}}"#);
        assert!(matches!(
            load(&src),
            Err(CoreError::InvalidExtension { .. })
        ));
    }

    #[test]
    fn custom_extension() {
        let src = ScheduleSource::new("fall.sched", r#"{"schedule":{}}"#);
        assert!(load_with_extension(&src, "sched").is_ok());
        assert!(load(&src).is_err());
    }

    #[test]
    fn malformed_json_is_rejected() {
        let err = load(&source(r#"{"schedule": {"monday": [}"#)).unwrap_err();
        assert!(matches!(err, CoreError::MalformedDocument(_)), "got {err:?}");
    }

    #[test]
    fn invalid_utf8_is_malformed() {
        let src = ScheduleSource::new("fall.fschedule", vec![0xff, 0xfe, 0x00]);
        assert!(matches!(load(&src), Err(CoreError::MalformedDocument(_))));
    }

    #[test]
    fn missing_schedule_field() {
        let err = load(&source(r#"{"version": 2}"#)).unwrap_err();
        assert!(matches!(err, CoreError::MissingScheduleField), "got {err:?}");

        let err = load(&source(r#"{"schedule": null}"#)).unwrap_err();
        assert!(matches!(err, CoreError::MissingScheduleField), "got {err:?}");

        let err = load(&source("[1, 2, 3]")).unwrap_err();
        assert!(matches!(err, CoreError::MissingScheduleField), "got {err:?}");
    }

    #[test]
    fn falsy_schedule_field_is_missing() {
        for json in [
            r#"{"schedule": false}"#,
            r#"{"schedule": 0}"#,
            r#"{"schedule": ""}"#,
        ] {
            let err = load(&source(json)).unwrap_err();
            assert!(matches!(err, CoreError::MissingScheduleField), "{json}: got {err:?}");
        }
    }

    #[test]
    fn loads_valid_schedule() {
        let schedule = load(&source(
            r#"{"schedule":{"monday":[{"type":"teaching","startTime":"09:00","endTime":"10:30","className":"CS101"}]}}"#,
        ))
        .unwrap();

        let monday: Vec<_> = schedule.items(Day::Monday).collect();
        assert_eq!(monday.len(), 1);
        assert_eq!(monday[0].kind, Some(ItemKind::Teaching));
        assert_eq!(monday[0].start_time.as_deref(), Some("09:00"));
        assert_eq!(monday[0].end_time.as_deref(), Some("10:30"));
    }

    #[test]
    fn non_object_schedule_loads_as_empty() {
        for json in [r#"{"schedule": ["monday"]}"#, r#"{"schedule": true}"#, r#"{"schedule": "x"}"#] {
            assert!(load(&source(json)).unwrap().is_empty(), "{json}");
        }
    }

    #[test]
    fn from_path_uses_file_name() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("spring.fschedule");
        std::fs::write(&path, r#"{"schedule":{}}"#).unwrap();

        let src = ScheduleSource::from_path(&path).unwrap();
        assert_eq!(src.name, "spring.fschedule");
        assert!(load(&src).unwrap().is_empty());
    }
}
