pub mod check;
pub mod config;
pub mod export;
pub mod preview;

use std::path::Path;

use anyhow::{Context, Result};
use schedule_ics_core::loader::{ScheduleSource, display_name, load_with_extension};
use schedule_ics_core::schedule::WeeklySchedule;

use crate::config::AppConfig;

/// Read and load a schedule file, checking it against the configured extension.
pub async fn read_schedule(path: &Path, cfg: &AppConfig) -> Result<WeeklySchedule> {
    let bytes = tokio::fs::read(path)
        .await
        .with_context(|| format!("Could not read {}", path.display()))?;

    let source = ScheduleSource::new(display_name(path), bytes);
    let schedule = load_with_extension(&source, &cfg.schedule_extension)?;

    Ok(schedule)
}
