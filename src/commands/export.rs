use std::path::PathBuf;

use anyhow::Result;
use chrono::Utc;
use owo_colors::OwoColorize;
use schedule_ics_core::expand::export;
use schedule_ics_core::sink::{DirectorySink, WriterSink};

use crate::config::AppConfig;

pub struct ExportArgs {
    pub file: PathBuf,
    pub start: Option<String>,
    pub end: Option<String>,
    /// Directory to write into (defaults to output_dir from config)
    pub output: Option<PathBuf>,
    pub stdout: bool,
}

pub async fn run(args: ExportArgs, cfg: &AppConfig) -> Result<()> {
    let schedule = super::read_schedule(&args.file, cfg).await?;
    let options = cfg.export_options(Utc::now());

    if args.stdout {
        let mut sink = WriterSink::new(std::io::stdout().lock());
        let document = export(
            &schedule,
            args.start.as_deref(),
            args.end.as_deref(),
            &options,
            &mut sink,
        )?;
        eprintln!("{}", format!("  Exported {} events", document.event_count).green());
        return Ok(());
    }

    let dir = args.output.unwrap_or_else(|| cfg.output_path());
    let mut sink = DirectorySink::new(dir);
    let document = export(
        &schedule,
        args.start.as_deref(),
        args.end.as_deref(),
        &options,
        &mut sink,
    )?;

    let written = sink
        .written()
        .map(|p| p.display().to_string())
        .unwrap_or(document.filename);
    println!(
        "{}",
        format!("  Exported {} events to {}", document.event_count, written).green()
    );

    Ok(())
}
