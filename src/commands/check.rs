use std::path::Path;

use anyhow::Result;
use owo_colors::OwoColorize;

use crate::config::AppConfig;

pub async fn run(file: &Path, cfg: &AppConfig) -> Result<()> {
    let schedule = super::read_schedule(file, cfg).await?;

    println!("{}", file.display().bold());

    let mut total = 0;
    let mut usable = 0;
    for day in schedule.summary() {
        total += day.items;
        usable += day.materializable;

        let line = format!("  {:<10} {} items", day.day.name(), day.items);
        if day.items == 0 {
            println!("{}", line.dimmed());
        } else if day.materializable < day.items {
            println!(
                "{} {}",
                line,
                format!("({} skipped)", day.items - day.materializable).yellow()
            );
        } else {
            println!("{}", line);
        }
    }

    println!();
    println!("{} of {} items will be exported each week", usable, total);

    Ok(())
}
