use std::io::Write;

use log::info;
use serde::Serialize;

use crate::ReportAggregator;
use crate::core::cmds::ListFormat;
use crate::types::{AppResult, Bucket, ScoredEntry};

#[derive(Serialize)]
struct ScoreRow<'a> {
    project: &'a str,
    class_name: &'a str,
    pms: f64,
    bucket: Bucket,
}

pub fn execute_scores<W: Write>(
    aggregator: &ReportAggregator,
    projects: &[String],
    format: &str,
    out: &mut W,
) -> AppResult<()> {
    let format = ListFormat::parse(format)?;
    let entries = aggregator.score_candidates(projects)?;

    if format == ListFormat::Json {
        let rows: Vec<ScoreRow> = entries.iter().map(to_row).collect();
        writeln!(out, "{}", serde_json::to_string_pretty(&rows)?)?;
        return Ok(());
    }

    if entries.is_empty() {
        info!("No candidate classes found");
        return Ok(());
    }

    let mut current_project: Option<&str> = None;
    for entry in &entries {
        if current_project != Some(entry.project.as_str()) {
            if current_project.is_some() {
                info!("");
            }
            info!("Project: {}", entry.project);
            current_project = Some(entry.project.as_str());
        }
        info!(
            "  {:>6.2}% | {:<4} | {}",
            entry.pms,
            entry.bucket(),
            entry.class_name
        );
    }

    let high = entries.iter().filter(|e| e.bucket() == Bucket::High).count();
    info!("");
    info!(
        "{} classes: {} high PMS, {} low PMS",
        entries.len(),
        high,
        entries.len() - high
    );
    Ok(())
}

fn to_row(entry: &ScoredEntry) -> ScoreRow<'_> {
    ScoreRow {
        project: &entry.project,
        class_name: &entry.class_name,
        pms: entry.pms,
        bucket: entry.bucket(),
    }
}
