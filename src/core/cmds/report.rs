use std::io::Write;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use log::info;
use serde::Serialize;
use strum::{Display, EnumString};

use crate::ReportAggregator;
use crate::core::engine::aggregate::ReportLine;
use crate::types::{AppError, AppResult, RunSummary};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum ReportFormat {
    Latex,
    Json,
}

impl ReportFormat {
    pub fn parse(format: &str) -> AppResult<Self> {
        Self::from_str(format).map_err(|_| {
            AppError::Custom(format!(
                "Unknown report format '{format}'; expected latex or json"
            ))
        })
    }
}

#[derive(Serialize)]
struct JsonReport<'a> {
    generated_at: DateTime<Utc>,
    projects: &'a [String],
    high: &'a [ReportLine],
    low: &'a [ReportLine],
    summary: RunSummary,
}

pub fn execute_report<W: Write>(
    aggregator: &ReportAggregator,
    projects: &[String],
    format: &str,
    out: &mut W,
) -> AppResult<()> {
    let format = ReportFormat::parse(format)?;
    info!("Reporting on {} project(s): {}", projects.len(), projects.join(", "));

    match format {
        ReportFormat::Latex => {
            aggregator.run(projects, out)?;
        }
        ReportFormat::Json => {
            let report = aggregator.collect(projects)?;
            let json = JsonReport {
                generated_at: Utc::now(),
                projects,
                high: &report.high,
                low: &report.low,
                summary: report.totals.finalize()?,
            };
            writeln!(out, "{}", serde_json::to_string_pretty(&json)?)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_formats() {
        assert_eq!(ReportFormat::parse("latex").unwrap(), ReportFormat::Latex);
        assert_eq!(ReportFormat::parse("JSON").unwrap(), ReportFormat::Json);
        assert!(ReportFormat::parse("csv").is_err());
    }
}
