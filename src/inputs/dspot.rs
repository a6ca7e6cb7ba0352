use std::fs;
use std::io;
use std::path::PathBuf;

use log::{debug, warn};
use serde::Deserialize;

use crate::core::engine::pms::compute_pms;
use crate::core::engine::traits::LineFormatter;
use crate::types::{AppError, AppResult, LineResult, MutationRecord};

pub const REPORT_SUFFIX: &str = "_mutants_killed.json";

const STRIPE_PREFIX: &str = "\\rowcolor{gray!25} ";

/// Amplification report written for one test class; other keys are ignored
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AmplificationReport {
    pub nb_original_test_cases: u64,
    #[serde(default)]
    pub test_cases: Vec<AmplifiedTestCase>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AmplifiedTestCase {
    #[serde(default)]
    pub nb_mutant_killed: u64,
}

impl AmplificationReport {
    pub fn newly_killed(&self) -> u64 {
        self.test_cases.iter().map(|t| t.nb_mutant_killed).sum()
    }
}

/// Renders LaTeX table rows from PIT counts and amplification reports
#[derive(Debug, Clone)]
pub struct LatexLineFormatter {
    amplified_root: PathBuf,
}

impl LatexLineFormatter {
    pub fn new(amplified_root: impl Into<PathBuf>) -> Self {
        Self {
            amplified_root: amplified_root.into(),
        }
    }

    pub fn report_path(&self, project: &str, class_name: &str) -> PathBuf {
        self.amplified_root
            .join(project)
            .join(format!("{class_name}{REPORT_SUFFIX}"))
    }

    /// `None` when no amplification report was written for the class
    pub fn load_report(
        &self,
        project: &str,
        class_name: &str,
    ) -> AppResult<Option<AmplificationReport>> {
        let path = self.report_path(project, class_name);
        let contents = match fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(source) => return Err(AppError::InputRead { path, source }),
        };
        let report = serde_json::from_str(&contents).map_err(|e| {
            AppError::Custom(format!(
                "Malformed amplification report {}: {e}",
                path.display()
            ))
        })?;
        Ok(Some(report))
    }
}

impl LineFormatter for LatexLineFormatter {
    fn print_line(
        &self,
        record: MutationRecord,
        class_name: &str,
        project: &str,
        stripe: bool,
    ) -> AppResult<Option<LineResult>> {
        if record.total_mutants == 0 {
            debug!("{project}::{class_name} has no mutants; not rendered");
            return Ok(None);
        }
        let Some(report) = self.load_report(project, class_name)? else {
            warn!(
                "No amplification report for {project}::{class_name} at {}",
                self.report_path(project, class_name).display()
            );
            return Ok(None);
        };
        Ok(Some(render_line(record, class_name, project, stripe, &report)))
    }
}

pub fn render_line(
    record: MutationRecord,
    class_name: &str,
    project: &str,
    stripe: bool,
    report: &AmplificationReport,
) -> LineResult {
    let mutation_score = compute_pms(record);
    let newly_killed = report.newly_killed();
    let increase = if record.killed_mutants == 0 {
        0.0
    } else {
        100.0 * newly_killed as f64 / record.killed_mutants as f64
    };
    let amplified_test_count = report.test_cases.len() as u64;

    let text = format!(
        "{}{} & {} & {} & {}/{} & {:.2} & {} & {} & {:.2}\\\\",
        if stripe { STRIPE_PREFIX } else { "" },
        escape_latex(project),
        escape_latex(simple_name(class_name)),
        report.nb_original_test_cases,
        record.killed_mutants,
        record.total_mutants,
        mutation_score,
        amplified_test_count,
        newly_killed,
        increase,
    );

    LineResult {
        test_count: report.nb_original_test_cases,
        mutation_score,
        amplified_test_count,
        text,
    }
}

fn simple_name(class_name: &str) -> &str {
    class_name.rsplit('.').next().unwrap_or(class_name)
}

fn escape_latex(text: &str) -> String {
    text.replace('_', "\\_")
}
