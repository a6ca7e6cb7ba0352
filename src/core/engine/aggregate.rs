use std::io::Write;

use log::{debug, info};
use serde::Serialize;

use crate::core::engine::pms::{compute_pms, partition};
use crate::core::engine::traits::{ClassSelector, LineFormatter, MutationSource};
use crate::types::{AppResult, Bucket, LineResult, RunTotals, ScoredEntry, median_of_sorted};

/// Separates the high-PMS rows from the low-PMS rows in the table
pub const LOW_PMS_HEADER: [&str; 3] = ["\\hline", "&\\scriptsize{Low $PMS$}\\\\", "\\hline"];

/// Alternating row style, advanced only when a line is actually rendered
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Stripe(bool);

impl Stripe {
    pub fn is_on(self) -> bool {
        self.0
    }

    fn advance(&mut self) {
        self.0 = !self.0;
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportLine {
    pub project: String,
    pub class_name: String,
    pub pms: f64,
    pub bucket: Bucket,
    #[serde(flatten)]
    pub result: LineResult,
}

/// Everything needed to print the report, collected before any output
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Report {
    pub high: Vec<ReportLine>,
    pub low: Vec<ReportLine>,
    pub totals: RunTotals,
}

impl Report {
    pub fn write_latex<W: Write>(&self, out: &mut W) -> AppResult<()> {
        for line in &self.high {
            writeln!(out, "{}", line.result.text)?;
        }
        for header in LOW_PMS_HEADER {
            writeln!(out, "{header}")?;
        }
        for line in &self.low {
            writeln!(out, "{}", line.result.text)?;
        }

        writeln!(out, "{:?}", self.totals.mutation_scores)?;
        let sorted = self.totals.sorted_scores();
        writeln!(out, "{sorted:?}")?;
        let median = median_of_sorted(&sorted)?;
        writeln!(out, "median mutation score : {median:?}")?;
        writeln!(out, "total number of test : {}", self.totals.test_count_sum)?;
        writeln!(
            out,
            "total number of amplified test : {}",
            self.totals.amplified_test_count_sum
        )?;
        Ok(())
    }
}

pub struct ReportAggregator<'a> {
    selector: &'a dyn ClassSelector,
    source: &'a dyn MutationSource,
    formatter: &'a dyn LineFormatter,
}

impl<'a> ReportAggregator<'a> {
    pub fn new(
        selector: &'a dyn ClassSelector,
        source: &'a dyn MutationSource,
        formatter: &'a dyn LineFormatter,
    ) -> Self {
        Self {
            selector,
            source,
            formatter,
        }
    }

    /// Scores every candidate class, in project order then candidate order
    pub fn score_candidates(&self, projects: &[String]) -> AppResult<Vec<ScoredEntry>> {
        let mut entries = Vec::new();
        for project in projects {
            let candidates = self.selector.select(project)?;
            for class_name in candidates.in_order() {
                let record = self.source.count_for_test_class(project, class_name)?;
                let pms = compute_pms(record);
                debug!("{project}::{class_name}: PMS {pms:.2} ({record:?})");
                entries.push(ScoredEntry {
                    pms,
                    class_name: class_name.to_string(),
                    project: project.clone(),
                });
            }
        }
        Ok(entries)
    }

    /// Classifies, then renders the high bucket followed by the low bucket
    pub fn collect(&self, projects: &[String]) -> AppResult<Report> {
        let entries = self.score_candidates(projects)?;
        let (high, low) = partition(&entries);
        info!(
            "Scored {} classes: {} high PMS, {} low PMS",
            entries.len(),
            high.len(),
            low.len()
        );

        let mut stripe = Stripe::default();
        let mut totals = RunTotals::default();
        let high = self.render_bucket(&high, Bucket::High, &mut stripe, &mut totals)?;
        let low = self.render_bucket(&low, Bucket::Low, &mut stripe, &mut totals)?;

        Ok(Report { high, low, totals })
    }

    pub fn run<W: Write>(&self, projects: &[String], out: &mut W) -> AppResult<Report> {
        let report = self.collect(projects)?;
        report.write_latex(out)?;
        Ok(report)
    }

    fn render_bucket(
        &self,
        entries: &[&ScoredEntry],
        bucket: Bucket,
        stripe: &mut Stripe,
        totals: &mut RunTotals,
    ) -> AppResult<Vec<ReportLine>> {
        let mut lines = Vec::with_capacity(entries.len());
        for entry in entries {
            let (project, class) = (&entry.project, &entry.class_name);
            // Read again instead of reusing the scoring pass
            let record = self.source.count_for_test_class(project, class)?;
            let on = stripe.is_on();
            let Some(result) = self.formatter.print_line(record, class, project, on)? else {
                debug!("No line for {project}::{class}");
                continue;
            };
            stripe.advance();
            totals.record(&result);
            lines.push(ReportLine {
                project: project.clone(),
                class_name: class.clone(),
                pms: entry.pms,
                bucket,
                result,
            });
        }
        Ok(lines)
    }
}
