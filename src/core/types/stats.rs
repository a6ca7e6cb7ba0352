use serde::Serialize;

use crate::types::{AppError, AppResult, LineResult};

/// Running totals folded over every rendered line, in bucket order
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RunTotals {
    pub test_count_sum: u64,
    pub amplified_test_count_sum: u64,
    /// Mutation scores in the order their lines were produced
    pub mutation_scores: Vec<f64>,
}

impl RunTotals {
    pub fn record(&mut self, line: &LineResult) {
        self.test_count_sum += line.test_count;
        self.amplified_test_count_sum += line.amplified_test_count;
        self.mutation_scores.push(line.mutation_score);
    }

    /// Scores sorted ascending
    pub fn sorted_scores(&self) -> Vec<f64> {
        let mut sorted = self.mutation_scores.clone();
        sorted.sort_by(|a, b| a.total_cmp(b));
        sorted
    }

    pub fn finalize(&self) -> AppResult<RunSummary> {
        let sorted_scores = self.sorted_scores();
        let median = median_of_sorted(&sorted_scores)?;
        Ok(RunSummary {
            unsorted_scores: self.mutation_scores.clone(),
            sorted_scores,
            median,
            total_tests: self.test_count_sum,
            total_amplified_tests: self.amplified_test_count_sum,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunSummary {
    pub unsorted_scores: Vec<f64>,
    pub sorted_scores: Vec<f64>,
    pub median: f64,
    pub total_tests: u64,
    pub total_amplified_tests: u64,
}

/// Element at `len / 2`; the upper-middle one for even lengths, never averaged.
pub fn median_of_sorted(sorted: &[f64]) -> AppResult<f64> {
    sorted
        .get(sorted.len() / 2)
        .copied()
        .ok_or(AppError::EmptyScoreList)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(test_count: u64, mutation_score: f64, amplified_test_count: u64) -> LineResult {
        LineResult {
            test_count,
            mutation_score,
            amplified_test_count,
            text: String::new(),
        }
    }

    #[test]
    fn median_takes_upper_middle_for_even_length() {
        let median = median_of_sorted(&[10.0, 20.0, 30.0, 40.0]).unwrap();
        assert_eq!(median, 30.0);
    }

    #[test]
    fn median_of_odd_length_is_middle() {
        assert_eq!(median_of_sorted(&[1.0, 2.0, 9.0]).unwrap(), 2.0);
        assert_eq!(median_of_sorted(&[7.5]).unwrap(), 7.5);
    }

    #[test]
    fn median_of_empty_list_fails() {
        assert!(matches!(
            median_of_sorted(&[]),
            Err(AppError::EmptyScoreList)
        ));
    }

    #[test]
    fn record_accumulates_totals_and_scores() {
        let mut totals = RunTotals::default();
        totals.record(&line(4, 60.0, 2));
        totals.record(&line(3, 10.0, 0));
        assert_eq!(totals.test_count_sum, 7);
        assert_eq!(totals.amplified_test_count_sum, 2);
        assert_eq!(totals.mutation_scores, vec![60.0, 10.0]);
    }

    #[test]
    fn finalize_sorts_without_touching_recorded_order() {
        let mut totals = RunTotals::default();
        for score in [60.0, 80.0, 10.0, 20.0] {
            totals.record(&line(1, score, 1));
        }
        let summary = totals.finalize().unwrap();
        assert_eq!(summary.unsorted_scores, vec![60.0, 80.0, 10.0, 20.0]);
        assert_eq!(summary.sorted_scores, vec![10.0, 20.0, 60.0, 80.0]);
        assert_eq!(summary.median, 60.0);
        assert_eq!(summary.total_tests, 4);
        assert_eq!(summary.total_amplified_tests, 4);
    }

    #[test]
    fn finalize_without_lines_is_an_error() {
        assert!(RunTotals::default().finalize().is_err());
    }
}
