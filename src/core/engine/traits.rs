use crate::types::{AppResult, Candidates, LineResult, MutationRecord};

/// Picks the test classes to profile in a project
pub trait ClassSelector {
    fn select(&self, project: &str) -> AppResult<Candidates>;
}

/// Looks up the mutant counts of a test class
pub trait MutationSource {
    /// Called once to score a class and again to render it; must be idempotent.
    fn count_for_test_class(&self, project: &str, class_name: &str) -> AppResult<MutationRecord>;
}

/// Renders one report line
pub trait LineFormatter {
    /// Returns `None` when the class should not appear in the report.
    /// `stripe` selects the alternate row style.
    fn print_line(
        &self,
        record: MutationRecord,
        class_name: &str,
        project: &str,
        stripe: bool,
    ) -> AppResult<Option<LineResult>>;
}
