use serde::Serialize;
use strum::{Display, EnumString};

/// Mutant counts for one test class of one project
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MutationRecord {
    pub total_mutants: u64,
    pub killed_mutants: u64,
}

impl MutationRecord {
    pub fn new(total_mutants: u64, killed_mutants: u64) -> Self {
        Self {
            total_mutants,
            killed_mutants,
        }
    }
}

/// PMS bucket an entry falls into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum Bucket {
    High,
    Low,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredEntry {
    pub pms: f64,
    pub class_name: String,
    pub project: String,
}

impl ScoredEntry {
    pub fn bucket(&self) -> Bucket {
        crate::core::engine::pms::bucket_of(self.pms)
    }
}

/// Stats for one rendered report line
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineResult {
    pub test_count: u64,
    pub mutation_score: f64,
    pub amplified_test_count: u64,
    #[serde(skip)]
    pub text: String,
}

/// Test classes selected for profiling in a single project
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Candidates {
    pub top: [String; 2],
    pub worst: [String; 2],
    pub extra: Option<String>,
}

impl Candidates {
    /// Candidate class names in profiling order: top, worst, then extra
    pub fn in_order(&self) -> impl Iterator<Item = &str> {
        self.top
            .iter()
            .chain(self.worst.iter())
            .map(String::as_str)
            .chain(self.extra.as_deref())
    }
}
