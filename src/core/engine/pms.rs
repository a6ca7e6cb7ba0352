use crate::types::{Bucket, MutationRecord, ScoredEntry};

/// Entries strictly above this PMS go to the high bucket
pub const PMS_THRESHOLD: f64 = 50.0;

/// Percentage of killed mutants. A class without mutants scores 0.
pub fn compute_pms(record: MutationRecord) -> f64 {
    if record.total_mutants == 0 {
        return 0.0;
    }
    100.0 * record.killed_mutants as f64 / record.total_mutants as f64
}

pub fn bucket_of(pms: f64) -> Bucket {
    if pms > PMS_THRESHOLD {
        Bucket::High
    } else {
        Bucket::Low
    }
}

/// Stable split into (high, low)
pub fn partition(entries: &[ScoredEntry]) -> (Vec<&ScoredEntry>, Vec<&ScoredEntry>) {
    entries
        .iter()
        .partition(|entry| bucket_of(entry.pms) == Bucket::High)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(pms: f64, class_name: &str) -> ScoredEntry {
        ScoredEntry {
            pms,
            class_name: class_name.to_string(),
            project: "p".to_string(),
        }
    }

    #[test]
    fn pms_of_zero_mutants_is_zero() {
        assert_eq!(compute_pms(MutationRecord::new(0, 0)), 0.0);
        assert_eq!(compute_pms(MutationRecord::new(0, 7)), 0.0);
    }

    #[test]
    fn pms_is_a_percentage() {
        assert_eq!(compute_pms(MutationRecord::new(10, 5)), 50.0);
        assert_eq!(compute_pms(MutationRecord::new(3, 3)), 100.0);
        assert_eq!(compute_pms(MutationRecord::new(4, 1)), 25.0);
    }

    #[test]
    fn fifty_percent_is_low() {
        assert_eq!(bucket_of(50.0), Bucket::Low);
        assert_eq!(bucket_of(50.000001), Bucket::High);
        assert_eq!(bucket_of(0.0), Bucket::Low);
    }

    #[test]
    fn partition_is_stable_and_complete() {
        let entries = vec![
            entry(60.0, "A"),
            entry(10.0, "B"),
            entry(80.0, "C"),
            entry(50.0, "D"),
            entry(51.0, "E"),
        ];
        let (high, low) = partition(&entries);

        let high: Vec<&str> = high.iter().map(|e| e.class_name.as_str()).collect();
        let low: Vec<&str> = low.iter().map(|e| e.class_name.as_str()).collect();
        assert_eq!(high, vec!["A", "C", "E"]);
        assert_eq!(low, vec!["B", "D"]);
        assert_eq!(high.len() + low.len(), entries.len());
    }
}
