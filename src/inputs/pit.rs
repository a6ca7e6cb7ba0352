use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::core::engine::traits::MutationSource;
use crate::types::{AppError, AppResult, MutationRecord};

pub const MUTATIONS_SUFFIX: &str = "_mutations.csv";

/// Index of the status column in a PIT csv row
const STATUS_COLUMN: usize = 5;
const KILLED: &str = "KILLED";

/// Reads PIT `mutations.csv` reports laid out as `<root>/<project>/<class>_mutations.csv`
#[derive(Debug, Clone)]
pub struct PitCsvReader {
    root: PathBuf,
}

impl PitCsvReader {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn path_for(&self, project: &str, class_name: &str) -> PathBuf {
        self.root
            .join(project)
            .join(format!("{class_name}{MUTATIONS_SUFFIX}"))
    }

    /// Classes of a project that have a mutation report, sorted by name
    pub fn available_classes(&self, project: &str) -> AppResult<Vec<String>> {
        // Only the file name is a pattern; the directory is matched literally
        let dir = self.root.join(project);
        let pattern = glob::Pattern::escape(&dir.to_string_lossy());
        let pattern = Path::new(&pattern).join(format!("*{MUTATIONS_SUFFIX}"));
        let pattern = pattern.to_string_lossy();
        let paths = glob::glob(&pattern).map_err(|e| {
            AppError::Custom(format!("Invalid glob pattern '{pattern}': {e}"))
        })?;

        let mut classes = Vec::new();
        for entry in paths {
            match entry {
                Ok(path) => {
                    if let Some(class_name) = path
                        .file_name()
                        .and_then(|name| name.to_str())
                        .and_then(|name| name.strip_suffix(MUTATIONS_SUFFIX))
                    {
                        classes.push(class_name.to_string());
                    }
                }
                Err(e) => info!("Skipping unreadable entry: {e}"),
            }
        }
        classes.sort();
        Ok(classes)
    }
}

impl MutationSource for PitCsvReader {
    fn count_for_test_class(&self, project: &str, class_name: &str) -> AppResult<MutationRecord> {
        let path = self.path_for(project, class_name);
        debug!("Reading {}", path.display());
        let contents = fs::read_to_string(&path).map_err(|source| AppError::InputRead {
            path: path.clone(),
            source,
        })?;
        count_mutants(&path, &contents)
    }
}

/// Counts rows and KILLED rows of a PIT csv report
pub fn count_mutants(path: &Path, contents: &str) -> AppResult<MutationRecord> {
    let mut record = MutationRecord::new(0, 0);
    for (index, row) in contents.lines().enumerate() {
        if row.trim().is_empty() {
            continue;
        }
        let status = row
            .split(',')
            .nth(STATUS_COLUMN)
            .ok_or_else(|| AppError::MalformedCsv {
                path: path.to_path_buf(),
                line: index + 1,
                reason: format!("expected at least {} columns", STATUS_COLUMN + 1),
            })?;
        record.total_mutants += 1;
        if status.trim() == KILLED {
            record.killed_mutants += 1;
        }
    }
    Ok(record)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    const REPORT: &str = "\
Parser.java,org.jsoup.parser.Parser,org.pitest.mutationtest.engine.gregor.mutators.ReturnValsMutator,parse,32,KILLED,org.jsoup.parser.ParserTest.testParse
Parser.java,org.jsoup.parser.Parser,org.pitest.mutationtest.engine.gregor.mutators.VoidMethodCallMutator,parse,40,SURVIVED,none

Token.java,org.jsoup.parser.Token,org.pitest.mutationtest.engine.gregor.mutators.NegateConditionalsMutator,isStartTag,77,KILLED,org.jsoup.parser.ParserTest.testTags
Token.java,org.jsoup.parser.Token,org.pitest.mutationtest.engine.gregor.mutators.MathMutator,size,90,NO_COVERAGE,none
";

    #[test]
    fn counts_rows_and_killed_rows() {
        let record = count_mutants(Path::new("report.csv"), REPORT).unwrap();
        assert_eq!(record, MutationRecord::new(4, 2));
    }

    #[test]
    fn empty_report_has_no_mutants() {
        let record = count_mutants(Path::new("report.csv"), "\n").unwrap();
        assert_eq!(record, MutationRecord::new(0, 0));
    }

    #[test]
    fn short_row_is_malformed() {
        let err = count_mutants(Path::new("report.csv"), "a,b,c,d,e,KILLED\na,b,c\n").unwrap_err();
        match err {
            AppError::MalformedCsv { line, .. } => assert_eq!(line, 2),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn reads_report_from_project_directory() {
        let dir = tempdir().unwrap();
        let project_dir = dir.path().join("jsoup");
        fs::create_dir_all(&project_dir).unwrap();
        fs::write(
            project_dir.join("org.jsoup.parser.ParserTest_mutations.csv"),
            REPORT,
        )
        .unwrap();

        let reader = PitCsvReader::new(dir.path());
        let record = reader
            .count_for_test_class("jsoup", "org.jsoup.parser.ParserTest")
            .unwrap();
        assert_eq!(record, MutationRecord::new(4, 2));
    }

    #[test]
    fn missing_report_is_an_input_error() {
        let dir = tempdir().unwrap();
        let reader = PitCsvReader::new(dir.path());
        let err = reader.count_for_test_class("jsoup", "Missing").unwrap_err();
        assert!(matches!(err, AppError::InputRead { .. }));
    }

    #[test]
    fn lists_available_classes() {
        let dir = tempdir().unwrap();
        let project_dir = dir.path().join("jsoup");
        fs::create_dir_all(&project_dir).unwrap();
        for name in ["b.BTest_mutations.csv", "a.ATest_mutations.csv", "notes.txt"] {
            fs::write(project_dir.join(name), "").unwrap();
        }

        let reader = PitCsvReader::new(dir.path());
        assert_eq!(
            reader.available_classes("jsoup").unwrap(),
            vec!["a.ATest".to_string(), "b.BTest".to_string()]
        );
    }

    #[test]
    fn lists_classes_under_a_root_with_glob_characters() {
        let dir = tempdir().unwrap();
        let root = dir.path().join("runs[2017]*?");
        let project_dir = root.join("jsoup");
        fs::create_dir_all(&project_dir).unwrap();
        fs::write(project_dir.join("a.ATest_mutations.csv"), REPORT).unwrap();

        let reader = PitCsvReader::new(&root);
        assert_eq!(
            reader.available_classes("jsoup").unwrap(),
            vec!["a.ATest".to_string()]
        );
        assert_eq!(
            reader.count_for_test_class("jsoup", "a.ATest").unwrap(),
            MutationRecord::new(4, 2)
        );
    }
}
