use std::fs;
use std::path::{Path, PathBuf};

use log::debug;

use crate::core::engine::traits::ClassSelector;
use crate::types::{AppError, AppResult, Candidates};

const FIELD_SEPARATOR: char = ';';

/// Selected classes file: one `project;top1;top2;worst1;worst2[;extra]` row per project.
/// Blank lines and `#` comments are ignored.
#[derive(Debug, Clone)]
pub struct SelectedClassesFile {
    path: PathBuf,
}

impl SelectedClassesFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Every (project, candidates) row in file order
    pub fn read_all(&self) -> AppResult<Vec<(String, Candidates)>> {
        let contents = fs::read_to_string(&self.path).map_err(|source| AppError::InputRead {
            path: self.path.clone(),
            source,
        })?;
        parse_selection(&self.path, &contents)
    }
}

impl ClassSelector for SelectedClassesFile {
    fn select(&self, project: &str) -> AppResult<Candidates> {
        // Re-read per project; the file is small
        let rows = self.read_all()?;
        let candidates = rows
            .into_iter()
            .find(|(name, _)| name == project)
            .map(|(_, candidates)| candidates)
            .ok_or_else(|| AppError::ProjectNotSelected(project.to_string()))?;
        debug!("Selected for {project}: {candidates:?}");
        Ok(candidates)
    }
}

pub fn parse_selection(path: &Path, contents: &str) -> AppResult<Vec<(String, Candidates)>> {
    let mut rows = Vec::new();
    for (index, raw) in contents.lines().enumerate() {
        let row = raw.trim();
        if row.is_empty() || row.starts_with('#') {
            continue;
        }
        let fields: Vec<&str> = row.split(FIELD_SEPARATOR).map(str::trim).collect();
        if fields.len() < 5 {
            return Err(AppError::MalformedSelection {
                path: path.to_path_buf(),
                line: index + 1,
                reason: format!("expected at least 5 fields, found {}", fields.len()),
            });
        }
        if let Some(blank) = fields[..5].iter().position(|f| f.is_empty()) {
            return Err(AppError::MalformedSelection {
                path: path.to_path_buf(),
                line: index + 1,
                reason: format!("field {} is empty", blank + 1),
            });
        }
        let extra = fields
            .get(5)
            .filter(|f| !f.is_empty())
            .map(|f| f.to_string());
        rows.push((
            fields[0].to_string(),
            Candidates {
                top: [fields[1].to_string(), fields[2].to_string()],
                worst: [fields[3].to_string(), fields[4].to_string()],
                extra,
            },
        ));
    }
    Ok(rows)
}
