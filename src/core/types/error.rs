use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Io(#[from] io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error("Failed to read {path}: {source}")]
    InputRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Malformed mutation csv {path}:{line}: {reason}")]
    MalformedCsv {
        path: PathBuf,
        line: usize,
        reason: String,
    },

    #[error("Malformed selection file {path}:{line}: {reason}")]
    MalformedSelection {
        path: PathBuf,
        line: usize,
        reason: String,
    },

    #[error("Project '{0}' has no entry in the selected classes file")]
    ProjectNotSelected(String),

    #[error("No mutation score was produced; cannot compute a median")]
    EmptyScoreList,

    #[error("{0}")]
    Custom(String),
}

pub type AppResult<T> = Result<T, AppError>;
