use std::{io, path::PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum MecabError {
    // タブが無い・表層形が空
    #[error("Malformed token line: {line:?}")]
    MalformedToken { line: String },
}

#[derive(Debug, Error)]
pub enum AnalyzerError {
    #[error("Command {program:?} is not found")]
    CommandNotFound { program: String },

    #[error("Dictionary is not found in {}", directory.display())]
    DictionaryNotFound { directory: PathBuf },

    #[error("Unknown error occurred (exit code {code:?}): {message}")]
    Failed { code: Option<i32>, message: String },

    #[error("Failed to communicate with analyzer")]
    Io(#[from] io::Error),
}
