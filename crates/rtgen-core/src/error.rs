//! Errors surfaced by the generation pipeline.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort test generation.
///
/// Unreadable sources are not errors: analysis falls back to defaults instead.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// No file location was supplied.
    #[error("No file selected")]
    NoInput,

    /// The file does not lie under the workspace root.
    #[error("File is not in a workspace: {} is outside {}", path.display(), root.display())]
    OutsideWorkspace { path: PathBuf, root: PathBuf },

    /// No ancestor directory carries a workspace root marker.
    #[error("File is not in a workspace: no root marker found above {}", .0.display())]
    NoWorkspace(PathBuf),

    /// The location names a directory or has no file name.
    #[error("Not a source file: {}", .0.display())]
    NotAFile(PathBuf),

    /// Another invocation is already generating this destination.
    #[error("Test file is already being generated: {}", .0.display())]
    InFlight(PathBuf),

    /// The destination directory or file could not be written.
    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Walking a directory for sources failed.
    #[error("Failed to walk {}: {message}", path.display())]
    Walk { path: PathBuf, message: String },
}

impl GenerateError {
    pub fn write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        GenerateError::Write {
            path: path.into(),
            source,
        }
    }

    /// Whether the error stems from bad input rather than a failed write.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            GenerateError::NoInput
                | GenerateError::OutsideWorkspace { .. }
                | GenerateError::NoWorkspace(_)
                | GenerateError::NotAFile(_)
        )
    }
}
