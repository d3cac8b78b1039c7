// Fatal pipeline failures.
//
// Both kinds abort the run. They are typed (rather than bare anyhow strings)
// so callers can tell a missing corpus apart from an unwritable output
// directory via `downcast_ref`.

use std::fmt;
use std::io;
use std::path::PathBuf;

#[derive(Debug)]
pub enum PipelineError {
    /// A corpus file is missing, unreadable, or not valid UTF-8.
    InputUnavailable { path: PathBuf, source: io::Error },
    /// An output directory or file could not be created or written.
    OutputWriteFailure { path: PathBuf, source: io::Error },
}

impl fmt::Display for PipelineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PipelineError::InputUnavailable { path, source } => {
                write!(f, "Cannot read corpus {}: {source}", path.display())
            }
            PipelineError::OutputWriteFailure { path, source } => {
                write!(f, "Cannot write {}: {source}", path.display())
            }
        }
    }
}

impl std::error::Error for PipelineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PipelineError::InputUnavailable { source, .. } => Some(source),
            PipelineError::OutputWriteFailure { source, .. } => Some(source),
        }
    }
}
