use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors produced by the editing core.
///
/// Only `FileAccess` is ever shown to the user as a failure. `Cancelled`
/// marks a dismissed dialog and aborts the pending operation without any
/// state change, and `NoFile` marks an operation that needs a bound file
/// handle when none is set.
#[derive(Debug, Error)]
pub enum EditorError {
    #[error("cannot access '{}': {source}", path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("no file is associated with the editor")]
    NoFile,

    #[error("cancelled")]
    Cancelled,
}

impl EditorError {
    pub fn file_access(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::FileAccess {
            path: path.into(),
            source,
        }
    }

    /// True for the dismissed-dialog case, which is not reported as a failure.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }
}

pub type Result<T> = std::result::Result<T, EditorError>;
