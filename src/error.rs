//! Error types for bvh <-> csv conversion.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("I/O error: {0}")]
    Stream(#[from] std::io::Error),

    #[error("too few arguments specified: expected at least {expected}, got {actual}")]
    TooFewArguments { expected: usize, actual: usize },

    #[error("unsupported file type: {} (expected .{expected})", .path.display())]
    UnsupportedFileType { path: PathBuf, expected: &'static str },

    #[error("no .bvh template given for {}", .path.display())]
    UnpairedArgument { path: PathBuf },

    #[error("malformed hierarchy at line {line}: {reason}")]
    MalformedHierarchy { line: usize, reason: String },
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>) -> impl FnOnce(std::io::Error) -> Error {
        let path = path.into();
        move |source| Error::Io { path, source }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
