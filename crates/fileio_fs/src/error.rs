use std::fmt::{Display, Formatter};
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// The file system operation that produced an error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    ListDir,
    Read,
    Write,
    Remove,
}

impl Display for Operation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Operation::ListDir => "read directory",
            Operation::Read => "read file",
            Operation::Write => "write file",
            Operation::Remove => "remove file",
        };
        f.write_str(name)
    }
}

/// Coarse classification of a failure, derived from the host error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    PermissionDenied,
    InvalidPath,
    Other,
}

impl From<io::ErrorKind> for ErrorKind {
    fn from(kind: io::ErrorKind) -> Self {
        match kind {
            io::ErrorKind::NotFound => ErrorKind::NotFound,
            io::ErrorKind::PermissionDenied => ErrorKind::PermissionDenied,
            io::ErrorKind::NotADirectory
            | io::ErrorKind::IsADirectory
            | io::ErrorKind::InvalidInput
            | io::ErrorKind::InvalidFilename => ErrorKind::InvalidPath,
            _ => ErrorKind::Other,
        }
    }
}

/// Error type for file operations.
///
/// The host error is carried unchanged as the source; nothing here retries or
/// rewrites it.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Failed to {operation} {}: {source}", .path.display())]
    Io {
        operation: Operation,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to serialize content for {}: {source}", .path.display())]
    Serialize {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl Error {
    pub(crate) fn io(operation: Operation, path: &Path, source: io::Error) -> Self {
        Self::Io { operation, path: path.to_path_buf(), source }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Io { source, .. } => source.kind().into(),
            Error::Serialize { .. } => ErrorKind::Other,
        }
    }

    pub fn path(&self) -> &Path {
        match self {
            Error::Io { path, .. } | Error::Serialize { path, .. } => path,
        }
    }

    /// The operation that failed, `None` for serialization failures.
    pub fn operation(&self) -> Option<Operation> {
        match self {
            Error::Io { operation, .. } => Some(*operation),
            Error::Serialize { .. } => None,
        }
    }

    /// The untouched host error, if this failure came from the file system.
    pub fn io_error(&self) -> Option<&io::Error> {
        match self {
            Error::Io { source, .. } => Some(source),
            Error::Serialize { .. } => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
