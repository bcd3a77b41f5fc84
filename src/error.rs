use std::path::PathBuf;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Broad category of an [Error], independent of its message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidShape,
    InvalidDatatype,
    InvalidName,
    DuplicateName,
    NotFound,
    NotWritable,
    ShapeMismatch,
    TypeMismatch,
    Closed,
    IoFailure,
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid shape: {0}")]
    InvalidShape(String),
    #[error("invalid datatype: {0}")]
    InvalidDatatype(String),
    #[error("invalid dataset name {0:?}")]
    InvalidName(String),
    #[error("dataset {0:?} already exists")]
    DuplicateName(String),
    #[error("dataset {0:?} not found")]
    DatasetNotFound(String),
    #[error("file not found: {}", .0.display())]
    FileNotFound(PathBuf),
    #[error("not a valid container: {0}")]
    InvalidContainer(String),
    #[error("container is open read-only")]
    NotWritable,
    #[error("container is closed")]
    Closed,
    #[error("buffer holds {actual} bytes, dataset expects {expected}")]
    ShapeMismatch { expected: u64, actual: u64 },
    #[error("element type {actual} does not match dataset type {expected}")]
    TypeMismatch {
        expected: &'static str,
        actual: &'static str,
    },
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    SerdeJson(#[from] serde_json::Error),
}

impl Error {
    pub fn invalid_shape(message: impl Into<String>) -> Self {
        Self::InvalidShape(message.into())
    }

    pub fn invalid_container(message: impl Into<String>) -> Self {
        Self::InvalidContainer(message.into())
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::InvalidShape(_) => ErrorKind::InvalidShape,
            Error::InvalidDatatype(_) => ErrorKind::InvalidDatatype,
            Error::InvalidName(_) => ErrorKind::InvalidName,
            Error::DuplicateName(_) => ErrorKind::DuplicateName,
            Error::DatasetNotFound(_) | Error::FileNotFound(_) | Error::InvalidContainer(_) => {
                ErrorKind::NotFound
            }
            Error::NotWritable => ErrorKind::NotWritable,
            Error::Closed => ErrorKind::Closed,
            Error::ShapeMismatch { .. } => ErrorKind::ShapeMismatch,
            Error::TypeMismatch { .. } => ErrorKind::TypeMismatch,
            Error::Io(_) | Error::SerdeJson(_) => ErrorKind::IoFailure,
        }
    }
}
