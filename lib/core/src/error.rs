use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Collection name must not be empty")]
    EmptyName,

    #[error("Invalid vector dimension: {0}")]
    InvalidDimension(usize),

    #[error("Invalid segment file size: {0} MB")]
    InvalidSegmentFileSize(u64),

    #[error("Unknown metric type: {0}")]
    UnknownMetric(String),

    #[error("Collection already exists: {0}")]
    CollectionExists(String),

    #[error("Collection not found: {0}")]
    CollectionNotFound(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}
