use thiserror::Error;

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("notification message is not valid JSON: {0}")]
    MalformedMessage(#[from] serde_json::Error),

    #[error("envelope record carries no notification message string")]
    MissingMessage,

    #[error("decoded payload has no string 'id' field")]
    MissingResultId,

    #[error("missing required environment variable {0}")]
    MissingEnvVar(&'static str),

    #[error("result table write failed: {0}")]
    TableWrite(String),

    #[error("report archive write failed: {0}")]
    ArchiveWrite(String),
}

pub type IngestResult<T> = Result<T, IngestError>;
