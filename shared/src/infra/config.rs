use crate::domain::{IngestError, IngestResult};

/// Storage targets are read from the environment at write time, never at
/// startup: a missing variable fails the invocation at its first write, and a
/// batch that writes nothing never needs them.
pub fn table_name() -> IngestResult<String> {
    require_env("TABLE_NAME")
}

pub fn bucket_name() -> IngestResult<String> {
    require_env("BUCKET_NAME")
}

fn require_env(name: &'static str) -> IngestResult<String> {
    std::env::var(name).map_err(|_| IngestError::MissingEnvVar(name))
}
