pub mod config;
pub mod dynamodb;
pub mod s3;

use async_trait::async_trait;

use crate::domain::{IngestResult, Report};

pub use dynamodb::DynamoResultStore;
pub use s3::S3ReportArchive;

/// Row-per-result storage keyed by the payload's `id`.
#[async_trait]
pub trait ResultStore: Send + Sync {
    async fn put_result(&self, result_id: &str, report: &Report) -> IngestResult<()>;
}

/// Archival object storage for the full serialized payload.
#[async_trait]
pub trait ReportArchive: Send + Sync {
    async fn put_report(&self, key: &str, report: &Report) -> IngestResult<()>;
}
