use async_trait::async_trait;
use aws_sdk_s3::{primitives::ByteStream, Client as S3Client};
use tracing::info;

use crate::domain::{IngestError, IngestResult, Report};
use crate::infra::{config, ReportArchive};

/// S3-backed archive. Each payload lands as one object whose body is the
/// serialized payload bytes. The target bucket comes from `BUCKET_NAME`,
/// resolved per write.
pub struct S3ReportArchive {
    client: S3Client,
}

impl S3ReportArchive {
    pub fn new(client: S3Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ReportArchive for S3ReportArchive {
    async fn put_report(&self, key: &str, report: &Report) -> IngestResult<()> {
        let bucket_name = config::bucket_name()?;

        let output = self
            .client
            .put_object()
            .bucket(&bucket_name)
            .key(key)
            .body(ByteStream::from(report.to_bytes()))
            .send()
            .await
            .map_err(|e| IngestError::ArchiveWrite(e.to_string()))?;

        info!(
            key,
            bucket_name = %bucket_name,
            response = ?output,
            "Report archived"
        );

        Ok(())
    }
}
