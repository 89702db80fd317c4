use async_trait::async_trait;
use aws_sdk_dynamodb::{
    primitives::Blob, types::AttributeValue, Client as DynamoDbClient,
};
use tracing::info;

use crate::domain::{IngestError, IngestResult, Report};
use crate::infra::{config, ResultStore};

/// DynamoDB-backed result store. One item per payload:
/// `result_id` (S) holds the id, `report` (B) the serialized payload bytes.
/// The target table comes from `TABLE_NAME`, resolved per write.
pub struct DynamoResultStore {
    client: DynamoDbClient,
}

impl DynamoResultStore {
    pub fn new(client: DynamoDbClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ResultStore for DynamoResultStore {
    async fn put_result(&self, result_id: &str, report: &Report) -> IngestResult<()> {
        let table_name = config::table_name()?;

        let output = self
            .client
            .put_item()
            .table_name(&table_name)
            .item("result_id", AttributeValue::S(result_id.to_string()))
            .item("report", AttributeValue::B(Blob::new(report.to_bytes())))
            .send()
            .await
            .map_err(|e| IngestError::TableWrite(e.to_string()))?;

        info!(
            result_id,
            table_name = %table_name,
            response = ?output,
            "Result row stored"
        );

        Ok(())
    }
}
