use aws_config::BehaviorVersion;
use aws_sdk_dynamodb::Client as DynamoDbClient;
use aws_sdk_s3::Client as S3Client;
use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use shared::{init_telemetry, DynamoResultStore, S3ReportArchive};
use tracing::{error, info};

use report_ingestor::envelope::NotificationBatch;
use report_ingestor::processor::IngestProcessor;
use report_ingestor::response::Ack;

async fn function_handler(
    event: LambdaEvent<NotificationBatch>,
    processor: &IngestProcessor<DynamoResultStore, S3ReportArchive>,
) -> Result<Ack, Error> {
    let (batch, context) = event.into_parts();

    info!(
        record_count = batch.records.len(),
        request_id = %context.request_id,
        "Processing SNS notification records"
    );

    match processor.process_records(batch.records).await {
        Ok(stored) => {
            info!(
                stored,
                request_id = %context.request_id,
                "All decodable records stored"
            );
            Ok(Ack::ok())
        }
        Err(e) => {
            error!(
                error = %e,
                request_id = %context.request_id,
                "Failed to process notification batch"
            );
            Err(Error::from(e))
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    init_telemetry().map_err(|e| {
        eprintln!("Failed to initialize telemetry: {e}");
        Error::from(e.to_string())
    })?;

    info!("Report ingestor starting...");

    let aws_config = aws_config::defaults(BehaviorVersion::latest()).load().await;
    let processor = IngestProcessor::new(
        DynamoResultStore::new(DynamoDbClient::new(&aws_config)),
        S3ReportArchive::new(S3Client::new(&aws_config)),
    );

    run(service_fn(|event| function_handler(event, &processor))).await
}
