use shared::{
    domain::{IngestError, IngestResult, Report},
    infra::{ReportArchive, ResultStore},
};
use tracing::{error, info};

use crate::envelope::EnvelopeRecord;

/// Walks one batch of envelope records, writing every decodable payload to the
/// result store and the archive.
pub struct IngestProcessor<S, A> {
    result_store: S,
    report_archive: A,
}

impl<S, A> IngestProcessor<S, A>
where
    S: ResultStore,
    A: ReportArchive,
{
    pub fn new(result_store: S, report_archive: A) -> Self {
        Self {
            result_store,
            report_archive,
        }
    }

    /// Processes records in the order supplied. A record without a notification
    /// message, or whose message does not decode, is logged and skipped;
    /// everything else is fatal for the batch and aborts the remaining records.
    /// Returns the number of payloads stored.
    pub async fn process_records(&self, records: Vec<EnvelopeRecord>) -> IngestResult<usize> {
        let mut stored = 0;

        for record in &records {
            let report = match decode_notification(record) {
                Ok(report) => report,
                Err(e) => {
                    error!(
                        message_id = ?record.message_id(),
                        error = %e,
                        "Skipping record with undecodable notification message"
                    );
                    continue;
                }
            };

            self.store_report(&report).await?;
            stored += 1;
        }

        Ok(stored)
    }

    async fn store_report(&self, report: &Report) -> IngestResult<()> {
        info!(payload = %report.to_pretty_json(), "Decoded notification payload");

        // Key derivation fails here, before any write, when `id` is missing.
        let result_id = report.result_id()?.to_string();
        let archive_key = report.archive_key()?;

        self.result_store.put_result(&result_id, report).await?;
        self.report_archive.put_report(&archive_key, report).await?;

        Ok(())
    }
}

fn decode_notification(record: &EnvelopeRecord) -> IngestResult<Report> {
    let message = record.message().ok_or(IngestError::MissingMessage)?;
    Report::from_message(message)
}
