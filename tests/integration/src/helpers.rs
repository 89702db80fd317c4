use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use shared::{
    domain::{IngestError, IngestResult, Report},
    infra::{ReportArchive, ResultStore},
};

/// In-memory result store that records every write in order. Cloning shares
/// the underlying log so tests can inspect it after handing the store to a
/// processor.
#[derive(Clone, Default)]
pub struct RecordingResultStore {
    writes: Arc<Mutex<Vec<(String, String)>>>,
    fail_on: Option<String>,
}

impl RecordingResultStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fails the write for this result id, simulating a storage-side error.
    pub fn failing_on(result_id: &str) -> Self {
        Self {
            writes: Arc::default(),
            fail_on: Some(result_id.to_string()),
        }
    }

    /// `(result_id, serialized payload)` pairs in write order.
    pub fn writes(&self) -> Vec<(String, String)> {
        self.writes.lock().unwrap().clone()
    }
}

#[async_trait]
impl ResultStore for RecordingResultStore {
    async fn put_result(&self, result_id: &str, report: &Report) -> IngestResult<()> {
        if self.fail_on.as_deref() == Some(result_id) {
            return Err(IngestError::TableWrite("simulated throttling".to_string()));
        }
        self.writes
            .lock()
            .unwrap()
            .push((result_id.to_string(), report.to_json()));
        Ok(())
    }
}

/// In-memory archive mirroring [`RecordingResultStore`], keyed by object key.
#[derive(Clone, Default)]
pub struct RecordingArchive {
    writes: Arc<Mutex<Vec<(String, Vec<u8>)>>>,
}

impl RecordingArchive {
    pub fn new() -> Self {
        Self::default()
    }

    /// `(object key, body bytes)` pairs in write order.
    pub fn writes(&self) -> Vec<(String, Vec<u8>)> {
        self.writes.lock().unwrap().clone()
    }
}

#[async_trait]
impl ReportArchive for RecordingArchive {
    async fn put_report(&self, key: &str, report: &Report) -> IngestResult<()> {
        self.writes
            .lock()
            .unwrap()
            .push((key.to_string(), report.to_bytes()));
        Ok(())
    }
}
