use serde_json::Value;

use crate::domain::error::{IngestError, IngestResult};

/// A decoded notification payload. The content is opaque structured data and is
/// persisted verbatim; the only field the sink interprets is `id`.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    payload: Value,
}

impl Report {
    /// Decodes the notification message text. Any JSON document is accepted
    /// here; the `id` requirement is only enforced when a storage key is needed.
    pub fn from_message(message: &str) -> IngestResult<Self> {
        let payload = serde_json::from_str(message)?;
        Ok(Self { payload })
    }

    /// The required `id` field, used as the primary key in both stores.
    pub fn result_id(&self) -> IngestResult<&str> {
        self.payload
            .get("id")
            .and_then(Value::as_str)
            .ok_or(IngestError::MissingResultId)
    }

    /// Object key for the archival copy: `<id>/data.json`.
    pub fn archive_key(&self) -> IngestResult<String> {
        Ok(format!("{}/data.json", self.result_id()?))
    }

    pub fn payload(&self) -> &Value {
        &self.payload
    }

    pub fn to_json(&self) -> String {
        self.payload.to_string()
    }

    /// Serialized payload as UTF-8 bytes, the form written to both stores.
    pub fn to_bytes(&self) -> Vec<u8> {
        self.to_json().into_bytes()
    }

    pub fn to_pretty_json(&self) -> String {
        serde_json::to_string_pretty(&self.payload).unwrap_or_else(|_| self.to_json())
    }
}
