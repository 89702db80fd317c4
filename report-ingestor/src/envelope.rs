use serde::Deserialize;
use serde_json::Value;

/// Incoming batch shape: `{"Records": [{"Sns": {"Message": "<json>"}}, ...]}`.
///
/// Records are kept as raw JSON so one malformed envelope cannot fail
/// deserialization of the whole invocation; a record missing its notification
/// message surfaces per record in the processor and is skipped there.
#[derive(Debug, Default, Deserialize)]
pub struct NotificationBatch {
    #[serde(default, rename = "Records")]
    pub records: Vec<EnvelopeRecord>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct EnvelopeRecord(Value);

impl EnvelopeRecord {
    /// The nested notification message text, when the envelope carries one.
    pub fn message(&self) -> Option<&str> {
        self.0.get("Sns")?.get("Message")?.as_str()
    }

    /// SNS message id, for diagnostics only.
    pub fn message_id(&self) -> Option<&str> {
        self.0.get("Sns")?.get("MessageId")?.as_str()
    }
}
