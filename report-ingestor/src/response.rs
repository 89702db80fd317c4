use serde::{Deserialize, Serialize};

/// Fixed acknowledgment returned for a fully processed batch.
#[derive(Debug, Serialize, Deserialize)]
pub struct Ack {
    pub message: String,
}

impl Ack {
    pub fn ok() -> Self {
        Self {
            message: "ok".to_string(),
        }
    }
}
