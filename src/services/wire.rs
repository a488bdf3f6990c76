use crate::models::payment::Payment;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum WireError {
    #[error("failed to encode payment: {0}")]
    Encode(#[source] serde_json::Error),
    #[error("failed to decode payment: {0}")]
    Decode(#[source] serde_json::Error),
}

pub fn encode(payment: &Payment) -> Result<String, WireError> {
    serde_json::to_string(payment).map_err(WireError::Encode)
}

pub fn encode_pretty(payment: &Payment) -> Result<String, WireError> {
    serde_json::to_string_pretty(payment).map_err(WireError::Encode)
}

/// Missing keys fall back to their defaults, unknown keys are ignored.
pub fn decode(raw: &str) -> Result<Payment, WireError> {
    serde_json::from_str(raw).map_err(|e| {
        debug!("Rejected payment payload ({} bytes): {}", raw.len(), e);
        WireError::Decode(e)
    })
}

pub fn decode_slice(raw: &[u8]) -> Result<Payment, WireError> {
    serde_json::from_slice(raw).map_err(|e| {
        debug!("Rejected payment payload ({} bytes): {}", raw.len(), e);
        WireError::Decode(e)
    })
}
