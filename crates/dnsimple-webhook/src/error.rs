use thiserror::Error;

#[derive(Error, Debug)]
pub enum WebhookError {
    /// The payload is not valid JSON or does not fit the selected event shape.
    #[error("failed to decode webhook payload: {0}")]
    Decode(#[from] serde_json::Error),
}
