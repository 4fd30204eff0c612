use thiserror::Error;

#[derive(Debug, Error)]
pub enum MessageError {
    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Failed to decode message: {0}")]
    Decode(String),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl From<serde_json::Error> for MessageError {
    fn from(error: serde_json::Error) -> Self {
        MessageError::Decode(error.to_string())
    }
}
