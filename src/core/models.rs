use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::MessageError;

/// A request to fetch data for one ticker into a storage location.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Message {
    ticker: String,
    file_path: String,
}

impl Message {
    pub fn new(ticker: impl Into<String>, file_path: impl Into<String>) -> Self {
        Self {
            ticker: ticker.into(),
            file_path: file_path.into(),
        }
    }

    #[must_use]
    pub fn ticker(&self) -> &str {
        &self.ticker
    }

    #[must_use]
    pub fn file_path(&self) -> &str {
        &self.file_path
    }

    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String, MessageError> {
        serde_json::to_string(self).map_err(MessageError::from)
    }
}

impl TryFrom<&Value> for Message {
    type Error = MessageError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        // serde accepts `[ticker, file_path]` for structs; only objects are messages
        if !value.is_object() {
            return Err(MessageError::Decode(
                "message body is not a JSON object".to_string(),
            ));
        }
        Message::deserialize(value).map_err(MessageError::from)
    }
}

impl FromStr for Message {
    type Err = MessageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: Value = serde_json::from_str(s)?;
        Message::try_from(&value)
    }
}
