#![allow(clippy::missing_errors_doc)]
use lambda_runtime::{Error, LambdaEvent};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, error, info};

use crate::core::models::Message;
use crate::errors::MessageError;
use crate::extract::extract_messages;

/// What one invocation decoded, in record order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BatchSummary {
    pub processed: usize,
    pub messages: Vec<Message>,
}

/// Decodes every record of `event`, aborting on the first malformed one.
pub fn process_event(event: &Value) -> Result<BatchSummary, MessageError> {
    let mut messages = Vec::new();

    for (index, decoded) in extract_messages(event)?.enumerate() {
        match decoded {
            Ok(message) => {
                info!(
                    ticker = message.ticker(),
                    file_path = message.file_path(),
                    "Decoded fetch message"
                );
                messages.push(message);
            }
            Err(e) => {
                error!(index, "Failed to decode SQS record: {}", e);
                return Err(e);
            }
        }
    }

    Ok(BatchSummary {
        processed: messages.len(),
        messages,
    })
}

/// Lambda handler for the Worker entrypoint. Decodes the SQS batch into fetch messages.
pub async fn function_handler(event: LambdaEvent<Value>) -> Result<BatchSummary, Error> {
    let (payload, context) = event.into_parts();
    debug!(
        request_id = %context.request_id,
        "Worker Lambda received SQS event payload: {:?}",
        payload
    );

    let summary = process_event(&payload).map_err(|e| {
        error!("Failed to extract messages: {}", e);
        Error::from(e)
    })?;

    info!(processed = summary.processed, "Finished decoding SQS batch");
    Ok(summary)
}

pub use self::function_handler as handler;
