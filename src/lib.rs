/// Tiingo fetcher - decodes fetch requests delivered to a Lambda through SQS.
///
/// Each SQS record body carries a JSON object naming a ticker and the file path
/// its data should be written to. This crate turns an SQS Lambda event into a
/// lazy sequence of typed [`Message`](core::models::Message) values.
///
/// # Architecture
///
/// The system uses:
/// - AWS Lambda for serverless execution
/// - SQS as the event source
/// - serde / `serde_json` for decoding record bodies
/// - tracing for structured logs
///
/// # Example
///
/// ```
/// use serde_json::json;
/// use tiingo_fetcher::extract::extract_messages;
///
/// let event = json!({
///     "Records": [
///         {"body": "{\"ticker\":\"AAPL\",\"file_path\":\"/data/AAPL.csv\"}"}
///     ]
/// });
///
/// for message in extract_messages(&event)? {
///     let message = message?;
///     println!("fetch {} into {}", message.ticker(), message.file_path());
/// }
/// # Ok::<(), tiingo_fetcher::errors::MessageError>(())
/// ```
// Module declarations
pub mod core;
pub mod errors;
pub mod extract;
pub mod worker;

use crate::core::config::{AppConfig, LogFormat};

/// Configure structured logging with JSON format for AWS Lambda environments.
///
/// This function sets up tracing-subscriber with a JSON formatter suitable for
/// `CloudWatch` Logs integration. Calling it again after a subscriber has been
/// installed has no effect.
///
/// # Example
///
/// ```
/// // Initialize structured logging at the start of your Lambda handler
/// tiingo_fetcher::setup_logging();
/// ```
pub fn setup_logging() {
    setup_logging_with(&AppConfig::default());
}

/// Like [`setup_logging`], but honours the configured format and level.
pub fn setup_logging_with(config: &AppConfig) {
    use tracing_subscriber::prelude::*;

    let registry = tracing_subscriber::registry();
    // try_init fails only when a subscriber is already installed
    let _ = match config.log_format {
        LogFormat::Json => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_target(true)
                    .with_filter(config.log_level),
            )
            .try_init(),
        LogFormat::Text => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(true)
                    .with_filter(config.log_level),
            )
            .try_init(),
    };
}
