// This is the Lambda bootstrap entry point for the Worker function

use lambda_runtime::{Error, run, service_fn};
use tiingo_fetcher::core::config::AppConfig;

#[tokio::main]
async fn main() -> Result<(), Error> {
    let config = AppConfig::from_env()?;
    tiingo_fetcher::setup_logging_with(&config);

    run(service_fn(tiingo_fetcher::worker::handler)).await
}
