//! Placeholder API entry point.
//!
//! Loads configuration, opens the dataset and serves the REST API until
//! Ctrl+C or SIGTERM.

use placeholder_api::run;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    run().await
}
