//! Knowledge bucket ingestor entry point.

use std::process;

use tracing::error;
use tracing_subscriber::EnvFilter;

use knowledge_ingestor::Dependencies;

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let deps = match Dependencies::new().await {
        Ok(deps) => deps,
        Err(e) => {
            error!(error = %e, "Failed to initialize dependencies");
            eprintln!("ERROR: {}", e);
            process::exit(1);
        }
    };

    // Per-entry failures are reported in the summary; only client
    // construction failures change the exit status.
    deps.ingestor.run().await;
}
