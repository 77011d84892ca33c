//! Standalone login fixture server
//!
//! Serves the same application the suite tests against, for manual
//! runs: `GATECHECK_FIXTURE_ADDR=127.0.0.1:8780 gatecheck-fixture`

use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let addr = std::env::var("GATECHECK_FIXTURE_ADDR")
        .unwrap_or_else(|_| "127.0.0.1:8780".to_string());

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Login fixture listening on http://{}", listener.local_addr()?);

    gatecheck_fixture::serve(listener).await?;
    Ok(())
}
