//! Gravesite headless client.
//!
//! Plays the Gravesite Plain with an autopilot player and prints every round.
//!
//! ```bash
//! GRAVESITE_SEED=7 GRAVESITE_TURNS=50 cargo run -p gravesite-client
//! ```

use anyhow::Result;
use gravesite_client::{ClientConfig, run};

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = ClientConfig::from_env()?;
    let stdout = std::io::stdout();
    let summary = run(&config, &mut stdout.lock())?;

    tracing::debug!(?summary, "client shutdown complete");
    Ok(())
}
