//! Pokedex CLI - An interactive client for the Pokemon API
//!
//! Reads commands from stdin and answers them from the upstream API through
//! the response cache.

use anyhow::Context;
use tokio::io::{self, BufReader};
use tokio::signal;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pokedex_cli::repl::{run_until_shutdown, SessionEnd};
use pokedex_cli::{AppContext, Config};

/// Main entry point for the Pokedex REPL.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging (stderr)
/// 2. Load configuration from environment variables
/// 3. Create the response cache and start its reaper
/// 4. Run the REPL until `exit`, end of input, or Ctrl+C
/// 5. Stop the reaper
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Defaults to "warn" so logs stay out of the way of the prompt,
    // can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pokedex_cli=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config::from_env();
    info!(
        "Configuration loaded: base_url={}, cache_ttl={}s, page_size={}",
        config.base_url, config.cache_ttl, config.page_size
    );

    let (ctx, mut reaper) =
        AppContext::from_config(&config).context("failed to initialize the Pokedex")?;
    info!("Response cache initialized");

    let mut stdout = io::stdout();
    let stdin = BufReader::new(io::stdin());

    let result = run_until_shutdown(&ctx, stdin, &mut stdout, shutdown_signal())
        .await
        .context("terminal I/O failed");

    reaper.stop().await;
    info!("Pokedex shutdown complete");

    if matches!(result, Ok(SessionEnd::Interrupted)) {
        // The abandoned stdin read sits on a blocking thread that runtime
        // shutdown would wait for
        std::process::exit(0);
    }

    result.map(|_| ())
}

/// Waits for Ctrl+C.
///
/// If the handler cannot be installed, waits forever so the REPL keeps running.
async fn shutdown_signal() {
    if signal::ctrl_c().await.is_err() {
        std::future::pending::<()>().await;
    }
    info!("Received Ctrl+C, initiating shutdown...");
}
