//! # hello-change
//!
//! Interactive cash register. Commands are read from stdin and replies are
//! written to stdout; logs go to stderr.
//!
//! ## Running
//! ```bash
//! # Start with an empty drawer
//! hello-change
//!
//! # Start with one $20, two $5 and four $1 bills, logging register commits
//! HELLO_CHANGE_SEED="1 0 2 0 4" HELLO_CHANGE_LOG=hello_change_core=debug hello-change
//! ```

use std::sync::Arc;

use anyhow::Context;
use hello_change_cli::{CliConfig, Interpreter};
use hello_change_core::CashRegister;
use tokio::io::BufReader;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::load().context("failed to load configuration")?;
    init_tracing(&config.log_filter);

    info!(seed = %config.seed, "Starting cash register");

    let register = Arc::new(CashRegister::with_contents(config.seed));
    let interpreter = Interpreter::new(register);

    interpreter
        .run(
            BufReader::new(tokio::io::stdin()),
            tokio::io::stdout(),
            &config.banner,
        )
        .await
        .context("interpreter I/O failed")?;

    Ok(())
}

/// Initializes the tracing subscriber on stderr.
///
/// `RUST_LOG` wins over the configured filter when set.
fn init_tracing(fallback: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}
