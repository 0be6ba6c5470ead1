use anyhow::Context;
use clap::Parser;
use redis_tour::{tour, Config, Session};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // stdout carries the operations, logs go to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = Config::parse();

    let session = Session::connect(&config)
        .await
        .context("failed to connect")?;

    let transcript = tour::run(session, &config)
        .await
        .into_result()
        .context("tour aborted")?;

    info!(operations = transcript.len(), "tour finished");

    Ok(())
}
