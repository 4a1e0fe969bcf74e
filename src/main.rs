use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use funserver::config::Config;
use funserver::http::connection::HttpHandler;
use funserver::server::{listener, router::Router};
use funserver::services::{DiskFiles, HttpFetcher, ThreadRandom};

#[derive(Debug, Parser)]
#[command(version, about = "Small hand-parsed HTTP/1.1 server")]
struct Cli {
    /// Port to listen on (default 9000)
    port: Option<u16>,

    /// Optional YAML configuration file
    #[arg(long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .with_level(true)
        .init();

    let cli = Cli::parse();
    let cfg = Config::load(cli.config.as_deref(), cli.port).context("Failed to load configuration")?;

    let router = Router::new(DiskFiles, ThreadRandom, HttpFetcher::new()?, &cfg);
    let handler = HttpHandler::new(router, cfg.read_timeout());

    tokio::select! {
        res = listener::run(&cfg.listen_addr, &handler) => {
            res?;
        }

        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Shutdown signal received");
        }
    }

    Ok(())
}
