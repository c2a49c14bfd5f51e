//! Hello server CLI
//!
//! Serves the hello API and the built frontend.

use std::path::PathBuf;

use clap::Parser;
use hello_server::{load_config, Config};
use tracing::Level;

#[derive(Parser, Debug)]
#[command(name = "hello-server")]
#[command(about = "API and static file server for the hello page")]
#[command(version)]
struct Args {
    /// Path to configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Listen port (overrides config file)
    #[arg(short, long)]
    port: Option<u16>,

    /// Directory holding the built frontend (overrides config file)
    #[arg(long)]
    static_dir: Option<PathBuf>,

    /// Log level
    #[arg(short, long, default_value = "info")]
    log_level: Level,
}

impl Args {
    /// Configuration file contents (or defaults) with command line overrides applied
    fn resolve_config(&self) -> hello_server::Result<Config> {
        let mut config = match &self.config {
            Some(path) => load_config(path)?,
            None => Config::default(),
        };
        if let Some(port) = self.port {
            config.server.port = port;
        }
        if let Some(dir) = &self.static_dir {
            config.static_files.dir = dir.clone();
        }
        Ok(config)
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(args.log_level)
        .init();

    let config = args.resolve_config()?;
    tracing::debug!(
        "Listening on {}:{}, static files {} from {:?}",
        config.server.host,
        config.server.port,
        if config.static_files.enabled { "enabled" } else { "disabled" },
        config.static_files.dir
    );

    hello_server::run(config).await?;

    Ok(())
}
