use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use verbcards_lib::config::ServerConfig;
use verbcards_lib::flashcards::{CardOrigin, CardStore};
use verbcards_lib::server;

#[derive(Parser)]
#[command(name = "verbcards", about = "Serve Arabic verb flashcards over HTTP", version)]
struct Cli {
    /// TOML config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// JSON data file holding the `verbs` list
    #[arg(long)]
    data: Option<PathBuf>,

    /// Address to listen on
    #[arg(long)]
    host: Option<String>,

    /// Port to listen on
    #[arg(long)]
    port: Option<u16>,
}

impl Cli {
    /// Config file values, overridden by any flags given on the command line
    fn resolve_config(&self) -> Result<ServerConfig> {
        let mut config = match &self.config {
            Some(path) => ServerConfig::from_file(path)
                .with_context(|| format!("Failed to read config {}", path.display()))?,
            None => ServerConfig::default(),
        };

        if let Some(data) = &self.data {
            config.data_file = data.clone();
        }
        if let Some(host) = &self.host {
            config.host = host.clone();
        }
        if let Some(port) = self.port {
            config.port = port;
        }

        Ok(config)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let config = cli.resolve_config()?;

    let store = CardStore::load(&config.data_file);
    if store.origin() == CardOrigin::Sample {
        log::warn!("Serving {} built-in sample cards", store.size());
    }

    let bind_addr = config.bind_addr();
    let server = server::start_server(&bind_addr, store)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to start server on {}: {}", bind_addr, e))?;

    tokio::signal::ctrl_c()
        .await
        .context("Failed to listen for Ctrl-C")?;

    server.shutdown().await;
    Ok(())
}
