use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

use headlines::api::{self, AppState};
use headlines::config::Config;
use headlines::storage::{default_articles, load_seed_file, Store};

/// Default config path (~/.config/headlines/config.toml)
fn default_config_path() -> Result<PathBuf> {
    let home = std::env::var("HOME").context("HOME environment variable not set")?;
    Ok(PathBuf::from(home)
        .join(".config")
        .join("headlines")
        .join("config.toml"))
}

#[derive(Parser, Debug)]
#[command(name = "headlines", about = "News aggregation and bookmarking service")]
struct Args {
    /// Config file (default: ~/.config/headlines/config.toml)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Address to listen on, overriding bind_addr from the config file
    #[arg(long, value_name = "ADDR")]
    bind: Option<String>,

    /// Start with no articles
    #[arg(long)]
    no_seed: bool,
}

/// Build the store the server owns for its lifetime.
fn build_store(config: &Config, seed: bool) -> Result<Store> {
    let mut store = Store::new();
    if !seed {
        tracing::info!("Seeding disabled, starting with an empty article set");
        return Ok(store);
    }

    let drafts = match &config.seed_file {
        Some(path) => load_seed_file(path)
            .with_context(|| format!("Failed to load seed file '{}'", path.display()))?,
        None => default_articles(),
    };
    store
        .seed_articles(drafts)
        .context("Failed to seed articles")?;
    Ok(store)
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutting down");
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let config_path = match args.config {
        Some(path) => path,
        None => default_config_path()?,
    };
    // Read before tracing starts: the config supplies the default log filter
    let mut config = Config::load(&config_path)
        .with_context(|| format!("Failed to load config '{}'", config_path.display()))?;

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .or_else(|_| tracing_subscriber::EnvFilter::try_new(&config.log_filter))
        .context("Invalid log_filter in config")?;
    tracing_subscriber::fmt().with_env_filter(filter).init();

    if let Some(bind) = args.bind {
        config.bind_addr = bind;
    }

    let store = build_store(&config, config.seed_articles && !args.no_seed)?;
    tracing::info!(
        articles = store.article_count(),
        cors = config.cors_enabled,
        "Store ready"
    );

    let state = AppState::new(store.into_shared())
        .with_max_search_query_length(config.max_search_query_length);
    let app = api::router(state, config.cors_enabled);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .with_context(|| format!("Failed to bind {}", config.bind_addr))?;
    tracing::info!(addr = %config.bind_addr, "Listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    Ok(())
}
