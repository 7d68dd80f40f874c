use std::net::SocketAddr;

use anyhow::Result;
use clap::Parser;
use shortforge_core::Upstream;
use shortforge_server::router;
use shortforge_server::state::AppState;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "shortforge-server")]
#[command(about = "Serve the shortforge short-form video blueprint designer")]
struct Cli {
    /// Address to listen on
    #[arg(long, default_value = "127.0.0.1:3000")]
    bind: SocketAddr,

    /// Override the chat completions endpoint
    #[arg(long)]
    api_url: Option<String>,

    /// Override the model identifier
    #[arg(long)]
    model: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,shortforge=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut upstream = Upstream::default();
    if let Some(api_url) = cli.api_url {
        upstream.api_url = api_url;
    }
    if let Some(model) = cli.model {
        upstream.model = model;
    }

    let app = router(AppState { upstream });

    tracing::info!("shortforge server listening on {}", cli.bind);
    let listener = tokio::net::TcpListener::bind(cli.bind).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
