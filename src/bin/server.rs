//! Static server for the built web client.
//!
//! Run with: cargo run --bin server --features server -- --dist-dir dist

use clap::Parser;

use rag_chat_web::app::app_routes;
use rag_chat_web::config::ServerConfig;
use rag_chat_web::server::serve;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let config = ServerConfig::parse();
    tracing::info!("Starting RAG chat web server...");

    let routes = app_routes()?;
    serve(&config, routes).await?;
    Ok(())
}
