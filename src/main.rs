//! RAG chat web client - main entry point
//!
//! Builds the router for the target platform and launches the Dioxus app.

use rag_chat_web::app::launch;
use rag_chat_web::routing::HistoryMode;

// WASM entry point (browser)
#[cfg(target_arch = "wasm32")]
fn main() {
    web_sys::console::log_1(&"[WASM] RAG chat web - WASM initialized".into());
    if let Err(e) = launch(HistoryMode::Browser) {
        web_sys::console::error_1(&format!("Failed to start: {}", e).into());
    }
}

// Native client (desktop) - in-memory history
#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    tracing::info!("Starting RAG chat web client...");
    launch(HistoryMode::memory())?;
    Ok(())
}
