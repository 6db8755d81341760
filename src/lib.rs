// Public API exports (shared between WASM and native)
pub mod routing;
pub mod shared;

// Dioxus front end
pub mod app;

// Native-only modules (NOT compiled for WASM)
#[cfg(not(target_arch = "wasm32"))]
pub mod config;
#[cfg(not(target_arch = "wasm32"))]
pub mod server;
