use std::sync::Arc;
use thiserror::Error;

/// Failure produced by a component loader.
///
/// Cloneable so a single failed load can be handed to every navigation that
/// was waiting on it.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{message}")]
pub struct LoadError {
    message: Arc<str>,
}

impl LoadError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: Arc::from(message.into()),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

#[derive(Debug, Error)]
pub enum RoutingError {
    #[error("Duplicate route path: {0}")]
    DuplicatePath(String),

    #[error("Duplicate route name: {0}")]
    DuplicateName(String),

    #[error("Invalid route path (must start with '/'): {0}")]
    InvalidPath(String),

    #[error("Route name must not be empty (path: {0})")]
    EmptyName(String),

    #[error("Unknown route name: {0}")]
    UnknownRouteName(String),

    #[error("Failed to load component for route {name}: {source}")]
    ComponentLoad {
        name: &'static str,
        #[source]
        source: LoadError,
    },
}

#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Dist directory not found: {0}")]
    DistNotFound(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, RoutingError>;
