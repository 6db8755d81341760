//! Structured logging module for the RAG chat web client
//!
//! Provides consistent, contextual logging for route registration,
//! navigation and lazy view loading.

/// Log categories for routing operations
#[derive(Debug, Clone, Copy)]
pub enum LogOperation {
    RouteRegistration,
    Navigation,
    ComponentLoad,
    History,
    StaticServe,
}

impl LogOperation {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogOperation::RouteRegistration => "route_registration",
            LogOperation::Navigation => "navigation",
            LogOperation::ComponentLoad => "component_load",
            LogOperation::History => "history",
            LogOperation::StaticServe => "static_serve",
        }
    }
}

/// Log route table construction
pub fn log_route_table_built(route_count: usize) {
    tracing::debug!(
        operation = LogOperation::RouteRegistration.as_str(),
        route_count = route_count,
        "Route table built"
    );
}

/// Log router construction
pub fn log_router_built(history_mode: &str, route_count: usize) {
    tracing::info!(
        operation = LogOperation::RouteRegistration.as_str(),
        history_mode = history_mode,
        route_count = route_count,
        "Router created"
    );
}

/// Log navigation start
pub fn log_navigation_start(location: &str) {
    tracing::debug!(
        operation = LogOperation::Navigation.as_str(),
        location = location,
        "Navigating"
    );
}

/// Log navigation to a location no route declares
pub fn log_navigation_unmatched(location: &str) {
    tracing::warn!(
        operation = LogOperation::Navigation.as_str(),
        location = location,
        "No route matches location"
    );
}

/// Log navigation aborted by a failed load
pub fn log_navigation_aborted(location: &str, route: &str, error: &str) {
    tracing::error!(
        operation = LogOperation::Navigation.as_str(),
        location = location,
        route = route,
        error = error,
        "Navigation aborted"
    );
}

/// Log a cold component load
pub fn log_component_load_start(route: &str) {
    tracing::debug!(
        operation = LogOperation::ComponentLoad.as_str(),
        route = route,
        "Loading route component"
    );
}

/// Log a cache hit
pub fn log_component_cache_hit(route: &str) {
    tracing::trace!(
        operation = LogOperation::ComponentLoad.as_str(),
        route = route,
        cached = true,
        "Reusing route component"
    );
}

/// Log a failed load (the entry is evicted)
pub fn log_component_load_error(route: &str, error: &str) {
    tracing::warn!(
        operation = LogOperation::ComponentLoad.as_str(),
        route = route,
        error = error,
        "Route component failed to load, evicted from cache"
    );
}

/// Log how a navigation is written to history
pub fn log_history_commit(from: &str, to: &str, commit: &str) {
    tracing::debug!(
        operation = LogOperation::History.as_str(),
        from = from,
        to = to,
        commit = commit,
        "History commit"
    );
}

/// Log the SPA history fallback
pub fn log_history_fallback(path: &str, matched: bool) {
    tracing::debug!(
        operation = LogOperation::StaticServe.as_str(),
        path = path,
        matched = matched,
        "Serving index.html for client-side route"
    );
}

/// Macro for creating structured navigation context
#[macro_export]
macro_rules! nav_context {
    ($location:expr) => {
        tracing::debug_span!("router", location = $location)
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_operation_as_str() {
        assert_eq!(LogOperation::RouteRegistration.as_str(), "route_registration");
        assert_eq!(LogOperation::Navigation.as_str(), "navigation");
        assert_eq!(LogOperation::ComponentLoad.as_str(), "component_load");
        assert_eq!(LogOperation::History.as_str(), "history");
        assert_eq!(LogOperation::StaticServe.as_str(), "static_serve");
    }
}
