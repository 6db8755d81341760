use tracing::Instrument;

use crate::routing::cache::ViewCache;
use crate::routing::descriptor::RouteDescriptor;
use crate::routing::history::HistoryMode;
use crate::routing::table::{RouteTable, normalize_location};
use crate::shared::errors::{Result, RoutingError};
use crate::shared::logging::{
    log_history_commit, log_navigation_aborted, log_navigation_start, log_navigation_unmatched,
    log_router_built,
};

/// Outcome of resolving a location.
#[derive(Debug, Clone, PartialEq)]
pub struct Navigation<V> {
    pub location: String,
    /// `None` when no route declares the location.
    pub matched: Option<MatchedRoute<V>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MatchedRoute<V> {
    pub name: &'static str,
    pub path: &'static str,
    pub view: V,
}

impl<V> Navigation<V> {
    pub fn is_matched(&self) -> bool {
        self.matched.is_some()
    }

    pub fn route_name(&self) -> Option<&'static str> {
        self.matched.as_ref().map(|m| m.name)
    }
}

/// How a navigation should be written to history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryCommit {
    /// New entry.
    Push,
    /// Same route spelled differently (`/Chat/` vs `/chat`): rewrite the
    /// current entry.
    Replace,
    /// Already there.
    Skip,
}

impl HistoryCommit {
    pub fn as_str(&self) -> &'static str {
        match self {
            HistoryCommit::Push => "push",
            HistoryCommit::Replace => "replace",
            HistoryCommit::Skip => "skip",
        }
    }
}

/// Decides how moving from `current` to `target` lands in history.
///
/// Locations are compared the way routes match them, so a location that
/// resolves to the current entry never adds a second one.
pub fn history_commit(current: &str, target: &str) -> HistoryCommit {
    let commit = if current == target {
        HistoryCommit::Skip
    } else if normalize_location(current) == normalize_location(target) {
        HistoryCommit::Replace
    } else {
        HistoryCommit::Push
    };
    log_history_commit(current, target, commit.as_str());
    commit
}

/// Lazy view resolution over an immutable [`RouteTable`].
///
/// History and URL parsing belong to the host router; this owns the
/// "unresolved loader → resolved view → cached view" step.
pub struct Router<V> {
    table: RouteTable<V>,
    views: ViewCache<V>,
    mode: HistoryMode,
}

/// Creates a router. Nothing is loaded until the first navigation.
pub fn build_router<V>(mode: HistoryMode, table: RouteTable<V>) -> Router<V>
where
    V: Clone + Send + Sync + 'static,
{
    log_router_built(mode.as_str(), table.len());
    Router {
        table,
        views: ViewCache::new(),
        mode,
    }
}

impl<V> Router<V>
where
    V: Clone + Send + Sync + 'static,
{
    pub fn routes(&self) -> &RouteTable<V> {
        &self.table
    }

    pub fn mode(&self) -> &HistoryMode {
        &self.mode
    }

    pub fn resolve(&self, location: &str) -> Option<&RouteDescriptor<V>> {
        self.table.resolve(location)
    }

    /// Whether the view behind `name` has already been loaded.
    pub fn is_loaded(&self, name: &str) -> bool {
        self.views.is_resolved(name)
    }

    /// Resolves `location` to its route and loads the route's view.
    pub async fn load(&self, location: &str) -> Result<Navigation<V>> {
        let location = if location.is_empty() { "/" } else { location };
        let span = crate::nav_context!(location);

        async move {
            log_navigation_start(location);

            let Some(route) = self.table.resolve(location) else {
                log_navigation_unmatched(&normalize_location(location));
                return Ok(Navigation {
                    location: location.to_string(),
                    matched: None,
                });
            };

            let view = self.load_route(route, location).await?;
            Ok(Navigation {
                location: location.to_string(),
                matched: Some(MatchedRoute {
                    name: route.name(),
                    path: route.path(),
                    view,
                }),
            })
        }
        .instrument(span)
        .await
    }

    /// Loads the view of the route called `name`.
    pub async fn load_named(&self, name: &str) -> Result<V> {
        let route = self
            .table
            .by_name(name)
            .ok_or_else(|| RoutingError::UnknownRouteName(name.to_string()))?;
        self.load_route(route, route.path()).await
    }

    async fn load_route(&self, route: &RouteDescriptor<V>, location: &str) -> Result<V> {
        self.views.get_or_load(route).await.map_err(|source| {
            log_navigation_aborted(location, route.name(), source.message());
            RoutingError::ComponentLoad {
                name: route.name(),
                source,
            }
        })
    }
}
