use std::rc::Rc;

use dioxus::router::Navigator;

use crate::app::routes::{Page, Route};
use crate::routing::{HistoryCommit, RouteTable, Router, history_commit};

/// The application's view loader, shared through Dioxus context.
#[derive(Clone)]
pub struct AppRouter(Rc<Router<Page>>);

impl AppRouter {
    pub fn new(router: Router<Page>) -> Self {
        Self(Rc::new(router))
    }

    pub fn router(&self) -> &Router<Page> {
        &self.0
    }
}

/// The declared route a location resolves to in `table`, if any.
///
/// `/Chat/` and `/chat?tab=1` come back as [`Route::Chat`].
pub fn canonical_route<V>(table: &RouteTable<V>, location: &str) -> Option<Route> {
    table
        .resolve(location)
        .and_then(|descriptor| descriptor.path().parse::<Route>().ok())
        .filter(|route| !matches!(route, Route::NotFound { .. }))
}

/// Navigates from `current` to `target` without stacking an entry for a
/// location history already shows.
pub fn push_route(navigator: Navigator, current: &Route, target: Route) {
    let failed = match history_commit(&current.to_string(), &target.to_string()) {
        HistoryCommit::Push => navigator.push(target).is_some(),
        HistoryCommit::Replace => navigator.replace(target).is_some(),
        HistoryCommit::Skip => false,
    };
    if failed {
        tracing::warn!("Navigation rejected by the router");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::app_routes;

    #[test]
    fn test_canonical_route() {
        let table = app_routes().unwrap();

        assert_eq!(canonical_route(&table, "/Chat/"), Some(Route::Chat {}));
        assert_eq!(canonical_route(&table, "/upload?x=1"), Some(Route::Upload {}));
        assert_eq!(canonical_route(&table, "/LOGIN"), Some(Route::Login {}));
        assert_eq!(canonical_route(&table, ""), Some(Route::Home {}));
        assert_eq!(canonical_route(&table, "/does-not-exist"), None);
    }
}
