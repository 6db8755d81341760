use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use futures::future::{FutureExt, Shared};

use crate::routing::descriptor::{LoadFuture, RouteDescriptor};
use crate::shared::errors::LoadError;
use crate::shared::logging::{
    log_component_cache_hit, log_component_load_error, log_component_load_start,
};

type PendingView<V> = Shared<LoadFuture<V>>;

/// Resolved (or resolving) views, keyed by route name.
///
/// A route's loader runs at most once while its result is a success.
/// Navigations that arrive while a load is in flight await the same future.
pub struct ViewCache<V> {
    entries: DashMap<&'static str, PendingView<V>>,
}

impl<V> ViewCache<V>
where
    V: Clone + Send + Sync + 'static,
{
    pub fn new() -> Self {
        Self {
            entries: DashMap::new(),
        }
    }

    pub async fn get_or_load(&self, route: &RouteDescriptor<V>) -> Result<V, LoadError> {
        let name = route.name();
        let pending = match self.entries.entry(name) {
            Entry::Occupied(entry) => {
                log_component_cache_hit(name);
                entry.get().clone()
            }
            Entry::Vacant(entry) => {
                log_component_load_start(name);
                let pending = route.loader().load().shared();
                entry.insert(pending.clone());
                pending
            }
        };

        let result = pending.await;
        if let Err(e) = &result {
            // Only evict the failed future; a retry may already have replaced it
            let evicted = self
                .entries
                .remove_if(name, |_, cached| matches!(cached.peek(), Some(Err(_))));
            if evicted.is_some() {
                log_component_load_error(name, e.message());
            }
        }
        result
    }

    /// Whether `name` has a successfully resolved view.
    pub fn is_resolved(&self, name: &str) -> bool {
        self.entries
            .get(name)
            .is_some_and(|pending| matches!(pending.peek(), Some(Ok(_))))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<V> Default for ViewCache<V>
where
    V: Clone + Send + Sync + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}
