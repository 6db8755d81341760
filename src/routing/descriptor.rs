use std::fmt;
use std::future::Future;
use std::sync::Arc;

use futures::future::{BoxFuture, FutureExt};

use crate::shared::errors::LoadError;

pub type LoadFuture<V> = BoxFuture<'static, Result<V, LoadError>>;

/// Deferred factory resolving to a renderable view.
///
/// Nothing runs until [`ComponentLoader::load`] is called; the router only
/// does that on the first navigation to the owning route.
pub struct ComponentLoader<V> {
    load: Arc<dyn Fn() -> LoadFuture<V> + Send + Sync>,
}

impl<V: Send + 'static> ComponentLoader<V> {
    pub fn new<F, Fut>(load: F) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<V, LoadError>> + Send + 'static,
    {
        Self {
            load: Arc::new(move || load().boxed()),
        }
    }

    /// Loader that resolves immediately to a clone of `view`.
    pub fn ready(view: V) -> Self
    where
        V: Clone + Sync,
    {
        Self::new(move || futures::future::ready(Ok(view.clone())))
    }

    pub fn load(&self) -> LoadFuture<V> {
        (self.load)()
    }
}

impl<V> Clone for ComponentLoader<V> {
    fn clone(&self) -> Self {
        Self {
            load: Arc::clone(&self.load),
        }
    }
}

impl<V> fmt::Debug for ComponentLoader<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ComponentLoader")
    }
}

/// One entry of the route table: (path, name, loader).
#[derive(Debug, Clone)]
pub struct RouteDescriptor<V> {
    path: &'static str,
    name: &'static str,
    loader: ComponentLoader<V>,
}

impl<V> RouteDescriptor<V> {
    pub fn new(path: &'static str, name: &'static str, loader: ComponentLoader<V>) -> Self {
        Self { path, name, loader }
    }

    pub fn path(&self) -> &'static str {
        self.path
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn loader(&self) -> &ComponentLoader<V> {
        &self.loader
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_loader_is_deferred_until_load() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();
        let loader = ComponentLoader::new(move || {
            counter.fetch_add(1, Ordering::SeqCst);
            async { Ok("view") }
        });

        let descriptor = RouteDescriptor::new("/", "Home", loader);
        assert_eq!(calls.load(Ordering::SeqCst), 0);

        let view = futures::executor::block_on(descriptor.loader().load());
        assert_eq!(view, Ok("view"));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_ready_loader_resolves_each_call() {
        let loader = ComponentLoader::ready(42u32);
        assert_eq!(futures::executor::block_on(loader.load()), Ok(42));
        assert_eq!(futures::executor::block_on(loader.clone().load()), Ok(42));
    }

    #[test]
    fn test_loader_error_is_returned() {
        let loader: ComponentLoader<u32> =
            ComponentLoader::new(|| async { Err(LoadError::new("chunk missing")) });
        let result = futures::executor::block_on(loader.load());
        assert_eq!(result.unwrap_err().message(), "chunk missing");
    }
}
