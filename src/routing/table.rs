use std::borrow::Cow;
use std::collections::HashSet;

use crate::routing::descriptor::RouteDescriptor;
use crate::shared::errors::{Result, RoutingError};
use crate::shared::logging::log_route_table_built;

/// Immutable, ordered set of routes.
///
/// Paths and names are unique. Once built the table has no way to add or
/// remove entries.
#[derive(Debug, Clone)]
pub struct RouteTable<V> {
    routes: Vec<RouteDescriptor<V>>,
}

impl<V> RouteTable<V> {
    pub fn new(routes: Vec<RouteDescriptor<V>>) -> Result<Self> {
        let mut paths = HashSet::with_capacity(routes.len());
        let mut names = HashSet::with_capacity(routes.len());

        for route in &routes {
            if !route.path().starts_with('/') {
                return Err(RoutingError::InvalidPath(route.path().to_string()));
            }
            if route.name().trim().is_empty() {
                return Err(RoutingError::EmptyName(route.path().to_string()));
            }
            // "/Chat/" and "/chat" would match the same locations
            if !paths.insert(normalize_location(route.path())) {
                return Err(RoutingError::DuplicatePath(route.path().to_string()));
            }
            if !names.insert(route.name()) {
                return Err(RoutingError::DuplicateName(route.name().to_string()));
            }
        }

        log_route_table_built(routes.len());
        Ok(Self { routes })
    }

    /// First route, in declaration order, matching `location`.
    pub fn resolve(&self, location: &str) -> Option<&RouteDescriptor<V>> {
        let wanted = normalize_location(location);
        self.routes
            .iter()
            .find(|route| normalize_location(route.path()) == wanted)
    }

    pub fn by_name(&self, name: &str) -> Option<&RouteDescriptor<V>> {
        self.routes.iter().find(|route| route.name() == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &RouteDescriptor<V>> {
        self.routes.iter()
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

/// Reduce a location to the form routes are compared in.
///
/// Strips `?query` and `#fragment`, percent-decodes, drops one trailing slash
/// and lowercases. Query values are never interpreted.
pub fn normalize_location(location: &str) -> String {
    let path = location
        .split(['?', '#'])
        .next()
        .unwrap_or_default();

    let decoded: Cow<'_, str> = urlencoding::decode(path).unwrap_or(Cow::Borrowed(path));

    let trimmed = match decoded.strip_suffix('/') {
        Some(rest) if !rest.is_empty() => rest,
        _ => decoded.as_ref(),
    };

    if trimmed.is_empty() {
        return "/".to_string();
    }

    let mut normalized = trimmed.to_lowercase();
    if !normalized.starts_with('/') {
        normalized.insert(0, '/');
    }
    normalized
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routing::descriptor::ComponentLoader;

    fn route(path: &'static str, name: &'static str) -> RouteDescriptor<&'static str> {
        RouteDescriptor::new(path, name, ComponentLoader::ready(name))
    }

    fn sample_table() -> RouteTable<&'static str> {
        RouteTable::new(vec![
            route("/", "Home"),
            route("/login", "Login"),
            route("/chat", "Chat"),
            route("/upload", "Upload"),
        ])
        .unwrap()
    }

    #[test]
    fn test_normalize_location() {
        assert_eq!(normalize_location(""), "/");
        assert_eq!(normalize_location("/"), "/");
        assert_eq!(normalize_location("/chat/"), "/chat");
        assert_eq!(normalize_location("/Upload"), "/upload");
        assert_eq!(normalize_location("/login?next=/chat"), "/login");
        assert_eq!(normalize_location("/chat#bottom"), "/chat");
        assert_eq!(normalize_location("/log%69n"), "/login");
        assert_eq!(normalize_location("chat"), "/chat");
        assert_eq!(normalize_location("/?tab=1"), "/");
    }

    #[test]
    fn test_resolve_declared_paths() {
        let table = sample_table();
        assert_eq!(table.resolve("/").map(|r| r.name()), Some("Home"));
        assert_eq!(table.resolve("/login").map(|r| r.name()), Some("Login"));
        assert_eq!(table.resolve("/chat").map(|r| r.name()), Some("Chat"));
        assert_eq!(table.resolve("/upload").map(|r| r.name()), Some("Upload"));
    }

    #[test]
    fn test_resolve_lenient_forms() {
        let table = sample_table();
        assert_eq!(table.resolve("/CHAT/").map(|r| r.name()), Some("Chat"));
        assert_eq!(table.resolve("/upload?file=a.pdf").map(|r| r.name()), Some("Upload"));
    }

    #[test]
    fn test_resolve_undeclared_path() {
        let table = sample_table();
        assert!(table.resolve("/does-not-exist").is_none());
        assert!(table.resolve("/chat/history").is_none());
    }

    #[test]
    fn test_rejects_duplicate_path() {
        let err = RouteTable::new(vec![route("/chat", "Chat"), route("/Chat/", "Chat2")]).unwrap_err();
        assert!(matches!(err, RoutingError::DuplicatePath(p) if p == "/Chat/"));
    }

    #[test]
    fn test_rejects_duplicate_name() {
        let err = RouteTable::new(vec![route("/a", "Same"), route("/b", "Same")]).unwrap_err();
        assert!(matches!(err, RoutingError::DuplicateName(n) if n == "Same"));
    }

    #[test]
    fn test_rejects_relative_path_and_empty_name() {
        assert!(matches!(
            RouteTable::new(vec![route("chat", "Chat")]),
            Err(RoutingError::InvalidPath(_))
        ));
        assert!(matches!(
            RouteTable::new(vec![route("/chat", " ")]),
            Err(RoutingError::EmptyName(_))
        ));
    }

    #[test]
    fn test_by_name_and_order() {
        let table = sample_table();
        assert_eq!(table.by_name("Upload").map(|r| r.path()), Some("/upload"));
        assert!(table.by_name("upload").is_none());
        let names: Vec<_> = table.iter().map(|r| r.name()).collect();
        assert_eq!(names, vec!["Home", "Login", "Chat", "Upload"]);
        assert_eq!(table.len(), 4);
    }
}
