use dioxus::prelude::*;

use crate::app::components::LazyView;
use crate::app::layouts::Navbar;
use crate::app::navigation::{AppRouter, canonical_route};
use crate::app::pages::{ChatPage, HomePage, LoginPage, NotFoundPage, UploadPage};
use crate::routing::{ComponentLoader, RouteDescriptor, RouteTable};
use crate::shared::errors::{LoadError, Result};

/// Handle to a routed view. Loaders resolve to one of these and
/// [`Page::render`] mounts the matching component.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    Login,
    Chat,
    Upload,
}

impl Page {
    pub fn render(self) -> Element {
        match self {
            Page::Home => rsx! { HomePage {} },
            Page::Login => rsx! { LoginPage {} },
            Page::Chat => rsx! { ChatPage {} },
            Page::Upload => rsx! { UploadPage {} },
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::Login => "Sign in",
            Page::Chat => "Chat",
            Page::Upload => "Upload documents",
        }
    }
}

async fn load_page(page: Page) -> std::result::Result<Page, LoadError> {
    tracing::trace!(page = page.title(), "Resolving page component");
    Ok(page)
}

fn lazy(page: Page) -> ComponentLoader<Page> {
    ComponentLoader::new(move || load_page(page))
}

/// The application's route table: which view each route loads.
pub fn app_routes() -> Result<RouteTable<Page>> {
    RouteTable::new(vec![
        RouteDescriptor::new("/", "Home", lazy(Page::Home)),
        RouteDescriptor::new("/login", "Login", lazy(Page::Login)),
        RouteDescriptor::new("/chat", "Chat", lazy(Page::Chat)),
        RouteDescriptor::new("/upload", "Upload", lazy(Page::Upload)),
    ])
}

#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
    #[route("/")]
    Home {},
    #[route("/login")]
    Login {},
    #[route("/chat")]
    Chat {},
    #[route("/upload")]
    Upload {},

    // Anything else, including `/Chat/`-style spellings of a declared route
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

#[component]
fn Layout() -> Element {
    rsx! {
        div { class: "c-layout",
            Navbar {}
            main { class: "c-layout__main",
                Outlet::<Route> {}
            }
        }
    }
}

#[component]
fn Home() -> Element {
    rsx! { LazyView { name: "Home" } }
}

#[component]
fn Login() -> Element {
    rsx! { LazyView { name: "Login" } }
}

#[component]
fn Chat() -> Element {
    rsx! { LazyView { name: "Chat" } }
}

#[component]
fn Upload() -> Element {
    rsx! { LazyView { name: "Upload" } }
}

/// Sends lenient spellings of a declared route to the route itself and
/// shows the not-found page for everything else.
#[component]
fn NotFound(segments: Vec<String>) -> Element {
    let app_router = use_context::<AppRouter>();
    let location = format!("/{}", segments.join("/"));
    let canonical = canonical_route(app_router.router().routes(), &location);

    use_effect(use_reactive((&canonical,), |(canonical,)| {
        if let Some(route) = canonical {
            tracing::debug!(route = %route, "Redirecting to canonical route");
            navigator().replace(route);
        }
    }));

    if canonical.is_some() {
        return rsx! {};
    }

    rsx! { NotFoundPage { location } }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routing::{HistoryMode, build_router};
    use std::collections::HashSet;

    #[test]
    fn test_app_routes_are_unique() {
        let table = app_routes().unwrap();
        let paths: HashSet<_> = table.iter().map(|r| r.path()).collect();
        let names: HashSet<_> = table.iter().map(|r| r.name()).collect();

        assert_eq!(table.len(), 4);
        assert_eq!(paths.len(), 4);
        assert_eq!(names.len(), 4);
    }

    #[test]
    fn test_app_routes_resolve() {
        let table = app_routes().unwrap();
        assert_eq!(table.resolve("/").map(|r| r.name()), Some("Home"));
        assert_eq!(table.resolve("/login").map(|r| r.name()), Some("Login"));
        assert_eq!(table.resolve("/chat").map(|r| r.name()), Some("Chat"));
        assert_eq!(table.resolve("/upload").map(|r| r.name()), Some("Upload"));
        assert!(table.resolve("/does-not-exist").is_none());
    }

    #[test]
    fn test_route_enum_parses_declared_paths() {
        assert_eq!("/".parse::<Route>().unwrap(), Route::Home {});
        assert_eq!("/login".parse::<Route>().unwrap(), Route::Login {});
        assert_eq!("/chat".parse::<Route>().unwrap(), Route::Chat {});
        assert_eq!("/upload".parse::<Route>().unwrap(), Route::Upload {});
        assert!(matches!(
            "/does-not-exist".parse::<Route>().unwrap(),
            Route::NotFound { .. }
        ));
        assert_eq!(Route::Chat {}.to_string(), "/chat");
    }

    #[test]
    fn test_every_table_path_has_a_route_variant() {
        let table = app_routes().unwrap();
        for descriptor in table.iter() {
            let route = descriptor.path().parse::<Route>().unwrap();
            assert!(!matches!(route, Route::NotFound { .. }), "{}", descriptor.path());
            assert_eq!(route.to_string(), descriptor.path());
        }
    }

    #[test]
    fn test_loaders_run_only_on_navigation() {
        let router = build_router(HistoryMode::memory(), app_routes().unwrap());
        for name in ["Home", "Login", "Chat", "Upload"] {
            assert!(!router.is_loaded(name), "{} loaded before navigation", name);
        }

        futures::executor::block_on(router.load("/upload")).unwrap();
        assert!(router.is_loaded("Upload"));
        assert!(!router.is_loaded("Chat"));
    }

    #[tokio::test]
    async fn test_navigation_loads_matching_page() {
        let router = build_router(HistoryMode::memory(), app_routes().unwrap());

        for (path, page) in [
            ("/", Page::Home),
            ("/login", Page::Login),
            ("/chat", Page::Chat),
            ("/upload", Page::Upload),
        ] {
            let nav = router.load(path).await.unwrap();
            assert_eq!(nav.matched.map(|m| m.view), Some(page));
        }
        assert_eq!(router.load_named("Chat").await.unwrap(), Page::Chat);
    }
}
