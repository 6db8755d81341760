//! Host-agnostic route table with lazily loaded views.
//!
//! URL parsing and history belong to the host router; this layer owns which
//! view a route resolves to and loading it at most once.

pub mod cache;
pub mod descriptor;
pub mod history;
pub mod router;
pub mod table;

pub use cache::ViewCache;
pub use descriptor::{ComponentLoader, LoadFuture, RouteDescriptor};
pub use history::HistoryMode;
pub use router::{HistoryCommit, MatchedRoute, Navigation, Router, build_router, history_commit};
pub use table::{RouteTable, normalize_location};
