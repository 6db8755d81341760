/// Which history the host router runs on.
///
/// The history itself belongs to the host (dioxus-router); this only picks
/// between the platform's browser history and an in-memory stack.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HistoryMode {
    /// The platform history: `pushState` on web, no full page reloads.
    Browser,
    /// In-process stack starting at `initial`. Used by native hosts.
    Memory { initial: String },
}

impl HistoryMode {
    pub fn memory() -> Self {
        HistoryMode::Memory {
            initial: "/".to_string(),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            HistoryMode::Browser => "browser",
            HistoryMode::Memory { .. } => "memory",
        }
    }

    /// Starting location for memory history; `None` for browser history,
    /// which starts wherever the address bar points.
    pub fn initial_location(&self) -> Option<&str> {
        match self {
            HistoryMode::Browser => None,
            HistoryMode::Memory { initial } => Some(initial),
        }
    }
}
