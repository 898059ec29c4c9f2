//! Page navigation table for the hosting UI shell.
//!
//! Path-based history (no fragment routing): three fixed entries, defined
//! once, looked up per navigation event. Unknown paths resolve to
//! [`View::NotFound`]; hosts preferring a redirect policy can use
//! [`route_for`] directly and decide themselves.

/// Page-level view identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Dashboard,
    Anomaly,
    Chat,
    NotFound,
}

impl View {
    /// Resolve a navigation target to the view that should render.
    pub fn resolve(path: &str) -> View {
        match route_for(path) {
            Some(route) => route.view,
            None => View::NotFound,
        }
    }
}

/// One navigable entry: URL path, display name, view to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Route {
    pub path: &'static str,
    pub name: &'static str,
    pub view: View,
}

/// The complete navigation table.
pub const ROUTES: [Route; 3] = [
    Route {
        path: "/",
        name: "Dashboard",
        view: View::Dashboard,
    },
    Route {
        path: "/anomaly",
        name: "Anomaly",
        view: View::Anomaly,
    },
    Route {
        path: "/chat",
        name: "Chat",
        view: View::Chat,
    },
];

/// Exact-match table lookup. `None` for paths outside the table.
pub fn route_for(path: &str) -> Option<&'static Route> {
    ROUTES.iter().find(|route| route.path == path)
}
