//! Navigation shell model: routes, menu entries and the active view.
//!
//! # Invariants
//! - Exactly six routes exist and each path key maps to one route.
//! - The menu lists every route once, dashboard first.
//! - Logout is a stub: it records the event and returns to the dashboard.

use log::info;
use serde::Serialize;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Display name shown above the menu.
pub const DEFAULT_USER_NAME: &str = "Test User";

/// One top-level view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Route {
    #[default]
    Dashboard,
    Contacts,
    Reminders,
    Notes,
    Emergency,
    Settings,
}

impl Route {
    pub const ALL: [Route; 6] = [
        Route::Dashboard,
        Route::Contacts,
        Route::Reminders,
        Route::Notes,
        Route::Emergency,
        Route::Settings,
    ];

    /// Router path key.
    pub fn path(self) -> &'static str {
        match self {
            Self::Dashboard => "",
            Self::Contacts => "/contacts",
            Self::Reminders => "/reminder",
            Self::Notes => "/notes",
            Self::Emergency => "/emergency",
            Self::Settings => "/settings",
        }
    }

    /// Resolves a path key. `/` is treated as the dashboard's empty key.
    pub fn from_path(path: &str) -> Option<Self> {
        let path = if path == "/" { "" } else { path };
        Self::ALL.into_iter().find(|route| route.path() == path)
    }
}

/// Unresolvable navigation target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationError {
    UnknownRoute(String),
}

impl Display for NavigationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownRoute(path) => write!(f, "unknown route: `{path}`"),
        }
    }
}

impl Error for NavigationError {}

/// Static menu entry consumed by the navigation shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MenuItem {
    pub id: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
    #[serde(rename = "routekey")]
    pub route_key: &'static str,
}

pub const MENU: &[MenuItem] = &[
    MenuItem {
        id: "dashboard",
        label: "Dashboard",
        icon: "dashboard",
        route_key: "",
    },
    MenuItem {
        id: "contacts",
        label: "Contacts",
        icon: "contact",
        route_key: "/contacts",
    },
    MenuItem {
        id: "reminders",
        label: "Reminders",
        icon: "reminder",
        route_key: "/reminder",
    },
    MenuItem {
        id: "notes",
        label: "Notes",
        icon: "note",
        route_key: "/notes",
    },
    MenuItem {
        id: "emergency",
        label: "Emergency",
        icon: "emergency",
        route_key: "/emergency",
    },
    MenuItem {
        id: "setting",
        label: "Settings",
        icon: "setting",
        route_key: "/settings",
    },
];

impl MenuItem {
    pub fn route(&self) -> Option<Route> {
        Route::from_path(self.route_key)
    }
}

/// Tracks which view is active.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigator {
    active: Route,
    user_name: String,
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}

impl Navigator {
    pub fn new() -> Self {
        Self {
            active: Route::Dashboard,
            user_name: DEFAULT_USER_NAME.to_string(),
        }
    }

    pub fn active(&self) -> Route {
        self.active
    }

    pub fn user_name(&self) -> &str {
        &self.user_name
    }

    /// Switches to the view for `path`. Unknown paths keep the current view.
    pub fn navigate(&mut self, path: &str) -> Result<Route, NavigationError> {
        let route =
            Route::from_path(path).ok_or_else(|| NavigationError::UnknownRoute(path.to_string()))?;
        if route != self.active {
            info!(
                "event=navigate module=nav status=ok from={:?} to={:?}",
                self.active, route
            );
        }
        self.active = route;
        Ok(route)
    }

    /// Whether a menu link with `route_key` should render highlighted.
    ///
    /// An empty key is never highlighted, so the dashboard link stays plain.
    pub fn is_active(&self, route_key: &str) -> bool {
        !route_key.is_empty() && self.active.path() == route_key
    }

    /// Stubbed logout: no session exists, so this only returns home.
    pub fn logout(&mut self) -> Route {
        info!("event=logout module=nav status=ok");
        self.active = Route::Dashboard;
        self.active
    }
}

#[cfg(test)]
mod tests {
    use super::{Navigator, Route, MENU};

    #[test]
    fn every_route_round_trips_through_its_path() {
        for route in Route::ALL {
            assert_eq!(Route::from_path(route.path()), Some(route));
        }
        assert_eq!(Route::from_path("/"), Some(Route::Dashboard));
        assert_eq!(Route::from_path("/calendar"), None);
    }

    #[test]
    fn menu_covers_each_route_once_in_order() {
        let routes: Vec<Route> = MENU.iter().filter_map(|item| item.route()).collect();
        assert_eq!(routes, Route::ALL.to_vec());
    }

    #[test]
    fn unknown_path_keeps_current_view() {
        let mut nav = Navigator::new();
        nav.navigate("/notes").unwrap();
        assert!(nav.navigate("/nowhere").is_err());
        assert_eq!(nav.active(), Route::Notes);
    }

    #[test]
    fn dashboard_link_is_never_highlighted() {
        let nav = Navigator::new();
        assert_eq!(nav.active(), Route::Dashboard);
        assert!(!nav.is_active(""));
    }

    #[test]
    fn logout_returns_to_dashboard() {
        let mut nav = Navigator::new();
        nav.navigate("/settings").unwrap();
        assert!(nav.is_active("/settings"));
        assert_eq!(nav.logout(), Route::Dashboard);
        assert_eq!(nav.user_name(), "Test User");
    }

    #[test]
    fn menu_serializes_routekey_field() {
        let json = serde_json::to_value(MENU[1]).unwrap();
        assert_eq!(json["routekey"], "/contacts");
    }
}
