//! Navigation entries and the router capability the panel drives.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_navigate};
use leptos_router::NavigateOptions;

use crate::components::icons::Icon;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub id: &'static str,
    pub label: &'static str,
    pub icon: Icon,
    pub path: &'static str,
    /// Rendered for everyone; there is no role check yet.
    pub admin_only: bool,
}

pub static NAV_ITEMS: [NavItem; 6] = [
    NavItem {
        id: "dashboard",
        label: "Dashboard",
        icon: Icon::LayoutGrid,
        path: "/dashboard",
        admin_only: false,
    },
    NavItem {
        id: "analytics",
        label: "Analytics",
        icon: Icon::BarChart,
        path: "/analytics",
        admin_only: false,
    },
    NavItem {
        id: "sessions",
        label: "Sessions",
        icon: Icon::Clock,
        path: "/sessions",
        admin_only: false,
    },
    NavItem {
        id: "insights",
        label: "Insights",
        icon: Icon::BookOpen,
        path: "/insights",
        admin_only: false,
    },
    NavItem {
        id: "users",
        label: "Users",
        icon: Icon::Users,
        path: "/admin/users",
        admin_only: true,
    },
    NavItem {
        id: "settings",
        label: "Settings",
        icon: Icon::Settings,
        path: "/settings",
        admin_only: false,
    },
];

pub const SETTINGS_PATH: &str = "/settings";

/// Exact match only: `/settings/profile` does not activate `/settings`.
pub fn is_active(item: &NavItem, current_path: &str) -> bool {
    item.path == current_path
}

pub fn active_item(current_path: &str) -> Option<&'static NavItem> {
    NAV_ITEMS.iter().find(|item| is_active(item, current_path))
}

pub trait Navigator: Send + Sync {
    fn navigate_to(&self, path: &str);
    fn current_path(&self) -> String;
}

/// Navigate to `path`, then close the panel.
///
/// Closing is unconditional: it dismisses the overlay on narrow screens and
/// is ignored by the docked layout.
pub fn select_entry<N>(path: &str, navigator: &N, set_open: impl FnOnce(bool))
where
    N: Navigator + ?Sized,
{
    tracing::debug!(path, "navigation entry selected");
    navigator.navigate_to(path);
    set_open(false);
}

/// [`Navigator`] backed by the surrounding `leptos_router` `<Router>`.
#[derive(Clone)]
pub struct RouterNavigator {
    navigate: Arc<dyn Fn(&str) + Send + Sync>,
    pathname: Memo<String>,
}

impl RouterNavigator {
    /// Must be called while building a view inside `<Router>`.
    pub fn from_router() -> Self {
        let navigate = use_navigate();
        let location = use_location();
        Self {
            navigate: Arc::new(move |path: &str| navigate(path, NavigateOptions::default())),
            pathname: location.pathname,
        }
    }
}

impl Navigator for RouterNavigator {
    fn navigate_to(&self, path: &str) {
        (self.navigate)(path);
    }

    fn current_path(&self) -> String {
        self.pathname.get()
    }
}


#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::collections::HashSet;

    use super::testing::RecordingNavigator;
    use super::*;

    #[test]
    fn test_six_unique_entries() {
        assert_eq!(NAV_ITEMS.len(), 6);
        let ids: HashSet<_> = NAV_ITEMS.iter().map(|i| i.id).collect();
        let paths: HashSet<_> = NAV_ITEMS.iter().map(|i| i.path).collect();
        assert_eq!(ids.len(), 6);
        assert_eq!(paths.len(), 6);
    }

    #[test]
    fn test_only_users_entry_is_admin_only() {
        let admin: Vec<_> = NAV_ITEMS.iter().filter(|i| i.admin_only).map(|i| i.id).collect();
        assert_eq!(admin, vec!["users"]);
    }

    #[test]
    fn test_exactly_one_active_for_each_known_path() {
        for item in NAV_ITEMS.iter() {
            let active: Vec<_> = NAV_ITEMS
                .iter()
                .filter(|candidate| is_active(candidate, item.path))
                .collect();
            assert_eq!(active.len(), 1);
            assert_eq!(active[0].id, item.id);
        }
    }

    #[test]
    fn test_no_prefix_matching() {
        assert!(active_item("/settings/profile").is_none());
        assert!(active_item("/admin").is_none());
        assert!(active_item("/").is_none());
        assert!(active_item("").is_none());
        assert_eq!(active_item("/admin/users").map(|i| i.id), Some("users"));
    }

    #[test]
    fn test_select_navigates_once_then_closes() {
        for prior in [false, true] {
            let navigator = RecordingNavigator::at("/dashboard");
            let open = RefCell::new(prior);
            let order = RefCell::new(Vec::new());

            select_entry("/sessions", &navigator, |value| {
                order.borrow_mut().push(navigator.visited().len());
                *open.borrow_mut() = value;
            });

            assert_eq!(navigator.visited(), vec!["/sessions".to_string()]);
            assert!(!*open.borrow());
            // close ran after the navigation was recorded
            assert_eq!(*order.borrow(), vec![1]);
        }
    }

    #[test]
    fn test_select_through_trait_object() {
        let navigator = RecordingNavigator::at("/");
        let dyn_navigator: &dyn Navigator = &navigator;
        let mut closed = false;
        select_entry(SETTINGS_PATH, dyn_navigator, |open| closed = !open);
        assert!(closed);
        assert_eq!(navigator.visited(), vec!["/settings".to_string()]);
    }
}
