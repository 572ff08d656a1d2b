use serde::Serialize;

use shared_models::role::Role;

/// Fixed menu categories, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MenuCategory {
    Dashboard,
    CoreServices,
    SupportServices,
    Management,
}

impl MenuCategory {
    pub const ORDERED: [MenuCategory; 4] = [
        MenuCategory::Dashboard,
        MenuCategory::CoreServices,
        MenuCategory::SupportServices,
        MenuCategory::Management,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            MenuCategory::Dashboard => "Dashboard",
            MenuCategory::CoreServices => "Core Services",
            MenuCategory::SupportServices => "Support Services",
            MenuCategory::Management => "Management",
        }
    }
}

/// One navigation entry. The whole catalog is static: defined at compile
/// time, never mutated at runtime.
#[derive(Debug)]
pub struct MenuItem {
    pub title: &'static str,
    pub path: &'static str,
    pub category: MenuCategory,
    pub required_roles: &'static [Role],
    /// External items open a new browsing context instead of navigating
    /// in-app.
    pub external: bool,
}

/// Serialized form of a visible menu entry.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct MenuEntry {
    pub title: &'static str,
    pub path: &'static str,
    pub external: bool,
}

impl From<&MenuItem> for MenuEntry {
    fn from(item: &MenuItem) -> Self {
        Self {
            title: item.title,
            path: item.path,
            external: item.external,
        }
    }
}

/// A rendered menu section. Categories with no visible items are omitted
/// entirely rather than rendered empty.
#[derive(Debug, Clone, Serialize)]
pub struct MenuSection {
    pub category: &'static str,
    pub items: Vec<MenuEntry>,
}

/// Where a navigation intent should land.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum NavigationTarget {
    InApp,
    NewContext,
}

/// Emitted by the presenter when a visible item is activated. The router
/// collaborator performs the actual view transition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavigationIntent {
    pub path: String,
    pub target: NavigationTarget,
}
