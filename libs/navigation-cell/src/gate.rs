//! Single choke point for menu visibility. Two layers must both pass: the
//! per-item `required_roles` allow-list, and a category deny-list overlay
//! that hides whole sections from specific roles.

use shared_models::role::Role;

use crate::catalog;
use crate::models::{MenuCategory, MenuItem, MenuSection};

/// Categories hidden wholesale from a role, regardless of what the items in
/// them allow.
pub fn denied_categories(role: Role) -> &'static [MenuCategory] {
    match role {
        Role::OpdManager => &[MenuCategory::SupportServices, MenuCategory::Management],
        Role::Nurse => &[MenuCategory::Management],
        _ => &[],
    }
}

/// True when `role` may see `item`: allow-listed on the item AND not denied
/// by the category overlay.
pub fn can_access(role: Role, item: &MenuItem) -> bool {
    item.required_roles.contains(&role) && !denied_categories(role).contains(&item.category)
}

/// Filter `items` down to what `role` may see, preserving input order. An
/// absent role falls back to the base set: the Dashboard entry only.
pub fn visible_items<'a>(role: Option<Role>, items: &'a [MenuItem]) -> Vec<&'a MenuItem> {
    match role {
        Some(role) => items.iter().filter(|item| can_access(role, item)).collect(),
        None => items
            .iter()
            .filter(|item| item.path == catalog::DASHBOARD_PATH)
            .collect(),
    }
}

/// Group the role's visible catalog entries into display sections. A
/// category with zero visible items produces no section at all.
pub fn sections(role: Option<Role>) -> Vec<MenuSection> {
    let visible = visible_items(role, catalog::MENU);

    MenuCategory::ORDERED
        .iter()
        .filter_map(|category| {
            let items: Vec<_> = visible
                .iter()
                .filter(|item| item.category == *category)
                .map(|item| (*item).into())
                .collect();

            if items.is_empty() {
                None
            } else {
                Some(MenuSection {
                    category: category.label(),
                    items,
                })
            }
        })
        .collect()
}
