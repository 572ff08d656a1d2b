use tracing::debug;

use shared_models::role::Role;

use crate::catalog;
use crate::gate;
use crate::models::{MenuSection, NavigationIntent, NavigationTarget};

pub type NavigateFn = Box<dyn Fn(NavigationIntent) + Send + Sync>;

/// Renders the gated menu for one role and turns item activations into
/// navigation intents. The actual view transition is the collaborator's job;
/// the presenter only dispatches.
pub struct NavigationPresenter {
    role: Option<Role>,
    on_navigate: Option<NavigateFn>,
}

impl NavigationPresenter {
    pub fn new(role: Option<Role>) -> Self {
        Self {
            role,
            on_navigate: None,
        }
    }

    pub fn with_on_navigate(mut self, on_navigate: NavigateFn) -> Self {
        self.on_navigate = Some(on_navigate);
        self
    }

    pub fn role(&self) -> Option<Role> {
        self.role
    }

    /// The menu this presenter's role may see, grouped into sections.
    pub fn menu(&self) -> Vec<MenuSection> {
        gate::sections(self.role)
    }

    /// Activate the item at `path`. Dispatches a `NavigationIntent` through
    /// the collaborator; external items target a new browsing context.
    ///
    /// Silent no-op when no collaborator is wired, and when `path` is not
    /// visible to the role (deny by default, never an error).
    pub fn navigate(&self, path: &str) {
        let visible = gate::visible_items(self.role, catalog::MENU);
        let Some(item) = visible.iter().find(|item| item.path == path) else {
            debug!("Navigation to {} suppressed: not visible for role", path);
            return;
        };

        let Some(on_navigate) = &self.on_navigate else {
            debug!("Navigation to {} dropped: no collaborator wired", path);
            return;
        };

        let target = if item.external {
            NavigationTarget::NewContext
        } else {
            NavigationTarget::InApp
        };

        on_navigate(NavigationIntent {
            path: item.path.to_string(),
            target,
        });
    }
}
