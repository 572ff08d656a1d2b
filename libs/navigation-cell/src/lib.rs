pub mod catalog;
pub mod gate;
pub mod handlers;
pub mod models;
pub mod presenter;
pub mod router;

pub use models::{MenuCategory, MenuEntry, MenuItem, MenuSection, NavigationIntent, NavigationTarget};
pub use presenter::NavigationPresenter;
