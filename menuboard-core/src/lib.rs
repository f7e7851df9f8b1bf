//! Menuboard Core Library
//!
//! Typed client for the restaurant menu API together with the in-memory
//! stores that keep restaurants, menu categories and menu items in sync
//! across views.

pub mod api;
pub mod app;
pub mod models;
pub mod notify;
pub mod store;
pub mod view;

pub use api::{
    ApiClient, ApiError, Categories, ExportKind, MenuItems, Resource, ResourceApi, Restaurants,
    SessionError, SessionStore, StaticToken, TokenSource,
};
pub use app::MenuBoard;
pub use models::{
    Entity, Icon, Id, MenuCategory, MenuCategoryUpdate, MenuItem, MenuItemUpdate, NewMenuCategory,
    NewMenuItem, NewRestaurant, Restaurant, RestaurantUpdate, Upload,
};
pub use notify::{MemoryNotifier, Notice, NoticeLevel, Notifier, SilentNotifier};
pub use store::{ResourceStore, RestaurantSelection, Scope};
pub use view::{categories_of, items_of, MenuDisplay, MenuSection, EMPTY_MENU_PLACEHOLDER};

pub use bigdecimal::BigDecimal;

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!version().is_empty());
    }
}
