//! Application root.
//!
//! [`MenuBoard`] owns the API client, one store per resource and the
//! restaurant selection. Front ends build one instance and hand references
//! to their views; tests build as many isolated instances as they need.

use std::sync::Arc;

use crate::api::{ApiClient, Categories, MenuItems, Restaurants};
use crate::models::{Id, Restaurant};
use crate::notify::Notifier;
use crate::store::{ResourceStore, RestaurantSelection};
use crate::view::MenuDisplay;

#[derive(Clone)]
pub struct MenuBoard {
    client: ApiClient,
    pub restaurants: ResourceStore<Restaurants>,
    pub categories: ResourceStore<Categories>,
    pub menu_items: ResourceStore<MenuItems>,
    pub selection: RestaurantSelection,
}

impl MenuBoard {
    pub fn new(client: ApiClient, notifier: Arc<dyn Notifier>) -> Self {
        let restaurants = ResourceStore::new(client.clone(), Arc::clone(&notifier));
        let categories = ResourceStore::new(client.clone(), Arc::clone(&notifier));
        let menu_items = ResourceStore::new(client.clone(), notifier);
        let selection = RestaurantSelection::new(restaurants.clone());
        Self {
            client,
            restaurants,
            categories,
            menu_items,
            selection,
        }
    }

    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    /// Owner dashboard start-up: restaurants (with default selection),
    /// categories and menu items load concurrently.
    pub async fn mount(&self) -> Option<Id> {
        let (selected, _, _) = futures::join!(
            self.selection.mount(),
            self.categories.fetch_all(),
            self.menu_items.fetch_all()
        );
        selected
    }

    /// Public storefront: one restaurant plus the full category and item
    /// collections, filtered later by [`MenuBoard::menu`].
    pub async fn load_storefront(&self, restaurant: Id) -> Option<Restaurant> {
        let (found, _, _) = futures::join!(
            self.restaurants.fetch_one(restaurant),
            self.categories.fetch_all(),
            self.menu_items.fetch_all()
        );
        found
    }

    /// Display set for `restaurant` and an optional selected category.
    pub fn menu(&self, restaurant: Option<Id>, category: Option<Id>) -> MenuDisplay {
        self.categories.read(|categories| {
            self.menu_items
                .read(|items| MenuDisplay::build(categories, items, restaurant, category))
        })
    }

    /// Display set for the currently selected restaurant.
    pub fn dashboard_menu(&self, category: Option<Id>) -> MenuDisplay {
        self.menu(self.selection.selected(), category)
    }
}
