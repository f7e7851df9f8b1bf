//! Current-restaurant coordinator.
//!
//! Holds which restaurant the owner is working on and fans that choice out
//! to every subscriber (selector header, dashboard). Selecting is purely
//! local; only [`RestaurantSelection::mount`] talks to the API.

use std::sync::Arc;

use tokio::sync::watch;

use super::ResourceStore;
use crate::api::Restaurants;
use crate::models::{Id, Restaurant};

#[derive(Clone)]
pub struct RestaurantSelection {
    restaurants: ResourceStore<Restaurants>,
    selected: Arc<watch::Sender<Option<Id>>>,
}

impl RestaurantSelection {
    pub fn new(restaurants: ResourceStore<Restaurants>) -> Self {
        let (selected, _) = watch::channel(None);
        Self {
            restaurants,
            selected: Arc::new(selected),
        }
    }

    /// Loads the restaurant list and, when the selection is empty or no longer
    /// listed, picks the first restaurant in server order (none if the list is
    /// empty). After a failed load the selection is left as it was.
    pub async fn mount(&self) -> Option<Id> {
        if !self.restaurants.fetch_all().await {
            return self.selected();
        }
        let cached: Vec<Id> = self.restaurants.read(|items| items.iter().map(|r| r.id).collect());
        let first = cached.first().copied();
        self.selected.send_if_modified(|selected| {
            let valid = selected.is_some_and(|id| cached.contains(&id));
            if !valid && *selected != first {
                *selected = first;
                true
            } else {
                false
            }
        });
        self.selected()
    }

    pub fn select(&self, id: Option<Id>) {
        self.selected.send_if_modified(|selected| {
            if *selected == id {
                false
            } else {
                *selected = id;
                true
            }
        });
    }

    pub fn selected(&self) -> Option<Id> {
        *self.selected.borrow()
    }

    /// The selected restaurant, if it is still cached.
    pub fn current(&self) -> Option<Restaurant> {
        self.selected().and_then(|id| self.restaurants.get(id))
    }

    pub fn restaurants(&self) -> &ResourceStore<Restaurants> {
        &self.restaurants
    }

    pub fn subscribe(&self) -> watch::Receiver<Option<Id>> {
        self.selected.subscribe()
    }
}
