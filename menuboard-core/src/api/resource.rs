//! Resource controllers: one call per REST verb per resource.
//!
//! Each call is a straight request/response passthrough. Failures are logged
//! here and handed back to the caller unchanged.

use std::marker::PhantomData;

use reqwest::Method;

use super::client::ApiClient;
use super::error::ApiError;
use super::payload::IntoPayload;
use crate::models::{
    Entity, Id, MenuCategory, MenuCategoryUpdate, MenuItem, MenuItemUpdate, NewMenuCategory,
    NewMenuItem, NewRestaurant, Restaurant, RestaurantUpdate,
};

/// A server-owned entity type with a REST collection endpoint.
pub trait Resource: Send + Sync + 'static {
    type Entity: Entity;
    type New: IntoPayload + Send;
    type Update: IntoPayload + Send;

    /// Collection segment under `/api/`.
    const COLLECTION: &'static str;
    /// Human-readable singular name used in logs and notices.
    const LABEL: &'static str;
}

pub struct Restaurants;

impl Resource for Restaurants {
    type Entity = Restaurant;
    type New = NewRestaurant;
    type Update = RestaurantUpdate;

    const COLLECTION: &'static str = "restaurants";
    const LABEL: &'static str = "restaurant";
}

pub struct Categories;

impl Resource for Categories {
    type Entity = MenuCategory;
    type New = NewMenuCategory;
    type Update = MenuCategoryUpdate;

    const COLLECTION: &'static str = "menu-categories";
    const LABEL: &'static str = "category";
}

pub struct MenuItems;

impl Resource for MenuItems {
    type Entity = MenuItem;
    type New = NewMenuItem;
    type Update = MenuItemUpdate;

    const COLLECTION: &'static str = "menu-items";
    const LABEL: &'static str = "menu item";
}

pub struct ResourceApi<R> {
    client: ApiClient,
    _resource: PhantomData<fn() -> R>,
}

impl<R> Clone for ResourceApi<R> {
    fn clone(&self) -> Self {
        Self {
            client: self.client.clone(),
            _resource: PhantomData,
        }
    }
}

impl<R: Resource> ResourceApi<R> {
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            _resource: PhantomData,
        }
    }

    pub fn collection_path() -> String {
        format!("/api/{}/", R::COLLECTION)
    }

    pub fn item_path(id: Id) -> String {
        format!("/api/{}/{}/", R::COLLECTION, id)
    }

    pub async fn list(&self) -> Result<Vec<R::Entity>, ApiError> {
        self.client
            .get_json(&Self::collection_path())
            .await
            .map_err(|e| logged("list", R::LABEL, e))
    }

    pub async fn create(&self, new: R::New) -> Result<R::Entity, ApiError> {
        let payload = new.into_payload()?;
        self.client
            .send(Method::POST, &Self::collection_path(), payload)
            .await
            .map_err(|e| logged("create", R::LABEL, e))
    }

    pub async fn retrieve(&self, id: Id) -> Result<R::Entity, ApiError> {
        self.client
            .get_json(&Self::item_path(id))
            .await
            .map_err(|e| logged("fetch", R::LABEL, e))
    }

    pub async fn update(&self, id: Id, update: R::Update) -> Result<R::Entity, ApiError> {
        let payload = update.into_payload()?;
        self.client
            .send(Method::PUT, &Self::item_path(id), payload)
            .await
            .map_err(|e| logged("update", R::LABEL, e))
    }

    pub async fn delete(&self, id: Id) -> Result<(), ApiError> {
        self.client
            .delete(&Self::item_path(id))
            .await
            .map_err(|e| logged("delete", R::LABEL, e))
    }
}

fn logged(action: &str, label: &str, error: ApiError) -> ApiError {
    tracing::error!("Failed to {} {}: {}", action, label, error);
    error
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths() {
        assert_eq!(
            ResourceApi::<Restaurants>::collection_path(),
            "/api/restaurants/"
        );
        assert_eq!(
            ResourceApi::<Categories>::item_path(10),
            "/api/menu-categories/10/"
        );
        assert_eq!(ResourceApi::<MenuItems>::item_path(100), "/api/menu-items/100/");
    }
}
