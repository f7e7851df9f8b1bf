//! Per-resource synchronized collection.
//!
//! A [`ResourceStore`] owns the cached list for one resource type. Reads go
//! to the cache; every mutation goes to the API first and is applied to the
//! cache only once the server has answered successfully, using the server's
//! representation. Successful mutations send a success notice; failed
//! actions are logged, reported through the [`Notifier`] and leave the cache
//! exactly as it was.
//!
//! Actions are not serialized against each other: concurrent mutations land
//! in completion order.

use std::sync::Arc;

use tokio::sync::watch;

use crate::api::{ApiClient, ApiError, Resource, ResourceApi};
use crate::models::{Entity, Id};
use crate::notify::{Notice, Notifier};

pub struct ResourceStore<R: Resource> {
    api: ResourceApi<R>,
    items: Arc<watch::Sender<Vec<R::Entity>>>,
    notifier: Arc<dyn Notifier>,
}

impl<R: Resource> Clone for ResourceStore<R> {
    fn clone(&self) -> Self {
        Self {
            api: self.api.clone(),
            items: Arc::clone(&self.items),
            notifier: Arc::clone(&self.notifier),
        }
    }
}

impl<R: Resource> ResourceStore<R> {
    pub fn new(client: ApiClient, notifier: Arc<dyn Notifier>) -> Self {
        let (items, _) = watch::channel(Vec::new());
        Self {
            api: ResourceApi::new(client),
            items: Arc::new(items),
            notifier,
        }
    }

    /// The controller this store calls.
    pub fn api(&self) -> &ResourceApi<R> {
        &self.api
    }

    /// Copy of the cached collection, in cache order.
    pub fn snapshot(&self) -> Vec<R::Entity> {
        self.items.borrow().clone()
    }

    /// Runs `f` against the cached collection without cloning it.
    pub fn read<T>(&self, f: impl FnOnce(&[R::Entity]) -> T) -> T {
        f(&self.items.borrow())
    }

    pub fn get(&self, id: Id) -> Option<R::Entity> {
        self.read(|items| items.iter().find(|e| e.id() == id).cloned())
    }

    pub fn len(&self) -> usize {
        self.read(|items| items.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Receiver that observes every change to the collection.
    pub fn subscribe(&self) -> watch::Receiver<Vec<R::Entity>> {
        self.items.subscribe()
    }

    /// Replaces the whole collection with the server's list.
    ///
    /// Returns whether the cache was refreshed.
    pub async fn fetch_all(&self) -> bool {
        match self.api.list().await {
            Ok(entities) => {
                tracing::debug!("Loaded {} {}(s)", entities.len(), R::LABEL);
                self.items.send_replace(entities);
                true
            }
            Err(e) => {
                self.report(&format!("Could not load {}", plural::<R>()), &e);
                false
            }
        }
    }

    /// Retrieves one entity and upserts it into the cache.
    pub async fn fetch_one(&self, id: Id) -> Option<R::Entity> {
        match self.api.retrieve(id).await {
            Ok(entity) => {
                let cached = entity.clone();
                self.items.send_modify(|items| upsert_by_id(items, cached));
                Some(entity)
            }
            Err(e) => {
                self.report(&format!("Could not load {} {}", R::LABEL, id), &e);
                None
            }
        }
    }

    /// Creates an entity and appends the server's copy to the cache.
    ///
    /// A fetch that resolved first may already hold the new id; that entry is
    /// replaced instead.
    pub async fn add(&self, new: R::New) -> Option<R::Entity> {
        match self.api.create(new).await {
            Ok(created) => {
                let cached = created.clone();
                self.items.send_modify(|items| upsert_by_id(items, cached));
                self.confirm(format!("Created {} {}", R::LABEL, created.id()));
                Some(created)
            }
            Err(e) => {
                self.report(&format!("Could not create {}", R::LABEL), &e);
                None
            }
        }
    }

    /// Updates an entity and swaps in the server's copy.
    ///
    /// An id that is not cached stays absent from the cache even when the
    /// server accepts the update.
    pub async fn modify(&self, id: Id, update: R::Update) -> Option<R::Entity> {
        match self.api.update(id, update).await {
            Ok(updated) => {
                let cached = updated.clone();
                let replaced = self
                    .items
                    .send_if_modified(|items| replace_by_id(items, cached));
                if !replaced {
                    tracing::debug!("Updated {} {} is not cached", R::LABEL, id);
                }
                self.confirm(format!("Updated {} {}", R::LABEL, id));
                Some(updated)
            }
            Err(e) => {
                self.report(&format!("Could not update {} {}", R::LABEL, id), &e);
                None
            }
        }
    }

    /// Deletes an entity and drops it from the cache.
    pub async fn remove(&self, id: Id) -> bool {
        match self.api.delete(id).await {
            Ok(()) => {
                self.items.send_if_modified(|items| remove_by_id(items, id));
                self.confirm(format!("Deleted {} {}", R::LABEL, id));
                true
            }
            Err(e) => {
                self.report(&format!("Could not delete {} {}", R::LABEL, id), &e);
                false
            }
        }
    }

    fn confirm(&self, message: String) {
        tracing::info!("{}", message);
        self.notifier.notify(Notice::success(message));
    }

    fn report(&self, message: &str, error: &ApiError) {
        tracing::warn!("{}: {}", message, error);
        self.notifier.notify(Notice::error(message));
    }
}

fn plural<R: Resource>() -> String {
    R::COLLECTION.replace('-', " ")
}

/// Swaps the entity sharing `entity`'s id. Returns whether one was found.
pub(crate) fn replace_by_id<T: Entity>(items: &mut [T], entity: T) -> bool {
    match items.iter_mut().find(|e| e.id() == entity.id()) {
        Some(slot) => {
            *slot = entity;
            true
        }
        None => false,
    }
}

pub(crate) fn upsert_by_id<T: Entity>(items: &mut Vec<T>, entity: T) {
    match items.iter_mut().find(|e| e.id() == entity.id()) {
        Some(slot) => *slot = entity,
        None => items.push(entity),
    }
}

/// Drops every entity with `id`. Returns whether anything was removed.
pub(crate) fn remove_by_id<T: Entity>(items: &mut Vec<T>, id: Id) -> bool {
    let before = items.len();
    items.retain(|e| e.id() != id);
    items.len() != before
}
