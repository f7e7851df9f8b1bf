//! Client-side synchronization layer: cached collections per resource, the
//! restaurant selection, and cancellation scopes for in-flight actions.

mod resource_store;
mod scope;
mod selection;

pub use resource_store::ResourceStore;
pub use scope::Scope;
pub use selection::RestaurantSelection;
