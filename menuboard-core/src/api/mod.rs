//! Remote API access: HTTP client, per-resource controllers, exports and
//! the persisted bearer token.

mod client;
mod error;
mod export;
mod payload;
mod resource;
mod session;

pub use client::ApiClient;
pub use error::ApiError;
pub use export::ExportKind;
pub use payload::{FormData, IntoPayload, Payload};
pub use resource::{Categories, MenuItems, Resource, ResourceApi, Restaurants};
pub use session::{
    SessionError, SessionStore, StaticToken, TokenSource, LEGACY_TOKEN_KEY, TOKEN_KEY,
};
