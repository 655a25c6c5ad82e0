//! Cuponera Digital storefront backend.
//!
//! Serves the persisted personalization document, the coupon feed, and the
//! built Dioxus frontend over HTTP. State lives in JSON documents on disk;
//! there is no database.

pub mod api;
pub mod config;
pub mod seed;
pub mod state;
pub mod store;

pub use state::AppState;
