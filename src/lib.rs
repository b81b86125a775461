//! Client-side state for a small bulletin board.
//!
//! Posts with reactions are kept in a [`PostStore`] that syncs against a
//! mock REST endpoint and compensates for its unreliable identifiers. A
//! [`Counter`] rides on the same single-writer [`Store`] runtime.

pub mod api;
pub mod config;
pub mod counter;
pub mod mvi;
pub mod posts;
pub mod store;
pub mod telemetry;

pub use counter::Counter;
pub use posts::PostStore;
pub use store::{Store, StoreError};
