//! Single-writer state container.
//!
//! A [`Store`] owns one state value inside a spawned runtime task. Callers
//! send intents through a bounded mailbox; the runtime applies them one at a
//! time with the store's [`Reducer`](crate::mvi::Reducer) and publishes each
//! new state on a watch channel, so readers never observe a half-applied
//! transition.

mod error;
mod runtime;

pub use error::StoreError;
pub use runtime::Store;
