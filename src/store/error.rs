//! Errors surfaced by store operations.

use thiserror::Error;

use crate::api::ApiError;

/// Errors that can occur while driving a store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Fetching the post collection failed. The failure is also recorded
    /// in the posts state (`status = Failed`, `error` set).
    #[error("Failed to fetch posts: {0}")]
    Fetch(#[source] ApiError),

    /// Saving a post remotely failed. Nothing was added to the collection.
    #[error("Failed to save post: {0}")]
    RemoteWrite(#[source] ApiError),

    /// The store runtime has shut down.
    #[error("Store is closed")]
    Closed,

    /// An append was reduced but the resulting state holds no posts.
    #[error("Store reply is missing the appended post")]
    MissingPost,
}

impl StoreError {
    /// Get error type string for logs and JSON output.
    pub fn error_type(&self) -> &'static str {
        match self {
            StoreError::Fetch(_) => "fetch_error",
            StoreError::RemoteWrite(_) => "remote_write_error",
            StoreError::Closed => "store_closed",
            StoreError::MissingPost => "missing_post",
        }
    }
}
