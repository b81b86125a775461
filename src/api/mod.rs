//! Remote posts endpoint.
//!
//! [`PostsApi`] is the seam between the store and the network. The HTTP
//! implementation normalises every identifier it receives before handing
//! posts to the store.

mod client;
mod error;
mod wire;

pub use client::{HttpPostsApi, PostsApi};
pub use error::ApiError;
pub use wire::{DraftPost, LooseNumber};
