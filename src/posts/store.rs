//! Post store: the post collection plus the calls that keep it in sync with
//! the remote endpoint.
//!
//! Network calls run in the caller's task. Their results come back into the
//! store as intents, so they serialise with every other mutation. Once the
//! store is closed, results that settle late are dropped instead of applied.

use std::sync::Arc;

use chrono::Utc;
use tokio::sync::watch;

use crate::api::{ApiError, DraftPost, HttpPostsApi, PostsApi};
use crate::config::Config;
use crate::store::{Store, StoreError};

use super::intent::PostsIntent;
use super::model::{Post, PostId, Reactions, ReactionKind};
use super::reducer::PostsReducer;
use super::state::{FetchStatus, PostsState};

/// Result of [`PostStore::add_reaction`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReactionOutcome {
    /// The counter was incremented; holds the post's counters afterwards.
    Applied(Reactions),
    /// No post has that id. Nothing changed.
    PostNotFound,
}

/// Handle to the post collection. Clones share the same store.
#[derive(Clone)]
pub struct PostStore {
    store: Store<PostsReducer>,
    api: Arc<dyn PostsApi>,
}

impl PostStore {
    /// Spawn a store backed by `api`.
    pub fn new(api: Arc<dyn PostsApi>, mailbox_capacity: usize) -> Self {
        Self {
            store: Store::spawn(PostsState::default(), mailbox_capacity),
            api,
        }
    }

    /// Spawn a store talking HTTP to the configured endpoint.
    pub fn from_config(config: &Config) -> Result<Self, ApiError> {
        let api = HttpPostsApi::new(&config.api)?;
        Ok(Self::new(Arc::new(api), config.store.mailbox_capacity))
    }

    /// Fetch the whole collection and replace the local posts with it.
    ///
    /// Status goes to `Loading` first, then `Succeeded` or `Failed`. On
    /// failure the posts are left as they were and the message is kept in
    /// [`last_error`](Self::last_error). Overlapping calls are not
    /// deduplicated; the one that settles last wins.
    pub async fn fetch_all(&self) -> Result<Vec<Post>, StoreError> {
        self.store.dispatch(PostsIntent::FetchStarted).await?;

        match self.api.list_posts().await {
            Ok(posts) => {
                let count = posts.len();
                let state = self
                    .settle(PostsIntent::FetchSucceeded {
                        posts,
                        now: Utc::now(),
                    })
                    .await?;
                tracing::info!(count, "Posts fetched");
                Ok(state.posts)
            }
            Err(err) => {
                tracing::warn!(error = %err, error_type = err.error_type(), "Post fetch failed");
                self.settle(PostsIntent::FetchFailed {
                    message: err.to_string(),
                })
                .await?;
                Err(StoreError::Fetch(err))
            }
        }
    }

    /// Append a post without contacting the server.
    pub async fn add_local(
        &self,
        title: impl Into<String>,
        content: impl Into<String>,
        user_id: u64,
    ) -> Result<Post, StoreError> {
        let state = self
            .store
            .dispatch(PostsIntent::PostAdded {
                title: title.into(),
                content: content.into(),
                user_id,
                now: Utc::now(),
            })
            .await?;

        last_post(state)
    }

    /// Save a post remotely, then append it with a locally reconciled id.
    ///
    /// The server's echoed id is discarded in favour of one past the
    /// largest id held. A draft whose author id is not numeric is refused
    /// before anything is sent. On failure nothing is appended.
    pub async fn add_remote(&self, draft: DraftPost) -> Result<Post, StoreError> {
        if let Err(err) = draft.normalised_user_id() {
            tracing::warn!(error = %err, error_type = err.error_type(), "Draft rejected");
            return Err(StoreError::RemoteWrite(err));
        }

        let saved = match self.api.create_post(&draft).await {
            Ok(saved) => saved,
            Err(err) => {
                tracing::warn!(error = %err, error_type = err.error_type(), "Saving post failed");
                return Err(StoreError::RemoteWrite(err));
            }
        };

        let echoed_id = saved.echoed_id;
        let state = self
            .settle(PostsIntent::NewPostSaved {
                post: saved,
                now: Utc::now(),
            })
            .await?;
        let post = last_post(state)?;

        tracing::debug!(
            id = %post.id,
            echoed_id = ?echoed_id.map(PostId::get),
            user_id = post.user_id,
            "Post saved"
        );
        Ok(post)
    }

    /// Add one reaction to a post.
    ///
    /// An unknown id is not an error: the collection is left unchanged and
    /// [`ReactionOutcome::PostNotFound`] is returned.
    pub async fn add_reaction(
        &self,
        post_id: PostId,
        reaction: ReactionKind,
    ) -> Result<ReactionOutcome, StoreError> {
        let state = self
            .store
            .dispatch(PostsIntent::ReactionAdded { post_id, reaction })
            .await?;

        match state.post(post_id) {
            Some(post) => Ok(ReactionOutcome::Applied(post.reactions)),
            None => {
                tracing::warn!(post_id = %post_id, reaction = %reaction, "Reaction for unknown post ignored");
                Ok(ReactionOutcome::PostNotFound)
            }
        }
    }

    pub fn all_posts(&self) -> Vec<Post> {
        self.store.read(|state| state.posts.clone())
    }

    pub fn fetch_status(&self) -> FetchStatus {
        self.store.read(|state| state.status)
    }

    pub fn last_error(&self) -> Option<String> {
        self.store.read(|state| state.error.clone())
    }

    pub fn post(&self, id: PostId) -> Option<Post> {
        self.store.read(|state| state.post(id).cloned())
    }

    pub fn snapshot(&self) -> PostsState {
        self.store.state()
    }

    /// Watch the collection; the receiver is marked changed on every
    /// transition that alters it.
    pub fn subscribe(&self) -> watch::Receiver<PostsState> {
        self.store.subscribe()
    }

    /// Stop the store. Fetches or saves still in flight will not touch the
    /// collection when they settle.
    pub async fn close(&self) {
        self.store.close().await;
    }

    /// Apply the continuation of a network call, unless the store is gone.
    async fn settle(&self, intent: PostsIntent) -> Result<PostsState, StoreError> {
        self.store.dispatch(intent).await.inspect_err(|_| {
            tracing::debug!("Store closed before the request settled; result dropped");
        })
    }
}

/// The post just appended. Appending intents always grow the collection, so
/// the reply they produce ends with the new post.
fn last_post(state: PostsState) -> Result<Post, StoreError> {
    state.posts.into_iter().next_back().ok_or(StoreError::MissingPost)
}
