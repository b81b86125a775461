//! State for the post collection.

use crate::mvi::StoreState;

use super::model::{Post, PostId};

/// Lifecycle of the most recent full-collection fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FetchStatus {
    #[default]
    Idle,
    Loading,
    Succeeded,
    Failed,
}

impl FetchStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            FetchStatus::Idle => "idle",
            FetchStatus::Loading => "loading",
            FetchStatus::Succeeded => "succeeded",
            FetchStatus::Failed => "failed",
        }
    }
}

/// Posts in insertion/fetch order plus fetch lifecycle.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PostsState {
    pub posts: Vec<Post>,
    pub status: FetchStatus,
    /// Message from the last failed fetch, cleared on success.
    pub error: Option<String>,
}

impl StoreState for PostsState {}

impl PostsState {
    pub fn post(&self, id: PostId) -> Option<&Post> {
        self.posts.iter().find(|post| post.id == id)
    }

    /// Identifier for the next post added locally or reconciled from the
    /// server: one past the largest id held, or 1 when empty.
    pub fn next_post_id(&self) -> PostId {
        self.posts
            .iter()
            .map(|post| post.id)
            .max()
            .map_or(PostId::new(1), PostId::next)
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.status, FetchStatus::Loading)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::posts::model::Reactions;
    use chrono::Utc;

    fn post(id: u64) -> Post {
        Post {
            id: PostId::new(id),
            title: String::new(),
            content: String::new(),
            date: Utc::now(),
            user_id: 1,
            reactions: Reactions::default(),
        }
    }

    #[test]
    fn idle_is_default() {
        let state = PostsState::default();
        assert_eq!(state.status, FetchStatus::Idle);
        assert!(state.posts.is_empty());
        assert!(state.error.is_none());
    }

    #[test]
    fn next_id_on_empty_is_one() {
        assert_eq!(PostsState::default().next_post_id(), PostId::new(1));
    }

    #[test]
    fn next_id_ignores_order() {
        let state = PostsState {
            posts: vec![post(3), post(10), post(2)],
            ..Default::default()
        };
        assert_eq!(state.next_post_id(), PostId::new(11));
    }

    #[test]
    fn status_strings() {
        assert_eq!(FetchStatus::Idle.as_str(), "idle");
        assert_eq!(FetchStatus::Failed.as_str(), "failed");
    }
}
