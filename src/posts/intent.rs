use chrono::{DateTime, Utc};

use crate::mvi::Intent;

use super::model::{PostId, RawPost, ReactionKind, SavedPost};

#[derive(Debug, Clone)]
pub enum PostsIntent {
    /// A full-collection fetch began.
    FetchStarted,
    /// The listing endpoint answered. `now` is the settle instant.
    FetchSucceeded {
        posts: Vec<RawPost>,
        now: DateTime<Utc>,
    },
    FetchFailed { message: String },
    /// Optimistic local add, no server round trip.
    PostAdded {
        title: String,
        content: String,
        user_id: u64,
        now: DateTime<Utc>,
    },
    /// The create endpoint echoed a post back.
    NewPostSaved { post: SavedPost, now: DateTime<Utc> },
    ReactionAdded {
        post_id: PostId,
        reaction: ReactionKind,
    },
}

impl Intent for PostsIntent {}
