//! Reducer for the post collection.

use chrono::Duration;

use crate::mvi::Reducer;

use super::intent::PostsIntent;
use super::model::{Post, Reactions};
use super::state::{FetchStatus, PostsState};

/// Reducer for post collection transitions.
pub struct PostsReducer;

impl Reducer for PostsReducer {
    type State = PostsState;
    type Intent = PostsIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            PostsIntent::FetchStarted => {
                state.status = FetchStatus::Loading;
                state
            }

            PostsIntent::FetchSucceeded { posts, now } => {
                // The API has no dates; space them one minute apart going
                // back from `now`, newest first.
                let posts = posts
                    .into_iter()
                    .zip(1i64..)
                    .map(|(raw, minutes_ago)| Post {
                        id: raw.id,
                        title: raw.title,
                        content: raw.content,
                        date: now - Duration::minutes(minutes_ago),
                        user_id: raw.user_id,
                        reactions: Reactions::default(),
                    })
                    .collect();

                PostsState {
                    posts,
                    status: FetchStatus::Succeeded,
                    error: None,
                }
            }

            PostsIntent::FetchFailed { message } => {
                state.status = FetchStatus::Failed;
                state.error = Some(message);
                state
            }

            PostsIntent::PostAdded {
                title,
                content,
                user_id,
                now,
            } => {
                let id = state.next_post_id();
                state.posts.push(Post {
                    id,
                    title,
                    content,
                    date: now,
                    user_id,
                    reactions: Reactions::default(),
                });
                state
            }

            PostsIntent::NewPostSaved { post, now } => {
                // The server's id is not unique; assign our own.
                let id = state.next_post_id();
                state.posts.push(Post {
                    id,
                    title: post.title,
                    content: post.content,
                    date: now,
                    user_id: post.user_id,
                    reactions: Reactions::default(),
                });
                state
            }

            PostsIntent::ReactionAdded { post_id, reaction } => {
                if let Some(post) = state.posts.iter_mut().find(|post| post.id == post_id) {
                    post.reactions.increment(reaction);
                }
                state
            }
        }
    }
}
