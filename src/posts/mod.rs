//! Posts with reactions, synchronised against a mock REST endpoint.

mod intent;
mod model;
mod reducer;
mod state;
mod store;

pub use intent::PostsIntent;
pub use model::{Post, PostId, RawPost, ReactionKind, Reactions, SavedPost, UnknownReaction};
pub use reducer::PostsReducer;
pub use state::{FetchStatus, PostsState};
pub use store::{PostStore, ReactionOutcome};
