//! Post, reaction and identifier types.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Canonical post identifier.
///
/// Identifiers arriving from the API (numbers or numeric strings) are
/// normalised to this type before they reach the store.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct PostId(u64);

impl PostId {
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    pub const fn get(self) -> u64 {
        self.0
    }

    /// The identifier following this one.
    pub const fn next(self) -> Self {
        Self(self.0.saturating_add(1))
    }
}

impl From<u64> for PostId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// The fixed set of reactions a post can receive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ReactionKind {
    ThumbsUp,
    Wow,
    Heart,
    Rocket,
    Coffee,
}

/// Label that does not name a [`ReactionKind`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown reaction '{label}'")]
pub struct UnknownReaction {
    pub label: String,
}

impl ReactionKind {
    /// All kinds, in display order.
    pub const ALL: [ReactionKind; 5] = [
        ReactionKind::ThumbsUp,
        ReactionKind::Wow,
        ReactionKind::Heart,
        ReactionKind::Rocket,
        ReactionKind::Coffee,
    ];

    /// Label used by callers and on the wire.
    pub fn label(self) -> &'static str {
        match self {
            ReactionKind::ThumbsUp => "thumbsUp",
            ReactionKind::Wow => "wow",
            ReactionKind::Heart => "heart",
            ReactionKind::Rocket => "rocket",
            ReactionKind::Coffee => "coffee",
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            ReactionKind::ThumbsUp => "👍",
            ReactionKind::Wow => "😮",
            ReactionKind::Heart => "❤️",
            ReactionKind::Rocket => "🚀",
            ReactionKind::Coffee => "☕",
        }
    }
}

impl FromStr for ReactionKind {
    type Err = UnknownReaction;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ReactionKind::ALL
            .into_iter()
            .find(|kind| kind.label() == s)
            .ok_or_else(|| UnknownReaction {
                label: s.to_string(),
            })
    }
}

impl fmt::Display for ReactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Reaction counters for a single post. Every kind is always present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reactions {
    pub thumbs_up: u32,
    pub wow: u32,
    pub heart: u32,
    pub rocket: u32,
    pub coffee: u32,
}

impl Reactions {
    pub fn get(&self, kind: ReactionKind) -> u32 {
        match kind {
            ReactionKind::ThumbsUp => self.thumbs_up,
            ReactionKind::Wow => self.wow,
            ReactionKind::Heart => self.heart,
            ReactionKind::Rocket => self.rocket,
            ReactionKind::Coffee => self.coffee,
        }
    }

    pub fn increment(&mut self, kind: ReactionKind) {
        let slot = match kind {
            ReactionKind::ThumbsUp => &mut self.thumbs_up,
            ReactionKind::Wow => &mut self.wow,
            ReactionKind::Heart => &mut self.heart,
            ReactionKind::Rocket => &mut self.rocket,
            ReactionKind::Coffee => &mut self.coffee,
        };
        *slot = slot.saturating_add(1);
    }

    /// Sum over all kinds.
    pub fn total(&self) -> u64 {
        ReactionKind::ALL
            .into_iter()
            .map(|kind| u64::from(self.get(kind)))
            .sum()
    }
}

/// A post held by the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: PostId,
    pub title: String,
    pub content: String,
    /// Client-side timestamp; not the true creation time.
    pub date: DateTime<Utc>,
    pub user_id: u64,
    pub reactions: Reactions,
}

/// A post as listed by the API, identifiers already normalised.
#[derive(Debug, Clone, PartialEq)]
pub struct RawPost {
    pub id: PostId,
    pub title: String,
    pub content: String,
    pub user_id: u64,
}

/// A post echoed back by the create endpoint.
///
/// `echoed_id` is whatever the server sent; it is not unique and never
/// becomes the stored identifier.
#[derive(Debug, Clone, PartialEq)]
pub struct SavedPost {
    pub echoed_id: Option<PostId>,
    pub title: String,
    pub content: String,
    pub user_id: u64,
}
