//! Model-View-Intent (MVI) primitives.
//!
//! Every state transition in the crate goes through these traits.
//!
//! # Architecture
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! - **State**: Immutable snapshot handed to readers
//! - **Intent**: Caller actions or settled network results
//! - **Reducer**: Pure function that transforms state based on intents

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::StoreState;
