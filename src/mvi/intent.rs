//! Base trait for intents in MVI architecture.

/// Marker trait for intent objects.
///
/// Intents represent:
/// - Caller actions (add a post, press a reaction)
/// - Settled remote calls (fetch succeeded, post saved)
///
/// Intents are processed by reducers to produce new states.
pub trait Intent: std::fmt::Debug + Send + 'static {}
