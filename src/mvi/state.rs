//! Base trait for store state in MVI architecture.

/// Marker trait for state held by a [`Store`](crate::store::Store).
///
/// States should be:
/// - Immutable (Clone to create new snapshots)
/// - Self-contained (all data a reader needs)
/// - Comparable (PartialEq for detecting changes)
/// - Shareable across tasks (published through a watch channel)
pub trait StoreState: Clone + PartialEq + Default + Send + Sync + 'static {}
