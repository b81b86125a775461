//! Integer counter on the same store runtime as the posts.

mod intent;
mod reducer;
mod state;

pub use intent::CounterIntent;
pub use reducer::CounterReducer;
pub use state::{parse_amount, CounterState};

use crate::store::{Store, StoreError};

/// Handle to a running counter.
#[derive(Clone)]
pub struct Counter {
    store: Store<CounterReducer>,
}

impl Counter {
    pub fn spawn(mailbox_capacity: usize) -> Self {
        Self {
            store: Store::spawn(CounterState::default(), mailbox_capacity),
        }
    }

    pub async fn increment(&self) -> Result<i64, StoreError> {
        self.apply(CounterIntent::Increment).await
    }

    pub async fn decrement(&self) -> Result<i64, StoreError> {
        self.apply(CounterIntent::Decrement).await
    }

    pub async fn increment_by_amount(&self, amount: i64) -> Result<i64, StoreError> {
        self.apply(CounterIntent::IncrementByAmount(amount)).await
    }

    pub async fn reset(&self) -> Result<i64, StoreError> {
        self.apply(CounterIntent::Reset).await
    }

    pub fn count(&self) -> i64 {
        self.store.read(|state| state.count)
    }

    pub async fn close(&self) {
        self.store.close().await;
    }

    async fn apply(&self, intent: CounterIntent) -> Result<i64, StoreError> {
        self.store.dispatch(intent).await.map(|state| state.count)
    }
}
