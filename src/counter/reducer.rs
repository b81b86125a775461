use crate::mvi::Reducer;

use super::intent::CounterIntent;
use super::state::CounterState;

pub struct CounterReducer;

impl Reducer for CounterReducer {
    type State = CounterState;
    type Intent = CounterIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        let count = match intent {
            CounterIntent::Increment => state.count.saturating_add(1),
            CounterIntent::Decrement => state.count.saturating_sub(1),
            CounterIntent::IncrementByAmount(amount) => state.count.saturating_add(amount),
            CounterIntent::Reset => 0,
        };
        CounterState { count }
    }
}
