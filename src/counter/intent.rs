use crate::mvi::Intent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterIntent {
    Increment,
    Decrement,
    IncrementByAmount(i64),
    Reset,
}

impl Intent for CounterIntent {}
