use crate::mvi::StoreState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CounterState {
    pub count: i64,
}

impl StoreState for CounterState {}

/// Parse a typed amount. The count is an integer, so fractional input such
/// as `"2.5"` is rejected rather than truncated; it counts as 0 like any
/// other non-integer text.
pub fn parse_amount(text: &str) -> i64 {
    text.trim().parse().unwrap_or(0)
}
