use std::time::{Duration, Instant};

/// An operation's return value and how long it took.
#[derive(Debug, Clone, PartialEq)]
pub struct Timed<T> {
    pub value: T,
    pub elapsed_ms: f64,
}

/// Runs `op` and reports its wall time in milliseconds, truncated to two
/// decimals.
pub fn measure<T, F: FnOnce() -> T>(op: F) -> Timed<T> {
    let start = Instant::now();
    let value = op();
    Timed { value, elapsed_ms: to_millis(start.elapsed()) }
}

pub fn to_millis(elapsed: Duration) -> f64 {
    // whole hundredths of a millisecond
    (elapsed.as_nanos() / 10_000) as f64 / 100.0
}
