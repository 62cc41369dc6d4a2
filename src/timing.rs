//! Wall-clock measurement around a solver call.

use std::time::{Duration, Instant};

/// A value together with how long it took to produce.
#[derive(Debug, Clone)]
pub struct Timed<T> {
    pub value: T,
    pub elapsed: Duration,
}

/// Runs `f` and records its elapsed time.
pub fn timed<T, F>(f: F) -> Timed<T>
where
    F: FnOnce() -> T,
{
    let start = Instant::now();
    let value = f();
    Timed {
        value,
        elapsed: start.elapsed(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_value_and_duration() {
        let result = timed(|| {
            std::thread::sleep(Duration::from_millis(2));
            7
        });
        assert_eq!(result.value, 7);
        assert!(result.elapsed >= Duration::from_millis(2));
    }
}
