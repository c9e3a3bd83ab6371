use std::time::{
    Duration,
    Instant
};

/// Monotonic timer for the measured region. Milliseconds are derived from
/// whole elapsed microseconds, so the reading carries microsecond resolution.
pub struct Stopwatch {
    started: Instant
}

impl Stopwatch {
    pub fn start() -> Stopwatch {
        Stopwatch { started: Instant::now() }
    }

    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    pub fn elapsed_milliseconds(&self) -> f64 {
        self.elapsed().as_micros() as f64 / 1000.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn elapsed_time_is_non_negative_and_grows() {
        let stopwatch = Stopwatch::start();
        let first = stopwatch.elapsed_milliseconds();
        std::thread::sleep(Duration::from_millis(2));
        let second = stopwatch.elapsed_milliseconds();
        assert!(first >= 0.0);
        assert!(second >= first + 1.0);
    }
}
