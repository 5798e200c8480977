use std::{
    fmt::Debug,
    time::{Duration, Instant},
};

/// Source of wall-clock time, measured from an arbitrary fixed origin.
pub trait Clock: Debug {
    fn now(&self) -> Duration;
}

#[derive(Debug, Clone, Copy)]
pub struct MonotonicClock {
    start: Instant,
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self { start: Instant::now() }
    }
}

impl Clock for MonotonicClock {
    fn now(&self) -> Duration {
        self.start.elapsed()
    }
}

/// Lets an event through at most once per `interval`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Throttle {
    interval: Duration,
    last: Option<Duration>,
}

impl Throttle {
    pub fn new(interval: Duration) -> Self {
        Self { interval, last: None }
    }

    pub fn ready(&self, now: Duration) -> bool {
        match self.last {
            None => true,
            Some(last) => now.saturating_sub(last) >= self.interval,
        }
    }

    /// Records `now` and returns true if the interval has elapsed since the
    /// last accepted event.
    pub fn try_fire(&mut self, now: Duration) -> bool {
        if !self.ready(now) {
            return false;
        }
        self.last = Some(now);
        true
    }
}
