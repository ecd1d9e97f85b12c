//! Time sources for the controller.
//!
//! The controller never reads wall-clock time directly; it asks a [`Clock`].
//! The browser front-end uses [`InstantClock`], tests drive a [`ManualClock`].

use instant::Instant;
use std::cell::Cell;
use std::rc::Rc;

pub trait Clock {
    /// Monotonic time in seconds. Only differences are meaningful.
    fn now_sec(&self) -> f64;
}

/// Monotonic clock backed by `instant` (`performance.now()` on wasm).
#[derive(Clone, Debug)]
pub struct InstantClock {
    origin: Instant,
}

impl InstantClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for InstantClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for InstantClock {
    fn now_sec(&self) -> f64 {
        self.origin.elapsed().as_secs_f64()
    }
}

/// Hand-driven clock. Clones share the same time so a test can keep one
/// handle while the controller owns another.
#[derive(Clone, Debug, Default)]
pub struct ManualClock {
    now: Rc<Cell<f64>>,
}

impl ManualClock {
    pub fn new(start_sec: f64) -> Self {
        Self {
            now: Rc::new(Cell::new(start_sec)),
        }
    }

    pub fn set(&self, t_sec: f64) {
        self.now.set(t_sec);
    }

    pub fn advance(&self, dt_sec: f64) {
        self.now.set(self.now.get() + dt_sec);
    }
}

impl Clock for ManualClock {
    fn now_sec(&self) -> f64 {
        self.now.get()
    }
}
