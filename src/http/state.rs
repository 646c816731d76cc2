//! Application state for the HTTP server.

use std::sync::Arc;

use chrono::{DateTime, Utc};

/// Source of the current instant for requests that omit an explicit `now`.
///
/// The evaluator itself never reads a clock; this trait is the one seam where
/// wall-clock time enters the system, so tests can substitute a fixed value.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Production clock backed by the system time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock pinned to a single instant, for deterministic tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Clock supplying the reference instant for implicit-`now` requests
    pub clock: Arc<dyn Clock>,
}

impl AppState {
    /// Create a new application state with the given clock.
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self { clock }
    }

    /// State backed by the system clock.
    pub fn system() -> Self {
        Self::new(Arc::new(SystemClock))
    }
}
