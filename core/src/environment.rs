//! Injected dependencies behind traits.

use chrono::{DateTime, Utc};

/// Clock trait - abstracts time operations for testability
///
/// Production code uses [`SystemClock`]; tests pin time with a fixed
/// implementation so order timestamps are deterministic.
pub trait Clock: Send + Sync {
    /// Get the current time
    fn now(&self) -> DateTime<Utc>;
}

/// Clock backed by the system time
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
