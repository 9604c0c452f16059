//! Wall-clock abstraction for date-dependent booking rules.

use chrono::Utc;

use crate::types::Date;

/// Source of "today" for booking date validation.
///
/// Handlers read the evaluation date through this trait instead of calling
/// `Utc::now()` inline, so the past-start-date rule can be exercised with a
/// pinned date in tests.
pub trait Clock: Send + Sync {
    /// The current calendar date in UTC.
    fn today(&self) -> Date;
}

/// Production clock backed by system time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> Date {
        Utc::now().date_naive()
    }
}

/// Clock pinned to a fixed date, for tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub Date);

impl Clock for FixedClock {
    fn today(&self) -> Date {
        self.0
    }
}
