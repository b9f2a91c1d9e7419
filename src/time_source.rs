//! Time source abstraction so "today" is injectable in tests.
//!
//! The application only needs the current date (for the initial date field
//! and the `query` default), but reading the clock through a trait keeps
//! date-sensitive behavior testable without waiting for midnight.

use chrono::{DateTime, Local, NaiveDate};
use once_cell::sync::OnceCell;
use std::sync::Arc;

/// Global time source instance, defaults to [`RealTimeSource`].
static TIME_SOURCE: OnceCell<Arc<dyn TimeSource>> = OnceCell::new();

pub trait TimeSource: Send + Sync {
    fn now(&self) -> DateTime<Local>;
}

/// Reads the actual system clock.
pub struct RealTimeSource;

impl TimeSource for RealTimeSource {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// Install a custom time source. First caller wins; later calls are ignored,
/// which keeps production initialization idempotent.
pub fn set_time_source(source: Arc<dyn TimeSource>) {
    let _ = TIME_SOURCE.set(source);
}

fn source() -> &'static Arc<dyn TimeSource> {
    TIME_SOURCE.get_or_init(|| Arc::new(RealTimeSource))
}

/// Current local time from the installed source.
pub fn now() -> DateTime<Local> {
    source().now()
}

/// Current local calendar date from the installed source.
pub fn today() -> NaiveDate {
    now().date_naive()
}

/// Fixed-clock source for tests.
#[cfg(any(test, feature = "testing-support"))]
pub struct FixedTimeSource(pub DateTime<Local>);

#[cfg(any(test, feature = "testing-support"))]
impl TimeSource for FixedTimeSource {
    fn now(&self) -> DateTime<Local> {
        self.0
    }
}
