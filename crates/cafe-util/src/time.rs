//! Time utilities for the cafe console
//!
//! Billing reads wall-clock time through the [`Clock`] capability so that
//! the registry never calls a global "now" itself. The console uses
//! [`SystemClock`]; tests drive a [`ManualClock`].
//!
//! # Mock Time for Development
//!
//! In debug builds, the `CAFE_MOCK_TIME` environment variable can be set
//! to shift the system clock for all time-sensitive operations. Mock time
//! advances at the same rate as real time.
//!
//! Format: `YYYY-MM-DD HH:MM:SS` (e.g., `2025-12-25 14:30:00`)
//!
//! Example:
//! ```bash
//! CAFE_MOCK_TIME="2025-12-25 14:30:00" cargo run --bin cafe-console
//! ```

use chrono::{DateTime, Local, NaiveDateTime, TimeZone};
use std::cell::Cell;
use std::rc::Rc;
use std::sync::OnceLock;
use std::time::Duration;

/// Environment variable name for mock time (debug builds only)
pub const MOCK_TIME_ENV_VAR: &str = "CAFE_MOCK_TIME";

/// Display pattern for session start times
pub const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Milliseconds in one billable hour
pub const MILLIS_PER_HOUR: f64 = 3_600_000.0;

/// Cached mock time offset from the real time when the process started.
static MOCK_TIME_OFFSET: OnceLock<Option<chrono::Duration>> = OnceLock::new();

/// Offset that shifts `real_now` to the mock time string, if it parses.
pub fn mock_offset(mock: &str, real_now: DateTime<Local>) -> Option<chrono::Duration> {
    parse_datetime(mock).map(|mock_dt| mock_dt.signed_duration_since(real_now))
}

#[allow(clippy::disallowed_methods)] // Internal implementation that wraps Local::now()
fn get_mock_time_offset() -> Option<chrono::Duration> {
    *MOCK_TIME_OFFSET.get_or_init(|| {
        #[cfg(debug_assertions)]
        {
            let mock_time_str = std::env::var(MOCK_TIME_ENV_VAR).ok()?;
            let offset = mock_offset(&mock_time_str, Local::now());
            match offset {
                Some(offset) => tracing::info!(
                    mock_time = %mock_time_str,
                    offset_secs = offset.num_seconds(),
                    "Mock time enabled"
                ),
                None => tracing::warn!(
                    mock_time = %mock_time_str,
                    expected_format = DATETIME_FORMAT,
                    "Invalid mock time"
                ),
            }
            offset
        }
        #[cfg(not(debug_assertions))]
        {
            None
        }
    })
}

/// Returns whether mock time is currently active.
pub fn is_mock_time_active() -> bool {
    get_mock_time_offset().is_some()
}

/// Get the current local time, respecting mock time settings in debug builds.
#[allow(clippy::disallowed_methods)] // This is the wrapper that provides mock time support
pub fn now() -> DateTime<Local> {
    let real_now = Local::now();

    match get_mock_time_offset() {
        Some(offset) => real_now + offset,
        None => real_now,
    }
}

/// Parse a `YYYY-MM-DD HH:MM:SS` string as local time.
pub fn parse_datetime(s: &str) -> Option<DateTime<Local>> {
    let naive = NaiveDateTime::parse_from_str(s, DATETIME_FORMAT).ok()?;
    Local.from_local_datetime(&naive).single()
}

/// Format a DateTime for display with full date and time.
pub fn format_datetime_full(dt: &DateTime<Local>) -> String {
    dt.format(DATETIME_FORMAT).to_string()
}

/// Elapsed time from `start` to `end`, or zero if the clock went backwards.
pub fn elapsed_between(start: DateTime<Local>, end: DateTime<Local>) -> Duration {
    end.signed_duration_since(start)
        .to_std()
        .unwrap_or(Duration::ZERO)
}

/// Whole minutes in a duration, rounded down.
pub fn whole_minutes(d: Duration) -> u64 {
    d.as_secs() / 60
}

/// Fractional hours in a duration, at millisecond resolution.
pub fn fractional_hours(d: Duration) -> f64 {
    d.as_millis() as f64 / MILLIS_PER_HOUR
}

/// Source of wall-clock time
pub trait Clock {
    fn now(&self) -> DateTime<Local>;
}

/// The process clock (with mock-time support in debug builds)
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        now()
    }
}

/// A clock that only moves when told to.
///
/// Clones share the same instant, so a test can keep one handle and give
/// another to the code under test.
#[derive(Debug, Clone)]
pub struct ManualClock {
    current: Rc<Cell<DateTime<Local>>>,
}

impl ManualClock {
    pub fn new(start: DateTime<Local>) -> Self {
        Self {
            current: Rc::new(Cell::new(start)),
        }
    }

    pub fn set(&self, at: DateTime<Local>) {
        self.current.set(at);
    }

    /// Move the clock forward. A step past the representable range leaves it unchanged.
    pub fn advance(&self, by: Duration) {
        let advanced = chrono::Duration::from_std(by)
            .ok()
            .and_then(|step| self.current.get().checked_add_signed(step));
        if let Some(at) = advanced {
            self.current.set(at);
        }
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Local> {
        self.current.get()
    }
}
