// car_catalog/src/core/clock.rs

use chrono::{DateTime, Duration, Utc};

/// Source of "now" for record timestamps.
pub trait Clock: Send + Sync {
  fn now(&self) -> DateTime<Utc>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
  fn now(&self) -> DateTime<Utc> {
    Utc::now()
  }
}

/// The next `updatedAt` for a record last touched at `previous`: the clock's
/// reading, or one nanosecond past `previous` if the clock has not moved on.
pub(crate) fn next_update_stamp(now: DateTime<Utc>, previous: DateTime<Utc>) -> DateTime<Utc> {
  if now > previous {
    now
  } else {
    previous + Duration::nanoseconds(1)
  }
}
