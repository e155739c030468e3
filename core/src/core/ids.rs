// car_catalog/src/core/ids.rs

//! Id generation strategies for new records.

use crate::core::car::CarId;
use std::sync::atomic::{AtomicU64, Ordering};
use uuid::Uuid;

/// Produces candidate ids for newly created cars.
///
/// The store discards a candidate that is already live and asks again, so a
/// generator only has to be unlikely to repeat itself, not perfect. After a
/// bounded number of live candidates in a row the store stops asking and uses
/// a random UUID for that record instead.
pub trait IdGenerator: Send + Sync {
  fn next_id(&self) -> CarId;
}

/// Random v4 UUIDs. The default strategy.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIds;

impl IdGenerator for UuidIds {
  fn next_id(&self) -> CarId {
    CarId::new(Uuid::new_v4().to_string())
  }
}

/// Decimal counter ids: "1", "2", "3", ...
#[derive(Debug)]
pub struct SequentialIds {
  next: AtomicU64,
}

impl SequentialIds {
  pub fn new() -> Self {
    Self::starting_at(1)
  }

  pub fn starting_at(first: u64) -> Self {
    SequentialIds {
      next: AtomicU64::new(first),
    }
  }
}

impl Default for SequentialIds {
  fn default() -> Self {
    Self::new()
  }
}

impl IdGenerator for SequentialIds {
  fn next_id(&self) -> CarId {
    CarId::new(self.next.fetch_add(1, Ordering::Relaxed).to_string())
  }
}
