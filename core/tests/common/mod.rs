// tests/common/mod.rs
#![allow(dead_code)] // Not every test file uses every helper

use car_catalog::{CarId, Clock, InMemoryCatalog, NewCarFields, SequentialIds};
use chrono::{DateTime, Duration, TimeZone, Utc};
use parking_lot::Mutex;
use std::sync::Arc;
use tracing::Level;

// --- Fixtures ---
pub fn new_car(name: &str, category: &str, price: f64) -> NewCarFields {
  NewCarFields {
    name: name.to_string(),
    category: category.to_string(),
    image: format!("/img/{}.png", name.to_lowercase().replace(' ', "-")),
    price,
    features: vec!["Bluetooth".to_string(), "Cruise Control".to_string()],
    seats: 5,
    transmission: "Manual".to_string(),
    fuel: "Gasoline".to_string(),
    description: None,
  }
}

pub fn id(raw: &str) -> CarId {
  CarId::new(raw)
}

pub fn names(cars: &[car_catalog::Car]) -> Vec<String> {
  cars.iter().map(|car| car.name.clone()).collect()
}

/// Sample data, sequential ids, no latency.
pub fn seeded_store() -> InMemoryCatalog {
  InMemoryCatalog::new()
    .with_id_generator(Arc::new(SequentialIds::new()))
    .with_sample_data()
}

// --- A clock the test moves by hand ---
#[derive(Debug)]
pub struct ManualClock {
  now: Mutex<DateTime<Utc>>,
}

impl ManualClock {
  pub fn new() -> Arc<Self> {
    Arc::new(ManualClock {
      now: Mutex::new(Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap()),
    })
  }

  pub fn advance(&self, by: Duration) {
    *self.now.lock() += by;
  }
}

impl Clock for ManualClock {
  fn now(&self) -> DateTime<Utc> {
    *self.now.lock()
  }
}

// --- Helper for Tracing Setup (call once per test run if needed) ---
use once_cell::sync::Lazy;
static TRACING_INIT: Lazy<()> = Lazy::new(|| {
  tracing_subscriber::fmt()
    .with_max_level(Level::DEBUG)
    .with_test_writer() // Important for tests to capture output
    .try_init()
    .ok(); // Allow multiple initializations in tests (ok if fails)
});

pub fn setup_tracing() {
  Lazy::force(&TRACING_INIT);
}
