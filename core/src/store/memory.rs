// car_catalog/src/store/memory.rs

//! Defines `InMemoryCatalog`, the memory-backed `CarRepository`.

use crate::config::{CatalogConfig, IdStrategy};
use crate::core::car::{Car, CarId, NewCarFields};
use crate::core::clock::{next_update_stamp, Clock, SystemClock};
use crate::core::ids::{IdGenerator, SequentialIds, UuidIds};
use crate::core::patch::CarPatch;
use crate::store::repository::CarRepository;
use crate::store::seed::sample_cars;
use crate::store::state::{CatalogState, SharedCatalog};

use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use tracing::{event, instrument, Level, Span};

/// Draws asked of the configured generator before falling back to UUIDs.
const MAX_ID_DRAWS: usize = 16;

/// The catalog held in process memory.
///
/// Cloning is cheap and every clone shares the same records, so a store can
/// be handed to the admin panel and the storefront at once. Each operation
/// takes the lock exactly once and never holds it across an `.await`.
#[derive(Clone)]
pub struct InMemoryCatalog {
  state: SharedCatalog,
  ids: Arc<dyn IdGenerator>,
  clock: Arc<dyn Clock>,
  latency: Duration,
}

impl InMemoryCatalog {
  /// An empty catalog with UUID ids, the system clock and no latency.
  pub fn new() -> Self {
    InMemoryCatalog {
      state: SharedCatalog::new(CatalogState::default()),
      ids: Arc::new(UuidIds),
      clock: Arc::new(SystemClock),
      latency: Duration::ZERO,
    }
  }

  /// Builds a store from loaded configuration.
  pub fn from_config(config: &CatalogConfig) -> Self {
    let ids: Arc<dyn IdGenerator> = match config.id_strategy {
      IdStrategy::Uuid => Arc::new(UuidIds),
      IdStrategy::Sequential => Arc::new(SequentialIds::new()),
    };
    let store = Self::new().with_latency(config.latency).with_id_generator(ids);
    if config.seed_sample_data {
      store.with_sample_data()
    } else {
      store
    }
  }

  /// Delay applied at the start of every operation, emulating a remote
  /// backend. Zero by default.
  pub fn with_latency(mut self, latency: Duration) -> Self {
    self.latency = latency;
    self
  }

  pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
    self.clock = clock;
    self
  }

  pub fn with_id_generator(mut self, ids: Arc<dyn IdGenerator>) -> Self {
    self.ids = ids;
    self
  }

  /// Loads the three sample cars (Tesla Model S, BMW X5, Audi A4).
  pub fn with_sample_data(self) -> Self {
    self.with_cars(sample_cars())
  }

  /// Loads existing records as they are. A record whose id is already live
  /// is skipped.
  pub fn with_cars(self, cars: impl IntoIterator<Item = Car>) -> Self {
    {
      let mut state = self.state.write();
      for car in cars {
        if state.contains(&car.id) {
          event!(Level::WARN, car_id = %car.id, "Skipping seeded car with duplicate id.");
          continue;
        }
        state.push(car);
      }
      event!(Level::DEBUG, records = state.len(), "Catalog seeded.");
    }
    self
  }

  pub fn latency(&self) -> Duration {
    self.latency
  }

  pub fn len(&self) -> usize {
    self.state.read().len()
  }

  pub fn is_empty(&self) -> bool {
    self.len() == 0
  }

  async fn simulate_latency(&self) {
    if !self.latency.is_zero() {
      event!(Level::TRACE, latency_ms = self.latency.as_millis() as u64, "Simulating backend latency.");
      tokio::time::sleep(self.latency).await;
    }
  }

  /// A candidate id that is not live. Called with the write lock held, so a
  /// generator stuck on live ids is abandoned after `MAX_ID_DRAWS` attempts.
  fn free_id(&self, state: &CatalogState) -> CarId {
    for _ in 0..MAX_ID_DRAWS {
      let candidate = self.ids.next_id();
      if !state.contains(&candidate) {
        return candidate;
      }
      event!(Level::DEBUG, candidate = %candidate, "Generated id is already live, drawing another.");
    }
    event!(
      Level::WARN,
      draws = MAX_ID_DRAWS,
      "Id generator kept returning live ids, falling back to random UUIDs."
    );
    loop {
      let candidate = UuidIds.next_id();
      if !state.contains(&candidate) {
        return candidate;
      }
    }
  }

  /// Mutates one record under the write lock and refreshes its `updated_at`.
  fn touch<F>(&self, id: &CarId, mutate: F) -> Option<Car>
  where
    F: FnOnce(&mut Car),
  {
    let now = self.clock.now();
    let mut state = self.state.write();
    let Some(car) = state.get_mut(id) else {
      event!(Level::DEBUG, "Car not found.");
      return None;
    };
    mutate(car);
    car.updated_at = next_update_stamp(now, car.updated_at);
    Some(car.clone())
  }
}

impl Default for InMemoryCatalog {
  fn default() -> Self {
    Self::new()
  }
}

impl std::fmt::Debug for InMemoryCatalog {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("InMemoryCatalog")
      .field("records", &self.len())
      .field("latency", &self.latency)
      .finish()
  }
}

#[async_trait]
impl CarRepository for InMemoryCatalog {
  #[instrument(name = "InMemoryCatalog::list_all", skip_all, fields(returned = tracing::field::Empty))]
  async fn list_all(&self) -> Vec<Car> {
    self.simulate_latency().await;
    let cars = self.state.read().snapshot();
    Span::current().record("returned", cars.len());
    cars
  }

  #[instrument(name = "InMemoryCatalog::get_by_id", skip_all, fields(car_id = %id))]
  async fn get_by_id(&self, id: &CarId) -> Option<Car> {
    self.simulate_latency().await;
    let found = self.state.read().get(id).cloned();
    if found.is_none() {
      event!(Level::DEBUG, "Car not found.");
    }
    found
  }

  #[instrument(name = "InMemoryCatalog::create", skip_all, fields(car_id = tracing::field::Empty, name = %fields.name))]
  async fn create(&self, fields: NewCarFields) -> Car {
    self.simulate_latency().await;
    let now = self.clock.now();

    let car = {
      let mut state = self.state.write();
      let id = self.free_id(&state);
      let car = Car::from_new(id, fields, now);
      state.push(car.clone());
      car
    };

    Span::current().record("car_id", tracing::field::display(&car.id));
    event!(Level::DEBUG, "Car created.");
    car
  }

  #[instrument(name = "InMemoryCatalog::update", skip_all, fields(car_id = %id, empty_patch = patch.is_empty()))]
  async fn update(&self, id: &CarId, patch: CarPatch) -> Option<Car> {
    self.simulate_latency().await;
    let updated = self.touch(id, |car| patch.apply_to(car));
    if updated.is_some() {
      event!(Level::DEBUG, "Car updated.");
    }
    updated
  }

  #[instrument(name = "InMemoryCatalog::delete", skip_all, fields(car_id = %id))]
  async fn delete(&self, id: &CarId) -> bool {
    self.simulate_latency().await;
    let removed = self.state.write().remove(id).is_some();
    if removed {
      event!(Level::DEBUG, "Car deleted.");
    } else {
      event!(Level::DEBUG, "Car not found, nothing deleted.");
    }
    removed
  }

  #[instrument(name = "InMemoryCatalog::toggle_availability", skip_all, fields(car_id = %id))]
  async fn toggle_availability(&self, id: &CarId) -> Option<Car> {
    self.simulate_latency().await;
    let toggled = self.touch(id, |car| car.available = !car.available);
    if let Some(car) = &toggled {
      event!(Level::DEBUG, available = car.available, "Availability toggled.");
    }
    toggled
  }
}
