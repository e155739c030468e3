// car_catalog/src/admin.rs

//! The admin panel's behavior, minus the rendering.
//!
//! `AdminPanel` keeps the last snapshot it loaded together with the active
//! `CarFilter`. Every mutation goes to the repository and is followed by a
//! reload, so `visible()` always reflects the filter over fresh data.
//! Form input is validated and its feature list normalized before the store
//! sees it; an unknown id comes back as `CatalogError::NotFound`.

use crate::core::car::{Car, CarId, NewCarFields};
use crate::core::features::normalize_features;
use crate::core::patch::CarPatch;
use crate::error::{CatalogError, CatalogResult};
use crate::filter::CarFilter;
use crate::stats::{distinct_categories, CatalogStats};
use crate::store::repository::CarRepository;

use tracing::{event, info, instrument, warn, Level};

pub struct AdminPanel<R: CarRepository> {
  repo: R,
  cars: Vec<Car>,
  filter: CarFilter,
}

impl<R: CarRepository> AdminPanel<R> {
  /// A panel with nothing loaded yet. Call `reload` (or `open`) before reading.
  pub fn new(repo: R) -> Self {
    AdminPanel {
      repo,
      cars: Vec::new(),
      filter: CarFilter::default(),
    }
  }

  /// Creates the panel and loads the catalog.
  pub async fn open(repo: R) -> Self {
    let mut panel = Self::new(repo);
    panel.reload().await;
    panel
  }

  pub fn repository(&self) -> &R {
    &self.repo
  }

  /// Replaces the snapshot with the repository's current contents.
  #[instrument(name = "AdminPanel::reload", skip_all, fields(loaded = tracing::field::Empty))]
  pub async fn reload(&mut self) -> usize {
    self.cars = self.repo.list_all().await;
    tracing::Span::current().record("loaded", self.cars.len());
    self.cars.len()
  }

  pub fn filter(&self) -> &CarFilter {
    &self.filter
  }

  pub fn set_filter(&mut self, filter: CarFilter) {
    event!(Level::TRACE, filter = ?filter, "Admin filter changed.");
    self.filter = filter;
  }

  /// Every loaded car, unfiltered.
  pub fn cars(&self) -> &[Car] {
    &self.cars
  }

  /// The loaded cars that pass the active filter.
  pub fn visible(&self) -> Vec<Car> {
    self.filter.apply(&self.cars)
  }

  pub fn stats(&self) -> CatalogStats {
    CatalogStats::from_cars(&self.cars)
  }

  /// Categories present in the snapshot, for the category selector.
  pub fn categories(&self) -> Vec<String> {
    distinct_categories(&self.cars)
  }

  #[instrument(name = "AdminPanel::create", skip_all, fields(name = %fields.name))]
  pub async fn create(&mut self, mut fields: NewCarFields) -> CatalogResult<Car> {
    fields.validate().inspect_err(|e| warn!(error = %e, "Rejected new car."))?;
    fields.features = normalize_features(&fields.features);

    let car = self.repo.create(fields).await;
    info!(car_id = %car.id, "Car created.");
    self.reload().await;
    Ok(car)
  }

  #[instrument(name = "AdminPanel::update", skip_all, fields(car_id = %id))]
  pub async fn update(&mut self, id: &CarId, mut patch: CarPatch) -> CatalogResult<Car> {
    patch.validate().inspect_err(|e| warn!(error = %e, "Rejected car update."))?;
    if let Some(features) = patch.features.take() {
      patch.features = Some(normalize_features(&features));
    }

    let updated = self.repo.update(id, patch).await;
    self.reload().await;
    let car = updated.ok_or_else(|| not_found(id))?;
    info!("Car updated.");
    Ok(car)
  }

  #[instrument(name = "AdminPanel::delete", skip_all, fields(car_id = %id))]
  pub async fn delete(&mut self, id: &CarId) -> CatalogResult<()> {
    let removed = self.repo.delete(id).await;
    self.reload().await;
    if !removed {
      return Err(not_found(id));
    }
    info!("Car deleted.");
    Ok(())
  }

  #[instrument(name = "AdminPanel::toggle_availability", skip_all, fields(car_id = %id))]
  pub async fn toggle_availability(&mut self, id: &CarId) -> CatalogResult<Car> {
    let toggled = self.repo.toggle_availability(id).await;
    self.reload().await;
    let car = toggled.ok_or_else(|| not_found(id))?;
    info!(available = car.available, "Availability changed.");
    Ok(car)
  }

  /// Looks a car up for the edit form.
  pub async fn find(&self, id: &CarId) -> CatalogResult<Car> {
    self.repo.get_by_id(id).await.ok_or_else(|| not_found(id))
  }
}

fn not_found(id: &CarId) -> CatalogError {
  warn!(car_id = %id, "Car not found.");
  CatalogError::not_found(id)
}

impl<R: CarRepository> std::fmt::Debug for AdminPanel<R> {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("AdminPanel")
      .field("loaded", &self.cars.len())
      .field("filter", &self.filter)
      .finish()
  }
}
