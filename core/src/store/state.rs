// car_catalog/src/store/state.rs
use crate::core::car::{Car, CarId};
use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::collections::HashMap;
use std::sync::Arc;

/// The records themselves: a map for lookup by id plus the insertion order
/// that `list_all` reports.
#[derive(Debug, Default)]
pub(crate) struct CatalogState {
  records: HashMap<CarId, Car>,
  order: Vec<CarId>,
}

impl CatalogState {
  pub(crate) fn len(&self) -> usize {
    self.order.len()
  }

  pub(crate) fn contains(&self, id: &CarId) -> bool {
    self.records.contains_key(id)
  }

  pub(crate) fn get(&self, id: &CarId) -> Option<&Car> {
    self.records.get(id)
  }

  pub(crate) fn get_mut(&mut self, id: &CarId) -> Option<&mut Car> {
    self.records.get_mut(id)
  }

  /// Appends a record. The caller guarantees the id is not live.
  pub(crate) fn push(&mut self, car: Car) {
    debug_assert!(!self.records.contains_key(&car.id), "duplicate car id {}", car.id);
    self.order.push(car.id.clone());
    self.records.insert(car.id.clone(), car);
  }

  pub(crate) fn remove(&mut self, id: &CarId) -> Option<Car> {
    let removed = self.records.remove(id)?;
    self.order.retain(|existing| existing != id);
    Some(removed)
  }

  /// Owned copies of every record, in insertion order.
  pub(crate) fn snapshot(&self) -> Vec<Car> {
    self.order.iter().filter_map(|id| self.records.get(id)).cloned().collect()
  }
}

/// Shared ownership of the catalog state behind a `parking_lot::RwLock`.
///
/// IMPORTANT: guards obtained here are blocking and MUST be dropped before any
/// `.await` suspension point.
#[derive(Debug, Default)]
pub(crate) struct SharedCatalog(Arc<RwLock<CatalogState>>);

impl SharedCatalog {
  pub(crate) fn new(state: CatalogState) -> Self {
    SharedCatalog(Arc::new(RwLock::new(state)))
  }

  pub(crate) fn read(&self) -> RwLockReadGuard<'_, CatalogState> {
    self.0.read()
  }

  pub(crate) fn write(&self) -> RwLockWriteGuard<'_, CatalogState> {
    self.0.write()
  }
}

impl Clone for SharedCatalog {
  fn clone(&self) -> Self {
    SharedCatalog(Arc::clone(&self.0))
  }
}
