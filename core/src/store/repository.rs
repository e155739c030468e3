// car_catalog/src/store/repository.rs

//! The call surface shared by every catalog backend.

use crate::core::car::{Car, CarId, NewCarFields};
use crate::core::patch::CarPatch;
use async_trait::async_trait;
use std::sync::Arc;

/// Asynchronous CRUD access to the car catalog.
///
/// None of these operations fail. An unknown id is reported as `None` (or
/// `false` for `delete`), which is an ordinary outcome rather than an error.
/// Every returned `Car` is an owned snapshot.
#[async_trait]
pub trait CarRepository: Send + Sync {
  /// Every record, in insertion order.
  async fn list_all(&self) -> Vec<Car>;

  async fn get_by_id(&self, id: &CarId) -> Option<Car>;

  /// Creates a record with a fresh id, no rating or reviews, marked available.
  async fn create(&self, fields: NewCarFields) -> Car;

  /// Overlays `patch` onto the record and refreshes `updated_at`.
  async fn update(&self, id: &CarId, patch: CarPatch) -> Option<Car>;

  /// Removes the record for good. Returns whether anything was removed.
  async fn delete(&self, id: &CarId) -> bool;

  /// Flips `available` and refreshes `updated_at`.
  async fn toggle_availability(&self, id: &CarId) -> Option<Car>;
}

#[async_trait]
impl<R> CarRepository for Arc<R>
where
  R: CarRepository + ?Sized,
{
  async fn list_all(&self) -> Vec<Car> {
    (**self).list_all().await
  }

  async fn get_by_id(&self, id: &CarId) -> Option<Car> {
    (**self).get_by_id(id).await
  }

  async fn create(&self, fields: NewCarFields) -> Car {
    (**self).create(fields).await
  }

  async fn update(&self, id: &CarId, patch: CarPatch) -> Option<Car> {
    (**self).update(id, patch).await
  }

  async fn delete(&self, id: &CarId) -> bool {
    (**self).delete(id).await
  }

  async fn toggle_availability(&self, id: &CarId) -> Option<Car> {
    (**self).toggle_availability(id).await
  }
}
