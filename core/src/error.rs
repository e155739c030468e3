// car_catalog/src/error.rs
use thiserror::Error;

use crate::core::car::CarId;

/// Errors raised by the layers built on top of the catalog store.
///
/// The store itself never fails: an unknown id comes back as `None` or `false`.
/// The admin panel turns those into `NotFound`, and form input that misses a
/// required field is rejected with `Validation` before the store is touched.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CatalogError {
  #[error("Car not found: {id}")]
  NotFound { id: CarId },

  #[error("Invalid value for '{field}': {message}")]
  Validation { field: &'static str, message: String },

  #[error("Configuration error for '{key}': {message}")]
  Config { key: String, message: String },
}

impl CatalogError {
  pub(crate) fn not_found(id: &CarId) -> Self {
    CatalogError::NotFound { id: id.clone() }
  }

  pub(crate) fn validation(field: &'static str, message: impl Into<String>) -> Self {
    CatalogError::Validation {
      field,
      message: message.into(),
    }
  }

  /// True when the error reports an unknown car id.
  pub fn is_not_found(&self) -> bool {
    matches!(self, CatalogError::NotFound { .. })
  }
}

pub type CatalogResult<T, E = CatalogError> = std::result::Result<T, E>;
