// car_catalog/src/core/car.rs

//! The `Car` record and the field set used to create one.

use crate::error::{CatalogError, CatalogResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identity of a catalog record. Assigned by the store and never changed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CarId(String);

impl CarId {
  pub fn new(id: impl Into<String>) -> Self {
    CarId(id.into())
  }

  pub fn as_str(&self) -> &str {
    &self.0
  }
}

impl fmt::Display for CarId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.0)
  }
}

impl From<&str> for CarId {
  fn from(id: &str) -> Self {
    CarId::new(id)
  }
}

impl From<String> for CarId {
  fn from(id: String) -> Self {
    CarId(id)
  }
}

/// One car in the catalog.
///
/// Callers only ever hold clones of what the store owns, so editing a `Car`
/// value has no effect on the catalog until it goes back through the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Car {
  pub id: CarId,
  pub name: String,
  pub category: String,
  pub image: String,
  /// Price per day.
  pub price: f64,
  /// 0 to 5. New records start at 0.
  pub rating: f64,
  pub reviews: u32,
  pub features: Vec<String>,
  pub seats: u32,
  pub transmission: String,
  pub fuel: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub description: Option<String>,
  pub available: bool,
  pub created_at: DateTime<Utc>,
  pub updated_at: DateTime<Utc>,
}

impl Car {
  /// Builds a freshly created record: unrated, no reviews, available, and
  /// both timestamps set to `now`.
  pub(crate) fn from_new(id: CarId, fields: NewCarFields, now: DateTime<Utc>) -> Self {
    let NewCarFields {
      name,
      category,
      image,
      price,
      features,
      seats,
      transmission,
      fuel,
      description,
    } = fields;

    Car {
      id,
      name,
      category,
      image,
      price,
      rating: 0.0,
      reviews: 0,
      features,
      seats,
      transmission,
      fuel,
      description,
      available: true,
      created_at: now,
      updated_at: now,
    }
  }
}

/// Everything a caller supplies to create a car. `description` is the only
/// optional field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCarFields {
  pub name: String,
  pub category: String,
  pub image: String,
  pub price: f64,
  #[serde(default)]
  pub features: Vec<String>,
  pub seats: u32,
  pub transmission: String,
  pub fuel: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub description: Option<String>,
}

impl NewCarFields {
  /// Checks the required-field rules the admin form enforces.
  ///
  /// The store accepts whatever it is given; this is for the edit layer.
  pub fn validate(&self) -> CatalogResult<()> {
    require_text("name", &self.name)?;
    require_text("category", &self.category)?;
    require_text("image", &self.image)?;
    require_price(self.price)?;
    require_seats(self.seats)?;
    require_text("transmission", &self.transmission)?;
    require_text("fuel", &self.fuel)?;
    Ok(())
  }
}

pub(crate) fn require_text(field: &'static str, value: &str) -> CatalogResult<()> {
  if value.trim().is_empty() {
    return Err(CatalogError::validation(field, "must not be blank"));
  }
  Ok(())
}

pub(crate) fn require_price(price: f64) -> CatalogResult<()> {
  if !price.is_finite() || price < 0.0 {
    return Err(CatalogError::validation(
      "price",
      format!("must be a non-negative amount, got {}", price),
    ));
  }
  Ok(())
}

pub(crate) fn require_seats(seats: u32) -> CatalogResult<()> {
  if seats == 0 {
    return Err(CatalogError::validation("seats", "must be at least 1"));
  }
  Ok(())
}
