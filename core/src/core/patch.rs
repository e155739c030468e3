// car_catalog/src/core/patch.rs

//! Partial updates. A `CarPatch` names only the fields that change; applying
//! it overlays those onto an existing record and leaves everything else alone.

use crate::core::car::{require_price, require_seats, require_text, Car, NewCarFields};
use crate::error::CatalogResult;
use serde::{Deserialize, Deserializer, Serialize};

/// A partial replacement of a car's editable fields.
///
/// `id`, `rating`, `reviews`, `available` and the timestamps are not editable
/// through a patch. `description` is doubly optional: `None` leaves it as is,
/// `Some(None)` clears it, `Some(Some(text))` replaces it.
///
/// On the wire an absent `description` key leaves it alone, `null` clears it
/// and a string replaces it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CarPatch {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub name: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub category: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub image: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub price: Option<f64>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub features: Option<Vec<String>>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub seats: Option<u32>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub transmission: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub fuel: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present_or_null")]
  pub description: Option<Option<String>>,
}

/// Runs only when the key is present, so `null` becomes `Some(None)` instead
/// of collapsing into the absent case.
fn present_or_null<'de, D>(deserializer: D) -> Result<Option<Option<String>>, D::Error>
where
  D: Deserializer<'de>,
{
  Option::<String>::deserialize(deserializer).map(Some)
}

impl CarPatch {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn name(mut self, name: impl Into<String>) -> Self {
    self.name = Some(name.into());
    self
  }

  pub fn category(mut self, category: impl Into<String>) -> Self {
    self.category = Some(category.into());
    self
  }

  pub fn image(mut self, image: impl Into<String>) -> Self {
    self.image = Some(image.into());
    self
  }

  pub fn price(mut self, price: f64) -> Self {
    self.price = Some(price);
    self
  }

  pub fn features<I, S>(mut self, features: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    self.features = Some(features.into_iter().map(Into::into).collect());
    self
  }

  pub fn seats(mut self, seats: u32) -> Self {
    self.seats = Some(seats);
    self
  }

  pub fn transmission(mut self, transmission: impl Into<String>) -> Self {
    self.transmission = Some(transmission.into());
    self
  }

  pub fn fuel(mut self, fuel: impl Into<String>) -> Self {
    self.fuel = Some(fuel.into());
    self
  }

  pub fn description(mut self, description: impl Into<String>) -> Self {
    self.description = Some(Some(description.into()));
    self
  }

  pub fn clear_description(mut self) -> Self {
    self.description = Some(None);
    self
  }

  /// True when applying the patch would change no field (only `updatedAt`
  /// moves when such a patch goes through the store).
  pub fn is_empty(&self) -> bool {
    *self == CarPatch::default()
  }

  /// Validates only the fields that are present.
  pub fn validate(&self) -> CatalogResult<()> {
    if let Some(name) = &self.name {
      require_text("name", name)?;
    }
    if let Some(category) = &self.category {
      require_text("category", category)?;
    }
    if let Some(image) = &self.image {
      require_text("image", image)?;
    }
    if let Some(price) = self.price {
      require_price(price)?;
    }
    if let Some(seats) = self.seats {
      require_seats(seats)?;
    }
    if let Some(transmission) = &self.transmission {
      require_text("transmission", transmission)?;
    }
    if let Some(fuel) = &self.fuel {
      require_text("fuel", fuel)?;
    }
    Ok(())
  }

  /// Overlays the present fields onto `car`. Timestamps are the caller's job.
  pub fn apply_to(self, car: &mut Car) {
    let CarPatch {
      name,
      category,
      image,
      price,
      features,
      seats,
      transmission,
      fuel,
      description,
    } = self;

    if let Some(name) = name {
      car.name = name;
    }
    if let Some(category) = category {
      car.category = category;
    }
    if let Some(image) = image {
      car.image = image;
    }
    if let Some(price) = price {
      car.price = price;
    }
    if let Some(features) = features {
      car.features = features;
    }
    if let Some(seats) = seats {
      car.seats = seats;
    }
    if let Some(transmission) = transmission {
      car.transmission = transmission;
    }
    if let Some(fuel) = fuel {
      car.fuel = fuel;
    }
    if let Some(description) = description {
      car.description = description;
    }
  }
}

impl From<NewCarFields> for CarPatch {
  /// A full form submission, as the edit view sends it: every field present.
  fn from(fields: NewCarFields) -> Self {
    CarPatch {
      name: Some(fields.name),
      category: Some(fields.category),
      image: Some(fields.image),
      price: Some(fields.price),
      features: Some(fields.features),
      seats: Some(fields.seats),
      transmission: Some(fields.transmission),
      fuel: Some(fields.fuel),
      description: Some(fields.description),
    }
  }
}
