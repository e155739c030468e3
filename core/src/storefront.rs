// car_catalog/src/storefront.rs

//! The customer-facing browsing view: only available cars, optional
//! category/price/fuel narrowing, and a per-session favourites list.

use crate::core::car::{Car, CarId};
use crate::filter::eq_ignore_case;
use crate::store::repository::CarRepository;
use tracing::{event, instrument, Level};

/// Daily price brackets offered by the storefront. Lower bound inclusive,
/// upper bound exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceBand {
  /// $0 – $50
  UpTo50,
  /// $50 – $100
  From50To100,
  /// $100 – $150
  From100To150,
  /// $150 and up
  From150,
}

impl PriceBand {
  pub fn contains(self, price: f64) -> bool {
    let (low, high) = self.bounds();
    price >= low && high.map_or(true, |high| price < high)
  }

  pub fn bounds(self) -> (f64, Option<f64>) {
    match self {
      PriceBand::UpTo50 => (0.0, Some(50.0)),
      PriceBand::From50To100 => (50.0, Some(100.0)),
      PriceBand::From100To150 => (100.0, Some(150.0)),
      PriceBand::From150 => (150.0, None),
    }
  }
}

/// Optional narrowing on top of the available-only listing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BrowseQuery {
  /// Case-insensitive category match.
  pub category: Option<String>,
  pub price_band: Option<PriceBand>,
  /// Case-insensitive fuel match.
  pub fuel: Option<String>,
}

impl BrowseQuery {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn category(mut self, category: impl Into<String>) -> Self {
    self.category = Some(category.into());
    self
  }

  pub fn price_band(mut self, band: PriceBand) -> Self {
    self.price_band = Some(band);
    self
  }

  pub fn fuel(mut self, fuel: impl Into<String>) -> Self {
    self.fuel = Some(fuel.into());
    self
  }

  pub fn matches(&self, car: &Car) -> bool {
    if let Some(category) = &self.category {
      if !eq_ignore_case(&car.category, category) {
        return false;
      }
    }
    if let Some(band) = self.price_band {
      if !band.contains(car.price) {
        return false;
      }
    }
    if let Some(fuel) = &self.fuel {
      if !eq_ignore_case(&car.fuel, fuel) {
        return false;
      }
    }
    true
  }
}

pub struct Storefront<R: CarRepository> {
  repo: R,
  favorites: Vec<CarId>,
}

impl<R: CarRepository> Storefront<R> {
  pub fn new(repo: R) -> Self {
    Storefront {
      repo,
      favorites: Vec::new(),
    }
  }

  /// Available cars matching `query`, in catalog order.
  #[instrument(name = "Storefront::available_cars", skip_all, fields(shown = tracing::field::Empty))]
  pub async fn available_cars(&self, query: &BrowseQuery) -> Vec<Car> {
    let cars: Vec<Car> = self
      .repo
      .list_all()
      .await
      .into_iter()
      .filter(|car| car.available && query.matches(car))
      .collect();
    tracing::Span::current().record("shown", cars.len());
    cars
  }

  /// Adds or removes `id` from the favourites. Returns true when the car is
  /// now a favourite.
  pub fn toggle_favorite(&mut self, id: &CarId) -> bool {
    if let Some(pos) = self.favorites.iter().position(|fav| fav == id) {
      self.favorites.remove(pos);
      event!(Level::DEBUG, car_id = %id, "Removed from favourites.");
      false
    } else {
      self.favorites.push(id.clone());
      event!(Level::DEBUG, car_id = %id, "Added to favourites.");
      true
    }
  }

  pub fn is_favorite(&self, id: &CarId) -> bool {
    self.favorites.contains(id)
  }

  /// Favourite ids in the order they were added.
  pub fn favorites(&self) -> &[CarId] {
    &self.favorites
  }
}

impl<R: CarRepository> std::fmt::Debug for Storefront<R> {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("Storefront").field("favorites", &self.favorites).finish()
  }
}
