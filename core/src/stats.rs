// car_catalog/src/stats.rs
use crate::core::car::Car;
use std::collections::HashSet;

/// Dashboard figures for the admin panel.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CatalogStats {
  pub total: usize,
  pub available: usize,
  /// Mean daily price rounded to a whole unit; 0 for an empty catalog.
  pub average_price: f64,
  /// Number of distinct categories.
  pub categories: usize,
}

impl CatalogStats {
  pub fn from_cars(cars: &[Car]) -> Self {
    if cars.is_empty() {
      return CatalogStats::default();
    }
    let total_price: f64 = cars.iter().map(|car| car.price).sum();
    let categories: HashSet<&str> = cars.iter().map(|car| car.category.as_str()).collect();

    CatalogStats {
      total: cars.len(),
      available: cars.iter().filter(|car| car.available).count(),
      average_price: (total_price / cars.len() as f64).round(),
      categories: categories.len(),
    }
  }
}

/// Distinct categories in first-seen order.
pub fn distinct_categories(cars: &[Car]) -> Vec<String> {
  let mut seen = HashSet::new();
  cars
    .iter()
    .filter(|car| seen.insert(car.category.as_str()))
    .map(|car| car.category.clone())
    .collect()
}
