// car_catalog/src/filter.rs

//! The admin view's three-predicate filter over catalog snapshots.

use crate::core::car::Car;

/// Unicode case folding shared by every case-insensitive catalog match.
pub(crate) fn fold_case(text: &str) -> String {
  text.to_lowercase()
}

pub(crate) fn eq_ignore_case(a: &str, b: &str) -> bool {
  fold_case(a) == fold_case(b)
}

/// Which availability state to keep.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Availability {
  #[default]
  Any,
  Available,
  Unavailable,
}

impl Availability {
  pub fn matches(self, available: bool) -> bool {
    match self {
      Availability::Any => true,
      Availability::Available => available,
      Availability::Unavailable => !available,
    }
  }
}

/// Search term, exact category and availability. Every predicate left unset
/// matches everything; the ones that are set must all hold.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CarFilter {
  /// Case-insensitive substring of `name` or `category`. Empty means unset.
  pub search: Option<String>,
  /// Exact, case-sensitive category.
  pub category: Option<String>,
  pub availability: Availability,
}

impl CarFilter {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn search(mut self, term: impl Into<String>) -> Self {
    self.search = Some(term.into());
    self
  }

  pub fn category(mut self, category: impl Into<String>) -> Self {
    self.category = Some(category.into());
    self
  }

  pub fn availability(mut self, availability: Availability) -> Self {
    self.availability = availability;
    self
  }

  pub fn is_unrestricted(&self) -> bool {
    self.search_term().is_none() && self.category.is_none() && self.availability == Availability::Any
  }

  fn search_term(&self) -> Option<String> {
    self
      .search
      .as_deref()
      .filter(|term| !term.is_empty())
      .map(fold_case)
  }

  pub fn matches(&self, car: &Car) -> bool {
    self.matches_with(car, self.search_term().as_deref())
  }

  fn matches_with(&self, car: &Car, lowered_term: Option<&str>) -> bool {
    if let Some(term) = lowered_term {
      let hit = fold_case(&car.name).contains(term) || fold_case(&car.category).contains(term);
      if !hit {
        return false;
      }
    }
    if let Some(category) = &self.category {
      if &car.category != category {
        return false;
      }
    }
    self.availability.matches(car.available)
  }

  /// The matching cars, in their original relative order.
  pub fn apply(&self, cars: &[Car]) -> Vec<Car> {
    let term = self.search_term();
    cars
      .iter()
      .filter(|car| self.matches_with(car, term.as_deref()))
      .cloned()
      .collect()
  }
}
