// tests/editing_tests.rs
mod common;

use car_catalog::{normalize_features, CarPatch, FeatureList};
use common::*;

#[test]
fn test_feature_list_add_and_remove() {
  let mut list = FeatureList::new();
  assert!(list.add("  GPS "));
  assert!(list.add("Heated Seats"));
  assert!(!list.add("GPS")); // duplicate after trimming
  assert!(!list.add("   ")); // blank
  assert_eq!(list.as_slice(), ["GPS", "Heated Seats"]);
  assert_eq!(list.len(), 2);

  assert!(list.remove("GPS"));
  assert!(!list.remove("GPS"));
  assert!(list.contains("Heated Seats"));
  assert_eq!(list.into_vec(), vec!["Heated Seats".to_string()]);
}

#[test]
fn test_normalize_keeps_first_occurrence_order() {
  let normalized = normalize_features(["b", " a", "b ", "", "c", "a"]);
  assert_eq!(normalized, ["b", "a", "c"]);
  assert!(normalize_features(Vec::<String>::new()).is_empty());
  // Matching is case-sensitive, as in the edit form.
  assert_eq!(normalize_features(["AWD", "awd"]), ["AWD", "awd"]);
}

#[test]
fn test_patch_emptiness_and_validation() {
  assert!(CarPatch::default().is_empty());
  assert!(CarPatch::new().is_empty());
  assert!(!CarPatch::new().seats(4).is_empty());
  assert!(!CarPatch::new().clear_description().is_empty());

  assert!(CarPatch::new().name("Kwid").price(0.0).validate().is_ok());
  assert!(CarPatch::new().price(f64::NAN).validate().is_err());
  assert!(CarPatch::new().seats(0).validate().is_err());
  assert!(CarPatch::new().transmission(" ").validate().is_err());
}

#[test]
fn test_new_car_fields_validation() {
  assert!(new_car("Kicks", "SUV", 55.0).validate().is_ok());

  let mut fields = new_car("Kicks", "SUV", 55.0);
  fields.image = String::new();
  assert!(fields.validate().is_err());

  let mut fields = new_car("Kicks", "SUV", 55.0);
  fields.price = f64::INFINITY;
  assert!(fields.validate().is_err());

  // Description and features are optional.
  let mut fields = new_car("Kicks", "SUV", 55.0);
  fields.features.clear();
  fields.description = None;
  assert!(fields.validate().is_ok());
}
