// tests/filter_tests.rs
mod common;

use car_catalog::{Availability, CarFilter, CarRepository, CatalogStats};
use common::*;

#[tokio::test]
async fn test_sample_scenario_category_then_availability() {
  setup_tracing();
  let store = seeded_store();

  let suvs = CarFilter::new().category("SUV").apply(&store.list_all().await);
  assert_eq!(names(&suvs), ["BMW X5"]);

  store.toggle_availability(&suvs[0].id).await.unwrap();

  let available = CarFilter::new()
    .availability(Availability::Available)
    .apply(&store.list_all().await);
  assert_eq!(names(&available), ["Tesla Model S", "Audi A4"]);

  let unavailable = CarFilter::new()
    .availability(Availability::Unavailable)
    .apply(&store.list_all().await);
  assert_eq!(names(&unavailable), ["BMW X5"]);
}

#[tokio::test]
async fn test_search_is_case_insensitive_over_name_and_category() {
  setup_tracing();
  let cars = seeded_store().list_all().await;

  assert_eq!(names(&CarFilter::new().search("tesla").apply(&cars)), ["Tesla Model S"]);
  assert_eq!(names(&CarFilter::new().search("SEDAN").apply(&cars)), ["Audi A4"]);
  // "a" hits Tesla (name), Audi (name) and the Luxury/Sedan categories, not "BMW X5"/"SUV".
  assert_eq!(names(&CarFilter::new().search("a").apply(&cars)), ["Tesla Model S", "Audi A4"]);
  assert!(CarFilter::new().search("porsche").apply(&cars).is_empty());
}

#[tokio::test]
async fn test_empty_search_term_matches_everything() {
  setup_tracing();
  let cars = seeded_store().list_all().await;
  let filter = CarFilter::new().search("");
  assert!(filter.is_unrestricted());
  assert_eq!(filter.apply(&cars), cars);
  assert_eq!(CarFilter::default().apply(&cars), cars);
}

#[tokio::test]
async fn test_category_match_is_exact() {
  setup_tracing();
  let cars = seeded_store().list_all().await;
  assert!(CarFilter::new().category("suv").apply(&cars).is_empty());
  assert!(CarFilter::new().category("SU").apply(&cars).is_empty());
  assert_eq!(names(&CarFilter::new().category("Luxury").apply(&cars)), ["Tesla Model S"]);
}

#[tokio::test]
async fn test_all_predicates_must_hold() {
  setup_tracing();
  let store = seeded_store();
  store.create(new_car("BMW 320i", "Sedan", 70.0)).await;
  store.toggle_availability(&id("3")).await.unwrap(); // Audi A4 off

  let cars = store.list_all().await;
  let filter = CarFilter::new()
    .search("bmw")
    .category("Sedan")
    .availability(Availability::Available);
  assert!(!filter.is_unrestricted());
  assert_eq!(names(&filter.apply(&cars)), ["BMW 320i"]);

  let sedans_off = CarFilter::new()
    .category("Sedan")
    .availability(Availability::Unavailable)
    .apply(&cars);
  assert_eq!(names(&sedans_off), ["Audi A4"]);
}

#[tokio::test]
async fn test_filter_preserves_relative_order() {
  setup_tracing();
  let store = car_catalog::InMemoryCatalog::new();
  for (name, category) in [("Z", "SUV"), ("Y", "Sedan"), ("X", "SUV"), ("W", "SUV")] {
    store.create(new_car(name, category, 50.0)).await;
  }
  let suvs = CarFilter::new().category("SUV").apply(&store.list_all().await);
  assert_eq!(names(&suvs), ["Z", "X", "W"]);
}

#[tokio::test]
async fn test_stats_over_sample_data() {
  setup_tracing();
  let store = seeded_store();
  let stats = CatalogStats::from_cars(&store.list_all().await);
  assert_eq!(
    stats,
    CatalogStats {
      total: 3,
      available: 3,
      average_price: 97.0, // 290 / 3 rounded
      categories: 3,
    }
  );

  store.toggle_availability(&id("1")).await.unwrap();
  store.create(new_car("X6", "SUV", 110.0)).await;
  let stats = CatalogStats::from_cars(&store.list_all().await);
  assert_eq!(stats.total, 4);
  assert_eq!(stats.available, 3);
  assert_eq!(stats.average_price, 100.0);
  assert_eq!(stats.categories, 3);

  assert_eq!(CatalogStats::from_cars(&[]), CatalogStats::default());
}
