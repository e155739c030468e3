// car_catalog/src/store/seed.rs

//! The sample catalog the shop starts with.

use crate::core::car::{Car, CarId};
use chrono::{DateTime, Duration, Utc};

/// Days from the Unix epoch to 2024-01-01.
const DAYS_TO_2024_01_01: i64 = 19_723;

fn january_2024(day: i64) -> DateTime<Utc> {
  DateTime::<Utc>::UNIX_EPOCH + Duration::days(DAYS_TO_2024_01_01 + day - 1)
}

#[allow(clippy::too_many_arguments)]
fn sample(
  id: &str,
  name: &str,
  category: &str,
  price: f64,
  rating: f64,
  reviews: u32,
  features: [&str; 3],
  seats: u32,
  fuel: &str,
  description: &str,
  day: i64,
) -> Car {
  let stamp = january_2024(day);
  Car {
    id: CarId::new(id),
    name: name.to_string(),
    category: category.to_string(),
    image: format!("/placeholder.svg?height=200&width=300&text={}", name.replace(' ', "+")),
    price,
    rating,
    reviews,
    features: features.iter().map(|f| f.to_string()).collect(),
    seats,
    transmission: "Automatic".to_string(),
    fuel: fuel.to_string(),
    description: Some(description.to_string()),
    available: true,
    created_at: stamp,
    updated_at: stamp,
  }
}

/// Tesla Model S, BMW X5 and Audi A4 with ids "1", "2", "3", in that order.
pub fn sample_cars() -> Vec<Car> {
  vec![
    sample(
      "1",
      "Tesla Model S",
      "Luxury",
      120.0,
      4.8,
      234,
      ["Electric", "Autopilot", "Premium Interior"],
      5,
      "Electric",
      "Electric luxury sedan with advanced driver assistance",
      1,
    ),
    sample(
      "2",
      "BMW X5",
      "SUV",
      95.0,
      4.6,
      189,
      ["AWD", "Leather Seats", "Navigation"],
      7,
      "Gasoline",
      "Premium SUV with all-wheel drive",
      2,
    ),
    sample(
      "3",
      "Audi A4",
      "Sedan",
      75.0,
      4.5,
      156,
      ["Quattro", "Premium Sound", "Sunroof"],
      5,
      "Gasoline",
      "Executive sedan with an elegant design",
      3,
    ),
  ]
}
