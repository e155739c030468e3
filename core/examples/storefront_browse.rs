// car_catalog/examples/storefront_browse.rs

use car_catalog::{BrowseQuery, CarRepository, InMemoryCatalog, PriceBand, Storefront};
use std::time::Duration;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  tracing_subscriber::fmt().with_max_level(tracing::Level::INFO).init();

  info!("--- Storefront Example ---");

  // A store that takes 100ms per call, like the mock backend the shop was built on
  let store = InMemoryCatalog::new()
    .with_sample_data()
    .with_latency(Duration::from_millis(100));
  let mut storefront = Storefront::new(store.clone());

  let everything = storefront.available_cars(&BrowseQuery::new()).await;
  info!("{} cars available", everything.len());

  // Admin takes the SUV off the lot; the storefront stops showing it
  store.toggle_availability(&"2".into()).await;
  let mid_range = storefront
    .available_cars(&BrowseQuery::new().price_band(PriceBand::From50To100))
    .await;
  for car in &mid_range {
    info!("  {} ${}/day, {} seats, {}", car.name, car.price, car.seats, car.fuel);
  }

  if let Some(first) = everything.first() {
    storefront.toggle_favorite(&first.id);
    info!(favorites = ?storefront.favorites(), "Favourites");
  }
  Ok(())
}
