// car_catalog/examples/admin_session.rs

use car_catalog::{AdminPanel, Availability, CarFilter, CarPatch, CatalogConfig, InMemoryCatalog, NewCarFields};
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  tracing_subscriber::fmt()
    .with_max_level(tracing::Level::INFO)
    .with_env_filter(tracing_subscriber::EnvFilter::from_default_env()) // Allow RUST_LOG override
    .init();

  info!("--- Admin Session Example ---");

  // 1. Build the store from the environment (sample data is seeded by default)
  let config = CatalogConfig::from_env()?;
  let store = InMemoryCatalog::from_config(&config);

  // 2. Open the panel; it loads a snapshot straight away
  let mut panel = AdminPanel::open(store).await;
  info!(stats = ?panel.stats(), "Dashboard");

  // 3. Add a car. Features are trimmed and de-duplicated on the way in.
  let created = panel
    .create(NewCarFields {
      name: "Porsche 911".to_string(),
      category: "Sports".to_string(),
      image: "/img/porsche-911.png".to_string(),
      price: 250.0,
      features: vec!["Turbo".to_string(), " Turbo ".to_string(), "Sport Chrono".to_string()],
      seats: 2,
      transmission: "Automatic".to_string(),
      fuel: "Gasoline".to_string(),
      description: Some("Rear-engined sports car".to_string()),
    })
    .await?;
  info!(car_id = %created.id, features = ?created.features, "Created");

  // 4. Edit it, then take it off the lot
  panel.update(&created.id, CarPatch::new().price(230.0)).await?;
  panel.toggle_availability(&created.id).await?;

  // 5. Only show what customers can book
  panel.set_filter(CarFilter::new().availability(Availability::Available));
  for car in panel.visible() {
    info!("  {} ({}) ${}/day", car.name, car.category, car.price);
  }

  // 6. Unknown ids are reported, not panicked on
  if let Err(e) = panel.delete(&"no-such-car".into()).await {
    warn!(error = %e, "Delete failed as expected");
  }

  println!("{}", serde_json::to_string_pretty(&panel.cars())?);
  Ok(())
}
