// src/lib.rs

//! car_catalog: an ASYNC in-memory car catalog for a rental shop.
//!
//! The crate provides:
//!  - `InMemoryCatalog`, the catalog store: create, read, partial update,
//!    delete and availability toggling, each returning owned snapshots.
//!  - The `CarRepository` trait that the views are written against.
//!  - `CarFilter`, the search / category / availability filter.
//!  - `AdminPanel`, which validates form input, reloads after every mutation
//!    and reports dashboard statistics.
//!  - `Storefront`, the available-only listing with favourites.
//!  - `CatalogConfig`, loaded from the environment.

pub mod admin;
pub mod config;
pub mod core;
pub mod error;
pub mod filter;
pub mod stats;
pub mod store;
pub mod storefront;

// --- Re-exports for the Public API ---

pub use crate::core::car::{Car, CarId, NewCarFields};
pub use crate::core::clock::{Clock, SystemClock};
pub use crate::core::features::{normalize_features, FeatureList};
pub use crate::core::ids::{IdGenerator, SequentialIds, UuidIds};
pub use crate::core::patch::CarPatch;

pub use crate::store::{sample_cars, CarRepository, InMemoryCatalog};

pub use crate::filter::{Availability, CarFilter};
pub use crate::stats::CatalogStats;

pub use crate::admin::AdminPanel;
pub use crate::storefront::{BrowseQuery, PriceBand, Storefront};

pub use crate::config::{CatalogConfig, IdStrategy};
pub use crate::error::{CatalogError, CatalogResult};

/*
    Typical flow:
    1. Build a store: `InMemoryCatalog::new().with_sample_data()`, or
       `InMemoryCatalog::from_config(&CatalogConfig::from_env()?)`.
    2. Hand clones of it to an `AdminPanel` and a `Storefront`; clones share
       the same records.
    3. Admin mutations reload the panel's snapshot, so `panel.visible()`
       always shows the active `CarFilter` over current data.
    4. The storefront lists `available` cars only; toggling a car's
       availability in the admin panel hides or shows it there.
*/
