// car_catalog/src/config.rs

use crate::error::{CatalogError, CatalogResult};
use dotenvy::dotenv;
use std::env;
use std::str::FromStr;
use std::time::Duration;

pub const LATENCY_MS_VAR: &str = "CATALOG_LATENCY_MS";
pub const SEED_SAMPLE_DATA_VAR: &str = "CATALOG_SEED_SAMPLE_DATA";
pub const ID_STRATEGY_VAR: &str = "CATALOG_ID_STRATEGY";

/// How new car ids are drawn.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum IdStrategy {
  /// Random v4 UUIDs.
  #[default]
  Uuid,
  /// "1", "2", "3", ... skipping ids that are already taken.
  Sequential,
}

impl FromStr for IdStrategy {
  type Err = String;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.trim().to_ascii_lowercase().as_str() {
      "uuid" => Ok(IdStrategy::Uuid),
      "sequential" => Ok(IdStrategy::Sequential),
      other => Err(format!("expected 'uuid' or 'sequential', got '{}'", other)),
    }
  }
}

/// Settings for building an `InMemoryCatalog`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
  pub latency: Duration,
  pub seed_sample_data: bool,
  pub id_strategy: IdStrategy,
}

impl Default for CatalogConfig {
  fn default() -> Self {
    CatalogConfig {
      latency: Duration::ZERO,
      seed_sample_data: true,
      id_strategy: IdStrategy::Uuid,
    }
  }
}

impl CatalogConfig {
  /// Reads the process environment, loading a `.env` file first if present.
  pub fn from_env() -> CatalogResult<Self> {
    dotenv().ok(); // Load .env file if present
    Self::from_lookup(|key| env::var(key).ok())
  }

  /// Builds the config from any key lookup. Unset keys take their defaults.
  pub fn from_lookup<F>(lookup: F) -> CatalogResult<Self>
  where
    F: Fn(&str) -> Option<String>,
  {
    let defaults = CatalogConfig::default();

    let latency = match lookup(LATENCY_MS_VAR) {
      Some(raw) => Duration::from_millis(parse_value(LATENCY_MS_VAR, &raw)?),
      None => defaults.latency,
    };
    let seed_sample_data = match lookup(SEED_SAMPLE_DATA_VAR) {
      Some(raw) => parse_value(SEED_SAMPLE_DATA_VAR, &raw)?,
      None => defaults.seed_sample_data,
    };
    let id_strategy = match lookup(ID_STRATEGY_VAR) {
      Some(raw) => parse_value(ID_STRATEGY_VAR, &raw)?,
      None => defaults.id_strategy,
    };

    tracing::debug!(
      latency_ms = latency.as_millis() as u64,
      seed_sample_data,
      id_strategy = ?id_strategy,
      "Catalog configuration loaded."
    );

    Ok(CatalogConfig {
      latency,
      seed_sample_data,
      id_strategy,
    })
  }
}

fn parse_value<T>(key: &str, raw: &str) -> CatalogResult<T>
where
  T: FromStr,
  T::Err: std::fmt::Display,
{
  raw.trim().parse::<T>().map_err(|e| CatalogError::Config {
    key: key.to_string(),
    message: format!("invalid value '{}': {}", raw, e),
  })
}
