pub mod car;
pub mod clock;
pub mod features;
pub mod ids;
pub mod patch;

// Re-export key types for easier access from other modules (and lib.rs)
pub use car::{Car, CarId, NewCarFields};
pub use clock::{Clock, SystemClock};
pub use features::{normalize_features, FeatureList};
pub use ids::{IdGenerator, SequentialIds, UuidIds};
pub use patch::CarPatch;
