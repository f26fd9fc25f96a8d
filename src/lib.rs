//! Accessible Spots - browse tourist locations by accessibility and build a travel plan
//!
//! The library holds the spot catalog, the filter & selection session state,
//! and the view models consumed by list, map and overlay renderers. The
//! terminal front end in `main.rs` is one such renderer.

pub mod catalog;
pub mod cli;
pub mod command;
pub mod config;
pub mod error;
pub mod interactive;
pub mod logging;
pub mod models;
pub mod session;
pub mod terminal;
pub mod views;

// Re-export core types for public API
pub use catalog::SpotCatalog;
pub use config::SpotsConfig;
pub use error::SpotsError;
pub use models::{Coordinates, Spot, SpotId};
pub use session::{AddOutcome, FilterCriteria, FinalizationState, MarkerVariant, SpotSession};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, SpotsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_is_set() {
        assert!(!VERSION.is_empty());
    }
}
