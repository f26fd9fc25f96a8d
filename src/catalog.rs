//! Spot Catalog Module
//!
//! Loads the fixed collection of spots once at startup, either from the copy
//! bundled into the binary or from a JSON file, and exposes it read-only.

use crate::config::CatalogConfig;
use crate::models::{Spot, SpotId};
use crate::models::spot::MAX_RATING;
use crate::{Result, SpotsError};
use std::collections::HashSet;
use std::path::Path;
use tracing::{debug, info, instrument, warn};

const BUNDLED_LOCATIONS: &str = include_str!("../data/locations.json");

/// Read-only, ordered collection of spots
#[derive(Debug, Clone)]
pub struct SpotCatalog {
    spots: Vec<Spot>,
}

impl SpotCatalog {
    /// Build a catalog from already-parsed spots, enforcing id uniqueness
    pub fn new(spots: Vec<Spot>) -> Result<Self> {
        Self::validate(&spots)?;
        Ok(Self { spots })
    }

    /// Parse a JSON array of spot records
    pub fn from_json_str(json: &str) -> Result<Self> {
        let spots: Vec<Spot> = serde_json::from_str(json)?;
        Self::new(spots)
    }

    /// Load the catalog from a JSON file on disk
    #[instrument(level = "debug", skip_all, fields(path = %path.as_ref().display()))]
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!("Reading spot catalog from {}", path.display());
        let json = std::fs::read_to_string(path)?;
        let catalog = Self::from_json_str(&json)?;
        info!("Loaded {} spots from {}", catalog.len(), path.display());
        Ok(catalog)
    }

    /// The catalog compiled into the binary
    pub fn bundled() -> Result<Self> {
        let catalog = Self::from_json_str(BUNDLED_LOCATIONS)?;
        debug!("Loaded {} bundled spots", catalog.len());
        Ok(catalog)
    }

    /// Load from the configured path, falling back to the bundled catalog
    pub fn from_config(config: &CatalogConfig) -> Result<Self> {
        match &config.path {
            Some(path) => Self::load(path),
            None => Self::bundled(),
        }
    }

    #[must_use]
    pub fn get(&self, id: SpotId) -> Option<&Spot> {
        self.spots.iter().find(|spot| spot.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Spot> {
        self.spots.iter()
    }

    #[must_use]
    pub fn spots(&self) -> &[Spot] {
        &self.spots
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.spots.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.spots.is_empty()
    }

    fn validate(spots: &[Spot]) -> Result<()> {
        let mut seen = HashSet::with_capacity(spots.len());
        for spot in spots {
            if !seen.insert(spot.id) {
                return Err(SpotsError::catalog(format!(
                    "duplicate spot id {} ({})",
                    spot.id, spot.name
                )));
            }

            if !spot.lat.is_finite() || !spot.lng.is_finite() {
                return Err(SpotsError::catalog(format!(
                    "spot {} has non-finite coordinates",
                    spot.id
                )));
            }

            if !spot.accessibility_rating.is_finite() {
                return Err(SpotsError::catalog(format!(
                    "spot {} has a non-finite accessibility rating",
                    spot.id
                )));
            }

            if !(0.0..=MAX_RATING).contains(&spot.accessibility_rating) {
                warn!(
                    "Spot {} ({}) has rating {} outside 0-5",
                    spot.id, spot.name, spot.accessibility_rating
                );
            }
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a SpotCatalog {
    type Item = &'a Spot;
    type IntoIter = std::slice::Iter<'a, Spot>;

    fn into_iter(self) -> Self::IntoIter {
        self.spots.iter()
    }
}
