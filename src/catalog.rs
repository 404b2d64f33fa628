// src/catalog.rs

use crate::domain::{filter_all, FilterCriteria, FixtureBounds, PropertyRecord};
use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Fixture set compiled into the binary.
const BUNDLED_FIXTURES: &str = include_str!("../data/properties.json");

/// Thumbnail keys used by the bundled fixtures.
const BUNDLED_IMAGES: &[(&str, &str)] = &[
    ("warehouse", "/static/images/warehouse.jpg"),
    ("manufacturing", "/static/images/manufacturing.jpg"),
    ("logistics", "/static/images/logistics.jpg"),
    ("cold-storage", "/static/images/cold-storage.jpg"),
    ("industrial-shed", "/static/images/industrial-shed.jpg"),
];

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read fixtures from {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid fixture data: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("duplicate property id {0} in fixtures")]
    DuplicateId(u32),
}

/// Maps logical thumbnail keys to asset URLs. A missing key means "no image".
#[derive(Debug, Clone, Default)]
pub struct ImageLookup {
    entries: HashMap<String, String>,
}

impl ImageLookup {
    pub fn bundled() -> Self {
        let entries = BUNDLED_IMAGES
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Self { entries }
    }

    /// Adds or replaces entries; later values win.
    pub fn extend(&mut self, extra: impl IntoIterator<Item = (String, String)>) {
        self.entries.extend(extra);
    }

    pub fn resolve(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Read-only property collection handed to the router at startup.
#[derive(Debug, Clone)]
pub struct Catalog {
    records: Vec<PropertyRecord>,
    bounds: FixtureBounds,
    images: ImageLookup,
}

impl Catalog {
    /// Builds a catalog, rejecting duplicate ids. Record order is kept as given.
    pub fn new(
        records: Vec<PropertyRecord>,
        bounds: FixtureBounds,
        images: ImageLookup,
    ) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for record in &records {
            if !seen.insert(record.id) {
                return Err(CatalogError::DuplicateId(record.id));
            }
        }
        Ok(Self {
            records,
            bounds,
            images,
        })
    }

    pub fn bundled() -> Result<Self, CatalogError> {
        Self::from_json(BUNDLED_FIXTURES)
    }

    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let records: Vec<PropertyRecord> = serde_json::from_str(json)?;
        let bounds = FixtureBounds::covering(&records);
        Self::new(records, bounds, ImageLookup::bundled())
    }

    pub fn from_path(path: &Path) -> Result<Self, CatalogError> {
        let json = fs::read_to_string(path).map_err(|source| CatalogError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&json)
    }

    pub fn with_images(mut self, extra: impl IntoIterator<Item = (String, String)>) -> Self {
        self.images.extend(extra);
        self
    }

    pub fn records(&self) -> &[PropertyRecord] {
        &self.records
    }

    pub fn bounds(&self) -> FixtureBounds {
        self.bounds
    }

    pub fn get(&self, id: u32) -> Option<&PropertyRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    pub fn filter(&self, criteria: &FilterCriteria) -> Vec<&PropertyRecord> {
        filter_all(&self.records, criteria)
    }

    pub fn thumbnail_url(&self, record: &PropertyRecord) -> Option<&str> {
        record
            .thumbnail
            .as_deref()
            .and_then(|key| self.images.resolve(key))
    }

    pub fn images(&self) -> &ImageLookup {
        &self.images
    }
}
