//! Beacon configuration.
//!
//! A beacon file describes one object to announce:
//!
//! ```toml
//! [object]
//! kind = "bridge"
//! name = "Tower"
//! latitude = 51.5074
//! longitude = -0.1278
//! symbol = "/b"
//! comment = "Tower Bridge"
//! ```
//!
//! Every field is optional; missing ones take the values from
//! `ObjectConfig::default()`.

use std::path::Path;

use serde::Deserialize;

use crate::error::{AprsError, Result};
use crate::object::{ObjectKind, ObjectReport};
use crate::position::Position;
use crate::symbol::Symbol;

/// Top-level beacon configuration
///
/// # Example
/// ```
/// use aprs_object::config::BeaconConfig;
///
/// let config = BeaconConfig::from_toml_str("[object]\nlatitude = 12.5").unwrap();
/// assert_eq!(config.object.latitude, 12.5);
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BeaconConfig {
    /// The object being announced
    pub object: ObjectConfig,
}

/// Object description
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ObjectConfig {
    /// Object kind, supplies the default name
    pub kind: ObjectKind,
    /// Explicit name overriding the kind's default
    pub name: Option<String>,
    /// Latitude in signed decimal degrees
    pub latitude: f64,
    /// Longitude in signed decimal degrees
    pub longitude: f64,
    /// Symbol table and code, e.g. "/b"
    pub symbol: String,
    /// Free-text comment
    pub comment: String,
}

impl Default for ObjectConfig {
    fn default() -> Self {
        Self {
            kind: ObjectKind::default(),
            name: None,
            latitude: 0.0,
            longitude: 0.0,
            symbol: Symbol::default().to_string(),
            comment: String::new(),
        }
    }
}

impl BeaconConfig {
    pub fn from_toml_str(s: &str) -> Result<Self> {
        toml::from_str(s).map_err(|e| AprsError::Config(e.to_string()))
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        log::debug!("Loading beacon config from {}", path.display());
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Build the report this configuration describes
    pub fn to_report(&self) -> Result<ObjectReport> {
        let object = &self.object;
        let symbol: Symbol = object
            .symbol
            .parse()
            .map_err(|e| AprsError::Config(format!("invalid symbol: {e}")))?;
        let position = Position::new(object.latitude, object.longitude, symbol)
            .with_comment(object.comment.clone());

        let report = ObjectReport::new(object.kind, position);
        Ok(match &object.name {
            Some(name) => report.with_name(name.clone()),
            None => report,
        })
    }
}
