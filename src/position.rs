use crate::coord::{latitude_to_ddm, longitude_to_ddm};
use crate::error::Result;
use crate::symbol::Symbol;

/// Position record shared by position-carrying packets
///
/// Fields are passed through as given; range checks happen when the
/// coordinates are formatted.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Position {
    /// Latitude in signed decimal degrees (north positive)
    pub latitude: f64,
    /// Longitude in signed decimal degrees (east positive)
    pub longitude: f64,
    /// Map icon
    pub symbol: Symbol,
    /// Free text appended after the symbol code
    pub comment: String,
}

impl Position {
    pub fn new(latitude: f64, longitude: f64, symbol: Symbol) -> Self {
        Self {
            latitude,
            longitude,
            symbol,
            comment: String::new(),
        }
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = comment.into();
        self
    }

    /// Uncompressed coordinate block: latitude, table id, longitude, code.
    pub fn ddm_fields(&self) -> Result<String> {
        let latitude = latitude_to_ddm(self.latitude)?;
        let longitude = longitude_to_ddm(self.longitude)?;
        Ok(format!(
            "{latitude}{}{longitude}{}",
            self.symbol.table(),
            self.symbol.code()
        ))
    }
}
