use thiserror::Error;

/// Which coordinate axis a value belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Latitude,
    Longitude,
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Axis::Latitude => f.write_str("latitude"),
            Axis::Longitude => f.write_str("longitude"),
        }
    }
}

#[derive(Error, Debug)]
pub enum AprsError {
    #[error("Invalid coordinate: {axis} {value} out of range")]
    InvalidCoordinate { axis: Axis, value: f64 },

    #[error("Malformed {field}: {reason}")]
    MalformedField { field: &'static str, reason: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, AprsError>;
