pub mod config;
pub mod coord;
pub mod error;
pub mod object;
pub mod output;
pub mod position;
pub mod symbol;

pub use config::BeaconConfig;
pub use coord::{latitude_to_ddm, longitude_to_ddm};
pub use error::{AprsError, Result};
pub use object::{BodyEncoder, ObjectKind, ObjectReport, ObjectReportEncoder};
pub use position::Position;
pub use symbol::Symbol;
