//! Degrees/decimal-minutes (DDM) coordinate conversion.
//!
//! Classic uncompressed APRS positions use fixed-width fields:
//! - Latitude: `DDMM.mmH` (8 characters), hemisphere `N` or `S`
//! - Longitude: `DDDMM.mmH` (9 characters), hemisphere `E` or `W`
//!
//! Minutes are rounded to hundredths before splitting, so the carry lands in
//! the degrees (`51.99999` -> `5200.00N`).

use crate::error::{AprsError, Axis, Result};

/// Latitude field width in characters
pub const LATITUDE_WIDTH: usize = 8;

/// Longitude field width in characters
pub const LONGITUDE_WIDTH: usize = 9;

const HUNDREDTHS_PER_MINUTE: f64 = 100.0;
const HUNDREDTHS_PER_DEGREE: u32 = 6000;

/// Convert signed decimal degrees of latitude to `DDMM.mmH`.
///
/// # Example
/// ```
/// use aprs_object::coord::latitude_to_ddm;
///
/// assert_eq!(latitude_to_ddm(51.5074).unwrap(), "5130.44N");
/// assert!(latitude_to_ddm(95.0).is_err());
/// ```
pub fn latitude_to_ddm(latitude: f64) -> Result<String> {
    check_range(Axis::Latitude, latitude, 90.0)?;
    let (degrees, hundredths) = split_ddm(latitude);
    let hemisphere = if latitude >= 0.0 { 'N' } else { 'S' };
    Ok(format!(
        "{degrees:02}{:02}.{:02}{hemisphere}",
        hundredths / 100,
        hundredths % 100
    ))
}

/// Convert signed decimal degrees of longitude to `DDDMM.mmH`.
pub fn longitude_to_ddm(longitude: f64) -> Result<String> {
    check_range(Axis::Longitude, longitude, 180.0)?;
    let (degrees, hundredths) = split_ddm(longitude);
    let hemisphere = if longitude >= 0.0 { 'E' } else { 'W' };
    Ok(format!(
        "{degrees:03}{:02}.{:02}{hemisphere}",
        hundredths / 100,
        hundredths % 100
    ))
}

fn check_range(axis: Axis, value: f64, limit: f64) -> Result<()> {
    // NaN fails the range check as well
    if !(-limit..=limit).contains(&value) {
        return Err(AprsError::InvalidCoordinate { axis, value });
    }
    Ok(())
}

/// Split an absolute angle into whole degrees and hundredths of a minute.
fn split_ddm(value: f64) -> (u32, u32) {
    let total = (value.abs() * 60.0 * HUNDREDTHS_PER_MINUTE).round() as u32;
    (total / HUNDREDTHS_PER_DEGREE, total % HUNDREDTHS_PER_DEGREE)
}
