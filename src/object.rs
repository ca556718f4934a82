//! APRS Object Report body encoding.
//!
//! Fixed-width uncompressed layout:
//! - Position 0: `;` packet type
//! - Positions 1-9: object name, right-justified with spaces, truncated to 9
//! - Positions 10-16: `111111z` permanent-object timestamp
//! - Positions 17-24: latitude `DDMM.mmH`
//! - Position 25: symbol table identifier
//! - Positions 26-34: longitude `DDDMM.mmH`
//! - Position 35: symbol code
//! - Positions 36-: comment, verbatim
//!
//! Example: `;   Bridge111111z5130.44N/00007.67WbTower Bridge`
//!
//! Reference: <http://wa8lmf.net/bruninga/aprs/object-perm.txt>

use crate::error::{AprsError, Result};
use crate::position::Position;

/// Packet type identifier for object reports
pub const OBJECT_MARKER: char = ';';

/// Width of the object name field
pub const NAME_WIDTH: usize = 9;

/// Timestamp used for objects that never expire
pub const PERMANENT_TIMESTAMP: &str = "111111z";

/// Kind of object being announced
///
/// Each kind supplies the label used when a report is built without an
/// explicit name.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, serde::Deserialize, serde::Serialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum ObjectKind {
    #[default]
    Bridge,
    Repeater,
    Event,
}

impl ObjectKind {
    pub fn default_name(&self) -> &'static str {
        match self {
            ObjectKind::Bridge => "Bridge",
            ObjectKind::Repeater => "Repeater",
            ObjectKind::Event => "Event",
        }
    }
}

/// A named, positioned object announcement
///
/// # Example
/// ```
/// use aprs_object::{ObjectKind, ObjectReport, Position, Symbol};
///
/// let position = Position::new(51.5074, -0.1278, Symbol::default())
///     .with_comment("Tower Bridge");
/// let report = ObjectReport::new(ObjectKind::Bridge, position);
/// assert_eq!(
///     report.encode().unwrap(),
///     ";   Bridge111111z5130.44N/00007.67WbTower Bridge"
/// );
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectReport {
    pub name: String,
    pub position: Position,
}

impl ObjectReport {
    /// Create a report labelled with the kind's default name
    pub fn new(kind: ObjectKind, position: Position) -> Self {
        Self {
            name: kind.default_name().to_string(),
            position,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Encode with the standard [`ObjectReportEncoder`]
    pub fn encode(&self) -> Result<String> {
        ObjectReportEncoder.encode(self)
    }
}

pub trait BodyEncoder {
    fn encode(&self, report: &ObjectReport) -> Result<String>;
}

pub struct ObjectReportEncoder;

impl BodyEncoder for ObjectReportEncoder {
    fn encode(&self, report: &ObjectReport) -> Result<String> {
        check_text("object name", &report.name)?;
        check_text("comment", &report.position.comment)?;

        let name = name_field(&report.name);
        let coordinates = report.position.ddm_fields()?;
        log::trace!("Encoding object {:?}", report.name);

        Ok(format!(
            "{OBJECT_MARKER}{name}{PERMANENT_TIMESTAMP}{coordinates}{}",
            report.position.comment
        ))
    }
}

/// First `NAME_WIDTH` characters of `name`, padded on the left with spaces
pub fn name_field(name: &str) -> String {
    let truncated: String = name.chars().take(NAME_WIDTH).collect();
    format!("{truncated:>width$}", width = NAME_WIDTH)
}

// Control characters would end the packet early on most transports.
fn check_text(field: &'static str, text: &str) -> Result<()> {
    match text.chars().find(|c| c.is_ascii_control()) {
        Some(c) => Err(AprsError::MalformedField {
            field,
            reason: format!("contains control character {c:?}"),
        }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::symbol::Symbol;

    fn bridge() -> ObjectReport {
        let symbol = Symbol::new('/', 'b').unwrap();
        let position = Position::new(51.5074, -0.1278, symbol).with_comment("Tower Bridge");
        ObjectReport::new(ObjectKind::Bridge, position)
    }

    #[test]
    fn test_encode_bridge() {
        assert_eq!(
            bridge().encode().unwrap(),
            ";   Bridge111111z5130.44N/00007.67WbTower Bridge"
        );
    }

    #[test]
    fn test_name_field_padding() {
        assert_eq!(name_field("Bridge"), "   Bridge");
        assert_eq!(name_field(""), "         ");
        assert_eq!(name_field("ABCDEFGHI"), "ABCDEFGHI");
    }

    #[test]
    fn test_name_field_truncation() {
        assert_eq!(name_field("Westminster Bridge"), "Westminst");
    }

    #[test]
    fn test_name_field_counts_characters() {
        let field = name_field("Brücke");
        assert_eq!(field.chars().count(), NAME_WIDTH);
        assert_eq!(field, "   Brücke");
    }

    #[test]
    fn test_kind_default_names() {
        assert_eq!(ObjectKind::default(), ObjectKind::Bridge);
        assert_eq!(ObjectKind::Repeater.default_name(), "Repeater");
        assert_eq!(ObjectKind::Event.default_name(), "Event");
    }

    #[test]
    fn test_with_name_overrides_default() {
        let report = bridge().with_name("Tower");
        assert!(report.encode().unwrap().starts_with(";    Tower111111z"));
    }

    #[test]
    fn test_empty_comment() {
        let mut report = bridge();
        report.position.comment.clear();
        assert!(report.encode().unwrap().ends_with("00007.67Wb"));
    }

    #[test]
    fn test_invalid_latitude() {
        let mut report = bridge();
        report.position.latitude = 95.0;
        assert!(matches!(
            report.encode(),
            Err(AprsError::InvalidCoordinate { .. })
        ));
    }

    #[test]
    fn test_control_characters_rejected() {
        let report = bridge().with_name("Bad\rName");
        assert!(matches!(
            report.encode(),
            Err(AprsError::MalformedField {
                field: "object name",
                ..
            })
        ));

        let mut report = bridge();
        report.position.comment = "line\nbreak".to_string();
        assert!(matches!(
            report.encode(),
            Err(AprsError::MalformedField {
                field: "comment",
                ..
            })
        ));
    }
}
