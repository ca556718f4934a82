//! APRS symbol table identifier and symbol code.

use std::fmt;
use std::str::FromStr;

use crate::error::{AprsError, Result};

/// Primary symbol table identifier
pub const PRIMARY_TABLE: char = '/';

/// Alternate symbol table identifier
pub const ALTERNATE_TABLE: char = '\\';

/// Symbol table/code pair selecting the map icon
///
/// Both characters must be printable ASCII. Overlay characters on the
/// alternate table (`0-9`, `A-Z`) are passed through like any other table id.
///
/// # Parsing format
/// Two characters, table first: `"/b"`, `"\\r"`, `"Dr"`.
///
/// # Example
/// ```
/// use aprs_object::Symbol;
///
/// let symbol: Symbol = "/b".parse().unwrap();
/// assert_eq!(symbol.table(), '/');
/// assert_eq!(symbol.code(), 'b');
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Symbol {
    table: char,
    code: char,
}

impl Symbol {
    pub fn new(table: char, code: char) -> Result<Self> {
        check_printable("symbol table", table)?;
        check_printable("symbol code", code)?;
        Ok(Self { table, code })
    }

    pub fn table(&self) -> char {
        self.table
    }

    pub fn code(&self) -> char {
        self.code
    }
}

impl Default for Symbol {
    fn default() -> Self {
        Self {
            table: PRIMARY_TABLE,
            code: 'b',
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.table, self.code)
    }
}

impl FromStr for Symbol {
    type Err = AprsError;

    fn from_str(s: &str) -> Result<Self> {
        let mut chars = s.chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(table), Some(code), None) => Self::new(table, code),
            _ => Err(AprsError::MalformedField {
                field: "symbol",
                reason: format!("expected table and code characters, got {s:?}"),
            }),
        }
    }
}

fn check_printable(field: &'static str, c: char) -> Result<()> {
    if !c.is_ascii_graphic() {
        return Err(AprsError::MalformedField {
            field,
            reason: format!("{c:?} is not printable ASCII"),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_primary_and_alternate() {
        let symbol: Symbol = "/b".parse().unwrap();
        assert_eq!((symbol.table(), symbol.code()), (PRIMARY_TABLE, 'b'));

        let symbol: Symbol = "\\r".parse().unwrap();
        assert_eq!((symbol.table(), symbol.code()), (ALTERNATE_TABLE, 'r'));
    }

    #[test]
    fn test_overlay_table_accepted() {
        let symbol: Symbol = "Dr".parse().unwrap();
        assert_eq!(symbol.table(), 'D');
    }

    #[test]
    fn test_display_matches_parse_form() {
        let symbol = Symbol::new('/', '-').unwrap();
        assert_eq!(symbol.to_string(), "/-");
    }

    #[test]
    fn test_default_is_primary_bicycle() {
        assert_eq!(Symbol::default().to_string(), "/b");
    }

    #[test]
    fn test_wrong_length_rejected() {
        assert!("".parse::<Symbol>().is_err());
        assert!("/".parse::<Symbol>().is_err());
        assert!("/bb".parse::<Symbol>().is_err());
    }

    #[test]
    fn test_non_printable_rejected() {
        assert!(matches!(
            Symbol::new(' ', 'b'),
            Err(AprsError::MalformedField {
                field: "symbol table",
                ..
            })
        ));
        assert!(Symbol::new('/', '\n').is_err());
        assert!(Symbol::new('/', 'é').is_err());
    }
}
