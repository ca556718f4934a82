use super::{Formatter, ReportOutput};

pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn format(&self, output: &ReportOutput<'_>) -> String {
        let position = &output.report.position;
        serde_json::json!({
            "name": output.report.name,
            "latitude": position.latitude,
            "longitude": position.longitude,
            "symbol": position.symbol.to_string(),
            "comment": position.comment,
            "body": output.body,
        })
        .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::object::{ObjectKind, ObjectReport};
    use crate::position::Position;
    use crate::symbol::Symbol;

    #[test]
    fn test_json_fields() {
        let position =
            Position::new(51.5074, -0.1278, Symbol::default()).with_comment("Tower Bridge");
        let report = ObjectReport::new(ObjectKind::Bridge, position);
        let output = ReportOutput::encode(&report).unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&JsonFormatter.format(&output)).unwrap();
        assert_eq!(value["name"], "Bridge");
        assert_eq!(value["symbol"], "/b");
        assert_eq!(value["comment"], "Tower Bridge");
        assert_eq!(
            value["body"],
            ";   Bridge111111z5130.44N/00007.67WbTower Bridge"
        );
        assert_eq!(value["latitude"], 51.5074);
    }
}
