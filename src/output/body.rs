use super::{Formatter, ReportOutput};

pub struct BodyFormatter;

impl Formatter for BodyFormatter {
    fn format(&self, output: &ReportOutput<'_>) -> String {
        output.body.clone()
    }
}
