mod body;
mod json;

pub use self::body::BodyFormatter;
pub use self::json::JsonFormatter;

use crate::error::Result;
use crate::object::ObjectReport;

#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Raw packet body
    #[default]
    Body,
    /// JSON object with the report fields and the encoded body
    Json,
}

/// An encoded report together with the fields it was built from
pub struct ReportOutput<'a> {
    pub report: &'a ObjectReport,
    pub body: String,
}

impl<'a> ReportOutput<'a> {
    pub fn encode(report: &'a ObjectReport) -> Result<Self> {
        Ok(Self {
            report,
            body: report.encode()?,
        })
    }
}

pub trait Formatter: Send {
    fn format(&self, output: &ReportOutput<'_>) -> String;
}

pub fn create_formatter(format: OutputFormat) -> Box<dyn Formatter> {
    match format {
        OutputFormat::Body => Box::new(BodyFormatter),
        OutputFormat::Json => Box::new(JsonFormatter),
    }
}
