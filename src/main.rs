use clap::Parser;
use std::path::PathBuf;

use aprs_object::config::BeaconConfig;
use aprs_object::object::ObjectKind;
use aprs_object::output::{OutputFormat, ReportOutput, create_formatter};

#[derive(Parser, Debug)]
#[command(name = "aprs-object")]
#[command(about = "Encode an APRS Object Report packet body", long_about = None)]
struct Args {
    /// Beacon configuration file (TOML); flags override its values
    #[arg(short = 'c', long)]
    config: Option<PathBuf>,

    /// Object kind: bridge, repeater, event
    #[arg(short = 'k', long, value_enum)]
    kind: Option<ObjectKind>,

    /// Object name (defaults to the kind's label)
    #[arg(short = 'n', long)]
    name: Option<String>,

    /// Latitude in decimal degrees, north positive
    #[arg(long, allow_hyphen_values = true)]
    lat: Option<f64>,

    /// Longitude in decimal degrees, east positive
    #[arg(long, allow_hyphen_values = true)]
    lon: Option<f64>,

    /// Symbol table and code (e.g., "/b")
    #[arg(short = 's', long)]
    symbol: Option<String>,

    /// Comment appended after the position
    #[arg(long)]
    comment: Option<String>,

    /// Output format: body, json
    #[arg(short = 'f', long, value_enum, default_value = "body")]
    format: OutputFormat,

    /// Increase log verbosity
    #[arg(short = 'v', long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Args {
    fn beacon_config(&self) -> anyhow::Result<BeaconConfig> {
        let mut config = match &self.config {
            Some(path) => BeaconConfig::load(path)?,
            None => BeaconConfig::default(),
        };

        let object = &mut config.object;
        if let Some(kind) = self.kind {
            object.kind = kind;
        }
        if let Some(name) = &self.name {
            object.name = Some(name.clone());
        }
        if let Some(lat) = self.lat {
            object.latitude = lat;
        }
        if let Some(lon) = self.lon {
            object.longitude = lon;
        }
        if let Some(symbol) = &self.symbol {
            object.symbol = symbol.clone();
        }
        if let Some(comment) = &self.comment {
            object.comment = comment.clone();
        }

        Ok(config)
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let config = args.beacon_config()?;
    log::debug!("Beacon config: {:?}", config.object);

    let report = config.to_report()?;
    let output = ReportOutput::encode(&report)?;
    log::info!("Encoded {} byte object body", output.body.len());

    println!("{}", create_formatter(args.format).format(&output));

    Ok(())
}
