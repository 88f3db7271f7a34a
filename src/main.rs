use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use standoffkit::{convert, init_logging, ConversionRequest};
use standoffkit_boothdb::{BoothId, BoothRegistry};

#[derive(Parser)]
#[command(name = "standoffkit")]
#[command(version)]
#[command(
    about = "Adjust the standoff distance of TCP points in an LS motion program",
    long_about = None
)]
struct Cli {
    /// Source LS program file
    #[arg(short, long)]
    input: PathBuf,

    /// Destination LS program file; its base name becomes the program name
    #[arg(short, long)]
    output: PathBuf,

    /// Booth identifier, e.g. 6 or 2a
    #[arg(short, long)]
    booth: String,

    /// Point numbers to adjust, comma separated, e.g. 1,2,36
    #[arg(short, long, value_delimiter = ',', required = true)]
    points: Vec<u32>,

    /// Standoff change in inches; positive moves the gun away from the part
    #[arg(short, long, allow_hyphen_values = true)]
    delta: f64,

    /// Booth profile JSON file
    #[arg(long)]
    booths: PathBuf,
}

fn main() -> Result<()> {
    init_logging()?;

    let cli = Cli::parse();
    let registry = BoothRegistry::load(&cli.booths)
        .with_context(|| format!("failed to load booth profiles from {}", cli.booths.display()))?;

    let request = ConversionRequest {
        input: cli.input,
        output: cli.output,
        booth: BoothId::parse(&cli.booth),
        points: cli.points,
        standoff_delta_in: cli.delta,
    };
    convert::run(&request, &registry)
}
