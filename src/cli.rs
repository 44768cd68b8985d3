//! Command-line surface and run sequence.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use log::info;

use crate::charts;
use crate::data::loader;

/// Import CSV and give output names.
#[derive(Debug, Parser)]
#[command(
    name = "adapter-plots",
    version,
    about = "Bar and density charts for per-sample adapter content"
)]
pub struct Cli {
    /// Input CSV of adapter content per sample
    #[arg(long, value_name = "CSV")]
    pub input: PathBuf,

    /// Output filename of the bar chart
    #[arg(long, value_name = "IMAGE")]
    pub obar: PathBuf,

    /// Output filename of the density plot
    #[arg(long, value_name = "IMAGE")]
    pub odensity: PathBuf,

    /// Name for the set of FASTQ files (e.g. "Plate 2")
    #[arg(long, value_name = "NAME")]
    pub name: String,
}

pub fn entry() -> Result<()> {
    run(Cli::parse())
}

/// Load the report and write both charts, bar chart first.
pub fn run(args: Cli) -> Result<()> {
    if !args.input.is_file() {
        bail!("input file not found: {}", args.input.display());
    }

    let report = loader::load_report(&args.input)
        .with_context(|| format!("failed to load {}", args.input.display()))?;
    info!(
        "loaded {} sample(s) from {}",
        report.len(),
        args.input.display()
    );

    charts::bar::render(&report, &args.name, &args.obar)
        .with_context(|| format!("failed to write bar chart {}", args.obar.display()))?;
    info!("wrote bar chart to {}", args.obar.display());

    charts::density::render(&report, &args.name, &args.odensity)
        .with_context(|| format!("failed to write density plot {}", args.odensity.display()))?;
    info!("wrote density plot to {}", args.odensity.display());

    Ok(())
}
