use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser, Clone)]
#[clap(
    version = "0.1.0",
    author = "Alexander Heilmeier <alexander.heilmeier@tum.de>",
    name = "LAPSTATS",
    about = "Lap time analysis for motorsport timing sheets written in Rust"
)]
pub struct AnalysisOpts {
    // FLAGS ---------------------------------------------------------------------------------------
    /// Activate debug logging (e.g. lap cells that could not be parsed)
    #[clap(short, long)]
    pub debug: bool,

    // OPTIONS -------------------------------------------------------------------------------------
    /// Set path to the lap time CSV file (one row per lap, one column per entity)
    #[clap(short, long, value_parser)]
    pub csvfile_path: PathBuf,

    /// Set name of an entity to analyze, i.e. the header of its column (can be repeated)
    #[clap(short, long = "entity", value_parser, required = true)]
    pub entities: Vec<String>,

    /// Set path to the analysis parameter file (defaults are used if not set)
    #[clap(short, long, value_parser)]
    pub parfile_path: Option<PathBuf>,
}
