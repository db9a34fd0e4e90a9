use clap::Parser;
use lapstats::core::handle_analysis::analyze_entity;
use lapstats::post::analysis_result::AnalysisResult;
use lapstats::pre::analysis_opts::AnalysisOpts;
use lapstats::pre::check_analysis_opts_pars::check_analysis_opts_pars;
use lapstats::pre::read_analysis_pars::{read_analysis_pars, AnalysisPars};
use rayon::prelude::*;
use std::time::Instant;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    // PRE-PROCESSING ------------------------------------------------------------------------------
    // get analysis options from the command line arguments and read analysis parameters
    let analysis_opts: AnalysisOpts = AnalysisOpts::parse();

    let default_filter = if analysis_opts.debug { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    let analysis_pars = match &analysis_opts.parfile_path {
        Some(parfile_path) => read_analysis_pars(parfile_path.as_path())?,
        None => AnalysisPars::default(),
    };

    // check analysis options and parameters
    check_analysis_opts_pars(&analysis_opts, &analysis_pars)?;

    info!(
        "Analyzing {} entities from {}",
        analysis_opts.entities.len(),
        analysis_opts.csvfile_path.display()
    );

    // EXECUTION -----------------------------------------------------------------------------------
    let t_start = Instant::now();

    // entities are independent of each other -> analyze them in parallel, the order of the
    // results follows the order of the inserted entities
    let analysis_results: Vec<AnalysisResult> = analysis_opts
        .entities
        .par_iter()
        .map(|entity| {
            analyze_entity(
                analysis_opts.csvfile_path.as_path(),
                entity,
                &analysis_pars,
            )
        })
        .collect::<anyhow::Result<Vec<AnalysisResult>>>()?;

    info!("Execution time (total): {}ms", t_start.elapsed().as_millis());

    // POST-PROCESSING -----------------------------------------------------------------------------
    // print results
    for analysis_result in analysis_results.iter() {
        analysis_result.print_report();
    }

    Ok(())
}
