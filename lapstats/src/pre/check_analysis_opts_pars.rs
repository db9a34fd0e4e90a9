use crate::pre::analysis_opts::AnalysisOpts;
use crate::pre::read_analysis_pars::AnalysisPars;
use anyhow::Context;
use helpers::general::InputValueError;

/// check_analysis_opts_pars assures that the inserted options and parameters are within
/// reasonable limits and raises an error if not.
pub fn check_analysis_opts_pars(
    analysis_opts: &AnalysisOpts,
    analysis_pars: &AnalysisPars,
) -> anyhow::Result<()> {
    // PART 1: ANALYSIS OPTIONS
    if !analysis_opts.csvfile_path.is_file() {
        return Err(InputValueError).context(format!(
            "Lap time file {} does not exist!",
            analysis_opts.csvfile_path.display()
        ));
    }

    if analysis_opts.entities.is_empty() {
        return Err(InputValueError).context("At least one entity must be set for the analysis!");
    }

    if analysis_opts
        .entities
        .iter()
        .any(|entity| entity.trim().is_empty())
    {
        return Err(InputValueError).context("Entity names must not be empty!");
    }

    // PART 2: ANALYSIS PARAMETERS
    check_analysis_pars(analysis_pars)
}

/// check_analysis_pars assures that the analysis parameters are within reasonable limits.
pub fn check_analysis_pars(analysis_pars: &AnalysisPars) -> anyhow::Result<()> {
    if analysis_pars
        .time_loss_thresholds
        .iter()
        .any(|&threshold| !(threshold > 0.0 && threshold.is_finite()))
    {
        return Err(InputValueError)
            .context("All time loss thresholds must be within the range (0.0, inf)s!");
    }

    if analysis_pars.trend_window < 1 {
        return Err(InputValueError).context(format!(
            "trend_window must be at least equal to one, but is {}!",
            analysis_pars.trend_window
        ));
    }

    if !(analysis_pars.trend_tolerance >= 0.0 && analysis_pars.trend_tolerance.is_finite()) {
        return Err(InputValueError).context(format!(
            "trend_tolerance is {:.3}s, which is not within the reasonable range [0.0, inf)s!",
            analysis_pars.trend_tolerance
        ));
    }

    Ok(())
}
