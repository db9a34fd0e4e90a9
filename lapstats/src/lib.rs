pub mod core {
    pub mod consistency;
    pub mod deltas;
    pub mod handle_analysis;
    pub mod series;
    pub mod session;
}
pub mod post {
    pub mod analysis_result;
}
pub mod pre {
    pub mod analysis_opts;
    pub mod check_analysis_opts_pars;
    pub mod read_analysis_pars;
    pub mod read_lap_times;
}

#[cfg(test)]
fn input_path(filename: &str) -> std::path::PathBuf {
    std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("input")
        .join(filename)
}

#[cfg(test)]
fn example_series() -> crate::core::series::LapTimeSeries {
    crate::core::series::LapTimeSeries::new(
        "DriverA",
        vec![Some(30.5), Some(29.8), None, Some(31.2)],
    )
}


#[cfg(test)]
mod deltas_tests {
    use crate::core::deltas::{best_lap_deltas, previous_lap_deltas, LapDelta};
    use crate::core::series::LapTimeSeries;
    use approx::assert_abs_diff_eq;
    use helpers::general::InsufficientDataError;

    #[test]
    fn test_previous_lap_deltas_1() {
        let deltas = previous_lap_deltas(&crate::example_series());
        assert_eq!(deltas.len(), 4);
        assert_abs_diff_eq!(deltas[0].delta().unwrap(), 0.0);
        assert_abs_diff_eq!(deltas[1].delta().unwrap(), -0.7, epsilon = 1e-9);
        assert_eq!(deltas[2], LapDelta::NoTime { lap: 3 });
        assert_abs_diff_eq!(deltas[3].delta().unwrap(), 0.0);
        assert_eq!(
            deltas.iter().map(|d| d.lap()).collect::<Vec<usize>>(),
            vec![1, 2, 3, 4]
        );
    }

    #[test]
    fn test_previous_lap_deltas_display() {
        let deltas = previous_lap_deltas(&crate::example_series());
        let lines: Vec<String> = deltas.iter().map(|d| d.to_string()).collect();
        assert_eq!(
            lines,
            vec![
                "Lap 1: 30.500 (+0.000)",
                "Lap 2: 29.800 (-0.700)",
                "Lap 3: No time",
                "Lap 4: 31.200 (+0.000)",
            ]
        );
    }

    #[test]
    fn test_previous_lap_deltas_first_lap_missing() {
        let series = LapTimeSeries::new("DriverA", vec![None, Some(30.0), Some(30.4)]);
        let deltas = previous_lap_deltas(&series);
        assert_eq!(deltas.len(), 3);
        assert_eq!(deltas[0], LapDelta::NoTime { lap: 1 });
        assert_abs_diff_eq!(deltas[1].delta().unwrap(), 0.0);
        assert_abs_diff_eq!(deltas[2].delta().unwrap(), 0.4, epsilon = 1e-9);
    }

    #[test]
    fn test_previous_lap_deltas_empty() {
        assert!(previous_lap_deltas(&LapTimeSeries::empty("DriverA")).is_empty());
    }

    #[test]
    fn test_best_lap_deltas_1() {
        let deltas = best_lap_deltas(&crate::example_series()).unwrap();
        assert_eq!(deltas.len(), 3);
        assert_eq!(
            deltas.iter().map(|d| d.lap).collect::<Vec<usize>>(),
            vec![1, 2, 4]
        );
        assert_abs_diff_eq!(deltas[0].delta, 0.7, epsilon = 1e-9);
        assert_abs_diff_eq!(deltas[1].delta, 0.0);
        assert_abs_diff_eq!(deltas[2].delta, 1.4, epsilon = 1e-9);

        let lines: Vec<String> = deltas.iter().map(|d| d.to_string()).collect();
        assert_eq!(
            lines,
            vec![
                "Lap 1: 30.500 (+0.700)",
                "Lap 2: 29.800 (+0.000)",
                "Lap 4: 31.200 (+1.400)",
            ]
        );
    }

    #[test]
    fn test_best_lap_deltas_ties() {
        let series = LapTimeSeries::new(
            "DriverA",
            vec![Some(30.0), Some(29.0), None, Some(31.0), Some(29.0)],
        );
        let deltas = best_lap_deltas(&series).unwrap();
        assert!(deltas.iter().all(|d| d.delta >= 0.0));
        let first_zero = deltas.iter().find(|d| d.delta == 0.0).unwrap();
        assert_eq!(first_zero.lap, 2);
    }

    #[test]
    fn test_best_lap_deltas_no_valid_laps() {
        let series = LapTimeSeries::new("DriverA", vec![None, None]);
        assert_eq!(
            best_lap_deltas(&series),
            Err(InsufficientDataError {
                required: 1,
                available: 0
            })
        );
    }
}

#[cfg(test)]
mod consistency_tests {
    use crate::core::consistency::{consistency_metrics, pace_consistency_index};
    use crate::core::series::LapTimeSeries;
    use approx::{assert_abs_diff_eq, assert_ulps_eq};
    use helpers::general::InsufficientDataError;

    #[test]
    fn test_consistency_metrics_1() {
        let metrics = consistency_metrics(&crate::example_series()).unwrap();
        assert_abs_diff_eq!(metrics.variance, 0.49, epsilon = 1e-9);
        assert_abs_diff_eq!(metrics.stddev, 0.7, epsilon = 1e-9);
    }

    #[test]
    fn test_consistency_metrics_two_values() {
        let (a, b) = (30.25, 31.75);
        let series = LapTimeSeries::new("DriverA", vec![Some(a), None, Some(b)]);
        let metrics = consistency_metrics(&series).unwrap();
        assert_abs_diff_eq!(
            metrics.stddev,
            (a - b).abs() / 2.0_f64.sqrt(),
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_consistency_metrics_insufficient_data() {
        let series = LapTimeSeries::new("DriverA", vec![Some(30.0), None]);
        assert_eq!(
            consistency_metrics(&series),
            Err(InsufficientDataError {
                required: 2,
                available: 1
            })
        );
        assert!(consistency_metrics(&LapTimeSeries::empty("DriverA")).is_err());
    }

    #[test]
    fn test_pace_consistency_index_1() {
        let pci = pace_consistency_index(&[30.0, 29.0, 31.0, 29.0]).unwrap();
        assert_ulps_eq!(pci.pci_mean, 0.975);
        assert_ulps_eq!(pci.pci_median, 0.967);
    }

    #[test]
    fn test_pace_consistency_index_single_value() {
        let pci = pace_consistency_index(&[30.0]).unwrap();
        assert_ulps_eq!(pci.pci_mean, 1.0);
        assert_ulps_eq!(pci.pci_median, 1.0);
    }

    #[test]
    fn test_pace_consistency_index_empty() {
        assert_eq!(
            pace_consistency_index(&[]),
            Err(InsufficientDataError {
                required: 1,
                available: 0
            })
        );
        assert!(LapTimeSeries::new("DriverA", vec![None])
            .pace_consistency_index()
            .is_err());
    }

    #[test]
    fn test_pace_consistency_index_series_filters_missing_laps() {
        let series = LapTimeSeries::new(
            "DriverA",
            vec![Some(30.0), None, Some(29.0), Some(31.0), None, Some(29.0)],
        );
        assert_eq!(
            series.pace_consistency_index().unwrap(),
            pace_consistency_index(&[30.0, 29.0, 31.0, 29.0]).unwrap()
        );
    }
}


#[cfg(test)]
mod pre_tests {
    use crate::pre::analysis_opts::AnalysisOpts;
    use crate::pre::check_analysis_opts_pars::{check_analysis_opts_pars, check_analysis_pars};
    use crate::pre::read_analysis_pars::{read_analysis_pars, AnalysisPars};
    use clap::Parser;
    use helpers::general::InputValueError;

    #[test]
    fn test_read_analysis_pars_1() {
        let pars = read_analysis_pars(&crate::input_path("pars/analysis_pars.json")).unwrap();
        assert_eq!(pars.time_loss_thresholds, vec![0.2, 0.3, 0.4, 0.5]);
        assert_eq!(pars.trend_window, 2);
    }

    #[test]
    fn test_read_analysis_pars_missing_file() {
        assert!(read_analysis_pars(&crate::input_path("pars/does_not_exist.json")).is_err());
    }

    #[test]
    fn test_analysis_pars_defaults() {
        let pars: AnalysisPars = serde_json::from_str("{\"trend_window\": 5}").unwrap();
        assert_eq!(pars.trend_window, 5);
        assert_eq!(
            pars.time_loss_thresholds,
            AnalysisPars::default().time_loss_thresholds
        );
        assert!(check_analysis_pars(&pars).is_ok());
    }

    #[test]
    fn test_check_analysis_pars_invalid() {
        let mut pars = AnalysisPars::default();
        pars.time_loss_thresholds = vec![0.2, -0.1];
        let e = check_analysis_pars(&pars).unwrap_err();
        assert!(e.downcast_ref::<InputValueError>().is_some());

        let mut pars = AnalysisPars::default();
        pars.trend_window = 0;
        assert!(check_analysis_pars(&pars).is_err());

        let mut pars = AnalysisPars::default();
        pars.trend_tolerance = -0.5;
        assert!(check_analysis_pars(&pars).is_err());
    }

    #[test]
    fn test_analysis_opts_1() {
        let csvfile_path = crate::input_path("lap_times.csv");
        let analysis_opts = AnalysisOpts::try_parse_from(vec![
            "lapstats",
            "-c",
            csvfile_path.to_str().unwrap(),
            "-e",
            "EpicX18 GT9",
            "--entity",
            "Speedster 7",
        ])
        .unwrap();
        assert_eq!(analysis_opts.entities, vec!["EpicX18 GT9", "Speedster 7"]);
        assert!(analysis_opts.parfile_path.is_none());
        assert!(!analysis_opts.debug);
        assert!(check_analysis_opts_pars(&analysis_opts, &AnalysisPars::default()).is_ok());
    }

    #[test]
    fn test_analysis_opts_requires_entity() {
        assert!(AnalysisOpts::try_parse_from(vec!["lapstats", "-c", "lap_times.csv"]).is_err());
    }

    #[test]
    fn test_check_analysis_opts_missing_csvfile() {
        let analysis_opts = AnalysisOpts::try_parse_from(vec![
            "lapstats",
            "-c",
            "does_not_exist.csv",
            "-e",
            "EpicX18 GT9",
        ])
        .unwrap();
        assert!(check_analysis_opts_pars(&analysis_opts, &AnalysisPars::default()).is_err());
    }
}
