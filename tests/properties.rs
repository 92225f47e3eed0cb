//! Property-based tests for the differencing pipeline
//!
//! Whatever the input, a run must describe itself consistently: one step per
//! differencing order, a final series of the matching length, and a terminal
//! state that agrees with the last verdict.

#[cfg(test)]
mod property_tests {
    use proptest::prelude::*;
    use stationarity::{analyze, difference, PipelineConfig, Series, StationarityPipeline, StationarityVerdict};

    fn series_strategy() -> impl Strategy<Value = Vec<f64>> {
        prop::collection::vec(-1e3f64..1e3, 30..120)
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(48))]

        // Property: the outcome's bookkeeping matches the work done
        #[test]
        fn prop_outcome_is_consistent(values in series_strategy(), cumulate in any::<bool>()) {
            let values: Vec<f64> = if cumulate {
                values
                    .iter()
                    .scan(0.0, |level, v| {
                        *level += v;
                        Some(*level)
                    })
                    .collect()
            } else {
                values
            };
            let n = values.len();
            let series = Series::new(values).unwrap();
            let config = PipelineConfig::default();

            let outcome = StationarityPipeline::new(config).run(&series).unwrap();
            let order = outcome.differencing_order();

            prop_assert!(order <= config.max_differences);
            prop_assert_eq!(outcome.steps().len(), order + 1);
            prop_assert_eq!(outcome.series().len(), n - order);
            for (expected_order, step) in outcome.steps().iter().enumerate() {
                prop_assert_eq!(step.order(), expected_order);
            }
            prop_assert_eq!(
                outcome.terminal().is_stationary(),
                outcome.final_verdict() == StationarityVerdict::Stationary
            );
            // Only the last step may be stationary
            for step in &outcome.steps()[..order] {
                prop_assert!(!step.verdict().is_stationary());
            }
        }

        // Property: the recorded differencer reproduces the final series
        #[test]
        fn prop_differencer_replays_outcome(values in series_strategy()) {
            let series = Series::new(values).unwrap();
            let outcome = StationarityPipeline::default().run(&series).unwrap();

            match outcome.differencer() {
                Some(differencer) => {
                    prop_assert_eq!(differencer.order, outcome.differencing_order());
                    let replayed = difference(&series, differencer.order).unwrap();
                    prop_assert_eq!(&replayed, outcome.series());
                }
                None => {
                    prop_assert_eq!(outcome.differencing_order(), 0);
                    prop_assert_eq!(outcome.series(), &series);
                }
            }
        }

        // Property: one-shot analysis agrees with the first pipeline step
        #[test]
        fn prop_analyze_matches_first_step(values in series_strategy()) {
            let series = Series::new(values).unwrap();
            let config = PipelineConfig::relaxed();
            let report = analyze(&series, &config).unwrap();
            let outcome = StationarityPipeline::new(config).run(&series).unwrap();

            let first = &outcome.steps()[0];
            prop_assert_eq!(report.verdict(), first.verdict());
            prop_assert_eq!(report.adf(), first.adf());
            prop_assert_eq!(report.kpss(), first.kpss());
            prop_assert_eq!(report.recommended_transform(), first.verdict().recommended_transform());
        }
    }
}
