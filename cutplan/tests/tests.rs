#[cfg(test)]
mod tests {
    use float_cmp::approx_eq;
    use test_case::test_case;

    use cutplan::OptError;
    use cutplan::entities::{Instance, Part, Sheet};
    use cutplan::geometry::primitives::Rect;
    use cutplan::io;
    use cutplan::io::ext_repr::ExtInstance;
    use cutplan::optimizer::{OptimizerConfig, optimize};
    use cutplan::strategies::Algorithm;
    use cutplan::util::assertions;

    fn instance(parts: &[(&str, f64, f64)], sheet_w: f64, sheet_h: f64) -> Instance {
        let parts = parts
            .iter()
            .enumerate()
            .map(|(id, &(name, w, h))| Part::new(id, name, w, h))
            .collect();
        Instance::new(parts, Sheet::new(sheet_w, sheet_h)).expect("valid instance")
    }

    /// A mix of regular parts, a part that fits only rotated and a part that
    /// fits nowhere, on a non-square sheet.
    fn mixed_instance() -> Instance {
        instance(
            &[
                ("top", 600.0, 400.0),
                ("shelf", 600.0, 400.0),
                ("door", 300.0, 300.0),
                ("back", 400.0, 900.0),
                ("tabletop", 1200.0, 1200.0),
                ("strip", 1000.0, 100.0),
                ("cleat", 250.0, 250.0),
            ],
            1000.0,
            500.0,
        )
    }

    #[test_case(Algorithm::FirstFitDecreasing)]
    #[test_case(Algorithm::BestFitDecreasing)]
    #[test_case(Algorithm::BottomLeft)]
    #[test_case(Algorithm::Guillotine)]
    #[test_case(Algorithm::Skyline)]
    fn solution_invariants_hold(algorithm: Algorithm) {
        let instance = mixed_instance();
        let sol = algorithm.strategy().pack(&instance);

        assert!(assertions::layouts_within_bounds(&sol.sheets, instance.sheet));
        assert!(assertions::layouts_disjoint(&sol.sheets));
        assert!(assertions::parts_conserved(
            &sol.sheets,
            &sol.unplaced,
            &instance
        ));
        assert!(assertions::placements_match_parts(&sol.sheets, &instance));
        assert!(sol.utilization >= 0.0 && sol.utilization <= 100.0);
        assert_eq!(sol.sheets_used, sol.sheets.len());

        // the 1200x1200 part fits nowhere
        assert!(sol.unplaced.contains(&4));
        if algorithm == Algorithm::BestFitDecreasing {
            // the only strategy allowed to rotate: 400x900 goes in sideways
            assert_eq!(sol.unplaced, vec![4]);
        } else {
            assert!(sol.unplaced.contains(&3));
        }
    }

    #[test_case(Algorithm::FirstFitDecreasing)]
    #[test_case(Algorithm::BestFitDecreasing)]
    #[test_case(Algorithm::BottomLeft)]
    #[test_case(Algorithm::Guillotine)]
    #[test_case(Algorithm::Skyline)]
    fn identical_input_yields_identical_output(algorithm: Algorithm) {
        let instance = mixed_instance();
        let a = algorithm.strategy().pack(&instance);
        let b = algorithm.strategy().pack(&instance);
        assert_eq!(a, b);
    }

    #[test]
    fn parallel_and_sequential_runs_agree() {
        let instance = mixed_instance();
        let parallel = optimize(&instance, &OptimizerConfig::default()).unwrap();
        let sequential = optimize(
            &instance,
            &OptimizerConfig {
                parallel: false,
                ..OptimizerConfig::default()
            },
        )
        .unwrap();
        assert_eq!(parallel, sequential);
    }

    // sheet 1000x1000; parts [(600,400), (600,400), (300,300)]
    #[test]
    fn ffd_packs_three_parts_on_one_sheet() {
        let instance = instance(
            &[
                ("top", 600.0, 400.0),
                ("bottom", 600.0, 400.0),
                ("side", 300.0, 300.0),
            ],
            1000.0,
            1000.0,
        );
        let sol = Algorithm::FirstFitDecreasing.strategy().pack(&instance);

        assert_eq!(sol.sheets_used, 1);
        assert!(sol.unplaced.is_empty());
        assert!(approx_eq!(f64, sol.utilization, 57.0, epsilon = 1e-9));
        assert!(approx_eq!(f64, sol.waste, 43.0, epsilon = 1e-9));

        let rects: Vec<Rect> = sol.sheets[0].placed.iter().map(|pp| pp.rect).collect();
        assert_eq!(
            rects,
            vec![
                Rect::try_new(0.0, 0.0, 600.0, 400.0).unwrap(),
                Rect::try_new(0.0, 400.0, 600.0, 800.0).unwrap(),
                Rect::try_new(600.0, 0.0, 900.0, 300.0).unwrap(),
            ]
        );
    }

    // a part larger than the sheet is reported, not silently dropped
    #[test_case(Algorithm::FirstFitDecreasing)]
    #[test_case(Algorithm::BestFitDecreasing)]
    #[test_case(Algorithm::BottomLeft)]
    #[test_case(Algorithm::Guillotine)]
    #[test_case(Algorithm::Skyline)]
    fn oversized_part_is_reported_unplaced(algorithm: Algorithm) {
        let instance = instance(&[("tabletop", 1200.0, 1200.0)], 1000.0, 1000.0);
        let sol = algorithm.strategy().pack(&instance);
        assert_eq!(sol.placed_count(), 0);
        assert_eq!(sol.sheets_used, 0);
        assert_eq!(sol.unplaced, vec![0]);
    }

    #[test]
    fn nothing_placeable_means_no_plan() {
        let instance = instance(&[("tabletop", 1200.0, 1200.0)], 1000.0, 1000.0);
        let err = optimize(&instance, &OptimizerConfig::default()).unwrap_err();
        assert_eq!(err, OptError::NoPlanFound);
    }

    #[test]
    fn empty_input_is_rejected_before_any_strategy_runs() {
        let err = Instance::new(vec![], Sheet::new(1000.0, 1000.0)).unwrap_err();
        assert_eq!(err, OptError::EmptyInput);
    }

    // four 500x500 parts tile a 1000x1000 sheet exactly
    #[test_case(Algorithm::FirstFitDecreasing)]
    #[test_case(Algorithm::BestFitDecreasing)]
    #[test_case(Algorithm::BottomLeft)]
    #[test_case(Algorithm::Guillotine)]
    #[test_case(Algorithm::Skyline)]
    fn exact_tiling_reaches_full_utilization(algorithm: Algorithm) {
        let instance = instance(
            &[
                ("q1", 500.0, 500.0),
                ("q2", 500.0, 500.0),
                ("q3", 500.0, 500.0),
                ("q4", 500.0, 500.0),
            ],
            1000.0,
            1000.0,
        );
        let sol = algorithm.strategy().pack(&instance);
        assert_eq!(sol.sheets_used, 1);
        assert!(sol.unplaced.is_empty());
        assert_eq!(sol.utilization, 100.0);
        assert_eq!(sol.waste, 0.0);
    }

    // fractional dimensions put placements at non-representable coordinates,
    // so widths recomputed from the corners drift a few ulps from the part dims
    #[test_case(Algorithm::FirstFitDecreasing)]
    #[test_case(Algorithm::BestFitDecreasing)]
    #[test_case(Algorithm::BottomLeft)]
    #[test_case(Algorithm::Guillotine)]
    #[test_case(Algorithm::Skyline)]
    fn fractional_dimensions_survive_placement_validation(algorithm: Algorithm) {
        let instance = instance(
            &[
                ("cleat", 24.7, 14.1),
                ("panel", 48.4, 53.4),
                ("side", 72.1, 118.9),
            ],
            1000.0,
            1000.0,
        );
        // pack re-validates its own output when debug assertions are on
        let sol = algorithm.strategy().pack(&instance);
        assert!(sol.unplaced.is_empty());
        assert!(assertions::placements_match_parts(&sol.sheets, &instance));
        assert!(assertions::layouts_within_bounds(&sol.sheets, instance.sheet));
        assert!(assertions::layouts_disjoint(&sol.sheets));
    }

    #[test]
    fn rotation_is_exclusive_to_best_fit() {
        let instance = instance(&[("back", 400.0, 900.0)], 1000.0, 500.0);

        let bfd = Algorithm::BestFitDecreasing.strategy().pack(&instance);
        assert!(bfd.unplaced.is_empty());
        assert_eq!(
            bfd.sheets[0].placed[0].rect,
            Rect::try_new(0.0, 0.0, 900.0, 400.0).unwrap()
        );

        for algorithm in [
            Algorithm::FirstFitDecreasing,
            Algorithm::BottomLeft,
            Algorithm::Guillotine,
            Algorithm::Skyline,
        ] {
            let sol = algorithm.strategy().pack(&instance);
            assert_eq!(sol.unplaced, vec![0]);
        }
    }

    #[test]
    fn solutions_are_ranked_by_utilization_then_sheet_count() {
        // FFD's rigid split forces the 40x90 part onto a second sheet;
        // every other strategy fits both parts on one
        let instance = instance(&[("panel", 60.0, 60.0), ("rail", 40.0, 90.0)], 100.0, 100.0);
        let ranked = optimize(&instance, &OptimizerConfig::default()).unwrap();

        let order: Vec<Algorithm> = ranked.iter().map(|sol| sol.algorithm).collect();
        assert_eq!(
            order,
            vec![
                Algorithm::BestFitDecreasing,
                Algorithm::BottomLeft,
                Algorithm::Guillotine,
                Algorithm::Skyline,
                Algorithm::FirstFitDecreasing,
            ]
        );
        assert!(approx_eq!(f64, ranked[0].utilization, 72.0, epsilon = 1e-9));
        assert_eq!(ranked[0].sheets_used, 1);
        assert!(approx_eq!(f64, ranked[4].utilization, 36.0, epsilon = 1e-9));
        assert_eq!(ranked[4].sheets_used, 2);
        for pair in ranked.windows(2) {
            assert!(pair[0].utilization >= pair[1].utilization);
        }
    }

    #[test]
    fn import_validates_and_export_resolves_names() {
        let ext: ExtInstance = serde_json::from_str(
            r#"{
                "parts": [
                    {"name": "top", "width": 600.0, "height": 400.0},
                    {"name": "side", "width": 300.0, "height": 300.0}
                ],
                "sheet": {"width": 1000.0, "height": 1000.0}
            }"#,
        )
        .unwrap();
        let instance = io::import(&ext).unwrap();
        let sol = Algorithm::FirstFitDecreasing.strategy().pack(&instance);
        let ext_sol = io::export(&instance, &sol);

        assert_eq!(ext_sol.sheets_used, 1);
        assert_eq!(ext_sol.sheets[0][0].part, "top");
        assert_eq!(ext_sol.sheets[0][1].part, "side");
        assert_eq!(ext_sol.sheets[0][1].width, 300.0);
        assert!(ext_sol.unplaced.is_empty());
    }

    #[test]
    fn import_rejects_non_positive_dimensions() {
        let ext: ExtInstance = serde_json::from_str(
            r#"{
                "parts": [{"name": "top", "width": -600.0, "height": 400.0}],
                "sheet": {"width": 1000.0, "height": 1000.0}
            }"#,
        )
        .unwrap();
        let err = io::import(&ext).unwrap_err();
        assert!(matches!(err, OptError::InvalidDimension { .. }));
    }
}
