use super::*;

#[test]
fn non_positive_inputs_give_zero_trees() {
    let model = DensityModel::calibrated();
    assert_eq!(estimate_tree_count(-5.0, 50.0, &model), 0);
    assert_eq!(estimate_tree_count(10.0, 0.0, &model), 0);
    assert_eq!(estimate_tree_count(0.0, 80.0, &model), 0);
    assert_eq!(estimate_tree_count(10.0, -3.0, &model), 0);
    assert_eq!(estimate_tree_count(f64::NAN, 50.0, &model), 0);
    assert_eq!(
        estimate_tree_count(-5.0, 50.0, &DensityModel::ratio_model()),
        0
    );
}

#[test]
fn full_coverage_uses_dense_tier() {
    let count = estimate_tree_count(2.0, 100.0, &DensityModel::calibrated());
    assert_eq!(count, 24_000);
}

#[test]
fn generic_table_matches_hand_computation() {
    let model = DensityModel::generic();
    // 10 km2, 20 % -> moderate: 10 * 0.2 * 2000
    assert_eq!(estimate_tree_count(10.0, 20.0, &model), 4_000);
    // 10 km2, 10 % -> sparse: 10 * 0.1 * 500
    assert_eq!(estimate_tree_count(10.0, 10.0, &model), 500);
    // 10 km2, 50 % -> dense: 10 * 0.5 * 5000
    assert_eq!(estimate_tree_count(10.0, 50.0, &model), 25_000);
}

#[test]
fn tier_boundaries_fall_to_lower_tier() {
    let model = DensityModel::calibrated();
    // 0.35 is moderate: 1 * 0.35 * 7500 = 2625
    assert_eq!(estimate_tree_count(1.0, 35.0, &model), 2_625);
    // 0.15 is sparse: 1 * 0.15 * 3000 = 450
    assert_eq!(estimate_tree_count(1.0, 15.0, &model), 450);
}

#[test]
fn count_does_not_drop_across_tier_boundaries() {
    let model = DensityModel::calibrated();
    for area in [0.5, 1.0, 7.3] {
        let below_15 = estimate_tree_count(area, 14.99, &model);
        let at_15 = estimate_tree_count(area, 15.0, &model);
        let above_15 = estimate_tree_count(area, 15.01, &model);
        assert!(below_15 <= at_15 && at_15 <= above_15);

        let below_35 = estimate_tree_count(area, 34.99, &model);
        let at_35 = estimate_tree_count(area, 35.0, &model);
        let above_35 = estimate_tree_count(area, 35.01, &model);
        assert!(below_35 <= at_35 && at_35 <= above_35);
    }
}

#[test]
fn ratio_model_multiplies_by_percentage() {
    let model = DensityModel::ratio_model();
    // 50 * 0.217 * 288673 * 1.0 = 3132102.05
    assert_eq!(estimate_tree_count(1.0, 50.0, &model), 3_132_102);
}

#[test]
fn zero_area_still_reports_advisory() {
    let estimator = TreeEstimator::default();
    let result = estimator.estimate(0.0, &CoverageResult::from_percentage(60.0));
    assert_eq!(result.tree_count, 0);
    assert_eq!(result.advisory, AdvisoryTable::by_percentage().lookup(60.0));
    assert_eq!(result.area_km2, 0.0);
    assert_eq!(result.vegetation_percentage, 60.0);
}

#[test]
fn tree_count_strategy_keys_on_final_count() {
    let params = AdvisoryParams {
        strategy: AdvisoryStrategy::ByTreeCount,
        table: None,
    };
    let estimator = TreeEstimator::new(DensityModel::calibrated(), &params).unwrap();
    // 2 km2 * 1.0 * 12000 = 24000 trees -> top entry
    let result = estimator.estimate(2.0, &CoverageResult::from_percentage(100.0));
    assert_eq!(result.tree_count, 24_000);
    assert_eq!(result.advisory, AdvisoryTable::by_tree_count().lookup(24_000.0));
    // zero area -> zero trees -> lowest entry even at full coverage
    let result = estimator.estimate(0.0, &CoverageResult::from_percentage(100.0));
    assert_eq!(result.advisory, AdvisoryTable::by_tree_count().lookup(0.0));
}

#[test]
fn negative_ratio_constants_are_rejected() {
    let model = DensityModel::Ratio {
        ratio: -0.1,
        trees_per_km2: 1.0,
    };
    assert!(TreeEstimator::new(model, &AdvisoryParams::default()).is_err());
}
