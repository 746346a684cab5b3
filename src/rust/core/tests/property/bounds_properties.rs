use proptest::prelude::*;
use scaffold_core::optimization::sweeps::SweepGenerator;
use scaffold_core::{
    ArchitectureEngine, BiologyEngine, PredictionConfig, PredictionKernel, ProcessInputs,
    SuitabilityEngine,
};

fn in_domain() -> impl Strategy<Value = ProcessInputs> {
    (
        30_000.0..=200_000.0f64,
        5.0..=20.0f64,
        10.0..=25.0f64,
        0.5..=3.0f64,
        10.0..=25.0f64,
    )
        .prop_map(|(mw, c, v, q, d)| ProcessInputs::new(mw, c, v, q, d))
}

fn within(value: f64, min: f64, max: f64) -> bool {
    value >= min && value <= max
}

proptest! {
    #[test]
    fn architecture_within_bounds(inputs in in_domain()) {
        let a = ArchitectureEngine::predict(&inputs);
        prop_assert!(within(a.fiber_diameter, 150.0, 1500.0), "fiber {}", a.fiber_diameter);
        prop_assert!(within(a.porosity, 60.0, 95.0));
        prop_assert!(within(a.pore_size, 2.0, 15.0));
        prop_assert!(within(a.tensile_strength, 2.0, 32.0));
        prop_assert!(within(a.youngs_modulus, 20.0, 85.0));
        prop_assert!(within(a.water_absorption, 350.0, 950.0));
        prop_assert!(within(a.contact_angle, 35.0, 75.0));
        prop_assert!(within(a.degradation_rate, 4.0, 25.0));
        prop_assert!(within(a.swelling_ratio, 80.0, 100.0));
    }

    #[test]
    fn biology_within_bounds(inputs in in_domain()) {
        let a = ArchitectureEngine::predict(&inputs);
        let b = BiologyEngine::predict(inputs.molecular_weight, &a);
        prop_assert!(within(b.cell_viability, 85.0, 98.0));
        prop_assert!(within(b.proliferation_time, 20.0, 48.0));
        prop_assert!(within(b.gag_content, 5.0, 45.0));
        prop_assert!(within(b.col2_expression, 1.0, 8.0));
        prop_assert!(within(b.aggrecan_expression, 1.0, 6.0));
        prop_assert!(within(b.col1_col2_ratio, 0.1, 2.5));
        prop_assert!(within(b.burst_release, 15.0, 75.0));
        prop_assert!(within(b.sustained_duration, 3.0, 28.0));
        let s = b.msc_lineage.scores();
        for score in [s.neurogenic, s.osteogenic, s.chondrogenic] {
            prop_assert!(within(score, 0.0, 100.0));
        }
    }

    #[test]
    fn scores_between_zero_and_hundred(inputs in in_domain()) {
        let a = ArchitectureEngine::predict(&inputs);
        for (_, s) in SuitabilityEngine::score_applications(&a).iter() {
            prop_assert!(within(s, 0.0, 100.0), "application score {}", s);
        }
        for (_, s) in SuitabilityEngine::score_cells(&a).iter() {
            prop_assert!(within(s, 0.0, 100.0), "cell score {}", s);
        }
    }

    #[test]
    fn prediction_is_deterministic(inputs in in_domain()) {
        let config = PredictionConfig::default();
        let first = PredictionKernel::compute(&inputs, &config).unwrap();
        let second = PredictionKernel::compute(&inputs, &config).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn trade_off_flags_exactly_one(inputs in in_domain()) {
        let points = SweepGenerator::trade_off(inputs.molecular_weight, inputs.concentration);
        prop_assert_eq!(points.iter().filter(|p| p.current).count(), 1);
    }

    #[test]
    fn degradation_curves_bounded(rate in 4.0..=25.0f64) {
        for p in SweepGenerator::degradation_profile(rate, 16) {
            prop_assert!(within(p.mass_remaining, 0.0, 100.0));
            prop_assert!(within(p.mechanical_retention, 0.0, 100.0));
            prop_assert!(within(p.cell_infiltration, 0.0, 100.0));
        }
    }

    #[test]
    fn out_of_domain_still_clamped(
        mw in 0.0..=1_000_000.0f64,
        c in 0.0..=60.0f64,
        v in 0.0..=60.0f64,
        q in 0.0..=10.0f64,
        d in 0.0..=60.0f64,
    ) {
        let inputs = ProcessInputs::new(mw, c, v, q, d);
        let p = PredictionKernel::compute(&inputs, &PredictionConfig::default()).unwrap();
        prop_assert!(within(p.architecture.fiber_diameter, 150.0, 1500.0));
        prop_assert!(within(p.architecture.porosity, 60.0, 95.0));
        prop_assert!(within(p.biology.cell_viability, 85.0, 98.0));
    }
}
