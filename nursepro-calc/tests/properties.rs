use nursepro_calc::{compute_bmi, compute_dose_rate, compute_drip_rate};
use nursepro_core::{BmiCategory, Drug, DropFactor};
use proptest::prelude::*;

fn quantity() -> impl Strategy<Value = f64> {
    0.01f64..10_000.0
}

fn weight_based_drug() -> impl Strategy<Value = Drug> {
    prop_oneof![
        Just(Drug::Dobutamine),
        Just(Drug::Norepinephrine),
        Just(Drug::Epinephrine),
        Just(Drug::Nicardipine),
    ]
}

fn any_drug() -> impl Strategy<Value = Drug> {
    (0..Drug::ALL.len()).prop_map(|idx| Drug::ALL[idx])
}

proptest! {
    #[test]
    fn generic_formula_holds(dose in quantity(), stock in quantity(), volume in quantity()) {
        let rate = compute_dose_rate(Drug::Generic, dose, stock, volume, None).unwrap();
        prop_assert_eq!(rate.value, (dose / stock) * volume);
    }

    #[test]
    fn weight_based_rate_grows_with_weight(
        drug in weight_based_drug(),
        dose in quantity(),
        stock in quantity(),
        volume in quantity(),
        weight in 1.0f64..300.0,
        extra in 0.5f64..100.0,
    ) {
        let light = compute_dose_rate(drug, dose, stock, volume, Some(weight)).unwrap();
        let heavy = compute_dose_rate(drug, dose, stock, volume, Some(weight + extra)).unwrap();
        prop_assert!(heavy.value > light.value);
    }

    #[test]
    fn calculators_are_deterministic(
        drug in any_drug(),
        dose in quantity(),
        stock in quantity(),
        volume in quantity(),
        weight in 1.0f64..300.0,
        height in 40.0f64..250.0,
    ) {
        let first = compute_dose_rate(drug, dose, stock, volume, Some(weight)).unwrap();
        let second = compute_dose_rate(drug, dose, stock, volume, Some(weight)).unwrap();
        prop_assert_eq!(first.value.to_bits(), second.value.to_bits());

        let first = compute_drip_rate(volume, dose, DropFactor::Macro15).unwrap();
        let second = compute_drip_rate(volume, dose, DropFactor::Macro15).unwrap();
        prop_assert_eq!(first.drops_per_minute.to_bits(), second.drops_per_minute.to_bits());

        let first = compute_bmi(weight, height).unwrap();
        let second = compute_bmi(weight, height).unwrap();
        prop_assert_eq!(first.value.to_bits(), second.value.to_bits());
        prop_assert_eq!(first.category, second.category);
    }

    #[test]
    fn bmi_category_always_matches_value(weight in 1.0f64..300.0, height in 40.0f64..250.0) {
        let bmi = compute_bmi(weight, height).unwrap();
        prop_assert_eq!(BmiCategory::classify(bmi.value), Some(bmi.category));
    }

    #[test]
    fn zero_stock_never_computes(drug in any_drug(), dose in quantity(), volume in quantity()) {
        prop_assert!(compute_dose_rate(drug, dose, 0.0, volume, Some(70.0)).is_err());
    }
}
