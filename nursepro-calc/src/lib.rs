//! Clinical calculators: syringe-pump dose rate, gravity drip rate and BMI.
//!
//! Every entry point is pure. A calculation either yields a finite value or
//! a [`CalcError`]; callers render the error as "no result yet".

mod reference;
mod request;

use nursepro_core::{Bmi, BmiCategory, CalcError, DoseRate, DripRate, Drug, DropFactor, Formula};
use tracing::debug;

pub use reference::{drug_reference, drug_references, DrugReference};
pub use request::{
    calculate, calculate_str, calculate_value, CalculationReport, CalculationRequest,
    CalculatorKind,
};

const MINUTES_PER_HOUR: f64 = 60.0;
const MCG_PER_MG: f64 = 1000.0;

/// Convert an ordered dose into a pump rate (or a volume for the generic
/// conversion).
///
/// Units follow the drug's convention: mcg for titrated catecholamines and
/// nitroglycerin, mg or Units for ratio drugs, mg stock, ml diluent, kg
/// weight. `patient_weight` is only read for weight-based drugs.
pub fn compute_dose_rate(
    drug: Drug,
    ordered_dose: f64,
    stock_amount: f64,
    diluent_volume: f64,
    patient_weight: Option<f64>,
) -> Result<DoseRate, CalcError> {
    let dose = positive("ordered_dose", ordered_dose)?;
    let stock = positive("stock_amount", stock_amount)?;
    let diluent = positive("diluent_volume", diluent_volume)?;

    let formula = drug.formula();
    let value = match formula {
        Formula::Generic => (dose / stock) * diluent,
        Formula::WeightBased => {
            let weight = patient_weight.ok_or(CalcError::MissingInput("patient_weight"))?;
            let weight = positive("patient_weight", weight)?;
            (dose * weight * MINUTES_PER_HOUR * diluent) / (stock * MCG_PER_MG)
        }
        Formula::TimeBased => (dose * MINUTES_PER_HOUR * diluent) / (stock * MCG_PER_MG),
        Formula::Ratio => dose / (stock / diluent),
    };

    Ok(DoseRate {
        drug,
        formula,
        value: finite(value)?,
        unit: formula.rate_unit(),
    })
}

/// Drops per minute for a manual infusion.
pub fn compute_drip_rate(
    total_volume: f64,
    duration_hours: f64,
    drop_factor: DropFactor,
) -> Result<DripRate, CalcError> {
    let volume = positive("total_volume", total_volume)?;
    let hours = positive("duration_hours", duration_hours)?;
    let drops = f64::from(drop_factor.drops_per_ml());

    let value = (volume * drops) / (hours * MINUTES_PER_HOUR);
    Ok(DripRate {
        drops_per_minute: finite(value)?,
        drop_factor,
    })
}

/// Same as [`compute_drip_rate`] with the drop factor given as drops/ml.
pub fn compute_drip_rate_raw(
    total_volume: f64,
    duration_hours: f64,
    drop_factor: u32,
) -> Result<DripRate, CalcError> {
    compute_drip_rate(total_volume, duration_hours, DropFactor::try_from(drop_factor)?)
}

/// Body-mass index from weight in kg and height in cm.
pub fn compute_bmi(weight_kg: f64, height_cm: f64) -> Result<Bmi, CalcError> {
    let weight = positive("weight_kg", weight_kg)?;
    let height_m = positive("height_cm", height_cm)? / 100.0;

    let value = finite(weight / (height_m * height_m))?;
    let category = BmiCategory::classify(value).ok_or(CalcError::NonFinite)?;
    Ok(Bmi { value, category })
}

/// Parse a free-text form field.
pub fn parse_field(field: &'static str, raw: &str) -> Result<f64, CalcError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(CalcError::MissingInput(field));
    }
    trimmed.parse::<f64>().map_err(|_| CalcError::InvalidNumber {
        field,
        raw: raw.to_string(),
    })
}

fn positive(field: &'static str, value: f64) -> Result<f64, CalcError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        debug!(field, value, "input rejected");
        Err(CalcError::NonPositive { field, value })
    }
}

fn finite(value: f64) -> Result<f64, CalcError> {
    if value.is_finite() {
        Ok(value)
    } else {
        debug!(value, "non-finite result discarded");
        Err(CalcError::NonFinite)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nursepro_core::CalculatorConfig;

    #[test]
    fn parse_field_trims_and_rejects_blank() {
        assert_eq!(parse_field("weight_kg", " 70.5 "), Ok(70.5));
        assert_eq!(
            parse_field("weight_kg", "   "),
            Err(CalcError::MissingInput("weight_kg"))
        );
        assert!(matches!(
            parse_field("weight_kg", "70kg"),
            Err(CalcError::InvalidNumber { field: "weight_kg", .. })
        ));
    }

    #[test]
    fn overflow_is_reported_as_non_finite() {
        let result = compute_dose_rate(Drug::Generic, f64::MAX, f64::MIN_POSITIVE, 50.0, None);
        assert_eq!(result, Err(CalcError::NonFinite));
    }

    #[test]
    fn huge_finite_result_keeps_finite_headline() {
        let request = serde_json::json!({
            "calculator": "dose",
            "ordered_dose": 1e307,
            "stock_amount": 1,
            "diluent_volume": 1
        });
        let report = calculate_value(&request, &CalculatorConfig::default()).expect("dose");
        assert!(report.value.is_finite());
        assert_eq!(report.value, report.raw_value);

        let json = serde_json::to_value(&report).expect("serialize report");
        assert!(json["value"].is_f64());
    }

    #[test]
    fn weight_ignored_outside_weight_based_drugs() {
        let with = compute_dose_rate(Drug::Furosemide, 5.0, 100.0, 50.0, Some(-1.0));
        let without = compute_dose_rate(Drug::Furosemide, 5.0, 100.0, 50.0, None);
        assert_eq!(with, without);
    }
}
