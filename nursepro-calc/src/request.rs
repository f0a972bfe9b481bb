//! JSON request/report surface shared by the CLI and the WASM bridge.

use nursepro_core::{BmiCategory, CalcError, CalculatorConfig, Drug, DropFactor};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{compute_bmi, compute_dose_rate, compute_drip_rate_raw};

/// One calculation as submitted by a form or a JSON file.
///
/// Numeric fields are optional on the wire so that an empty form field
/// surfaces as [`CalcError::MissingInput`] instead of a parse failure.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "calculator", rename_all = "snake_case")]
pub enum CalculationRequest {
    Dose {
        #[serde(default)]
        drug: Drug,
        ordered_dose: Option<f64>,
        stock_amount: Option<f64>,
        diluent_volume: Option<f64>,
        patient_weight: Option<f64>,
    },
    Drip {
        total_volume: Option<f64>,
        duration_hours: Option<f64>,
        drop_factor: Option<u32>,
    },
    Bmi {
        weight_kg: Option<f64>,
        height_cm: Option<f64>,
    },
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CalculatorKind {
    Dose,
    Drip,
    Bmi,
}

/// Result of a calculation, rounded for display.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CalculationReport {
    pub calculator: CalculatorKind,
    /// Headline figure at display precision.
    pub value: f64,
    /// Unrounded result.
    pub raw_value: f64,
    pub unit: String,
    pub display: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<BmiCategory>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

/// Parse and run a calculation request from a JSON string.
pub fn calculate_str(
    request_json: &str,
    config: &CalculatorConfig,
) -> Result<CalculationReport, CalcError> {
    let value: Value =
        serde_json::from_str(request_json).map_err(|err| CalcError::Parse(err.to_string()))?;
    calculate_value(&value, config)
}

/// Parse and run a calculation request from a `serde_json::Value`.
pub fn calculate_value(
    request: &Value,
    config: &CalculatorConfig,
) -> Result<CalculationReport, CalcError> {
    let request =
        CalculationRequest::deserialize(request).map_err(|err| CalcError::Parse(err.to_string()))?;
    calculate(&request, config)
}

pub fn calculate(
    request: &CalculationRequest,
    config: &CalculatorConfig,
) -> Result<CalculationReport, CalcError> {
    match *request {
        CalculationRequest::Dose {
            drug,
            ordered_dose,
            stock_amount,
            diluent_volume,
            patient_weight,
        } => {
            let rate = compute_dose_rate(
                drug,
                required("ordered_dose", ordered_dose)?,
                required("stock_amount", stock_amount)?,
                required("diluent_volume", diluent_volume)?,
                patient_weight,
            )?;
            Ok(CalculationReport {
                calculator: CalculatorKind::Dose,
                value: rate.rounded(config.dose_decimals),
                raw_value: rate.value,
                unit: rate.unit.symbol().to_string(),
                display: rate.display(config),
                category: None,
                detail: Some(format!("{} ({})", drug.display_name(), drug.dose_unit())),
            })
        }
        CalculationRequest::Drip {
            total_volume,
            duration_hours,
            drop_factor,
        } => {
            let factor = drop_factor.unwrap_or_else(|| DropFactor::default().drops_per_ml());
            let rate = compute_drip_rate_raw(
                required("total_volume", total_volume)?,
                required("duration_hours", duration_hours)?,
                factor,
            )?;
            let window = config.drip_window_seconds;
            let headline = rate.headline();
            Ok(CalculationReport {
                calculator: CalculatorKind::Drip,
                value: headline,
                raw_value: rate.drops_per_minute,
                unit: "gtt/min".to_string(),
                display: format!("{headline} gtt/min"),
                category: None,
                detail: Some(format!(
                    "{:.1} drops per {window} s at {factor} gtt/ml",
                    rate.drops_per_window(window)
                )),
            })
        }
        CalculationRequest::Bmi {
            weight_kg,
            height_cm,
        } => {
            let bmi = compute_bmi(
                required("weight_kg", weight_kg)?,
                required("height_cm", height_cm)?,
            )?;
            Ok(CalculationReport {
                calculator: CalculatorKind::Bmi,
                value: bmi.rounded(config.bmi_decimals),
                raw_value: bmi.value,
                unit: "kg/m2".to_string(),
                display: format!(
                    "{:.*} kg/m2 ({})",
                    config.bmi_decimals as usize,
                    bmi.value,
                    bmi.category.label()
                ),
                category: Some(bmi.category),
                detail: Some(bmi.category.note().to_string()),
            })
        }
    }
}

fn required(field: &'static str, value: Option<f64>) -> Result<f64, CalcError> {
    value.ok_or(CalcError::MissingInput(field))
}
