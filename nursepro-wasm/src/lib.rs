//! WASM <-> JavaScript bridge for the clinical calculators.
//!
//! A calculation that cannot produce a value returns `undefined` to
//! JavaScript; only malformed requests raise an exception.

use nursepro_calc::{compute_bmi as bmi, compute_dose_rate as dose, compute_drip_rate_raw};
use nursepro_core::{CalcError, CalculatorConfig, Drug};
use serde::{Deserialize, Serialize};
use serde_wasm_bindgen::{from_value, to_value};
use wasm_bindgen::prelude::*;

#[derive(Deserialize)]
struct JsCalculatorConfig {
    #[serde(default)]
    dose_decimals: Option<u32>,
    #[serde(default)]
    bmi_decimals: Option<u32>,
    #[serde(default)]
    drip_window_seconds: Option<u32>,
}

impl From<JsCalculatorConfig> for CalculatorConfig {
    fn from(cfg: JsCalculatorConfig) -> Self {
        let mut base = CalculatorConfig::default();
        if let Some(decimals) = cfg.dose_decimals {
            base.dose_decimals = decimals;
        }
        if let Some(decimals) = cfg.bmi_decimals {
            base.bmi_decimals = decimals;
        }
        if let Some(seconds) = cfg.drip_window_seconds {
            base.drip_window_seconds = seconds;
        }
        base
    }
}

/// BMI as handed to JavaScript: display-rounded score and band label.
#[derive(Debug, Serialize, PartialEq)]
struct JsBmi {
    value: f64,
    category: &'static str,
}

fn bmi_for_js(weight_kg: f64, height_cm: f64) -> Option<JsBmi> {
    let result = bmi(weight_kg, height_cm).ok()?;
    Some(JsBmi {
        value: result.rounded(CalculatorConfig::default().bmi_decimals),
        category: result.category.label(),
    })
}

fn install_panic_hook() {
    #[cfg(target_arch = "wasm32")]
    console_error_panic_hook::set_once();
}

/// Pump rate in ml/h (ml for the generic conversion), or `undefined`.
#[wasm_bindgen(js_name = computeDoseRate)]
pub fn compute_dose_rate(
    drug: &str,
    ordered_dose: f64,
    stock_amount: f64,
    diluent_volume: f64,
    patient_weight: Option<f64>,
) -> Option<f64> {
    install_panic_hook();
    dose(
        Drug::from_id(drug),
        ordered_dose,
        stock_amount,
        diluent_volume,
        patient_weight,
    )
    .ok()
    .map(|rate| rate.value)
}

/// Drops per minute, or `undefined`.
#[wasm_bindgen(js_name = computeDripRate)]
pub fn compute_drip_rate(total_volume: f64, duration_hours: f64, drop_factor: u32) -> Option<f64> {
    install_panic_hook();
    compute_drip_rate_raw(total_volume, duration_hours, drop_factor)
        .ok()
        .map(|rate| rate.drops_per_minute)
}

/// `{ value, category }`, or `undefined`.
#[wasm_bindgen(js_name = computeBMI)]
pub fn compute_bmi(weight_kg: f64, height_cm: f64) -> Result<JsValue, JsValue> {
    install_panic_hook();
    match bmi_for_js(weight_kg, height_cm) {
        Some(result) => to_value(&result)
            .map_err(|err| JsValue::from_str(&format!("cannot serialize BMI: {err}"))),
        None => Ok(JsValue::UNDEFINED),
    }
}

/// Run a JSON calculation request. Missing or invalid inputs resolve to
/// `undefined`; a request that cannot be read at all throws.
#[wasm_bindgen]
pub fn calculate(request: JsValue, config: Option<JsValue>) -> Result<JsValue, JsValue> {
    install_panic_hook();

    let request_value = from_value::<serde_json::Value>(request)
        .map_err(|err| JsValue::from_str(&format!("cannot read request: {err}")))?;

    let cfg = match config {
        Some(js_cfg) => {
            let cfg: JsCalculatorConfig = from_value(js_cfg)
                .map_err(|err| JsValue::from_str(&format!("cannot read config: {err}")))?;
            CalculatorConfig::from(cfg)
        }
        None => CalculatorConfig::default(),
    };

    match nursepro_calc::calculate_value(&request_value, &cfg) {
        Ok(report) => to_value(&report)
            .map_err(|err| JsValue::from_str(&format!("cannot serialize report: {err}"))),
        Err(err @ CalcError::Parse(_)) => Err(JsValue::from_str(&format_calc_error(err))),
        Err(_) => Ok(JsValue::UNDEFINED),
    }
}

/// Reference card for a drug id, or `undefined` for generic/unknown ids.
#[wasm_bindgen(js_name = drugReference)]
pub fn drug_reference(id: &str) -> Result<JsValue, JsValue> {
    match nursepro_calc::drug_reference(id) {
        Some(reference) => to_value(&reference)
            .map_err(|err| JsValue::from_str(&format!("cannot serialize reference: {err}"))),
        None => Ok(JsValue::UNDEFINED),
    }
}

#[wasm_bindgen(js_name = listDrugs)]
pub fn list_drugs() -> Result<JsValue, JsValue> {
    to_value(&nursepro_calc::drug_references())
        .map_err(|err| JsValue::from_str(&format!("cannot serialize drug list: {err}")))
}

fn format_calc_error(err: CalcError) -> String {
    format!("Calculator error: {err}")
}
