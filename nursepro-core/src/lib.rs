//! Core types shared by the calculator engine, the WASM bridge and the UI.

mod drug;

use serde::{Deserialize, Serialize};

pub use drug::{Drug, DrugProfile, Formula, RateUnit, StockDefaults};

/// Display settings for calculator results.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CalculatorConfig {
    /// Decimals shown for a pump rate or dose volume.
    pub dose_decimals: u32,
    /// Decimals shown for the BMI score.
    pub bmi_decimals: u32,
    /// Counting window (seconds) for the bedside drop count.
    pub drip_window_seconds: u32,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            dose_decimals: 2,
            bmi_decimals: 1,
            drip_window_seconds: 15,
        }
    }
}

/// Drop factor of the giving set, in drops per ml.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(try_from = "u32", into = "u32")]
pub enum DropFactor {
    /// Macro-drip, adult standard set.
    #[default]
    Macro20,
    /// Macro-drip, alternate set.
    Macro15,
    /// Micro-drip, paediatric or drug infusions.
    Micro60,
}

impl DropFactor {
    pub const ALL: [DropFactor; 3] = [DropFactor::Macro20, DropFactor::Macro15, DropFactor::Micro60];

    pub fn drops_per_ml(self) -> u32 {
        match self {
            DropFactor::Macro20 => 20,
            DropFactor::Macro15 => 15,
            DropFactor::Micro60 => 60,
        }
    }
}

impl TryFrom<u32> for DropFactor {
    type Error = CalcError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            20 => Ok(DropFactor::Macro20),
            15 => Ok(DropFactor::Macro15),
            60 => Ok(DropFactor::Micro60),
            other => Err(CalcError::UnsupportedDropFactor(other)),
        }
    }
}

impl From<DropFactor> for u32 {
    fn from(factor: DropFactor) -> Self {
        factor.drops_per_ml()
    }
}

/// WHO Asia-Pacific nutritional status band.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

impl BmiCategory {
    pub const ALL: [BmiCategory; 4] = [
        BmiCategory::Underweight,
        BmiCategory::Normal,
        BmiCategory::Overweight,
        BmiCategory::Obese,
    ];

    /// Bands are closed on their lower edge: 18.5 is Normal, 25.0 is
    /// Overweight, 30.0 is Obese.
    pub fn classify(bmi: f64) -> Option<BmiCategory> {
        if !bmi.is_finite() {
            return None;
        }
        let category = if bmi < 18.5 {
            BmiCategory::Underweight
        } else if bmi < 25.0 {
            BmiCategory::Normal
        } else if bmi < 30.0 {
            BmiCategory::Overweight
        } else {
            BmiCategory::Obese
        };
        Some(category)
    }

    pub fn label(self) -> &'static str {
        match self {
            BmiCategory::Underweight => "Underweight",
            BmiCategory::Normal => "Normal",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::Obese => "Obese",
        }
    }

    pub fn range_label(self) -> &'static str {
        match self {
            BmiCategory::Underweight => "< 18.5",
            BmiCategory::Normal => "18.5 - 24.9",
            BmiCategory::Overweight => "25.0 - 29.9",
            BmiCategory::Obese => ">= 30.0",
        }
    }

    pub fn note(self) -> &'static str {
        match self {
            BmiCategory::Underweight => "Berat badan kurang dari normal.",
            BmiCategory::Normal => "Berat badan ideal dan sehat.",
            BmiCategory::Overweight => "Kelebihan berat badan ringan.",
            BmiCategory::Obese => "Kegemukan tingkat tinggi (risiko kesehatan).",
        }
    }
}

/// Pump rate or dose volume from the dose calculator.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct DoseRate {
    pub drug: Drug,
    pub formula: Formula,
    pub value: f64,
    pub unit: RateUnit,
}

impl DoseRate {
    pub fn rounded(&self, decimals: u32) -> f64 {
        round_to(self.value, decimals)
    }

    pub fn display(&self, config: &CalculatorConfig) -> String {
        format!(
            "{:.*} {}",
            config.dose_decimals as usize,
            self.value,
            self.unit.symbol()
        )
    }
}

/// Manual gravity drip rate.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct DripRate {
    pub drops_per_minute: f64,
    pub drop_factor: DropFactor,
}

impl DripRate {
    /// Headline figure: nearest whole drop per minute.
    pub fn headline(&self) -> f64 {
        self.drops_per_minute.round()
    }

    /// Drops expected in a bedside counting window of `seconds`.
    pub fn drops_per_window(&self, seconds: u32) -> f64 {
        self.drops_per_minute * f64::from(seconds) / 60.0
    }

    pub fn drops_per_quarter_minute(&self) -> f64 {
        self.drops_per_minute / 4.0
    }
}

/// Body-mass index with its nutritional band.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Bmi {
    pub value: f64,
    pub category: BmiCategory,
}

impl Bmi {
    pub fn rounded(&self, decimals: u32) -> f64 {
        round_to(self.value, decimals)
    }
}

/// Places beyond this carry no information in an `f64`.
const MAX_ROUNDING_DECIMALS: u32 = 15;

/// Round half away from zero to `decimals` places. Values too large to
/// scale are already integral and come back unchanged.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals.min(MAX_ROUNDING_DECIMALS) as i32);
    let scaled = value * factor;
    if !scaled.is_finite() {
        return value;
    }
    scaled.round() / factor
}

/// Reasons a calculator declines to produce a result.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CalcError {
    #[error("missing value for {0}")]
    MissingInput(&'static str),
    #[error("{field} is not a number: {raw:?}")]
    InvalidNumber { field: &'static str, raw: String },
    #[error("{field} must be a positive finite number, got {value}")]
    NonPositive { field: &'static str, value: f64 },
    #[error("unsupported drop factor {0} (expected 15, 20 or 60)")]
    UnsupportedDropFactor(u32),
    #[error("calculation produced no finite result")]
    NonFinite,
    #[error("could not read request: {0}")]
    Parse(String),
}

impl CalcError {
    /// True for the invalid-input class (as opposed to a non-finite result).
    pub fn is_invalid_input(&self) -> bool {
        !matches!(self, CalcError::NonFinite)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bmi_bands_are_closed_on_lower_edge() {
        assert_eq!(BmiCategory::classify(18.4999), Some(BmiCategory::Underweight));
        assert_eq!(BmiCategory::classify(18.5), Some(BmiCategory::Normal));
        assert_eq!(BmiCategory::classify(24.999), Some(BmiCategory::Normal));
        assert_eq!(BmiCategory::classify(25.0), Some(BmiCategory::Overweight));
        assert_eq!(BmiCategory::classify(30.0), Some(BmiCategory::Obese));
        assert_eq!(BmiCategory::classify(f64::NAN), None);
        assert_eq!(BmiCategory::classify(f64::INFINITY), None);
    }

    #[test]
    fn drop_factor_accepts_only_known_sets() {
        assert_eq!(DropFactor::try_from(15), Ok(DropFactor::Macro15));
        assert_eq!(DropFactor::try_from(60), Ok(DropFactor::Micro60));
        assert_eq!(
            DropFactor::try_from(10),
            Err(CalcError::UnsupportedDropFactor(10))
        );
        let parsed: Result<DropFactor, _> = serde_json::from_str("12");
        assert!(parsed.is_err());
    }

    #[test]
    fn round_to_matches_display_precision() {
        assert_eq!(round_to(22.857142, 1), 22.9);
        assert_eq!(round_to(4.165, 0), 4.0);
        assert_eq!(round_to(12.0, 2), 12.0);
    }

    #[test]
    fn round_to_keeps_large_values_finite() {
        assert_eq!(round_to(1e307, 2), 1e307);
        assert_eq!(round_to(f64::MAX, 1), f64::MAX);
        assert_eq!(round_to(22.857142, 400), round_to(22.857142, 15));
        assert_eq!(round_to(22.857142, u32::MAX), round_to(22.857142, 15));
    }

    #[test]
    fn drip_rate_derived_counts() {
        let rate = DripRate {
            drops_per_minute: 20.0 + 5.0 / 6.0,
            drop_factor: DropFactor::Macro20,
        };
        assert_eq!(rate.headline(), 21.0);
        assert!((rate.drops_per_quarter_minute() - rate.drops_per_window(15)).abs() < 1e-12);
    }

    #[test]
    fn drip_headline_does_not_saturate() {
        let rate = DripRate {
            drops_per_minute: 1e12,
            drop_factor: DropFactor::Micro60,
        };
        assert_eq!(rate.headline(), 1e12);
    }

    #[test]
    fn partial_config_keeps_defaults() {
        let cfg: CalculatorConfig = serde_json::from_str(r#"{"dose_decimals": 1}"#).unwrap();
        assert_eq!(cfg.dose_decimals, 1);
        assert_eq!(cfg.bmi_decimals, 1);
        assert_eq!(cfg.drip_window_seconds, 15);
    }
}
