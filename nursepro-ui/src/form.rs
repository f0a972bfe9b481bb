//! Form state behind the calculator tabs, kept free of any rendering code.

use nursepro_calc::{compute_bmi, compute_dose_rate, compute_drip_rate, parse_field};
use nursepro_core::{Bmi, CalcError, DoseRate, DripRate, Drug, DropFactor};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalcTab {
    Dose,
    Drip,
    Bmi,
}

impl CalcTab {
    pub const ALL: [CalcTab; 3] = [CalcTab::Dose, CalcTab::Drip, CalcTab::Bmi];

    pub fn label(self) -> &'static str {
        match self {
            CalcTab::Dose => "Dosis Sediaan",
            CalcTab::Drip => "Tetes Infus",
            CalcTab::Bmi => "BMI",
        }
    }
}

/// Raw text of the dose form fields.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DoseForm {
    pub drug: Drug,
    pub ordered: String,
    pub stock: String,
    pub diluent: String,
    pub weight: String,
}

impl DoseForm {
    /// Switch drug and prefill its standard preparation. The generic
    /// conversion keeps whatever the user typed.
    pub fn select_drug(&mut self, drug: Drug) {
        self.drug = drug;
        if let Some(defaults) = drug.defaults() {
            self.stock = defaults.stock_amount.to_string();
            self.diluent = defaults.diluent_volume.to_string();
        }
    }

    pub fn calculate(&self) -> Result<DoseRate, CalcError> {
        let weight = if self.drug.requires_weight() {
            Some(parse_field("patient_weight", &self.weight)?)
        } else {
            None
        };
        compute_dose_rate(
            self.drug,
            parse_field("ordered_dose", &self.ordered)?,
            parse_field("stock_amount", &self.stock)?,
            parse_field("diluent_volume", &self.diluent)?,
            weight,
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DripForm {
    pub volume: String,
    pub hours: String,
    pub factor: DropFactor,
}

impl DripForm {
    pub fn calculate(&self) -> Result<DripRate, CalcError> {
        compute_drip_rate(
            parse_field("total_volume", &self.volume)?,
            parse_field("duration_hours", &self.hours)?,
            self.factor,
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BmiForm {
    pub weight: String,
    pub height: String,
}

impl BmiForm {
    pub fn calculate(&self) -> Result<Bmi, CalcError> {
        compute_bmi(
            parse_field("weight_kg", &self.weight)?,
            parse_field("height_cm", &self.height)?,
        )
    }
}
