//! Drug catalogue used to pick the dose-rate formula and prefill the form.

use serde::{Deserialize, Serialize};

/// Drug selected on the dose calculator.
///
/// Unknown identifiers fold into [`Drug::Generic`] so that any free-form
/// selection still gets the plain dose-to-volume conversion.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(from = "String", into = "&'static str")]
pub enum Drug {
    #[default]
    Generic,
    Dobutamine,
    Norepinephrine,
    Epinephrine,
    Nicardipine,
    Nitroglycerin,
    Vasopressin,
    Furosemide,
}

/// Formula family applied by the dose calculator.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Formula {
    /// `(dose / stock) * diluent`
    Generic,
    /// mcg/kg/min titrations: `(dose * weight * 60 * diluent) / (stock * 1000)`
    WeightBased,
    /// mcg/min titrations: `(dose * 60 * diluent) / (stock * 1000)`
    TimeBased,
    /// Unit/h or mg/h: `dose / (stock / diluent)`
    Ratio,
}

/// Unit of the volume produced by the dose calculator.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum RateUnit {
    Milliliters,
    MillilitersPerHour,
}

impl RateUnit {
    pub fn symbol(self) -> &'static str {
        match self {
            RateUnit::Milliliters => "ml",
            RateUnit::MillilitersPerHour => "ml/h",
        }
    }
}

impl Formula {
    pub fn rate_unit(self) -> RateUnit {
        match self {
            Formula::Generic => RateUnit::Milliliters,
            _ => RateUnit::MillilitersPerHour,
        }
    }
}

/// Standard syringe-pump preparation suggested when a drug is selected.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct StockDefaults {
    pub stock_amount: f64,
    pub diluent_volume: f64,
}

/// Static reference card shown next to a dose calculation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrugProfile {
    pub name: &'static str,
    pub market_names: &'static [&'static str],
    pub preparation: &'static str,
    pub clinical_note: &'static str,
    pub defaults: StockDefaults,
}

const SYRINGE_ML: f64 = 50.0;

static DOBUTAMINE: DrugProfile = DrugProfile {
    name: "Dobutamine",
    market_names: &["Inotrop", "Dobat", "Dobutamine Hameln"],
    preparation: "Vial: 250mg / 5ml atau 250mg / 20ml",
    clinical_note: "Inotropik positif untuk meningkatkan kontraktilitas jantung pada syok kardiogenik.",
    defaults: StockDefaults {
        stock_amount: 250.0,
        diluent_volume: SYRINGE_ML,
    },
};

static NOREPINEPHRINE: DrugProfile = DrugProfile {
    name: "Norepinephrine",
    market_names: &["Levophed", "Vascon", "Raivas"],
    preparation: "Ampul: 4mg / 4ml (1mg/ml)",
    clinical_note: "Vasopresor poten untuk hipotensi berat atau syok septik.",
    defaults: StockDefaults {
        stock_amount: 4.0,
        diluent_volume: SYRINGE_ML,
    },
};

static EPINEPHRINE: DrugProfile = DrugProfile {
    name: "Epinephrine",
    market_names: &["Adrenalin", "Epinephrine Hameln"],
    preparation: "Ampul: 1mg / 1ml",
    clinical_note: "Katekolamin endogen untuk henti jantung atau anafilaksis berat.",
    defaults: StockDefaults {
        stock_amount: 1.0,
        diluent_volume: SYRINGE_ML,
    },
};

static NICARDIPINE: DrugProfile = DrugProfile {
    name: "Nicardipine",
    market_names: &["Nicardipine", "Perdipine", "Tensin"],
    preparation: "Ampul: 10mg / 10ml",
    clinical_note: "Antagonis kalsium untuk krisis hipertensi.",
    defaults: StockDefaults {
        stock_amount: 10.0,
        diluent_volume: SYRINGE_ML,
    },
};

static NITROGLYCERIN: DrugProfile = DrugProfile {
    name: "Nitroglycerin",
    market_names: &["NTG", "Nitro-Bid", "Glyceryl Trinitrate"],
    preparation: "Ampul: 10mg / 10ml atau 50mg / 10ml",
    clinical_note: "Vasodilator vena untuk nyeri dada angina atau edema paru.",
    defaults: StockDefaults {
        stock_amount: 10.0,
        diluent_volume: SYRINGE_ML,
    },
};

static VASOPRESSIN: DrugProfile = DrugProfile {
    name: "Vasopressin",
    market_names: &["Vasopressin", "Farpresin", "Pitressin"],
    preparation: "Ampul: 20 Units / 1ml",
    clinical_note: "Hormon antidiuretik sintetis untuk vasokonstriksi pada syok refrakter.",
    defaults: StockDefaults {
        stock_amount: 20.0,
        diluent_volume: SYRINGE_ML,
    },
};

static FUROSEMIDE: DrugProfile = DrugProfile {
    name: "Furosemide",
    market_names: &["Lasix", "Uresix", "Farsix"],
    preparation: "Ampul: 20mg / 2ml",
    clinical_note: "Diuretik kuat untuk edema paru akut atau gagal jantung kongestif.",
    defaults: StockDefaults {
        stock_amount: 100.0,
        diluent_volume: SYRINGE_ML,
    },
};

impl Drug {
    /// Every selectable drug, in the order the form lists them.
    pub const ALL: [Drug; 8] = [
        Drug::Generic,
        Drug::Dobutamine,
        Drug::Norepinephrine,
        Drug::Epinephrine,
        Drug::Nicardipine,
        Drug::Nitroglycerin,
        Drug::Vasopressin,
        Drug::Furosemide,
    ];

    /// Resolve a drug identifier. Legacy ids from the first release of the
    /// app (`dobutamin`, `norephineprine`, ...) are still accepted.
    pub fn from_id(id: &str) -> Drug {
        match id.trim().to_ascii_lowercase().as_str() {
            "dobutamine" | "dobutamin" => Drug::Dobutamine,
            "norepinephrine" | "norephineprine" | "noradrenaline" => Drug::Norepinephrine,
            "epinephrine" | "epineprine" | "adrenaline" => Drug::Epinephrine,
            "nicardipine" | "perdipin" => Drug::Nicardipine,
            "nitroglycerin" | "nitrogliserin" => Drug::Nitroglycerin,
            "vasopressin" | "farpresin" => Drug::Vasopressin,
            "furosemide" | "furosemid" => Drug::Furosemide,
            _ => Drug::Generic,
        }
    }

    pub fn id(self) -> &'static str {
        match self {
            Drug::Generic => "generic",
            Drug::Dobutamine => "dobutamine",
            Drug::Norepinephrine => "norepinephrine",
            Drug::Epinephrine => "epinephrine",
            Drug::Nicardipine => "nicardipine",
            Drug::Nitroglycerin => "nitroglycerin",
            Drug::Vasopressin => "vasopressin",
            Drug::Furosemide => "furosemide",
        }
    }

    pub fn formula(self) -> Formula {
        match self {
            Drug::Generic => Formula::Generic,
            Drug::Dobutamine | Drug::Norepinephrine | Drug::Epinephrine | Drug::Nicardipine => {
                Formula::WeightBased
            }
            Drug::Nitroglycerin => Formula::TimeBased,
            Drug::Vasopressin | Drug::Furosemide => Formula::Ratio,
        }
    }

    /// Reference card for the drug; `None` for the generic conversion.
    pub fn profile(self) -> Option<&'static DrugProfile> {
        match self {
            Drug::Generic => None,
            Drug::Dobutamine => Some(&DOBUTAMINE),
            Drug::Norepinephrine => Some(&NOREPINEPHRINE),
            Drug::Epinephrine => Some(&EPINEPHRINE),
            Drug::Nicardipine => Some(&NICARDIPINE),
            Drug::Nitroglycerin => Some(&NITROGLYCERIN),
            Drug::Vasopressin => Some(&VASOPRESSIN),
            Drug::Furosemide => Some(&FUROSEMIDE),
        }
    }

    pub fn defaults(self) -> Option<StockDefaults> {
        self.profile().map(|profile| profile.defaults)
    }

    pub fn requires_weight(self) -> bool {
        self.formula() == Formula::WeightBased
    }

    /// Unit the prescriber orders the dose in.
    pub fn dose_unit(self) -> &'static str {
        match self {
            Drug::Generic => "mg",
            Drug::Nitroglycerin => "mcg/min",
            Drug::Vasopressin => "Unit/h",
            Drug::Furosemide => "mg/h",
            _ => "mcg/kg/min",
        }
    }

    /// Unit of the active drug content in one vial or ampoule.
    pub fn stock_unit(self) -> &'static str {
        match self {
            Drug::Vasopressin => "Unit",
            _ => "mg",
        }
    }

    pub fn display_name(self) -> &'static str {
        self.profile()
            .map(|profile| profile.name)
            .unwrap_or("Dosis Standar")
    }
}

impl From<String> for Drug {
    fn from(id: String) -> Self {
        Drug::from_id(&id)
    }
}

impl From<Drug> for &'static str {
    fn from(drug: Drug) -> Self {
        drug.id()
    }
}

impl std::fmt::Display for Drug {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}
