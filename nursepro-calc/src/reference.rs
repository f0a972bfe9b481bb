use nursepro_core::{Drug, Formula, StockDefaults};
use serde::Serialize;

/// Serializable view of a drug's reference card and form conventions.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DrugReference {
    pub id: &'static str,
    pub name: &'static str,
    pub formula: Formula,
    pub dose_unit: &'static str,
    pub stock_unit: &'static str,
    pub requires_weight: bool,
    pub market_names: Vec<&'static str>,
    pub preparation: Option<&'static str>,
    pub clinical_note: Option<&'static str>,
    pub defaults: Option<StockDefaults>,
}

impl From<Drug> for DrugReference {
    fn from(drug: Drug) -> Self {
        let profile = drug.profile();
        Self {
            id: drug.id(),
            name: drug.display_name(),
            formula: drug.formula(),
            dose_unit: drug.dose_unit(),
            stock_unit: drug.stock_unit(),
            requires_weight: drug.requires_weight(),
            market_names: profile
                .map(|p| p.market_names.to_vec())
                .unwrap_or_default(),
            preparation: profile.map(|p| p.preparation),
            clinical_note: profile.map(|p| p.clinical_note),
            defaults: profile.map(|p| p.defaults),
        }
    }
}

/// Look up the reference card for a drug identifier.
///
/// Returns `None` for the generic conversion and for unknown identifiers,
/// which both use the generic formula and carry no reference card.
pub fn drug_reference(id: &str) -> Option<DrugReference> {
    let drug = Drug::from_id(id);
    drug.profile().map(|_| DrugReference::from(drug))
}

/// All selectable drugs, generic first.
pub fn drug_references() -> Vec<DrugReference> {
    Drug::ALL.into_iter().map(DrugReference::from).collect()
}
