//! Per-drug advisory lookup: age guidance, dose ceiling, alternatives
//! and side effects.
//!
//! Absence is never an error here. A drug missing from the table
//! produces sentinel text and an absent dose, so a report can always
//! be assembled for whatever the extractors found.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::knowledge::{AgeGroup, DrugTable};

/// Sentinel when no age guidance exists for a drug.
pub const NO_GUIDELINE: &str = "No specific age guideline available.";

/// Sentinel side-effect entry for unknown drugs.
pub const NO_SIDE_EFFECT_INFO: &str = "No side effect info available";

/// Advisory for one drug at one age group.
#[derive(Debug, Clone, Serialize)]
pub struct DrugAdvisory {
    pub age_advice: String,
    pub max_dose_mg: Option<u32>,
    pub alternatives: BTreeSet<String>,
    pub side_effects: Vec<String>,
}

impl DrugAdvisory {
    /// True when the drug was not found and every field is a sentinel.
    pub fn is_sentinel(&self) -> bool {
        self.max_dose_mg.is_none() && self.age_advice == NO_GUIDELINE
    }
}

/// Look up advisory data for a drug name (case-insensitive) at an age
/// group. Unknown drugs yield the sentinel advisory, never an error.
pub fn advise(table: &DrugTable, drug: &str, age_group: AgeGroup) -> DrugAdvisory {
    match table.lookup(drug) {
        Some(record) => DrugAdvisory {
            age_advice: record.age_advice(age_group).to_string(),
            max_dose_mg: Some(record.max_dose_for(age_group)),
            alternatives: record.alternatives.clone(),
            side_effects: record.side_effects.clone(),
        },
        None => DrugAdvisory {
            age_advice: NO_GUIDELINE.to_string(),
            max_dose_mg: None,
            alternatives: BTreeSet::new(),
            side_effects: vec![NO_SIDE_EFFECT_INFO.to_string()],
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_is_case_insensitive() {
        let table = DrugTable::builtin();
        let upper = advise(&table, "PARACETAMOL", AgeGroup::Adult);
        let lower = advise(&table, "paracetamol", AgeGroup::Adult);
        assert_eq!(upper.age_advice, lower.age_advice);
        assert_eq!(upper.max_dose_mg, lower.max_dose_mg);
    }

    #[test]
    fn known_drug_has_full_advisory() {
        let table = DrugTable::builtin();
        let advisory = advise(&table, "ibuprofen", AgeGroup::Child);
        assert!(!advisory.is_sentinel());
        assert_eq!(advisory.max_dose_mg, Some(1200));
        assert!(advisory.age_advice.contains("Avoid under 6 months"));
        assert!(advisory.alternatives.contains("naproxen"));
        assert!(!advisory.side_effects.is_empty());
    }

    #[test]
    fn age_groups_select_different_advice() {
        let table = DrugTable::builtin();
        let child = advise(&table, "paracetamol", AgeGroup::Child);
        let elderly = advise(&table, "paracetamol", AgeGroup::Elderly);
        assert_ne!(child.age_advice, elderly.age_advice);
        // Elderly dose resolves to the adult column
        assert_eq!(elderly.max_dose_mg, Some(4000));
    }

    #[test]
    fn unknown_drug_yields_sentinels_not_errors() {
        let table = DrugTable::builtin();
        let advisory = advise(&table, "Unobtainium", AgeGroup::Adult);
        assert!(advisory.is_sentinel());
        assert_eq!(advisory.age_advice, NO_GUIDELINE);
        assert_eq!(advisory.side_effects, vec![NO_SIDE_EFFECT_INFO.to_string()]);
        assert!(advisory.alternatives.is_empty());
        assert_eq!(advisory.max_dose_mg, None);
    }
}
