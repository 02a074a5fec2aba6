//! The static drug knowledge table.
//!
//! Immutable after load. Keys are canonical lowercase drug names and
//! lookups are case-insensitive. A built-in table covers the common
//! demo drugs; a JSON file with the same shape can replace it at
//! startup via `RXLENS_DRUG_TABLE`.

use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::age::AgeGroup;

#[derive(Debug, thiserror::Error)]
pub enum KnowledgeError {
    #[error("Cannot read drug table {0}: {1}")]
    TableLoad(String, String),
    #[error("Cannot parse drug table {0}: {1}")]
    TableParse(String, String),
    #[error("Duplicate drug entry: {0}")]
    DuplicateEntry(String),
}

/// Maximum daily dose in milligrams, by dose column.
/// Elderly patients resolve to the adult column (see `AgeGroup::dose_column`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MaxDose {
    pub child_mg: u32,
    pub adult_mg: u32,
}

/// Age-suitability guidance text per category.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgeGuidance {
    pub child: String,
    pub adult: String,
    pub elderly: String,
}

/// One drug's knowledge entry. `name` is the canonical lowercase key.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DrugRecord {
    pub name: String,
    pub max_dose_mg: MaxDose,
    #[serde(default)]
    pub alternatives: BTreeSet<String>,
    #[serde(default)]
    pub interactions: BTreeSet<String>,
    #[serde(default)]
    pub side_effects: Vec<String>,
    pub age_guidance: AgeGuidance,
}

impl DrugRecord {
    /// Maximum daily dose for the given age group.
    pub fn max_dose_for(&self, group: AgeGroup) -> u32 {
        match group.dose_column() {
            AgeGroup::Child => self.max_dose_mg.child_mg,
            _ => self.max_dose_mg.adult_mg,
        }
    }

    /// Age-suitability guidance for the given age group.
    pub fn age_advice(&self, group: AgeGroup) -> &str {
        match group {
            AgeGroup::Child => &self.age_guidance.child,
            AgeGroup::Adult => &self.age_guidance.adult,
            AgeGroup::Elderly => &self.age_guidance.elderly,
        }
    }
}

/// Read-only drug table keyed by canonical lowercase name.
#[derive(Debug, Clone)]
pub struct DrugTable {
    records: BTreeMap<String, DrugRecord>,
}

impl DrugTable {
    /// Build a table from records, lowercasing names into canonical keys.
    /// Rejects duplicate keys — the table must be unambiguous.
    pub fn from_records(records: Vec<DrugRecord>) -> Result<Self, KnowledgeError> {
        let mut map = BTreeMap::new();
        for mut record in records {
            let key = record.name.trim().to_lowercase();
            record.name = key.clone();
            if map.insert(key.clone(), record).is_some() {
                return Err(KnowledgeError::DuplicateEntry(key));
            }
        }
        Ok(Self { records: map })
    }

    /// Load a table from a JSON file (array of `DrugRecord`).
    pub fn from_json_file(path: &Path) -> Result<Self, KnowledgeError> {
        let json = std::fs::read_to_string(path).map_err(|e| {
            KnowledgeError::TableLoad(path.display().to_string(), e.to_string())
        })?;
        let records: Vec<DrugRecord> = serde_json::from_str(&json).map_err(|e| {
            KnowledgeError::TableParse(path.display().to_string(), e.to_string())
        })?;
        Self::from_records(records)
    }

    /// Case-insensitive lookup by drug name.
    pub fn lookup(&self, name: &str) -> Option<&DrugRecord> {
        self.records.get(&name.trim().to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The built-in demo table: paracetamol, ibuprofen, amoxicillin,
    /// metformin. Dose ceilings are daily maxima in mg.
    pub fn builtin() -> Self {
        let records = vec![
            DrugRecord {
                name: "paracetamol".into(),
                max_dose_mg: MaxDose { child_mg: 2000, adult_mg: 4000 },
                alternatives: set(&["acetaminophen"]),
                interactions: set(&["ibuprofen"]),
                side_effects: strings(&[
                    "Nausea",
                    "Liver damage (overdose)",
                    "Allergic reaction (rare)",
                ]),
                age_guidance: AgeGuidance {
                    child: "Safe in lower doses (10-15mg/kg). Avoid overdose.".into(),
                    adult: "Safe up to 500-1000 mg every 6-8 hours.".into(),
                    elderly: "Generally safe but monitor liver function.".into(),
                },
            },
            DrugRecord {
                name: "ibuprofen".into(),
                max_dose_mg: MaxDose { child_mg: 1200, adult_mg: 3200 },
                alternatives: set(&["naproxen"]),
                interactions: set(&["paracetamol"]),
                side_effects: strings(&[
                    "Stomach pain",
                    "Heartburn",
                    "Kidney issues",
                    "Increased blood pressure",
                ]),
                age_guidance: AgeGuidance {
                    child: "Avoid under 6 months. Use syrup form for kids.".into(),
                    adult: "Safe 200-400 mg every 6-8 hours.".into(),
                    elderly: "Use cautiously. May cause stomach/kidney issues.".into(),
                },
            },
            DrugRecord {
                name: "amoxicillin".into(),
                max_dose_mg: MaxDose { child_mg: 1000, adult_mg: 3000 },
                alternatives: set(&["azithromycin"]),
                interactions: set(&["methotrexate"]),
                side_effects: strings(&["Diarrhea", "Nausea", "Rash", "Yeast infection"]),
                age_guidance: AgeGuidance {
                    child: "Safe but dosage based on weight.".into(),
                    adult: "Safe 250-500 mg every 8 hours.".into(),
                    elderly: "Safe but monitor kidney function.".into(),
                },
            },
            DrugRecord {
                name: "metformin".into(),
                max_dose_mg: MaxDose { child_mg: 2000, adult_mg: 2550 },
                alternatives: set(&["sitagliptin"]),
                interactions: BTreeSet::new(),
                side_effects: strings(&[
                    "Stomach upset",
                    "Diarrhea",
                    "Low blood sugar",
                    "Vitamin B12 deficiency",
                ]),
                age_guidance: AgeGuidance {
                    child: "Not typically used under 10 years.".into(),
                    adult: "Safe up to 2550 mg daily in divided doses.".into(),
                    elderly: "Use cautiously and monitor kidney function.".into(),
                },
            },
        ];

        Self::from_records(records).expect("builtin table has unique keys")
    }
}

fn set(items: &[&str]) -> BTreeSet<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn lookup_is_case_insensitive() {
        let table = DrugTable::builtin();
        let lower = table.lookup("paracetamol").unwrap();
        let upper = table.lookup("PARACETAMOL").unwrap();
        let mixed = table.lookup("  Paracetamol ").unwrap();
        assert_eq!(lower.name, upper.name);
        assert_eq!(lower.name, mixed.name);
    }

    #[test]
    fn unknown_drug_is_none() {
        let table = DrugTable::builtin();
        assert!(table.lookup("unobtainium").is_none());
    }

    #[test]
    fn builtin_covers_demo_drugs() {
        let table = DrugTable::builtin();
        for name in ["paracetamol", "ibuprofen", "amoxicillin", "metformin"] {
            assert!(table.lookup(name).is_some(), "missing {name}");
        }
        assert_eq!(table.len(), 4);
    }

    #[test]
    fn dose_by_age_group() {
        let table = DrugTable::builtin();
        let rec = table.lookup("paracetamol").unwrap();
        assert_eq!(rec.max_dose_for(AgeGroup::Child), 2000);
        assert_eq!(rec.max_dose_for(AgeGroup::Adult), 4000);
        // Elderly resolves to the adult column
        assert_eq!(rec.max_dose_for(AgeGroup::Elderly), 4000);
    }

    #[test]
    fn duplicate_keys_rejected() {
        let rec = DrugTable::builtin().lookup("ibuprofen").unwrap().clone();
        let mut dup = rec.clone();
        dup.name = "Ibuprofen".into(); // same key after normalization
        let err = DrugTable::from_records(vec![rec, dup]).unwrap_err();
        assert!(matches!(err, KnowledgeError::DuplicateEntry(ref k) if k == "ibuprofen"));
    }

    #[test]
    fn loads_json_override() {
        let json = r#"[{
            "name": "Naproxen",
            "max_dose_mg": { "child_mg": 600, "adult_mg": 1100 },
            "interactions": ["ibuprofen"],
            "side_effects": ["Stomach pain"],
            "age_guidance": {
                "child": "Avoid under 12 years.",
                "adult": "Safe 220-440 mg every 8-12 hours.",
                "elderly": "Use the lowest effective dose."
            }
        }]"#;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let table = DrugTable::from_json_file(file.path()).unwrap();
        assert_eq!(table.len(), 1);
        let rec = table.lookup("NAPROXEN").unwrap();
        assert_eq!(rec.name, "naproxen");
        assert_eq!(rec.max_dose_for(AgeGroup::Child), 600);
        assert!(rec.alternatives.is_empty());
    }

    #[test]
    fn malformed_json_is_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"{ not json ").unwrap();
        let err = DrugTable::from_json_file(file.path()).unwrap_err();
        assert!(matches!(err, KnowledgeError::TableParse(_, _)));
    }
}
