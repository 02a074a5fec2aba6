//! Lexical extractors: drugs, diseases and dosage expressions.
//!
//! Each extractor unions two sources — model entities and a regex (or
//! fixed-vocabulary) fallback applied to the raw text. The model may
//! miss domain-specific names; the fallback is a cheap recall booster.
//! False positives are accepted, precision filtering is not attempted.
//!
//! Outputs are de-duplicated case-insensitively, keeping the surface
//! form that was seen first.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;

use super::entities::{Entity, EntityLabel};

/// Generic-drug naming suffixes ("-ine", "-ol", "-cin", "-vir",
/// "-mycin", "-azole") on a capitalized word.
static DRUG_SUFFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b[A-Z][a-zA-Z]{2,}(?:ine|ol|cin|vir|mycin|azole)\b")
        .expect("Invalid drug suffix pattern")
});

/// Number followed by a unit token, e.g. "500 mg", "2 tablets".
static DOSAGE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b\d+\s?(?:mg|ml|g|mcg|tablets?|capsules?|units?)\b")
        .expect("Invalid dosage pattern")
});

/// Small fixed condition vocabulary, matched case-insensitively.
static DISEASE_VOCAB: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:fever|diabetes|hypertension|asthma|cough|infection)\b")
        .expect("Invalid disease vocabulary pattern")
});

/// Known drug names, matched case-insensitively as whole words.
/// Sorted lowercase; catches names the suffix heuristic cannot reach
/// (e.g. "amoxicillin", "warfarin") when no model is available.
const DRUG_LEXICON: &[&str] = &[
    "amlodipine", "amoxicillin", "atorvastatin", "azithromycin",
    "ciprofloxacin", "diclofenac", "fluconazole", "furosemide",
    "gabapentin", "ibuprofen", "insulin", "lisinopril", "losartan",
    "metformin", "metoprolol", "naproxen", "omeprazole", "paracetamol",
    "prednisone", "sertraline", "simvastatin", "tramadol", "warfarin",
];

static DRUG_LEXICON_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"(?i)\b(?:{})\b", DRUG_LEXICON.join("|")))
        .expect("Invalid drug lexicon pattern")
});

/// The four candidate sets derived from one prescription text.
/// Schedule extraction lives in its own module.
#[derive(Debug, Clone, Default)]
pub struct ExtractedTerms {
    pub drugs: BTreeSet<String>,
    pub dosages: BTreeSet<String>,
    pub diseases: BTreeSet<String>,
}

/// Run all lexical extractors over one text plus its entities.
pub fn extract(text: &str, entities: &[Entity]) -> ExtractedTerms {
    ExtractedTerms {
        drugs: extract_drugs(text, entities),
        dosages: extract_dosages(text, entities),
        diseases: extract_diseases(text, entities),
    }
}

/// Drug candidates: Drug-labeled entities ∪ suffix regex ∪ known-name
/// lexicon.
pub fn extract_drugs(text: &str, entities: &[Entity]) -> BTreeSet<String> {
    let mut found = Vec::new();
    found.extend(labeled_surfaces(entities, EntityLabel::Drug));
    found.extend(DRUG_SUFFIX.find_iter(text).map(|m| m.as_str().to_string()));
    found.extend(DRUG_LEXICON_RE.find_iter(text).map(|m| m.as_str().to_string()));
    dedup_case_insensitive(found)
}

/// Dosage candidates: Dosage-labeled entities ∪ number+unit regex.
pub fn extract_dosages(text: &str, entities: &[Entity]) -> BTreeSet<String> {
    let mut found = Vec::new();
    found.extend(labeled_surfaces(entities, EntityLabel::Dosage));
    found.extend(DOSAGE.find_iter(text).map(|m| m.as_str().to_string()));
    dedup_case_insensitive(found)
}

/// Disease candidates: Disease-labeled entities ∪ fixed vocabulary.
pub fn extract_diseases(text: &str, entities: &[Entity]) -> BTreeSet<String> {
    let mut found = Vec::new();
    found.extend(labeled_surfaces(entities, EntityLabel::Disease));
    found.extend(DISEASE_VOCAB.find_iter(text).map(|m| m.as_str().to_string()));
    dedup_case_insensitive(found)
}

fn labeled_surfaces(entities: &[Entity], label: EntityLabel) -> Vec<String> {
    entities
        .iter()
        .filter(|e| e.label == label)
        .map(|e| e.surface.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

/// De-duplicate case-insensitively, keeping the first-seen surface form.
fn dedup_case_insensitive(items: Vec<String>) -> BTreeSet<String> {
    let mut seen = BTreeSet::new();
    let mut out = BTreeSet::new();
    for item in items {
        if seen.insert(item.to_lowercase()) {
            out.insert(item);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drug(surface: &str) -> Entity {
        Entity { surface: surface.into(), label: EntityLabel::Drug }
    }

    #[test]
    fn empty_text_yields_empty_sets() {
        let terms = extract("", &[]);
        assert!(terms.drugs.is_empty());
        assert!(terms.dosages.is_empty());
        assert!(terms.diseases.is_empty());
    }

    #[test]
    fn suffix_regex_catches_unmodeled_names() {
        let drugs = extract_drugs("Prescribed Cetirizine and Tramadol today", &[]);
        assert!(drugs.contains("Cetirizine"));
        assert!(drugs.contains("Tramadol"));
    }

    #[test]
    fn lexicon_catches_names_the_suffix_misses() {
        // "Amoxicillin" matches no generic suffix; the lexicon finds it.
        let drugs = extract_drugs("Take Amoxicillin after food", &[]);
        assert!(drugs.contains("Amoxicillin"));
    }

    #[test]
    fn entity_and_regex_sources_merge_without_duplicates() {
        let entities = [drug("amoxicillin")];
        let drugs = extract_drugs("Take Amoxicillin 500 mg", &entities);
        // One entry for the two casings; first-seen surface wins.
        assert_eq!(drugs.len(), 1);
        assert!(drugs.contains("amoxicillin"));
    }

    #[test]
    fn dosage_units_matched_case_insensitively() {
        let dosages = extract_dosages("500 MG then 5ml, also 2 tablets", &[]);
        assert!(dosages.contains("500 MG"));
        assert!(dosages.contains("5ml"));
        assert!(dosages.contains("2 tablets"));
    }

    #[test]
    fn dosage_entities_included() {
        let entities = [Entity { surface: "500 mg".into(), label: EntityLabel::Dosage }];
        let dosages = extract_dosages("irrelevant", &entities);
        assert!(dosages.contains("500 mg"));
    }

    #[test]
    fn disease_vocabulary_matches() {
        let diseases = extract_diseases("History of Diabetes and recent fever", &[]);
        assert_eq!(diseases.len(), 2);
        assert!(diseases.contains("Diabetes"));
        assert!(diseases.contains("fever"));
    }

    #[test]
    fn other_labels_are_ignored() {
        let entities = [Entity { surface: "Dr. Smith".into(), label: EntityLabel::Other }];
        let terms = extract("no cues here", &entities);
        assert!(terms.drugs.is_empty());
        assert!(terms.diseases.is_empty());
    }

    #[test]
    fn drug_lexicon_sorted() {
        for window in DRUG_LEXICON.windows(2) {
            assert!(window[0] < window[1], "DRUG_LEXICON not sorted: {:?}", window);
        }
    }
}
