//! The analysis orchestrator: one call from raw text to a full report.
//!
//! Fail-soft by construction. The entity provider is the only fallible
//! collaborator and its failures degrade to zero entities; lookup
//! misses become sentinels downstream. The single hard error is empty
//! input, rejected before the pipeline runs.

use std::sync::Arc;

use serde::Deserialize;

use crate::knowledge::{AgeGroup, DrugTable};

use super::advisory;
use super::entities::{Entity, EntityProvider};
use super::extract;
use super::interactions::{self, InteractionPolicy};
use super::report::{AdvisoryEntry, AnalysisReport};
use super::schedule;

/// One analysis request.
#[derive(Debug, Clone, Deserialize)]
pub struct AnalysisInput {
    pub text: String,
    pub age_group: AgeGroup,
}

#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    #[error("Prescription text is empty")]
    EmptyInput,
}

/// Runs the prescription-analysis pipeline against a read-only drug
/// table and an entity provider. Stateless across requests.
pub struct PrescriptionAnalyzer {
    table: Arc<DrugTable>,
    provider: Arc<dyn EntityProvider>,
    policy: InteractionPolicy,
}

impl PrescriptionAnalyzer {
    pub fn new(table: Arc<DrugTable>, provider: Arc<dyn EntityProvider>) -> Self {
        Self {
            table,
            provider,
            policy: InteractionPolicy::default(),
        }
    }

    /// Override the interaction policy (table-driven by default).
    pub fn with_policy(mut self, policy: InteractionPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn table(&self) -> &DrugTable {
        &self.table
    }

    /// Analyze one prescription. Only empty input fails; everything
    /// else produces a best-effort report.
    pub fn analyze(&self, input: &AnalysisInput) -> Result<AnalysisReport, AnalysisError> {
        let text = input.text.trim();
        if text.is_empty() {
            return Err(AnalysisError::EmptyInput);
        }

        let entities = self.infer_entities(text);
        let terms = extract::extract(text, &entities);
        let schedule = schedule::extract_schedule(text);
        let warnings = interactions::check(&self.table, &terms.drugs, self.policy);

        let advisories = terms
            .drugs
            .iter()
            .map(|drug| AdvisoryEntry {
                drug: drug.clone(),
                advisory: advisory::advise(&self.table, drug, input.age_group),
            })
            .collect();

        Ok(AnalysisReport::assemble(terms, warnings, schedule, advisories))
    }

    /// Call the entity provider, degrading any failure to zero
    /// entities. The report is built from regex fallbacks alone in
    /// that case.
    fn infer_entities(&self, text: &str) -> Vec<Entity> {
        match self.provider.infer(text) {
            Ok(entities) => entities,
            Err(e) => {
                tracing::warn!(error = %e, "Entity provider failed, continuing without entities");
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::advisory::NO_GUIDELINE;
    use crate::pipeline::entities::{EntityLabel, NullProvider, ProviderError};
    use crate::pipeline::report::DISCLAIMER;

    /// Provider returning a fixed entity list.
    struct FixedProvider(Vec<Entity>);

    impl EntityProvider for FixedProvider {
        fn infer(&self, _text: &str) -> Result<Vec<Entity>, ProviderError> {
            Ok(self.0.clone())
        }
    }

    /// Provider that always fails, for the fail-soft path.
    struct FailingProvider;

    impl EntityProvider for FailingProvider {
        fn infer(&self, _text: &str) -> Result<Vec<Entity>, ProviderError> {
            Err(ProviderError::Connection("http://localhost:9".into()))
        }
    }

    fn analyzer_with(provider: Arc<dyn EntityProvider>) -> PrescriptionAnalyzer {
        PrescriptionAnalyzer::new(Arc::new(DrugTable::builtin()), provider)
    }

    fn input(text: &str, age_group: AgeGroup) -> AnalysisInput {
        AnalysisInput { text: text.into(), age_group }
    }

    #[test]
    fn empty_input_is_rejected_before_pipeline() {
        let analyzer = analyzer_with(Arc::new(NullProvider));
        let err = analyzer.analyze(&input("   \n\t ", AgeGroup::Adult)).unwrap_err();
        assert!(matches!(err, AnalysisError::EmptyInput));
    }

    #[test]
    fn end_to_end_amoxicillin_prescription() {
        let provider = FixedProvider(vec![Entity {
            surface: "Amoxicillin".into(),
            label: EntityLabel::Drug,
        }]);
        let analyzer = analyzer_with(Arc::new(provider));

        let report = analyzer
            .analyze(&input(
                "Take Amoxicillin 500 mg twice a day after food",
                AgeGroup::Adult,
            ))
            .unwrap();

        assert!(report.drugs.contains("Amoxicillin"));
        assert!(report.dosages.contains("500 mg"));
        let expected: std::collections::BTreeSet<String> =
            ["Morning", "Evening", "After meals"].iter().map(|s| s.to_string()).collect();
        assert_eq!(report.schedule, expected);

        let advisory = report
            .advisories
            .iter()
            .find(|a| a.drug == "Amoxicillin")
            .expect("advisory block for Amoxicillin");
        assert_ne!(advisory.advisory.age_advice, NO_GUIDELINE);
        assert!(!advisory.advisory.side_effects.is_empty());

        assert!(report.render_markdown().ends_with(DISCLAIMER));
    }

    #[test]
    fn provider_failure_degrades_to_regex_only() {
        let analyzer = analyzer_with(Arc::new(FailingProvider));
        let report = analyzer
            .analyze(&input(
                "Take Paracetamol and Ibuprofen 200 mg at night",
                AgeGroup::Elderly,
            ))
            .unwrap();

        // Regex fallbacks still find both drugs (lexicon + suffix)
        assert!(report.drugs.contains("Paracetamol"));
        assert!(report.drugs.contains("Ibuprofen"));
        assert!(report
            .interactions
            .contains(&"paracetamol interacts with ibuprofen".to_string()));
        assert!(report.schedule.contains("Night"));
    }

    #[test]
    fn text_without_cues_yields_empty_report() {
        let analyzer = analyzer_with(Arc::new(NullProvider));
        let report = analyzer
            .analyze(&input("please come back next week", AgeGroup::Child))
            .unwrap();

        assert!(report.drugs.is_empty());
        assert!(report.dosages.is_empty());
        assert!(report.diseases.is_empty());
        assert!(report.advisories.is_empty());
        assert_eq!(report.schedule.len(), 1);
        assert!(report.schedule.contains("Not specified"));
        assert_eq!(
            report.interactions,
            vec![interactions::NO_HARMFUL_INTERACTIONS.to_string()]
        );
    }

    #[test]
    fn cardinality_policy_is_selectable() {
        let analyzer = analyzer_with(Arc::new(NullProvider))
            .with_policy(InteractionPolicy::CardinalityHeuristic);
        let report = analyzer
            .analyze(&input("Cetirizine and Tramadol", AgeGroup::Adult))
            .unwrap();
        assert_eq!(report.interactions.len(), 1);
        assert!(report.interactions[0].starts_with("Potential interaction between"));
    }

    #[test]
    fn unknown_drugs_get_sentinel_advisories() {
        let provider = FixedProvider(vec![Entity {
            surface: "Unobtainium".into(),
            label: EntityLabel::Drug,
        }]);
        let analyzer = analyzer_with(Arc::new(provider));
        let report = analyzer.analyze(&input("one dose", AgeGroup::Adult)).unwrap();

        let advisory = &report.advisories[0];
        assert_eq!(advisory.drug, "Unobtainium");
        assert_eq!(advisory.advisory.age_advice, NO_GUIDELINE);
    }
}
