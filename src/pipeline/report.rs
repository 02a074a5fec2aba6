//! Report assembly and rendering.
//!
//! Pure aggregation of the extractor, checker and advisory outputs into
//! one structure, plus a markdown rendering. Every rendered report ends
//! with the fixed disclaimer. That line is not optional.

use std::collections::BTreeSet;

use serde::Serialize;

use super::advisory::DrugAdvisory;

/// Fixed trailing disclaimer, appended to every rendered report.
pub const DISCLAIMER: &str =
    "Disclaimer: This analysis is AI-generated and not a substitute for professional medical advice.";

/// Advisory block for one detected drug.
#[derive(Debug, Clone, Serialize)]
pub struct AdvisoryEntry {
    pub drug: String,
    #[serde(flatten)]
    pub advisory: DrugAdvisory,
}

/// The structured result of one prescription analysis.
/// Created fresh per request; no lifecycle beyond the response.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub drugs: BTreeSet<String>,
    pub dosages: BTreeSet<String>,
    pub diseases: BTreeSet<String>,
    pub interactions: Vec<String>,
    pub schedule: BTreeSet<String>,
    pub advisories: Vec<AdvisoryEntry>,
}

impl AnalysisReport {
    /// Compose the component outputs into one report. Pure aggregation,
    /// no further logic.
    pub fn assemble(
        terms: crate::pipeline::extract::ExtractedTerms,
        interactions: Vec<String>,
        schedule: BTreeSet<String>,
        advisories: Vec<AdvisoryEntry>,
    ) -> Self {
        Self {
            drugs: terms.drugs,
            dosages: terms.dosages,
            diseases: terms.diseases,
            interactions,
            schedule,
            advisories,
        }
    }

    /// Render the report as a section-by-section markdown document.
    pub fn render_markdown(&self) -> String {
        let mut out = String::from("## Prescription Analysis Report\n\n");

        push_list_line(&mut out, "Detected Drugs", self.drugs.iter());
        push_list_line(&mut out, "Detected Dosages", self.dosages.iter());
        push_list_line(&mut out, "Detected Diseases/Conditions", self.diseases.iter());
        push_list_line(&mut out, "Drug Interaction Check", self.interactions.iter());
        push_list_line(&mut out, "Suggested Schedule", self.schedule.iter());

        if !self.advisories.is_empty() {
            out.push_str("### Age Suitability\n");
            for entry in &self.advisories {
                out.push_str(&format!("- {}: {}\n", entry.drug, entry.advisory.age_advice));
            }
            out.push('\n');

            out.push_str("### Possible Side Effects\n");
            for entry in &self.advisories {
                out.push_str(&format!(
                    "- {}: {}\n",
                    entry.drug,
                    entry.advisory.side_effects.join(", ")
                ));
            }
            out.push('\n');
        }

        out.push_str(DISCLAIMER);
        out
    }
}

fn push_list_line<'a>(out: &mut String, title: &str, items: impl Iterator<Item = &'a String>) {
    let joined: Vec<&str> = items.map(|s| s.as_str()).collect();
    let rendered = if joined.is_empty() {
        "None found".to_string()
    } else {
        joined.join(", ")
    };
    out.push_str(&format!("**{title}:** {rendered}\n\n"));
}
