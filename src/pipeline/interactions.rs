//! Drug-interaction checking.
//!
//! Two policies. Table-driven is canonical: it consults the declared
//! interaction partners in the drug table. The cardinality heuristic is
//! a degraded fallback for callers holding only freshly extracted names
//! with no structured data behind them.

use std::collections::BTreeSet;

use crate::knowledge::DrugTable;

/// Sentinel when the table-driven check flags nothing.
pub const NO_HARMFUL_INTERACTIONS: &str = "No harmful interactions detected";

/// Sentinel when the cardinality heuristic flags nothing.
pub const NO_INTERACTIONS: &str = "No interactions detected";

/// Which checking strategy to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InteractionPolicy {
    /// Flag pairs whose records declare each other as partners.
    #[default]
    TableDriven,
    /// No structured data: warn whenever two or more drugs co-occur.
    CardinalityHeuristic,
}

/// Check a de-duplicated drug set under the given policy.
/// Always returns at least one line (a warning or a sentinel).
pub fn check(table: &DrugTable, drugs: &BTreeSet<String>, policy: InteractionPolicy) -> Vec<String> {
    match policy {
        InteractionPolicy::TableDriven => check_table_driven(table, drugs),
        InteractionPolicy::CardinalityHeuristic => check_cardinality(drugs),
    }
}

/// For every input drug present in the table, flag each declared
/// partner that is also in the input set. Pairs are emitted per
/// direction: when both records declare each other, both lines appear.
fn check_table_driven(table: &DrugTable, drugs: &BTreeSet<String>) -> Vec<String> {
    let normalized: BTreeSet<String> = drugs.iter().map(|d| d.trim().to_lowercase()).collect();

    let mut flagged = Vec::new();
    for name in &normalized {
        let Some(record) = table.lookup(name) else {
            continue;
        };
        for partner in &record.interactions {
            if normalized.contains(partner) {
                flagged.push(format!("{name} interacts with {partner}"));
            }
        }
    }

    if flagged.is_empty() {
        flagged.push(NO_HARMFUL_INTERACTIONS.to_string());
    }
    flagged
}

/// Degraded fallback: two or more distinct names produce one warning
/// naming the first two found.
fn check_cardinality(drugs: &BTreeSet<String>) -> Vec<String> {
    let mut iter = drugs.iter();
    match (iter.next(), iter.next()) {
        (Some(first), Some(second)) => {
            vec![format!("Potential interaction between {first} and {second}")]
        }
        _ => vec![NO_INTERACTIONS.to_string()],
    }
}
