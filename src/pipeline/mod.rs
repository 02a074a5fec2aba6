//! The prescription-analysis pipeline.
//!
//! Raw text → entity provider → lexical extractors → interaction check
//! + advisory lookup → assembled report. Every stage is synchronous
//! and request-scoped; the only shared state is the read-only drug
//! table.

pub mod advisory;
pub mod analyzer;
pub mod entities;
pub mod extract;
pub mod interactions;
pub mod report;
pub mod schedule;

pub use analyzer::{AnalysisError, AnalysisInput, PrescriptionAnalyzer};
pub use entities::{Entity, EntityLabel, EntityProvider, HfNerClient, NullProvider, ProviderError};
pub use interactions::InteractionPolicy;
pub use report::{AnalysisReport, DISCLAIMER};
