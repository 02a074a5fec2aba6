//! rxlens — prescription text analysis.
//!
//! A small pipeline that turns free-form prescription text into a
//! structured report: detected drugs, dosages and conditions, an
//! interaction check against a static drug table, a suggested dosing
//! schedule and per-drug advisories. An optional NER endpoint boosts
//! extraction recall; without one, regex fallbacks carry the pipeline.

pub mod api;
pub mod config;
pub mod core_state;
pub mod knowledge;
pub mod pipeline;
