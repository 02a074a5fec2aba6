//! Static drug knowledge: the read-only table consulted by the
//! interaction checker and advisory lookup, plus age categories.
//!
//! Loaded once at process start and never mutated afterwards.

pub mod age;
pub mod drug_table;

pub use age::AgeGroup;
pub use drug_table::{DrugRecord, DrugTable, KnowledgeError};
