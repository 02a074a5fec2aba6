//! HTTP API for the analysis core.
//!
//! A composable axum router with JSON endpoints mirroring the pipeline
//! operations: full analysis, raw entity extraction, interaction
//! check, dosage recommendation and alternative suggestions.

pub mod endpoints;
pub mod error;
pub mod router;
pub mod server;
pub mod types;

pub use router::api_router;
pub use server::serve;
