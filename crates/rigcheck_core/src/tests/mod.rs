//! Integration tests for the rigcheck analysis engine
//!
//! Tests are organized by topic:
//! - `classification` - Headroom dead band on synthetic catalogs
//! - `scenarios` - End-to-end analyses against synthetic and built-in catalogs
//! - `monotonicity` - GPU gains never drop for a stronger card
//! - `budget` - No pick exceeds the budget ceiling
//! - `determinism` - Identical input gives byte-identical output
//! - `errors` - Fallbacks and unrecoverable inputs
//! - `builder_dsl` - Builder DSL for catalogs and inputs

mod budget;
mod builder_dsl;
mod classification;
mod errors;
mod monotonicity;
