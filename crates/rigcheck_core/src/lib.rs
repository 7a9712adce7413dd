//! PC bottleneck analysis and upgrade advisor
//!
//! This crate estimates per-game frame rates for a CPU/GPU pairing, decides
//! which component limits the build, and searches a static component catalog
//! for budget-constrained upgrades. It supports:
//! - Tiered fps estimation (curated samples, anchor interpolation, formula model)
//! - Per-game and system-level bottleneck classification with confidence
//! - Display-target detection for refresh rates no purchasable GPU can feed
//! - Ranked CPU, GPU, RAM, storage and monitor picks with justification bullets
//! - An ordered upgrade path, a single best-value pick and warnings
//!
//! Every analysis is a pure function of (catalog, input).
//!
//! # Builder DSL
//!
//! ```ignore
//! use rigcheck_core::config::AnalysisBuilder;
//! use rigcheck_core::model::{BudgetBucket, Resolution};
//!
//! let input = AnalysisBuilder::new()
//!     .cpu("i5-12400")
//!     .gpu("rtx3060")
//!     .resolution(Resolution::Qhd)
//!     .refresh(165)
//!     .games(["cyberpunk", "valorant"])
//!     .budget(BudgetBucket::UpTo700)
//!     .build();
//!
//! let result = rigcheck_core::analyze_builtin(&input)?;
//! println!("{:?}", result.verdict.bound_type);
//! ```

#![warn(clippy::all)]

// ============================================================================
// Core modules
// ============================================================================

pub mod aggregate;
pub mod analyze;
pub mod candidates;
pub mod catalog;
pub mod error;
pub mod fps;
pub mod index;
pub mod metrics;
pub mod recommend;
pub mod verdict;

// ============================================================================
// Type definition modules
// ============================================================================

pub mod config;
pub mod model;

// ============================================================================
// Test modules
// ============================================================================

#[cfg(test)]
mod tests;

// ============================================================================
// Public re-exports for convenience
// ============================================================================

pub use analyze::{analyze, analyze_builtin};
pub use catalog::{Catalog, CatalogData};
pub use config::{AnalysisBuilder, CatalogBuilder, GameBuilder};
pub use error::{AnalysisError, CatalogError, Result};
pub use fps::FpsEstimate;
