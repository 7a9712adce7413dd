//! Programmatic construction of analysis inputs and catalogs
//!
//! # Builder DSL
//!
//! ```ignore
//! use rigcheck_core::config::{AnalysisBuilder, CatalogBuilder, GameBuilder};
//! use rigcheck_core::model::{BudgetBucket, GameCategory, Resolution, TypicalBound};
//!
//! let catalog = CatalogBuilder::new()
//!     .cpu("slow-cpu", 55.0, 150.0)
//!     .cpu("fast-cpu", 90.0, 400.0)
//!     .gpu("big-gpu", 95.0, 1200.0)
//!     .game_with(GameBuilder::new("arena", GameCategory::Esports).bound(TypicalBound::CpuHeavy))
//!     .build()?;
//!
//! let input = AnalysisBuilder::new()
//!     .cpu("slow-cpu")
//!     .gpu("big-gpu")
//!     .resolution(Resolution::Fhd)
//!     .refresh(240)
//!     .game("arena")
//!     .budget(BudgetBucket::UpTo700)
//!     .build();
//!
//! let result = rigcheck_core::analyze(&catalog, &input)?;
//! ```

mod analysis_builder;
mod catalog_builder;

pub use analysis_builder::AnalysisBuilder;
pub use catalog_builder::{CatalogBuilder, GameBuilder};
