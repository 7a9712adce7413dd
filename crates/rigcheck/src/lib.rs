//! Command-line front end for the rigcheck analyzer
//!
//! File loading, validation, logging setup and output rendering. The analysis
//! itself lives in `rigcheck_core`.

#![warn(clippy::all)]

pub mod catalog_file;
pub mod error;
pub mod input;
pub mod logging;
pub mod render;

pub use catalog_file::{load_catalog, resolve_catalog};
pub use error::LoadError;
pub use input::{InputFile, load_input};
pub use logging::init_logging;
pub use render::{ListKind, OutputFormat, render_list, render_result};
