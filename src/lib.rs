//! Australian road fatality insights
//!
//! Loads the ARDD fatalities CSV once and precomputes a fixed catalog of
//! crash-count summaries for the console menu in `main.rs`.

pub mod config;
pub mod error;
pub mod insights;
pub mod loader;
pub mod output;
pub mod types;
pub mod util;

pub use error::{Error, Result};
pub use insights::{build_catalog, Catalog, Insight, Selection};
