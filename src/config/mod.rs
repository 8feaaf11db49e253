//! Configuration for the Workforce Analytics Engine.
//!
//! The engine runs out of the box with canonical defaults; deployments that
//! want a different markup factor, window width, or rollup depth supply a
//! YAML override file.

mod loader;
mod types;

pub use types::AnalyticsConfig;
