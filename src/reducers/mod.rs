//! Metric reducers for the Workforce Analytics Engine.
//!
//! Each reducer is an independent fold over a scoped shift slice, producing
//! one statistic family: financial, reliability, distribution, utilization,
//! or historical rollup. Reducers never filter by location (scoping is the
//! facade's job), never mutate their inputs, and degrade to documented
//! neutral defaults on sparse data instead of raising.

mod distribution;
mod financial;
mod history;
mod reliability;
mod utilization;

pub use distribution::compute_distribution;
pub use financial::compute_financial;
pub use history::{RollupOrder, compute_history};
pub use reliability::compute_reliability;
pub use utilization::compute_utilization;
