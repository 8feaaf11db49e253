//! Workforce Analytics Aggregation Engine.
//!
//! This crate turns raw shift, employee, and location records into derived
//! financial, operational, and reliability statistics: labor cost, revenue,
//! completion and no-show rates, time-of-day distribution, employee
//! utilization, and per-month historical rollups.
//!
//! The engine is a deterministic, side-effect-free function of its inputs:
//! the caller supplies the record arrays and a reference "now" instant, and
//! [`facade::compute_location_insights`] returns a fully populated
//! [`models::InsightsBundle`]. No clock reads, no I/O, no state between calls.

#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod facade;
pub mod index;
pub mod models;
pub mod reducers;
pub mod time;
