//! steering_bench - benchmarking harness for car-like steering functions
//!
//! This crate drives interchangeable steering-function implementations
//! (Dubins, Reeds-Shepp and their curvature-continuous variants) through an
//! identical, seeded workload of (start, goal) pose pairs, times each call,
//! and reports mean and standard deviation per implementation. The steering
//! algorithms themselves live behind the [`common::SteeringFunction`] trait;
//! this crate is the measurement instrument, not the planner.

// Core modules
pub mod common;
pub mod utils;

// Harness modules
pub mod bench;
pub mod driver;
pub mod sampler;
pub mod stats;
pub mod steering;
pub mod timing;
pub mod writer;

// Re-export common types for convenience
pub use common::{Control, QueryPair, SampleRecord, State};
pub use common::{BenchError, BenchResult, SteeringFunction};
pub use bench::{BenchConfig, ImplSummary};
pub use driver::{Operation, SteeringRegistry};
pub use sampler::{OperatingRegion, StateSampler};
pub use steering::SteeringId;
pub use timing::ClockSource;
