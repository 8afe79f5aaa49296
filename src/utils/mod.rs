//! Utility modules for steering_bench

pub mod visualization;

pub use visualization::{histogram, TimingPlot};
