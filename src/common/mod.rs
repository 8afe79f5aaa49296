//! Common types, traits, and error definitions for steering_bench
//!
//! This module provides the foundational building blocks shared by the
//! workload sampler, the benchmark driver, and the record writer.

pub mod types;
pub mod traits;
pub mod error;

pub use types::*;
pub use traits::*;
pub use error::*;
