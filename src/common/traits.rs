//! Common traits defining interfaces to external steering libraries

use crate::common::types::{Control, State};

/// Interface to one steering-function implementation.
///
/// Implementations are long-lived, constructed once and reused sequentially
/// over the full workload; the harness never mutates or clones them. An
/// implementation signals internal failure by panicking - the harness does
/// not catch collaborator failures at any level, they terminate the run.
pub trait SteeringFunction {
    /// Compute the control sequence connecting `start` to `goal`
    fn get_controls(&self, start: &State, goal: &State) -> Vec<Control>;

    /// Compute and sample the connecting geometric path at the
    /// implementation's configured discretization step
    fn get_path(&self, start: &State, goal: &State) -> Vec<State>;

    /// Path length without full sampling [m]
    fn get_distance(&self, start: &State, goal: &State) -> f64;
}
