//! Common types used throughout steering_bench

use std::fmt;

/// Planar robot configuration: position, heading, curvature and gear.
///
/// Workload query poses always carry `kappa == 0.0` and `d == 0`
/// (unconstrained curvature, neutral gear); steering implementations may
/// return arbitrary values in path samples.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct State {
    /// Position x [m]
    pub x: f64,
    /// Position y [m]
    pub y: f64,
    /// Heading [rad], unnormalized
    pub theta: f64,
    /// Signed curvature [1/m]
    pub kappa: f64,
    /// Driving direction: -1 backwards, 0 neutral, 1 forwards
    pub d: i8,
}

impl State {
    pub fn new(x: f64, y: f64, theta: f64, kappa: f64, d: i8) -> Self {
        Self { x, y, theta, kappa, d }
    }

    /// Euclidean distance between the positions of two states
    pub fn position_distance(&self, other: &State) -> f64 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }
}

impl fmt::Display for State {
    /// Record format: the five fields space-separated
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} {} {}", self.x, self.y, self.theta, self.kappa, self.d)
    }
}

/// An ordered (start, goal) pose pair used as a benchmark input
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QueryPair {
    pub start: State,
    pub goal: State,
}

impl QueryPair {
    pub fn new(start: State, goal: State) -> Self {
        Self { start, goal }
    }
}

/// One element of a steering maneuver
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Control {
    /// Signed arc length [m]; negative for backwards motion
    pub delta_s: f64,
    /// Curvature at the begin of the segment [1/m]
    pub kappa: f64,
    /// Curvature rate along the segment [1/m^2]
    pub sigma: f64,
}

impl Control {
    pub fn new(delta_s: f64, kappa: f64, sigma: f64) -> Self {
        Self { delta_s, kappa, sigma }
    }
}

/// Measured outcome of one implementation on one query pair
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampleRecord {
    /// The query pair that was driven
    pub pair: QueryPair,
    /// Elapsed time of the single timed call [s]
    pub computation_time: f64,
    /// Path length [m]; `None` for path-construction runs, where only the
    /// cost of the call is measured
    pub path_length: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_display() {
        let state = State::new(1.5, -2.0, 0.25, 0.0, 0);
        assert_eq!(format!("{}", state), "1.5 -2 0.25 0 0");
    }

    #[test]
    fn test_position_distance() {
        let a = State::new(0.0, 0.0, 0.0, 0.0, 0);
        let b = State::new(3.0, 4.0, 1.0, 0.0, 0);
        assert!((a.position_distance(&b) - 5.0).abs() < 1e-12);
    }
}
