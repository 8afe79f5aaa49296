//! Straight-line placeholder collaborator
//!
//! Stands in for steering libraries that are not linked into the demo
//! registry (curvature-continuous and Reeds-Shepp variants). It connects the
//! two positions with a single straight segment and ignores headings, so its
//! timings measure only the harness overhead floor.

use crate::common::{Control, State, SteeringFunction};

pub struct LineSteering {
    /// Path sampling step [m]
    discretization: f64,
}

impl LineSteering {
    pub fn new(discretization: f64) -> Self {
        Self { discretization }
    }
}

impl SteeringFunction for LineSteering {
    fn get_controls(&self, start: &State, goal: &State) -> Vec<Control> {
        vec![Control::new(start.position_distance(goal), 0.0, 0.0)]
    }

    fn get_path(&self, start: &State, goal: &State) -> Vec<State> {
        let distance = start.position_distance(goal);
        let heading = (goal.y - start.y).atan2(goal.x - start.x);
        let steps = (distance / self.discretization).floor() as usize;
        let mut states = Vec::with_capacity(steps + 1);
        for i in 0..steps {
            let s = i as f64 * self.discretization;
            states.push(State::new(
                start.x + s * heading.cos(),
                start.y + s * heading.sin(),
                heading,
                0.0,
                1,
            ));
        }
        states.push(State::new(goal.x, goal.y, heading, 0.0, 1));
        states
    }

    fn get_distance(&self, start: &State, goal: &State) -> f64 {
        start.position_distance(goal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance() {
        let ss = LineSteering::new(0.1);
        let start = State::new(0.0, 0.0, 0.7, 0.0, 0);
        let goal = State::new(3.0, 4.0, -0.2, 0.0, 0);
        assert!((ss.get_distance(&start, &goal) - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_single_control() {
        let ss = LineSteering::new(0.1);
        let start = State::new(1.0, 1.0, 0.0, 0.0, 0);
        let goal = State::new(1.0, 3.0, 0.0, 0.0, 0);
        let controls = ss.get_controls(&start, &goal);
        assert_eq!(controls.len(), 1);
        assert!((controls[0].delta_s - 2.0).abs() < 1e-12);
        assert_eq!(controls[0].kappa, 0.0);
    }

    #[test]
    fn test_path_ends_at_goal() {
        let ss = LineSteering::new(0.3);
        let start = State::new(0.0, 0.0, 0.0, 0.0, 0);
        let goal = State::new(2.0, 0.0, 0.0, 0.0, 0);
        let path = ss.get_path(&start, &goal);
        let first = path.first().unwrap();
        let last = path.last().unwrap();
        assert!((first.x - start.x).abs() < 1e-12);
        assert!((last.x - goal.x).abs() < 1e-12);
        assert!(path.len() >= 2);
    }

    #[test]
    fn test_zero_length_query() {
        let ss = LineSteering::new(0.1);
        let state = State::new(1.0, -1.0, 0.4, 0.0, 0);
        assert_eq!(ss.get_distance(&state, &state), 0.0);
        let path = ss.get_path(&state, &state);
        assert_eq!(path.len(), 1);
    }
}
