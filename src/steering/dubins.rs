//! Dubins steering collaborator backed by the `dubins_paths` crate

use std::f64::consts::PI;

use dubins_paths::{DubinsPath, PosRot, SegmentType};

use crate::common::{Control, State, SteeringFunction};

/// Dubins-family steering function.
///
/// `forwards` selects between forward-only maneuvers and backward-only
/// maneuvers. A backward maneuver from start to goal is the forward maneuver
/// from goal to start traversed in reverse gear.
pub struct DubinsSteering {
    /// Maximum curvature magnitude [1/m]
    kappa_max: f64,
    /// Path sampling step [m]
    discretization: f64,
    /// Forward-only vs backward-only maneuvers
    forwards: bool,
}

impl DubinsSteering {
    pub fn new(kappa_max: f64, discretization: f64, forwards: bool) -> Self {
        Self { kappa_max, discretization, forwards }
    }

    fn turning_radius(&self) -> f32 {
        (1.0 / self.kappa_max) as f32
    }

    fn query(&self, start: &State, goal: &State) -> (PosRot, PosRot) {
        if self.forwards {
            (to_posrot(start), to_posrot(goal))
        } else {
            (to_posrot(goal), to_posrot(start))
        }
    }

    fn shortest(&self, start: &State, goal: &State) -> DubinsPath {
        let (q0, q1) = self.query(start, goal);
        match DubinsPath::shortest_from(q0, q1, self.turning_radius()) {
            Ok(path) => path,
            // Collaborator failures terminate the benchmark run.
            Err(err) => panic!("dubins query failed: {}", err),
        }
    }
}

fn to_posrot(state: &State) -> PosRot {
    PosRot::from_f32(state.x as f32, state.y as f32, state.theta as f32)
}

impl SteeringFunction for DubinsSteering {
    fn get_controls(&self, start: &State, goal: &State) -> Vec<Control> {
        let path = self.shortest(start, goal);
        let gear = if self.forwards { 1.0 } else { -1.0 };
        let segments = path.path_type.to_segment_types();
        let mut controls = Vec::with_capacity(segments.len());
        for (param, segment) in path.param.iter().zip(segments.iter()) {
            let kappa = match segment {
                SegmentType::L => self.kappa_max,
                SegmentType::S => 0.0,
                SegmentType::R => -self.kappa_max,
            };
            let delta_s = gear * f64::from(*param) * f64::from(path.rho);
            controls.push(Control::new(delta_s, kappa, 0.0));
        }
        controls
    }

    fn get_path(&self, start: &State, goal: &State) -> Vec<State> {
        let path = self.shortest(start, goal);
        let d = if self.forwards { 1 } else { -1 };
        let mut states: Vec<State> = path
            .sample_many(self.discretization as f32)
            .iter()
            .map(|q| {
                State::new(
                    f64::from(q.x()),
                    f64::from(q.y()),
                    normalize_theta(f64::from(q.rot())),
                    0.0,
                    d,
                )
            })
            .collect();
        if !self.forwards {
            states.reverse();
        }
        states
    }

    fn get_distance(&self, start: &State, goal: &State) -> f64 {
        f64::from(self.shortest(start, goal).length())
    }
}

/// Map dubins_paths' [0, 2pi) headings back to (-pi, pi]
fn normalize_theta(theta: f64) -> f64 {
    if theta > PI {
        theta - 2.0 * PI
    } else {
        theta
    }
}
