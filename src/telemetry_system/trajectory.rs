use std::collections::VecDeque;

use crate::constants::{MAX_TRAJECTORY_POINTS, TRAJECTORY_POINT_SPACING};
use crate::utils::vector2d::Vector2D;

#[derive(Debug, Clone, PartialEq)]
pub struct TrajectoryTrail {
    points: VecDeque<Vector2D>,
    capacity: usize,
    min_spacing: f64,
}

impl Default for TrajectoryTrail {
    fn default() -> Self {
        TrajectoryTrail::new(MAX_TRAJECTORY_POINTS, TRAJECTORY_POINT_SPACING)
    }
}

impl TrajectoryTrail {
    pub fn new(capacity: usize, min_spacing: f64) -> Self {
        let capacity = capacity.max(1);
        TrajectoryTrail {
            points: VecDeque::with_capacity(capacity),
            capacity,
            min_spacing,
        }
    }

    pub fn restart_at(&mut self, origin: Vector2D) {
        self.points.clear();
        self.points.push_back(origin);
    }

    pub fn record(&mut self, position: Vector2D, phase_changed: bool) -> bool {
        let far_enough = match self.points.back() {
            Some(last) => last.distance_squared(&position) > self.min_spacing * self.min_spacing,
            None => true,
        };

        if !(far_enough || phase_changed) {
            return false;
        }

        if self.points.len() == self.capacity {
            self.points.pop_front();
        }
        self.points.push_back(position);
        true
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn last(&self) -> Option<Vector2D> {
        self.points.back().copied()
    }

    pub fn points(&self) -> impl Iterator<Item = &Vector2D> + '_ {
        self.points.iter()
    }
}
