//! Vehicle position, speed, and lane-change state.

use std::f64::consts::TAU;

use drive_math::{dvec3, Point3, Side};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::DriveConfig;

/// Lane the vehicle occupies, as shown on the panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Lane {
    Left,
    Right,
    /// Between lanes while a lane change is in progress
    Transition,
}

impl Lane {
    pub fn label(self) -> &'static str {
        match self {
            Lane::Left => "Left",
            Lane::Right => "Right",
            Lane::Transition => "Moving",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vehicle {
    /// Angular position around the road circle, in radians
    pub angle: f64,
    /// Radians advanced per tick
    pub angle_increment: f64,
    /// Signed offset from the road radius; negative is the left lane
    pub lane_offset: f64,
    pub lane: Lane,
    /// Target lane while a lane change is in progress
    pub lane_change: Option<Side>,
    pub distance_miles: f64,
}

impl Vehicle {
    pub fn new(config: &DriveConfig) -> Self {
        Self {
            angle: config.initial_angle,
            angle_increment: config.initial_angle_increment,
            lane_offset: config.lane_offset(config.initial_lane),
            lane: config.initial_lane,
            lane_change: None,
            distance_miles: 0.0,
        }
    }

    pub fn accelerate(&mut self, config: &DriveConfig) {
        self.angle_increment =
            (self.angle_increment * config.acceleration_factor).min(config.max_angle_increment);
        debug!(increment = self.angle_increment, "Accelerated");
    }

    pub fn decelerate(&mut self, config: &DriveConfig) {
        self.angle_increment =
            (self.angle_increment / config.acceleration_factor).max(config.min_angle_increment);
        debug!(increment = self.angle_increment, "Decelerated");
    }

    /// Start moving toward the lane on `side`, cancelling any change in the other direction.
    pub fn steer(&mut self, side: Side) {
        self.lane_change = Some(side);
        self.lane = Lane::Transition;
    }

    /// Advance one frame.
    pub fn tick(&mut self, config: &DriveConfig) {
        self.angle += self.angle_increment;
        self.distance_miles += config.track_length_miles * self.angle_increment / TAU;

        match self.lane_change {
            Some(Side::Right) => {
                self.lane_offset += config.lane_change_increment;
                if self.lane_offset >= config.right_lane_offset {
                    self.settle(Lane::Right, config.right_lane_offset);
                }
            }
            Some(Side::Left) => {
                self.lane_offset -= config.lane_change_increment;
                if self.lane_offset <= config.left_lane_offset {
                    self.settle(Lane::Left, config.left_lane_offset);
                }
            }
            None => {}
        }
    }

    fn settle(&mut self, lane: Lane, offset: f64) {
        self.lane_offset = offset;
        self.lane = lane;
        self.lane_change = None;
        debug!(lane = lane.label(), "Lane change complete");
    }

    /// Speed in miles per hour implied by the current increment and refresh period.
    pub fn speed_mph(&self, config: &DriveConfig) -> f64 {
        const MS_PER_HOUR: f64 = 3_600_000.0;
        config.track_length_miles * MS_PER_HOUR * self.angle_increment / (TAU * config.refresh_ms)
    }

    fn on_road(&self, config: &DriveConfig, angle: f64, level: f64) -> Point3 {
        let r = self.lane_offset + config.road_radius;
        dvec3(r * angle.sin(), level, r * angle.cos())
    }

    /// Driver's eye position.
    pub fn position(&self, config: &DriveConfig) -> Point3 {
        self.on_road(config, self.angle, config.driver_level)
    }

    /// Point on the road the driver looks at, slightly ahead.
    pub fn look_at(&self, config: &DriveConfig) -> Point3 {
        self.on_road(config, self.angle + config.look_ahead_angle, config.driver_look_level)
    }
}
