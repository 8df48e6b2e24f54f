//! Simulation settings. Defaults reproduce the classic circle-drive scene.

use std::f64::consts::PI;

use drive_core::traits::Validate;
use drive_core::{DriveError, Result};
use drive_math::{dvec3, Point3, Vector3};
use drive_track::TrackConfig;
use serde::{Deserialize, Serialize};

use crate::camera::Viewpoint;
use crate::vehicle::Lane;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DriveConfig {
    /// Radius of the circle the vehicle drives on
    pub road_radius: f64,
    pub left_lane_offset: f64,
    pub right_lane_offset: f64,
    /// Lane offset change per tick while switching lanes
    pub lane_change_increment: f64,
    pub initial_lane: Lane,

    /// Angle advanced per tick, in radians
    pub initial_angle_increment: f64,
    pub min_angle_increment: f64,
    pub max_angle_increment: f64,
    /// Multiplier applied to the increment on accelerate, divisor on decelerate
    pub acceleration_factor: f64,
    pub initial_angle: f64,
    /// How far ahead of the vehicle the driver looks, in radians
    pub look_ahead_angle: f64,

    pub track_length_miles: f64,
    pub refresh_ms: f64,

    pub initial_viewpoint: Viewpoint,
    pub driver_level: f64,
    pub driver_look_level: f64,
    pub infield_camera: Point3,
    pub infield_up: Vector3,
    pub outfield_camera: Point3,
    pub outfield_up: Vector3,
    pub track_center: Point3,
    pub fov_y_degrees: f64,
    pub aspect: f64,
    pub near: f64,
    pub far: f64,
    /// Fraction of the window height reserved for the panel
    pub panel_height_ratio: f64,

    pub track: TrackConfig,
}

impl DriveConfig {
    /// Parse and validate a JSON document.
    pub fn from_json(text: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn lane_offset(&self, lane: Lane) -> f64 {
        match lane {
            Lane::Left => self.left_lane_offset,
            Lane::Right | Lane::Transition => self.right_lane_offset,
        }
    }
}

impl Default for DriveConfig {
    fn default() -> Self {
        Self {
            road_radius: 30.0,
            left_lane_offset: -0.5,
            right_lane_offset: 0.5,
            lane_change_increment: 0.1,
            initial_lane: Lane::Right,

            initial_angle_increment: PI / 90.0,
            min_angle_increment: PI / 180.0,
            max_angle_increment: PI / 30.0,
            acceleration_factor: 1.1,
            initial_angle: 0.0,
            look_ahead_angle: PI / 20.0,

            track_length_miles: 0.25,
            refresh_ms: 100.0,

            initial_viewpoint: Viewpoint::Driver,
            driver_level: 2.0,
            driver_look_level: 1.0,
            infield_camera: dvec3(0.0, 7.0, 0.0),
            infield_up: Vector3::Y,
            outfield_camera: dvec3(0.0, 15.0, -60.0),
            outfield_up: dvec3(0.0, 4.0, 1.0),
            track_center: Point3::ZERO,
            fov_y_degrees: 45.0,
            aspect: 1.6,
            near: 0.01,
            far: 300.0,
            panel_height_ratio: 1.0 / 6.0,

            track: TrackConfig::default(),
        }
    }
}

fn invalid(message: String) -> Result<()> {
    Err(DriveError::InvalidConfig(message))
}

fn require_positive(name: &str, value: f64) -> Result<()> {
    if value > 0.0 && value.is_finite() {
        Ok(())
    } else {
        invalid(format!("{name} must be finite and positive, got {value}"))
    }
}

fn require_finite(name: &str, value: f64) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        invalid(format!("{name} must be finite, got {value}"))
    }
}

impl DriveConfig {
    /// Check every setting except the nested [`TrackConfig`].
    pub fn validate_drive(&self) -> Result<()> {
        require_positive("road radius", self.road_radius)?;
        require_finite("left lane offset", self.left_lane_offset)?;
        require_finite("right lane offset", self.right_lane_offset)?;
        if self.left_lane_offset >= self.right_lane_offset {
            return invalid(format!(
                "left lane offset {} must be less than right lane offset {}",
                self.left_lane_offset, self.right_lane_offset
            ));
        }
        require_positive("lane change increment", self.lane_change_increment)?;
        if self.initial_lane == Lane::Transition {
            return invalid("initial lane cannot be a transition".to_string());
        }

        require_positive("min angle increment", self.min_angle_increment)?;
        require_positive("max angle increment", self.max_angle_increment)?;
        if self.min_angle_increment > self.max_angle_increment {
            return invalid(format!(
                "angle increments must satisfy min <= max, got [{}, {}]",
                self.min_angle_increment, self.max_angle_increment
            ));
        }
        if !(self.min_angle_increment..=self.max_angle_increment).contains(&self.initial_angle_increment) {
            return invalid(format!(
                "initial angle increment {} outside [{}, {}]",
                self.initial_angle_increment, self.min_angle_increment, self.max_angle_increment
            ));
        }
        if !(self.acceleration_factor > 1.0 && self.acceleration_factor.is_finite()) {
            return invalid(format!(
                "acceleration factor must be finite and exceed 1, got {}",
                self.acceleration_factor
            ));
        }
        require_finite("initial angle", self.initial_angle)?;
        require_finite("look-ahead angle", self.look_ahead_angle)?;

        require_positive("track length", self.track_length_miles)?;
        require_positive("refresh period", self.refresh_ms)?;

        require_finite("driver level", self.driver_level)?;
        require_finite("driver look level", self.driver_look_level)?;
        for (name, v) in [
            ("infield camera", self.infield_camera),
            ("infield up", self.infield_up),
            ("outfield camera", self.outfield_camera),
            ("outfield up", self.outfield_up),
            ("track center", self.track_center),
        ] {
            if !v.is_finite() {
                return invalid(format!("{name} must be finite, got {v}"));
            }
        }
        require_positive("field of view", self.fov_y_degrees)?;
        let depth_ok = self.near > 0.0 && self.far > self.near && self.far.is_finite();
        if !(depth_ok && self.aspect > 0.0 && self.aspect.is_finite()) {
            return invalid(format!(
                "projection needs 0 < near < far and aspect > 0, got near={} far={} aspect={}",
                self.near, self.far, self.aspect
            ));
        }
        if !(0.0..1.0).contains(&self.panel_height_ratio) {
            return invalid(format!(
                "panel height ratio must be in [0, 1), got {}",
                self.panel_height_ratio
            ));
        }
        Ok(())
    }
}

impl Validate for DriveConfig {
    fn validate(&self) -> Result<()> {
        self.validate_drive()?;
        self.track.validate()
    }
}
