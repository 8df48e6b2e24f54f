//! The whole scene state, advanced one frame at a time.

use drive_core::traits::Validate;
use drive_core::Result;
use drive_math::Side;
use drive_track::{FigureEight, Track};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::camera::{Camera, Viewpoint};
use crate::config::DriveConfig;
use crate::panel::PanelReadout;
use crate::vehicle::Vehicle;
use crate::viewport::{fit_viewport, Viewport};

/// A user request, applied before the next tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    Accelerate,
    Decelerate,
    Steer(Side),
    SelectView(Viewpoint),
}

#[derive(Debug)]
pub struct Simulation {
    config: DriveConfig,
    vehicle: Vehicle,
    viewpoint: Viewpoint,
    outfield_sign: f64,
    track: Track,
    frame: u64,
}

impl Simulation {
    /// Validate `config` and build the figure-eight track it describes.
    pub fn new(config: DriveConfig) -> Result<Self> {
        config.validate()?;
        let track = Track::from_config(FigureEight::default(), &config.track)?;
        Self::with_track(config, track)
    }

    /// Use a caller-built track; `config.track` is neither used nor validated.
    pub fn with_track(config: DriveConfig, track: Track) -> Result<Self> {
        config.validate_drive()?;
        info!(
            road_radius = config.road_radius,
            ribbon = track.ribbon().map_or(0, |r| r.len()),
            "Simulation ready"
        );
        Ok(Self {
            vehicle: Vehicle::new(&config),
            viewpoint: config.initial_viewpoint,
            outfield_sign: 1.0,
            track,
            frame: 0,
            config,
        })
    }

    pub fn apply(&mut self, command: Command) {
        match command {
            Command::Accelerate => self.vehicle.accelerate(&self.config),
            Command::Decelerate => self.vehicle.decelerate(&self.config),
            Command::Steer(side) => self.vehicle.steer(side),
            Command::SelectView(viewpoint) => self.select_view(viewpoint),
        }
    }

    /// Map a viewpoint key to a [`Command::SelectView`]. Returns whether the key was used.
    pub fn handle_key(&mut self, key: char) -> bool {
        match Viewpoint::from_key(key) {
            Some(viewpoint) => {
                self.apply(Command::SelectView(viewpoint));
                true
            }
            None => false,
        }
    }

    // Every outfield selection mirrors the outfield camera height.
    fn select_view(&mut self, viewpoint: Viewpoint) {
        if viewpoint == Viewpoint::Outfield {
            self.outfield_sign = -self.outfield_sign;
        }
        debug!(?viewpoint, outfield_sign = self.outfield_sign, "Viewpoint selected");
        self.viewpoint = viewpoint;
    }

    pub fn tick(&mut self) {
        self.vehicle.tick(&self.config);
        self.frame += 1;
    }

    pub fn camera(&self) -> Camera {
        Camera::for_viewpoint(self.viewpoint, &self.vehicle, &self.config, self.outfield_sign)
    }

    /// Scene viewport for a window of the given pixel size.
    pub fn viewport(&self, window_width: u32, window_height: u32) -> Viewport {
        fit_viewport(
            window_width,
            window_height,
            self.config.aspect,
            self.config.panel_height_ratio,
        )
    }

    pub fn readout(&self) -> PanelReadout {
        PanelReadout {
            distance_miles: self.vehicle.distance_miles,
            speed_mph: self.vehicle.speed_mph(&self.config),
            lane: self.vehicle.lane,
        }
    }

    pub fn config(&self) -> &DriveConfig {
        &self.config
    }

    pub fn vehicle(&self) -> &Vehicle {
        &self.vehicle
    }

    pub fn viewpoint(&self) -> Viewpoint {
        self.viewpoint
    }

    pub fn track(&self) -> &Track {
        &self.track
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_builds_track_ribbon() {
        let sim = Simulation::new(DriveConfig::default()).unwrap();
        assert_eq!(sim.track().ribbon().unwrap().len(), 100);
        assert_eq!(sim.viewpoint(), Viewpoint::Driver);
        assert_eq!(sim.frame(), 0);
    }

    #[test]
    fn test_outfield_toggles_each_selection() {
        let mut sim = Simulation::new(DriveConfig::default()).unwrap();
        assert!(sim.handle_key('o'));
        let first = sim.camera().eye.y;
        assert!(sim.handle_key('O'));
        let second = sim.camera().eye.y;
        assert_eq!(first, -second);
        assert!(!sim.handle_key('q'));
        assert_eq!(sim.viewpoint(), Viewpoint::Outfield);
    }

    #[test]
    fn test_tick_counts_frames() {
        let mut sim = Simulation::new(DriveConfig::default()).unwrap();
        for _ in 0..5 {
            sim.tick();
        }
        assert_eq!(sim.frame(), 5);
        assert!(sim.readout().distance_miles > 0.0);
    }

    #[test]
    fn test_viewport_keeps_configured_aspect() {
        let sim = Simulation::new(DriveConfig::default()).unwrap();
        let vp = sim.viewport(1000, 500);
        assert_eq!((vp.width, vp.height), (800, 500));
    }
}
