use drive_math::{DMat4, Point3, Vector3};
use serde::{Deserialize, Serialize};

use crate::config::DriveConfig;
use crate::vehicle::Vehicle;

/// Where the scene is viewed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Viewpoint {
    /// From the driver's seat, looking ahead along the road
    Driver,
    /// From a fixed point inside the loop, following the vehicle
    Infield,
    /// From high outside the loop, looking at the track center
    Outfield,
}

impl Viewpoint {
    /// `d`, `i`, or `o` in either case.
    pub fn from_key(key: char) -> Option<Self> {
        match key.to_ascii_lowercase() {
            'd' => Some(Viewpoint::Driver),
            'i' => Some(Viewpoint::Infield),
            'o' => Some(Viewpoint::Outfield),
            _ => None,
        }
    }

    /// The vehicle body is hidden when viewed from inside it.
    pub fn shows_vehicle(self) -> bool {
        self != Viewpoint::Driver
    }
}

/// A perspective camera with look-at placement.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    pub eye: Point3,
    pub target: Point3,
    pub up: Vector3,
    pub fov_y: f64, // radians
    pub aspect: f64,
    pub near: f64,
    pub far: f64,
}

impl Camera {
    pub fn new(eye: Point3, target: Point3, up: Vector3, config: &DriveConfig) -> Self {
        Self {
            eye,
            target,
            up,
            fov_y: config.fov_y_degrees.to_radians(),
            aspect: config.aspect,
            near: config.near,
            far: config.far,
        }
    }

    /// Place the camera for `viewpoint`.
    ///
    /// `outfield_sign` multiplies the outfield camera height so the view can be
    /// flipped below the ground plane.
    pub fn for_viewpoint(
        viewpoint: Viewpoint,
        vehicle: &Vehicle,
        config: &DriveConfig,
        outfield_sign: f64,
    ) -> Self {
        match viewpoint {
            Viewpoint::Driver => Self::new(
                vehicle.position(config),
                vehicle.look_at(config),
                Vector3::Y,
                config,
            ),
            Viewpoint::Infield => Self::new(
                config.infield_camera,
                vehicle.position(config),
                config.infield_up,
                config,
            ),
            Viewpoint::Outfield => {
                let mut eye = config.outfield_camera;
                eye.y *= outfield_sign;
                Self::new(eye, config.track_center, config.outfield_up, config)
            }
        }
    }

    /// World to camera transform; the camera looks down -Z.
    pub fn view_matrix(&self) -> DMat4 {
        DMat4::look_at_rh(self.eye, self.target, self.up)
    }

    /// OpenGL-style projection (-1 to 1 depth range).
    pub fn projection_matrix(&self) -> DMat4 {
        DMat4::perspective_rh_gl(self.fov_y, self.aspect, self.near, self.far)
    }

    pub fn forward(&self) -> Vector3 {
        (self.target - self.eye).normalize()
    }
}
