//! Per-frame state for driving around a track: speed, lanes, cameras, and panel text.

pub mod camera;
pub mod config;
pub mod panel;
pub mod simulation;
pub mod vehicle;
pub mod viewport;

pub use camera::{Camera, Viewpoint};
pub use config::DriveConfig;
pub use panel::{PanelReadout, TextSize};
pub use simulation::{Command, Simulation};
pub use vehicle::{Lane, Vehicle};
pub use viewport::{fit_viewport, Viewport};
