//! Circle drive track geometry: curves, finite-difference tangents, and road ribbons.

pub mod config;
pub mod curve;
pub mod ribbon;
pub mod sampling;
pub mod track;

pub use config::TrackConfig;
pub use curve::{CachedCurve, Circle, Curve, FigureEight, ParametricCurve};
pub use ribbon::{generate_ribbon, Ribbon, RibbonParams};
pub use track::Track;
