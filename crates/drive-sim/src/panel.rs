//! Dashboard text shown below the scene.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::vehicle::Lane;

/// Font size bucket for the panel, chosen from the window size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextSize {
    Small,
    Medium,
    Large,
}

impl TextSize {
    pub fn for_window(width: u32, height: u32) -> Self {
        if width < 400 || height < 250 {
            TextSize::Small
        } else if width < 550 || height < 450 {
            TextSize::Medium
        } else {
            TextSize::Large
        }
    }
}

/// Values shown on the panel for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PanelReadout {
    pub distance_miles: f64,
    pub speed_mph: f64,
    pub lane: Lane,
}

impl PanelReadout {
    pub fn distance_line(&self) -> String {
        format!("Distance = {:.2} miles", self.distance_miles)
    }

    pub fn speed_line(&self) -> String {
        format!("Speed = {:.2} MPH", self.speed_mph)
    }

    pub fn lane_line(&self) -> String {
        format!("Current Lane: {:>6}", self.lane.label())
    }
}

impl fmt::Display for PanelReadout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.distance_line())?;
        writeln!(f, "{}", self.speed_line())?;
        write!(f, "{}", self.lane_line())
    }
}
