use serde::{Deserialize, Serialize};

/// Pixel rectangle the 3D scene is drawn into, origin at the bottom left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

/// Largest `aspect` viewport that fits the window, raised above the panel strip.
///
/// A window wider than `aspect` keeps its full height and is centered
/// horizontally; a taller one keeps its full width and is centered vertically.
pub fn fit_viewport(window_width: u32, window_height: u32, aspect: f64, panel_ratio: f64) -> Viewport {
    let (w, h) = (f64::from(window_width), f64::from(window_height.max(1)));
    if aspect > w / h {
        let height = w / aspect;
        Viewport {
            x: 0,
            y: (0.5 * (h - height) + height * panel_ratio) as u32,
            width: window_width,
            height: height as u32,
        }
    } else {
        let width = h * aspect;
        Viewport {
            x: (0.5 * (w - width)) as u32,
            y: (h * panel_ratio) as u32,
            width: width as u32,
            height: window_height,
        }
    }
}
