//! Chart geometry: gauge, radar and donut primitives for a vector renderer.
//!
//! All angles are in degrees. Each chart owns its own polar-to-canvas
//! conversion; the gauge flips Y (angles grow counter-clockwise on screen),
//! the radar and donut do not.

pub mod donut;
pub mod gauge;
pub mod radar;

pub use donut::*;
pub use gauge::*;
pub use radar::*;

use serde::{Deserialize, Serialize};

/// A coordinate on the logical canvas; Y grows downwards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Drawable circular arc, equivalent to an SVG elliptical-arc command with
/// equal radii.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ArcPath {
    pub start: Point,
    pub end: Point,
    pub radius: f64,
    pub large_arc: bool,
    pub sweep: bool,
}

impl ArcPath {
    /// SVG path data, e.g. `M 20.000 100.000 A 80.000 80.000 0 0 1 ...`.
    pub fn to_svg_path(&self) -> String {
        format!(
            "M {:.3} {:.3} A {:.3} {:.3} 0 {} {} {:.3} {:.3}",
            self.start.x,
            self.start.y,
            self.radius,
            self.radius,
            u8::from(self.large_arc),
            u8::from(self.sweep),
            self.end.x,
            self.end.y,
        )
    }
}
