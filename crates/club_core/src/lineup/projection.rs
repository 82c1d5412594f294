use serde::{Deserialize, Serialize};

use crate::tactics::{Position, PITCH_LENGTH, PITCH_WIDTH};

/// Placement as fractions of the pitch viewport, anchored at the element centre.
///
/// `x` runs across the viewport width, `y` down its height. No aspect
/// correction is applied; existing layouts depend on the plain ratio.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PitchPoint {
    pub x: f32,
    pub y: f32,
}

impl PitchPoint {
    /// (left, top) percentages for absolutely positioned markers.
    pub fn css_percent(&self) -> (f32, f32) {
        (self.x * 100.0, self.y * 100.0)
    }

    /// Centre of the marker in a viewport of the given size.
    pub fn to_viewport(&self, width: f32, height: f32) -> (f32, f32) {
        (self.x * width, self.y * height)
    }
}

/// Map normalized pitch coordinates (`[0,100] x [0,140]`) to viewport fractions.
pub fn project(x: f32, y: f32) -> PitchPoint {
    PitchPoint { x: x / PITCH_WIDTH, y: y / PITCH_LENGTH }
}

pub fn project_position(position: &Position) -> PitchPoint {
    project(position.x, position.y)
}
