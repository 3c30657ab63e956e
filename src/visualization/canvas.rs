//! Canvas to world mapping
//!
//! Simulation positions live on a canvas with the origin at the top-left
//! corner and y pointing down. The 2D camera sits at the canvas centre with
//! y pointing up, one world unit per canvas unit.

use bevy::prelude::*;

use crate::config::AnimationSettings;

/// Convert a canvas point to 2D world coordinates
pub fn canvas_to_world(point: IVec2, settings: &AnimationSettings) -> Vec2 {
    Vec2::new(
        point.x as f32 - settings.canvas_width as f32 / 2.0,
        settings.canvas_height as f32 / 2.0 - point.y as f32,
    )
}
