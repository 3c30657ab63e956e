//! Visualization configuration

use bevy::prelude::*;

/// Colors and label placement for the scene
#[derive(Resource)]
pub struct SceneStyle {
    pub background: Color,
    pub sun_color: Color,
    pub trace_color: Color,
    pub label_color: Color,
    /// Top-left corner of the first label, in window pixels
    pub label_origin: Vec2,
    /// Vertical distance between consecutive labels, in window pixels
    pub label_spacing: f32,
    /// Draw the segment joining the planets' current positions
    pub show_live_segment: bool,
}

impl Default for SceneStyle {
    fn default() -> Self {
        Self {
            background: Color::BLACK,
            sun_color: Color::srgb_u8(255, 255, 0),
            trace_color: Color::WHITE,
            label_color: Color::WHITE,
            label_origin: Vec2::new(10.0, 10.0),
            label_spacing: 25.0,
            show_live_segment: true,
        }
    }
}
