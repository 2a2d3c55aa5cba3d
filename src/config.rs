//! Render settings shared by the engine and the viewer.

use std::f32::consts::PI;

use crate::colors::{self, Color};
use crate::light::Lighting;

pub const DEFAULT_WIDTH: u32 = 800;
pub const DEFAULT_HEIGHT: u32 = 600;

/// Canvas, lighting and input settings.
///
/// ```ignore
/// let config = RenderConfig::default()
///     .with_size(640, 480)
///     .with_ambient(Color::grey(80));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderConfig {
    pub width: u32,
    pub height: u32,
    pub ambient: Color,
    pub light_color: Color,
    pub background: Color,
    /// Radians turned per rotation key press.
    pub rotation_step: f32,
    /// Multiplier applied per zoom key press.
    pub zoom_factor: f32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            ambient: Color::grey(128),
            light_color: Color::grey(100),
            background: colors::BLACK,
            rotation_step: 0.1 * PI,
            zoom_factor: 1.1,
        }
    }
}

impl RenderConfig {
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_ambient(mut self, ambient: Color) -> Self {
        self.ambient = ambient;
        self
    }

    pub fn with_light_color(mut self, light_color: Color) -> Self {
        self.light_color = light_color;
        self
    }

    pub fn with_background(mut self, background: Color) -> Self {
        self.background = background;
        self
    }

    pub fn lighting(&self) -> Lighting {
        Lighting::new(self.ambient, self.light_color)
    }
}
