//! Flat Lambertian lighting.

use crate::colors::Color;
use crate::math::vec3::Vec3;
use crate::scene::Polygon;

/// Light colors shared by every polygon in a frame.
///
/// The directional light's direction lives on the [`Scene`](crate::scene::Scene)
/// so it is transformed with the geometry; only its color is held here.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Lighting {
    pub ambient: Color,
    pub light_color: Color,
}

impl Lighting {
    pub fn new(ambient: Color, light_color: Color) -> Self {
        Self {
            ambient,
            light_color,
        }
    }

    /// Directional intensity for a face normal.
    ///
    /// Zero when the light sits behind the scene (`direction.z > 0`);
    /// otherwise the cosine of the angle between the normal and the light
    /// direction. A negative cosine is kept, so a face turned away from the
    /// light ends up darker than ambient alone.
    pub fn intensity(normal: Vec3, direction: Vec3) -> f32 {
        if direction.z > 0.0 {
            return 0.0;
        }
        normal.cos_angle(direction)
    }

    /// Computes the flat color of `polygon` lit from `direction`.
    ///
    /// Channels are combined as fractions in [0, 1]:
    /// `reflectance * (ambient + light * intensity)`, then rescaled to
    /// [0, 255] and clamped, so negative totals come out black.
    pub fn shade(&self, polygon: &Polygon, direction: Vec3) -> Color {
        let cos = Self::intensity(polygon.normal(), direction);

        let (ar, ag, ab) = self.ambient.to_unit();
        let (lr, lg, lb) = self.light_color.to_unit();
        let (rr, rg, rb) = polygon.reflectance().to_unit();

        Color::from_f32(
            rr * (ar + lr * cos) * 255.0,
            rg * (ag + lg * cos) * 255.0,
            rb * (ab + lb * cos) * 255.0,
        )
    }
}
