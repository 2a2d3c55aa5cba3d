//! Accumulated viewer state.
//!
//! A [`View`] collects the rotation, scale and translation requested by the
//! host and turns them into one [`Transform`] per frame. The base scene is
//! never modified; each frame is rendered from `transform(base, view)`.
//!
//! Mutating methods return `&mut Self` for chaining:
//!
//! ```ignore
//! view.rotate_x(0.1 * PI)
//!     .rotate_y(-0.1 * PI)
//!     .zoom(1.1);
//! ```

use crate::math::vec3::Vec3;
use crate::transform::Transform;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct View {
    pivot: Vec3,
    rotation: Transform,
    scale: f32,
    translation: Vec3,
}

impl Default for View {
    fn default() -> Self {
        Self {
            pivot: Vec3::ZERO,
            rotation: Transform::identity(),
            scale: 1.0,
            translation: Vec3::ZERO,
        }
    }
}

impl View {
    pub fn new() -> Self {
        Self::default()
    }

    // ============ Rotation ============

    /// Rotate about the X axis, on top of the rotation so far.
    pub fn rotate_x(&mut self, angle: f32) -> &mut Self {
        self.rotation = Transform::new_x_rotation(angle).compose(&self.rotation);
        self
    }

    /// Rotate about the Y axis, on top of the rotation so far.
    pub fn rotate_y(&mut self, angle: f32) -> &mut Self {
        self.rotation = Transform::new_y_rotation(angle).compose(&self.rotation);
        self
    }

    pub fn rotation(&self) -> &Transform {
        &self.rotation
    }

    // ============ Scale ============

    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn set_scale(&mut self, scale: f32) -> &mut Self {
        self.scale = scale;
        self
    }

    /// Multiply the current uniform scale.
    pub fn zoom(&mut self, factor: f32) -> &mut Self {
        self.scale *= factor;
        self
    }

    // ============ Translation ============

    pub fn translation(&self) -> Vec3 {
        self.translation
    }

    pub fn set_translation(&mut self, translation: Vec3) -> &mut Self {
        self.translation = translation;
        self
    }

    pub fn translate(&mut self, delta: Vec3) -> &mut Self {
        self.translation = self.translation + delta;
        self
    }

    // ============ Pivot ============

    /// Point that rotation and scale are applied around.
    pub fn pivot(&self) -> Vec3 {
        self.pivot
    }

    pub fn set_pivot(&mut self, pivot: Vec3) -> &mut Self {
        self.pivot = pivot;
        self
    }

    /// Centers the box `min..max` on a `width x height` canvas and scales it
    /// so its larger x/y extent fills `coverage` (0..1) of the canvas.
    ///
    /// Rotation is kept; degenerate boxes keep the current scale.
    pub fn fit(&mut self, min: Vec3, max: Vec3, width: u32, height: u32, coverage: f32) -> &mut Self {
        let extent_x = max.x - min.x;
        let extent_y = max.y - min.y;
        let scale_x = width as f32 * coverage / extent_x;
        let scale_y = height as f32 * coverage / extent_y;
        let scale = scale_x.min(scale_y);
        if scale.is_finite() && scale > 0.0 {
            self.scale = scale;
        }

        self.pivot = (min + max) * 0.5;
        self.translation = Vec3::new(width as f32 / 2.0, height as f32 / 2.0, 0.0);
        self
    }

    pub fn reset(&mut self) -> &mut Self {
        *self = Self::default();
        self
    }

    /// The view as a single transform.
    ///
    /// Order: Translation * Scale * Rotation * (-Pivot), so the pivot is moved
    /// to the origin first and translation is applied last.
    pub fn to_transform(&self) -> Transform {
        let t = self.translation;
        let p = self.pivot;
        Transform::new_translation(t.x, t.y, t.z)
            .compose(&Transform::new_scale(self.scale, self.scale, self.scale))
            .compose(&self.rotation)
            .compose(&Transform::new_translation(-p.x, -p.y, -p.z))
    }
}
