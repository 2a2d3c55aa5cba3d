//! Composable affine transforms.
//!
//! A [`Transform`] wraps a [`Mat4`] and is the single mechanism used to rotate,
//! translate and scale a scene. Every operation returns a new value:
//!
//! ```ignore
//! let spin = Transform::new_x_rotation(0.3).compose(&Transform::new_y_rotation(0.1));
//! let moved = spin.multiply(Vec3::new(1.0, 2.0, 3.0));
//! ```

use crate::math::{mat4::Mat4, vec3::Vec3};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    matrix: Mat4,
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}

impl Transform {
    pub fn identity() -> Self {
        Self {
            matrix: Mat4::identity(),
        }
    }

    /// Rotation by `theta` radians about the X axis.
    pub fn new_x_rotation(theta: f32) -> Self {
        Self {
            matrix: Mat4::rotation_x(theta),
        }
    }

    /// Rotation by `theta` radians about the Y axis.
    pub fn new_y_rotation(theta: f32) -> Self {
        Self {
            matrix: Mat4::rotation_y(theta),
        }
    }

    pub fn new_translation(tx: f32, ty: f32, tz: f32) -> Self {
        Self {
            matrix: Mat4::translation(tx, ty, tz),
        }
    }

    pub fn new_scale(sx: f32, sy: f32, sz: f32) -> Self {
        Self {
            matrix: Mat4::scaling(sx, sy, sz),
        }
    }

    /// Returns `self * other`: applying the result is the same as applying
    /// `other` first, then `self`.
    pub fn compose(&self, other: &Transform) -> Self {
        Self {
            matrix: self.matrix * other.matrix,
        }
    }

    /// Applies the transform to a point, translation included.
    pub fn multiply(&self, v: Vec3) -> Vec3 {
        self.matrix * v
    }

    pub fn matrix(&self) -> &Mat4 {
        &self.matrix
    }
}
