//! Scene data: flat-colored triangles plus one directional light.

use crate::colors::Color;
use crate::math::vec3::Vec3;
use crate::transform::Transform;

/// A single triangle with a flat reflectance color.
///
/// Vertex order is significant: it fixes the winding, and therefore the sign
/// of [`Polygon::normal`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Polygon {
    vertices: [Vec3; 3],
    reflectance: Color,
}

impl Polygon {
    pub fn new(v0: Vec3, v1: Vec3, v2: Vec3, reflectance: Color) -> Self {
        Self {
            vertices: [v0, v1, v2],
            reflectance,
        }
    }

    pub fn vertices(&self) -> &[Vec3; 3] {
        &self.vertices
    }

    pub fn reflectance(&self) -> Color {
        self.reflectance
    }

    /// Face normal `(v1 - v0) x (v2 - v1)`. Not normalized.
    pub fn normal(&self) -> Vec3 {
        let [v0, v1, v2] = self.vertices;
        (v1 - v0).cross(v2 - v1)
    }

    /// Returns a new polygon with every vertex passed through `transform`.
    pub fn transformed(&self, transform: &Transform) -> Self {
        Self {
            vertices: self.vertices.map(|v| transform.multiply(v)),
            reflectance: self.reflectance,
        }
    }
}

/// An ordered list of polygons and the light direction.
///
/// Order only affects draw order; depth testing makes the result independent
/// of it.
#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    polygons: Vec<Polygon>,
    light: Vec3,
}

impl Scene {
    pub fn new(polygons: Vec<Polygon>, light: Vec3) -> Self {
        Self { polygons, light }
    }

    pub fn polygons(&self) -> &[Polygon] {
        &self.polygons
    }

    pub fn light(&self) -> Vec3 {
        self.light
    }

    pub fn len(&self) -> usize {
        self.polygons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.polygons.is_empty()
    }

    /// Axis-aligned bounds of every vertex as `(min, max)`, or None for an
    /// empty scene.
    pub fn bounds(&self) -> Option<(Vec3, Vec3)> {
        let mut vertices = self.polygons.iter().flat_map(|p| p.vertices().iter());
        let first = *vertices.next()?;
        Some(vertices.fold((first, first), |(min, max), v| {
            (
                Vec3::new(min.x.min(v.x), min.y.min(v.y), min.z.min(v.z)),
                Vec3::new(max.x.max(v.x), max.y.max(v.y), max.z.max(v.z)),
            )
        }))
    }
}
