//! The per-frame rendering pipeline.
//!
//! ```text
//! Scene ──transform──▶ Scene ──┬─ is_hidden? ─▶ skip
//!                              └─ shading ─▶ compute_edge_list_clipped ─▶ compute_zbuffer ─▶ FrameBuffer
//! ```
//!
//! Every function here is pure except [`compute_zbuffer`], which writes into
//! the frame it is handed. Projection is orthographic: screen x/y are the
//! scene's x/y and z is depth, smaller z nearer to the viewer.

use crate::colors::Color;
use crate::light::Lighting;
use crate::math::vec3::Vec3;
use crate::render::{compute_edge_list_clipped, compute_zbuffer, FrameBuffer};
use crate::scene::{Polygon, Scene};
use crate::transform::Transform;

/// Applies `transform` to every vertex and to the light vector.
///
/// The light is transformed exactly like a vertex and is not re-normalized.
pub fn transform(scene: &Scene, transform: &Transform) -> Scene {
    let light = transform.multiply(scene.light());
    let polygons = scene
        .polygons()
        .iter()
        .map(|p| p.transformed(transform))
        .collect();
    Scene::new(polygons, light)
}

/// Rotates about X by `x_rot`, after rotating about Y by `y_rot`.
pub fn rotate_scene(scene: &Scene, x_rot: f32, y_rot: f32) -> Scene {
    let rotation = Transform::new_x_rotation(x_rot).compose(&Transform::new_y_rotation(y_rot));
    transform(scene, &rotation)
}

pub fn translate_scene(scene: &Scene, tx: f32, ty: f32, tz: f32) -> Scene {
    transform(scene, &Transform::new_translation(tx, ty, tz))
}

pub fn scale_scene(scene: &Scene, sx: f32, sy: f32, sz: f32) -> Scene {
    transform(scene, &Transform::new_scale(sx, sy, sz))
}

/// True when the polygon faces away from the viewer.
///
/// Edge-on polygons (`normal.z == 0`) count as hidden.
pub fn is_hidden(polygon: &Polygon) -> bool {
    polygon.normal().z >= 0.0
}

/// Flat color of `polygon` under `lighting`, lit from `light_direction`.
pub fn shading(polygon: &Polygon, light_direction: Vec3, lighting: &Lighting) -> Color {
    lighting.shade(polygon, light_direction)
}

/// Renders one frame of `scene` onto a fresh `width x height` canvas.
///
/// Hidden polygons are culled, the rest are flat shaded and composited
/// through the depth buffer. Edge lists only cover the canvas rows. Never
/// fails: degenerate or oversized polygons simply contribute no pixels
/// outside the canvas.
pub fn render_frame(
    scene: &Scene,
    width: u32,
    height: u32,
    lighting: &Lighting,
    background: Color,
) -> FrameBuffer {
    let mut frame = FrameBuffer::new(width, height, background);
    let rows = 0..i32::try_from(height).unwrap_or(i32::MAX);
    let mut culled = 0usize;

    for polygon in scene.polygons() {
        if is_hidden(polygon) {
            culled += 1;
            continue;
        }
        let color = shading(polygon, scene.light(), lighting);
        let edges = compute_edge_list_clipped(polygon, rows.clone());
        compute_zbuffer(&mut frame, &edges, color);
    }

    log::debug!(
        "rendered {}x{} frame: {} polygons, {} culled",
        width,
        height,
        scene.len(),
        culled
    );
    frame
}
