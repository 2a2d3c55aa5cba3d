//! Depth-buffered compositing of scanline tables.

use super::edgelist::EdgeList;
use super::framebuffer::FrameBuffer;
use crate::colors::Color;

/// Fills one triangle's [`EdgeList`] into `buffer` with a flat `color`.
///
/// Each row covers columns `left_x..right_x` (truncated, half-open) with depth
/// stepped linearly from `left_z`. A row whose truncated ends coincide is a
/// single column at `left_x` with depth `left_z`. Rows and columns outside the
/// buffer are clipped; rows that were never sampled are skipped.
///
/// Pixels are written only where the interpolated depth is strictly nearer
/// than what is stored, so the nearest surface wins regardless of the order
/// triangles are composited in.
pub fn compute_zbuffer(buffer: &mut FrameBuffer, edges: &EdgeList, color: Color) {
    let width = i64::from(buffer.width());
    let height = i64::from(buffer.height());

    for row in 0..edges.len() {
        let y = i64::from(edges.start_y()) + row as i64;
        if y < 0 || y >= height {
            continue;
        }
        let y = y as i32;

        let left_x = edges.left_x(row);
        let right_x = edges.right_x(row);
        if !left_x.is_finite() || !right_x.is_finite() {
            continue;
        }

        // Truncated ends saturate at the i32 range; column math is done in i64
        let left = i64::from(left_x as i32);
        let right = i64::from(right_x as i32);
        let left_z = edges.left_z(row);

        if left == right {
            if left >= 0 && left < width {
                buffer.set_pixel_with_depth(left as i32, y, left_z, color);
            }
            continue;
        }

        let mz = (edges.right_z(row) - left_z) / (right - left) as f32;

        // Skip the clipped prefix in one step; depth still advances per column
        let first = left.max(0);
        let last = right.min(width);
        let mut z = left_z + mz * (first - left) as f32;
        for x in first..last {
            buffer.set_pixel_with_depth(x as i32, y, z, color);
            z += mz;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors::BLACK;
    use crate::math::vec3::Vec3;
    use crate::render::edgelist::compute_edge_list;
    use crate::scene::Polygon;
    use approx::assert_relative_eq;

    const RED: Color = Color::new(255, 0, 0);
    const BLUE: Color = Color::new(0, 0, 255);

    fn polygon(points: [(f32, f32, f32); 3]) -> Polygon {
        let [a, b, c] = points.map(|(x, y, z)| Vec3::new(x, y, z));
        Polygon::new(a, b, c, Color::grey(255))
    }

    fn painted(fb: &FrameBuffer) -> usize {
        fb.colors().iter().filter(|&&c| c != BLACK).count()
    }

    #[test]
    fn test_fills_half_open_spans() {
        let mut fb = FrameBuffer::new(10, 10, BLACK);
        let edges = compute_edge_list(&polygon([(0.0, 0.0, 5.0), (0.0, 4.0, 5.0), (4.0, 0.0, 5.0)]));
        compute_zbuffer(&mut fb, &edges, RED);

        for y in 0..10 {
            for x in 0..10 {
                let expected = if y < 4 && x < 4 - y { RED } else { BLACK };
                assert_eq!(fb.get_pixel(x, y), Some(expected), "pixel ({x}, {y})");
            }
        }
    }

    #[test]
    fn test_depth_is_interpolated_across_row() {
        let mut edges = EdgeList::new(0, 1);
        edges.add_row(0, 0.0, 0.0);
        edges.add_row(0, 4.0, 8.0);

        let mut fb = FrameBuffer::new(8, 1, BLACK);
        compute_zbuffer(&mut fb, &edges, RED);

        for x in 0..4 {
            assert_relative_eq!(fb.get_depth(x, 0).unwrap_or(f32::NAN), 2.0 * x as f32);
        }
        assert_eq!(fb.get_depth(4, 0), Some(f32::INFINITY));
    }

    #[test]
    fn test_single_column_row_uses_left_z() {
        let mut edges = EdgeList::new(3, 4);
        edges.add_row(0, 2.2, 7.0);
        edges.add_row(0, 2.8, 9.0);

        let mut fb = FrameBuffer::new(5, 5, BLACK);
        compute_zbuffer(&mut fb, &edges, RED);

        assert_eq!(fb.get_pixel(2, 3), Some(RED));
        assert_eq!(fb.get_depth(2, 3), Some(7.0));
        assert_eq!(painted(&fb), 1);
    }

    #[test]
    fn test_unsampled_rows_are_skipped() {
        let edges = EdgeList::new(0, 3);
        let mut fb = FrameBuffer::new(4, 4, BLACK);
        compute_zbuffer(&mut fb, &edges, RED);
        assert_eq!(painted(&fb), 0);
    }

    #[test]
    fn test_clips_to_canvas() {
        let mut fb = FrameBuffer::new(6, 6, BLACK);
        let edges = compute_edge_list(&polygon([(-20.0, -20.0, 1.0), (-20.0, 40.0, 1.0), (40.0, -20.0, 1.0)]));
        compute_zbuffer(&mut fb, &edges, RED);

        // The hypotenuse x + y = 20 lies outside the 6x6 canvas
        assert_eq!(painted(&fb), 36);
    }

    #[test]
    fn test_clipped_prefix_keeps_depth_slope() {
        let mut edges = EdgeList::new(0, 1);
        edges.add_row(0, -4.0, 0.0);
        edges.add_row(0, 4.0, 8.0);

        let mut fb = FrameBuffer::new(8, 1, BLACK);
        compute_zbuffer(&mut fb, &edges, RED);

        assert_relative_eq!(fb.get_depth(0, 0).unwrap_or(f32::NAN), 4.0);
        assert_relative_eq!(fb.get_depth(3, 0).unwrap_or(f32::NAN), 7.0);
    }

    #[test]
    fn test_nearest_wins_in_either_order() {
        let near = compute_edge_list(&polygon([(0.0, 0.0, 1.0), (0.0, 8.0, 1.0), (8.0, 0.0, 1.0)]));
        let far = compute_edge_list(&polygon([(0.0, 0.0, 3.0), (0.0, 8.0, 3.0), (8.0, 8.0, 3.0)]));

        let mut near_first = FrameBuffer::new(8, 8, BLACK);
        compute_zbuffer(&mut near_first, &near, RED);
        compute_zbuffer(&mut near_first, &far, BLUE);

        let mut far_first = FrameBuffer::new(8, 8, BLACK);
        compute_zbuffer(&mut far_first, &far, BLUE);
        compute_zbuffer(&mut far_first, &near, RED);

        assert_eq!(near_first.colors(), far_first.colors());
        assert_eq!(near_first.get_pixel(1, 2), Some(RED));
    }

    #[test]
    fn test_equal_depth_keeps_first_drawn() {
        let edges = compute_edge_list(&polygon([(0.0, 0.0, 2.0), (0.0, 4.0, 2.0), (4.0, 0.0, 2.0)]));
        let mut fb = FrameBuffer::new(4, 4, BLACK);
        compute_zbuffer(&mut fb, &edges, RED);
        compute_zbuffer(&mut fb, &edges, BLUE);
        assert_eq!(fb.get_pixel(0, 0), Some(RED));
    }

    #[test]
    fn test_far_left_end_does_not_overflow() {
        let mut edges = EdgeList::new(0, 1);
        edges.add_row(0, -3e9, 0.0);
        edges.add_row(0, 5.0, 1.0);

        let mut fb = FrameBuffer::new(10, 1, BLACK);
        compute_zbuffer(&mut fb, &edges, RED);

        for x in 0..5 {
            assert_eq!(fb.get_pixel(x, 0), Some(RED), "pixel ({x}, 0)");
        }
        assert_eq!(fb.get_pixel(5, 0), Some(BLACK));
        // Depth is nearly right_z this close to the right end
        assert_relative_eq!(fb.get_depth(4, 0).unwrap_or(f32::NAN), 1.0, epsilon = 1e-3);
    }

    #[test]
    fn test_saturated_span_fills_whole_row() {
        let mut edges = EdgeList::new(2, 3);
        edges.add_row(0, -1e20, 3.0);
        edges.add_row(0, 1e20, 3.0);

        let mut fb = FrameBuffer::new(4, 4, BLACK);
        compute_zbuffer(&mut fb, &edges, BLUE);

        assert_eq!(painted(&fb), 4);
        assert_eq!(fb.get_pixel(3, 2), Some(BLUE));
    }

    #[test]
    fn test_single_column_off_canvas_is_ignored() {
        let mut edges = EdgeList::new(0, 1);
        edges.add_row(0, -5e9, 1.0);
        edges.add_row(0, -4e9, 1.0);

        let mut fb = FrameBuffer::new(4, 1, BLACK);
        compute_zbuffer(&mut fb, &edges, RED);
        assert_eq!(painted(&fb), 0);
    }
}
