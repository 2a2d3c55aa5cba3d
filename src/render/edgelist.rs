//! Per-triangle scanline tables.
//!
//! An [`EdgeList`] records, for every integer row a triangle spans, the
//! leftmost and rightmost x seen on that row together with the depth at each
//! end. It is built once per visible triangle by [`compute_edge_list`] and fed
//! to [`compute_zbuffer`](super::zbuffer::compute_zbuffer).
//!
//! ```text
//!   start_y ─┬─ row 0   left_x ........ right_x
//!            │  row 1   left_x ............ right_x
//!            │  ...
//!   end_y   ─┴─ (exclusive)
//! ```
//!
//! Rows are indexed relative to `start_y`. Both bounds are derived from vertex
//! y values by integer truncation, the same convention the compositor uses
//! for columns.

use std::ops::Range;

use crate::scene::Polygon;

/// Most rows a table built by [`compute_edge_list`] may hold. Taller
/// triangles yield an empty table.
pub const MAX_ROWS: i64 = 1 << 20;

/// Scanline table covering rows `[start_y, end_y)`.
///
/// Unsampled rows hold the sentinels `left_x = +inf`, `right_x = -inf`,
/// `left_z = right_z = +inf`.
///
/// # Boundary policy
///
/// The row accessors clamp their index to the table. Asking for any row at or
/// past the end returns the last stored row with `right_x - 1` and
/// `left_z + 1`, so a half-open walk that runs one row over still ends on a
/// narrower span instead of indexing out of range. An empty table returns the
/// sentinels.
#[derive(Clone, Debug, PartialEq)]
pub struct EdgeList {
    start_y: i32,
    end_y: i32,
    left_x: Vec<f32>,
    right_x: Vec<f32>,
    left_z: Vec<f32>,
    right_z: Vec<f32>,
}

impl EdgeList {
    /// Creates an empty table for rows `[start_y, end_y)`.
    ///
    /// `end_y <= start_y` produces a table with no rows. One entry per row is
    /// allocated up front.
    pub fn new(start_y: i32, end_y: i32) -> Self {
        let end_y = end_y.max(start_y);
        let rows = (i64::from(end_y) - i64::from(start_y)) as usize;
        Self {
            start_y,
            end_y,
            left_x: vec![f32::INFINITY; rows],
            right_x: vec![f32::NEG_INFINITY; rows],
            left_z: vec![f32::INFINITY; rows],
            right_z: vec![f32::INFINITY; rows],
        }
    }

    pub fn start_y(&self) -> i32 {
        self.start_y
    }

    pub fn end_y(&self) -> i32 {
        self.end_y
    }

    /// Number of rows in the table (`end_y - start_y`).
    pub fn len(&self) -> usize {
        self.left_x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.left_x.is_empty()
    }

    /// Records an edge sample `(x, z)` on `row`.
    ///
    /// The sample replaces the left end if `x <= left_x` and the right end if
    /// `x >= right_x`; on ties the later call wins. Rows outside the table are
    /// ignored.
    pub fn add_row(&mut self, row: usize, x: f32, z: f32) {
        if row >= self.len() {
            return;
        }
        if x <= self.left_x[row] {
            self.left_x[row] = x;
            self.left_z[row] = z;
        }
        if x >= self.right_x[row] {
            self.right_x[row] = x;
            self.right_z[row] = z;
        }
    }

    pub fn left_x(&self, row: usize) -> f32 {
        self.read(&self.left_x, row, f32::INFINITY, 0.0)
    }

    pub fn right_x(&self, row: usize) -> f32 {
        self.read(&self.right_x, row, f32::NEG_INFINITY, -1.0)
    }

    pub fn left_z(&self, row: usize) -> f32 {
        self.read(&self.left_z, row, f32::INFINITY, 1.0)
    }

    pub fn right_z(&self, row: usize) -> f32 {
        self.read(&self.right_z, row, f32::INFINITY, 0.0)
    }

    #[inline]
    fn read(&self, column: &[f32], row: usize, empty: f32, past_end: f32) -> f32 {
        match column.get(row) {
            Some(&value) => value,
            None => column.last().map_or(empty, |&last| last + past_end),
        }
    }
}

/// Builds the scanline table for one triangle.
///
/// Each of the edges `v0→v1`, `v1→v2`, `v2→v0` is walked from its upper
/// vertex (smaller y) toward its lower vertex, one integer row at a time,
/// stepping x and z by their per-row slopes. The lower vertex's row is not
/// included. Edges whose endpoints share a y value are skipped, so the slope
/// division never sees a zero span.
///
/// A triangle spanning more than [`MAX_ROWS`] rows gives an empty table; use
/// [`compute_edge_list_clipped`] to keep only the rows a canvas can show.
pub fn compute_edge_list(polygon: &Polygon) -> EdgeList {
    compute_edge_list_clipped(polygon, i32::MIN..i32::MAX)
}

/// Same as [`compute_edge_list`], restricted to the rows in `rows`.
///
/// Rows inside the range hold the same samples the full table would; edges
/// entering the range part way down start at their interpolated position.
pub fn compute_edge_list_clipped(polygon: &Polygon, rows: Range<i32>) -> EdgeList {
    let vertices = polygon.vertices();
    let min_y = vertices[0].y.min(vertices[1].y).min(vertices[2].y);
    let max_y = vertices[0].y.max(vertices[1].y).max(vertices[2].y);
    let start_y = (min_y as i32).max(rows.start);
    let end_y = (max_y as i32).min(rows.end).max(start_y);

    let height = i64::from(end_y) - i64::from(start_y);
    if height > MAX_ROWS {
        log::debug!("triangle spans {} rows, skipping", height);
        return EdgeList::new(start_y, start_y);
    }

    let mut edges = EdgeList::new(start_y, end_y);

    for i in 0..3 {
        let a = vertices[i];
        let b = vertices[(i + 1) % 3];

        if a.y == b.y {
            continue;
        }
        let (up, down) = if a.y < b.y { (a, b) } else { (b, a) };

        let span = down.y - up.y;
        let dx = (down.x - up.x) / span;
        let dz = (down.z - up.z) / span;

        let top = up.y as i32;
        let first = top.max(start_y);
        let last = (down.y as i32).min(end_y);

        let mut x = up.x;
        let mut z = up.z;
        if first > top {
            let skipped = (i64::from(first) - i64::from(top)) as f32;
            x += dx * skipped;
            z += dz * skipped;
        }
        for y in first..last {
            edges.add_row((i64::from(y) - i64::from(start_y)) as usize, x, z);
            x += dx;
            z += dz;
        }
    }

    edges
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors::Color;
    use crate::math::vec3::Vec3;
    use approx::assert_relative_eq;

    fn polygon(points: [(f32, f32, f32); 3]) -> Polygon {
        let [a, b, c] = points.map(|(x, y, z)| Vec3::new(x, y, z));
        Polygon::new(a, b, c, Color::grey(200))
    }

    fn assert_ordered_rows(edges: &EdgeList) {
        for row in 0..edges.len() {
            assert!(
                edges.left_x(row) <= edges.right_x(row),
                "row {row}: left {} > right {}",
                edges.left_x(row),
                edges.right_x(row)
            );
        }
    }

    #[test]
    fn test_new_initializes_sentinels() {
        let edges = EdgeList::new(2, 5);
        assert_eq!(edges.len(), 3);
        for row in 0..3 {
            assert_eq!(edges.left_x(row), f32::INFINITY);
            assert_eq!(edges.right_x(row), f32::NEG_INFINITY);
            assert_eq!(edges.left_z(row), f32::INFINITY);
            assert_eq!(edges.right_z(row), f32::INFINITY);
        }
    }

    #[test]
    fn test_add_row_keeps_extremes() {
        let mut edges = EdgeList::new(0, 1);
        edges.add_row(0, 5.0, 1.0);
        edges.add_row(0, 2.0, 2.0);
        edges.add_row(0, 9.0, 3.0);
        edges.add_row(0, 4.0, 4.0);

        assert_eq!(edges.left_x(0), 2.0);
        assert_eq!(edges.left_z(0), 2.0);
        assert_eq!(edges.right_x(0), 9.0);
        assert_eq!(edges.right_z(0), 3.0);
    }

    #[test]
    fn test_add_row_later_sample_wins_ties() {
        let mut edges = EdgeList::new(0, 1);
        edges.add_row(0, 3.0, 1.0);
        edges.add_row(0, 3.0, 7.0);

        assert_eq!(edges.left_z(0), 7.0);
        assert_eq!(edges.right_z(0), 7.0);
    }

    #[test]
    fn test_add_row_out_of_range_is_ignored() {
        let mut edges = EdgeList::new(0, 2);
        edges.add_row(2, 1.0, 1.0);
        edges.add_row(100, 1.0, 1.0);
        assert_eq!(edges.left_x(1), f32::INFINITY);
    }

    #[test]
    fn test_accessors_past_end_use_boundary_policy() {
        let mut edges = EdgeList::new(10, 12);
        edges.add_row(1, 3.0, 0.5);
        edges.add_row(1, 8.0, 0.25);

        assert_eq!(edges.left_x(2), 3.0);
        assert_eq!(edges.right_x(2), 7.0);
        assert_eq!(edges.left_z(2), 1.5);
        assert_eq!(edges.right_z(2), 0.25);
        assert_eq!(edges.right_x(50), 7.0);
    }

    #[test]
    fn test_empty_table_accessors_return_sentinels() {
        let edges = EdgeList::new(4, 4);
        assert!(edges.is_empty());
        assert_eq!(edges.left_x(0), f32::INFINITY);
        assert_eq!(edges.right_x(0), f32::NEG_INFINITY);
        assert_eq!(edges.left_z(0), f32::INFINITY);
        assert_eq!(edges.right_z(0), f32::INFINITY);
    }

    #[test]
    fn test_inverted_bounds_give_empty_table() {
        let edges = EdgeList::new(5, 2);
        assert!(edges.is_empty());
        assert_eq!(edges.end_y(), 5);
    }

    #[test]
    fn test_right_triangle_spans() {
        let edges = compute_edge_list(&polygon([(0.0, 0.0, 5.0), (0.0, 4.0, 5.0), (4.0, 0.0, 5.0)]));

        assert_eq!(edges.start_y(), 0);
        assert_eq!(edges.end_y(), 4);
        assert_eq!(edges.len(), 4);
        for row in 0..4 {
            assert_relative_eq!(edges.left_x(row), 0.0);
            assert_relative_eq!(edges.right_x(row), 4.0 - row as f32);
            assert_relative_eq!(edges.left_z(row), 5.0);
            assert_relative_eq!(edges.right_z(row), 5.0);
        }
    }

    #[test]
    fn test_depth_is_interpolated_along_edges() {
        let edges = compute_edge_list(&polygon([(0.0, 0.0, 0.0), (8.0, 4.0, 8.0), (0.0, 4.0, 4.0)]));

        assert_eq!(edges.len(), 4);
        for row in 0..4 {
            let y = row as f32;
            assert_relative_eq!(edges.left_x(row), 0.0);
            assert_relative_eq!(edges.left_z(row), y);
            assert_relative_eq!(edges.right_x(row), 2.0 * y);
            assert_relative_eq!(edges.right_z(row), 2.0 * y);
        }
    }

    #[test]
    fn test_general_triangles_fill_every_row() {
        let triangles = [
            [(10.5, 3.2, 1.0), (40.0, 27.9, 2.0), (2.0, 51.7, 3.0)],
            [(100.0, 0.0, 0.0), (0.0, 10.0, 0.0), (57.0, 99.5, 0.0)],
            [(-20.0, -30.5, 4.0), (15.0, 7.0, -2.0), (3.0, 60.0, 9.0)],
            [(0.0, 0.0, 0.0), (1.0, 200.0, 0.0), (2.0, 100.0, 0.0)],
        ];

        for points in triangles {
            let edges = compute_edge_list(&polygon(points));
            assert_eq!(edges.len() as i32, edges.end_y() - edges.start_y());
            assert_ordered_rows(&edges);
        }
    }

    #[test]
    fn test_horizontal_edge_contributes_no_rows() {
        // Flat top: the v0→v1 edge is horizontal, the other two cover every row
        let edges = compute_edge_list(&polygon([(0.0, 0.0, 1.0), (6.0, 0.0, 1.0), (3.0, 6.0, 1.0)]));

        assert_eq!(edges.len(), 6);
        assert_ordered_rows(&edges);
        assert_relative_eq!(edges.left_x(0), 0.0);
        assert_relative_eq!(edges.right_x(0), 6.0);
        assert_relative_eq!(edges.left_x(3), 1.5);
        assert_relative_eq!(edges.right_x(3), 4.5);
    }

    #[test]
    fn test_fully_horizontal_triangle_is_empty() {
        let edges = compute_edge_list(&polygon([(0.0, 2.0, 1.0), (6.0, 2.0, 1.0), (3.0, 2.0, 1.0)]));
        assert!(edges.is_empty());
        assert_eq!(edges.start_y(), 2);
        assert_eq!(edges.end_y(), 2);
    }

    #[test]
    fn test_clipped_rows_match_full_table() {
        let p = polygon([(10.5, -3.2, 1.0), (40.0, 27.9, 2.0), (2.0, 51.7, 3.0)]);
        let full = compute_edge_list(&p);
        let clipped = compute_edge_list_clipped(&p, 0..20);

        assert_eq!(clipped.start_y(), 0);
        assert_eq!(clipped.end_y(), 20);
        for row in 0..20 {
            let full_row = (row as i32 - full.start_y()) as usize;
            assert_relative_eq!(clipped.left_x(row), full.left_x(full_row), epsilon = 1e-3);
            assert_relative_eq!(clipped.right_x(row), full.right_x(full_row), epsilon = 1e-3);
            assert_relative_eq!(clipped.left_z(row), full.left_z(full_row), epsilon = 1e-3);
            assert_relative_eq!(clipped.right_z(row), full.right_z(full_row), epsilon = 1e-3);
        }
    }

    #[test]
    fn test_clipped_outside_range_is_empty() {
        let p = polygon([(0.0, 0.0, 1.0), (0.0, 4.0, 1.0), (4.0, 0.0, 1.0)]);
        assert!(compute_edge_list_clipped(&p, 10..20).is_empty());
        assert!(compute_edge_list_clipped(&p, -8..-2).is_empty());
    }

    #[test]
    fn test_span_beyond_i32_does_not_overflow() {
        let p = polygon([(0.0, -2e9, 1.0), (0.0, 2e9, 1.0), (5.0, 0.0, 1.0)]);

        let full = compute_edge_list(&p);
        assert!(full.is_empty());

        let clipped = compute_edge_list_clipped(&p, 0..10);
        assert_eq!(clipped.len(), 10);
        assert_ordered_rows(&clipped);
        assert_relative_eq!(clipped.left_x(3), 0.0);
        assert_relative_eq!(clipped.right_x(3), 5.0, epsilon = 1e-3);
    }

    #[test]
    fn test_saturated_bounds_give_empty_table() {
        let edges = EdgeList::new(i32::MIN, i32::MIN);
        assert!(edges.is_empty());
        let p = polygon([(0.0, -1e30, 1.0), (0.0, 1e30, 1.0), (5.0, 0.0, 1.0)]);
        assert!(compute_edge_list(&p).is_empty());
    }

    #[test]
    fn test_sub_row_triangle_is_empty() {
        let edges = compute_edge_list(&polygon([(0.0, 2.1, 1.0), (6.0, 2.4, 1.0), (3.0, 2.9, 1.0)]));
        assert!(edges.is_empty());
    }
}
