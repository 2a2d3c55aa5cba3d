//! Owned color and depth grids for one frame.
//!
//! Both grids share the same `width * height` row-major layout. The depth grid
//! stores the z value of the nearest surface written so far; smaller z is
//! nearer to the viewer, and `+inf` means nothing has been drawn.

use crate::colors::Color;

pub struct FrameBuffer {
    color_buffer: Vec<Color>,
    depth_buffer: Vec<f32>,
    width: u32,
    height: u32,
}

impl FrameBuffer {
    /// Creates a frame cleared to `background` with an empty depth grid.
    pub fn new(width: u32, height: u32, background: Color) -> Self {
        let size = pixel_count(width, height);
        Self {
            color_buffer: vec![background; size],
            depth_buffer: vec![f32::INFINITY; size],
            width,
            height,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Resets every pixel to `background` and every depth to `+inf`.
    pub fn clear(&mut self, background: Color) {
        self.color_buffer.fill(background);
        self.depth_buffer.fill(f32::INFINITY);
    }

    #[inline]
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && i64::from(x) < i64::from(self.width) && y >= 0 && i64::from(y) < i64::from(self.height)
    }

    #[inline]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if self.contains(x, y) {
            Some(y as usize * self.width as usize + x as usize)
        } else {
            None
        }
    }

    /// Set a pixel at (x, y) with depth testing.
    ///
    /// The pixel is only written if `depth` is strictly less than the stored
    /// depth, so the first surface drawn wins exact ties. Out-of-bounds
    /// coordinates are ignored. Returns whether the pixel was written.
    #[inline]
    pub fn set_pixel_with_depth(&mut self, x: i32, y: i32, depth: f32, color: Color) -> bool {
        match self.index(x, y) {
            Some(idx) if depth < self.depth_buffer[idx] => {
                self.depth_buffer[idx] = depth;
                self.color_buffer[idx] = color;
                true
            }
            _ => false,
        }
    }

    /// Get the color at (x, y), or None if out of bounds.
    #[inline]
    pub fn get_pixel(&self, x: i32, y: i32) -> Option<Color> {
        self.index(x, y).map(|idx| self.color_buffer[idx])
    }

    /// Get the stored depth at (x, y), or None if out of bounds.
    #[inline]
    pub fn get_depth(&self, x: i32, y: i32) -> Option<f32> {
        self.index(x, y).map(|idx| self.depth_buffer[idx])
    }

    /// Row-major color grid.
    pub fn colors(&self) -> &[Color] {
        &self.color_buffer
    }

    /// The color grid as ARGB8888 bytes in native byte order, ready for a
    /// streaming texture.
    pub fn to_argb_bytes(&self) -> Vec<u8> {
        self.color_buffer
            .iter()
            .flat_map(|c| c.to_argb().to_ne_bytes())
            .collect()
    }
}

/// Number of pixels in a `width x height` grid, computed without `u32`
/// overflow.
#[inline]
fn pixel_count(width: u32, height: u32) -> usize {
    width as usize * height as usize
}
