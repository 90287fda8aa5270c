//! Frame buffer abstraction for 2D pixel access.
//!
//! Provides a safe view into an externally owned color buffer with
//! bounds-checked access. The renderer never allocates or frees pixel
//! storage; it only writes packed RGB values within bounds.

/// A borrowed view into a packed-RGB color buffer.
///
/// Wraps a 1D slice with width/height/stride metadata to enable safe 2D
/// pixel access. The row stride is given in pixels and may exceed the
/// width for alignment; the origin is the top-left corner. The pixel
/// format is caller-defined: values are written verbatim.
pub struct FrameBuffer<'a> {
    pixels: &'a mut [u32],
    width: u32,
    height: u32,
    stride: u32,
}

impl<'a> FrameBuffer<'a> {
    /// Create a new FrameBuffer view from a pixel slice and dimensions.
    ///
    /// # Panics
    /// Debug builds panic if `stride < width` or the slice is shorter
    /// than `stride * height`.
    pub fn new(pixels: &'a mut [u32], width: u32, height: u32, stride: u32) -> Self {
        debug_assert!(stride >= width, "Row stride smaller than width");
        debug_assert!(
            pixels.len() >= (stride * height) as usize,
            "Pixel buffer too short for dimensions"
        );
        Self {
            pixels,
            width,
            height,
            stride,
        }
    }

    /// View with a stride equal to the width (tightly packed rows).
    pub fn new_packed(pixels: &'a mut [u32], width: u32, height: u32) -> Self {
        Self::new(pixels, width, height, width)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn stride(&self) -> u32 {
        self.stride
    }

    /// Set a pixel at (x, y). Out-of-bounds coordinates are silently
    /// ignored; residual floating-point slop after clipping lands here
    /// rather than being treated as an error.
    #[inline]
    pub fn set_pixel(&mut self, x: i32, y: i32, color: u32) {
        if x >= 0 && x < self.width as i32 && y >= 0 && y < self.height as i32 {
            self.pixels[(y as u32 * self.stride + x as u32) as usize] = color;
        }
    }

    /// Get the color at (x, y), or None if out of bounds.
    #[inline]
    pub fn get_pixel(&self, x: i32, y: i32) -> Option<u32> {
        if x >= 0 && x < self.width as i32 && y >= 0 && y < self.height as i32 {
            Some(self.pixels[(y as u32 * self.stride + x as u32) as usize])
        } else {
            None
        }
    }

    /// Fill the half-open pixel run `[x0, x1)` on row `y`, clamped to the
    /// buffer bounds. Rows outside the buffer are ignored.
    pub fn fill_span(&mut self, y: i32, x0: i32, x1: i32, color: u32) {
        if y < 0 || y >= self.height as i32 {
            return;
        }
        let x0 = x0.max(0) as u32;
        let x1 = (x1.min(self.width as i32)).max(0) as u32;
        if x0 >= x1 {
            return;
        }
        let row = (y as u32 * self.stride) as usize;
        self.pixels[row + x0 as usize..row + x1 as usize].fill(color);
    }

    pub fn clear(&mut self, color: u32) {
        self.pixels.fill(color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_pixel_respects_stride() {
        let mut pixels = vec![0u32; 8 * 4];
        let mut fb = FrameBuffer::new(&mut pixels, 6, 4, 8);
        fb.set_pixel(1, 2, 0xABCDEF);
        assert_eq!(pixels[2 * 8 + 1], 0xABCDEF);
    }

    #[test]
    fn out_of_bounds_writes_are_dropped() {
        let mut pixels = vec![0u32; 4 * 4];
        let mut fb = FrameBuffer::new_packed(&mut pixels, 4, 4);
        fb.set_pixel(-1, 0, 1);
        fb.set_pixel(4, 0, 1);
        fb.set_pixel(0, -1, 1);
        fb.set_pixel(0, 4, 1);
        assert!(pixels.iter().all(|&p| p == 0));
    }

    #[test]
    fn fill_span_is_half_open_and_clamped() {
        let mut pixels = vec![0u32; 8 * 2];
        let mut fb = FrameBuffer::new_packed(&mut pixels, 8, 2);
        fb.fill_span(0, 2, 5, 7);
        fb.fill_span(1, -3, 100, 9);
        fb.fill_span(5, 0, 8, 1); // row out of range
        assert_eq!(&pixels[..8], &[0, 0, 7, 7, 7, 0, 0, 0]);
        assert!(pixels[8..].iter().all(|&p| p == 9));
    }
}
