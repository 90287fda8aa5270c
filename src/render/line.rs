//! Screen-space line clipping and fixed-point line drawing.
//!
//! Lines are first clipped with the Cohen-Sutherland algorithm against a
//! rectangle inset from the buffer edges by the viewport's clip margin,
//! then stepped along their dominant axis accumulating the minor
//! coordinate in 16.16 fixed point. Any residual out-of-bounds plots
//! after clipping are dropped by the per-pixel bounds check.

use super::framebuffer::FrameBuffer;
use super::Viewport;
use crate::math::vec2::Vec2;

const OUT_X_LO: u8 = 1;
const OUT_X_HI: u8 = 2;
const OUT_Y_LO: u8 = 4;
const OUT_Y_HI: u8 = 8;

struct ClipRect {
    x0: f32,
    y0: f32,
    x1: f32,
    y1: f32,
}

impl ClipRect {
    fn new(viewport: &Viewport) -> Self {
        let margin = viewport.clip_margin;
        Self {
            x0: margin,
            y0: margin,
            x1: (viewport.width as f32 - 1.0) - margin,
            y1: (viewport.height as f32 - 1.0) - margin,
        }
    }

    fn outcode(&self, p: Vec2) -> u8 {
        let mut code = 0;
        if p.x < self.x0 {
            code |= OUT_X_LO;
        }
        if p.x > self.x1 {
            code |= OUT_X_HI;
        }
        if p.y < self.y0 {
            code |= OUT_Y_LO;
        }
        if p.y > self.y1 {
            code |= OUT_Y_HI;
        }
        code
    }
}

/// Clips the segment `a`-`b` against the viewport's inset clip rectangle.
///
/// Returns the clipped endpoints, or `None` when the segment lies
/// entirely outside the rectangle. Endpoints are iteratively projected
/// onto whichever boundary they violate, x-axis boundaries first.
pub fn clip_line(mut a: Vec2, mut b: Vec2, viewport: &Viewport) -> Option<(Vec2, Vec2)> {
    let rect = ClipRect::new(viewport);

    loop {
        let ca = rect.outcode(a);
        let cb = rect.outcode(b);

        if ca | cb == 0 {
            // Both endpoints inside.
            return Some((a, b));
        }
        if ca & cb != 0 {
            // Entirely outside one boundary.
            return None;
        }

        let code = if ca != 0 { ca } else { cb };
        let dx = b.x - a.x;
        let dy = b.y - a.y;

        // The shared-bit reject above guarantees the relevant delta is
        // non-zero before each division here.
        let p = if code & OUT_X_LO != 0 {
            Vec2::new(rect.x0, a.y + (rect.x0 - a.x) * dy / dx)
        } else if code & OUT_X_HI != 0 {
            Vec2::new(rect.x1, a.y + (rect.x1 - a.x) * dy / dx)
        } else if code & OUT_Y_LO != 0 {
            Vec2::new(a.x + (rect.y0 - a.y) * dx / dy, rect.y0)
        } else {
            Vec2::new(a.x + (rect.y1 - a.y) * dx / dy, rect.y1)
        };

        if ca != 0 {
            a = p;
        } else {
            b = p;
        }
    }
}

/// Draws the segment `a`-`b`, stepping one pixel at a time along the
/// dominant axis and accumulating the minor coordinate in 16.16 fixed
/// point.
///
/// Endpoints are sorted ascending along the dominant axis; the start is
/// snapped to the next pixel boundary with a matching correction to the
/// accumulator so the first sample sits on the true line. The final
/// endpoint is not drawn (half-open interval). Plots outside the buffer
/// are silently dropped.
pub fn draw_line(fb: &mut FrameBuffer, mut a: Vec2, mut b: Vec2, color: u32) {
    let dx = b.x - a.x;
    let dy = b.y - a.y;

    if dx.abs() > dy.abs() {
        if b.x < a.x {
            std::mem::swap(&mut a, &mut b);
        }
        let slope = (b.y - a.y) / (b.x - a.x);

        let start = a.x.ceil();
        let mut y = ((a.y + (start - a.x) * slope) * 65536.0) as i32;
        let step = (slope * 65536.0) as i32;

        for x in start as i32..b.x.ceil() as i32 {
            fb.set_pixel(x, y >> 16, color);
            y += step;
        }
    } else {
        if b.y < a.y {
            std::mem::swap(&mut a, &mut b);
        }
        if b.y == a.y {
            // Zero-length segment.
            return;
        }
        let slope = (b.x - a.x) / (b.y - a.y);

        let start = a.y.ceil();
        let mut x = ((a.x + (start - a.y) * slope) * 65536.0) as i32;
        let step = (slope * 65536.0) as i32;

        for y in start as i32..b.y.ceil() as i32 {
            fb.set_pixel(x >> 16, y, color);
            x += step;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clip_is_a_noop_for_inside_segments() {
        let viewport = Viewport::new(512, 512);
        let a = Vec2::new(10.0, 10.0);
        let b = Vec2::new(100.0, 200.0);
        assert_eq!(clip_line(a, b, &viewport), Some((a, b)));
    }

    #[test]
    fn clip_rejects_fully_outside_segments() {
        let viewport = Viewport::new(512, 512);
        assert!(clip_line(Vec2::new(-50.0, -50.0), Vec2::new(-10.0, -20.0), &viewport).is_none());
        assert!(clip_line(Vec2::new(600.0, 10.0), Vec2::new(700.0, 400.0), &viewport).is_none());
    }

    #[test]
    fn clip_rejects_corner_miss_with_mixed_outcodes() {
        // Crosses x-low and y-low regions but never enters the rectangle.
        let viewport = Viewport::new(512, 512);
        assert!(clip_line(Vec2::new(-10.0, 4.0), Vec2::new(4.0, -10.0), &viewport).is_none());
    }

    #[test]
    fn clip_projects_onto_violated_boundary() {
        let viewport = Viewport::new(512, 512);
        let (a, b) = clip_line(Vec2::new(-9.0, 100.0), Vec2::new(100.0, 100.0), &viewport)
            .expect("segment crosses the rectangle");
        assert_eq!(a, Vec2::new(1.0, 100.0)); // snapped to the inset left edge
        assert_eq!(b, Vec2::new(100.0, 100.0));

        // Clipping an already clipped segment changes nothing.
        assert_eq!(clip_line(a, b, &viewport), Some((a, b)));
    }

    #[test]
    fn horizontal_line_is_half_open() {
        let mut pixels = vec![0u32; 512 * 512];
        let mut fb = FrameBuffer::new_packed(&mut pixels, 512, 512);
        draw_line(&mut fb, Vec2::new(0.0, 0.0), Vec2::new(10.0, 0.0), 0x123456);

        for x in 0..10usize {
            assert_eq!(pixels[x], 0x123456, "pixel ({x}, 0)");
        }
        assert_eq!(pixels[10], 0);
        assert_eq!(pixels.iter().filter(|&&p| p != 0).count(), 10);
    }

    #[test]
    fn vertical_line_is_half_open() {
        let mut pixels = vec![0u32; 16 * 16];
        let mut fb = FrameBuffer::new_packed(&mut pixels, 16, 16);
        draw_line(&mut fb, Vec2::new(5.0, 2.0), Vec2::new(5.0, 7.0), 0xFF);

        for y in 2..7usize {
            assert_eq!(pixels[y * 16 + 5], 0xFF, "pixel (5, {y})");
        }
        assert_eq!(pixels[7 * 16 + 5], 0);
    }

    #[test]
    fn endpoint_order_does_not_matter() {
        let mut forward = vec![0u32; 32 * 32];
        let mut reverse = vec![0u32; 32 * 32];
        {
            let mut fb = FrameBuffer::new_packed(&mut forward, 32, 32);
            draw_line(&mut fb, Vec2::new(2.0, 3.0), Vec2::new(20.0, 9.0), 0xAA);
        }
        {
            let mut fb = FrameBuffer::new_packed(&mut reverse, 32, 32);
            draw_line(&mut fb, Vec2::new(20.0, 9.0), Vec2::new(2.0, 3.0), 0xAA);
        }
        assert_eq!(forward, reverse);
    }

    #[test]
    fn fractional_start_is_snapped_with_accumulator_correction() {
        // Slope-0.5 line from (0.5, 0.0): the first sample lands on
        // column 1 at the line's true y of 0.25, which floors to row 0.
        let mut pixels = vec![0u32; 8 * 8];
        let mut fb = FrameBuffer::new_packed(&mut pixels, 8, 8);
        draw_line(&mut fb, Vec2::new(0.5, 0.0), Vec2::new(4.5, 2.0), 0xBB);

        assert_eq!(pixels[1], 0xBB); // (1, 0)
        assert_eq!(pixels[2], 0xBB); // (2, 0)
        assert_eq!(pixels[8 + 3], 0xBB); // (3, 1)
        assert_eq!(pixels[8 + 4], 0xBB); // (4, 1)
        assert_eq!(pixels.iter().filter(|&&p| p != 0).count(), 4);
    }

    #[test]
    fn out_of_bounds_plots_are_dropped() {
        let mut pixels = vec![0u32; 8 * 8];
        let mut fb = FrameBuffer::new_packed(&mut pixels, 8, 8);
        // Unclipped line running past the right edge.
        draw_line(&mut fb, Vec2::new(4.0, 4.0), Vec2::new(20.0, 4.0), 0xCC);
        assert_eq!(pixels.iter().filter(|&&p| p != 0).count(), 4);
    }
}
