//! Scanline triangle rasterization.
//!
//! Triangles are filled one horizontal row at a time. Two edge walks
//! produce per-row left and right x bounds (the span tables), then each
//! row is filled between its bounds. X positions along an edge accumulate
//! in 16.16 fixed point so the inner loops avoid per-row floating-point
//! division.
//!
//! The filler assumes screen-space vertices; rows and columns outside the
//! viewport are clamped rather than clipped, so partially off-screen
//! triangles render their visible portion.

use super::framebuffer::FrameBuffer;
use super::Viewport;
use crate::math::vec2::Vec2;

/// Which bound of a span an edge walk produces.
///
/// Both bounds are clamped into the viewport column range, so a row
/// whose span overhangs either edge pins to the nearest column and
/// `lo <= hi` still holds there; the two roles are otherwise identical
/// walks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SpanBound {
    /// Left edge: writes the first column of each row's span.
    Lo,
    /// Right edge: writes the end column of each row's span.
    Hi,
}

/// Walks one triangle edge and records per-row x bounds into `span`.
///
/// `a` must be the endpoint with the smaller y. Edges outside the visible
/// row range and horizontal edges contribute nothing. The walk starts at
/// the first whole scanline at or below `a.y` (or at row 0 when the edge
/// starts above the viewport), with x adjusted along the slope to match.
pub fn scan_convert(mut a: Vec2, b: Vec2, bound: SpanBound, viewport: &Viewport, span: &mut [i32]) {
    debug_assert!(span.len() >= viewport.height as usize);

    let max_y = viewport.height as i32 - 1;

    // Edge entirely above or below the visible rows.
    if b.y < 0.0 || a.y > max_y as f32 {
        return;
    }

    // Horizontal (or unsorted) edges contribute no span.
    if b.y <= a.y {
        return;
    }
    let dx = (b.x - a.x) / (b.y - a.y);

    if a.y < 0.0 {
        // Clip the start to the top of the viewport.
        a.x += dx * (0.0 - a.y);
        a.y = 0.0;
    } else {
        // Snap the start to the next whole scanline.
        let ceil_y = a.y.ceil();
        a.x += dx * (ceil_y - a.y);
        a.y = ceil_y;
    }

    let y0 = (a.y as i32).max(0);
    let y1 = (b.y as i32).min(max_y);

    let mut x = (a.x * 65536.0) as i32;
    let step = (dx * 65536.0) as i32;

    let max_x = viewport.width as i32 - 1;
    // Both roles share the clamp range; the enum only names which table
    // the caller hands in.
    match bound {
        SpanBound::Lo | SpanBound::Hi => {
            for y in y0..=y1 {
                span[y as usize] = (x >> 16).clamp(0, max_x);
                x += step;
            }
        }
    }
}

/// Fills a screen-space triangle with a solid color.
///
/// Vertices are sorted by y, the long edge (top to bottom vertex) feeds
/// one span table and the two short edges the other, chosen by which side
/// the middle vertex falls on so that `lo[row] <= hi[row]` throughout.
/// Each covered row is then filled over the half-open run `[lo, hi)`.
///
/// Span tables are sized to the viewport height per call; there is no
/// fixed ceiling on the target resolution.
///
/// Returns false (drawing nothing) for degenerate, collinear input.
pub fn fill_triangle(
    fb: &mut FrameBuffer,
    viewport: &Viewport,
    mut v: [Vec2; 3],
    color: u32,
) -> bool {
    // Sort vertices: top (0), mid (1), bottom (2).
    if v[1].y < v[0].y {
        v.swap(1, 0);
    }
    if v[2].y < v[0].y {
        v.swap(2, 0);
    }
    if v[2].y < v[1].y {
        v.swap(2, 1);
    }

    // Which side of the long edge does the middle vertex fall on?
    let nx = v[2].y - v[0].y;
    let ny = v[0].x - v[2].x;
    let d1 = v[0].x * nx + v[0].y * ny;
    let d2 = v[1].x * nx + v[1].y * ny;

    if d1 == d2 {
        // Collinear, zero-area triangle.
        return false;
    }

    let rows = viewport.height as usize;
    let mut lo = vec![0i32; rows];
    let mut hi = vec![0i32; rows];

    // Long edge on one side, the two short edges on the other.
    if d1 > d2 {
        scan_convert(v[0], v[2], SpanBound::Hi, viewport, &mut hi);
        scan_convert(v[0], v[1], SpanBound::Lo, viewport, &mut lo);
        scan_convert(v[1], v[2], SpanBound::Lo, viewport, &mut lo);
    } else {
        scan_convert(v[0], v[2], SpanBound::Lo, viewport, &mut lo);
        scan_convert(v[0], v[1], SpanBound::Hi, viewport, &mut hi);
        scan_convert(v[1], v[2], SpanBound::Hi, viewport, &mut hi);
    }

    let y0 = (v[0].y.ceil() as i32).max(0);
    let y1 = (v[2].y as i32).min(viewport.height as i32 - 1);

    for y in y0..=y1 {
        fb.fill_span(y, lo[y as usize], hi[y as usize], color);
    }

    true
}
