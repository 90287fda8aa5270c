//! Triangle visibility classification.
//!
//! Projected triangles are classified in normalized device coordinates
//! mapped to the unit square `[0,1] x [0,1]`. Classification only decides
//! whether a triangle can touch the render target; it performs no polygon
//! clipping. Triangles that pass may still extend past the square and are
//! clamped per scanline by the filler.

use crate::math::vec2::Vec2;

const OUT_X_LO: u8 = 1;
const OUT_X_HI: u8 = 2;
const OUT_Y_LO: u8 = 4;
const OUT_Y_HI: u8 = 8;

/// Returns true if a triangle is backfacing.
///
/// 2D signed-area sign test on screen-space positions: true when the
/// vertices wind clockwise. Both the triangle filler and the wireframe
/// pass consult this single test before rendering.
pub fn is_backface(a: Vec2, b: Vec2, c: Vec2) -> bool {
    let v1 = a.x - b.x;
    let v2 = a.y - b.y;
    let w1 = c.x - b.x;
    let w2 = c.y - b.y;
    (v1 * w2 - v2 * w1) < 0.0
}

/// One bit per violated boundary of the unit square.
fn outcode(p: Vec2) -> u8 {
    let mut code = 0;
    if p.x < 0.0 {
        code |= OUT_X_LO;
    }
    if p.x > 1.0 {
        code |= OUT_X_HI;
    }
    if p.y < 0.0 {
        code |= OUT_Y_LO;
    }
    if p.y > 1.0 {
        code |= OUT_Y_HI;
    }
    code
}

/// The line through two triangle vertices, oriented so the triangle
/// interior lies on the non-`outside` side for front-facing winding.
struct Plane {
    nx: f32,
    ny: f32,
    d: f32,
}

impl Plane {
    fn new(a: Vec2, b: Vec2) -> Self {
        let nx = b.y - a.y;
        let ny = a.x - b.x;
        Self {
            nx,
            ny,
            d: a.x * nx + a.y * ny,
        }
    }

    /// True when `p` lies strictly outside the half-plane that contains
    /// the triangle interior.
    fn outside(&self, p: Vec2) -> bool {
        self.d > p.x * self.nx + p.y * self.ny
    }

    fn separates_square(&self) -> bool {
        const CORNERS: [Vec2; 4] = [
            Vec2::new(0.0, 0.0),
            Vec2::new(1.0, 0.0),
            Vec2::new(0.0, 1.0),
            Vec2::new(1.0, 1.0),
        ];
        CORNERS.iter().all(|&corner| self.outside(corner))
    }
}

/// Returns true if a triangle can intersect the unit square.
///
/// Three-stage rejection: outcode trivial accept/reject, backface
/// rejection, then separating-plane tests on the three edges. A `true`
/// result means visible but possibly in need of clipping.
pub fn tri_visible(a: Vec2, b: Vec2, c: Vec2) -> bool {
    // Cohen-Sutherland style trivial accept/reject.
    let ca = outcode(a);
    let cb = outcode(b);
    let cc = outcode(c);

    if ca | cb | cc == 0 {
        // All vertices inside, no clipping needed.
        return true;
    }
    if ca & cb & cc != 0 {
        // All vertices outside one boundary plane.
        return false;
    }

    if is_backface(a, b, c) {
        return false;
    }

    // Separating-plane rejection: if every corner of the square lies
    // outside one edge's half-plane, the triangle cannot overlap it.
    if Plane::new(a, b).separates_square() {
        return false;
    }
    if Plane::new(b, c).separates_square() {
        return false;
    }
    if Plane::new(c, a).separates_square() {
        return false;
    }

    // In, but needs clipping.
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    // Front-facing triangle inside the square.
    const A: Vec2 = Vec2::new(0.2, 0.2);
    const B: Vec2 = Vec2::new(0.5, 0.8);
    const C: Vec2 = Vec2::new(0.8, 0.3);

    #[test]
    fn backface_invariant_under_cyclic_permutation() {
        let face = is_backface(A, B, C);
        assert_eq!(is_backface(B, C, A), face);
        assert_eq!(is_backface(C, A, B), face);
    }

    #[test]
    fn backface_flips_under_swap() {
        let face = is_backface(A, B, C);
        assert_eq!(is_backface(B, A, C), !face);
        assert_eq!(is_backface(A, C, B), !face);
        assert_eq!(is_backface(C, B, A), !face);
    }

    #[test]
    fn fully_inside_triangle_is_visible() {
        assert!(tri_visible(A, B, C));
    }

    #[test]
    fn backface_rejection_fires_past_trivial_accept() {
        // All outcodes zero: the trivial accept answers before the
        // winding test, whichever way the triangle faces.
        assert!(tri_visible(A, C, B));

        // Mixed outcodes reach the backface stage, which rejects the
        // reversed winding and keeps the forward one.
        let shift = Vec2::new(-0.3, 0.0);
        let (a, b, c) = (A + shift, B + shift, C + shift);
        assert!(!is_backface(a, b, c));
        assert!(tri_visible(a, b, c));
        assert!(!tri_visible(a, c, b));
    }

    #[test]
    fn triangle_outside_one_boundary_is_invisible() {
        let shift = Vec2::new(-2.0, 0.0);
        assert!(!tri_visible(A + shift, B + shift, C + shift));
    }

    #[test]
    fn straddling_triangle_is_visible() {
        // Pokes out of the left edge but overlaps the square.
        let shift = Vec2::new(-0.3, 0.0);
        assert!(tri_visible(A + shift, B + shift, C + shift));
    }

    #[test]
    fn corner_miss_is_rejected_by_separating_plane() {
        // Mixed outcodes (no shared boundary bit), front-facing, but the
        // edge a-b separates the triangle from the square.
        let a = Vec2::new(2.0, 0.5);
        let b = Vec2::new(0.5, 2.0);
        let c = Vec2::new(2.0, 2.0);
        assert!(!is_backface(a, b, c));
        assert_eq!(outcode(a) & outcode(b) & outcode(c), 0);
        assert!(!tri_visible(a, b, c));
    }
}
