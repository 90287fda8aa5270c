//! Render entry point: transforms vertex batches, classifies visibility
//! and dispatches triangles to the scanline filler and wireframe pass.

use super::{culling, line, scanline, FrameBuffer, Viewport};
use crate::math::mat4::Mat4;
use crate::math::vec2::Vec2;
use crate::math::vec3::Vec3;
use crate::math::vec4::Vec4;

/// Colors used by a [`Renderer::draw`] call.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DrawStyle {
    /// Solid fill color for visible triangles.
    pub fill: u32,
    /// Edge overlay color; `None` skips the wireframe pass.
    pub wireframe: Option<u32>,
}

/// Transforms and rasterizes indexed triangle lists into a pixel buffer.
///
/// Holds no per-frame state: every draw call is a pure function of its
/// inputs and the target buffer, so a frame loop can reuse one renderer
/// for any number of meshes.
pub struct Renderer {
    viewport: Viewport,
}

impl Renderer {
    pub fn new(viewport: Viewport) -> Self {
        Self { viewport }
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Renders an indexed triangle list.
    ///
    /// `stages` are applied to the whole vertex batch in order, each as an
    /// independent matrix transform; rotation, translation and projection
    /// stay un-composed, matching how the matrix builders overwrite rather
    /// than multiply. The last stage is expected to be the projection.
    /// After the perspective divide, triangles are classified against the
    /// unit square and visible ones are filled (and outlined when the
    /// style asks for it).
    ///
    /// Backfacing triangles are always skipped: the winding test gates
    /// both the fill and the wireframe pass, independently of the
    /// viewport classification (whose trivial accept fires before its
    /// own backface stage for fully on-screen triangles).
    ///
    /// `indices` is a flat triangle-vertex index array with stride 3; every
    /// index must be in range for `vertices`. Geometry must lie in front
    /// of the near plane: this renderer classifies and clamps but performs
    /// no polygon clipping.
    pub fn draw(
        &self,
        fb: &mut FrameBuffer,
        stages: &[Mat4],
        vertices: &[Vec3],
        indices: &[u32],
        style: DrawStyle,
    ) {
        debug_assert_eq!(indices.len() % 3, 0);

        let mut front: Vec<Vec4> = vertices.iter().map(|&v| Vec4::from(v)).collect();
        let mut back = vec![Vec4::ZERO; front.len()];
        for stage in stages {
            stage.transform_vec4(&front, &mut back);
            std::mem::swap(&mut front, &mut back);
        }

        // Perspective divide, then map NDC onto the unit square with y
        // flipped for the top-left pixel origin.
        let unit: Vec<Vec2> = front
            .iter()
            .map(|&v| {
                let ndc = v.to_cartesian();
                Vec2::new(ndc.x * 0.5 + 0.5, 0.5 - ndc.y * 0.5)
            })
            .collect();

        let scale = Vec2::new(
            (self.viewport.width - 1) as f32,
            (self.viewport.height - 1) as f32,
        );

        for tri in indices.chunks_exact(3) {
            let a = unit[tri[0] as usize];
            let b = unit[tri[1] as usize];
            let c = unit[tri[2] as usize];

            if culling::is_backface(a, b, c) || !culling::tri_visible(a, b, c) {
                continue;
            }

            let sa = Vec2::new(a.x * scale.x, a.y * scale.y);
            let sb = Vec2::new(b.x * scale.x, b.y * scale.y);
            let sc = Vec2::new(c.x * scale.x, c.y * scale.y);

            scanline::fill_triangle(fb, &self.viewport, [sa, sb, sc], style.fill);

            if let Some(wire) = style.wireframe {
                for (p, q) in [(sa, sb), (sb, sc), (sc, sa)] {
                    if let Some((p, q)) = line::clip_line(p, q, &self.viewport) {
                        line::draw_line(fb, p, q, wire);
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FILL: u32 = 0x00AA00;
    const WIRE: u32 = 0xFFFFFF;

    fn projection() -> Mat4 {
        let mut m = Mat4::new();
        m.frustum(-1.0, 1.0, -1.0, 1.0, 1.0, 100.0);
        m
    }

    fn draw_triangle(vertices: [Vec3; 3]) -> Vec<u32> {
        let viewport = Viewport::new(64, 64);
        let renderer = Renderer::new(viewport);
        let mut pixels = vec![0u32; 64 * 64];
        let mut fb = FrameBuffer::new_packed(&mut pixels, 64, 64);
        renderer.draw(
            &mut fb,
            &[projection()],
            &vertices,
            &[0, 1, 2],
            DrawStyle {
                fill: FILL,
                wireframe: Some(WIRE),
            },
        );
        pixels
    }

    #[test]
    fn front_facing_triangle_is_filled_and_outlined() {
        let pixels = draw_triangle([
            Vec3::new(-0.5, -0.5, -5.0),
            Vec3::new(0.5, -0.5, -5.0),
            Vec3::new(0.0, 0.5, -5.0),
        ]);
        assert!(pixels.iter().any(|&p| p == FILL));
        assert!(pixels.iter().any(|&p| p == WIRE));
    }

    #[test]
    fn backfacing_triangle_is_culled() {
        let pixels = draw_triangle([
            Vec3::new(0.5, -0.5, -5.0),
            Vec3::new(-0.5, -0.5, -5.0),
            Vec3::new(0.0, 0.5, -5.0),
        ]);
        assert!(pixels.iter().all(|&p| p == 0));
    }

    #[test]
    fn offscreen_triangle_draws_nothing() {
        let pixels = draw_triangle([
            Vec3::new(40.0, -0.5, -5.0),
            Vec3::new(41.0, -0.5, -5.0),
            Vec3::new(40.5, 0.5, -5.0),
        ]);
        assert!(pixels.iter().all(|&p| p == 0));
    }

    #[test]
    fn rotate_and_translate_apply_as_separate_stages() {
        let viewport = Viewport::new(64, 64);
        let renderer = Renderer::new(viewport);
        let mut pixels = vec![0u32; 64 * 64];
        let mut fb = FrameBuffer::new_packed(&mut pixels, 64, 64);

        let mut rotation = Mat4::new();
        rotation.rotate(0.0, 0.4, 0.0);
        let mut translation = Mat4::new();
        translation.translate(Vec3::new(0.0, 0.0, -5.0));

        // Triangle at the origin in object space; the translation stage
        // pushes it in front of the near plane.
        let vertices = [
            Vec3::new(-0.5, -0.5, 0.0),
            Vec3::new(0.5, -0.5, 0.0),
            Vec3::new(0.0, 0.5, 0.0),
        ];
        renderer.draw(
            &mut fb,
            &[rotation, translation, projection()],
            &vertices,
            &[0, 1, 2],
            DrawStyle {
                fill: FILL,
                wireframe: None,
            },
        );
        assert!(pixels.iter().any(|&p| p == FILL));
        assert!(pixels.iter().all(|&p| p != WIRE));
    }
}
