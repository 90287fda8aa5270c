//! Rasterization: visibility classification, scanline triangle fill and
//! fixed-point line drawing into a caller-owned pixel buffer.

pub mod culling;
pub mod framebuffer;
pub mod line;
pub mod renderer;
pub mod scanline;

pub use framebuffer::FrameBuffer;
pub use renderer::Renderer;

/// Render-target dimensions and clip configuration, passed explicitly into
/// every scan/clip routine so the rasterizer works at any resolution.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    /// Target width in pixels.
    pub width: u32,
    /// Target height in pixels.
    pub height: u32,
    /// Inset, in pixels, of the line-clip rectangle from the buffer edges.
    /// Guards against corner overflow from fixed-point slop in the line
    /// stepping phase.
    pub clip_margin: f32,
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            clip_margin: 1.0,
        }
    }

    pub fn with_clip_margin(mut self, clip_margin: f32) -> Self {
        self.clip_margin = clip_margin;
        self
    }
}
