//! A minimal CPU-based software 3D rasterizer.
//!
//! This crate transforms object-space vertices through a
//! rotate/translate/frustum pipeline and fills the resulting triangles
//! (and their wireframe edges) into a caller-owned 2D pixel buffer. No
//! GPU involvement, no shading, no depth buffer: flat-colored triangles
//! only. Window management and presentation are left to the caller; the
//! demo binary uses SDL2 for both.
//!
//! # Quick Start
//!
//! ```ignore
//! use scanrast::prelude::*;
//!
//! let viewport = Viewport::new(512, 512);
//! let renderer = Renderer::new(viewport);
//! let mut fb = FrameBuffer::new_packed(&mut pixels, 512, 512);
//! renderer.draw(&mut fb, &stages, &vertices, &indices, style);
//! ```

pub mod math;
pub mod mesh;
pub mod render;

// Re-export commonly needed types at crate root for convenience
pub use render::renderer::{DrawStyle, Renderer};
pub use render::{FrameBuffer, Viewport};

/// Prelude module for convenient imports.
///
/// # Example
/// ```ignore
/// use scanrast::prelude::*;
/// ```
pub mod prelude {
    // Math
    pub use crate::math::mat4::Mat4;
    pub use crate::math::vec2::Vec2;
    pub use crate::math::vec3::Vec3;
    pub use crate::math::vec4::Vec4;

    // Rendering
    pub use crate::render::renderer::{DrawStyle, Renderer};
    pub use crate::render::{FrameBuffer, Viewport};
}
