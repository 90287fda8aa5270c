//! Built-in cube mesh for the demo binary and benchmarks.
//!
//! Vertex positions and triangle indices are plain const arrays: the
//! renderer only ever borrows them, matching its contract of externally
//! supplied, immutable vertex/index data.

use crate::math::vec3::Vec3;

pub const CUBE_NUM_VERTICES: usize = 8;
pub const CUBE_NUM_TRIANGLES: usize = 12;

pub const CUBE_VERTICES: [Vec3; CUBE_NUM_VERTICES] = [
    Vec3::new(-1.0, -1.0, -1.0),
    Vec3::new(-1.0, 1.0, -1.0),
    Vec3::new(1.0, 1.0, -1.0),
    Vec3::new(1.0, -1.0, -1.0),
    Vec3::new(1.0, 1.0, 1.0),
    Vec3::new(1.0, -1.0, 1.0),
    Vec3::new(-1.0, 1.0, 1.0),
    Vec3::new(-1.0, -1.0, 1.0),
];

/// Flat triangle-vertex indices, stride 3, wound so that outward faces
/// pass the backface test after projection.
pub const CUBE_INDICES: [u32; CUBE_NUM_TRIANGLES * 3] = [
    // Front face
    0, 1, 2, 0, 2, 3, //
    // Right face
    3, 2, 4, 3, 4, 5, //
    // Back face
    5, 4, 6, 5, 6, 7, //
    // Left face
    7, 6, 1, 7, 1, 0, //
    // Top face
    1, 6, 4, 1, 4, 2, //
    // Bottom face
    5, 7, 0, 5, 0, 3, //
];
