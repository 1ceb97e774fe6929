//! # Vertex Module
//!
//! The vertex format shared with the rendering collaborator: position,
//! texture coordinate, and face normal, packed at a fixed 8-float stride.

use cgmath::Point3;

/// Number of floats per vertex in the combined vertex stream.
pub const VERTEX_FLOATS: usize = 8;

/// One vertex of the combined terrain mesh.
///
/// # Memory Layout
/// - Position: `[f32; 3]` (12 bytes)
/// - Texture Coordinates: `[f32; 2]` (8 bytes)
/// - Normal: `[f32; 3]` (12 bytes)
///
/// Total size: 32 bytes. The `#[repr(C)]` layout plus `Pod` lets the manager
/// expose the whole vertex array as one flat `f32` stream without copying
/// field by field.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    /// Position in world space.
    pub position: [f32; 3],
    /// UV texture coordinates into the atlas (normalized 0.0-1.0).
    pub tex_coords: [f32; 2],
    /// Outward face normal.
    pub normal: [f32; 3],
}

impl Vertex {
    /// Creates a new vertex.
    ///
    /// # Arguments
    /// * `position` - World-space position
    /// * `u`, `v` - Atlas texture coordinates
    /// * `normal` - Outward face normal
    pub fn new(position: Point3<f32>, u: f32, v: f32, normal: [f32; 3]) -> Self {
        Vertex {
            position: [position.x, position.y, position.z],
            tex_coords: [u, v],
            normal,
        }
    }

    /// Returns the vertex buffer layout for the render pipeline.
    ///
    /// This is the stride contract agreed with the renderer; the renderer
    /// never re-derives the layout per call.
    ///
    /// # Shader Attributes
    /// - `location = 0`: position (`vec3<f32>`)
    /// - `location = 1`: tex_coords (`vec2<f32>`)
    /// - `location = 2`: normal (`vec3<f32>`)
    pub fn desc<'a>() -> wgpu::VertexBufferLayout<'a> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x3,
                },
                wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 3]>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x2,
                },
                wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 5]>() as wgpu::BufferAddress,
                    shader_location: 2,
                    format: wgpu::VertexFormat::Float32x3,
                },
            ],
        }
    }
}
