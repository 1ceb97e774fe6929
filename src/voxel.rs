//! # Voxel Module
//!
//! Pure face-vertex generation for one cube. A [`Voxel`] knows its corner
//! position, edge length, and texture-atlas tile, and can produce the four
//! vertices of any cardinal face. It has no awareness of neighbors; the
//! chunk mesher decides *which* faces to emit.
//!
//! The cube follows the corner convention: the voxel occupies
//! `[position, position + size)` on every axis. Each face's vertices are
//! wound so that the triangles `(0,1,2)` and `(2,3,0)` face outward.

use cgmath::Point3;

use crate::block::block_side::BlockSide;
use crate::vertex::Vertex;

/// Tiles per row/column of the texture atlas.
const ATLAS_TILES: u32 = 16;

/// A unit cube positioned in world space with a texture-atlas tile.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Voxel {
    position: Point3<f32>,
    size: f32,
    atlas_tile: (u32, u32),
}

impl Voxel {
    /// Creates a voxel at a world-space corner position.
    ///
    /// # Arguments
    /// * `position` - The minimum corner of the cube
    /// * `size` - Edge length in world units
    /// * `atlas_tile` - The `(column, row)` atlas tile for every face
    pub fn new(position: Point3<f32>, size: f32, atlas_tile: (u32, u32)) -> Self {
        Voxel {
            position,
            size,
            atlas_tile,
        }
    }

    /// The minimum corner of the cube.
    pub fn position(&self) -> Point3<f32> {
        self.position
    }

    /// UV bounds `(u0, v0, u1, v1)` of this voxel's atlas tile.
    fn texture_coordinates(&self) -> (f32, f32, f32, f32) {
        let tile = 1.0 / ATLAS_TILES as f32;
        let (x, y) = self.atlas_tile;
        let u0 = x as f32 * tile;
        let v0 = y as f32 * tile;
        (u0, v0, u0 + tile, v0 + tile)
    }

    /// The four vertices of one face, in the fixed outward winding.
    pub fn face_vertices(&self, side: BlockSide) -> [Vertex; 4] {
        match side {
            BlockSide::FRONT => self.front_vertices(),
            BlockSide::BACK => self.back_vertices(),
            BlockSide::LEFT => self.left_vertices(),
            BlockSide::RIGHT => self.right_vertices(),
            BlockSide::TOP => self.top_vertices(),
            BlockSide::BOTTOM => self.bottom_vertices(),
        }
    }

    /// Vertices of the front face (normal `+Z`).
    pub fn front_vertices(&self) -> [Vertex; 4] {
        let Point3 { x, y, z } = self.position;
        let w = self.size;
        let (u0, v0, u1, v1) = self.texture_coordinates();
        let n = BlockSide::FRONT.normal();
        [
            Vertex::new(Point3::new(x, y + w, z + w), u0, v1, n),
            Vertex::new(Point3::new(x + w, y + w, z + w), u1, v1, n),
            Vertex::new(Point3::new(x + w, y, z + w), u1, v0, n),
            Vertex::new(Point3::new(x, y, z + w), u0, v0, n),
        ]
    }

    /// Vertices of the back face (normal `-Z`).
    pub fn back_vertices(&self) -> [Vertex; 4] {
        let Point3 { x, y, z } = self.position;
        let w = self.size;
        let (u0, v0, u1, v1) = self.texture_coordinates();
        let n = BlockSide::BACK.normal();
        [
            Vertex::new(Point3::new(x + w, y + w, z), u0, v1, n),
            Vertex::new(Point3::new(x, y + w, z), u1, v1, n),
            Vertex::new(Point3::new(x, y, z), u1, v0, n),
            Vertex::new(Point3::new(x + w, y, z), u0, v0, n),
        ]
    }

    /// Vertices of the left face (normal `-X`).
    pub fn left_vertices(&self) -> [Vertex; 4] {
        let Point3 { x, y, z } = self.position;
        let w = self.size;
        let (u0, v0, u1, v1) = self.texture_coordinates();
        let n = BlockSide::LEFT.normal();
        [
            Vertex::new(Point3::new(x, y + w, z), u0, v1, n),
            Vertex::new(Point3::new(x, y + w, z + w), u1, v1, n),
            Vertex::new(Point3::new(x, y, z + w), u1, v0, n),
            Vertex::new(Point3::new(x, y, z), u0, v0, n),
        ]
    }

    /// Vertices of the right face (normal `+X`).
    pub fn right_vertices(&self) -> [Vertex; 4] {
        let Point3 { x, y, z } = self.position;
        let w = self.size;
        let (u0, v0, u1, v1) = self.texture_coordinates();
        let n = BlockSide::RIGHT.normal();
        [
            Vertex::new(Point3::new(x + w, y + w, z + w), u0, v1, n),
            Vertex::new(Point3::new(x + w, y + w, z), u1, v1, n),
            Vertex::new(Point3::new(x + w, y, z), u1, v0, n),
            Vertex::new(Point3::new(x + w, y, z + w), u0, v0, n),
        ]
    }

    /// Vertices of the top face (normal `+Y`).
    pub fn top_vertices(&self) -> [Vertex; 4] {
        let Point3 { x, y, z } = self.position;
        let w = self.size;
        let (u0, v0, u1, v1) = self.texture_coordinates();
        let n = BlockSide::TOP.normal();
        [
            Vertex::new(Point3::new(x, y + w, z), u0, v1, n),
            Vertex::new(Point3::new(x + w, y + w, z), u1, v1, n),
            Vertex::new(Point3::new(x + w, y + w, z + w), u1, v0, n),
            Vertex::new(Point3::new(x, y + w, z + w), u0, v0, n),
        ]
    }

    /// Vertices of the bottom face (normal `-Y`).
    pub fn bottom_vertices(&self) -> [Vertex; 4] {
        let Point3 { x, y, z } = self.position;
        let w = self.size;
        let (u0, v0, u1, v1) = self.texture_coordinates();
        let n = BlockSide::BOTTOM.normal();
        [
            Vertex::new(Point3::new(x, y, z + w), u0, v1, n),
            Vertex::new(Point3::new(x + w, y, z + w), u1, v1, n),
            Vertex::new(Point3::new(x + w, y, z), u1, v0, n),
            Vertex::new(Point3::new(x, y, z), u0, v0, n),
        ]
    }
}
