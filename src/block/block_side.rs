//! # Block Side Module
//!
//! The six faces of a block, their fixed emission order, and the direction
//! each face looks toward when deciding visibility.

use cgmath::Vector3;

/// The six faces of a voxel block.
///
/// The discriminants fix the face emission order used by the mesher:
/// [FRONT, BACK, LEFT, RIGHT, TOP, BOTTOM]. Index and vertex streams stay in
/// lockstep only because every chunk emits faces in this order.
#[derive(PartialEq, Eq, Hash, Copy, Clone, Debug)]
pub enum BlockSide {
    /// The front face (facing positive Z).
    FRONT = 0,

    /// The back face (facing negative Z).
    BACK = 1,

    /// The left face (facing negative X).
    LEFT = 2,

    /// The right face (facing positive X).
    RIGHT = 3,

    /// The top face (facing positive Y).
    TOP = 4,

    /// The bottom face (facing negative Y).
    BOTTOM = 5,
}

impl BlockSide {
    /// All six faces in emission order.
    pub fn all() -> [BlockSide; 6] {
        [
            BlockSide::FRONT,
            BlockSide::BACK,
            BlockSide::LEFT,
            BlockSide::RIGHT,
            BlockSide::TOP,
            BlockSide::BOTTOM,
        ]
    }

    /// The unit offset to the cell this face borders.
    ///
    /// A face is culled exactly when the cell at `position + direction()` is
    /// solid.
    pub fn direction(self) -> Vector3<i32> {
        match self {
            BlockSide::FRONT => Vector3::new(0, 0, 1),
            BlockSide::BACK => Vector3::new(0, 0, -1),
            BlockSide::LEFT => Vector3::new(-1, 0, 0),
            BlockSide::RIGHT => Vector3::new(1, 0, 0),
            BlockSide::TOP => Vector3::new(0, 1, 0),
            BlockSide::BOTTOM => Vector3::new(0, -1, 0),
        }
    }

    /// The outward face normal.
    pub fn normal(self) -> [f32; 3] {
        let d = self.direction();
        [d.x as f32, d.y as f32, d.z as f32]
    }
}
