//! # Block Type Module
//!
//! Defines the material types a block can have and their conversion to and
//! from the compact integer representation used in chunk storage.

use num_derive::FromPrimitive;

use super::BlockTypeId;

/// Enumerates all block materials in the voxel world.
///
/// The type only selects a texture-atlas tile at mesh-generation time; it
/// never alters meshing logic. `FromPrimitive` allows conversion back from
/// the compact integer form blocks are stored as.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, FromPrimitive)]
pub enum BlockType {
    /// Fallback material with a plain white tile.
    DEFAULT = 0,
    /// Grass, assigned to surface cells.
    GRASS,
    /// Dirt, assigned to the shallow layers under the surface.
    DIRT,
    /// Water.
    WATER,
    /// Stone, assigned to everything deep.
    STONE,
    /// Wood.
    WOOD,
    /// Sand.
    SAND,
}

impl BlockType {
    /// Converts a stored [`BlockTypeId`] back to a `BlockType`.
    ///
    /// # Panics
    /// Panics if the id does not name a valid block type; ids only ever come
    /// from `BlockType as BlockTypeId`, so an invalid one is a programming
    /// error.
    pub fn from_id(id: BlockTypeId) -> Self {
        let btype: Option<BlockType> = num::FromPrimitive::from_u8(id);
        btype.unwrap()
    }

    /// Picks a random non-default block type.
    ///
    /// Used by the randomized chunk constructor for tests and demos.
    pub fn random() -> Self {
        num::FromPrimitive::from_u8(fastrand::u8(1..7)).unwrap()
    }
}
