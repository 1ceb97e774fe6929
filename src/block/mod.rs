//! # Block Module
//!
//! The smallest unit of terrain: a solidity flag plus a material type. Blocks
//! never know which chunk owns them; chunks address blocks purely by index
//! and are the only place a block is ever mutated.

use block_type::BlockType;

pub mod block_side;
pub mod block_type;

/// The underlying integer type block materials are stored as.
pub type BlockTypeId = u8;

/// Maps each block type to its texture-atlas tile as `(column, row)`.
///
/// Indexed by `BlockType` as a `usize`. Tiles live on a 16x16 atlas; the
/// actual UV math happens in [`crate::voxel::Voxel`].
pub static BLOCK_TYPE_TO_ATLAS_TILE: [(u32, u32); 7] = [
    (15, 15), // DEFAULT (plain white filler tile)
    (0, 0),   // GRASS
    (2, 0),   // DIRT
    (13, 12), // WATER
    (1, 0),   // STONE
    (4, 1),   // WOOD
    (2, 1),   // SAND
];

/// A single voxel block.
///
/// Lightweight by design: one byte of solidity, one byte of material. The
/// `#[repr(C)]` layout plus `Pod` keeps whole block arrays castable to bytes.
#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable, Debug, PartialEq, Eq)]
pub struct Block {
    /// Nonzero when the block participates in meshing.
    active: u8,
    /// The material, stored compactly as a [`BlockTypeId`].
    block_type: BlockTypeId,
}

impl Block {
    /// Creates an active block of the given type.
    pub fn new(block_type: BlockType) -> Self {
        Block {
            active: 1,
            block_type: block_type as BlockTypeId,
        }
    }

    /// Creates an inactive block (air) with the default material.
    pub fn air() -> Self {
        Block {
            active: 0,
            block_type: BlockType::DEFAULT as BlockTypeId,
        }
    }

    /// Whether this block participates in meshing.
    pub fn is_active(&self) -> bool {
        self.active != 0
    }

    /// Sets the solidity flag. Idempotent; this is the only block mutation.
    pub fn set_active(&mut self, active: bool) {
        self.active = active as u8;
    }

    /// The block's material type.
    pub fn block_type(&self) -> BlockType {
        BlockType::from_id(self.block_type)
    }

    /// The texture-atlas tile for this block's material.
    pub fn atlas_tile(&self) -> (u32, u32) {
        BLOCK_TYPE_TO_ATLAS_TILE[self.block_type as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_active_is_idempotent() {
        let mut block = Block::new(BlockType::GRASS);
        assert!(block.is_active());

        block.set_active(false);
        let after_once = block;
        block.set_active(false);
        assert_eq!(block, after_once);
        assert!(!block.is_active());
    }

    #[test]
    fn air_is_inactive_default() {
        let block = Block::air();
        assert!(!block.is_active());
        assert_eq!(block.block_type(), BlockType::DEFAULT);
    }

    #[test]
    fn every_type_has_an_atlas_tile() {
        for id in 0..BLOCK_TYPE_TO_ATLAS_TILE.len() as BlockTypeId {
            let block = Block::new(BlockType::from_id(id));
            let (u, v) = block.atlas_tile();
            assert!(u < 16 && v < 16);
        }
    }
}
