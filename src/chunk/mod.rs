//! # Chunk Module
//!
//! A chunk is the unit of terrain generation and meshing: a fixed
//! `chunk_size³` array of blocks plus its world-space offset in the chunk
//! grid. Chunks are plain data owned by the [`crate::manager::ChunkManager`]
//! arena; they hold no neighbor references of their own. Adjacency is wired
//! and resolved by the manager and handed to the mesher as short-lived
//! borrows.
//!
//! ## Storage
//!
//! Blocks live in a flat x-major array (`x`, then `y`, then `z`). A `bitvec`
//! solidity mask mirrors the blocks' active flags so the mesher's inner loop
//! answers "is this cell solid" with a single bit read; every mutation goes
//! through [`Chunk::set_block_active`], which keeps the two in sync.

use bitvec::prelude::BitVec;
use log::debug;
use noise::NoiseFn;

use crate::block::block_type::BlockType;
use crate::block::Block;
use crate::config::WorldConfig;
use crate::terrain::TerrainField;

pub mod mesher;

/// Solid layers above a cell before its material turns from dirt to stone.
const DIRT_LAYERS: i64 = 4;

/// A `chunk_size³` block of terrain at a fixed lateral offset in the world.
pub struct Chunk {
    grid_x: usize,
    grid_z: usize,
    chunk_size: usize,
    block_size: f32,
    x_offset: f32,
    z_offset: f32,
    blocks: Vec<Block>,
    solid: BitVec,
}

impl Chunk {
    /// Generates a chunk from the terrain field at grid slot `(grid_x, grid_z)`.
    ///
    /// Every cell samples the field at its *world-continuous* cell coordinate
    /// (local coordinate plus `grid * chunk_size`), so chunks generated at
    /// adjacent slots carve one continuous field and line up at their seams.
    /// Solid cells get a depth-based material: surface cells are grass, the
    /// next few layers dirt, everything deeper stone.
    ///
    /// Generation is pure: same field, slot, and config always produce the
    /// same chunk. Neighbor wiring happens later, in the manager.
    pub fn generate<N: NoiseFn<f64, 3>>(
        field: &TerrainField<'_, N>,
        grid_x: usize,
        grid_z: usize,
        config: &WorldConfig,
    ) -> Self {
        let mut chunk = Chunk::empty(grid_x, grid_z, config);
        let size = config.chunk_size;

        for x in 0..size {
            for y in 0..size {
                for z in 0..size {
                    let cell_x = (x + grid_x * size) as i64;
                    let cell_z = (z + grid_z * size) as i64;
                    let cell_y = y as i64;

                    if field.is_solid(cell_x, cell_y, cell_z) {
                        let block_type = Self::material_at(field, cell_x, cell_y, cell_z);
                        chunk.put_block(x, y, z, Block::new(block_type));
                    }
                }
            }
        }

        chunk
    }

    /// Creates a chunk of pure air at grid slot `(grid_x, grid_z)`.
    pub fn empty(grid_x: usize, grid_z: usize, config: &WorldConfig) -> Self {
        let size = config.chunk_size;
        let cell_count = size * size * size;
        Chunk {
            grid_x,
            grid_z,
            chunk_size: size,
            block_size: config.block_size,
            x_offset: grid_x as f32 * config.chunk_extent(),
            z_offset: grid_z as f32 * config.chunk_extent(),
            blocks: vec![Block::air(); cell_count],
            solid: BitVec::repeat(false, cell_count),
        }
    }

    /// Creates a chunk with randomly placed blocks (for tests and demos).
    ///
    /// # Arguments
    /// * `sparseness` - Fraction of cells left as air, in `[0, 1]`
    pub fn random(grid_x: usize, grid_z: usize, config: &WorldConfig, sparseness: f64) -> Self {
        let mut chunk = Chunk::empty(grid_x, grid_z, config);
        let size = config.chunk_size;

        for x in 0..size {
            for y in 0..size {
                for z in 0..size {
                    if fastrand::f64() >= sparseness {
                        chunk.put_block(x, y, z, Block::new(BlockType::random()));
                    }
                }
            }
        }

        chunk
    }

    /// Material for a solid cell, decided by how deeply it is buried.
    fn material_at<N: NoiseFn<f64, 3>>(
        field: &TerrainField<'_, N>,
        cell_x: i64,
        cell_y: i64,
        cell_z: i64,
    ) -> BlockType {
        let mut overburden = 0;
        for d in 1..=DIRT_LAYERS {
            if !field.is_solid(cell_x, cell_y + d, cell_z) {
                break;
            }
            overburden += 1;
        }

        if overburden == 0 {
            BlockType::GRASS
        } else if overburden < DIRT_LAYERS {
            BlockType::DIRT
        } else {
            BlockType::STONE
        }
    }

    fn index_of(&self, x: usize, y: usize, z: usize) -> usize {
        debug_assert!(x < self.chunk_size && y < self.chunk_size && z < self.chunk_size);
        (x * self.chunk_size + y) * self.chunk_size + z
    }

    fn put_block(&mut self, x: usize, y: usize, z: usize, block: Block) {
        let idx = self.index_of(x, y, z);
        self.solid.set(idx, block.is_active());
        self.blocks[idx] = block;
    }

    /// The block at local coordinates `(x, y, z)`.
    ///
    /// # Panics
    /// Panics if any coordinate is outside `[0, chunk_size)`; internal
    /// lookups with out-of-range locals are a programming error, not a
    /// recoverable condition. World-space callers go through
    /// [`Chunk::update_block`].
    pub fn block_at(&self, x: usize, y: usize, z: usize) -> &Block {
        &self.blocks[self.index_of(x, y, z)]
    }

    /// Whether the block at local coordinates `(x, y, z)` is solid.
    ///
    /// Reads the solidity mask; O(1).
    pub fn is_block_solid(&self, x: usize, y: usize, z: usize) -> bool {
        self.solid[self.index_of(x, y, z)]
    }

    /// Sets the active flag of the block at local coordinates `(x, y, z)`,
    /// keeping the solidity mask in sync.
    pub fn set_block_active(&mut self, x: usize, y: usize, z: usize, active: bool) {
        let idx = self.index_of(x, y, z);
        self.blocks[idx].set_active(active);
        self.solid.set(idx, active);
    }

    /// Flips one block's active flag, addressed by a world-space point.
    ///
    /// The point is translated to local coordinates by subtracting the
    /// chunk's offset. A point that lands outside `[0, chunk_size)³` after
    /// translation is a logged no-op and leaves the terrain unaffected.
    /// The caller re-requests a full mesh afterward; no incremental patch
    /// is produced.
    pub fn update_block(&mut self, world_x: f32, world_y: f32, world_z: f32, active: bool) {
        let local_x = ((world_x - self.x_offset) / self.block_size).floor() as i64;
        let local_y = (world_y / self.block_size).floor() as i64;
        let local_z = ((world_z - self.z_offset) / self.block_size).floor() as i64;

        let range = 0..self.chunk_size as i64;
        if !range.contains(&local_x) || !range.contains(&local_y) || !range.contains(&local_z) {
            debug!(
                "block ({local_x}, {local_y}, {local_z}) out of bounds for chunk ({}, {})",
                self.grid_x, self.grid_z
            );
            return;
        }

        self.set_block_active(local_x as usize, local_y as usize, local_z as usize, active);
    }

    /// Whether a world-space point falls inside this chunk's lateral extent.
    ///
    /// Only x and z are tested; the world is one chunk tall, so y is ignored
    /// by design (vertical chunk stacking is out of scope).
    pub fn is_in_bounds(&self, world_x: f32, _world_y: f32, world_z: f32) -> bool {
        let extent = self.chunk_size as f32 * self.block_size;
        world_x >= self.x_offset
            && world_x < self.x_offset + extent
            && world_z >= self.z_offset
            && world_z < self.z_offset + extent
    }

    /// Edge length of this chunk in blocks.
    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    /// Edge length of one block in world units.
    pub fn block_size(&self) -> f32 {
        self.block_size
    }

    /// This chunk's world-space offset along x.
    pub fn x_offset(&self) -> f32 {
        self.x_offset
    }

    /// This chunk's world-space offset along z.
    pub fn z_offset(&self) -> f32 {
        self.z_offset
    }

    /// This chunk's slot in the chunk grid.
    pub fn grid_position(&self) -> (usize, usize) {
        (self.grid_x, self.grid_z)
    }

    /// Number of solid blocks in this chunk.
    pub fn solid_count(&self) -> usize {
        self.solid.count_ones()
    }
}
