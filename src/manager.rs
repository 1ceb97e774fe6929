//! # Chunk Manager
//!
//! Owns the chunk grid and the combined mesh buffers. The grid is built once
//! in two passes: allocate and generate every chunk, then link neighbors.
//! The passes are separate because neighbor wiring needs every chunk to
//! already exist. Chunks live in a flat arena and adjacency is stored as
//! optional arena indices, resolved to borrows only while a chunk is being
//! meshed, so chunks stay plain data and nothing dangles.
//!
//! Mesh assembly concatenates every chunk's zero-based mesh into one vertex
//! stream and one index stream, rebasing each chunk's indices by the running
//! global vertex count. That shared base is what keeps index references valid
//! once all chunks' vertices land in a single buffer.

use log::{debug, info, trace};
use noise::{NoiseFn, Perlin};

use crate::chunk::mesher::{mesh_chunk, ChunkNeighbors};
use crate::chunk::Chunk;
use crate::config::WorldConfig;
use crate::terrain::TerrainField;
use crate::vertex::Vertex;

/// Lateral adjacency of one grid slot, stored as arena indices.
///
/// `None` marks the world edge. Links are wired once, after generation, and
/// never change; this is the single place adjacency is mutated.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct NeighborLinks {
    /// Arena index of the chunk at `z + 1`.
    pub front: Option<usize>,
    /// Arena index of the chunk at `z - 1`.
    pub back: Option<usize>,
    /// Arena index of the chunk at `x + 1`.
    pub left: Option<usize>,
    /// Arena index of the chunk at `x - 1`.
    pub right: Option<usize>,
}

/// The chunk grid plus the combined mesh state.
///
/// The manager exclusively owns every chunk; chunk lifetime is exactly the
/// manager's lifetime. No chunk is added or removed at runtime.
pub struct ChunkManager {
    config: WorldConfig,
    chunks: Vec<Chunk>,
    links: Vec<NeighborLinks>,
    vertices: Vec<Vertex>,
    indices: Vec<u32>,
}

impl ChunkManager {
    /// Builds the world from its config, generating terrain from a Perlin
    /// field seeded with `config.seed`.
    pub fn new(config: WorldConfig) -> Self {
        let perlin = Perlin::new(config.seed);
        Self::with_noise(config, &perlin)
    }

    /// Builds the world from an arbitrary noise source.
    ///
    /// Production uses [`ChunkManager::new`]; tests inject constant or
    /// shaped fields here.
    pub fn with_noise<N: NoiseFn<f64, 3>>(config: WorldConfig, noise: &N) -> Self {
        let field = TerrainField::new(noise, &config);
        let grid = config.grid_size;

        // Pass 1: allocate and generate every chunk.
        let mut chunks = Vec::with_capacity(grid * grid);
        for grid_x in 0..grid {
            for grid_z in 0..grid {
                chunks.push(Chunk::generate(&field, grid_x, grid_z, &config));
            }
        }

        let mut manager = ChunkManager {
            config,
            chunks,
            links: Vec::new(),
            vertices: Vec::new(),
            indices: Vec::new(),
        };

        // Pass 2: wire adjacency, now that every chunk exists.
        manager.link_all();
        info!(
            "generated {} chunks ({} solid blocks)",
            manager.chunks.len(),
            manager.chunks.iter().map(Chunk::solid_count).sum::<usize>()
        );
        manager
    }

    /// Arena index of grid slot `(grid_x, grid_z)`.
    fn slot(&self, grid_x: usize, grid_z: usize) -> usize {
        grid_x * self.config.grid_size + grid_z
    }

    /// Wires every slot's neighbor links. Boundary slots keep `None` on
    /// their world-edge sides.
    fn link_all(&mut self) {
        let grid = self.config.grid_size;
        let mut links = vec![NeighborLinks::default(); grid * grid];

        for grid_x in 0..grid {
            for grid_z in 0..grid {
                let link = &mut links[grid_x * grid + grid_z];
                if grid_z > 0 {
                    link.back = Some(self.slot(grid_x, grid_z - 1));
                }
                if grid_z < grid - 1 {
                    link.front = Some(self.slot(grid_x, grid_z + 1));
                }
                if grid_x > 0 {
                    link.right = Some(self.slot(grid_x - 1, grid_z));
                }
                if grid_x < grid - 1 {
                    link.left = Some(self.slot(grid_x + 1, grid_z));
                }
            }
        }

        self.links = links;
    }

    /// Resolves one slot's links to chunk borrows for a mesh call.
    fn neighbors_of(&self, index: usize) -> ChunkNeighbors<'_> {
        let link = &self.links[index];
        ChunkNeighbors {
            front: link.front.map(|i| &self.chunks[i]),
            back: link.back.map(|i| &self.chunks[i]),
            left: link.left.map(|i| &self.chunks[i]),
            right: link.right.map(|i| &self.chunks[i]),
        }
    }

    /// Rebuilds the combined mesh and returns the flat vertex stream.
    ///
    /// Chunks are meshed in fixed grid order (outer x, inner z); each chunk's
    /// zero-based indices are rebased by the global vertex count before
    /// concatenation. The matching index stream is cached for
    /// [`ChunkManager::index_data`] and replaced wholesale on every call.
    /// Nothing accumulates across rebuilds.
    pub fn generate_vertex_data(&mut self) -> Vec<f32> {
        let mut vertices: Vec<Vertex> = Vec::new();
        let mut indices: Vec<u32> = Vec::new();
        let mut base: u32 = 0;

        for grid_x in 0..self.config.grid_size {
            for grid_z in 0..self.config.grid_size {
                let index = self.slot(grid_x, grid_z);
                let mesh = mesh_chunk(&self.chunks[index], &self.neighbors_of(index));

                indices.extend(mesh.indices.iter().map(|i| i + base));
                base += mesh.vertices.len() as u32;
                vertices.extend(mesh.vertices);
            }
        }

        debug!(
            "assembled mesh: {} vertices, {} indices",
            vertices.len(),
            indices.len()
        );
        self.vertices = vertices;
        self.indices = indices;
        bytemuck::cast_slice(&self.vertices).to_vec()
    }

    /// The index stream matching the last [`ChunkManager::generate_vertex_data`]
    /// call.
    ///
    /// Empty before the first build; callers generate vertex data first.
    pub fn index_data(&self) -> Vec<u32> {
        self.indices.clone()
    }

    /// Typed view of the vertices from the last build, for callers that
    /// upload [`Vertex`] structs directly instead of the flat float stream.
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Deactivates the block at a world-space point.
    ///
    /// Scans the grid for the chunk whose lateral bounds contain the point
    /// (grid slots are spatially disjoint, so at most one matches) and
    /// delegates the deactivation to it. A point outside the generated world
    /// is a silent no-op. The caller rebuilds the mesh afterward; no
    /// incremental patch or notification is produced.
    pub fn update_chunks(&mut self, world_x: f32, world_y: f32, world_z: f32) {
        match self
            .chunks
            .iter()
            .position(|chunk| chunk.is_in_bounds(world_x, world_y, world_z))
        {
            Some(index) => {
                let (grid_x, grid_z) = self.chunks[index].grid_position();
                debug!(
                    "deactivating block at ({world_x}, {world_y}, {world_z}) in chunk ({grid_x}, {grid_z})"
                );
                self.chunks[index].update_block(world_x, world_y, world_z, false);
            }
            None => {
                trace!("update at ({world_x}, {world_y}, {world_z}) hit no chunk");
            }
        }
    }

    /// The world config this manager was built from.
    pub fn config(&self) -> &WorldConfig {
        &self.config
    }

    /// The chunk at grid slot `(grid_x, grid_z)`.
    ///
    /// # Panics
    /// Panics if the slot is outside the grid.
    pub fn chunk_at(&self, grid_x: usize, grid_z: usize) -> &Chunk {
        &self.chunks[self.slot(grid_x, grid_z)]
    }

    /// Mutable access to the chunk at grid slot `(grid_x, grid_z)`.
    ///
    /// Bypasses the world-space lookup; intended for tests and tools that
    /// address chunks by slot.
    pub fn chunk_at_mut(&mut self, grid_x: usize, grid_z: usize) -> &mut Chunk {
        let index = self.slot(grid_x, grid_z);
        &mut self.chunks[index]
    }

    /// The neighbor links of grid slot `(grid_x, grid_z)`.
    pub fn links_at(&self, grid_x: usize, grid_z: usize) -> &NeighborLinks {
        &self.links[self.slot(grid_x, grid_z)]
    }
}
