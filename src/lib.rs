#![warn(missing_docs)]
#![warn(rustdoc::invalid_rust_codeblocks)]

//! # Voxel Terrain
//!
//! A chunked voxel terrain core: procedural generation, face-culled meshing,
//! and combined-buffer assembly for a grid of fixed-size cubic chunks.
//!
//! This crate owns the data-heavy half of a voxel renderer. It decides which
//! cells of the world are solid, emits one quad for every *exposed* face of a
//! solid cell (faces buried between two solid cells are culled, including
//! across chunk seams), and batches every chunk's geometry into a single
//! vertex buffer and a single index buffer that a renderer can upload as-is.
//! Windowing, input, shaders, and the render loop are external collaborators
//! and live outside this crate.
//!
//! ## Key Modules
//!
//! * `block` - Block data, block types, and block faces
//! * `voxel` - Per-face vertex generation for a unit cube
//! * `chunk` - Fixed-size 3D cell arrays: generation, mutation, meshing
//! * `manager` - The chunk grid: neighbor wiring and mesh assembly
//! * `terrain` - The seeded noise field terrain is sampled from
//! * `config` - World configuration with the published defaults
//!
//! ## Data Flow
//!
//! 1. [`ChunkManager::new`] generates every chunk from the seeded noise field,
//!    then wires lateral neighbor links in a second pass
//! 2. [`ChunkManager::generate_vertex_data`] meshes each chunk against its
//!    neighbors and rebases every chunk's indices onto one shared base
//! 3. The caller uploads the combined buffers and draws
//! 4. [`ChunkManager::update_chunks`] deactivates a single block at a
//!    world-space point; the caller rebuilds the mesh afterward
//!
//! ## Determinism
//!
//! Terrain is a pure function of the seed and the world configuration. Two
//! worlds built from the same [`config::WorldConfig`] produce byte-identical
//! vertex and index streams.
//!
//! [`ChunkManager::new`]: manager::ChunkManager::new
//! [`ChunkManager::generate_vertex_data`]: manager::ChunkManager::generate_vertex_data
//! [`ChunkManager::update_chunks`]: manager::ChunkManager::update_chunks

pub mod block;
pub mod chunk;
pub mod config;
pub mod manager;
pub mod terrain;
pub mod vertex;
pub mod voxel;

pub use chunk::mesher::{ChunkMesh, ChunkNeighbors};
pub use chunk::Chunk;
pub use config::WorldConfig;
pub use manager::ChunkManager;
pub use vertex::Vertex;
