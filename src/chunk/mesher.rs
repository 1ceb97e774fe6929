//! # Chunk Mesher
//!
//! Turns one chunk into a vertex/index pair, emitting a quad for every
//! exposed face of every solid block. Faces shared by two solid cells are
//! culled, including across chunk seams: the face-visibility test looks
//! exactly one cell into the bordering chunk when the cell under test sits on
//! a boundary, and never chains further.
//!
//! Meshing is pure. The returned indices are relative to zero; the manager
//! rebases them onto the shared base when concatenating chunk meshes, so no
//! global counter threads through this module.

use cgmath::{Point3, Vector3};

use crate::block::block_side::BlockSide;
use crate::chunk::Chunk;
use crate::vertex::Vertex;
use crate::voxel::Voxel;

/// Indices per emitted face (two triangles).
pub const INDICES_PER_FACE: usize = 6;
/// Vertices per emitted face (one quad).
pub const VERTICES_PER_FACE: usize = 4;

/// Borrowed lateral neighbors of a chunk, resolved by the manager for the
/// duration of one mesh call.
///
/// `None` means world edge or unlinked; the mesher treats that boundary as
/// open air and emits the face.
#[derive(Default, Clone, Copy)]
pub struct ChunkNeighbors<'a> {
    /// The chunk at `z + 1` (positive Z).
    pub front: Option<&'a Chunk>,
    /// The chunk at `z - 1` (negative Z).
    pub back: Option<&'a Chunk>,
    /// The chunk at `x + 1` (positive X).
    pub left: Option<&'a Chunk>,
    /// The chunk at `x - 1` (negative X).
    pub right: Option<&'a Chunk>,
}

impl ChunkNeighbors<'_> {
    /// Neighbors for a chunk standing alone (every boundary is open air).
    pub fn none() -> Self {
        ChunkNeighbors::default()
    }
}

/// The mesh of a single chunk, with indices relative to zero.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChunkMesh {
    /// The emitted vertices, four per face.
    pub vertices: Vec<Vertex>,
    /// The emitted indices, six per face, referencing this mesh's own vertices.
    pub indices: Vec<u32>,
}

impl ChunkMesh {
    /// Number of quads in this mesh.
    pub fn face_count(&self) -> usize {
        self.indices.len() / INDICES_PER_FACE
    }
}

/// Meshes one chunk against its resolved neighbors.
///
/// Iteration order is fixed: local x outer, then y, then z, and within a cell
/// the faces in [`BlockSide::all`] order. The order is not semantically
/// meaningful, but determinism (byte-identical streams per seed) depends on
/// it.
pub fn mesh_chunk(chunk: &Chunk, neighbors: &ChunkNeighbors<'_>) -> ChunkMesh {
    let mut mesh = ChunkMesh::default();
    let size = chunk.chunk_size();
    let block_size = chunk.block_size();
    let mut base: u32 = 0;

    for x in 0..size {
        for y in 0..size {
            for z in 0..size {
                if !chunk.is_block_solid(x, y, z) {
                    continue;
                }

                let position = Point3::new(
                    x as f32 * block_size + chunk.x_offset(),
                    y as f32 * block_size,
                    z as f32 * block_size + chunk.z_offset(),
                );
                let voxel = Voxel::new(position, block_size, chunk.block_at(x, y, z).atlas_tile());
                let local = Point3::new(x as i32, y as i32, z as i32);

                for side in BlockSide::all() {
                    if has_neighbor_on_face(chunk, local, side.direction(), neighbors) {
                        continue;
                    }
                    mesh.vertices.extend(voxel.face_vertices(side));
                    push_face_indices(&mut mesh.indices, base);
                    base += VERTICES_PER_FACE as u32;
                }
            }
        }
    }

    mesh
}

/// Whether the cell one step in `direction` from `local` is solid.
///
/// In-chunk neighbors answer from this chunk's solidity mask. A coordinate
/// that overflows laterally asks the bordering chunk for its mirrored
/// boundary cell (same y); y never crosses a chunk boundary because the
/// world is one chunk tall, so a vertical overflow is always open air.
/// Missing neighbors resolve to "not solid", which makes the face exposed.
fn has_neighbor_on_face(
    chunk: &Chunk,
    local: Point3<i32>,
    direction: Vector3<i32>,
    neighbors: &ChunkNeighbors<'_>,
) -> bool {
    let size = chunk.chunk_size() as i32;
    let nx = local.x + direction.x;
    let ny = local.y + direction.y;
    let nz = local.z + direction.z;

    let in_range = |v: i32| (0..size).contains(&v);

    if in_range(nx) && in_range(ny) && in_range(nz) {
        return chunk.is_block_solid(nx as usize, ny as usize, nz as usize);
    }

    if !in_range(ny) {
        return false;
    }

    let last = (size - 1) as usize;
    if nx < 0 {
        return neighbors
            .right
            .is_some_and(|n| n.is_block_solid(last, ny as usize, nz as usize));
    }
    if nx >= size {
        return neighbors
            .left
            .is_some_and(|n| n.is_block_solid(0, ny as usize, nz as usize));
    }
    if nz < 0 {
        return neighbors
            .back
            .is_some_and(|n| n.is_block_solid(nx as usize, ny as usize, last));
    }
    if nz >= size {
        return neighbors
            .front
            .is_some_and(|n| n.is_block_solid(nx as usize, ny as usize, 0));
    }

    false
}

/// Appends the two triangles of one quad: `(b, b+1, b+2)` and `(b+2, b+3, b)`.
fn push_face_indices(indices: &mut Vec<u32>, base: u32) {
    indices.extend_from_slice(&[base, base + 1, base + 2, base + 2, base + 3, base]);
}

#[cfg(test)]
mod tests {
    use crate::config::WorldConfig;
    use crate::vertex::VERTEX_FLOATS;

    use super::*;

    fn config(chunk_size: usize) -> WorldConfig {
        WorldConfig {
            chunk_size,
            grid_size: 1,
            threshold: 0.5,
            ..WorldConfig::default()
        }
    }

    #[test]
    fn lone_block_emits_six_faces() {
        let config = config(4);
        let mut chunk = Chunk::empty(0, 0, &config);
        chunk.set_block_active(1, 1, 1, true);

        let mesh = mesh_chunk(&chunk, &ChunkNeighbors::none());
        assert_eq!(mesh.face_count(), 6);
        assert_eq!(mesh.vertices.len(), 6 * VERTICES_PER_FACE);
        assert_eq!(mesh.indices.len(), 6 * INDICES_PER_FACE);
    }

    #[test]
    fn touching_blocks_hide_their_shared_face() {
        let config = config(4);
        let mut chunk = Chunk::empty(0, 0, &config);
        chunk.set_block_active(1, 1, 1, true);
        chunk.set_block_active(2, 1, 1, true);

        // Two cubes, minus both copies of the internal face.
        let mesh = mesh_chunk(&chunk, &ChunkNeighbors::none());
        assert_eq!(mesh.face_count(), 10);
    }

    #[test]
    fn boundary_face_is_culled_against_a_linked_neighbor() {
        let config = config(2);
        let mut chunk = Chunk::empty(0, 0, &config);
        chunk.set_block_active(1, 0, 0, true);

        // Mirrored boundary cell in the chunk one slot to the left (+x).
        let mut left = Chunk::empty(1, 0, &config);
        left.set_block_active(0, 0, 0, true);

        let neighbors = ChunkNeighbors {
            left: Some(&left),
            ..ChunkNeighbors::none()
        };
        let mesh = mesh_chunk(&chunk, &neighbors);
        assert_eq!(mesh.face_count(), 5);
    }

    #[test]
    fn boundary_face_is_exposed_when_the_neighbor_is_missing() {
        let config = config(2);
        let mut chunk = Chunk::empty(0, 0, &config);
        chunk.set_block_active(1, 0, 0, true);

        let mesh = mesh_chunk(&chunk, &ChunkNeighbors::none());
        assert_eq!(mesh.face_count(), 6);
    }

    #[test]
    fn boundary_face_is_exposed_when_the_mirrored_cell_is_air() {
        let config = config(2);
        let mut chunk = Chunk::empty(0, 0, &config);
        chunk.set_block_active(1, 0, 0, true);

        let left = Chunk::empty(1, 0, &config);
        let neighbors = ChunkNeighbors {
            left: Some(&left),
            ..ChunkNeighbors::none()
        };
        let mesh = mesh_chunk(&chunk, &neighbors);
        assert_eq!(mesh.face_count(), 6);
    }

    #[test]
    fn vertical_overflow_is_always_open_air() {
        let config = config(2);
        let mut chunk = Chunk::empty(0, 0, &config);
        // Full column; top and bottom cells sit on the vertical boundary.
        chunk.set_block_active(0, 0, 0, true);
        chunk.set_block_active(0, 1, 0, true);

        let mesh = mesh_chunk(&chunk, &ChunkNeighbors::none());
        // A 1x2x1 pillar: 10 exposed faces.
        assert_eq!(mesh.face_count(), 10);
    }

    #[test]
    fn indices_reference_in_range_vertices_in_lockstep() {
        let config = config(4);
        let mut chunk = Chunk::empty(0, 0, &config);
        for x in 0..4 {
            chunk.set_block_active(x, 0, 0, true);
        }

        let mesh = mesh_chunk(&chunk, &ChunkNeighbors::none());
        assert_eq!(mesh.vertices.len(), mesh.face_count() * VERTICES_PER_FACE);
        for &index in &mesh.indices {
            assert!((index as usize) < mesh.vertices.len());
        }
        // Stride sanity for the flat float view.
        let floats: &[f32] = bytemuck::cast_slice(&mesh.vertices);
        assert_eq!(floats.len(), mesh.face_count() * VERTICES_PER_FACE * VERTEX_FLOATS);
    }

    #[test]
    fn world_offset_is_folded_into_vertex_positions() {
        let config = config(2);
        let mut chunk = Chunk::empty(3, 1, &config);
        chunk.set_block_active(0, 0, 0, true);

        let mesh = mesh_chunk(&chunk, &ChunkNeighbors::none());
        for vertex in &mesh.vertices {
            assert!(vertex.position[0] >= 6.0 && vertex.position[0] <= 7.0);
            assert!(vertex.position[2] >= 2.0 && vertex.position[2] <= 3.0);
        }
    }
}
