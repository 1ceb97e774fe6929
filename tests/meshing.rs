//! End-to-end meshing tests over the whole grid: the combined buffers, chunk
//! stitching, mutation, and determinism.

use noise::Constant;

use voxel_terrain::config::WorldConfig;
use voxel_terrain::vertex::VERTEX_FLOATS;
use voxel_terrain::ChunkManager;

const FLOATS_PER_FACE: usize = 4 * VERTEX_FLOATS;

fn config(chunk_size: usize, grid_size: usize) -> WorldConfig {
    WorldConfig {
        chunk_size,
        grid_size,
        threshold: 0.5,
        ..WorldConfig::default()
    }
}

/// An all-air world to place blocks into by hand.
fn air_world(chunk_size: usize, grid_size: usize) -> ChunkManager {
    ChunkManager::with_noise(config(chunk_size, grid_size), &Constant::new(-1.0))
}

fn assert_buffers_consistent(vertex_data: &[f32], index_data: &[u32]) {
    assert_eq!(index_data.len() % 6, 0, "indices come in face sextets");
    let faces = index_data.len() / 6;
    assert_eq!(vertex_data.len(), faces * FLOATS_PER_FACE);

    let vertex_count = (vertex_data.len() / VERTEX_FLOATS) as u32;
    for &index in index_data {
        assert!(index < vertex_count, "index {index} out of {vertex_count}");
    }
}

#[test]
fn solid_two_cube_chunk_emits_only_its_outer_surface() {
    // A fully solid 2x2x2 chunk: all 8 cells active, every internal face
    // culled, leaving the 24 unit quads of the combined cube's surface.
    let mut manager = ChunkManager::with_noise(config(2, 1), &Constant::new(1.0));

    let vertex_data = manager.generate_vertex_data();
    let index_data = manager.index_data();

    assert_eq!(index_data.len() / 6, 24);
    assert_eq!(vertex_data.len(), 24 * FLOATS_PER_FACE);
    assert_buffers_consistent(&vertex_data, &index_data);
}

#[test]
fn single_active_cell_is_fully_exposed() {
    let mut manager = air_world(2, 1);
    manager.chunk_at_mut(0, 0).set_block_active(0, 0, 0, true);

    let vertex_data = manager.generate_vertex_data();
    let index_data = manager.index_data();

    assert_eq!(index_data.len() / 6, 6);
    assert_buffers_consistent(&vertex_data, &index_data);
}

#[test]
fn linked_chunks_cull_both_sides_of_a_shared_seam() {
    // Two blocks touching across the x seam between grid slots (0,0) and
    // (1,0): neither chunk may emit the seam face.
    let mut manager = air_world(2, 2);
    manager.chunk_at_mut(0, 0).set_block_active(1, 0, 0, true);
    manager.chunk_at_mut(1, 0).set_block_active(0, 0, 0, true);

    let vertex_data = manager.generate_vertex_data();
    let index_data = manager.index_data();

    // 12 faces for two lone cubes, minus both copies of the seam face.
    assert_eq!(index_data.len() / 6, 10);
    assert_buffers_consistent(&vertex_data, &index_data);

    // No emitted quad lies in the seam plane x = 2.
    for quad in vertex_data.chunks(FLOATS_PER_FACE) {
        let in_seam_plane = quad
            .chunks(VERTEX_FLOATS)
            .all(|vertex| vertex[0] == 2.0);
        assert!(!in_seam_plane, "seam face was emitted");
    }
}

#[test]
fn seam_culling_works_across_the_z_axis_too() {
    let mut manager = air_world(2, 2);
    manager.chunk_at_mut(0, 0).set_block_active(0, 0, 1, true);
    manager.chunk_at_mut(0, 1).set_block_active(0, 0, 0, true);

    manager.generate_vertex_data();
    assert_eq!(manager.index_data().len() / 6, 10);
}

#[test]
fn out_of_world_update_leaves_the_mesh_untouched() {
    let mut manager = air_world(2, 2);
    manager.chunk_at_mut(0, 0).set_block_active(0, 0, 0, true);

    let before_vertices = manager.generate_vertex_data();
    let before_indices = manager.index_data();

    manager.update_chunks(-100.0, 0.0, 50.0);
    let after_vertices = manager.generate_vertex_data();
    let after_indices = manager.index_data();

    assert_eq!(before_vertices, after_vertices);
    assert_eq!(before_indices, after_indices);
}

#[test]
fn deactivation_removes_faces_and_exposes_hidden_neighbors() {
    let mut manager = air_world(2, 1);
    manager.chunk_at_mut(0, 0).set_block_active(0, 0, 0, true);
    manager.chunk_at_mut(0, 0).set_block_active(1, 0, 0, true);

    manager.generate_vertex_data();
    assert_eq!(manager.index_data().len() / 6, 10);

    // Remove the block at world cell (1, 0, 0). Its five exposed faces
    // disappear and the neighbor's previously hidden +x face surfaces.
    manager.update_chunks(1.5, 0.5, 0.5);
    let once_vertices = manager.generate_vertex_data();
    let once_indices = manager.index_data();
    assert_eq!(once_indices.len() / 6, 6);

    // Deactivating an already-inactive block changes nothing.
    manager.update_chunks(1.5, 0.5, 0.5);
    let twice_vertices = manager.generate_vertex_data();
    assert_eq!(once_vertices, twice_vertices);
    assert_eq!(once_indices, manager.index_data());
}

#[test]
fn equal_configs_produce_byte_identical_streams() {
    let config = WorldConfig {
        chunk_size: 8,
        grid_size: 2,
        ..WorldConfig::default()
    };

    let mut a = ChunkManager::new(config.clone());
    let mut b = ChunkManager::new(config);

    let vertices_a = a.generate_vertex_data();
    let vertices_b = b.generate_vertex_data();

    let bytes_a: &[u8] = bytemuck::cast_slice(&vertices_a);
    let bytes_b: &[u8] = bytemuck::cast_slice(&vertices_b);
    assert_eq!(bytes_a, bytes_b);
    assert_eq!(a.index_data(), b.index_data());
}

#[test]
fn generated_terrain_buffers_stay_index_consistent() {
    let mut manager = ChunkManager::new(WorldConfig {
        chunk_size: 8,
        grid_size: 3,
        ..WorldConfig::default()
    });

    let vertex_data = manager.generate_vertex_data();
    let index_data = manager.index_data();

    assert!(!index_data.is_empty(), "default terrain should not be empty");
    assert_buffers_consistent(&vertex_data, &index_data);
}

#[test]
fn stitching_only_ever_removes_faces() {
    // Generated terrain with linked chunks versus the same chunks meshed in
    // isolation: culling against a neighbor can hide boundary faces but can
    // never add geometry.
    use voxel_terrain::chunk::mesher::mesh_chunk;
    use voxel_terrain::ChunkNeighbors;

    let mut stitched = ChunkManager::new(WorldConfig {
        chunk_size: 8,
        grid_size: 2,
        ..WorldConfig::default()
    });
    stitched.generate_vertex_data();
    let stitched_faces = stitched.index_data().len() / 6;

    let mut unlinked_faces = 0;
    for grid_x in 0..2 {
        for grid_z in 0..2 {
            let chunk = stitched.chunk_at(grid_x, grid_z);
            unlinked_faces += mesh_chunk(chunk, &ChunkNeighbors::none()).face_count();
        }
    }

    assert!(stitched_faces <= unlinked_faces);
}
