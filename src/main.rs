//! Terrain demo: builds the default world, assembles the combined mesh, and
//! logs buffer statistics. Pass a path to a JSON config to override the
//! defaults.

use log::{error, info};

use voxel_terrain::config::WorldConfig;
use voxel_terrain::vertex::VERTEX_FLOATS;
use voxel_terrain::ChunkManager;

fn main() {
    let mut log_builder = env_logger::Builder::new();
    log_builder
        .target(env_logger::Target::Stdout)
        .parse_env("RUST_LOG")
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => match WorldConfig::from_path(&path) {
            Ok(config) => config,
            Err(err) => {
                error!("{err}");
                std::process::exit(1);
            }
        },
        None => WorldConfig::default(),
    };

    info!(
        "building {}x{} grid of {}^3 chunks (seed {})",
        config.grid_size, config.grid_size, config.chunk_size, config.seed
    );

    let mut manager = ChunkManager::new(config);
    let vertex_data = manager.generate_vertex_data();
    let index_data = manager.index_data();

    info!(
        "combined mesh: {} faces, {} vertices, {} indices",
        index_data.len() / 6,
        vertex_data.len() / VERTEX_FLOATS,
        index_data.len()
    );

    // Knock one block out of the world center and rebuild, the way an input
    // collaborator would after a click.
    let center = manager.config().grid_size as f32 * manager.config().chunk_extent() * 0.5;
    manager.update_chunks(center, 0.5, center);
    let vertex_data = manager.generate_vertex_data();
    let index_data = manager.index_data();

    info!(
        "after update: {} faces, {} vertices, {} indices",
        index_data.len() / 6,
        vertex_data.len() / VERTEX_FLOATS,
        index_data.len()
    );
}
