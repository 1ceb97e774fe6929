//! # World Configuration
//!
//! Everything the terrain core needs to reproduce a world: grid and chunk
//! dimensions, the noise seed, and the generation thresholds. A
//! [`WorldConfig`] is the single source of terrain randomness; two worlds
//! built from equal configs are byte-identical.
//!
//! The published constants below are the defaults and match the reference
//! world. Tests and tools construct smaller configs at runtime.

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

/// Default edge length of a chunk, in blocks (chunks are cubes).
pub const CHUNK_SIZE: usize = 16;
/// Default edge length of the chunk grid, in chunks (the world is one chunk tall).
pub const CHUNK_GRID_SIZE: usize = 8;
/// Default edge length of a single block, in world units.
pub const BLOCK_SIZE: f32 = 1.0;
/// Default noise seed.
pub const WORLD_SEED: u32 = 123_456;
/// Default scale applied to world coordinates before sampling the noise field.
pub const NOISE_SCALE: f64 = 0.01;
/// Default noise cutoff; samples at or above it are solid.
pub const SOLID_THRESHOLD: f64 = 0.56;

/// Parameters controlling world shape and terrain generation.
///
/// Deserializable from JSON so a host application can ship the world as a
/// config file. Any omitted field falls back to the published default.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct WorldConfig {
    /// Edge length of a chunk in blocks.
    pub chunk_size: usize,
    /// Edge length of the chunk grid in chunks.
    pub grid_size: usize,
    /// Edge length of one block in world units.
    pub block_size: f32,
    /// Seed for the terrain noise field.
    pub seed: u32,
    /// Scale applied to world coordinates before noise sampling.
    pub noise_scale: f64,
    /// Noise cutoff in `[0, 1]`; samples at or above it are solid.
    pub threshold: f64,
}

impl Default for WorldConfig {
    fn default() -> Self {
        WorldConfig {
            chunk_size: CHUNK_SIZE,
            grid_size: CHUNK_GRID_SIZE,
            block_size: BLOCK_SIZE,
            seed: WORLD_SEED,
            noise_scale: NOISE_SCALE,
            threshold: SOLID_THRESHOLD,
        }
    }
}

/// Errors produced while loading a [`WorldConfig`] from disk.
///
/// Config loading is the only fallible path in the crate; every terrain
/// operation is total over its valid input domain.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("failed to read world config: {0}")]
    Io(#[from] std::io::Error),
    /// The config file was not valid JSON for a [`WorldConfig`].
    #[error("failed to parse world config: {0}")]
    Parse(#[from] serde_json::Error),
    /// The parsed config contained values the terrain core cannot use.
    #[error("invalid world config: {0}")]
    Invalid(String),
}

impl WorldConfig {
    /// Loads and validates a config from a JSON file.
    ///
    /// # Arguments
    /// * `path` - Path to a JSON file with any subset of the config fields
    ///
    /// # Returns
    /// The validated config, or a [`ConfigError`] describing what failed.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)?;
        let config: WorldConfig = serde_json::from_str(&raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that the config describes a buildable world.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.chunk_size == 0 {
            return Err(ConfigError::Invalid("chunk_size must be nonzero".into()));
        }
        if self.grid_size == 0 {
            return Err(ConfigError::Invalid("grid_size must be nonzero".into()));
        }
        if self.block_size <= 0.0 {
            return Err(ConfigError::Invalid("block_size must be positive".into()));
        }
        if !(0.0..=1.0).contains(&self.threshold) {
            return Err(ConfigError::Invalid(format!(
                "threshold {} outside [0, 1]",
                self.threshold
            )));
        }
        Ok(())
    }

    /// Edge length of one chunk in world units.
    pub fn chunk_extent(&self) -> f32 {
        self.chunk_size as f32 * self.block_size
    }
}
