//! # Terrain Field
//!
//! The noise field terrain is carved from. A [`TerrainField`] wraps any
//! `noise::NoiseFn` source (seeded Perlin in production, `Constant` in tests),
//! remaps its output into `[0, 1]`, and applies the solid threshold.
//!
//! Sampling happens in *cell* coordinates. The field applies the configured
//! noise scale itself, so adjacent chunks that pass world-continuous cell
//! coordinates sample one continuous field and their terrain lines up at the
//! seams.

use noise::NoiseFn;

use crate::config::WorldConfig;

/// A thresholded `[0, 1]` noise field in world cell coordinates.
///
/// Borrowing the noise source keeps the field cheap to construct per
/// generation pass and keeps chunks free of any noise state.
pub struct TerrainField<'a, N> {
    noise: &'a N,
    scale: f64,
    threshold: f64,
}

impl<'a, N: NoiseFn<f64, 3>> TerrainField<'a, N> {
    /// Wraps a noise source with the scale and threshold from `config`.
    pub fn new(noise: &'a N, config: &WorldConfig) -> Self {
        TerrainField {
            noise,
            scale: config.noise_scale,
            threshold: config.threshold,
        }
    }

    /// Samples the field at a world cell coordinate, remapped into `[0, 1]`.
    ///
    /// Perlin-style sources emit roughly `[-1, 1]`; the remap mirrors the
    /// `noise3D_01` convention so thresholds are expressed in `[0, 1]`.
    pub fn sample(&self, cell_x: f64, cell_y: f64, cell_z: f64) -> f64 {
        let raw = self.noise.get([
            cell_x * self.scale,
            cell_y * self.scale,
            cell_z * self.scale,
        ]);
        ((raw + 1.0) * 0.5).clamp(0.0, 1.0)
    }

    /// Whether the cell at a world cell coordinate is solid.
    pub fn is_solid(&self, cell_x: i64, cell_y: i64, cell_z: i64) -> bool {
        self.sample(cell_x as f64, cell_y as f64, cell_z as f64) >= self.threshold
    }
}
