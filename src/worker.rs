//! The canvas context shared by every shape operation.
//!
//! A [`Worker`] owns the canvas bounds, the mutation tunables, and a seeded
//! random stream. Shapes never hold on to it; they borrow it for the duration
//! of a single call, so one worker per thread keeps runs reproducible.

use rand::{Rng, SeedableRng};
use rand_distr::StandardNormal;
use rand_pcg::Pcg64;

use crate::errors::ShapeError;
use crate::shape::mutation::MutationConfig;

/// Canvas bounds plus a private random stream
#[derive(Debug, Clone)]
pub struct Worker {
    width: u32,
    height: u32,
    rng: Pcg64,
    config: MutationConfig,
}

impl Worker {
    /// Create a worker for a `width` x `height` canvas.
    ///
    /// Fails fast when either dimension is zero.
    pub fn new(width: u32, height: u32, seed: u64) -> Result<Self, ShapeError> {
        if width == 0 || height == 0 {
            return Err(ShapeError::InvalidCanvas { width, height });
        }
        crate::log::debug!(width, height, seed, "worker created");
        Ok(Self {
            width,
            height,
            rng: Pcg64::seed_from_u64(seed),
            config: MutationConfig::default(),
        })
    }

    pub fn with_config(mut self, config: MutationConfig) -> Self {
        self.config = config;
        self
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Canvas size as floats, `(width, height)`
    pub fn size(&self) -> (f64, f64) {
        (self.width as f64, self.height as f64)
    }

    pub fn config(&self) -> &MutationConfig {
        &self.config
    }

    /// Uniform float in `[0, 1)`
    pub fn random_f64(&mut self) -> f64 {
        self.rng.random::<f64>()
    }

    /// Standard normal float (mean 0, deviation 1)
    pub fn random_normal(&mut self) -> f64 {
        self.rng.sample::<f64, _>(StandardNormal)
    }

    /// Uniform index in `0..n`. `n` must be non-zero.
    pub fn random_index(&mut self, n: usize) -> usize {
        self.rng.random_range(0..n)
    }
}
