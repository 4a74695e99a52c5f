//! Rejection-sampling mutation shared by shape variants.
//!
//! A variant supplies one perturbation step and a validity check;
//! [`mutate_until_valid`] repeats the step until the shape is valid or the
//! attempt budget runs out, in which case the shape is put back exactly as
//! it was.

use crate::errors::ShapeError;
use crate::types::{Point, StrokeWidth};
use crate::worker::Worker;

use super::defaults;

/// Mutation tunables carried by a [`Worker`]
#[derive(Debug, Clone, PartialEq)]
pub struct MutationConfig {
    /// Deviation of the Gaussian nudge on control points
    pub point_sigma: f64,
    /// Distance control points may stray outside the canvas
    pub point_margin: f64,
    /// Deviation of the width jitter
    pub width_sigma: f64,
    /// Whether width is a mutation target alongside the two control points.
    /// Off by default: only control points move.
    pub mutate_width: bool,
    /// Rejection-sampling budget per mutation
    pub max_attempts: usize,
}

impl Default for MutationConfig {
    fn default() -> Self {
        Self {
            point_sigma: defaults::POINT_SIGMA,
            point_margin: defaults::POINT_MARGIN,
            width_sigma: defaults::WIDTH_SIGMA,
            mutate_width: false,
            max_attempts: defaults::MAX_MUTATION_ATTEMPTS,
        }
    }
}

impl MutationConfig {
    pub fn with_mutate_width(mut self, enabled: bool) -> Self {
        self.mutate_width = enabled;
        self
    }

    pub fn with_max_attempts(mut self, attempts: usize) -> Self {
        self.max_attempts = attempts;
        self
    }

    pub fn with_point_sigma(mut self, sigma: f64) -> Self {
        self.point_sigma = sigma;
        self
    }
}

/// What a single mutation step perturbs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationTarget {
    FirstPoint,
    SecondPoint,
    Width,
}

impl MutationTarget {
    /// Pick a target uniformly. Width only takes part when the worker's
    /// config enables it.
    pub fn choose(worker: &mut Worker) -> MutationTarget {
        let choices = if worker.config().mutate_width { 3 } else { 2 };
        match worker.random_index(choices) {
            0 => MutationTarget::FirstPoint,
            1 => MutationTarget::SecondPoint,
            _ => MutationTarget::Width,
        }
    }
}

/// Nudge a point with Gaussian noise, keeping it within the canvas plus margin
pub fn jitter_point(worker: &mut Worker, point: Point) -> Point {
    let (w, h) = worker.size();
    let sigma = worker.config().point_sigma;
    let margin = worker.config().point_margin;
    let x = point.x + worker.random_normal() * sigma;
    let y = point.y + worker.random_normal() * sigma;
    // max then min: a negative margin can invert the bounds
    Point::new(
        x.max(-margin).min(w - 1.0 + margin),
        y.max(-margin).min(h - 1.0 + margin),
    )
}

/// Jitter a stroke width; the result always stays within `[1, 4]`
pub fn jitter_width(worker: &mut Worker, width: StrokeWidth) -> StrokeWidth {
    let sigma = worker.config().width_sigma;
    width.jitter(worker.random_normal() * sigma)
}

/// Apply `step` until `valid` holds, at most `max_attempts` times.
///
/// Perturbations accumulate across attempts. Returns the number of attempts
/// used. On exhaustion the shape is restored to its state before the call.
pub fn mutate_until_valid<S, F, V>(
    shape: &mut S,
    worker: &mut Worker,
    mut step: F,
    valid: V,
) -> Result<usize, ShapeError>
where
    S: Clone,
    F: FnMut(&mut S, &mut Worker),
    V: Fn(&S) -> bool,
{
    let original = shape.clone();
    let max_attempts = worker.config().max_attempts;

    for attempt in 1..=max_attempts {
        step(shape, worker);
        if valid(shape) {
            crate::log::trace!(attempt, "mutation accepted");
            return Ok(attempt);
        }
    }

    *shape = original;
    crate::log::warn!(max_attempts, "mutation exhausted, shape restored");
    Err(ShapeError::MutationExhausted {
        attempts: max_attempts,
    })
}
