//! Shape primitives for image approximation
//!
//! Each shape is its own type that knows how to:
//! - Perturb itself with a bounded, rejection-sampled mutation
//! - Check that its geometry is usable
//! - Draw itself to a preview surface
//! - Emit an SVG fragment
//! - Produce scanline coverage for scoring
//!
//! Copying is plain `Clone`: shapes are value types and never share state.
//!
//! This module is organized into submodules:
//! - `defaults`: Default mutation and rasterization settings
//! - `geometry`: Extension of control segments to the canvas boundary
//! - `mutation`: Mutation config and the shared rejection loop
//! - `line`: The infinite line shape

pub mod defaults;
pub mod geometry;
pub mod line;
pub mod mutation;

pub use line::Line;
pub use mutation::{MutationConfig, MutationTarget};

use enum_dispatch::enum_dispatch;

use crate::errors::ShapeError;
use crate::raster::Scanline;
use crate::surface::Surface;
use crate::svg::SvgStyle;
use crate::worker::Worker;

/// Common behavior for all shapes
#[enum_dispatch]
pub trait Shape {
    /// Perturb the shape in place until it is valid again.
    ///
    /// On [`ShapeError::MutationExhausted`] the shape is unchanged.
    fn mutate(&mut self, worker: &mut Worker) -> Result<(), ShapeError>;

    /// Whether the current geometry is usable
    fn valid(&self) -> bool;

    /// Draw to a preview surface, stroke widths multiplied by `scale`
    fn render(&self, surface: &mut dyn Surface, scale: f64);

    /// SVG fragment painted with `style`
    fn svg(&self, style: &SvgStyle) -> String;

    /// Coverage spans within the worker's canvas
    fn rasterize(&self, worker: &Worker) -> Vec<Scanline>;
}

/// Every shape variant, dispatched statically
#[enum_dispatch(Shape)]
#[derive(Debug, Clone, PartialEq)]
pub enum ShapeKind {
    Line(Line),
}

/// Which variant to sample when creating a fresh shape
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShapeType {
    #[default]
    Line,
}

impl ShapeType {
    /// Sample a new random shape of this type
    pub fn random(self, worker: &mut Worker) -> Result<ShapeKind, ShapeError> {
        match self {
            ShapeType::Line => Line::random(worker).map(ShapeKind::from),
        }
    }
}
