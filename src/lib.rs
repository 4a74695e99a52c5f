//! An infinite-line shape primitive for image approximation.
//!
//! A [`Line`] is defined by two control points but always drawn across the
//! whole canvas. It can be sampled at random, perturbed with a bounded
//! rejection-sampling mutation, previewed on a [`Surface`], written out as an
//! SVG fragment, and turned into [`Scanline`] coverage for scoring against a
//! target image.
//!
//! Every operation that needs canvas bounds or randomness borrows a
//! [`Worker`]; shapes themselves are plain values.

pub mod errors;
pub mod log;
pub mod raster;
pub mod shape;
pub mod surface;
pub mod svg;
pub mod types;
pub mod worker;

pub use errors::{ShapeError, StyleParseError};
pub use raster::{Scanline, crop_scanlines, fill_coverage, stroke_path};
pub use shape::geometry::{Clip, Extension, extend_to_canvas};
pub use shape::{Line, MutationConfig, MutationTarget, Shape, ShapeKind, ShapeType};
pub use surface::{DrawCommand, PixmapSurface, RecordingSurface, Surface, draw_scanlines};
pub use svg::{Color, SvgStyle, svg_document};
pub use types::{Point, StrokeWidth};
pub use worker::Worker;
