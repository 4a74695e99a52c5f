//! Scanline coverage for scoring shapes against a target image.
//!
//! This module is organized into submodules:
//! - `coverage`: anti-aliased, non-zero winding fills through a tiny-skia mask
//!
//! [`stroke_path`] is the bridge shapes use: it strokes a centerline with
//! round caps and joins, fills the outline, and crops the result to the
//! worker's canvas.

pub mod coverage;

pub use coverage::{MAX_ALPHA, fill_coverage, skia_path};

use kurbo::{BezPath, Cap, Join, Stroke, StrokeOpts};

use crate::shape::defaults;
use crate::worker::Worker;

/// One horizontal run of pixels sharing a coverage value.
///
/// `x2` is inclusive; `alpha` runs from 0 to [`MAX_ALPHA`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Scanline {
    pub y: i32,
    pub x1: i32,
    pub x2: i32,
    pub alpha: u32,
}

impl Scanline {
    pub fn new(y: i32, x1: i32, x2: i32, alpha: u32) -> Self {
        Self { y, x1, x2, alpha }
    }

    /// Number of pixels in the run
    pub fn len(&self) -> usize {
        (self.x2 - self.x1 + 1).max(0) as usize
    }

    pub fn is_empty(&self) -> bool {
        self.x2 < self.x1
    }
}

/// Drop spans outside a `width` x `height` canvas and clamp the rest to it
pub fn crop_scanlines(lines: Vec<Scanline>, width: u32, height: u32) -> Vec<Scanline> {
    let (w, h) = (width as i32, height as i32);
    lines
        .into_iter()
        .filter(|line| line.y >= 0 && line.y < h && line.x1 < w && line.x2 >= 0)
        .map(|line| Scanline {
            x1: line.x1.max(0),
            x2: line.x2.min(w - 1),
            ..line
        })
        .filter(|line| !line.is_empty())
        .collect()
}

/// Stroke `path` at `width` with round caps and joins and return the
/// coverage of the outline on the worker's canvas
pub fn stroke_path(worker: &Worker, path: &BezPath, width: f64) -> Vec<Scanline> {
    let style = Stroke::new(width).with_caps(Cap::Round).with_join(Join::Round);
    let outline = kurbo::stroke(
        path.iter(),
        &style,
        &StrokeOpts::default(),
        defaults::STROKE_TOLERANCE,
    );

    let lines = fill_coverage(&outline, worker.width(), worker.height());
    crate::log::trace!(spans = lines.len(), width, "stroked path");
    crop_scanlines(lines, worker.width(), worker.height())
}
