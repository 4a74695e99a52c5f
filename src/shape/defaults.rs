//! Default mutation and rasterization settings (all in canvas units)

/// Standard deviation of the Gaussian nudge applied to a control point
pub const POINT_SIGMA: f64 = 16.0;
/// How far a control point may wander outside the canvas on either side
pub const POINT_MARGIN: f64 = 16.0;
/// Standard deviation of the width jitter
pub const WIDTH_SIGMA: f64 = 1.0;
/// Stroke width given to freshly sampled lines
pub const LINE_WIDTH: f64 = 1.0;
/// Upper bound on rejection-sampling attempts per mutation
pub const MAX_MUTATION_ATTEMPTS: usize = 1000;
/// Accuracy of the stroked outline, in canvas units
pub const STROKE_TOLERANCE: f64 = 0.1;
