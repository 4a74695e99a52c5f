//! Canvas extension: stretch the line through two control points out to the
//! canvas boundary.

use glam::dvec2;

use crate::types::Point;

/// Which pair of canvas edges an extended segment was clipped against
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Clip {
    /// Control points share an x; the segment runs top to bottom
    Vertical,
    /// Steeper than the canvas diagonal; clipped to `y = 0` and `y = H`
    TopBottom,
    /// Shallower than the canvas diagonal; clipped to `x = 0` and `x = W`
    LeftRight,
    /// Slope magnitude equals the canvas diagonal; snapped to the
    /// `(0,0)`-`(W,H)` corners regardless of the slope's sign
    Corners,
}

/// Result of extending a control segment to the canvas boundary
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extension {
    pub start: Point,
    pub end: Point,
    pub clip: Clip,
}

/// Extend the infinite line through `p1` and `p2` to a `width` x `height`
/// canvas.
///
/// `start` is derived from `p1` and `end` from `p2`. Steep lines land on the
/// top then bottom edge, shallow ones on the left then right edge.
pub fn extend_to_canvas(p1: Point, p2: Point, width: f64, height: f64) -> Extension {
    if p1.x == p2.x {
        return Extension {
            start: dvec2(p1.x, 0.0),
            end: dvec2(p2.x, height),
            clip: Clip::Vertical,
        };
    }

    let diagonal = width / height;
    let slope = (p2.y - p1.y) / (p2.x - p1.x);

    let extension = if diagonal < slope.abs() {
        Extension {
            start: dvec2(p1.x - p1.y / slope, 0.0),
            end: dvec2(p2.x + (height - p2.y) / slope, height),
            clip: Clip::TopBottom,
        }
    } else if diagonal > slope.abs() {
        Extension {
            start: dvec2(0.0, p1.y - p1.x * slope),
            end: dvec2(width, p2.y + (width - p2.x) * slope),
            clip: Clip::LeftRight,
        }
    } else {
        Extension {
            start: Point::ZERO,
            end: dvec2(width, height),
            clip: Clip::Corners,
        }
    };

    crate::log::trace!(clip = ?extension.clip, slope, "extended to canvas");
    extension
}

/// True when either endpoint has a coordinate sitting on zero
pub fn touches_origin_edge(start: Point, end: Point) -> bool {
    start.x == 0.0 || start.y == 0.0 || end.x == 0.0 || end.y == 0.0
}
