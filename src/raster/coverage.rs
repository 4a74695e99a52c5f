//! Anti-aliased coverage of filled outlines.
//!
//! Outlines are filled into a `tiny_skia::Mask` with the non-zero winding
//! rule, then each mask row is folded into runs of equal alpha.

use kurbo::{BezPath, PathEl};
use tiny_skia::{FillRule, Mask, PathBuilder, Transform};

use super::Scanline;

/// Largest alpha value a span can carry (full coverage)
pub const MAX_ALPHA: u32 = 0xffff;

/// Mask bytes run 0..=255; this widens them to 0..=MAX_ALPHA
const ALPHA_SCALE: u32 = MAX_ALPHA / 0xff;

/// Convert a kurbo path to a tiny-skia path. Empty or degenerate paths give `None`.
pub fn skia_path(path: &BezPath) -> Option<tiny_skia::Path> {
    let mut builder = PathBuilder::new();
    for el in path.elements() {
        match *el {
            PathEl::MoveTo(p) => builder.move_to(p.x as f32, p.y as f32),
            PathEl::LineTo(p) => builder.line_to(p.x as f32, p.y as f32),
            PathEl::QuadTo(c, p) => builder.quad_to(c.x as f32, c.y as f32, p.x as f32, p.y as f32),
            PathEl::CurveTo(c1, c2, p) => builder.cubic_to(
                c1.x as f32,
                c1.y as f32,
                c2.x as f32,
                c2.y as f32,
                p.x as f32,
                p.y as f32,
            ),
            PathEl::ClosePath => builder.close(),
        }
    }
    builder.finish()
}

/// Fill `outline` on a `width` x `height` canvas and return its coverage
/// spans, top row first. Open subpaths are filled as if closed.
pub fn fill_coverage(outline: &BezPath, width: u32, height: u32) -> Vec<Scanline> {
    let Some(path) = skia_path(outline) else {
        return Vec::new();
    };
    let Some(mut mask) = Mask::new(width, height) else {
        return Vec::new();
    };
    mask.fill_path(&path, FillRule::Winding, true, Transform::identity());
    mask_scanlines(&mask)
}

/// Fold every row of `mask` into runs of equal alpha
pub fn mask_scanlines(mask: &Mask) -> Vec<Scanline> {
    let width = mask.width() as usize;
    let mut lines = Vec::new();
    if width == 0 {
        return lines;
    }
    for (y, row) in mask.data().chunks_exact(width).enumerate() {
        emit_row(row, y as i32, &mut lines);
    }
    lines
}

fn emit_row(row: &[u8], y: i32, lines: &mut Vec<Scanline>) {
    let mut run: Option<Scanline> = None;

    for (x, &coverage) in row.iter().enumerate() {
        let alpha = coverage as u32 * ALPHA_SCALE;
        let x = x as i32;
        if let Some(span) = run.as_mut() {
            if span.alpha == alpha {
                span.x2 = x;
                continue;
            }
        }
        if let Some(span) = run.take() {
            lines.push(span);
        }
        if alpha > 0 {
            run = Some(Scanline::new(y, x, x, alpha));
        }
    }

    if let Some(span) = run {
        lines.push(span);
    }
}
