//! Preview rendering surfaces.
//!
//! Shapes draw through the small [`Surface`] trait. [`RecordingSurface`]
//! keeps the calls as a command list; [`PixmapSurface`] strokes into a
//! tiny-skia pixmap.

use image::{Rgba, RgbaImage};
use kurbo::BezPath;
use tiny_skia::{Color, LineCap, LineJoin, Paint, Pixmap, Rect, Stroke, Transform};

use crate::errors::ShapeError;
use crate::raster::{self, MAX_ALPHA, Scanline};

/// The drawing calls a shape needs to preview itself
pub trait Surface {
    /// Add a straight segment to the pending path
    fn draw_line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64);

    /// Set the width used by the next `stroke`
    fn set_line_width(&mut self, width: f64);

    /// Stroke and clear the pending path
    fn stroke(&mut self);
}

/// A recorded drawing call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Line { x1: f64, y1: f64, x2: f64, y2: f64 },
    LineWidth(f64),
    Stroke,
}

/// Surface that records calls instead of drawing them
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordingSurface {
    commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Replay every recorded call onto another surface
    pub fn replay(&self, target: &mut dyn Surface) {
        for command in &self.commands {
            match *command {
                DrawCommand::Line { x1, y1, x2, y2 } => target.draw_line(x1, y1, x2, y2),
                DrawCommand::LineWidth(width) => target.set_line_width(width),
                DrawCommand::Stroke => target.stroke(),
            }
        }
    }
}

impl Surface for RecordingSurface {
    fn draw_line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64) {
        self.commands.push(DrawCommand::Line { x1, y1, x2, y2 });
    }

    fn set_line_width(&mut self, width: f64) {
        self.commands.push(DrawCommand::LineWidth(width));
    }

    fn stroke(&mut self) {
        self.commands.push(DrawCommand::Stroke);
    }
}

/// Surface backed by a `tiny_skia::Pixmap`.
///
/// Coordinates are scaled by `scale` after shifting half a unit, so canvas
/// coordinates address pixel centers of an image `scale` times larger.
/// Line widths are taken as given; callers pre-scale them.
#[derive(Debug, Clone)]
pub struct PixmapSurface {
    pixmap: Pixmap,
    scale: f64,
    color: Color,
    line_width: f64,
    path: BezPath,
}

impl PixmapSurface {
    /// Blank image filled with `background`. Fails on a zero-sized image.
    pub fn new(width: u32, height: u32, background: Color) -> Result<Self, ShapeError> {
        let mut pixmap =
            Pixmap::new(width, height).ok_or(ShapeError::InvalidCanvas { width, height })?;
        pixmap.fill(background);
        Ok(Self {
            pixmap,
            scale: 1.0,
            color: Color::BLACK,
            line_width: 1.0,
            path: BezPath::new(),
        })
    }

    pub fn with_scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    /// Color used by subsequent strokes
    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    /// Copy out as a straight-alpha RGBA image
    pub fn to_image(&self) -> RgbaImage {
        let width = self.pixmap.width();
        let pixels = self.pixmap.pixels();
        RgbaImage::from_fn(width, self.pixmap.height(), |x, y| {
            let c = pixels[(y * width + x) as usize].demultiply();
            Rgba([c.red(), c.green(), c.blue(), c.alpha()])
        })
    }

    fn map(&self, x: f64, y: f64) -> (f64, f64) {
        ((x + 0.5) * self.scale, (y + 0.5) * self.scale)
    }
}

impl Surface for PixmapSurface {
    fn draw_line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64) {
        let start = self.map(x1, y1);
        let end = self.map(x2, y2);
        self.path.move_to(start);
        self.path.line_to(end);
    }

    fn set_line_width(&mut self, width: f64) {
        self.line_width = width;
    }

    fn stroke(&mut self) {
        let path = std::mem::take(&mut self.path);
        let Some(path) = raster::skia_path(&path) else {
            return;
        };

        let mut paint = Paint::default();
        paint.set_color(self.color);
        paint.anti_alias = true;
        let stroke = Stroke {
            width: self.line_width as f32,
            line_cap: LineCap::Round,
            line_join: LineJoin::Round,
            ..Stroke::default()
        };
        self.pixmap
            .stroke_path(&path, &paint, &stroke, Transform::identity(), None);
    }
}

/// Composite `color` onto `pixmap` along each span, weighted by span coverage
pub fn draw_scanlines(pixmap: &mut Pixmap, color: Color, lines: &[Scanline]) {
    let lines = raster::crop_scanlines(lines.to_vec(), pixmap.width(), pixmap.height());
    let mut paint = Paint::default();
    paint.anti_alias = false;

    for line in &lines {
        let mut span_color = color;
        span_color.set_alpha(color.alpha() * line.alpha as f32 / MAX_ALPHA as f32);
        paint.set_color(span_color);
        let Some(rect) = Rect::from_xywh(line.x1 as f32, line.y as f32, line.len() as f32, 1.0)
        else {
            continue;
        };
        pixmap.fill_rect(rect, &paint, Transform::identity(), None);
    }
}
