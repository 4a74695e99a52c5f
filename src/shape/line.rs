//! The infinite line shape.
//!
//! Two control points fix the direction and position of a line; what gets
//! drawn is that line extended across the whole canvas. A short control
//! segment and a long one with the same direction render identically.

use glam::dvec2;
use kurbo::BezPath;

use crate::errors::ShapeError;
use crate::raster::{self, Scanline};
use crate::surface::Surface;
use crate::svg::{self, SvgStyle};
use crate::types::{Point, StrokeWidth};
use crate::worker::Worker;

use super::Shape;
use super::defaults;
use super::geometry::{Clip, extend_to_canvas, touches_origin_edge};
use super::mutation::{MutationTarget, jitter_point, jitter_width, mutate_until_valid};

/// A stroked line spanning the canvas
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    p1: Point,
    p2: Point,
    extended1: Point,
    extended2: Point,
    clip: Clip,
    width: StrokeWidth,
}

impl Line {
    /// Line through `p1` and `p2`.
    ///
    /// The points are ordered so that `p1.x <= p2.x`, the width is clamped
    /// into `[1, 4]`, and the extension is computed for the worker's canvas.
    pub fn new(worker: &Worker, p1: Point, p2: Point, width: f64) -> Self {
        let (p1, p2) = if p1.x > p2.x { (p2, p1) } else { (p1, p2) };
        let mut line = Self {
            p1,
            p2,
            extended1: p1,
            extended2: p2,
            clip: Clip::Vertical,
            width: StrokeWidth::clamped(width),
        };
        line.extend(worker);
        line
    }

    /// Sample a line through two uniform points on the canvas, then mutate
    /// it once.
    pub fn random(worker: &mut Worker) -> Result<Self, ShapeError> {
        let (w, h) = worker.size();
        let p1 = dvec2(worker.random_f64() * w, worker.random_f64() * h);
        let p2 = dvec2(worker.random_f64() * w, worker.random_f64() * h);

        let mut line = Self::new(worker, p1, p2, defaults::LINE_WIDTH);
        line.mutate(worker)?;
        crate::log::debug!(start = ?line.extended1, end = ?line.extended2, "random line");
        Ok(line)
    }

    pub fn p1(&self) -> Point {
        self.p1
    }

    pub fn p2(&self) -> Point {
        self.p2
    }

    /// Endpoints on the canvas boundary, in control point order
    pub fn extended(&self) -> (Point, Point) {
        (self.extended1, self.extended2)
    }

    /// Edges the extension was clipped against
    pub fn clip(&self) -> Clip {
        self.clip
    }

    pub fn width(&self) -> StrokeWidth {
        self.width
    }

    /// Recompute the extended endpoints from the control points
    pub fn extend(&mut self, worker: &Worker) {
        let (w, h) = worker.size();
        let extension = extend_to_canvas(self.p1, self.p2, w, h);
        self.extended1 = extension.start;
        self.extended2 = extension.end;
        self.clip = extension.clip;
    }

    /// One perturbation of the target the worker picks
    fn step(&mut self, worker: &mut Worker) {
        match MutationTarget::choose(worker) {
            MutationTarget::FirstPoint => self.p1 = jitter_point(worker, self.p1),
            MutationTarget::SecondPoint => self.p2 = jitter_point(worker, self.p2),
            MutationTarget::Width => self.width = jitter_width(worker, self.width),
        }
        self.extend(worker);
    }

    fn centerline(&self) -> BezPath {
        let mut path = BezPath::new();
        path.move_to((self.extended1.x, self.extended1.y));
        path.line_to((self.extended2.x, self.extended2.y));
        path
    }
}

impl Shape for Line {
    fn mutate(&mut self, worker: &mut Worker) -> Result<(), ShapeError> {
        mutate_until_valid(self, worker, |line, worker| line.step(worker), |line| line.valid())?;
        Ok(())
    }

    fn valid(&self) -> bool {
        touches_origin_edge(self.extended1, self.extended2)
    }

    fn render(&self, surface: &mut dyn Surface, scale: f64) {
        surface.draw_line(
            self.extended1.x,
            self.extended1.y,
            self.extended2.x,
            self.extended2.y,
        );
        surface.set_line_width(self.width.raw() * scale);
        surface.stroke();
    }

    fn svg(&self, style: &SvgStyle) -> String {
        svg::line_element(style, self.extended1, self.extended2, self.width.raw())
    }

    fn rasterize(&self, worker: &Worker) -> Vec<Scanline> {
        raster::stroke_path(worker, &self.centerline(), self.width.raw())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::mutation::MutationConfig;
    use crate::surface::{DrawCommand, RecordingSurface};

    fn worker(width: u32, height: u32) -> Worker {
        Worker::new(width, height, 5).unwrap()
    }

    #[test]
    fn new_orders_control_points() {
        let worker = worker(100, 100);
        let line = Line::new(&worker, dvec2(80.0, 10.0), dvec2(20.0, 30.0), 1.0);
        assert_eq!(line.p1(), dvec2(20.0, 30.0));
        assert_eq!(line.p2(), dvec2(80.0, 10.0));
    }

    #[test]
    fn new_clamps_width() {
        let worker = worker(10, 10);
        let thin = Line::new(&worker, dvec2(1.0, 1.0), dvec2(2.0, 8.0), 0.5);
        let thick = Line::new(&worker, dvec2(1.0, 1.0), dvec2(2.0, 8.0), 12.0);
        assert_eq!(thin.width(), StrokeWidth::MIN);
        assert_eq!(thick.width(), StrokeWidth::MAX);
    }

    #[test]
    fn valid_needs_a_zero_coordinate() {
        let worker = worker(10, 10);
        let mut line = Line::new(&worker, dvec2(1.0, 1.0), dvec2(2.0, 8.0), 1.0);
        assert!(line.valid());

        line.extended1 = dvec2(3.0, 10.0);
        line.extended2 = dvec2(10.0, 4.0);
        assert!(!line.valid());

        line.extended2 = dvec2(0.0, 4.0);
        assert!(line.valid());
    }

    #[test]
    fn mutation_keeps_points_near_canvas() {
        let mut worker = worker(30, 20);
        let mut line = Line::random(&mut worker).unwrap();
        for _ in 0..200 {
            line.mutate(&mut worker).unwrap();
            assert!(line.valid());
            for p in [line.p1(), line.p2()] {
                assert!((-16.0..=45.0).contains(&p.x));
                assert!((-16.0..=35.0).contains(&p.y));
            }
        }
    }

    #[test]
    fn default_mutation_never_touches_width() {
        let mut worker = worker(30, 20);
        let mut line = Line::new(&worker, dvec2(3.0, 4.0), dvec2(20.0, 9.0), 2.5);
        for _ in 0..200 {
            line.mutate(&mut worker).unwrap();
            assert_eq!(line.width().raw(), 2.5);
        }
    }

    #[test]
    fn zero_attempt_budget_leaves_line_untouched() {
        let config = MutationConfig::default().with_max_attempts(0);
        let mut worker = worker(30, 20).with_config(config);
        let mut line = Line::new(&worker, dvec2(3.0, 4.0), dvec2(20.0, 9.0), 1.0);
        let before = line.clone();
        assert_eq!(
            line.mutate(&mut worker),
            Err(ShapeError::MutationExhausted { attempts: 0 })
        );
        assert_eq!(line, before);
    }

    #[test]
    fn negative_margin_on_tiny_canvas_still_mutates() {
        let config = MutationConfig {
            point_margin: -1.0,
            ..MutationConfig::default()
        };
        let mut worker = worker(1, 1).with_config(config);
        let mut line = Line::new(&worker, dvec2(0.0, 0.0), dvec2(0.5, 0.25), 1.0);
        for _ in 0..20 {
            line.mutate(&mut worker).unwrap();
            assert!(line.valid());
        }
    }

    #[test]
    fn render_draws_extended_segment() {
        let worker = worker(200, 100);
        let line = Line::new(&worker, dvec2(50.0, 10.0), dvec2(50.0, 90.0), 2.0);
        let mut surface = RecordingSurface::new();
        line.render(&mut surface, 3.0);
        assert_eq!(
            surface.commands(),
            [
                DrawCommand::Line {
                    x1: 50.0,
                    y1: 0.0,
                    x2: 50.0,
                    y2: 100.0
                },
                DrawCommand::LineWidth(6.0),
                DrawCommand::Stroke,
            ]
        );
    }
}
