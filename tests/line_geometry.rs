//! Extension and mutation properties of the line shape.

use glam::dvec2;
use primitive_line::{Clip, Line, MutationConfig, Shape, ShapeError, StrokeWidth, Worker};

#[test]
fn diagonal_slope_on_square_canvas_uses_corners() {
    let worker = Worker::new(100, 100, 0).unwrap();
    let line = Line::new(&worker, dvec2(10.0, 10.0), dvec2(90.0, 90.0), 1.0);
    assert_eq!(line.clip(), Clip::Corners);
    assert_eq!(line.extended(), (dvec2(0.0, 0.0), dvec2(100.0, 100.0)));
}

#[test]
fn vertical_control_segment_runs_top_to_bottom() {
    let worker = Worker::new(200, 100, 0).unwrap();
    let line = Line::new(&worker, dvec2(50.0, 0.0), dvec2(50.0, 100.0), 1.0);
    assert_eq!(line.clip(), Clip::Vertical);
    assert_eq!(line.extended(), (dvec2(50.0, 0.0), dvec2(50.0, 100.0)));
}

#[test]
fn short_and_long_segments_extend_alike() {
    let worker = Worker::new(120, 80, 0).unwrap();
    let short = Line::new(&worker, dvec2(30.0, 20.0), dvec2(31.0, 20.25), 1.0);
    let long = Line::new(&worker, dvec2(30.0, 20.0), dvec2(110.0, 40.0), 1.0);
    let (s1, s2) = short.extended();
    let (l1, l2) = long.extended();
    assert!(s1.abs_diff_eq(l1, 1e-9), "{s1} vs {l1}");
    assert!(s2.abs_diff_eq(l2, 1e-9), "{s2} vs {l2}");
    assert_eq!((s1.x, s2.x), (0.0, 120.0));
}

#[test]
fn random_lines_are_valid() {
    let mut worker = Worker::new(97, 61, 1234).unwrap();
    for _ in 0..500 {
        let line = Line::random(&mut worker).unwrap();
        assert!(line.valid());
        let (a, b) = line.extended();
        assert!(a.x == 0.0 || a.y == 0.0 || b.x == 0.0 || b.y == 0.0);
        assert!(line.p1().x.is_finite() && line.p2().y.is_finite());
    }
}

#[test]
fn mutated_lines_stay_valid() {
    let mut worker = Worker::new(64, 128, 99).unwrap();
    let mut line = Line::random(&mut worker).unwrap();
    for _ in 0..1000 {
        let mut candidate = line.clone();
        candidate.mutate(&mut worker).unwrap();
        assert!(candidate.valid());
        line = candidate;
    }
}

#[test]
fn mutating_a_copy_leaves_the_original_alone() {
    let mut worker = Worker::new(50, 50, 5).unwrap();
    let original = Line::random(&mut worker).unwrap();
    let before = original.clone();

    let mut copy = original.clone();
    assert_eq!(copy, original);
    copy.mutate(&mut worker).unwrap();

    assert_eq!(original, before);
    assert_ne!(copy.extended(), original.extended());
}

#[test]
fn width_mutation_stays_in_range() {
    let config = MutationConfig::default().with_mutate_width(true);
    let mut worker = Worker::new(40, 40, 77).unwrap().with_config(config);

    for initial in [-5.0, 0.0, 1.0, 2.5, 4.0, 100.0, f64::NAN] {
        let mut line = Line::new(&worker, dvec2(5.0, 5.0), dvec2(30.0, 12.0), initial);
        let mut seen_change = false;
        for _ in 0..300 {
            let before = line.width();
            line.mutate(&mut worker).unwrap();
            let width = line.width();
            assert!(width >= StrokeWidth::MIN && width <= StrokeWidth::MAX, "{width}");
            seen_change |= width != before;
        }
        assert!(seen_change, "width never moved from {initial}");
    }
}

#[test]
fn same_seed_same_lines() {
    let mut a = Worker::new(80, 60, 2024).unwrap();
    let mut b = Worker::new(80, 60, 2024).unwrap();
    let mut la = Line::random(&mut a).unwrap();
    let mut lb = Line::random(&mut b).unwrap();
    for _ in 0..50 {
        assert_eq!(la, lb);
        la.mutate(&mut a).unwrap();
        lb.mutate(&mut b).unwrap();
    }
}

#[test]
fn exhausted_mutation_reports_and_restores() {
    let config = MutationConfig::default().with_max_attempts(0);
    let mut worker = Worker::new(20, 20, 1).unwrap().with_config(config);
    let mut line = Line::new(&worker, dvec2(2.0, 3.0), dvec2(15.0, 9.0), 1.0);
    let before = line.clone();

    let err = line.mutate(&mut worker).unwrap_err();
    assert_eq!(err, ShapeError::MutationExhausted { attempts: 0 });
    assert_eq!(err.to_string(), "mutation exhausted after 0 attempts");
    assert_eq!(line, before);
}

#[test]
fn empty_canvas_is_rejected() {
    let err = Worker::new(0, 0, 1).unwrap_err();
    assert_eq!(err, ShapeError::InvalidCanvas { width: 0, height: 0 });
}
