//! SVG fragments emitted by lines.

use glam::dvec2;
use primitive_line::{Color, Line, Shape, ShapeType, SvgStyle, Worker, svg_document};

#[test]
fn vertical_line_fragment() {
    let worker = Worker::new(200, 100, 0).unwrap();
    let line = Line::new(&worker, dvec2(50.0, 0.0), dvec2(50.0, 100.0), 1.0);
    let style = SvgStyle::from_rgba(255, 0, 0, 128);
    insta::assert_snapshot!(
        line.svg(&style),
        @r##"<line stroke="#ff0000" stroke-opacity="0.501961" fill="none" x1="50.000000" y1="0.000000" x2="50.000000" y2="100.000000" stroke-width="1.000000" />"##
    );
}

#[test]
fn fill_template_is_emitted_as_stroke() {
    let worker = Worker::new(100, 100, 0).unwrap();
    let line = Line::new(&worker, dvec2(10.0, 10.0), dvec2(90.0, 90.0), 2.5);
    let style = SvgStyle::parse_attrs(r##"fill="#0a0b0c" fill-opacity="0.250000""##).unwrap();
    insta::assert_snapshot!(
        line.svg(&style),
        @r##"<line stroke="#0a0b0c" stroke-opacity="0.250000" fill="none" x1="0.000000" y1="0.000000" x2="100.000000" y2="100.000000" stroke-width="2.500000" />"##
    );
}

#[test]
fn template_attributes_pass_through_renamed() {
    let worker = Worker::new(100, 100, 0).unwrap();
    let line = Line::new(&worker, dvec2(10.0, 10.0), dvec2(90.0, 90.0), 1.0);
    let template = r##"fill="#FF0000" fill-opacity="0.5" stroke-linecap="round""##;
    let style = SvgStyle::parse_attrs(template).unwrap();

    let svg = line.svg(&style);
    assert!(svg.contains(&template.replace("fill", "stroke")), "{svg}");
    insta::assert_snapshot!(
        svg,
        @r##"<line stroke="#FF0000" stroke-opacity="0.5" stroke-linecap="round" fill="none" x1="0.000000" y1="0.000000" x2="100.000000" y2="100.000000" stroke-width="1.000000" />"##
    );
}

#[test]
fn fragment_never_carries_fill_paint() {
    let mut worker = Worker::new(64, 64, 3).unwrap();
    let style = SvgStyle::new(Color::rgb(1, 2, 3), 0.5);
    for _ in 0..20 {
        let shape = ShapeType::Line.random(&mut worker).unwrap();
        let svg = shape.svg(&style);
        assert!(svg.starts_with("<line stroke=\"#010203\" stroke-opacity=\"0.500000\" fill=\"none\" "));
        assert!(!svg.contains("fill-opacity"));
        assert!(svg.ends_with(" />"));
    }
}

#[test]
fn document_holds_every_fragment() {
    let mut worker = Worker::new(30, 20, 4).unwrap();
    let style = SvgStyle::default();
    let fragments: Vec<String> = (0..3)
        .map(|_| Line::random(&mut worker).unwrap().svg(&style))
        .collect();

    let doc = svg_document(30, 20, 1.0, &Color::WHITE, &fragments);
    assert!(doc.starts_with("<svg xmlns=\"http://www.w3.org/2000/svg\""));
    assert!(doc.ends_with("</svg>"));
    assert_eq!(doc.matches("<line ").count(), 3);
    for fragment in &fragments {
        assert!(doc.contains(fragment.as_str()));
    }
}
