//! Sample a handful of random lines, print them as an SVG document, and
//! optionally write PNG previews of the strokes and of their scored coverage.
//!
//! Run with: cargo run --example random_lines --features tracing -- [strokes.png [coverage.png]]

use primitive_line::{
    Color, PixmapSurface, Shape, ShapeType, SvgStyle, Worker, draw_scanlines, svg_document,
};
use tiny_skia::Pixmap;
use tracing_subscriber::EnvFilter;

const WIDTH: u32 = 256;
const HEIGHT: u32 = 192;
const SCALE: f64 = 2.0;

fn main() -> miette::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let mut worker = Worker::new(WIDTH, HEIGHT, 0x5eed)?;
    let mut surface = PixmapSurface::new(
        (WIDTH as f64 * SCALE) as u32,
        (HEIGHT as f64 * SCALE) as u32,
        tiny_skia::Color::WHITE,
    )?
    .with_scale(SCALE);
    let mut coverage = Pixmap::new(WIDTH, HEIGHT).ok_or_else(|| miette::miette!("empty canvas"))?;
    coverage.fill(tiny_skia::Color::WHITE);

    let mut fragments = Vec::new();
    for i in 0..24u8 {
        let mut shape = ShapeType::Line.random(&mut worker)?;
        for _ in 0..8 {
            shape.mutate(&mut worker)?;
        }

        let shade = i.wrapping_mul(10);
        let color = tiny_skia::Color::from_rgba8(shade, 64, 255 - shade, 160);
        surface.set_color(color);
        shape.render(&mut surface, SCALE);
        fragments.push(shape.svg(&SvgStyle::from_rgba(shade, 64, 255 - shade, 160)));

        let lines = shape.rasterize(&worker);
        let covered: usize = lines.iter().map(|l| l.len()).sum();
        draw_scanlines(&mut coverage, color, &lines);
        tracing::info!(line = i, covered, "sampled");
    }

    println!("{}", svg_document(WIDTH, HEIGHT, 1.0, &Color::WHITE, &fragments));

    let mut args = std::env::args().skip(1);
    if let Some(path) = args.next() {
        surface
            .to_image()
            .save(&path)
            .map_err(|e| miette::miette!("failed to write {}: {}", path, e))?;
        eprintln!("wrote {}", path);
    }
    if let Some(path) = args.next() {
        coverage
            .save_png(&path)
            .map_err(|e| miette::miette!("failed to write {}: {}", path, e))?;
        eprintln!("wrote {}", path);
    }

    Ok(())
}
