//! SVG style model and fragment generation.
//!
//! Shapes are colored by an [`SvgStyle`]: one color plus an opacity, written
//! as `fill` attributes. Lines have no interior, so they emit the same
//! attributes renamed to `stroke`.

use std::borrow::Cow;
use std::fmt;
use std::fmt::Write as _;

use crate::errors::StyleParseError;
use crate::types::Point;

/// A color value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Color {
    /// RGB color
    Rgb { r: u8, g: u8, b: u8 },
    /// Named color, emitted verbatim
    Named(String),
}

impl Color {
    pub const BLACK: Color = Color::Rgb { r: 0, g: 0, b: 0 };
    pub const WHITE: Color = Color::Rgb {
        r: 255,
        g: 255,
        b: 255,
    };

    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color::Rgb { r, g, b }
    }

    /// Parse `#rgb`, `#rrggbb`, `rgb(r,g,b)` or a bare color name
    pub fn parse(s: &str) -> Result<Self, StyleParseError> {
        let s = s.trim();
        let invalid = || StyleParseError::InvalidColor(s.to_string());

        if let Some(inner) = s.strip_prefix("rgb(").and_then(|s| s.strip_suffix(')')) {
            let parts: Vec<&str> = inner.split(',').collect();
            if parts.len() != 3 {
                return Err(invalid());
            }
            let channel = |p: &str| p.trim().parse::<u8>().map_err(|_| invalid());
            return Ok(Color::Rgb {
                r: channel(parts[0])?,
                g: channel(parts[1])?,
                b: channel(parts[2])?,
            });
        }

        if let Some(hex) = s.strip_prefix('#') {
            if !hex.is_ascii() {
                return Err(invalid());
            }
            let channel = |h: &str| u8::from_str_radix(h, 16).map_err(|_| invalid());
            return match hex.len() {
                6 => Ok(Color::Rgb {
                    r: channel(&hex[0..2])?,
                    g: channel(&hex[2..4])?,
                    b: channel(&hex[4..6])?,
                }),
                // Expand 3-digit hex: #abc -> #aabbcc
                3 => Ok(Color::Rgb {
                    r: channel(&hex[0..1])? * 17,
                    g: channel(&hex[1..2])? * 17,
                    b: channel(&hex[2..3])? * 17,
                }),
                _ => Err(invalid()),
            };
        }

        if s.is_empty() || !s.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(invalid());
        }
        Ok(Color::Named(s.to_ascii_lowercase()))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Rgb { r, g, b } => write!(f, "#{:02x}{:02x}{:02x}", r, g, b),
            Color::Named(n) => write!(f, "{}", n),
        }
    }
}

/// Paint for a single shape.
///
/// Keeps the parsed color and opacity next to the attribute pairs as they
/// were written, so a caller's template is emitted back verbatim apart from
/// the fill to stroke rename.
#[derive(Debug, Clone, PartialEq)]
pub struct SvgStyle {
    color: Color,
    opacity: f64,
    attrs: Vec<(String, String)>,
}

impl Default for SvgStyle {
    fn default() -> Self {
        Self::new(Color::BLACK, 1.0)
    }
}

impl SvgStyle {
    /// Style written as `fill="…" fill-opacity="…"`
    pub fn new(color: Color, opacity: f64) -> Self {
        let attrs = vec![
            ("fill".to_string(), color.to_string()),
            ("fill-opacity".to_string(), fmt_num(opacity)),
        ];
        Self {
            color,
            opacity,
            attrs,
        }
    }

    /// Style from an 8-bit RGBA color, alpha mapped to opacity
    pub fn from_rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::new(Color::rgb(r, g, b), a as f64 / 255.0)
    }

    pub fn color(&self) -> &Color {
        &self.color
    }

    /// The last opacity given, 1 when none was
    pub fn opacity(&self) -> f64 {
        self.opacity
    }

    /// Attribute pairs in template order
    pub fn attrs(&self) -> &[(String, String)] {
        &self.attrs
    }

    /// The attributes with every `fill*` name renamed to `stroke*`; values
    /// and everything else are kept as written
    pub fn stroke_attrs(&self) -> String {
        self.attrs
            .iter()
            .map(|(name, value)| format!("{}=\"{}\"", stroke_name(name), value))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Parse an attribute template such as `fill="#ff0000" fill-opacity="0.5"`.
    ///
    /// Either paint name is accepted and must hold a valid color. Opacity
    /// values must be numbers. Other attributes pass through untouched.
    pub fn parse_attrs(s: &str) -> Result<Self, StyleParseError> {
        let mut color = None;
        let mut opacity = 1.0;
        let mut attrs = Vec::new();

        for (key, value) in split_attrs(s)? {
            match key {
                "fill" | "stroke" => color = Some(Color::parse(value)?),
                "fill-opacity" | "stroke-opacity" | "opacity" => {
                    opacity = value
                        .trim()
                        .parse()
                        .map_err(|_| StyleParseError::InvalidNumber(value.to_string()))?;
                }
                _ => {}
            }
            attrs.push((key.to_string(), value.to_string()));
        }

        let color = color.ok_or(StyleParseError::MissingPaint)?;
        Ok(Self {
            color,
            opacity,
            attrs,
        })
    }
}

/// `fill` becomes `stroke`, `fill-x` becomes `stroke-x`
fn stroke_name(name: &str) -> Cow<'_, str> {
    match name.strip_prefix("fill") {
        Some(rest) if rest.is_empty() || rest.starts_with('-') => Cow::Owned(format!("stroke{rest}")),
        _ => Cow::Borrowed(name),
    }
}

/// Split `name="value"` pairs separated by whitespace
fn split_attrs(s: &str) -> Result<Vec<(&str, &str)>, StyleParseError> {
    let mut attrs = Vec::new();
    let mut rest = s.trim_start();

    while !rest.is_empty() {
        let (key, after) = rest
            .split_once('=')
            .ok_or_else(|| StyleParseError::InvalidAttribute(rest.to_string()))?;
        let key = key.trim();
        if key.is_empty() || key.contains(char::is_whitespace) {
            return Err(StyleParseError::InvalidAttribute(rest.to_string()));
        }
        let value = after
            .trim_start()
            .strip_prefix('"')
            .ok_or_else(|| StyleParseError::InvalidAttribute(rest.to_string()))?;
        let (value, after) = value
            .split_once('"')
            .ok_or_else(|| StyleParseError::InvalidAttribute(rest.to_string()))?;
        attrs.push((key, value));
        rest = after.trim_start();
    }

    Ok(attrs)
}

/// Six fixed decimals, the precision every emitted coordinate uses
pub fn fmt_num(v: f64) -> String {
    format!("{:.6}", v)
}

/// `<line>` element for a stroked segment with no fill
pub fn line_element(style: &SvgStyle, start: Point, end: Point, stroke_width: f64) -> String {
    format!(
        "<line {} fill=\"none\" x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\" stroke-width=\"{}\" />",
        style.stroke_attrs(),
        fmt_num(start.x),
        fmt_num(start.y),
        fmt_num(end.x),
        fmt_num(end.y),
        fmt_num(stroke_width),
    )
}

/// Wrap shape fragments in a standalone document.
///
/// The background fills the whole canvas; fragments are scaled and shifted
/// half a unit so integer coordinates land on pixel centers.
pub fn svg_document<I>(width: u32, height: u32, scale: f64, background: &Color, fragments: I) -> String
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut out = String::new();
    let _ = writeln!(
        out,
        "<svg xmlns=\"http://www.w3.org/2000/svg\" version=\"1.1\" width=\"{}\" height=\"{}\">",
        width, height
    );
    let _ = writeln!(
        out,
        "<rect x=\"0\" y=\"0\" width=\"{}\" height=\"{}\" fill=\"{}\" />",
        width, height, background
    );
    let _ = writeln!(out, "<g transform=\"scale({}) translate(0.5 0.5)\">", fmt_num(scale));
    for fragment in fragments {
        out.push_str(fragment.as_ref());
        out.push('\n');
    }
    out.push_str("</g>\n</svg>");
    out
}
