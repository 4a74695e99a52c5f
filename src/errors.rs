//! Error types with diagnostics using miette
//!
//! Every operation on a well-formed shape is total; these cover the few
//! places where a caller hands us something unusable or where the bounded
//! mutation loop gives up.

use miette::Diagnostic;
use thiserror::Error;

// ============================================================================
// Shape Errors
// ============================================================================

/// Errors raised while building workers or mutating shapes
#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
pub enum ShapeError {
    #[error("invalid canvas size {width}x{height}")]
    #[diagnostic(
        code(primitive_line::worker::invalid_canvas),
        help("canvas width and height must both be at least 1")
    )]
    InvalidCanvas { width: u32, height: u32 },

    #[error("mutation exhausted after {attempts} attempts")]
    #[diagnostic(
        code(primitive_line::shape::mutation_exhausted),
        help("the shape was left unchanged; discard the candidate or sample a fresh shape")
    )]
    MutationExhausted { attempts: usize },
}

// ============================================================================
// Style Errors
// ============================================================================

/// Errors from parsing an SVG attribute template
#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
pub enum StyleParseError {
    #[error("invalid attribute: {0}")]
    #[diagnostic(
        code(primitive_line::style::invalid_attribute),
        help("attributes are written as name=\"value\"")
    )]
    InvalidAttribute(String),

    #[error("invalid number: {0}")]
    #[diagnostic(code(primitive_line::style::invalid_number))]
    InvalidNumber(String),

    #[error("invalid color: {0}")]
    #[diagnostic(
        code(primitive_line::style::invalid_color),
        help("use #rgb, #rrggbb, rgb(r,g,b) or a color name")
    )]
    InvalidColor(String),

    #[error("no fill or stroke paint in attributes")]
    #[diagnostic(code(primitive_line::style::missing_paint))]
    MissingPaint,
}
