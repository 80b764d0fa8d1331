//! Access glyph outlines.
//!
//! Outlines are decoded by the [interpreter] and delivered as drawing callbacks on an
//! implementor of [OutlineSink]. [SvgPath] collects them into an SVG path data string and a
//! `Vec<PathCommand>` collects them as values.
//!
//! ### Example
//!
//! ```
//! use hzfont::outline::interpreter::{visit, OutlineOptions};
//! use hzfont::outline::SvgPath;
//!
//! // opcode 0 (move to) with x = 5, y = 5, then a padding nibble. Bytes are nibble-swapped.
//! let data = [0x00, 0x05, 0xF5];
//! let mut path = SvgPath::new();
//! visit(&data, &mut path, OutlineOptions::default()).unwrap();
//! assert_eq!(path.as_str(), "M5,5 ");
//! ```

pub mod interpreter;

use std::fmt;

use pathfinder_geometry::vector::Vector2I;

/// A trait for visiting a glyph outline
pub trait OutlineSink {
    /// Moves the pen to a point.
    fn move_to(&mut self, to: Vector2I);
    /// Draws a horizontal line to `x`.
    fn horizontal_line_to(&mut self, x: i32);
    /// Draws a vertical line to `y`.
    fn vertical_line_to(&mut self, y: i32);
    /// Draws a line to a point.
    fn line_to(&mut self, to: Vector2I);
    /// Draws a quadratic Bézier curve to a point.
    fn quadratic_curve_to(&mut self, ctrl: Vector2I, to: Vector2I);
    /// Draws a cubic Bézier curve to a point.
    fn cubic_curve_to(&mut self, ctrl1: Vector2I, ctrl2: Vector2I, to: Vector2I);
}

/// A single outline drawing command.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum PathCommand {
    MoveTo(Vector2I),
    HorizontalLineTo(i32),
    VerticalLineTo(i32),
    LineTo(Vector2I),
    QuadTo(Vector2I, Vector2I),
    CubicTo(Vector2I, Vector2I, Vector2I),
}

/// Formats the command as SVG path data with absolute coordinates, e.g. `M10,20`.
impl fmt::Display for PathCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            PathCommand::MoveTo(to) => write!(f, "M{},{}", to.x(), to.y()),
            PathCommand::HorizontalLineTo(x) => write!(f, "H{}", x),
            PathCommand::VerticalLineTo(y) => write!(f, "V{}", y),
            PathCommand::LineTo(to) => write!(f, "L{},{}", to.x(), to.y()),
            PathCommand::QuadTo(ctrl, to) => {
                write!(f, "Q{},{},{},{}", ctrl.x(), ctrl.y(), to.x(), to.y())
            }
            PathCommand::CubicTo(ctrl1, ctrl2, to) => write!(
                f,
                "C{},{},{},{},{},{}",
                ctrl1.x(),
                ctrl1.y(),
                ctrl2.x(),
                ctrl2.y(),
                to.x(),
                to.y()
            ),
        }
    }
}

impl OutlineSink for Vec<PathCommand> {
    fn move_to(&mut self, to: Vector2I) {
        self.push(PathCommand::MoveTo(to));
    }

    fn horizontal_line_to(&mut self, x: i32) {
        self.push(PathCommand::HorizontalLineTo(x));
    }

    fn vertical_line_to(&mut self, y: i32) {
        self.push(PathCommand::VerticalLineTo(y));
    }

    fn line_to(&mut self, to: Vector2I) {
        self.push(PathCommand::LineTo(to));
    }

    fn quadratic_curve_to(&mut self, ctrl: Vector2I, to: Vector2I) {
        self.push(PathCommand::QuadTo(ctrl, to));
    }

    fn cubic_curve_to(&mut self, ctrl1: Vector2I, ctrl2: Vector2I, to: Vector2I) {
        self.push(PathCommand::CubicTo(ctrl1, ctrl2, to));
    }
}

/// Collects outline commands as SVG path data.
///
/// Every command is followed by a single space, including the last one.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SvgPath {
    data: String,
}

impl SvgPath {
    pub fn new() -> SvgPath {
        SvgPath::default()
    }

    pub fn as_str(&self) -> &str {
        &self.data
    }

    pub fn into_string(self) -> String {
        self.data
    }

    fn push(&mut self, command: PathCommand) {
        self.data.push_str(&command.to_string());
        self.data.push(' ');
    }
}

impl OutlineSink for SvgPath {
    fn move_to(&mut self, to: Vector2I) {
        self.push(PathCommand::MoveTo(to));
    }

    fn horizontal_line_to(&mut self, x: i32) {
        self.push(PathCommand::HorizontalLineTo(x));
    }

    fn vertical_line_to(&mut self, y: i32) {
        self.push(PathCommand::VerticalLineTo(y));
    }

    fn line_to(&mut self, to: Vector2I) {
        self.push(PathCommand::LineTo(to));
    }

    fn quadratic_curve_to(&mut self, ctrl: Vector2I, to: Vector2I) {
        self.push(PathCommand::QuadTo(ctrl, to));
    }

    fn cubic_curve_to(&mut self, ctrl1: Vector2I, ctrl2: Vector2I, to: Vector2I) {
        self.push(PathCommand::CubicTo(ctrl1, ctrl2, to));
    }
}

impl fmt::Display for SvgPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.data)
    }
}
