//! Interpreter for the glyph outline byte-code.
//!
//! A glyph is a sequence of 4-bit opcodes, each followed by its operands. There is no end
//! opcode: decoding stops when the glyph data is exhausted. Absolute coordinates are unsigned
//! 8-bit fields, relative ones are 4 or 6-bit sign-magnitude fields applied to the current
//! pen position.

use std::io::Cursor;

use log::{trace, warn};
use pathfinder_geometry::vector::{vec2i, Vector2I};

use crate::binary::bits::BitStream;
use crate::error::ParseError;
use crate::outline::{OutlineSink, SvgPath};

const OPCODE_BITS: u32 = 4;
const COORD_BITS: u32 = 8;
const SHORT_DELTA_BITS: u32 = 4;
const LONG_DELTA_BITS: u32 = 6;
const PADDING_BITS: u32 = 12;

/// What to do when glyph data ends part way through the operands of an opcode.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Truncation {
    /// Missing operands read as zero and the command is still emitted.
    #[default]
    ZeroFill,
    /// Fail with `ParseError::TruncatedGlyph`.
    Error,
}

/// Options controlling outline decoding.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct OutlineOptions {
    pub truncation: Truncation,
}

impl OutlineOptions {
    pub fn strict() -> OutlineOptions {
        OutlineOptions {
            truncation: Truncation::Error,
        }
    }
}

/// Outline byte-code operations.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Opcode {
    /// x, y
    MoveTo,
    /// x
    HorizontalLineTo,
    /// y
    VerticalLineTo,
    /// x, y
    LineTo,
    /// x1, y1, x, y
    QuadTo,
    /// x1, y1, x2, y2, x, y
    CubicTo,
    /// Closed rectangle x1, y1, x2, y2. The pen is returned to where it was.
    Rect,
    /// Short dx, absolute y
    LineToDxY,
    /// Absolute x, short dy
    LineToXDy,
    ShortLine,
    LongLine,
    ShortQuad,
    LongQuad,
    ShortCubic,
    LongCubic,
    /// 12 bits of padding
    Padding,
}

impl From<u8> for Opcode {
    /// Only the low nibble of `nibble` is used.
    fn from(nibble: u8) -> Opcode {
        match nibble & 0xF {
            0 => Opcode::MoveTo,
            1 => Opcode::HorizontalLineTo,
            2 => Opcode::VerticalLineTo,
            3 => Opcode::LineTo,
            4 => Opcode::QuadTo,
            5 => Opcode::CubicTo,
            6 => Opcode::Rect,
            7 => Opcode::LineToDxY,
            8 => Opcode::LineToXDy,
            9 => Opcode::ShortLine,
            10 => Opcode::LongLine,
            11 => Opcode::ShortQuad,
            12 => Opcode::LongQuad,
            13 => Opcode::ShortCubic,
            14 => Opcode::LongCubic,
            _ => Opcode::Padding,
        }
    }
}

/// Decode the glyph byte-code in `data` into an SVG path string.
pub fn path_from_bytes(data: &[u8], options: OutlineOptions) -> Result<String, ParseError> {
    let mut path = SvgPath::new();
    visit(data, &mut path, options)?;
    Ok(path.into_string())
}

/// Decode the glyph byte-code in `data`, delivering each command to `sink`.
///
/// With `Truncation::Error` commands decoded before the truncated opcode have already been
/// delivered when the error is returned.
pub fn visit<S: OutlineSink>(
    data: &[u8],
    sink: &mut S,
    options: OutlineOptions,
) -> Result<(), ParseError> {
    let mut interpreter = Interpreter::new(data, options.truncation);
    interpreter.run(sink)?;
    if interpreter.truncated {
        warn!("glyph data ended inside an opcode, missing operands read as zero");
    }
    Ok(())
}

struct Interpreter<'a> {
    bits: BitStream<Cursor<&'a [u8]>>,
    pen: Vector2I,
    truncation: Truncation,
    truncated: bool,
}

impl<'a> Interpreter<'a> {
    fn new(data: &'a [u8], truncation: Truncation) -> Interpreter<'a> {
        Interpreter {
            bits: BitStream::new(Cursor::new(data)),
            pen: vec2i(0, 0),
            truncation,
            truncated: false,
        }
    }

    fn run<S: OutlineSink>(&mut self, sink: &mut S) -> Result<(), ParseError> {
        loop {
            let opcode = match self.bits.read_bits(OPCODE_BITS) {
                Ok(nibble) => Opcode::from(nibble as u8),
                Err(ParseError::BadEof) => return Ok(()),
                Err(err) => return Err(err),
            };
            trace!("opcode {:?} at pen {:?}", opcode, self.pen);
            match opcode {
                Opcode::MoveTo => {
                    self.pen = self.point()?;
                    sink.move_to(self.pen);
                }
                Opcode::HorizontalLineTo => {
                    let x = self.coord()?;
                    self.pen = vec2i(x, self.pen.y());
                    sink.horizontal_line_to(x);
                }
                Opcode::VerticalLineTo => {
                    let y = self.coord()?;
                    self.pen = vec2i(self.pen.x(), y);
                    sink.vertical_line_to(y);
                }
                Opcode::LineTo => {
                    self.pen = self.point()?;
                    sink.line_to(self.pen);
                }
                Opcode::QuadTo => {
                    let ctrl = self.point()?;
                    self.pen = self.point()?;
                    sink.quadratic_curve_to(ctrl, self.pen);
                }
                Opcode::CubicTo => {
                    let ctrl1 = self.point()?;
                    let ctrl2 = self.point()?;
                    self.pen = self.point()?;
                    sink.cubic_curve_to(ctrl1, ctrl2, self.pen);
                }
                Opcode::Rect => {
                    let from = self.point()?;
                    let to = self.point()?;
                    sink.move_to(from);
                    sink.horizontal_line_to(to.x());
                    sink.vertical_line_to(to.y());
                    sink.horizontal_line_to(from.x());
                    sink.vertical_line_to(from.y());
                    sink.move_to(self.pen);
                }
                Opcode::LineToDxY => {
                    let dx = self.delta(SHORT_DELTA_BITS)?;
                    let y = self.coord()?;
                    self.pen = vec2i(self.pen.x() + dx, y);
                    sink.line_to(self.pen);
                }
                Opcode::LineToXDy => {
                    let x = self.coord()?;
                    let dy = self.delta(SHORT_DELTA_BITS)?;
                    self.pen = vec2i(x, self.pen.y() + dy);
                    sink.line_to(self.pen);
                }
                Opcode::ShortLine | Opcode::LongLine => {
                    let bits = delta_bits(opcode == Opcode::ShortLine);
                    let pen = self.pen;
                    self.pen = pen + self.offset(bits)?;
                    sink.line_to(self.pen);
                }
                Opcode::ShortQuad | Opcode::LongQuad => {
                    let bits = delta_bits(opcode == Opcode::ShortQuad);
                    let pen = self.pen;
                    let ctrl = pen + self.offset(bits)?;
                    self.pen = ctrl + self.offset(bits)?;
                    sink.quadratic_curve_to(ctrl, self.pen);
                }
                Opcode::ShortCubic | Opcode::LongCubic => {
                    let bits = delta_bits(opcode == Opcode::ShortCubic);
                    let pen = self.pen;
                    let ctrl1 = pen + self.offset(bits)?;
                    let ctrl2 = ctrl1 + self.offset(bits)?;
                    self.pen = ctrl2 + self.offset(bits)?;
                    sink.cubic_curve_to(ctrl1, ctrl2, self.pen);
                }
                Opcode::Padding => match self.bits.read_bits(PADDING_BITS) {
                    Ok(_) => {}
                    // odd-length glyphs are padded at the tail, running out here is the end
                    Err(ParseError::BadEof) if self.truncation == Truncation::Error => {
                        return Ok(())
                    }
                    Err(ParseError::BadEof) => {}
                    Err(err) => return Err(err),
                },
            }
        }
    }

    fn operand<T: Default>(&mut self, read: Result<T, ParseError>) -> Result<T, ParseError> {
        match read {
            Ok(value) => Ok(value),
            Err(ParseError::BadEof) => match self.truncation {
                Truncation::ZeroFill => {
                    self.truncated = true;
                    Ok(T::default())
                }
                Truncation::Error => Err(ParseError::TruncatedGlyph),
            },
            Err(err) => Err(err),
        }
    }

    fn coord(&mut self) -> Result<i32, ParseError> {
        let read = self.bits.read_bits(COORD_BITS);
        self.operand(read).map(|value| value as i32)
    }

    fn point(&mut self) -> Result<Vector2I, ParseError> {
        let x = self.coord()?;
        let y = self.coord()?;
        Ok(vec2i(x, y))
    }

    fn delta(&mut self, bits: u32) -> Result<i32, ParseError> {
        let read = self.bits.read_signed_bits(bits);
        self.operand(read)
    }

    fn offset(&mut self, bits: u32) -> Result<Vector2I, ParseError> {
        let dx = self.delta(bits)?;
        let dy = self.delta(bits)?;
        Ok(vec2i(dx, dy))
    }
}

fn delta_bits(short: bool) -> u32 {
    if short {
        SHORT_DELTA_BITS
    } else {
        LONG_DELTA_BITS
    }
}
