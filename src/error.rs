//! Error types

use std::fmt;
use std::io;

/// Error returned from the top-level font lookup functions
#[derive(Clone, Eq, PartialEq, Debug)]
pub enum FontError {
    Char(CharError),
    Parse(ParseError),
}

impl From<CharError> for FontError {
    fn from(error: CharError) -> Self {
        FontError::Char(error)
    }
}

impl From<ParseError> for FontError {
    fn from(error: ParseError) -> Self {
        FontError::Parse(error)
    }
}

impl fmt::Display for FontError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FontError::Char(err) => write!(f, "character lookup: {}", err),
            FontError::Parse(err) => write!(f, "glyph parse: {}", err),
        }
    }
}

impl std::error::Error for FontError {}

/// Errors that originate when mapping a character to a glyph id
#[derive(Clone, Eq, PartialEq, Debug)]
pub enum CharError {
    /// The character has no two-byte GBK representation.
    Unencodable(char),
    /// The character is valid GBK but lies outside the GB2312 hanzi region.
    OutsideGb2312(char),
}

impl fmt::Display for CharError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CharError::Unencodable(ch) => {
                write!(f, "invalid GBK character U+{:04X}", u32::from(*ch))
            }
            CharError::OutsideGb2312(ch) => {
                write!(f, "invalid GB2312 character U+{:04X}", u32::from(*ch))
            }
        }
    }
}

impl std::error::Error for CharError {}

/// Errors that originate when reading font data
#[derive(Clone, Eq, PartialEq, Debug)]
pub enum ParseError {
    BadEof,
    Io(io::ErrorKind),
    BitWidth(u32),
    TruncatedGlyph,
}

impl From<io::Error> for ParseError {
    fn from(error: io::Error) -> Self {
        match error.kind() {
            io::ErrorKind::UnexpectedEof => ParseError::BadEof,
            kind => ParseError::Io(kind),
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::BadEof => write!(f, "end of data reached unexpectedly"),
            ParseError::Io(kind) => write!(f, "i/o error: {}", kind),
            ParseError::BitWidth(bits) => {
                write!(f, "bit field of {} bits exceeds 32 bit limit", bits)
            }
            ParseError::TruncatedGlyph => write!(f, "glyph data ended inside an opcode"),
        }
    }
}

impl std::error::Error for ParseError {}
