#![warn(rust_2018_idioms)]

//! Decoder for bit-packed vector outline fonts laid out in GB2312 or GBK code page order.
//!
//! A font file starts with an index table of 6-byte records, one per glyph id, pointing at the
//! byte-code of each glyph. Characters are mapped to glyph ids through their GBK encoding
//! ([charmap]), the index record is read ([index]) and the byte-code is decoded into drawing
//! commands ([outline]).
//!
//! ```
//! use std::io::Cursor;
//!
//! use hzfont::charmap::FontMode;
//! use hzfont::OutlineFont;
//!
//! // index record for glyph 0: offset 6, length 3
//! let mut data = vec![0x06, 0x00, 0x00, 0x00, 0x03, 0x00];
//! // move to (5, 5)
//! data.extend_from_slice(&[0x00, 0x05, 0xF5]);
//!
//! let mut font = OutlineFont::new(Cursor::new(data), FontMode::Gb2312);
//! assert_eq!(font.outline_path('啊').unwrap(), "M5,5 ");
//! ```

/// Reading of bit-packed data.
pub mod binary;
pub mod charmap;
pub mod error;
pub mod font;
/// GBK encoding of characters.
pub mod gbk;
pub mod index;
pub mod outline;

pub use font::OutlineFont;
pub use pathfinder_geometry;
