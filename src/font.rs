//! Top-level access to an outline font.

use std::io::{Read, Seek, SeekFrom};

use log::debug;

use crate::charmap::{self, FontMode};
use crate::error::{CharError, FontError, ParseError};
use crate::index::GlyphIndexRecord;
use crate::outline::interpreter::{self, OutlineOptions};
use crate::outline::{OutlineSink, SvgPath};

/// An outline font read from a seekable source.
///
/// The font holds a cursor into `reader` that every lookup moves, so a font must not be shared
/// between threads without synchronisation. Open one `OutlineFont` per thread over independent
/// readers instead.
pub struct OutlineFont<R> {
    reader: R,
    mode: FontMode,
    options: OutlineOptions,
}

impl<R: Read + Seek> OutlineFont<R> {
    pub fn new(reader: R, mode: FontMode) -> OutlineFont<R> {
        OutlineFont::with_options(reader, mode, OutlineOptions::default())
    }

    pub fn with_options(reader: R, mode: FontMode, options: OutlineOptions) -> OutlineFont<R> {
        OutlineFont {
            reader,
            mode,
            options,
        }
    }

    pub fn mode(&self) -> FontMode {
        self.mode
    }

    pub fn options(&self) -> OutlineOptions {
        self.options
    }

    pub fn glyph_id(&self, ch: char) -> Result<u32, CharError> {
        charmap::glyph_id(ch, self.mode)
    }

    /// Read the index record of `glyph_id`.
    ///
    /// The index table size is not stored in the font, so ids past its end read whatever data
    /// follows the table, or fail with `ParseError::BadEof`.
    pub fn read_index(&mut self, glyph_id: u32) -> Result<GlyphIndexRecord, ParseError> {
        self.reader
            .seek(SeekFrom::Start(GlyphIndexRecord::position(glyph_id)))?;
        GlyphIndexRecord::read(&mut self.reader)
    }

    /// Read the raw byte-code of `glyph_id`.
    pub fn read_glyph_data(&mut self, glyph_id: u32) -> Result<Vec<u8>, ParseError> {
        let record = self.read_index(glyph_id)?;
        debug!(
            "glyph {}: offset {:#x} length {}",
            glyph_id,
            record.data_offset(),
            record.length
        );
        self.reader
            .seek(SeekFrom::Start(u64::from(record.data_offset())))?;
        let mut data = vec![0; usize::from(record.length)];
        self.reader.read_exact(&mut data)?;
        Ok(data)
    }

    /// Decode the outline of `glyph_id` into SVG path data.
    pub fn glyph_path(&mut self, glyph_id: u32) -> Result<String, ParseError> {
        let data = self.read_glyph_data(glyph_id)?;
        interpreter::path_from_bytes(&data, self.options)
    }

    /// Visit the outline of `ch`, delivering drawing commands to `sink`.
    pub fn visit<S: OutlineSink>(&mut self, ch: char, sink: &mut S) -> Result<(), FontError> {
        let glyph_id = self.glyph_id(ch)?;
        let data = self.read_glyph_data(glyph_id)?;
        interpreter::visit(&data, sink, self.options)?;
        Ok(())
    }

    /// Decode the outline of `ch` into SVG path data.
    ///
    /// ```
    /// use std::io::Cursor;
    ///
    /// use hzfont::charmap::FontMode;
    /// use hzfont::error::{CharError, FontError};
    /// use hzfont::OutlineFont;
    ///
    /// let mut font = OutlineFont::new(Cursor::new(Vec::new()), FontMode::Gbk);
    /// assert_eq!(
    ///     font.outline_path('A'),
    ///     Err(FontError::Char(CharError::Unencodable('A')))
    /// );
    /// ```
    pub fn outline_path(&mut self, ch: char) -> Result<String, FontError> {
        let mut path = SvgPath::new();
        self.visit(ch, &mut path)?;
        Ok(path.into_string())
    }

    pub fn into_inner(self) -> R {
        self.reader
    }
}
