//! The glyph index table at the start of a font.
//!
//! One 6-byte little-endian record per glyph id, starting at byte 0.

use std::io::Read;

use byteorder::{LittleEndian, ReadBytesExt};

use crate::error::ParseError;

/// Size in bytes of one index record.
pub const RECORD_SIZE: u64 = 6;

/// Flag bit that may be set in a stored offset. It is not part of the offset.
pub const OFFSET_FLAG: u32 = 0x1000_0000;

/// Location of the outline data of one glyph.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct GlyphIndexRecord {
    /// Stored offset, possibly including [OFFSET_FLAG].
    pub offset: u32,
    pub length: u16,
}

impl GlyphIndexRecord {
    /// Read a record from the current position of `reader`.
    pub fn read<R: Read>(reader: &mut R) -> Result<GlyphIndexRecord, ParseError> {
        let offset = reader.read_u32::<LittleEndian>()?;
        let length = reader.read_u16::<LittleEndian>()?;
        Ok(GlyphIndexRecord { offset, length })
    }

    /// Byte position of the record for `glyph_id`.
    pub fn position(glyph_id: u32) -> u64 {
        u64::from(glyph_id) * RECORD_SIZE
    }

    /// The offset of the glyph data with the flag bit cleared.
    pub fn data_offset(&self) -> u32 {
        self.offset & !OFFSET_FLAG
    }

    pub fn is_flagged(&self) -> bool {
        self.offset & OFFSET_FLAG != 0
    }
}
