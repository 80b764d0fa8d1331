//! Mapping of characters to glyph ids.
//!
//! Glyphs are stored in the order of the GB2312 or GBK code page, so the glyph id is a
//! function of the two GBK bytes of a character. Which regions of the code page are present
//! depends on the [FontMode].

use crate::error::CharError;
use crate::gbk::unicode_to_gbk;

/// Characters per row in the GB2312 layout (trail bytes 0xA1..=0xFE).
const ROW_LEN: u32 = 94;
/// Characters per row in the GBK extension layout (trail bytes 0x40..=0xFE without 0x7F).
const EXT_ROW_LEN: u32 = 96;
/// First glyph id of the GBK extension region.
const EXT_BASE: u32 = 11844;
/// Rows 0x81..=0xA0 with a GB2312-style trail byte are stored after the 0xA1..=0xFE rows.
const LOW_ROW_BIAS: u8 = 0x23;

/// The code page layout of a font.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum FontMode {
    /// Only the GB2312 hanzi rows 0xB0..=0xF7 are present.
    Gb2312,
    /// The full GBK code page is present.
    Gbk,
}

impl FontMode {
    pub fn from_gbk_flag(is_gbk: bool) -> FontMode {
        if is_gbk {
            FontMode::Gbk
        } else {
            FontMode::Gb2312
        }
    }

    pub fn is_gbk(self) -> bool {
        self == FontMode::Gbk
    }
}

/// Map `ch` to its glyph id in a font of the given `mode`.
pub fn glyph_id(ch: char, mode: FontMode) -> Result<u32, CharError> {
    let [c1, c2] = unicode_to_gbk(ch).ok_or(CharError::Unencodable(ch))?;
    glyph_id_for_bytes(c1, c2, mode).ok_or(CharError::OutsideGb2312(ch))
}

/// Map the GBK byte pair `(c1, c2)` to a glyph id.
///
/// Returns `None` if the pair is not part of the layout for `mode`.
///
/// ```
/// use hzfont::charmap::{glyph_id_for_bytes, FontMode};
///
/// assert_eq!(glyph_id_for_bytes(0xB0, 0xA1, FontMode::Gb2312), Some(0));
/// assert_eq!(glyph_id_for_bytes(0xB0, 0xA1, FontMode::Gbk), Some(1410));
/// ```
pub fn glyph_id_for_bytes(c1: u8, c2: u8, mode: FontMode) -> Option<u32> {
    let trail_in_gb2312 = (0xA1..=0xFE).contains(&c2);
    if (0xB0..=0xF7).contains(&c1) && trail_in_gb2312 {
        let row = match mode {
            FontMode::Gbk => c1 - 0xA1,
            FontMode::Gb2312 => c1 - 0xB0,
        };
        return Some(u32::from(row) * ROW_LEN + u32::from(c2 - 0xA1));
    }

    match mode {
        FontMode::Gb2312 => None,
        FontMode::Gbk if trail_in_gb2312 => {
            let row = if c1 >= 0xA1 {
                c1 - 0xA1
            } else {
                c1.checked_sub(LOW_ROW_BIAS)?
            };
            Some(u32::from(row) * ROW_LEN + u32::from(c2 - 0xA1))
        }
        FontMode::Gbk => {
            // 0x7F is never a trail byte, so the columns above it close the gap
            let c2 = if c2 >= 0x80 { c2 - 1 } else { c2 };
            let row = c1.checked_sub(0x81)?;
            let column = c2.checked_sub(0x40)?;
            Some(EXT_BASE + u32::from(row) * EXT_ROW_LEN + u32::from(column))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gb2312_region() {
        assert_eq!(glyph_id_for_bytes(0xB0, 0xA1, FontMode::Gb2312), Some(0));
        assert_eq!(glyph_id_for_bytes(0xB0, 0xFE, FontMode::Gb2312), Some(93));
        assert_eq!(glyph_id_for_bytes(0xB1, 0xA1, FontMode::Gb2312), Some(94));
        assert_eq!(glyph_id_for_bytes(0xF7, 0xFE, FontMode::Gb2312), Some(71 * 94 + 93));
    }

    #[test]
    fn gb2312_rejects_other_regions() {
        assert_eq!(glyph_id_for_bytes(0xA1, 0xA2, FontMode::Gb2312), None);
        assert_eq!(glyph_id_for_bytes(0xB0, 0x40, FontMode::Gb2312), None);
        assert_eq!(glyph_id_for_bytes(0xF8, 0xA1, FontMode::Gb2312), None);
    }

    #[test]
    fn gbk_hanzi_region() {
        assert_eq!(glyph_id_for_bytes(0xB0, 0xA1, FontMode::Gbk), Some(1410));
    }

    #[test]
    fn gbk_symbol_rows() {
        assert_eq!(glyph_id_for_bytes(0xA1, 0xA1, FontMode::Gbk), Some(0));
        assert_eq!(glyph_id_for_bytes(0xA1, 0xA2, FontMode::Gbk), Some(1));
        assert_eq!(glyph_id_for_bytes(0xF8, 0xA1, FontMode::Gbk), Some(87 * 94));
    }

    #[test]
    fn gbk_low_rows_with_high_trail() {
        assert_eq!(glyph_id_for_bytes(0x81, 0xA1, FontMode::Gbk), Some(94 * 94));
        assert_eq!(glyph_id_for_bytes(0xA0, 0xFE, FontMode::Gbk), Some(125 * 94 + 93));
    }

    #[test]
    fn gbk_extension_region() {
        assert_eq!(glyph_id_for_bytes(0x81, 0x40, FontMode::Gbk), Some(11844));
        assert_eq!(glyph_id_for_bytes(0x81, 0x7E, FontMode::Gbk), Some(11844 + 0x3E));
        assert_eq!(glyph_id_for_bytes(0x81, 0x80, FontMode::Gbk), Some(11844 + 0x3F));
        assert_eq!(glyph_id_for_bytes(0x82, 0x40, FontMode::Gbk), Some(11844 + 96));
        assert_eq!(glyph_id_for_bytes(0xB0, 0x40, FontMode::Gbk), Some(11844 + 47 * 96));
    }

    #[test]
    fn gbk_out_of_layout_bytes() {
        assert_eq!(glyph_id_for_bytes(0x20, 0xA1, FontMode::Gbk), None);
        assert_eq!(glyph_id_for_bytes(0x81, 0x30, FontMode::Gbk), None);
    }

    #[test]
    fn map_characters() {
        assert_eq!(glyph_id('啊', FontMode::Gb2312), Ok(0));
        assert_eq!(glyph_id('啊', FontMode::Gbk), Ok(1410));
        assert_eq!(glyph_id('丂', FontMode::Gbk), Ok(11844));
        assert_eq!(glyph_id('、', FontMode::Gbk), Ok(1));
    }

    #[test]
    fn map_invalid_characters() {
        assert_eq!(glyph_id('A', FontMode::Gbk), Err(CharError::Unencodable('A')));
        assert_eq!(glyph_id('A', FontMode::Gb2312), Err(CharError::Unencodable('A')));
        assert_eq!(
            glyph_id('、', FontMode::Gb2312),
            Err(CharError::OutsideGb2312('、'))
        );
        assert_eq!(
            glyph_id('丂', FontMode::Gb2312),
            Err(CharError::OutsideGb2312('丂'))
        );
    }

    #[test]
    fn mode_from_flag() {
        assert_eq!(FontMode::from_gbk_flag(true), FontMode::Gbk);
        assert_eq!(FontMode::from_gbk_flag(false), FontMode::Gb2312);
        assert!(FontMode::Gbk.is_gbk());
    }
}
