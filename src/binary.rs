/// Read bit-packed fields
pub mod bits;

/// Exchange the high and low nibbles of `byte`.
///
/// Glyph data is stored with the nibbles of every byte reversed relative to the order in
/// which fields are consumed.
///
/// Example:
///
/// ```
/// use hzfont::binary::swap_nibbles;
///
/// assert_eq!(swap_nibbles(0x3C), 0xC3);
/// ```
pub const fn swap_nibbles(byte: u8) -> u8 {
    (byte & 0xF) << 4 | byte >> 4
}
