//! GBK encoding.

use encoding_rs::{EncoderResult, GBK};

/// Encode `u` as a two-byte GBK sequence.
///
/// Returns `None` for characters that are unmappable or that encode to a single byte, such as
/// ASCII and U+20AC EURO SIGN.
pub fn unicode_to_gbk(u: char) -> Option<[u8; 2]> {
    let mut encoder = GBK.new_encoder();
    let src: &mut [u8] = &mut [0, 0, 0, 0];
    // the encoder wants room for a four byte sequence even though GBK never produces one
    let dst: &mut [u8] = &mut [0, 0, 0, 0];
    let (res, _read, written) =
        encoder.encode_from_utf8_without_replacement(u.encode_utf8(src), dst, true);
    match res {
        EncoderResult::InputEmpty => match written {
            2 => Some([dst[0], dst[1]]),
            _ => None,
        },
        EncoderResult::OutputFull => None,
        EncoderResult::Unmappable(_) => None,
    }
}
