//! Bit-level reading of nibble-swapped glyph data.
//!
//! Fields are consumed most-significant bit first from a cache that is refilled one byte at a
//! time. Every byte is nibble-swapped on the way in, see [swap_nibbles].

use std::io::{Read, Seek, SeekFrom};

use byteorder::ReadBytesExt;

use crate::binary::swap_nibbles;
use crate::error::ParseError;

/// The widest field that can be read in one call.
pub const MAX_FIELD_BITS: u32 = 32;

/// Reader of unsigned and sign-magnitude bit fields.
///
/// At most one partially consumed byte is held in the cache between reads. Seeking the
/// underlying source discards it.
pub struct BitStream<R> {
    inner: R,
    cache: u64,
    cached_bits: u32,
}

impl<R> BitStream<R> {
    pub fn new(inner: R) -> BitStream<R> {
        BitStream {
            inner,
            cache: 0,
            cached_bits: 0,
        }
    }

    /// Number of bits read from the source but not yet consumed.
    pub fn cached_bits(&self) -> u32 {
        self.cached_bits
    }

    fn discard_cache(&mut self) {
        self.cache = 0;
        self.cached_bits = 0;
    }
}

impl<R: Read> BitStream<R> {
    /// Read one byte from the source with its nibbles swapped.
    pub fn read_byte(&mut self) -> Result<u8, ParseError> {
        let raw = self.inner.read_u8()?;
        Ok(swap_nibbles(raw))
    }

    /// Read an unsigned field of `bits` bits.
    ///
    /// Returns `ParseError::BitWidth` if `bits` is greater than 32. When the source runs out
    /// before the field is complete the bytes already fetched stay cached.
    pub fn read_bits(&mut self, bits: u32) -> Result<u32, ParseError> {
        if bits > MAX_FIELD_BITS {
            return Err(ParseError::BitWidth(bits));
        }
        while self.cached_bits < bits {
            let byte = self.read_byte()?;
            self.cache = (self.cache << 8) | u64::from(byte);
            self.cached_bits += 8;
        }
        self.cached_bits -= bits;
        let mask = ((1u64 << bits) - 1) << self.cached_bits;
        let value = (self.cache & mask) >> self.cached_bits;
        self.cache &= !mask;
        Ok(value as u32)
    }

    /// Read a sign-magnitude field of `bits` bits.
    ///
    /// The top bit of the field is the sign, the remaining bits are the magnitude. This is
    /// not two's complement: `0b1000` in a four bit field reads as zero.
    pub fn read_signed_bits(&mut self, bits: u32) -> Result<i32, ParseError> {
        let value = self.read_bits(bits)?;
        let mask = (1u32 << bits.saturating_sub(1)) - 1;
        let magnitude = (value & mask) as i32;
        if value != value & mask {
            Ok(-magnitude)
        } else {
            Ok(magnitude)
        }
    }
}

impl<R: Seek> BitStream<R> {
    /// Seek the underlying source. Cached bits are always discarded, even if the seek fails.
    pub fn seek(&mut self, pos: SeekFrom) -> Result<u64, ParseError> {
        self.discard_cache();
        let pos = self.inner.seek(pos)?;
        Ok(pos)
    }
}
