/// Swap the nibbles of every byte, converting between field order and on-disk order.
pub fn swap_all(data: &[u8]) -> Vec<u8> {
    data.iter().map(|&b| (b & 0xF) << 4 | b >> 4).collect()
}

/// Packs glyph byte-code fields MSB-first and produces on-disk (nibble-swapped) bytes.
#[derive(Debug, Default)]
pub struct BitWriter {
    data: Vec<u8>,
    current: u8,
    filled: u32,
}

#[allow(dead_code)]
impl BitWriter {
    pub fn new() -> Self {
        BitWriter::default()
    }

    pub fn bit_len(&self) -> usize {
        self.data.len() * 8 + self.filled as usize
    }

    pub fn bits(&mut self, value: u32, bits: u32) -> &mut Self {
        for i in (0..bits).rev() {
            self.current = self.current << 1 | ((value >> i) & 1) as u8;
            self.filled += 1;
            if self.filled == 8 {
                self.data.push(self.current);
                self.current = 0;
                self.filled = 0;
            }
        }
        self
    }

    pub fn op(&mut self, opcode: u8) -> &mut Self {
        self.bits(u32::from(opcode), 4)
    }

    pub fn coord(&mut self, value: u8) -> &mut Self {
        self.bits(u32::from(value), 8)
    }

    /// Write a sign-magnitude field.
    pub fn signed(&mut self, value: i32, bits: u32) -> &mut Self {
        let sign = if value < 0 { 1 << (bits - 1) } else { 0 };
        self.bits(sign | value.unsigned_abs(), bits)
    }

    /// A bare padding opcode, as found at the tail of glyphs with an odd nibble count.
    pub fn padding(&mut self) -> &mut Self {
        self.op(15)
    }

    /// Finish the glyph. A trailing half byte is filled with a padding opcode.
    pub fn finish(mut self) -> Vec<u8> {
        if self.filled == 4 {
            self.padding();
        }
        while self.filled != 0 {
            self.bits(0, 1);
        }
        swap_all(&self.data)
    }
}

/// Builds a font file: an index table covering ids `0..=max` followed by glyph data.
#[derive(Debug, Default)]
pub struct FontBuilder {
    glyphs: Vec<(u32, Vec<u8>, bool)>,
}

#[allow(dead_code)]
impl FontBuilder {
    pub fn new() -> Self {
        FontBuilder::default()
    }

    pub fn glyph(mut self, id: u32, data: Vec<u8>) -> Self {
        self.glyphs.push((id, data, false));
        self
    }

    /// Add a glyph whose stored offset has the 0x10000000 flag bit set.
    pub fn flagged_glyph(mut self, id: u32, data: Vec<u8>) -> Self {
        self.glyphs.push((id, data, true));
        self
    }

    pub fn build(self) -> Vec<u8> {
        let count = self.glyphs.iter().map(|(id, _, _)| id + 1).max().unwrap_or(0);
        let mut index = vec![0; count as usize * 6];
        let mut data = Vec::new();
        for (id, glyph, flagged) in &self.glyphs {
            let mut offset = (index.len() + data.len()) as u32;
            if *flagged {
                offset |= 0x1000_0000;
            }
            let record = *id as usize * 6;
            index[record..record + 4].copy_from_slice(&offset.to_le_bytes());
            index[record + 4..record + 6].copy_from_slice(&(glyph.len() as u16).to_le_bytes());
            data.extend_from_slice(glyph);
        }
        index.extend_from_slice(&data);
        index
    }
}
