//! Extraction of packed sub-byte fields.
//!
//! Fields are described by a byte index and a mask of contiguous set bits.
//! The mask's lowest set bit determines the shift, so a field value is always
//! returned right-justified. Fields crossing a byte boundary are described by
//! two such parts and joined with [`Spanning`].

/// Extract the right-justified value under `mask` from `byte`.
///
/// `mask` must be a contiguous run of set bits. A zero mask yields zero.
pub const fn extract(byte: u8, mask: u8) -> u8 {
    if mask == 0 {
        return 0;
    }

    (byte & mask) >> mask.trailing_zeros()
}

/// Extract a field split across two adjacent bytes.
///
/// The part under `low_mask` supplies the least significant bits of the
/// result; the part under `high_mask` is shifted above it by the width of
/// `low_mask`.
pub const fn extract_spanning(low: u8, low_mask: u8, high: u8, high_mask: u8) -> u16 {
    let low_part = extract(low, low_mask) as u16;
    let high_part = extract(high, high_mask) as u16;

    low_part | high_part << low_mask.count_ones()
}

/// A field held within a single byte of a fixed-size block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field {
    pub byte: usize,
    pub mask: u8,
}

impl Field {
    pub const fn new(byte: usize, mask: u8) -> Self {
        Self { byte, mask }
    }

    /// Read this field from a block. Out of range bytes read as zero.
    pub fn read(self, r: &[u8]) -> u8 {
        match r.get(self.byte) {
            Some(&b) => extract(b, self.mask),
            None => 0,
        }
    }

    /// Read this field as a flag.
    pub fn is_set(self, r: &[u8]) -> bool {
        self.read(r) != 0
    }
}

/// A field whose bits continue from the top of one byte into the bottom of
/// the next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Spanning {
    pub low: Field,
    pub high: Field,
}

impl Spanning {
    pub const fn new(low: Field, high: Field) -> Self {
        Self { low, high }
    }

    /// Read this field from a block. Out of range bytes read as zero.
    pub fn read(self, r: &[u8]) -> u16 {
        let low = r.get(self.low.byte).copied().unwrap_or(0);
        let high = r.get(self.high.byte).copied().unwrap_or(0);

        extract_spanning(low, self.low.mask, high, self.high.mask)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extract_shifts_by_lowest_mask_bit() {
        assert_eq!(extract(0b1011_0100, 0b0011_0000), 0b11);
        assert_eq!(extract(0b1011_0100, 0b0000_0100), 1);
        assert_eq!(extract(0b1011_0100, 0b1000_0000), 1);
        assert_eq!(extract(0xff, 0xff), 0xff);
    }

    #[test]
    fn extract_zero_mask() {
        assert_eq!(extract(0xff, 0), 0);
    }

    #[test]
    fn spanning_joins_low_then_high() {
        // Bits 6-7 of the first byte, bit 0 of the second.
        assert_eq!(extract_spanning(0b1100_0000, 0b1100_0000, 0b0000_0001, 0b0000_0001), 0b111);
        assert_eq!(extract_spanning(0b0100_0000, 0b1100_0000, 0b0000_0001, 0b0000_0001), 0b101);
        // One bit low, one bit high.
        assert_eq!(extract_spanning(0x80, 0x80, 0x00, 0x01), 0b01);
        assert_eq!(extract_spanning(0x00, 0x80, 0x01, 0x01), 0b10);
    }

    #[test]
    fn descriptors_read_out_of_range_as_zero() {
        let field = Field::new(4, 0x0f);
        assert_eq!(field.read(&[0xff; 2]), 0);

        let spanning = Spanning::new(Field::new(1, 0xf0), Field::new(2, 0x3f));
        assert_eq!(spanning.read(&[0x00, 0xa0]), 0x0a);
        assert_eq!(spanning.read(&[0x00, 0xa0, 0x01]), 0x1a);
    }
}
