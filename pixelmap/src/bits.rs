// Distributed under The MIT License (MIT)
//
// Copyright (c) 2024 The `image-rs` developers
use core::ops::Range;

/// Specifies which bits a channel occupies within a packed value.
///
/// Bits are numbered in big-endian order: bit `0` is the most significant bit of the canonical
/// value, i.e. the highest bit of the first byte in memory. This is the order in which formats
/// such as `RGB565` are conventionally spelled out.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Field {
    begin: u32,
    len: u32,
}

impl Field {
    pub const fn from_range(range: Range<u32>) -> Self {
        Field {
            begin: range.start,
            len: range.end - range.start,
        }
    }

    /// The index of the first, most significant, bit.
    pub const fn begin(self) -> u32 {
        self.begin
    }

    /// The number of bits.
    pub const fn len(self) -> u32 {
        self.len
    }

    /// The largest value the field holds, which is also its unshifted mask.
    pub const fn max(self) -> u32 {
        ((-1i64 as u64) ^ u32::MAX as u64).rotate_left(self.len) as u32
    }

    /// The distance of the least significant bit from bit zero of a `width` bit value.
    const fn shift(self, width: u32) -> u32 {
        width - self.begin - self.len
    }

    /// The field's mask within a canonical value of `width` bits.
    pub const fn mask(self, width: u32) -> u32 {
        self.max() << self.shift(width)
    }

    /// Extract the field from a canonical value, into the lowest bits.
    pub(crate) const fn extract(self, canonical: u32, width: u32) -> u32 {
        (canonical >> self.shift(width)) & self.max()
    }

    /// Replace the field within a canonical value, discarding bits beyond its length.
    pub(crate) const fn insert(self, canonical: u32, width: u32, bits: u32) -> u32 {
        let shift = self.shift(width);
        (canonical & !(self.max() << shift)) | (bits & self.max()) << shift
    }
}

#[cfg(test)]
mod tests {
    use super::Field;

    #[test]
    fn masks() {
        assert_eq!(Field::from_range(0..0).max(), 0);
        assert_eq!(Field::from_range(0..5).max(), 0x1f);
        assert_eq!(Field::from_range(0..32).max(), u32::MAX);

        assert_eq!(Field::from_range(0..5).mask(16), 0xf800);
        assert_eq!(Field::from_range(5..11).mask(16), 0x07e0);
        assert_eq!(Field::from_range(11..16).mask(16), 0x001f);
        assert_eq!(Field::from_range(24..32).mask(32), 0xff);
    }

    #[test]
    fn range_bounds() {
        let field = Field::from_range(5..11);
        assert_eq!(field.begin(), 5);
        assert_eq!(field.len(), 6);
        assert_eq!(field.max(), 0x3f);

        let empty = Field::from_range(3..3);
        assert_eq!(empty.begin(), 3);
        assert_eq!(empty.len(), 0);
    }

    #[test]
    fn bit_extraction() {
        let val = 0b1000_1010u32;
        let extract = |r: core::ops::Range<u32>| Field::from_range(r).extract(val, 8);

        assert_eq!(extract(0..1), 1);
        assert_eq!(extract(1..2), 0);
        assert_eq!(extract(2..3), 0);
        assert_eq!(extract(6..7), 1);
        assert_eq!(extract(0..7), val >> 1);
        assert_eq!(extract(1..8), val & 0x7f);

        assert_eq!(extract(0..0), 0);
        assert_eq!(extract(1..1), 0);
    }

    #[test]
    fn bit_insertion() {
        // Return the binary diff of insertion.
        fn insert_simple(r: core::ops::Range<u32>, bits: u32, val: &mut u32) -> u32 {
            let before = *val;
            *val = Field::from_range(r).insert(*val, 8, bits);
            before ^ *val
        }

        let mut val = 0b1000_1010u32;
        assert_eq!(insert_simple(0..1, 1, &mut val), 0);
        assert_eq!(insert_simple(1..2, 0, &mut val), 0);
        assert_eq!(insert_simple(6..7, 1, &mut val), 0);
        assert_eq!(insert_simple(0..7, val >> 1, &mut val), 0);
        assert_eq!(insert_simple(1..8, val & 0x7f, &mut val), 0);

        assert_eq!(insert_simple(0..0, 0, &mut val), 0);
        assert_eq!(insert_simple(4..8, 0xff, &mut val), 0b0101);
    }
}
