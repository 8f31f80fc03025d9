// Distributed under The MIT License (MIT)
//
// Copyright (c) 2024 The `image-rs` developers
use crate::order::{ByteOrder, NativeEndian};

/// The number of bits occupied by a single pixel.
///
/// This is a closed set of the depths a [`PixelMap`](crate::PixelMap) knows how to address, plus
/// an escape hatch for any other value. Depths are never rejected: a map of unsupported depth
/// still computes its memory size from the raw bit count, but reads from it yield `0` and writes
/// are ignored.
///
/// Note that `Bits1` and `Bits4` are such unsupported depths. They exist so that a layout can be
/// described and allocated, but no sub-byte addressing order is defined for them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Depth {
    /// One bit per pixel. Allocation only.
    Bits1,
    /// Four bits per pixel. Allocation only.
    Bits4,
    /// One byte per pixel: intensity, intensity-alpha or palette index formats.
    Bits8,
    /// Two bytes per pixel, stored with a native 16-bit store.
    Bits16,
    /// Three bytes per pixel, stored byte by byte.
    Bits24,
    /// Four bytes per pixel, stored with a native 32-bit store.
    Bits32,
    /// Any other bit count. Not addressable.
    Other(u32),
}

/// Per-depth element access, resolved once when a map is constructed.
///
/// `load` and `store` receive a slice of exactly `bytes` bytes.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Access {
    pub(crate) bytes: usize,
    load: fn(&[u8]) -> u32,
    store: fn(&mut [u8], u32),
}

impl Depth {
    /// Classify a raw bits-per-pixel value.
    pub const fn from_bits(bpp: u32) -> Self {
        match bpp {
            1 => Depth::Bits1,
            4 => Depth::Bits4,
            8 => Depth::Bits8,
            16 => Depth::Bits16,
            24 => Depth::Bits24,
            32 => Depth::Bits32,
            other => Depth::Other(other),
        }
    }

    /// The raw number of bits per pixel.
    pub const fn bits(self) -> u32 {
        match self {
            Depth::Bits1 => 1,
            Depth::Bits4 => 4,
            Depth::Bits8 => 8,
            Depth::Bits16 => 16,
            Depth::Bits24 => 24,
            Depth::Bits32 => 32,
            Depth::Other(bits) => bits,
        }
    }

    /// The bits of a packed value that survive a write followed by a read.
    ///
    /// This is `0` for every depth that can not be addressed.
    pub const fn value_mask(self) -> u32 {
        match self {
            Depth::Bits8 => 0xff,
            Depth::Bits16 => 0xffff,
            Depth::Bits24 => 0xff_ffff,
            Depth::Bits32 => u32::MAX,
            Depth::Bits1 | Depth::Bits4 | Depth::Other(_) => 0,
        }
    }

    /// Whether individual pixels of this depth can be read and written.
    pub const fn is_addressable(self) -> bool {
        matches!(
            self,
            Depth::Bits8 | Depth::Bits16 | Depth::Bits24 | Depth::Bits32
        )
    }

    pub(crate) fn access(self) -> Option<Access> {
        Some(match self {
            Depth::Bits8 => Access {
                bytes: 1,
                load: load_u8,
                store: store_u8,
            },
            Depth::Bits16 => Access {
                bytes: 2,
                load: load_u16,
                store: store_u16,
            },
            Depth::Bits24 => Access {
                bytes: 3,
                load: load_u24,
                store: store_u24,
            },
            Depth::Bits32 => Access {
                bytes: 4,
                load: load_u32,
                store: store_u32,
            },
            Depth::Bits1 | Depth::Bits4 | Depth::Other(_) => return None,
        })
    }
}

impl From<u32> for Depth {
    fn from(bpp: u32) -> Self {
        Depth::from_bits(bpp)
    }
}

impl Access {
    #[inline]
    pub(crate) fn load(&self, element: &[u8]) -> u32 {
        (self.load)(element)
    }

    #[inline]
    pub(crate) fn store(&self, element: &mut [u8], value: u32) {
        (self.store)(element, value)
    }
}

fn load_u8(element: &[u8]) -> u32 {
    match *element {
        [byte] => u32::from(byte),
        _ => 0,
    }
}

fn store_u8(element: &mut [u8], value: u32) {
    if let [byte] = element {
        *byte = value as u8;
    }
}

fn load_u16(element: &[u8]) -> u32 {
    bytemuck::try_pod_read_unaligned::<u16>(element).map_or(0, u32::from)
}

fn store_u16(element: &mut [u8], value: u32) {
    element.copy_from_slice(bytemuck::bytes_of(&(value as u16)));
}

// Three bytes have no native store; assemble them in the order a native 32-bit store would use
// for the low three bytes, so that 24-bit and 32-bit values share their channel positions.
fn load_u24(element: &[u8]) -> u32 {
    match *element {
        [b0, b1, b2] => NativeEndian::u24_from_bytes([b0, b1, b2]),
        _ => 0,
    }
}

fn store_u24(element: &mut [u8], value: u32) {
    element.copy_from_slice(&NativeEndian::u24_to_bytes(value));
}

fn load_u32(element: &[u8]) -> u32 {
    bytemuck::try_pod_read_unaligned::<u32>(element).unwrap_or(0)
}

fn store_u32(element: &mut [u8], value: u32) {
    element.copy_from_slice(bytemuck::bytes_of(&value));
}

#[cfg(test)]
mod tests {
    use super::Depth;

    #[test]
    fn classification() {
        for bits in [1, 4, 8, 16, 24, 32] {
            let depth = Depth::from_bits(bits);
            assert!(!matches!(depth, Depth::Other(_)), "{bits}");
            assert_eq!(depth.bits(), bits);
            assert_eq!(depth.is_addressable(), bits >= 8, "{bits}");
        }

        assert_eq!(Depth::from_bits(12), Depth::Other(12));
        assert_eq!(Depth::Other(12).bits(), 12);
        assert_eq!(Depth::from(0), Depth::Other(0));
        assert!(!Depth::Other(12).is_addressable());
    }

    #[test]
    fn access_widths() {
        let widths = [Depth::Bits8, Depth::Bits16, Depth::Bits24, Depth::Bits32]
            .map(|depth| depth.access().map(|access| access.bytes));
        assert_eq!(widths, [Some(1), Some(2), Some(3), Some(4)]);

        assert!(Depth::Bits1.access().is_none());
        assert!(Depth::Bits4.access().is_none());
        assert!(Depth::Other(7).access().is_none());

        for depth in [Depth::Bits1, Depth::Bits4, Depth::Bits8, Depth::Other(7)] {
            assert_eq!(depth.access().is_some(), depth.is_addressable(), "{depth:?}");
        }
    }

    #[test]
    fn element_roundtrip() {
        let access = Depth::Bits24.access().unwrap();
        let mut element = [0u8; 3];
        access.store(&mut element, 0xab_cdef);
        assert_eq!(access.load(&element), 0xab_cdef);

        let access = Depth::Bits16.access().unwrap();
        let mut element = [0u8; 2];
        access.store(&mut element, 0x1_2345);
        assert_eq!(access.load(&element), 0x2345);
        assert_eq!(element, 0x2345u16.to_ne_bytes());
    }
}
