// Distributed under The MIT License (MIT)
//
// Copyright (c) 2024 The `image-rs` developers
//! Byte order strategies.
//!
//! A packed pixel is written to memory with the host's native multi-byte layout. For the byte
//! sequence in memory to be the same on every host, the *value* has to be assembled in the
//! matching order. This module names the two possible orders and selects the native one at
//! compile time; nothing here branches at runtime.

/// Assembles and splits integers of the widths used by packed pixels.
///
/// Implemented by the uninhabited marker types [`LittleEndian`] and [`BigEndian`]. The methods are
/// associated functions, a strategy is picked by type and never instantiated.
pub trait ByteOrder {
    /// Interpret two bytes of memory as a value.
    fn u16_from_bytes(bytes: [u8; 2]) -> u16;
    /// The memory representation of a 16-bit value.
    fn u16_to_bytes(value: u16) -> [u8; 2];
    /// Interpret three bytes of memory as the low 24 bits of a value.
    fn u24_from_bytes(bytes: [u8; 3]) -> u32;
    /// The memory representation of the low 24 bits of a value.
    fn u24_to_bytes(value: u32) -> [u8; 3];
    /// Interpret four bytes of memory as a value.
    fn u32_from_bytes(bytes: [u8; 4]) -> u32;
    /// The memory representation of a 32-bit value.
    fn u32_to_bytes(value: u32) -> [u8; 4];
}

/// Least significant byte first.
#[derive(Clone, Copy, Debug)]
pub enum LittleEndian {}

/// Most significant byte first.
#[derive(Clone, Copy, Debug)]
pub enum BigEndian {}

/// The byte order of the compilation target.
#[cfg(target_endian = "little")]
pub type NativeEndian = LittleEndian;

/// The byte order of the compilation target.
#[cfg(target_endian = "big")]
pub type NativeEndian = BigEndian;

/// The native value whose memory representation is the big-endian representation of
/// `canonical`, for a value of `bits` bits.
///
/// Widths other than 16, 24 and 32 bits are a single byte and have no order.
#[inline]
pub(crate) fn from_canonical<O: ByteOrder>(canonical: u32, bits: u32) -> u32 {
    match bits {
        16 => u32::from(O::u16_from_bytes((canonical as u16).to_be_bytes())),
        24 => {
            let [_, b0, b1, b2] = canonical.to_be_bytes();
            O::u24_from_bytes([b0, b1, b2])
        }
        32 => O::u32_from_bytes(canonical.to_be_bytes()),
        _ => canonical,
    }
}

/// The inverse of [`from_canonical`].
#[inline]
pub(crate) fn to_canonical<O: ByteOrder>(value: u32, bits: u32) -> u32 {
    match bits {
        16 => u32::from(u16::from_be_bytes(O::u16_to_bytes(value as u16))),
        24 => {
            let [b0, b1, b2] = O::u24_to_bytes(value);
            u32::from_be_bytes([0, b0, b1, b2])
        }
        32 => u32::from_be_bytes(O::u32_to_bytes(value)),
        _ => value,
    }
}

impl ByteOrder for LittleEndian {
    #[inline]
    fn u16_from_bytes(bytes: [u8; 2]) -> u16 {
        u16::from_le_bytes(bytes)
    }

    #[inline]
    fn u16_to_bytes(value: u16) -> [u8; 2] {
        value.to_le_bytes()
    }

    #[inline]
    fn u24_from_bytes([b0, b1, b2]: [u8; 3]) -> u32 {
        u32::from_le_bytes([b0, b1, b2, 0])
    }

    #[inline]
    fn u24_to_bytes(value: u32) -> [u8; 3] {
        let [b0, b1, b2, _] = value.to_le_bytes();
        [b0, b1, b2]
    }

    #[inline]
    fn u32_from_bytes(bytes: [u8; 4]) -> u32 {
        u32::from_le_bytes(bytes)
    }

    #[inline]
    fn u32_to_bytes(value: u32) -> [u8; 4] {
        value.to_le_bytes()
    }
}

impl ByteOrder for BigEndian {
    #[inline]
    fn u16_from_bytes(bytes: [u8; 2]) -> u16 {
        u16::from_be_bytes(bytes)
    }

    #[inline]
    fn u16_to_bytes(value: u16) -> [u8; 2] {
        value.to_be_bytes()
    }

    #[inline]
    fn u24_from_bytes([b0, b1, b2]: [u8; 3]) -> u32 {
        u32::from_be_bytes([0, b0, b1, b2])
    }

    #[inline]
    fn u24_to_bytes(value: u32) -> [u8; 3] {
        let [_, b0, b1, b2] = value.to_be_bytes();
        [b0, b1, b2]
    }

    #[inline]
    fn u32_from_bytes(bytes: [u8; 4]) -> u32 {
        u32::from_be_bytes(bytes)
    }

    #[inline]
    fn u32_to_bytes(value: u32) -> [u8; 4] {
        value.to_be_bytes()
    }
}
