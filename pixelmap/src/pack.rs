// Distributed under The MIT License (MIT)
//
// Copyright (c) 2024 The `image-rs` developers
//! Packing of normalized channels into pixel values.
//!
//! Every function takes channels as fractions in `[0, 1]` and quantizes them by truncation to the
//! width of their field, i.e. `(value * max) as uN`. Inputs are not clamped. Values outside the
//! range still produce some value, as the float conversion saturates and overflowing bits are
//! dropped, but which one is unspecified.
//!
//! The bit layouts are spelled out most significant bit first, and this is also the order of the
//! bytes in memory once the value is written with [`PixelMap::set`](crate::PixelMap::set):
//!
//! | Function     | Depth | Bytes in memory                |
//! |--------------|-------|--------------------------------|
//! | [`rgb565`]   | 16    | `rrrrrggg gggbbbbb`            |
//! | [`rgba5551`] | 16    | `rrrrrggg ggbbbbba`            |
//! | [`ia88`]     | 16    | `iiiiiiii aaaaaaaa`            |
//! | [`rgb888`]   | 24    | `r g b`                        |
//! | [`rgba8888`] | 32    | `r g b a`                      |
//! | [`abgr8888`] | 32    | `a b g r`                      |
//!
//! To achieve this on every host the returned scalar is assembled in the host's byte order: on a
//! little-endian machine `rgba8888(1.0, 0.0, 0.0, 0.0)` is `0x0000_00ff`. The free functions of
//! this module use the [`NativeEndian`] order; [`Packer`] offers the same functions for an
//! explicitly chosen order.
//!
//! The single byte formats have no byte order:
//!
//! | Function  | Bits                                |
//! |-----------|-------------------------------------|
//! | [`ci`]    | palette index, truncated to a byte  |
//! | [`i1`]    | `0000000i`                          |
//! | [`i4`]    | `0000iiii`                          |
//! | [`i8`]    | `iiiiiiii`                          |
//! | [`ia31`]  | `0000iiia`                          |
//! | [`ia44`]  | `iiiiaaaa`                          |
use core::marker::PhantomData;

use crate::format::{Channel, PackedFormat};
use crate::order::{self, ByteOrder, NativeEndian};

/// The channel packing functions for a particular byte order.
///
/// There is little reason to name another order than [`NativeEndian`] except for preparing data
/// for a different machine, or for testing. See the [module documentation](self) for the layouts.
///
/// ```
/// use pixelmap::order::{BigEndian, LittleEndian};
/// use pixelmap::Packer;
///
/// assert_eq!(Packer::<BigEndian>::rgb565(1.0, 0.0, 0.0), 0xf800);
/// assert_eq!(Packer::<LittleEndian>::rgb565(1.0, 0.0, 0.0), 0x00f8);
/// ```
pub struct Packer<O>(PhantomData<fn() -> O>);

/// The packer for the byte order of the compilation target.
pub type NativePacker = Packer<NativeEndian>;

/// Quantize a fraction to an integer of at most `max`, truncating.
#[inline]
pub fn quantize(value: f32, max: u32) -> u32 {
    (value * max as f32) as u32 & max
}

impl<O: ByteOrder> Packer<O> {
    /// A palette index, truncated to a byte.
    #[inline]
    pub fn ci(index: u32) -> u8 {
        index as u8
    }

    /// One bit of intensity in the lowest bit.
    #[inline]
    pub fn i1(i: f32) -> u8 {
        quantize(i, 0x1) as u8
    }

    /// Four bits of intensity in the low nibble.
    #[inline]
    pub fn i4(i: f32) -> u8 {
        quantize(i, 0xf) as u8
    }

    /// Eight bits of intensity.
    #[inline]
    pub fn i8(i: f32) -> u8 {
        quantize(i, 0xff) as u8
    }

    /// Three bits of intensity and one of alpha, in the low nibble.
    #[inline]
    pub fn ia31(i: f32, a: f32) -> u8 {
        (quantize(i, 0x7) << 1 | quantize(a, 0x1)) as u8
    }

    /// Four bits of intensity followed by four bits of alpha.
    #[inline]
    pub fn ia44(i: f32, a: f32) -> u8 {
        (quantize(i, 0xf) << 4 | quantize(a, 0xf)) as u8
    }

    /// A byte of intensity followed by a byte of alpha.
    #[inline]
    pub fn ia88(i: f32, a: f32) -> u16 {
        O::u16_from_bytes([quantize(i, 0xff) as u8, quantize(a, 0xff) as u8])
    }

    /// Intensity and alpha for a pixel of `bits` bits: 4, 8 or 16.
    ///
    /// These select [`ia31`](Self::ia31), [`ia44`](Self::ia44) and [`ia88`](Self::ia88)
    /// respectively. Any other depth has no intensity-alpha format and packs to `0`.
    #[inline]
    pub fn intensity_alpha(bits: u32, i: f32, a: f32) -> u16 {
        match bits {
            4 => u16::from(Self::ia31(i, a)),
            8 => u16::from(Self::ia44(i, a)),
            16 => Self::ia88(i, a),
            _ => 0,
        }
    }

    /// Five bits of red, six of green, five of blue.
    #[inline]
    pub fn rgb565(r: f32, g: f32, b: f32) -> u16 {
        let canonical = quantize(r, 0x1f) << 11 | quantize(g, 0x3f) << 5 | quantize(b, 0x1f);
        O::u16_from_bytes((canonical as u16).to_be_bytes())
    }

    /// Five bits each of red, green and blue, then one bit of alpha.
    #[inline]
    pub fn rgba5551(r: f32, g: f32, b: f32, a: f32) -> u16 {
        let canonical = quantize(r, 0x1f) << 11
            | quantize(g, 0x1f) << 6
            | quantize(b, 0x1f) << 1
            | quantize(a, 0x1);
        O::u16_from_bytes((canonical as u16).to_be_bytes())
    }

    /// A byte each of red, green and blue, for a 24-bit pixel.
    #[inline]
    pub fn rgb888(r: f32, g: f32, b: f32) -> u32 {
        O::u24_from_bytes([
            quantize(r, 0xff) as u8,
            quantize(g, 0xff) as u8,
            quantize(b, 0xff) as u8,
        ])
    }

    /// A byte each of red, green, blue and alpha.
    #[inline]
    pub fn rgba8888(r: f32, g: f32, b: f32, a: f32) -> u32 {
        O::u32_from_bytes([
            quantize(r, 0xff) as u8,
            quantize(g, 0xff) as u8,
            quantize(b, 0xff) as u8,
            quantize(a, 0xff) as u8,
        ])
    }

    /// A byte each of alpha, blue, green and red.
    ///
    /// The arguments are taken in memory order, like all other functions.
    #[inline]
    pub fn abgr8888(a: f32, b: f32, g: f32, r: f32) -> u32 {
        O::u32_from_bytes([
            quantize(a, 0xff) as u8,
            quantize(b, 0xff) as u8,
            quantize(g, 0xff) as u8,
            quantize(r, 0xff) as u8,
        ])
    }

    /// Pack any format, reading channel fractions from a callback.
    ///
    /// The callback is invoked once for every channel of the format. Fractions are quantized to
    /// their field like the dedicated functions do, except for [`Channel::Index`] which is taken
    /// as an integer and truncated.
    ///
    /// ```
    /// use pixelmap::{pack, Channel, NativePacker, PackedFormat};
    ///
    /// let value = NativePacker::pack(PackedFormat::Rgb565, |channel| match channel {
    ///     Channel::Red => 1.0,
    ///     _ => 0.5,
    /// });
    ///
    /// assert_eq!(value, u32::from(pack::rgb565(1.0, 0.5, 0.5)));
    /// ```
    pub fn pack(format: PackedFormat, mut channel: impl FnMut(Channel) -> f32) -> u32 {
        let width = format.depth().bits();
        let canonical = format
            .fields()
            .iter()
            .fold(0, |canonical, &(which, field)| {
                let value = channel(which);
                let bits = match which {
                    Channel::Index => value as u32,
                    _ => quantize(value, field.max()),
                };
                field.insert(canonical, width, bits)
            });

        order::from_canonical::<O>(canonical, width)
    }
}

/// See [`Packer::ci`].
#[inline]
pub fn ci(index: u32) -> u8 {
    NativePacker::ci(index)
}

/// See [`Packer::i1`].
#[inline]
pub fn i1(i: f32) -> u8 {
    NativePacker::i1(i)
}

/// See [`Packer::i4`].
#[inline]
pub fn i4(i: f32) -> u8 {
    NativePacker::i4(i)
}

/// See [`Packer::i8`].
#[inline]
pub fn i8(i: f32) -> u8 {
    NativePacker::i8(i)
}

/// See [`Packer::ia31`].
#[inline]
pub fn ia31(i: f32, a: f32) -> u8 {
    NativePacker::ia31(i, a)
}

/// See [`Packer::ia44`].
#[inline]
pub fn ia44(i: f32, a: f32) -> u8 {
    NativePacker::ia44(i, a)
}

/// See [`Packer::ia88`].
#[inline]
pub fn ia88(i: f32, a: f32) -> u16 {
    NativePacker::ia88(i, a)
}

/// See [`Packer::intensity_alpha`].
#[inline]
pub fn intensity_alpha(bits: u32, i: f32, a: f32) -> u16 {
    NativePacker::intensity_alpha(bits, i, a)
}

/// See [`Packer::rgb565`].
#[inline]
pub fn rgb565(r: f32, g: f32, b: f32) -> u16 {
    NativePacker::rgb565(r, g, b)
}

/// See [`Packer::rgba5551`].
#[inline]
pub fn rgba5551(r: f32, g: f32, b: f32, a: f32) -> u16 {
    NativePacker::rgba5551(r, g, b, a)
}

/// See [`Packer::rgb888`].
#[inline]
pub fn rgb888(r: f32, g: f32, b: f32) -> u32 {
    NativePacker::rgb888(r, g, b)
}

/// See [`Packer::rgba8888`].
#[inline]
pub fn rgba8888(r: f32, g: f32, b: f32, a: f32) -> u32 {
    NativePacker::rgba8888(r, g, b, a)
}

/// See [`Packer::abgr8888`].
#[inline]
pub fn abgr8888(a: f32, b: f32, g: f32, r: f32) -> u32 {
    NativePacker::abgr8888(a, b, g, r)
}

/// The 4-bit intensity and alpha of a pixel, same as [`ia31`].
#[inline]
pub fn ia4(i: f32, a: f32) -> u8 {
    ia31(i, a)
}

/// The 8-bit intensity and alpha of a pixel, same as [`ia44`].
#[inline]
pub fn ia8(i: f32, a: f32) -> u8 {
    ia44(i, a)
}

/// The 16-bit intensity and alpha of a pixel, same as [`ia88`].
#[inline]
pub fn ia16(i: f32, a: f32) -> u16 {
    ia88(i, a)
}

/// The 24-bit color of a pixel, same as [`rgb888`].
#[inline]
pub fn rgb24(r: f32, g: f32, b: f32) -> u32 {
    rgb888(r, g, b)
}

/// The 32-bit color of a pixel, same as [`rgba8888`].
#[inline]
pub fn rgba32(r: f32, g: f32, b: f32, a: f32) -> u32 {
    rgba8888(r, g, b, a)
}
