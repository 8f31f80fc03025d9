// Distributed under The MIT License (MIT)
//
// Copyright (c) 2024 The `image-rs` developers
//! # Pixelmap
//!
//! A rectangle of packed pixels, and the functions to pack them.
//!
//! A [`PixelMap`] describes pixel memory by width, height, stride and bits per pixel. The memory
//! is either allocated by the map or borrowed from the caller, which allows wrapping a window
//! into some larger image. Pixels are read and written as packed integers, one at a time or all
//! at once with [`PixelMap::fill`].
//!
//! The packed integers come from [`pack`]. Every packing function produces a value whose bytes in
//! memory are in a fixed order, independent of the machine. That byte sequence is the contract
//! with whatever consumes the memory in the end: usually a presentation layer that was told to
//! expect a particular set of channel masks. [`PackedFormat::masks`] computes those masks.
//!
//! This crate is `no_std` and does not decode or encode image files.
//!
//! ## Usage
//!
//! ```
//! use pixelmap::{pack, NativeEndian, PackedFormat, PixelMap};
//!
//! let mut map = PixelMap::new(480, 272, 0, 32)?;
//!
//! // Clear to a light gray.
//! map.fill(pack::abgr8888(1.0, 0.9, 0.9, 0.9));
//! map.set(10, 20, pack::abgr8888(1.0, 0.0, 0.0, 1.0));
//!
//! // Hand the memory to the presentation layer.
//! let surface = map.surface().expect("not released");
//! let masks = PackedFormat::Abgr8888.masks::<NativeEndian>();
//! assert_eq!(surface.pitch, 4 * 480);
//! assert_eq!(masks.red & masks.alpha, 0);
//! # Ok::<(), pixelmap::PixelMapError>(())
//! ```
// Be std for doctests, avoids a weird warning about missing allocator.
#![cfg_attr(not(any(doctest, feature = "std")), no_std)]
#![deny(unsafe_code)]
extern crate alloc;

mod bits;
mod buf;
mod depth;
mod error;
mod format;
pub mod order;
pub mod pack;
mod pixmap;

#[cfg(test)]
mod tests;

pub use self::bits::Field;
pub use self::depth::Depth;
pub use self::error::{ErrorKind, PixelMapError};
pub use self::format::{Channel, ChannelMasks, Channels, PackedFormat};
pub use self::order::NativeEndian;
pub use self::pack::{NativePacker, Packer};
pub use self::pixmap::{Layout, PixelMap, SurfaceDescriptor};
