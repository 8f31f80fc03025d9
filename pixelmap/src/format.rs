// Distributed under The MIT License (MIT)
//
// Copyright (c) 2024 The `image-rs` developers
use crate::bits::Field;
use crate::depth::Depth;
use crate::order::{self, ByteOrder};

/// One component of a packed pixel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Channel {
    Red = 0,
    Green = 1,
    Blue = 2,
    Alpha = 3,
    Intensity = 4,
    /// A palette index, not a fraction.
    Index = 5,
}

/// The bit layouts produced by the functions in [`pack`](crate::pack).
#[non_exhaustive]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PackedFormat {
    /// See [`pack::ci`](crate::pack::ci).
    Index8,
    /// See [`pack::i1`](crate::pack::i1).
    I1,
    /// See [`pack::i4`](crate::pack::i4).
    I4,
    /// See [`pack::i8`](crate::pack::i8).
    I8,
    /// See [`pack::ia31`](crate::pack::ia31).
    Ia31,
    /// See [`pack::ia44`](crate::pack::ia44).
    Ia44,
    /// See [`pack::ia88`](crate::pack::ia88).
    Ia88,
    /// See [`pack::rgb565`](crate::pack::rgb565).
    Rgb565,
    /// See [`pack::rgba5551`](crate::pack::rgba5551).
    Rgba5551,
    /// See [`pack::rgb888`](crate::pack::rgb888).
    Rgb888,
    /// See [`pack::rgba8888`](crate::pack::rgba8888).
    Rgba8888,
    /// See [`pack::abgr8888`](crate::pack::abgr8888).
    Abgr8888,
}

/// The bits a consumer must select to read each channel of a pixel.
///
/// The masks apply to the pixel read as a single native integer of the pixel's depth, which is
/// how presentation layers usually describe their surfaces. Channels absent from a format have a
/// mask of `0`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ChannelMasks {
    pub red: u32,
    pub green: u32,
    pub blue: u32,
    pub alpha: u32,
    pub intensity: u32,
    pub index: u32,
}

/// The quantized channels of an unpacked pixel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Channels {
    /// Value and field maximum, indexed by `Channel as usize`.
    values: [Option<(u32, u32)>; 6],
}

macro_rules! fields {
    ($($channel:ident: $range:expr),*) => {{
        const FIELDS: &[(Channel, Field)] = &[$((Channel::$channel, Field::from_range($range))),*];
        FIELDS
    }};
}

impl PackedFormat {
    /// All known formats.
    pub const ALL: [PackedFormat; 12] = [
        PackedFormat::Index8,
        PackedFormat::I1,
        PackedFormat::I4,
        PackedFormat::I8,
        PackedFormat::Ia31,
        PackedFormat::Ia44,
        PackedFormat::Ia88,
        PackedFormat::Rgb565,
        PackedFormat::Rgba5551,
        PackedFormat::Rgb888,
        PackedFormat::Rgba8888,
        PackedFormat::Abgr8888,
    ];

    /// The depth of a pixel map holding this format.
    pub const fn depth(self) -> Depth {
        use PackedFormat::*;
        match self {
            Index8 | I1 | I4 | I8 | Ia31 | Ia44 => Depth::Bits8,
            Ia88 | Rgb565 | Rgba5551 => Depth::Bits16,
            Rgb888 => Depth::Bits24,
            Rgba8888 | Abgr8888 => Depth::Bits32,
        }
    }

    /// The channel fields, in big-endian bit numbering of the canonical value.
    ///
    /// Listed in the order of their bits.
    pub fn fields(self) -> &'static [(Channel, Field)] {
        use PackedFormat::*;
        match self {
            Index8 => fields!(Index: 0..8),
            I1 => fields!(Intensity: 7..8),
            I4 => fields!(Intensity: 4..8),
            I8 => fields!(Intensity: 0..8),
            Ia31 => fields!(Intensity: 4..7, Alpha: 7..8),
            Ia44 => fields!(Intensity: 0..4, Alpha: 4..8),
            Ia88 => fields!(Intensity: 0..8, Alpha: 8..16),
            Rgb565 => fields!(Red: 0..5, Green: 5..11, Blue: 11..16),
            Rgba5551 => fields!(Red: 0..5, Green: 5..10, Blue: 10..15, Alpha: 15..16),
            Rgb888 => fields!(Red: 0..8, Green: 8..16, Blue: 16..24),
            Rgba8888 => fields!(Red: 0..8, Green: 8..16, Blue: 16..24, Alpha: 24..32),
            Abgr8888 => fields!(Alpha: 0..8, Blue: 8..16, Green: 16..24, Red: 24..32),
        }
    }

    /// The field of one channel, if the format has it.
    pub fn field(self, channel: Channel) -> Option<Field> {
        self.fields()
            .iter()
            .find(|(which, _)| *which == channel)
            .map(|&(_, field)| field)
    }

    /// The masks for a consumer on a machine of byte order `O`.
    ///
    /// ```
    /// use pixelmap::order::LittleEndian;
    /// use pixelmap::PackedFormat;
    ///
    /// let masks = PackedFormat::Abgr8888.masks::<LittleEndian>();
    /// assert_eq!(masks.red, 0xff00_0000);
    /// assert_eq!(masks.green, 0x00ff_0000);
    /// assert_eq!(masks.blue, 0x0000_ff00);
    /// assert_eq!(masks.alpha, 0x0000_00ff);
    /// ```
    pub fn masks<O: ByteOrder>(self) -> ChannelMasks {
        let width = self.depth().bits();
        let mut masks = ChannelMasks::default();

        for &(channel, field) in self.fields() {
            *masks.get_mut(channel) = order::from_canonical::<O>(field.mask(width), width);
        }

        masks
    }

    /// Split a value, as read by [`PixelMap::get`](crate::PixelMap::get) on a machine of byte
    /// order `O`, into its quantized channels.
    pub fn unpack<O: ByteOrder>(self, value: u32) -> Channels {
        let width = self.depth().bits();
        let canonical = order::to_canonical::<O>(value, width);
        let mut channels = Channels::default();

        for &(channel, field) in self.fields() {
            channels.values[channel as usize] = Some((field.extract(canonical, width), field.max()));
        }

        channels
    }
}

impl ChannelMasks {
    /// The mask of one channel.
    pub fn get(&self, channel: Channel) -> u32 {
        match channel {
            Channel::Red => self.red,
            Channel::Green => self.green,
            Channel::Blue => self.blue,
            Channel::Alpha => self.alpha,
            Channel::Intensity => self.intensity,
            Channel::Index => self.index,
        }
    }

    fn get_mut(&mut self, channel: Channel) -> &mut u32 {
        match channel {
            Channel::Red => &mut self.red,
            Channel::Green => &mut self.green,
            Channel::Blue => &mut self.blue,
            Channel::Alpha => &mut self.alpha,
            Channel::Intensity => &mut self.intensity,
            Channel::Index => &mut self.index,
        }
    }
}

impl Channels {
    /// The quantized value of a channel.
    pub fn get(&self, channel: Channel) -> Option<u32> {
        self.values[channel as usize].map(|(value, _)| value)
    }

    /// The value of a channel as a fraction of its field maximum.
    ///
    /// An index is returned as is, it is not a fraction.
    pub fn normalized(&self, channel: Channel) -> Option<f32> {
        let (value, max) = self.values[channel as usize]?;
        Some(match channel {
            Channel::Index => value as f32,
            _ => value as f32 / max as f32,
        })
    }
}
