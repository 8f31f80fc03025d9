// Distributed under The MIT License (MIT)
//
// Copyright (c) 2024 The `image-rs` developers
use core::{fmt, mem};

use crate::buf::Buffer;
use crate::depth::{Access, Depth};
use crate::error::PixelMapError;

/// The validated geometry and depth of a pixel map.
///
/// A layout can be computed without allocating anything, which allows inspecting the size of the
/// pixel memory before committing to it. See [`PixelMap::from_layout`].
///
/// Coordinates start at `(0, 0)` in the top left corner. Rows follow each other in memory, each
/// `stride` pixels long. Usually the stride equals the width but it is larger when the map
/// describes a sub-image of some larger image.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Layout {
    width: u32,
    height: u32,
    stride: u32,
    depth: Depth,
    /// The total number of bytes, as proof of calculation.
    byte_len: usize,
}

/// A rectangle of packed pixels in owned or borrowed memory.
///
/// Pixels are read and written as packed `u32` values, see [`pack`](crate::pack) for producing
/// them. The way a value is laid out in memory depends on the [`Depth`]:
///
/// * 8, 16 and 32 bits are stored as a single element in native byte order.
/// * 24 bits are stored as three bytes, in the order a native 32-bit store would use for the low
///   three bytes of the value.
/// * 1 and 4 bits, and any other depth, are not addressable. Reads yield `0`, writes are ignored.
///
/// The memory is released exactly once, either by [`release`](Self::release) or when the map is
/// dropped. Memory supplied by the caller is never freed, the map merely ends its borrow.
///
/// # Examples
///
/// ```
/// use pixelmap::{pack, PixelMap};
///
/// let mut map = PixelMap::new(4, 4, 0, 32)?;
/// assert_eq!(map.stride(), 4);
/// assert_eq!(map.as_bytes().len(), 64);
///
/// let red = pack::rgba8888(1.0, 0.0, 0.0, 1.0);
/// map.set(3, 3, red);
/// assert_eq!(map.get(3, 3), red);
/// assert_eq!(map.get(0, 0), 0);
///
/// // Regardless of the host, the bytes are red, green, blue and alpha.
/// assert_eq!(&map.as_bytes()[60..], &[0xff, 0x00, 0x00, 0xff]);
/// # Ok::<(), pixelmap::PixelMapError>(())
/// ```
pub struct PixelMap<'data> {
    layout: Layout,
    /// Element access for the depth, `None` if pixels are not addressable.
    access: Option<Access>,
    storage: Storage<'data>,
}

enum Storage<'data> {
    Owned(Buffer),
    Borrowed(&'data mut [u8]),
    Released,
}

/// The raw memory of a map together with everything needed to reinterpret it.
///
/// This is what a presentation layer consumes. Pair it with the
/// [`ChannelMasks`](crate::ChannelMasks) of the format the pixels were packed in.
#[derive(Clone, Copy, Debug)]
pub struct SurfaceDescriptor<'data> {
    /// The pixel memory, exactly [`Layout::byte_len`] bytes.
    ///
    /// For depths below 8 bits this may exceed `pitch * height`, the total is rounded once for
    /// the whole map while the pitch is rounded for each row.
    pub bytes: &'data [u8],
    /// The number of visible pixels in each row.
    pub width: u32,
    /// The number of rows.
    pub height: u32,
    /// The number of bits of each pixel.
    pub bits_per_pixel: u32,
    /// The number of pixels from the start of one row to the next.
    pub stride: u32,
    /// The number of bytes from the start of one row to the next.
    pub pitch: usize,
}

impl Layout {
    /// Validate a layout.
    ///
    /// A `stride` of `0` selects the width. The depth is not validated, any bit count describes a
    /// valid memory size even if its pixels are not addressable.
    ///
    /// This fails if a stride is smaller than the width or if the number of bytes,
    /// `stride * height * bpp / 8`, is not representable.
    pub fn new(
        width: u32,
        height: u32,
        stride: u32,
        depth: impl Into<Depth>,
    ) -> Result<Self, PixelMapError> {
        let depth = depth.into();
        let stride = if stride == 0 { width } else { stride };

        if stride < width {
            tracing::warn!(stride, width, "rejecting stride smaller than width");
            return Err(PixelMapError::bad_stride(stride, width));
        }

        let bits = depth.bits();
        let byte_len = Self::byte_len_of(stride, height, bits)
            .ok_or_else(|| PixelMapError::overflow(stride, height, bits))?;

        Ok(Layout {
            width,
            height,
            stride,
            depth,
            byte_len,
        })
    }

    fn byte_len_of(stride: u32, height: u32, bits: u32) -> Option<usize> {
        let stride = usize::try_from(stride).ok()?;
        let height = usize::try_from(height).ok()?;
        let bits = usize::try_from(bits).ok()?;
        Some(stride.checked_mul(height)?.checked_mul(bits)? / 8)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// The number of pixels from the start of one row to the next.
    pub fn stride(&self) -> u32 {
        self.stride
    }

    pub fn depth(&self) -> Depth {
        self.depth
    }

    /// The number of bytes of the pixel memory.
    pub fn byte_len(&self) -> usize {
        self.byte_len
    }

    /// The number of bytes from the start of one row to the next.
    ///
    /// For depths below 8 bits this is rounded down, like the total byte length.
    pub fn pitch(&self) -> usize {
        Self::byte_len_of(self.stride, 1, self.depth.bits()).unwrap_or(0)
    }

    /// The byte offset of the pixel at `(x, y)` for elements of `bytes` bytes.
    ///
    /// Does not overflow: the offset is bounded by the validated byte length.
    fn element_start(&self, x: u32, y: u32, bytes: usize) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }

        let index = y as usize * self.stride as usize + x as usize;
        Some(index * bytes)
    }
}

impl<'data> PixelMap<'data> {
    /// Allocate a zeroed pixel map.
    ///
    /// A `stride` of `0` selects the width. See [`Layout::new`] for the validation performed.
    /// Allocation failure is reported as an error with [`ErrorKind::Allocation`].
    ///
    /// [`ErrorKind::Allocation`]: crate::ErrorKind::Allocation
    pub fn new(width: u32, height: u32, stride: u32, bpp: u32) -> Result<Self, PixelMapError> {
        Self::from_layout(Layout::new(width, height, stride, bpp)?)
    }

    /// Allocate a zeroed pixel map for a precomputed layout.
    pub fn from_layout(layout: Layout) -> Result<Self, PixelMapError> {
        let bytes = layout.byte_len();
        let buffer = Buffer::try_zeroed(bytes).map_err(|err| {
            tracing::warn!(bytes, %err, "failed to allocate pixel memory");
            PixelMapError::allocation(bytes)
        })?;

        tracing::debug!(
            width = layout.width,
            height = layout.height,
            stride = layout.stride,
            bpp = layout.depth.bits(),
            bytes,
            "allocated pixel map"
        );

        Ok(Self::with_storage(layout, Storage::Owned(buffer)))
    }

    /// Interpret caller supplied memory as a pixel map.
    ///
    /// The memory is not initialized and never freed by the map. It may be longer than required,
    /// only the leading [`Layout::byte_len`] bytes are used.
    pub fn with_memory(
        memory: &'data mut [u8],
        width: u32,
        height: u32,
        stride: u32,
        bpp: u32,
    ) -> Result<Self, PixelMapError> {
        Self::with_layout_in(Layout::new(width, height, stride, bpp)?, memory)
    }

    /// Interpret caller supplied memory with a precomputed layout.
    pub fn with_layout_in(layout: Layout, memory: &'data mut [u8]) -> Result<Self, PixelMapError> {
        let needed = layout.byte_len();
        if memory.len() < needed {
            tracing::warn!(needed, actual = memory.len(), "supplied pixel memory too small");
            return Err(PixelMapError::buffer_too_small(needed, memory.len()));
        }

        let (memory, _) = memory.split_at_mut(needed);
        Ok(Self::with_storage(layout, Storage::Borrowed(memory)))
    }

    /// Create a map over supplied memory, or allocate its own if there is none.
    ///
    /// This is the combined form of [`new`](Self::new) and [`with_memory`](Self::with_memory).
    pub fn create(
        width: u32,
        height: u32,
        stride: u32,
        bpp: u32,
        memory: Option<&'data mut [u8]>,
    ) -> Result<Self, PixelMapError> {
        let layout = Layout::new(width, height, stride, bpp)?;
        match memory {
            Some(memory) => Self::with_layout_in(layout, memory),
            None => Self::from_layout(layout),
        }
    }

    fn with_storage(layout: Layout, storage: Storage<'data>) -> Self {
        PixelMap {
            access: layout.depth.access(),
            layout,
            storage,
        }
    }

    /// Give up the pixel memory.
    ///
    /// Owned memory is freed, borrowed memory is left untouched and returned to the lender's
    /// control once the map goes out of scope. Calling this again does nothing. Afterwards the map
    /// has no pixels: reads yield `0` and writes are ignored, though the layout is retained.
    pub fn release(&mut self) {
        match mem::replace(&mut self.storage, Storage::Released) {
            Storage::Owned(buffer) => {
                tracing::debug!(bytes = buffer.len(), "released owned pixel memory");
            }
            Storage::Borrowed(memory) => {
                tracing::debug!(bytes = memory.len(), "released borrowed pixel memory");
            }
            Storage::Released => {}
        }
    }

    /// Whether [`release`](Self::release) was called.
    pub fn is_released(&self) -> bool {
        matches!(self.storage, Storage::Released)
    }

    /// Whether the map allocated, and will free, its own memory.
    pub fn owns_memory(&self) -> bool {
        matches!(self.storage, Storage::Owned(_))
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn width(&self) -> u32 {
        self.layout.width
    }

    pub fn height(&self) -> u32 {
        self.layout.height
    }

    pub fn stride(&self) -> u32 {
        self.layout.stride
    }

    pub fn depth(&self) -> Depth {
        self.layout.depth
    }

    /// The pixel memory. Empty after release.
    pub fn as_bytes(&self) -> &[u8] {
        match &self.storage {
            Storage::Owned(buffer) => buffer.as_bytes(),
            Storage::Borrowed(memory) => &memory[..],
            Storage::Released => &[],
        }
    }

    /// The mutable pixel memory. Empty after release.
    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        match &mut self.storage {
            Storage::Owned(buffer) => buffer.as_bytes_mut(),
            Storage::Borrowed(memory) => &mut memory[..],
            Storage::Released => &mut [],
        }
    }

    /// Describe the memory for a consumer, or `None` after release.
    pub fn surface(&self) -> Option<SurfaceDescriptor<'_>> {
        if self.is_released() {
            return None;
        }

        Some(SurfaceDescriptor {
            bytes: self.as_bytes(),
            width: self.layout.width,
            height: self.layout.height,
            bits_per_pixel: self.layout.depth.bits(),
            stride: self.layout.stride,
            pitch: self.layout.pitch(),
        })
    }

    /// Read the packed value at `(x, y)`.
    ///
    /// Yields `0` when the pixel can not be read: the coordinates are out of bounds, the memory
    /// was released, or the depth is not addressable. For 1 and 4 bit maps the result carries no
    /// meaning.
    pub fn get(&self, x: u32, y: u32) -> u32 {
        self.try_get(x, y).unwrap_or(0)
    }

    /// Read the packed value at `(x, y)`, if the pixel can be read.
    pub fn try_get(&self, x: u32, y: u32) -> Option<u32> {
        let access = self.access?;
        let start = self.layout.element_start(x, y, access.bytes)?;
        let element = self.as_bytes().get(start..start + access.bytes)?;
        Some(access.load(element))
    }

    /// Write a packed value to `(x, y)`.
    ///
    /// Only the low bits fitting the depth are stored. Writes to pixels that can not be written
    /// are ignored, see [`get`](Self::get).
    pub fn set(&mut self, x: u32, y: u32, value: u32) {
        let Some(access) = self.access else {
            return;
        };

        let Some(start) = self.layout.element_start(x, y, access.bytes) else {
            return;
        };

        if let Some(element) = self.as_bytes_mut().get_mut(start..start + access.bytes) {
            access.store(element, value);
        }
    }

    /// Write the same packed value to every visible pixel.
    ///
    /// Pixels in the padding between width and stride are left untouched. Every pixel receives
    /// the bytes that [`set`](Self::set) would write, which for 24-bit maps is generally not a
    /// repeated single byte.
    pub fn fill(&mut self, value: u32) {
        let Some(access) = self.access else {
            return;
        };

        let mut scratch = [0u8; 4];
        let element = &mut scratch[..access.bytes];
        access.store(element, value);

        let pitch = self.layout.pitch();
        let row_len = self.layout.width as usize * access.bytes;
        let height = self.layout.height as usize;

        if pitch == 0 {
            return;
        }

        tracing::trace!(value, "filling pixel map");
        for row in self.as_bytes_mut().chunks_exact_mut(pitch).take(height) {
            for texel in row[..row_len].chunks_exact_mut(access.bytes) {
                texel.copy_from_slice(element);
            }
        }
    }
}

impl fmt::Debug for PixelMap<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let storage = match self.storage {
            Storage::Owned(_) => "owned",
            Storage::Borrowed(_) => "borrowed",
            Storage::Released => "released",
        };

        f.debug_struct("PixelMap")
            .field("layout", &self.layout)
            .field("storage", &storage)
            .finish()
    }
}
