// Distributed under The MIT License (MIT)
//
// Copyright (c) 2024 The `image-rs` developers
use alloc::collections::TryReserveError;
use alloc::vec::Vec;
use core::mem;

/// The unit of allocation, sized and aligned for the widest native pixel store.
type Word = u32;

/// Allocates and manages raw pixel bytes.
///
/// The storage is allocated in words so that every element of an owned map sits at an address
/// aligned for its width. The exact requested byte length is kept alongside, the trailing bytes
/// of the last word are never exposed.
#[derive(Clone, Default)]
pub(crate) struct Buffer {
    /// The backing memory.
    inner: Vec<Word>,
    /// The logical number of bytes.
    len: usize,
}

impl Buffer {
    /// Allocate `len` zeroed bytes, reporting an allocation failure instead of aborting.
    pub(crate) fn try_zeroed(len: usize) -> Result<Self, TryReserveError> {
        let words = len.div_ceil(mem::size_of::<Word>());

        let mut inner = Vec::new();
        inner.try_reserve_exact(words)?;
        inner.resize(words, 0);

        Ok(Buffer { inner, len })
    }

    pub(crate) fn len(&self) -> usize {
        self.len
    }

    pub(crate) fn as_bytes(&self) -> &[u8] {
        let bytes: &[u8] = bytemuck::cast_slice(&self.inner);
        &bytes[..self.len]
    }

    pub(crate) fn as_bytes_mut(&mut self) -> &mut [u8] {
        let bytes: &mut [u8] = bytemuck::cast_slice_mut(&mut self.inner);
        &mut bytes[..self.len]
    }
}
