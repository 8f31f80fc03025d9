// Distributed under The MIT License (MIT)
//
// Copyright (c) 2024 The `image-rs` developers

/// Error that occurs when a [`PixelMap`](crate::PixelMap) can not be constructed.
///
/// Use [`kind`](Self::kind) to distinguish the causes. An allocation failure in particular is
/// recoverable: the caller may retry with a smaller layout or abort.
#[derive(Debug, thiserror::Error)]
#[error("{repr}")]
pub struct PixelMapError {
    repr: Repr,
}

/// The category of a [`PixelMapError`].
#[non_exhaustive]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The pixel memory could not be allocated.
    Allocation,
    /// A stride was given that is smaller than the width.
    BadStride,
    /// The size of the pixel memory is not representable on this platform.
    Overflow,
    /// The supplied memory is shorter than the layout requires.
    BufferTooSmall,
}

#[derive(Debug, thiserror::Error)]
enum Repr {
    #[error("failed to allocate {bytes} bytes of pixel memory")]
    Allocation { bytes: usize },
    #[error("stride of {stride} pixels is smaller than the width of {width} pixels")]
    BadStride { stride: u32, width: u32 },
    #[error("{stride}x{height} pixels at {bits} bits per pixel exceed the address space")]
    Overflow { stride: u32, height: u32, bits: u32 },
    #[error("buffer too small: need {needed} bytes, got {actual}")]
    BufferTooSmall { needed: usize, actual: usize },
}

impl PixelMapError {
    /// Get the category of this error.
    pub fn kind(&self) -> ErrorKind {
        match self.repr {
            Repr::Allocation { .. } => ErrorKind::Allocation,
            Repr::BadStride { .. } => ErrorKind::BadStride,
            Repr::Overflow { .. } => ErrorKind::Overflow,
            Repr::BufferTooSmall { .. } => ErrorKind::BufferTooSmall,
        }
    }

    pub(crate) fn allocation(bytes: usize) -> Self {
        Repr::Allocation { bytes }.into()
    }

    pub(crate) fn bad_stride(stride: u32, width: u32) -> Self {
        Repr::BadStride { stride, width }.into()
    }

    pub(crate) fn overflow(stride: u32, height: u32, bits: u32) -> Self {
        Repr::Overflow {
            stride,
            height,
            bits,
        }
        .into()
    }

    pub(crate) fn buffer_too_small(needed: usize, actual: usize) -> Self {
        Repr::BufferTooSmall { needed, actual }.into()
    }
}

impl From<Repr> for PixelMapError {
    fn from(repr: Repr) -> Self {
        PixelMapError { repr }
    }
}

#[cfg(test)]
mod tests {
    use super::{ErrorKind, PixelMapError};
    use alloc::string::ToString;

    #[test]
    fn kinds_and_messages() {
        let err = PixelMapError::buffer_too_small(64, 16);
        assert_eq!(err.kind(), ErrorKind::BufferTooSmall);
        assert_eq!(err.to_string(), "buffer too small: need 64 bytes, got 16");

        let err = PixelMapError::bad_stride(2, 4);
        assert_eq!(err.kind(), ErrorKind::BadStride);
        assert_eq!(
            err.to_string(),
            "stride of 2 pixels is smaller than the width of 4 pixels"
        );

        assert_eq!(PixelMapError::allocation(1).kind(), ErrorKind::Allocation);
        assert_eq!(PixelMapError::overflow(1, 1, 1).kind(), ErrorKind::Overflow);
    }
}
