use crate::{pack, Depth, ErrorKind, Layout, PixelMap, PixelMapError};

const DEPTHS: [u32; 4] = [8, 16, 24, 32];

#[test]
fn roundtrip_all_depths() -> Result<(), PixelMapError> {
    for bpp in DEPTHS {
        let mut map = PixelMap::new(5, 3, 7, bpp)?;
        let mask = map.depth().value_mask();

        for y in 0..3 {
            for x in 0..5 {
                let value = 0x9e37_79b9u32.wrapping_mul(x * 3 + y + 1);
                map.set(x, y, value);
                assert_eq!(map.get(x, y), value & mask, "{bpp} bpp at ({x}, {y})");
            }
        }
    }

    Ok(())
}

#[test]
fn writes_do_not_bleed() -> Result<(), PixelMapError> {
    for bpp in DEPTHS {
        let mut map = PixelMap::new(3, 3, 0, bpp)?;
        map.set(1, 1, u32::MAX);

        for (x, y) in [(0, 1), (2, 1), (1, 0), (1, 2)] {
            assert_eq!(map.get(x, y), 0, "{bpp} bpp at ({x}, {y})");
        }
    }

    Ok(())
}

#[test]
fn stride_defaults_to_width() -> Result<(), PixelMapError> {
    let map = PixelMap::new(13, 2, 0, 16)?;
    assert_eq!(map.stride(), 13);
    assert_eq!(map.layout().pitch(), 26);
    assert_eq!(map.as_bytes().len(), 52);
    Ok(())
}

#[test]
fn bad_stride() {
    let err = Layout::new(8, 2, 4, 32).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::BadStride);
}

#[test]
fn overflowing_layout() {
    let err = Layout::new(u32::MAX, u32::MAX, 0, u32::MAX).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Overflow);
}

#[test]
#[cfg(target_pointer_width = "64")]
fn unallocatable_layout() {
    // Representable as a byte count, but far beyond any address space.
    let layout = Layout::new(u32::MAX, 1 << 29, 0, 8);
    assert!(layout.is_ok());

    let err = PixelMap::new(u32::MAX, 1 << 29, 0, 8).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Allocation);
}

#[test]
fn surface_of_sub_byte_map() -> Result<(), PixelMapError> {
    let map = PixelMap::new(5, 2, 0, 1)?;
    let surface = map.surface().unwrap();

    assert_eq!(surface.pitch, 0);
    assert_eq!(surface.bytes.len(), 1);
    assert_eq!(surface.bytes.len(), map.layout().byte_len());
    Ok(())
}

#[test]
fn fill_consistency() -> Result<(), PixelMapError> {
    for bpp in DEPTHS {
        let mut map = PixelMap::new(4, 3, 0, bpp)?;
        let value = 0x1234_5678;
        map.fill(value);

        for y in 0..3 {
            for x in 0..4 {
                assert_eq!(map.get(x, y), value & map.depth().value_mask());
            }
        }
    }

    Ok(())
}

#[test]
fn fill_matches_set() -> Result<(), PixelMapError> {
    let value = pack::rgb888(0.2, 0.4, 0.6);

    let mut filled = PixelMap::new(3, 2, 0, 24)?;
    filled.fill(value);

    let mut set = PixelMap::new(3, 2, 0, 24)?;
    for y in 0..2 {
        for x in 0..3 {
            set.set(x, y, value);
        }
    }

    assert_eq!(filled.as_bytes(), set.as_bytes());
    Ok(())
}

#[test]
fn fill_skips_padding() -> Result<(), PixelMapError> {
    let mut map = PixelMap::new(2, 2, 3, 8)?;
    map.fill(0xaa);
    assert_eq!(map.as_bytes(), &[0xaa, 0xaa, 0x00, 0xaa, 0xaa, 0x00]);
    Ok(())
}

#[test]
fn rgb888_bytes() -> Result<(), PixelMapError> {
    let mut map = PixelMap::new(2, 1, 0, 24)?;
    map.set(1, 0, pack::rgb888(1.0, 0.0, 1.0));
    assert_eq!(map.as_bytes(), &[0, 0, 0, 0xff, 0x00, 0xff]);

    map.set(0, 0, pack::rgb24(0.0, 1.0, 0.0));
    assert_eq!(&map.as_bytes()[..3], &[0x00, 0xff, 0x00]);
    Ok(())
}

#[test]
fn sub_byte_depths_are_inert() -> Result<(), PixelMapError> {
    let mut map = PixelMap::new(2, 2, 0, 4)?;
    assert_eq!(map.depth(), Depth::Bits4);
    assert_eq!(map.as_bytes().len(), 2);

    map.set(0, 0, 0xf);
    map.fill(0xf);
    // Whatever is read is unspecified, but it must not fail.
    let _ = map.get(0, 0);
    assert_eq!(map.try_get(0, 0), None);
    assert_eq!(map.as_bytes(), &[0, 0]);

    let map = PixelMap::new(16, 1, 0, 1)?;
    assert_eq!(map.as_bytes().len(), 2);
    Ok(())
}

#[test]
fn unknown_depth() -> Result<(), PixelMapError> {
    let mut map = PixelMap::new(2, 2, 0, 12)?;
    assert_eq!(map.depth(), Depth::Other(12));
    assert_eq!(map.as_bytes().len(), 6);

    map.set(1, 1, 0xfff);
    map.fill(0xfff);
    assert_eq!(map.get(1, 1), 0);
    assert!(map.as_bytes().iter().all(|&b| b == 0));
    Ok(())
}

#[test]
fn out_of_bounds() -> Result<(), PixelMapError> {
    let mut map = PixelMap::new(2, 2, 4, 32)?;
    map.set(2, 0, u32::MAX);
    map.set(0, 2, u32::MAX);
    map.set(u32::MAX, u32::MAX, u32::MAX);

    assert!(map.as_bytes().iter().all(|&b| b == 0));
    assert_eq!(map.try_get(2, 0), None);
    assert_eq!(map.get(0, 2), 0);
    Ok(())
}

#[test]
fn release_twice() -> Result<(), PixelMapError> {
    let mut map = PixelMap::new(4, 4, 0, 32)?;
    assert!(map.owns_memory());

    map.release();
    assert!(map.is_released());
    assert!(!map.owns_memory());
    assert!(map.surface().is_none());
    assert!(map.as_bytes().is_empty());

    map.release();
    assert!(map.is_released());

    // The layout survives, the pixels do not.
    assert_eq!(map.width(), 4);
    map.set(0, 0, 1);
    assert_eq!(map.try_get(0, 0), None);
    Ok(())
}

#[test]
fn empty_maps() -> Result<(), PixelMapError> {
    let mut map = PixelMap::new(0, 0, 0, 32)?;
    map.fill(1);
    assert_eq!(map.try_get(0, 0), None);
    assert!(map.as_bytes().is_empty());

    let mut map = PixelMap::new(0, 5, 0, 16)?;
    map.fill(1);
    assert!(map.as_bytes().is_empty());
    Ok(())
}

#[test]
fn debug_output() -> Result<(), PixelMapError> {
    let mut map = PixelMap::new(1, 1, 0, 8)?;
    assert!(alloc::format!("{map:?}").contains("owned"));
    map.release();
    assert!(alloc::format!("{map:?}").contains("released"));
    Ok(())
}
