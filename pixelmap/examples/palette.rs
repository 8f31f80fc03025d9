use pixelmap::{pack, NativeEndian, PackedFormat, PixelMap, PixelMapError};

const IMAGE_WIDTH: u32 = 480;
const IMAGE_HEIGHT: u32 = 272;
const COLORS: usize = 256;

/// A cyclic color ramp through red, yellow, green, cyan, blue and magenta.
fn ramp() -> Vec<u32> {
    let step = 1.0 / (COLORS / 8) as f32;
    let (mut r, mut g, mut b) = (0.0f32, 0.0f32, 0.0f32);
    let mut stage = 0;

    let mut colors = Vec::with_capacity(COLORS);
    for _ in 0..COLORS {
        colors.push(pack::abgr8888(1.0, b, g, r));

        let (channel, rising) = match stage {
            0 | 5 => (&mut r, true),
            1 => (&mut g, true),
            2 => (&mut r, false),
            3 => (&mut b, true),
            4 => (&mut g, false),
            _ => (&mut b, false),
        };

        *channel = if rising { *channel + step } else { *channel - step };
        if *channel >= 1.0 || *channel <= 0.0 {
            *channel = channel.clamp(0.0, 1.0);
            stage = (stage + 1) % 7;
        }
    }

    colors
}

/// Renders a ramp into a 32-bit map and reports what a presentation layer would receive.
///
/// This example exists, in part, so that we can run `perf`.
fn main() -> Result<(), PixelMapError> {
    let colors = ramp();

    let mut map = PixelMap::new(IMAGE_WIDTH, IMAGE_HEIGHT, 0, 32)?;
    map.fill(pack::abgr8888(1.0, 0.9, 0.9, 0.9));

    for y in 0..IMAGE_HEIGHT {
        for x in 0..IMAGE_WIDTH {
            map.set(x, y, colors[(x + y) as usize % COLORS]);
        }
    }

    if std::env::var_os("PIXELMAP_SKIP_IO").is_none() {
        let surface = map.surface().expect("map was not released");
        let masks = PackedFormat::Abgr8888.masks::<NativeEndian>();

        println!(
            "{}x{} at {} bpp, pitch {} bytes, {} bytes total",
            surface.width,
            surface.height,
            surface.bits_per_pixel,
            surface.pitch,
            surface.bytes.len()
        );
        println!(
            "masks: red {:#010x} green {:#010x} blue {:#010x} alpha {:#010x}",
            masks.red, masks.green, masks.blue, masks.alpha
        );
        println!("first pixel bytes: {:02x?}", &surface.bytes[..4]);
    }

    map.release();
    Ok(())
}
