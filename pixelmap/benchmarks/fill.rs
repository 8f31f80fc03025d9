//! Benchmarks filling and pixel-wise writes at each addressable depth.
use brunch::Bench;

use pixelmap::{pack, PixelMap, PixelMapError};

struct Fill {
    bpp: u32,
    sz: u32,
    pixelwise: bool,
}

impl Fill {
    fn name(&self) -> String {
        let how = if self.pixelwise { "set" } else { "fill" };
        format!("{how}({} bpp, {})", self.bpp, self.sz)
    }

    fn prepare(self) -> Result<impl FnMut(), PixelMapError> {
        let mut map = PixelMap::new(self.sz, self.sz, 0, self.bpp)?;
        let value = pack::rgba8888(0.9, 0.9, 0.9, 1.0);
        let (sz, pixelwise) = (self.sz, self.pixelwise);

        Ok(move || {
            if pixelwise {
                for y in 0..sz {
                    for x in 0..sz {
                        map.set(x, y, value);
                    }
                }
            } else {
                map.fill(value);
            }
        })
    }
}

fn main() {
    let tests = [8, 16, 24, 32].map(|bpp| [false, true].map(|pixelwise| Fill {
        bpp,
        sz: 256,
        pixelwise,
    }));

    let mut benches = brunch::Benches::default();
    benches.extend(tests.into_iter().flatten().map(|fill| {
        Bench::new(format!("pixelmap::fill::main::{}", fill.name()))
            .run(fill.prepare().expect("Failed to setup benchmark"))
    }));
    benches.finish();
}
