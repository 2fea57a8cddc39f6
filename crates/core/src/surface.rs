//! RGB pixel image the LED grid is presented onto.

use crate::types::Rgb;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Surface {
    width: u32,
    height: u32,
    pixels: Vec<Rgb>,
}

#[inline]
fn blend_channel(src: u8, dst: u8, alpha: u8) -> u8 {
    let a = alpha as u32;
    ((src as u32 * a + dst as u32 * (255 - a)) / 255) as u8
}

/// Alpha-blend `src` over `dst`.
#[inline]
pub fn blend(src: Rgb, dst: Rgb, alpha: u8) -> Rgb {
    match alpha {
        255 => src,
        0 => dst,
        a => Rgb::new(
            blend_channel(src.r, dst.r, a),
            blend_channel(src.g, dst.g, a),
            blend_channel(src.b, dst.b, a),
        ),
    }
}

impl Surface {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Rgb::BLACK; (width as usize) * (height as usize)],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Change dimensions. The backing buffer is reused; contents are unspecified
    /// until the next [`clear`](Self::clear).
    pub fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        self.pixels
            .resize((width as usize) * (height as usize), Rgb::BLACK);
    }

    pub fn clear(&mut self, color: Rgb) {
        self.pixels.fill(color);
    }

    #[inline]
    fn idx(&self, x: i64, y: i64) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width as i64 || y >= self.height as i64 {
            return None;
        }
        Some(y as usize * self.width as usize + x as usize)
    }

    pub fn get(&self, x: u32, y: u32) -> Option<Rgb> {
        self.idx(x as i64, y as i64).map(|i| self.pixels[i])
    }

    pub fn pixels(&self) -> &[Rgb] {
        &self.pixels
    }

    pub fn row(&self, y: u32) -> &[Rgb] {
        if y >= self.height {
            return &[];
        }
        let w = self.width as usize;
        let start = y as usize * w;
        &self.pixels[start..start + w]
    }

    #[inline]
    pub fn blend_pixel(&mut self, x: i64, y: i64, color: Rgb, alpha: u8) {
        if let Some(i) = self.idx(x, y) {
            self.pixels[i] = blend(color, self.pixels[i], alpha);
        }
    }

    /// Clipped rectangle fill.
    pub fn fill_rect_blend(&mut self, x: i64, y: i64, w: u32, h: u32, color: Rgb, alpha: u8) {
        let x0 = x.max(0);
        let y0 = y.max(0);
        let x1 = (x + w as i64).min(self.width as i64);
        let y1 = (y + h as i64).min(self.height as i64);
        for py in y0..y1 {
            for px in x0..x1 {
                self.blend_pixel(px, py, color, alpha);
            }
        }
    }

    /// Disc of `diameter` pixels centered at (`cx2 / 2`, `cy2 / 2`).
    ///
    /// Centers are passed in doubled coordinates so even and odd diameters both
    /// land on exact pixel boundaries; a pixel is covered when its center lies
    /// inside the circle.
    pub fn fill_circle(&mut self, cx2: i64, cy2: i64, diameter: u32, color: Rgb, alpha: u8) {
        if diameter == 0 {
            return;
        }
        let d = diameter as i64;
        let r2 = d * d;
        let x0 = ((cx2 - d).div_euclid(2)).max(0);
        let y0 = ((cy2 - d).div_euclid(2)).max(0);
        let x1 = ((cx2 + d + 1).div_euclid(2)).min(self.width as i64);
        let y1 = ((cy2 + d + 1).div_euclid(2)).min(self.height as i64);

        for py in y0..y1 {
            let dy = 2 * py + 1 - cy2;
            for px in x0..x1 {
                let dx = 2 * px + 1 - cx2;
                if dx * dx + dy * dy <= r2 {
                    self.blend_pixel(px, py, color, alpha);
                }
            }
        }
    }

    /// FNV-1a over dimensions and pixels.
    pub fn fingerprint(&self) -> u64 {
        const OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
        const PRIME: u64 = 0x0000_0100_0000_01b3;
        let mut h = OFFSET;
        let mut eat = |b: u8| {
            h ^= b as u64;
            h = h.wrapping_mul(PRIME);
        };
        for b in self.width.to_le_bytes().into_iter().chain(self.height.to_le_bytes()) {
            eat(b);
        }
        for p in &self.pixels {
            eat(p.r);
            eat(p.g);
            eat(p.b);
        }
        h
    }
}
