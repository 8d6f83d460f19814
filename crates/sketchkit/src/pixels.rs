//! RGBA pixel buffer addressed in logical pixels.
//!
//! Purpose
//! - Write colors into a raw RGBA byte buffer whose physical resolution is
//!   `density` times the logical one (high-DPI canvases): one logical pixel
//!   covers a `density x density` block, one logical row covers `density`
//!   physical rows.
//! - Build simple textures (random alpha, Perlin-noise alpha, vertical
//!   gradation) and keep a snapshot of the pixels to restore later.
//!
//! Layout: row-major, 4 bytes per physical pixel, no padding. Writes outside
//! the buffer panic like slice indexing.

use noise::{NoiseFn, Perlin};
use rand::Rng;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    pub fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    /// Each RGB channel reversed (`255 - v`); alpha unchanged.
    pub fn inverted(self) -> Self {
        Self::new(255 - self.r, 255 - self.g, 255 - self.b, self.a)
    }

    /// Channel-wise interpolation, rounded to the nearest value.
    pub fn lerp(self, other: Rgba, t: f64) -> Self {
        let ch = |a: u8, b: u8| {
            let v = a as f64 + (b as f64 - a as f64) * t;
            v.round().clamp(0.0, 255.0) as u8
        };
        Self::new(
            ch(self.r, other.r),
            ch(self.g, other.g),
            ch(self.b, other.b),
            ch(self.a, other.a),
        )
    }

    #[inline]
    pub fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

/// Saved pixel contents of a `PixelBuffer`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PixelSnapshot {
    data: Vec<u8>,
}

/// RGBA bytes with a logical size and an integer pixel density.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PixelBuffer {
    width: usize,
    height: usize,
    density: usize,
    data: Vec<u8>,
}

impl PixelBuffer {
    /// Transparent black buffer of `width x height` logical pixels.
    pub fn new(width: usize, height: usize, density: usize) -> Self {
        let density = density.max(1);
        let len = 4 * width * density * height * density;
        Self {
            width,
            height,
            density,
            data: vec![0; len],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }
    pub fn height(&self) -> usize {
        self.height
    }
    pub fn density(&self) -> usize {
        self.density
    }
    pub fn physical_width(&self) -> usize {
        self.width * self.density
    }
    pub fn physical_height(&self) -> usize {
        self.height * self.density
    }
    pub fn data(&self) -> &[u8] {
        &self.data
    }
    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Color at a physical pixel.
    pub fn physical_pixel(&self, px: usize, py: usize) -> Rgba {
        let i = 4 * (py * self.physical_width() + px);
        let d = &self.data[i..i + 4];
        Rgba::new(d[0], d[1], d[2], d[3])
    }

    /// Fill the physical block behind logical pixel `(x, y)`.
    pub fn set_pixel(&mut self, x: usize, y: usize, color: Rgba) {
        let d = self.density;
        let pw = self.physical_width();
        let rgba = color.to_array();
        for py in y * d..(y + 1) * d {
            let start = 4 * (py * pw + x * d);
            for px in self.data[start..start + 4 * d].chunks_exact_mut(4) {
                px.copy_from_slice(&rgba);
            }
        }
    }

    /// Fill every physical row behind logical row `y`.
    pub fn set_row(&mut self, y: usize, color: Rgba) {
        let row_bytes = 4 * self.physical_width();
        let rgba = color.to_array();
        let start = y * self.density * row_bytes;
        let end = start + self.density * row_bytes;
        for px in self.data[start..end].chunks_exact_mut(4) {
            px.copy_from_slice(&rgba);
        }
    }

    /// Set every logical pixel to `f(x, y)`.
    pub fn fill_with(&mut self, mut f: impl FnMut(usize, usize) -> Rgba) {
        for y in 0..self.height {
            for x in 0..self.width {
                let c = f(x, y);
                self.set_pixel(x, y, c);
            }
        }
    }

    /// Set every logical row to `f(y)`.
    pub fn fill_rows_with(&mut self, mut f: impl FnMut(usize) -> Rgba) {
        for y in 0..self.height {
            let c = f(y);
            self.set_row(y, c);
        }
    }

    pub fn snapshot(&self) -> PixelSnapshot {
        PixelSnapshot {
            data: self.data.clone(),
        }
    }

    /// Put back pixels saved by `snapshot`. Panics if the sizes differ.
    pub fn restore(&mut self, snapshot: &PixelSnapshot) {
        self.data.copy_from_slice(&snapshot.data);
    }
}

/// `color` with a random alpha in `[0, max_alpha_factor * 255)` per logical pixel.
pub fn random_texture<R: Rng>(
    width: usize,
    height: usize,
    density: usize,
    color: Rgba,
    max_alpha_factor: f64,
    rng: &mut R,
) -> PixelBuffer {
    let max_alpha = max_alpha_factor * 255.0;
    let mut buf = PixelBuffer::new(width, height, density);
    buf.fill_with(|_, _| color.with_alpha((rng.gen::<f64>() * max_alpha) as u8));
    buf
}

/// `color` with an alpha of `noise(x * noise_scale, y * noise_scale) *
/// max_alpha_factor * 255` per logical pixel, noise mapped into [0, 1].
///
/// Smaller `noise_scale` gives smoother, larger blotches.
pub fn noise_texture(
    width: usize,
    height: usize,
    density: usize,
    color: Rgba,
    max_alpha_factor: f64,
    noise_scale: f64,
    seed: u32,
) -> PixelBuffer {
    let perlin = Perlin::new(seed);
    let max_alpha = max_alpha_factor * 255.0;
    let mut buf = PixelBuffer::new(width, height, density);
    buf.fill_with(|x, y| {
        let v = perlin.get([x as f64 * noise_scale, y as f64 * noise_scale]);
        let n = (0.5 * (v + 1.0)).clamp(0.0, 1.0);
        color.with_alpha((n * max_alpha) as u8)
    });
    buf
}

/// Vertical blend from `from` (top row) to `to` (bottom row), with the blend
/// ratio raised to `gradient`.
pub fn gradation_texture(
    width: usize,
    height: usize,
    density: usize,
    from: Rgba,
    to: Rgba,
    gradient: f64,
) -> PixelBuffer {
    let max_y = height.saturating_sub(1).max(1) as f64;
    let mut buf = PixelBuffer::new(width, height, density);
    buf.fill_rows_with(|y| from.lerp(to, (y as f64 / max_y).powf(gradient)));
    buf
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn set_pixel_fills_density_block() {
        let mut buf = PixelBuffer::new(3, 2, 2);
        assert_eq!(buf.data().len(), 4 * 6 * 4);
        let red = Rgba::rgb(255, 0, 0);
        buf.set_pixel(1, 1, red);
        for py in 0..4 {
            for px in 0..6 {
                let inside = (2..4).contains(&px) && (2..4).contains(&py);
                let expected = if inside { red } else { Rgba::default() };
                assert_eq!(buf.physical_pixel(px, py), expected, "({px}, {py})");
            }
        }
    }

    #[test]
    fn set_row_fills_physical_rows() {
        let mut buf = PixelBuffer::new(2, 3, 2);
        let c = Rgba::new(1, 2, 3, 4);
        buf.set_row(2, c);
        for px in 0..4 {
            assert_eq!(buf.physical_pixel(px, 3), Rgba::default());
            assert_eq!(buf.physical_pixel(px, 4), c);
            assert_eq!(buf.physical_pixel(px, 5), c);
        }
    }

    #[test]
    fn snapshot_restores_previous_pixels() {
        let mut buf = PixelBuffer::new(4, 4, 1);
        buf.fill_with(|x, y| Rgba::rgb(x as u8, y as u8, 0));
        let saved = buf.snapshot();
        buf.set_row(0, Rgba::rgb(9, 9, 9));
        assert_ne!(buf.snapshot(), saved);
        buf.restore(&saved);
        assert_eq!(buf.physical_pixel(3, 0), Rgba::rgb(3, 0, 0));
    }

    #[test]
    fn color_helpers() {
        let c = Rgba::new(10, 200, 255, 40);
        assert_eq!(c.inverted(), Rgba::new(245, 55, 0, 40));
        assert_eq!(c.with_alpha(7).a, 7);
        let black = Rgba::rgb(0, 0, 0);
        let white = Rgba::rgb(255, 255, 255);
        assert_eq!(black.lerp(white, 0.5), Rgba::rgb(128, 128, 128));
        assert_eq!(black.lerp(white, 1.0), white);
    }

    #[test]
    fn noise_texture_is_bounded_seeded_and_smooth() {
        let color = Rgba::rgb(20, 40, 60);
        let half = noise_texture(16, 16, 2, color, 0.5, 0.37, 7);
        for py in 0..32 {
            for px in 0..32 {
                let p = half.physical_pixel(px, py);
                assert!(p.a <= 127, "alpha {} at ({px}, {py})", p.a);
                assert_eq!(p.with_alpha(255), color);
            }
        }
        assert_eq!(noise_texture(16, 16, 2, color, 0.5, 0.37, 7), half);
        assert_ne!(noise_texture(16, 16, 2, color, 0.5, 0.37, 8), half);
        let first = half.physical_pixel(0, 0).a;
        assert!((0..32).any(|px| half.physical_pixel(px, 17).a != first));

        let smooth = noise_texture(32, 32, 1, color, 1.0, 0.01, 3);
        for y in 0..32 {
            for x in 0..31 {
                let a = smooth.physical_pixel(x, y).a as i32;
                let b = smooth.physical_pixel(x + 1, y).a as i32;
                let c = smooth.physical_pixel(y, x + 1).a as i32;
                let d = smooth.physical_pixel(y, x).a as i32;
                assert!((a - b).abs() <= 12 && (c - d).abs() <= 12);
            }
        }
    }

    #[test]
    fn textures() {
        let mut rng = StdRng::seed_from_u64(12);
        let speckle = random_texture(8, 8, 1, Rgba::rgb(0, 0, 0), 0.2, &mut rng);
        for y in 0..8 {
            for x in 0..8 {
                let p = speckle.physical_pixel(x, y);
                assert!(p.a <= 51 && p.r == 0);
            }
        }

        let from = Rgba::new(255, 255, 255, 0);
        let to = Rgba::new(0, 128, 255, 32);
        let grad = gradation_texture(2, 5, 1, from, to, 3.0);
        assert_eq!(grad.physical_pixel(0, 0), from);
        assert_eq!(grad.physical_pixel(1, 4), to);
        // (2/4)^3 = 0.125 of the way.
        assert_eq!(grad.physical_pixel(0, 2), from.lerp(to, 0.125));
        let single = gradation_texture(1, 1, 1, from, to, 2.0);
        assert_eq!(single.physical_pixel(0, 0), from);
    }
}
