use crate::colors::{Color, Rgba};
use crate::palette::{Palette, PALETTE_SIZE};

/// A row-major grid of colors, rebuilt from scratch on every paint.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    pixels: Vec<Color>,
}

impl PixelBuffer {
    /// A fully transparent buffer.
    pub fn new(width: u32, height: u32) -> Self {
        PixelBuffer::filled(width, height, Color::CLEAR)
    }

    pub fn filled(width: u32, height: u32, color: Color) -> Self {
        PixelBuffer {
            width,
            height,
            pixels: vec![color; width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    pub fn get(&self, x: u32, y: u32) -> Color {
        self.pixels[self.index(x, y)]
    }

    pub fn set(&mut self, x: u32, y: u32, color: Color) {
        let index = self.index(x, y);
        self.pixels[index] = color;
    }

    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    #[cfg(test)]
    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    pub fn pixels_mut(&mut self) -> &mut [Color] {
        &mut self.pixels
    }

    /// Number of pixels exactly matching each palette entry.
    pub fn occupancy(&self, palette: &Palette) -> [usize; PALETTE_SIZE] {
        let mut counts = [0; PALETTE_SIZE];
        for pixel in self.pixels.iter() {
            if let Some(i) = palette.index_of(pixel) {
                counts[i] += 1;
            }
        }
        counts
    }

    /// Draw the buffer as a disc of `radius` centred at `center` in an RGBA8 frame.
    ///
    /// The disc is treated as the visible half of a sphere: longitude and
    /// latitude (offset by the rotation, in degrees) pick the texel.
    pub fn draw_disc(
        &self,
        frame: &mut [u8],
        frame_width: usize,
        center: (usize, usize),
        radius: usize,
        rotation: (f32, f32),
    ) {
        if self.width == 0 || self.height == 0 || radius == 0 {
            return;
        }
        let frame_height = frame.len() / (frame_width * 4);
        let r = radius as f32;
        let (pitch, yaw) = rotation;

        for dy in -(radius as isize)..=radius as isize {
            for dx in -(radius as isize)..=radius as isize {
                let (fx, fy) = (dx as f32 / r, dy as f32 / r);
                if fx * fx + fy * fy > 1.0 {
                    continue;
                }
                let px = center.0 as isize + dx;
                let py = center.1 as isize + dy;
                if px < 0 || py < 0 || px as usize >= frame_width || py as usize >= frame_height {
                    continue;
                }

                // longitude covers half the texture across the visible face
                let lon = fx.asin() / std::f32::consts::PI + 0.5 + yaw / 360.0;
                let lat = fy.asin() / std::f32::consts::PI + 0.5 + pitch / 180.0;
                let u = (lon.rem_euclid(1.0) * self.width as f32) as u32 % self.width;
                let v = (lat.rem_euclid(1.0) * self.height as f32) as u32 % self.height;

                let index = (py as usize * frame_width + px as usize) * 4;
                let under = [frame[index], frame[index + 1], frame[index + 2], 0xff];
                let pixel: Rgba = self.get(u, v).over(under);
                frame[index..index + 4].copy_from_slice(&pixel);
            }
        }
    }
}
