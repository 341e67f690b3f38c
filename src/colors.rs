// type alias for frame colors
pub type Rgba = [u8; 4];

// consts for UI chrome
pub(crate) const WHITE: Rgba = [0xff, 0xff, 0xff, 0xff]; // FFFFFF
pub(crate) const DARK_GREEN: Rgba = [0x20, 0x2a, 0x25, 0xff]; // 202A25
pub(crate) const GRAY: Rgba = [0xeb, 0xe9, 0xe9, 0xff]; // EBE9E9
pub(crate) const GREEN: Rgba = [0x00, 0xa8, 0x78, 0xff]; // 00A878
pub(crate) const FLAME: Rgba = [0xcf, 0x5c, 0x36, 0xff]; // CF5C36

pub(crate) const BACKGROUND: Rgba = DARK_GREEN;
pub(crate) const BUTTON_BORDER: Rgba = GRAY;

/// A color with normalized channels in `[0, 1]`.
///
/// Equality is exact channel match; the texture occupancy counts rely on it.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const CLEAR: Color = Color::rgba(0.0, 0.0, 0.0, 0.0);

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Color { r, g, b, a }
    }

    /// Convert hue/saturation/value (all in `[0, 1]`) to an opaque color.
    pub fn from_hsv(hue: f32, saturation: f32, value: f32) -> Self {
        let h = hue.rem_euclid(1.0) * 6.0;
        let sector = h.floor();
        let f = h - sector;
        let p = value * (1.0 - saturation);
        let q = value * (1.0 - saturation * f);
        let t = value * (1.0 - saturation * (1.0 - f));

        let (r, g, b) = match sector as u8 {
            0 => (value, t, p),
            1 => (q, value, p),
            2 => (p, value, t),
            3 => (p, q, value),
            4 => (t, p, value),
            _ => (value, p, q),
        };
        Color::rgba(r, g, b, 1.0)
    }

    /// Same color with a different alpha.
    pub fn with_alpha(self, a: f32) -> Self {
        Color { a, ..self }
    }

    /// Quantize to frame bytes.
    pub fn to_rgba8(self) -> Rgba {
        let q = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        [q(self.r), q(self.g), q(self.b), q(self.a)]
    }

    /// Alpha-blend this color over a frame pixel.
    pub fn over(self, under: Rgba) -> Rgba {
        let top = self.to_rgba8();
        let a = self.a.clamp(0.0, 1.0);
        let mix = |t: u8, u: u8| (u as f32 * (1.0 - a) + t as f32 * a) as u8;
        [
            mix(top[0], under[0]),
            mix(top[1], under[1]),
            mix(top[2], under[2]),
            0xff,
        ]
    }
}
