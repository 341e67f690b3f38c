use log::debug;
use rand::Rng;
use std::ops::Index;

use crate::colors::Color;

pub const PALETTE_SIZE: usize = 4;

/// Hue distance between neighbouring palette entries.
const HUE_STEP: f32 = 0.25;
/// Range the first three ratios are drawn from.
const RATIO_MIN: f32 = 0.16;
const RATIO_MAX: f32 = 0.30;

/// Four display colors in hue order.
#[derive(Debug, Clone, PartialEq)]
pub struct Palette([Color; PALETTE_SIZE]);

/// Target area fraction for each palette entry, parallel to `Palette`.
///
/// The last entry is the remainder `1 - sum(first three)` and is never clamped.
#[derive(Debug, Clone, PartialEq)]
pub struct RatioSet([f32; PALETTE_SIZE]);

impl Palette {
    pub fn new(colors: [Color; PALETTE_SIZE]) -> Self {
        Palette(colors)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Color> {
        self.0.iter()
    }

    /// Palette index of an exactly matching color.
    pub fn index_of(&self, color: &Color) -> Option<usize> {
        self.0.iter().position(|c| c == color)
    }
}

impl Index<usize> for Palette {
    type Output = Color;

    fn index(&self, i: usize) -> &Color {
        &self.0[i]
    }
}

impl RatioSet {
    /// Build from the three drawn ratios; the fourth is whatever is left.
    pub fn from_drawn(drawn: [f32; PALETTE_SIZE - 1]) -> Self {
        let mut ratios = [0.0; PALETTE_SIZE];
        let mut total = 0.0;
        for (i, r) in drawn.iter().enumerate() {
            ratios[i] = *r;
            total += *r;
        }
        ratios[PALETTE_SIZE - 1] = 1.0 - total;
        RatioSet(ratios)
    }

    #[cfg(test)]
    pub(crate) fn from_raw(ratios: [f32; PALETTE_SIZE]) -> Self {
        RatioSet(ratios)
    }

    pub fn iter(&self) -> impl Iterator<Item = &f32> {
        self.0.iter()
    }

    #[cfg(test)]
    pub fn total(&self) -> f32 {
        self.0.iter().sum()
    }

    /// Running sums, `cumulative[i] = ratio[0] + .. + ratio[i]`.
    pub fn cumulative(&self) -> [f32; PALETTE_SIZE] {
        let mut out = [0.0; PALETTE_SIZE];
        let mut acc = 0.0;
        for (i, r) in self.0.iter().enumerate() {
            acc += r;
            out[i] = acc;
        }
        out
    }

    /// Index of the first maximum ratio.
    pub fn argmax(&self) -> usize {
        let mut max_index = 0;
        let mut max_ratio = self.0[0];
        for (i, r) in self.0.iter().enumerate().skip(1) {
            if *r > max_ratio {
                max_ratio = *r;
                max_index = i;
            }
        }
        max_index
    }
}

impl Index<usize> for RatioSet {
    type Output = f32;

    fn index(&self, i: usize) -> &f32 {
        &self.0[i]
    }
}

/// Derives evenly spaced hues and random area ratios for one round.
pub struct PaletteGenerator;

impl PaletteGenerator {
    pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> (Palette, RatioSet) {
        let hue_start: f32 = rng.gen_range(0.0..1.0);
        let mut drawn = [0.0; PALETTE_SIZE - 1];
        for r in drawn.iter_mut() {
            *r = rng.gen_range(RATIO_MIN..RATIO_MAX);
        }
        PaletteGenerator::from_draws(hue_start, drawn)
    }

    /// Deterministic half of `generate`, given the random draws.
    pub fn from_draws(hue_start: f32, drawn: [f32; PALETTE_SIZE - 1]) -> (Palette, RatioSet) {
        let mut colors = [Color::CLEAR; PALETTE_SIZE];
        for (i, color) in colors.iter_mut().enumerate() {
            let hue = (hue_start + i as f32 * HUE_STEP) % 1.0;
            *color = Color::from_hsv(hue, 1.0, 1.0);
            debug!("color {} assigned: {:?} (hue {:.3})", i, color, hue);
        }

        let ratios = RatioSet::from_drawn(drawn);
        for (i, r) in ratios.iter().enumerate() {
            debug!("color {} ratio assigned: {:.1}%", i, r * 100.0);
        }

        (Palette::new(colors), ratios)
    }
}

/// The palette entry with the largest ratio; ties go to the lowest index.
pub fn most_prevalent(palette: &Palette, ratios: &RatioSet) -> Color {
    palette[ratios.argmax()]
}
