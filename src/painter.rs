use log::{debug, error, warn};
use noise::{NoiseFn, Perlin};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::colors::Color;
use crate::palette::{most_prevalent, Palette, PaletteGenerator, RatioSet, PALETTE_SIZE};
use crate::texture::PixelBuffer;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum PaintError {
    #[error("no target surface was given")]
    MissingTarget,
    #[error("target surface is missing its renderer or mesh")]
    MissingRenderableComponent,
}

/// Per-vertex normals of the shape being painted.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Mesh {
    pub normals: Vec<[f32; 3]>,
}

impl Mesh {
    /// Normals of a unit sphere, ring by ring from the south pole,
    /// `segments + 1` vertices per ring (the seam is duplicated).
    pub fn uv_sphere(segments: u32, rings: u32) -> Self {
        let mut normals = Vec::with_capacity(((segments + 1) * (rings + 1)) as usize);
        for ring in 0..=rings {
            let lat = std::f32::consts::PI * (ring as f32 / rings.max(1) as f32 - 0.5);
            for seg in 0..=segments {
                let lon = 2.0 * std::f32::consts::PI * seg as f32 / segments.max(1) as f32;
                normals.push([lat.cos() * lon.sin(), lat.sin(), lat.cos() * lon.cos()]);
            }
        }
        Mesh { normals }
    }
}

/// The buffer sink; whatever texture is installed here is what gets drawn.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Renderer {
    texture: Option<PixelBuffer>,
}

impl Renderer {
    pub fn texture(&self) -> Option<&PixelBuffer> {
        self.texture.as_ref()
    }

    pub fn install(&mut self, texture: PixelBuffer) {
        self.texture = Some(texture);
    }
}

/// Something a texture can be painted onto.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Surface {
    pub renderer: Option<Renderer>,
    pub mesh: Option<Mesh>,
}

impl Surface {
    pub fn new(mesh: Mesh) -> Self {
        Surface {
            renderer: Some(Renderer::default()),
            mesh: Some(mesh),
        }
    }

    pub fn texture(&self) -> Option<&PixelBuffer> {
        self.renderer.as_ref().and_then(|r| r.texture())
    }
}

/// Which texels face the viewer, derived from mesh normals.
pub struct FrontFaceMask<'a> {
    normals: &'a [[f32; 3]],
    width: u32,
}

impl<'a> FrontFaceMask<'a> {
    const FORWARD: [f32; 3] = [0.0, 0.0, 1.0];

    pub fn new(normals: &'a [[f32; 3]], width: u32) -> Self {
        FrontFaceMask { normals, width }
    }

    /// Texels past the end of the normal data count as front-facing.
    pub fn is_front(&self, x: u32, y: u32) -> bool {
        let index = (y as usize) * (self.width as usize) + x as usize;
        match self.normals.get(index) {
            None => true,
            Some(n) => {
                let f = Self::FORWARD;
                n[0] * f[0] + n[1] * f[1] + n[2] * f[2] > 0.0
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BlendParams {
    pub noise_scale: f32,
    pub sin_frequency: f32,
    pub stamp_count: u32,
    pub stamp_radius: u32,
}

impl Default for BlendParams {
    fn default() -> Self {
        BlendParams {
            noise_scale: 0.05,
            sin_frequency: 0.1,
            stamp_count: 12,
            stamp_radius: 16,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Strategy {
    /// Four vertical bands, masked by which texels face the camera.
    Geometric,
    /// Noise field, circular stamps, then a pass pulling counts toward the ratios.
    Blended(BlendParams),
}

/// A solid circle laid over the blended field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stamp {
    pub center: (u32, u32),
    pub radius: u32,
    pub color: usize,
}

impl Stamp {
    pub fn covers(&self, x: u32, y: u32) -> bool {
        let dx = x as i64 - self.center.0 as i64;
        let dy = y as i64 - self.center.1 as i64;
        let r = self.radius as i64;
        dx * dx + dy * dy <= r * r
    }
}

/// Column widths of the four geometric bands, `floor(ratio * width)` each.
pub fn band_widths(ratios: &RatioSet, width: u32) -> [u32; PALETTE_SIZE] {
    let mut widths = [0; PALETTE_SIZE];
    for (i, w) in widths.iter_mut().enumerate() {
        *w = (ratios[i] * width as f32).floor().max(0.0) as u32;
    }
    widths
}

pub fn paint_geometric<F>(
    palette: &Palette,
    ratios: &RatioSet,
    width: u32,
    height: u32,
    is_front: F,
) -> PixelBuffer
where
    F: Fn(u32, u32) -> bool,
{
    let mut buffer = PixelBuffer::new(width, height);
    let mut start: u32 = 0;
    for (i, band) in band_widths(ratios, width).iter().enumerate() {
        // trailing columns lost to truncation stay unpainted
        let end = start.saturating_add(*band).min(width);
        for x in start..end {
            for y in 0..height {
                let color = if is_front(x, y) { palette[i] } else { Color::CLEAR };
                buffer.set(x, y, color);
            }
        }
        debug!("applied color {} to columns {}..{}", i, start, end);
        start = end;
    }
    buffer
}

pub fn paint_blended<R: Rng + ?Sized>(
    palette: &Palette,
    ratios: &RatioSet,
    width: u32,
    height: u32,
    params: &BlendParams,
    rng: &mut R,
) -> PixelBuffer {
    let perlin = Perlin::new(rng.gen());
    let mut buffer = base_field(palette, ratios, width, height, params, &perlin);
    apply_stamps(&mut buffer, palette, params, rng);
    correct_ratios(&mut buffer, palette, ratios, rng);
    buffer
}

/// Noise plus a diagonal sine wave, bucketed by cumulative ratio.
pub fn base_field(
    palette: &Palette,
    ratios: &RatioSet,
    width: u32,
    height: u32,
    params: &BlendParams,
    perlin: &Perlin,
) -> PixelBuffer {
    let cumulative = ratios.cumulative();
    let scale = params.noise_scale as f64;
    let mut buffer = PixelBuffer::new(width, height);
    for y in 0..height {
        for x in 0..width {
            // remap [-1, 1] noise to [0, 1]
            let noise = 0.5 * (perlin.get([x as f64 * scale, y as f64 * scale]) + 1.0);
            let wave = ((x + y) as f32 * params.sin_frequency).sin();
            let value = 0.5 * (noise as f32 + wave);
            let index = cumulative
                .iter()
                .position(|c| value <= *c)
                .unwrap_or(PALETTE_SIZE - 1);
            buffer.set(x, y, palette[index]);
        }
    }
    buffer
}

/// Overwrite random circles with random palette colors, in draw order.
pub fn apply_stamps<R: Rng + ?Sized>(
    buffer: &mut PixelBuffer,
    palette: &Palette,
    params: &BlendParams,
    rng: &mut R,
) -> Vec<Stamp> {
    let radius = params.stamp_radius;
    let (width, height) = (buffer.width(), buffer.height());
    if params.stamp_count == 0 {
        return Vec::new();
    }
    let diameter = u64::from(radius) * 2;
    if u64::from(width) <= diameter || u64::from(height) <= diameter {
        warn!(
            "stamp radius {} does not fit a {}x{} texture, skipping stamps",
            radius, width, height
        );
        return Vec::new();
    }

    let mut stamps = Vec::with_capacity(params.stamp_count as usize);
    for _ in 0..params.stamp_count {
        let stamp = Stamp {
            center: (
                rng.gen_range(radius..width - radius),
                rng.gen_range(radius..height - radius),
            ),
            radius,
            color: rng.gen_range(0..PALETTE_SIZE),
        };
        let (cx, cy) = stamp.center;
        for y in cy - radius..=cy + radius {
            for x in cx - radius..=cx + radius {
                if stamp.covers(x, y) {
                    buffer.set(x, y, palette[stamp.color]);
                }
            }
        }
        stamps.push(stamp);
    }
    stamps
}

/// Pull each color's pixel count toward `floor(ratio * total)`, in palette order.
///
/// Colors under target take pixels first-fit in scan order from colors holding
/// a surplus. Colors over target hand the excess to other random palette colors,
/// which can push earlier colors back off target.
pub fn correct_ratios<R: Rng + ?Sized>(
    buffer: &mut PixelBuffer,
    palette: &Palette,
    ratios: &RatioSet,
    rng: &mut R,
) {
    let total = buffer.len();
    let mut counts = buffer.occupancy(palette);
    let mut targets = [0; PALETTE_SIZE];
    for (i, t) in targets.iter_mut().enumerate() {
        *t = (ratios[i] * total as f32).floor().max(0.0) as usize;
    }

    for i in 0..PALETTE_SIZE {
        if counts[i] < targets[i] {
            let mut deficit = targets[i] - counts[i];
            for pixel in buffer.pixels_mut().iter_mut() {
                if deficit == 0 {
                    break;
                }
                let donor = match palette.index_of(pixel) {
                    Some(j) if j == i => continue,
                    Some(j) if counts[j] <= targets[j] => continue,
                    donor => donor,
                };
                if let Some(j) = donor {
                    counts[j] -= 1;
                }
                *pixel = palette[i];
                counts[i] += 1;
                deficit -= 1;
            }
        } else if counts[i] > targets[i] {
            let mut excess = counts[i] - targets[i];
            for pixel in buffer.pixels_mut().iter_mut() {
                if excess == 0 {
                    break;
                }
                if *pixel != palette[i] {
                    continue;
                }
                let mut j = rng.gen_range(0..PALETTE_SIZE);
                while j == i {
                    j = rng.gen_range(0..PALETTE_SIZE);
                }
                *pixel = palette[j];
                counts[i] -= 1;
                counts[j] += 1;
                excess -= 1;
            }
        }
    }
    debug!("corrected counts {:?} toward targets {:?}", counts, targets);
}

/// Paints one texture per call and installs it on the target surface.
#[derive(Debug, Clone, PartialEq)]
pub struct RegionPainter {
    pub strategy: Strategy,
    pub width: u32,
    pub height: u32,
}

impl RegionPainter {
    /// Paint and install. On error nothing on the surface changes.
    pub fn paint<R: Rng + ?Sized>(
        &self,
        palette: &Palette,
        ratios: &RatioSet,
        surface: Option<&mut Surface>,
        rng: &mut R,
    ) -> Result<(), PaintError> {
        let surface = surface.ok_or(PaintError::MissingTarget)?;
        let renderer = surface
            .renderer
            .as_mut()
            .ok_or(PaintError::MissingRenderableComponent)?;

        let texture = match &self.strategy {
            Strategy::Geometric => {
                let mesh = surface
                    .mesh
                    .as_ref()
                    .ok_or(PaintError::MissingRenderableComponent)?;
                let mask = FrontFaceMask::new(&mesh.normals, self.width);
                paint_geometric(palette, ratios, self.width, self.height, |x, y| {
                    mask.is_front(x, y)
                })
            }
            Strategy::Blended(params) => {
                paint_blended(palette, ratios, self.width, self.height, params, rng)
            }
        };

        renderer.install(texture);
        debug!("texture applied to surface");
        Ok(())
    }
}

/// Owns the round's palette and repaints the target whenever it is rerolled.
pub struct ColorRandomizer {
    painter: RegionPainter,
    rng: StdRng,
    palette: Palette,
    ratios: RatioSet,
}

impl ColorRandomizer {
    pub fn new(painter: RegionPainter, seed: Option<u64>) -> Self {
        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let (palette, ratios) = PaletteGenerator::generate(&mut rng);
        ColorRandomizer {
            painter,
            rng,
            palette,
            ratios,
        }
    }

    /// Reroll the palette, then repaint the surface.
    pub fn randomize(&mut self, surface: Option<&mut Surface>) -> Result<(), PaintError> {
        let (palette, ratios) = PaletteGenerator::generate(&mut self.rng);
        self.palette = palette;
        self.ratios = ratios;
        self.painter
            .paint(&self.palette, &self.ratios, surface, &mut self.rng)
            .map_err(|e| {
                error!("could not paint texture: {}", e);
                e
            })
    }

    pub fn colors(&self) -> &Palette {
        &self.palette
    }

    #[cfg(test)]
    pub fn ratios(&self) -> &RatioSet {
        &self.ratios
    }

    pub fn most_prevalent_color(&self) -> Color {
        most_prevalent(&self.palette, &self.ratios)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn round() -> (Palette, RatioSet) {
        PaletteGenerator::from_draws(0.0, [0.2, 0.2, 0.2])
    }

    fn blended(count: u32, radius: u32) -> BlendParams {
        BlendParams {
            stamp_count: count,
            stamp_radius: radius,
            ..BlendParams::default()
        }
    }

    #[test]
    fn bands_for_a_256_texture() {
        let (palette, ratios) = round();
        assert_eq!(band_widths(&ratios, 256), [51, 51, 51, 102]);

        let buffer = paint_geometric(&palette, &ratios, 256, 256, |_, _| true);
        let bounds = [(0, 51), (51, 102), (102, 153), (153, 255)];
        for (i, (start, end)) in bounds.iter().enumerate() {
            for x in *start..*end {
                assert_eq!(buffer.get(x, 0), palette[i], "column {}", x);
                assert_eq!(buffer.get(x, 255), palette[i], "column {}", x);
            }
        }
        // truncation remainder
        for y in 0..256 {
            assert_eq!(buffer.get(255, y), Color::CLEAR);
        }
    }

    #[test]
    fn bands_never_exceed_width() {
        let mut rng = StdRng::seed_from_u64(3);
        for width in [1, 7, 64, 100, 333].iter() {
            let (_, ratios) = PaletteGenerator::generate(&mut rng);
            let widths = band_widths(&ratios, *width);
            assert!(widths.iter().sum::<u32>() <= *width);
            for (i, w) in widths.iter().enumerate() {
                assert!(*w as f32 <= ratios[i] * *width as f32);
            }
        }
    }

    #[test]
    fn back_faces_are_transparent() {
        let (palette, ratios) = round();
        let buffer = paint_geometric(&palette, &ratios, 16, 16, |_, y| y < 8);
        assert_eq!(buffer.get(0, 0), palette[0]);
        assert_eq!(buffer.get(0, 8), Color::CLEAR);
        assert_eq!(buffer.get(0, 8).a, 0.0);
    }

    #[test]
    fn mask_fails_open_past_the_normals() {
        let normals = [[0.0, 0.0, 1.0], [0.0, 0.0, -1.0], [1.0, 0.0, 0.0]];
        let mask = FrontFaceMask::new(&normals, 2);
        assert!(mask.is_front(0, 0));
        assert!(!mask.is_front(1, 0));
        assert!(!mask.is_front(0, 1));
        assert!(mask.is_front(1, 1));
        assert!(mask.is_front(5, 9));
    }

    #[test]
    fn sphere_normals_face_both_ways() {
        let mesh = Mesh::uv_sphere(24, 16);
        assert_eq!(mesh.normals.len(), 25 * 17);
        assert!(mesh.normals.iter().any(|n| n[2] > 0.5));
        assert!(mesh.normals.iter().any(|n| n[2] < -0.5));
    }

    #[test]
    fn blended_is_deterministic_for_a_seed() {
        let (palette, ratios) = round();
        let params = BlendParams::default();
        let a = paint_blended(&palette, &ratios, 64, 64, &params, &mut StdRng::seed_from_u64(11));
        let b = paint_blended(&palette, &ratios, 64, 64, &params, &mut StdRng::seed_from_u64(11));
        assert_eq!(a, b);
    }

    #[test]
    fn blended_uses_only_palette_colors() {
        let (palette, ratios) = round();
        let buffer = paint_blended(
            &palette,
            &ratios,
            48,
            32,
            &BlendParams::default(),
            &mut StdRng::seed_from_u64(5),
        );
        assert!(buffer.pixels().iter().all(|c| palette.index_of(c).is_some()));
        assert_eq!(buffer.occupancy(&palette).iter().sum::<usize>(), 48 * 32);
    }

    #[test]
    fn stamps_stay_inside_their_circles() {
        let (palette, _) = round();
        let mut buffer = PixelBuffer::new(64, 48);
        let mut rng = StdRng::seed_from_u64(9);
        let stamps = apply_stamps(&mut buffer, &palette, &blended(6, 5), &mut rng);
        assert_eq!(stamps.len(), 6);

        for stamp in stamps.iter() {
            assert!(stamp.center.0 >= 5 && stamp.center.0 < 59);
            assert!(stamp.center.1 >= 5 && stamp.center.1 < 43);
        }
        for y in 0..48 {
            for x in 0..64 {
                let c = buffer.get(x, y);
                if c == Color::CLEAR {
                    continue;
                }
                assert!(palette.index_of(&c).is_some());
                assert!(stamps.iter().any(|s| s.covers(x, y)), "stray pixel at {},{}", x, y);
            }
        }
        // the last stamp wins where it lands
        let last = stamps[stamps.len() - 1];
        assert_eq!(buffer.get(last.center.0, last.center.1), palette[last.color]);
    }

    #[test]
    fn oversized_stamps_are_skipped() {
        let (palette, _) = round();
        let mut buffer = PixelBuffer::new(10, 10);
        let stamps = apply_stamps(&mut buffer, &palette, &blended(3, 5), &mut StdRng::seed_from_u64(1));
        assert!(stamps.is_empty());
        assert_eq!(buffer, PixelBuffer::new(10, 10));

        let stamps = apply_stamps(&mut buffer, &palette, &blended(3, u32::MAX), &mut StdRng::seed_from_u64(1));
        assert!(stamps.is_empty());
    }

    #[test]
    fn field_picks_first_threshold_at_or_above_value() {
        let (palette, ratios) = round();
        let params = BlendParams::default();
        let perlin = Perlin::new(17);
        let (width, height) = (40, 24);
        let buffer = base_field(&palette, &ratios, width, height, &params, &perlin);

        let cumulative = ratios.cumulative();
        let mut seen = [false; PALETTE_SIZE];
        for y in 0..height {
            for x in 0..width {
                let scale = params.noise_scale as f64;
                let noise = 0.5 * (perlin.get([x as f64 * scale, y as f64 * scale]) + 1.0);
                let wave = ((x + y) as f32 * params.sin_frequency).sin();
                let value = 0.5 * (noise as f32 + wave);
                let mut expected = PALETTE_SIZE - 1;
                for (i, c) in cumulative.iter().enumerate() {
                    if value <= *c {
                        expected = i;
                        break;
                    }
                }
                seen[expected] = true;
                assert_eq!(buffer.get(x, y), palette[expected], "pixel {},{} value {}", x, y, value);
            }
        }
        // the sine term alone sweeps through several buckets
        assert!(seen.iter().filter(|s| **s).count() >= 2, "{:?}", seen);
    }

    #[test]
    fn values_past_every_threshold_fall_back_to_the_last_color() {
        let (palette, _) = round();
        // field values never drop below -0.5
        let short = RatioSet::from_raw([-1.0, -1.0, -1.0, -1.0]);
        let buffer = base_field(&palette, &short, 16, 16, &BlendParams::default(), &Perlin::new(3));
        assert!(buffer.pixels().iter().all(|c| *c == palette[3]));

        // a partial sum: anything above 0.4 lands on the last color
        let partial = RatioSet::from_raw([0.1, 0.1, 0.1, 0.1]);
        let perlin = Perlin::new(3);
        let params = BlendParams::default();
        let scale = params.noise_scale as f64;
        let buffer = base_field(&palette, &partial, 32, 32, &params, &perlin);
        let mut fell_back = 0;
        for y in 0..32u32 {
            for x in 0..32u32 {
                let noise = 0.5 * (perlin.get([x as f64 * scale, y as f64 * scale]) + 1.0);
                let value = 0.5 * (noise as f32 + ((x + y) as f32 * params.sin_frequency).sin());
                if value > 0.4 {
                    assert_eq!(buffer.get(x, y), palette[3]);
                    fell_back += 1;
                }
            }
        }
        assert!(fell_back > 0);
    }

    #[test]
    fn huge_bands_stop_at_the_texture_edge() {
        let (palette, _) = round();
        let wide = RatioSet::from_raw([2.0e9, 2.0e9, 2.0e9, 2.0e9]);
        let buffer = paint_geometric(&palette, &wide, 8, 2, |_, _| true);
        assert!(buffer.pixels().iter().all(|c| *c == palette[0]));
    }

    #[test]
    fn correction_fills_under_target_colors() {
        let (palette, ratios) = round();
        let mut buffer = PixelBuffer::filled(20, 10, palette[0]);
        let before = buffer.occupancy(&palette);
        correct_ratios(&mut buffer, &palette, &ratios, &mut StdRng::seed_from_u64(2));
        let after = buffer.occupancy(&palette);

        assert_eq!(after.iter().sum::<usize>(), 200);
        for i in 1..PALETTE_SIZE {
            let target = (ratios[i] * 200.0).floor() as usize;
            assert!(after[i] >= before[i]);
            assert!(after[i] >= target, "{:?}", after);
        }
    }

    #[test]
    fn correction_conserves_pixels() {
        let (palette, ratios) = round();
        let mut rng = StdRng::seed_from_u64(21);
        let params = BlendParams::default();
        let perlin = Perlin::new(4);
        let mut buffer = base_field(&palette, &ratios, 80, 60, &params, &perlin);
        apply_stamps(&mut buffer, &palette, &params, &mut rng);

        let before = buffer.occupancy(&palette);
        correct_ratios(&mut buffer, &palette, &ratios, &mut rng);
        let after = buffer.occupancy(&palette);

        assert_eq!(before.iter().sum::<usize>(), 80 * 60);
        assert_eq!(after.iter().sum::<usize>(), 80 * 60);
        for i in 0..PALETTE_SIZE {
            let target = (ratios[i] * 4800.0).floor() as usize;
            if before[i] < target {
                assert!(after[i] >= before[i], "{:?} -> {:?}", before, after);
            }
        }
    }

    #[test]
    fn missing_target_is_reported() {
        let (palette, ratios) = round();
        let painter = RegionPainter {
            strategy: Strategy::Geometric,
            width: 8,
            height: 8,
        };
        let result = painter.paint(&palette, &ratios, None, &mut StdRng::seed_from_u64(0));
        assert_eq!(result, Err(PaintError::MissingTarget));
    }

    #[test]
    fn missing_renderer_leaves_surface_untouched() {
        let (palette, ratios) = round();
        let mut surface = Surface {
            renderer: None,
            mesh: Some(Mesh::uv_sphere(8, 8)),
        };
        let snapshot = surface.clone();
        for strategy in [Strategy::Geometric, Strategy::Blended(BlendParams::default())].iter() {
            let painter = RegionPainter {
                strategy: *strategy,
                width: 32,
                height: 32,
            };
            let result = painter.paint(&palette, &ratios, Some(&mut surface), &mut StdRng::seed_from_u64(0));
            assert_eq!(result, Err(PaintError::MissingRenderableComponent));
            assert_eq!(surface, snapshot);
        }
    }

    #[test]
    fn missing_mesh_keeps_previous_texture() {
        let (palette, ratios) = round();
        let sentinel = PixelBuffer::filled(4, 4, Color::rgba(0.1, 0.2, 0.3, 1.0));
        let mut renderer = Renderer::default();
        renderer.install(sentinel.clone());
        let mut surface = Surface {
            renderer: Some(renderer),
            mesh: None,
        };

        let painter = RegionPainter {
            strategy: Strategy::Geometric,
            width: 32,
            height: 32,
        };
        let result = painter.paint(&palette, &ratios, Some(&mut surface), &mut StdRng::seed_from_u64(0));
        assert_eq!(result, Err(PaintError::MissingRenderableComponent));
        assert_eq!(surface.texture(), Some(&sentinel));
    }

    #[test]
    fn randomizer_installs_a_fresh_texture() {
        let painter = RegionPainter {
            strategy: Strategy::Geometric,
            width: 256,
            height: 256,
        };
        let mut randomizer = ColorRandomizer::new(painter, Some(42));
        let mut surface = Surface::new(Mesh::default());
        randomizer.randomize(Some(&mut surface)).unwrap();

        let texture = surface.texture().unwrap();
        assert_eq!((texture.width(), texture.height()), (256, 256));
        assert_eq!(texture.get(0, 0), randomizer.colors()[0]);

        let expected = randomizer.colors()[randomizer.ratios().argmax()];
        assert_eq!(randomizer.most_prevalent_color(), expected);
    }

    #[test]
    fn randomizer_is_reproducible_from_a_seed() {
        let painter = RegionPainter {
            strategy: Strategy::Blended(BlendParams::default()),
            width: 64,
            height: 64,
        };
        let mut a = ColorRandomizer::new(painter.clone(), Some(99));
        let mut b = ColorRandomizer::new(painter, Some(99));
        let mut sa = Surface::new(Mesh::default());
        let mut sb = Surface::new(Mesh::default());
        a.randomize(Some(&mut sa)).unwrap();
        b.randomize(Some(&mut sb)).unwrap();
        assert_eq!(a.colors(), b.colors());
        assert_eq!(sa.texture(), sb.texture());
    }
}
