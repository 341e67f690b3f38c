use log::{debug, info, warn};

use crate::colors::Color;
use crate::config::Settings;
use crate::drag::DragRotate;
use crate::painter::{ColorRandomizer, Mesh, RegionPainter, Surface};
use crate::palette::{Palette, PALETTE_SIZE};
use crate::store::ScoreStore;
use crate::texture::PixelBuffer;

pub const BEST_SCORE_KEY: &str = "BestScore";

const SPHERE_SEGMENTS: u32 = 24;
const SPHERE_RINGS: u32 = 16;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Status {
    Playing,
    Ended,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Verdict {
    Correct,
    Wrong,
    /// The round is already over.
    Ignored,
}

/// One timed round of "pick the color covering the most area".
pub struct Minigame {
    randomizer: ColorRandomizer,
    surface: Surface,
    drag: DragRotate,
    status: Status,
    timer: f32,
    round_seconds: f32,
    bonus_seconds: f32,
    score: i32,
    best_score: i32,
}

impl Minigame {
    pub fn new(settings: &Settings) -> Self {
        let painter = RegionPainter {
            strategy: settings.strategy,
            width: settings.texture_width,
            height: settings.texture_height,
        };
        Minigame {
            randomizer: ColorRandomizer::new(painter, settings.seed),
            surface: Surface::new(Mesh::uv_sphere(SPHERE_SEGMENTS, SPHERE_RINGS)),
            drag: DragRotate::new(settings),
            status: Status::Playing,
            timer: settings.round_seconds,
            round_seconds: settings.round_seconds,
            bonus_seconds: settings.bonus_seconds,
            score: 0,
            best_score: 0,
        }
    }

    /// Paint the first round.
    pub fn init(&mut self) {
        if let Err(e) = self.randomizer.randomize(Some(&mut self.surface)) {
            debug!("first round keeps an empty surface: {}", e);
        }
    }

    /// Count down by `dt` seconds, ending the game at zero.
    pub fn tick(&mut self, dt: f32, store: &mut dyn ScoreStore) {
        if self.status != Status::Playing {
            return;
        }
        self.timer -= dt;
        if self.timer <= 0.0 {
            self.timer = 0.0;
            info!("time is up");
            self.end(store);
        }
    }

    pub fn drag_mut(&mut self) -> &mut DragRotate {
        &mut self.drag
    }

    pub fn rotation(&self) -> (f32, f32) {
        self.drag.rotation()
    }

    pub fn answer(&mut self, index: usize, store: &mut dyn ScoreStore) -> Verdict {
        if self.status != Status::Playing || index >= PALETTE_SIZE {
            return Verdict::Ignored;
        }

        if self.randomizer.colors()[index] == self.randomizer.most_prevalent_color() {
            self.score += 1;
            self.timer += self.bonus_seconds;
            info!("correct! +{}s, score {}", self.bonus_seconds, self.score);
            if let Err(e) = self.randomizer.randomize(Some(&mut self.surface)) {
                debug!("keeping the previous texture: {}", e);
            }
            Verdict::Correct
        } else {
            info!("wrong answer, game over");
            self.end(store);
            Verdict::Wrong
        }
    }

    fn end(&mut self, store: &mut dyn ScoreStore) {
        self.status = Status::Ended;
        let best = store.get_int(BEST_SCORE_KEY, 0);
        if self.score > best {
            if let Err(e) = store.set_int(BEST_SCORE_KEY, self.score) {
                warn!("could not save best score: {}", e);
            }
            self.best_score = self.score;
        } else {
            self.best_score = best;
        }
        info!("game over: score {}, best {}", self.score, self.best_score);
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn score(&self) -> i32 {
        self.score
    }

    pub fn best_score(&self) -> i32 {
        self.best_score
    }

    #[cfg(test)]
    pub fn timer(&self) -> f32 {
        self.timer
    }

    /// Whole seconds left, rounded up.
    pub fn timer_text(&self) -> String {
        format!("{}", self.timer.ceil() as i32)
    }

    /// Time left as a share of a full round, capped at 1.
    pub fn timer_fraction(&self) -> f32 {
        if self.round_seconds <= 0.0 {
            return 0.0;
        }
        (self.timer / self.round_seconds).clamp(0.0, 1.0)
    }

    pub fn palette(&self) -> &Palette {
        self.randomizer.colors()
    }

    pub fn texture(&self) -> Option<&PixelBuffer> {
        self.surface.texture()
    }

    /// Button color for option `index`; after the end only the answer stays visible.
    pub fn option_color(&self, index: usize) -> Color {
        let color = self.randomizer.colors()[index];
        if self.status == Status::Ended && color != self.randomizer.most_prevalent_color() {
            color.with_alpha(0.0)
        } else {
            color
        }
    }
}
