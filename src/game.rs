use log::{info, warn};
use rusttype::{point, Font, Scale};
use winit::event::VirtualKeyCode;
use winit_input_helper::WinitInputHelper;

use crate::colors::*;
use crate::config::Settings;
use crate::minigame::{Minigame, Status};
use crate::palette::{PaletteGenerator, PALETTE_SIZE};
use crate::store::ScoreStore;

// frame size consts
pub const WIDTH: u32 = 720;
pub const HEIGHT: u32 = 600;
const DISC_CENTER: (usize, usize) = (360, 260);
const DISC_RADIUS: usize = 170;
const BUTTON_TOP: usize = 470;
const BUTTON_SIZE: usize = 110;
const BUTTON_GAP: usize = 40;
const BUTTON_BORDER_WIDTH: usize = 4;
const WINDOW_RECT: (usize, usize, usize, usize) = (160, 140, 400, 260);
const RESTART_RECT: (usize, usize, usize, usize) = (260, 320, 200, 56);
const TIMER_BAR: (usize, usize, usize, usize) = (20, 70, 680, 10);
const PIP_SIZE: usize = 8;
const PIP_STEP: usize = 12;
const PIPS_PER_ROW: usize = 25;
const MAX_PIPS: usize = PIPS_PER_ROW * 4;

/// Representation of the application state
pub struct World {
    font: Option<Font<'static>>,
    scene: Scene,
    settings: Settings,
    store: Box<dyn ScoreStore>,
}

pub enum Scene {
    Title,
    InGame(Box<Minigame>),
}

/// Pointer state for one frame, in frame pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Pointer {
    pub pressed: bool,
    pub held: bool,
    pub position: Option<(f32, f32)>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Move {
    Enter,
    Answer(usize),
    Click((usize, usize)),
}

impl World {
    /// Create a new `World` on the title scene
    pub fn new(settings: Settings, store: Box<dyn ScoreStore>) -> Self {
        let font = settings.font_path.as_ref().and_then(|path| {
            let font = std::fs::read(path).ok().and_then(Font::try_from_vec);
            if font.is_none() {
                warn!("could not load font from {}, text is disabled", path);
            }
            font
        });

        World {
            font,
            scene: Scene::Title,
            settings,
            store,
        }
    }

    #[cfg(test)]
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Update the `World` internal state from this frame's input
    pub fn update(&mut self, input: &WinitInputHelper, pointer: Pointer, dt: f32) {
        let moves = World::get_input_moves(input, &pointer);
        self.handle(&moves, pointer, dt);
    }

    fn get_input_moves(input: &WinitInputHelper, pointer: &Pointer) -> Vec<Move> {
        use Move::*;
        let mut moves = vec![];
        if input.key_pressed(VirtualKeyCode::Return) {
            moves.push(Enter);
        }
        let keys = [
            VirtualKeyCode::Key1,
            VirtualKeyCode::Key2,
            VirtualKeyCode::Key3,
            VirtualKeyCode::Key4,
        ];
        for (i, key) in keys.iter().enumerate() {
            if input.key_pressed(*key) {
                moves.push(Answer(i));
            }
        }
        if pointer.pressed {
            if let Some((x, y)) = pointer.position {
                moves.push(Click((x as usize, y as usize)));
            }
        }
        moves
    }

    pub fn handle(&mut self, moves: &[Move], pointer: Pointer, dt: f32) {
        match &mut self.scene {
            Scene::Title => {
                if !moves.is_empty() {
                    self.start();
                }
            }
            Scene::InGame(game) => {
                let store = &mut *self.store;
                let mut restart = false;
                for move_ in moves {
                    use Move::*;
                    match (move_, game.status()) {
                        (Answer(i), Status::Playing) => {
                            game.answer(*i, store);
                        }
                        (Click(pos), Status::Playing) => {
                            if let Some(i) = World::button_at(*pos) {
                                game.answer(i, store);
                            }
                        }
                        (Enter, Status::Ended) => restart = true,
                        (Click(pos), Status::Ended) => {
                            restart = restart || World::in_rect(*pos, RESTART_RECT);
                        }
                        _ => {}
                    }
                }
                game.drag_mut().tick(pointer.held, pointer.position);
                game.tick(dt, store);
                if restart {
                    self.start();
                }
            }
        }
    }

    fn start(&mut self) {
        info!("starting a new round");
        let mut game = Minigame::new(&self.settings);
        game.init();
        self.scene = Scene::InGame(Box::new(game));
    }

    fn button_rect(index: usize) -> (usize, usize, usize, usize) {
        let row = PALETTE_SIZE * BUTTON_SIZE + (PALETTE_SIZE - 1) * BUTTON_GAP;
        let left = (WIDTH as usize - row) / 2;
        (left + index * (BUTTON_SIZE + BUTTON_GAP), BUTTON_TOP, BUTTON_SIZE, BUTTON_SIZE)
    }

    fn button_at(pos: (usize, usize)) -> Option<usize> {
        (0..PALETTE_SIZE).find(|i| World::in_rect(pos, World::button_rect(*i)))
    }

    fn in_rect(pos: (usize, usize), rect: (usize, usize, usize, usize)) -> bool {
        let (x, y, w, h) = rect;
        pos.0 >= x && pos.0 < x + w && pos.1 >= y && pos.1 < y + h
    }

    /// Draw the `World` state to the frame buffer.
    pub fn draw(&self, frame: &mut [u8]) {
        World::clear(frame);
        match &self.scene {
            Scene::Title => self.draw_title(frame),
            Scene::InGame(game) => {
                if let Some(texture) = game.texture() {
                    texture.draw_disc(frame, WIDTH as usize, DISC_CENTER, DISC_RADIUS, game.rotation());
                }
                self.draw_buttons(frame, game);
                self.draw_hud(frame, game);
                if game.status() == Status::Ended {
                    self.draw_score_window(frame, game);
                }
            }
        }
    }

    fn clear(frame: &mut [u8]) {
        let pixels: Vec<u8> = BACKGROUND
            .iter()
            .cycle()
            .cloned()
            .take(frame.len())
            .collect();
        frame.copy_from_slice(&pixels);
    }

    fn draw_title(&self, frame: &mut [u8]) {
        let (palette, _) = PaletteGenerator::from_draws(0.0, [0.25, 0.25, 0.25]);
        for (i, color) in palette.iter().enumerate() {
            let (x, y, w, h) = World::button_rect(i);
            World::fill_rect(frame, (x, y - 200, w, h), color.to_rgba8());
        }
        if let Some(font) = &self.font {
            World::draw_text(frame, "Hue Hunt", font, GREEN, 80.0, (200.0, 80.0));
            World::draw_text(frame, "which color covers the most?", font, WHITE, 28.0, (140.0, 180.0));
            World::draw_text(frame, "click to start", font, WHITE, 32.0, (240.0, 440.0));
        }
    }

    fn draw_buttons(&self, frame: &mut [u8], game: &Minigame) {
        for i in 0..PALETTE_SIZE {
            let (x, y, w, h) = World::button_rect(i);
            let color = game.option_color(i);
            if color.a > 0.0 {
                World::fill_rect(frame, (x, y, w, h), BUTTON_BORDER);
            }
            let b = BUTTON_BORDER_WIDTH;
            World::fill_rect(frame, (x + b, y + b, w - 2 * b, h - 2 * b), color.over(BACKGROUND));
        }
    }

    fn draw_hud(&self, frame: &mut [u8], game: &Minigame) {
        let (x, y, w, h) = TIMER_BAR;
        World::fill_rect(frame, (x, y, w, h), GRAY);
        World::fill_rect(frame, (x, y, World::timer_bar_width(game.timer_fraction()), h), FLAME);

        match &self.font {
            Some(font) => {
                World::draw_text(frame, &game.timer_text(), font, WHITE, 48.0, (20.0, 10.0));
                let score = format!("{}", game.score());
                World::draw_text(frame, &score, font, GREEN, 48.0, (640.0, 10.0));
            }
            None => World::draw_pips(frame, game.score(), (20, 20), GREEN),
        }
    }

    fn timer_bar_width(fraction: f32) -> usize {
        (TIMER_BAR.2 as f32 * fraction.clamp(0.0, 1.0)).round() as usize
    }

    /// One small square per point, wrapping every `PIPS_PER_ROW` and capped at `MAX_PIPS`.
    fn pip_rects(count: i32, origin: (usize, usize)) -> Vec<(usize, usize, usize, usize)> {
        (0..(count.max(0) as usize).min(MAX_PIPS))
            .map(|i| {
                let (row, col) = (i / PIPS_PER_ROW, i % PIPS_PER_ROW);
                (origin.0 + col * PIP_STEP, origin.1 + row * PIP_STEP, PIP_SIZE, PIP_SIZE)
            })
            .collect()
    }

    fn draw_pips(frame: &mut [u8], count: i32, origin: (usize, usize), color: Rgba) {
        for rect in World::pip_rects(count, origin) {
            World::fill_rect(frame, rect, color);
        }
    }

    fn draw_score_window(&self, frame: &mut [u8], game: &Minigame) {
        World::fill_rect(frame, WINDOW_RECT, DARK_GREEN);
        let (x, y, w, h) = WINDOW_RECT;
        World::fill_rect(frame, (x, y, w, BUTTON_BORDER_WIDTH), GRAY);
        World::fill_rect(frame, (x, y + h - BUTTON_BORDER_WIDTH, w, BUTTON_BORDER_WIDTH), GRAY);
        World::fill_rect(frame, RESTART_RECT, FLAME);

        if let Some(font) = &self.font {
            let score = format!("Score: {}", game.score());
            let best = format!("Best Score: {}", game.best_score());
            World::draw_text(frame, &score, font, WHITE, 40.0, (200.0, 170.0));
            World::draw_text(frame, &best, font, WHITE, 40.0, (200.0, 230.0));
            World::draw_text(frame, "RESTART", font, WHITE, 36.0, (290.0, 328.0));
        } else {
            World::draw_pips(frame, game.score(), (x + 30, y + 40), GREEN);
            World::draw_pips(frame, game.best_score(), (x + 30, y + 110), WHITE);
        }
    }

    fn fill_rect(frame: &mut [u8], rect: (usize, usize, usize, usize), color: Rgba) {
        let (x, y, w, h) = rect;
        let frame_width = WIDTH as usize;
        let frame_height = frame.len() / (frame_width * 4);
        let w = w.min(frame_width.saturating_sub(x));
        // one line _across_ the rect
        let line: Vec<u8> = std::iter::repeat(color).take(w).flatten().collect();
        for row in y..(y + h).min(frame_height) {
            let start = (row * frame_width + x) * 4;
            frame[start..start + w * 4].copy_from_slice(&line);
        }
    }

    fn draw_text(
        frame: &mut [u8],
        text: &str,
        font: &Font,
        color: Rgba,
        height: f32,
        offset: (f32, f32),
    ) {
        let scale = Scale {
            x: height,
            y: height,
        };

        let v_metrics = font.v_metrics(scale);
        let offset = point(offset.0, offset.1 + v_metrics.ascent);

        for glyph in font.layout(text, scale, offset) {
            if let Some(bounding_box) = glyph.pixel_bounding_box() {
                glyph.draw(|x, y, v| {
                    // Offset the position by the glyph bounding box
                    let x_offset = x as i32 + bounding_box.min.x;
                    let y_offset = y as i32 + bounding_box.min.y;
                    if x_offset < 0 || y_offset < 0 || x_offset >= WIDTH as i32 || y_offset >= HEIGHT as i32 {
                        return;
                    }
                    let index = ((y_offset as u32 * WIDTH + x_offset as u32) * 4) as usize;
                    // blend over whatever is already there
                    let under = &frame[index..index + 4];
                    let blended_color = [
                        (under[0] as f32 * (1.0 - v) + color[0] as f32 * v) as u8,
                        (under[1] as f32 * (1.0 - v) + color[1] as f32 * v) as u8,
                        (under[2] as f32 * (1.0 - v) + color[2] as f32 * v) as u8,
                        0xff,
                    ];
                    frame[index..index + 4].copy_from_slice(&blended_color);
                });
            }
        }
    }
}
