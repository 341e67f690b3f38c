use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

use crate::painter::{BlendParams, Strategy};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read settings: {0}")]
    Io(#[from] std::io::Error),
    #[error("could not parse settings: {0}")]
    Parse(#[from] ron::Error),
    #[error("texture size {0}x{1} is outside 1..={}", MAX_TEXTURE_SIZE)]
    TextureSize(u32, u32),
}

/// Largest texture edge accepted from a settings file.
pub const MAX_TEXTURE_SIZE: u32 = 4096;

/// Tunables read from a RON file; anything left out keeps its default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub texture_width: u32,
    pub texture_height: u32,
    pub strategy: Strategy,
    pub seed: Option<u64>,
    pub round_seconds: f32,
    pub bonus_seconds: f32,
    pub rotate_speed: f32,
    pub inertia_multiplier: f32,
    pub inertia_decay: f32,
    pub inertia_threshold: f32,
    pub font_path: Option<String>,
    pub score_path: String,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            texture_width: 256,
            texture_height: 256,
            strategy: Strategy::Blended(BlendParams::default()),
            seed: None,
            round_seconds: 60.0,
            bonus_seconds: 2.0,
            rotate_speed: 0.2,
            inertia_multiplier: 0.5,
            inertia_decay: 0.95,
            inertia_threshold: 0.01,
            font_path: None,
            score_path: "best_score.ron".to_string(),
        }
    }
}

impl Settings {
    pub fn parse(text: &str) -> Result<Self, ConfigError> {
        let settings: Settings = ron::from_str(text)?;
        let (w, h) = (settings.texture_width, settings.texture_height);
        let valid = 1..=MAX_TEXTURE_SIZE;
        if !valid.contains(&w) || !valid.contains(&h) {
            return Err(ConfigError::TextureSize(w, h));
        }
        Ok(settings)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Settings::parse(&text)
    }
}
