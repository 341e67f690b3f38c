use log::debug;
use std::collections::HashMap;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("score file io failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("score file is malformed: {0}")]
    Parse(ron::Error),
    #[error("could not serialize scores: {0}")]
    Serialize(ron::Error),
}

/// Integer preferences keyed by name.
pub trait ScoreStore {
    fn get_int(&self, key: &str, default: i32) -> i32;
    fn set_int(&mut self, key: &str, value: i32) -> Result<(), StoreError>;
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    values: HashMap<String, i32>,
}

impl ScoreStore for MemoryStore {
    fn get_int(&self, key: &str, default: i32) -> i32 {
        self.values.get(key).copied().unwrap_or(default)
    }

    fn set_int(&mut self, key: &str, value: i32) -> Result<(), StoreError> {
        self.values.insert(key.to_string(), value);
        Ok(())
    }
}

/// A RON map on disk, rewritten on every `set_int`.
#[derive(Debug)]
pub struct RonFileStore {
    path: PathBuf,
    values: HashMap<String, i32>,
}

impl RonFileStore {
    /// Open `path`, starting empty if the file does not exist yet.
    pub fn open<P: Into<PathBuf>>(path: P) -> Result<Self, StoreError> {
        let path = path.into();
        let values = match std::fs::read_to_string(&path) {
            Ok(text) => ron::from_str(&text).map_err(StoreError::Parse)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => HashMap::new(),
            Err(e) => return Err(e.into()),
        };
        Ok(RonFileStore { path, values })
    }
}

impl ScoreStore for RonFileStore {
    fn get_int(&self, key: &str, default: i32) -> i32 {
        self.values.get(key).copied().unwrap_or(default)
    }

    fn set_int(&mut self, key: &str, value: i32) -> Result<(), StoreError> {
        self.values.insert(key.to_string(), value);
        let text = ron::ser::to_string(&self.values).map_err(StoreError::Serialize)?;
        std::fs::write(&self.path, text)?;
        debug!("saved {} = {} to {}", key, value, self.path.display());
        Ok(())
    }
}
