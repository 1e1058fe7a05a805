//! Settings and best-score storage
//!
//! Small JSON files under a caller-supplied data directory. Reads fall back
//! to defaults and writes are skipped (with a log line) on any failure, so a
//! broken disk can never interrupt gameplay.

use std::fs;
use std::path::PathBuf;

use crate::highscores::BestScores;
use crate::settings::Settings;

const SETTINGS_FILE: &str = "settings.json";
const BEST_SCORES_FILE: &str = "best_scores.json";

#[derive(Debug, Clone)]
pub struct Store {
    dir: Option<PathBuf>,
}

impl Store {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: Some(dir.into()),
        }
    }

    /// A store that never touches disk, for tests and not-yet-mounted hosts
    pub fn ephemeral() -> Self {
        Self { dir: None }
    }

    pub fn load_settings(&self) -> Settings {
        self.load(SETTINGS_FILE).unwrap_or_default()
    }

    pub fn save_settings(&self, settings: &Settings) {
        self.save(SETTINGS_FILE, settings);
    }

    pub fn load_best(&self) -> BestScores {
        self.load(BEST_SCORES_FILE).unwrap_or_default()
    }

    pub fn save_best(&self, best: &BestScores) {
        self.save(BEST_SCORES_FILE, best);
    }

    fn load<T: serde::de::DeserializeOwned>(&self, name: &str) -> Option<T> {
        let path = self.dir.as_ref()?.join(name);
        let json = match fs::read_to_string(&path) {
            Ok(json) => json,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return None,
            Err(err) => {
                log::warn!("failed to read {}: {err}", path.display());
                return None;
            }
        };
        match serde_json::from_str(&json) {
            Ok(value) => {
                log::info!("loaded {}", path.display());
                Some(value)
            }
            Err(err) => {
                log::warn!("corrupt {}: {err}", path.display());
                None
            }
        }
    }

    fn save<T: serde::Serialize>(&self, name: &str, value: &T) {
        let Some(dir) = &self.dir else {
            return;
        };
        if let Err(err) = fs::create_dir_all(dir) {
            log::warn!("failed to create {}: {err}", dir.display());
            return;
        }
        let path = dir.join(name);
        let json = match serde_json::to_string_pretty(value) {
            Ok(json) => json,
            Err(err) => {
                log::warn!("failed to encode {name}: {err}");
                return;
            }
        };
        if let Err(err) = fs::write(&path, json) {
            log::warn!("failed to write {}: {err}", path.display());
        }
    }
}
