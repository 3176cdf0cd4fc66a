use std::{
    fs, io,
    path::{Path, PathBuf},
    time::Duration,
};

use anyhow::{Context as _, ensure};
use blocktris_engine::{Command, EngineConfig};
use log::info;
use serde::{Deserialize, Serialize};

use crate::input::{Action, KeyName, defaults};

/// Application directory under the user config directory.
const APP_DIR: &str = "blocktris";
const CONFIG_FILE: &str = "config.toml";

/// User configuration, read from `config.toml`.
///
/// Every field is optional in the file; missing ones take their default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Gravity ticks per second.
    pub gravity_rate: f64,
    /// Renders per second.
    pub frame_rate: f64,
    /// Longest single wait for input, in milliseconds.
    pub idle_ms: u64,
    /// Show the next piece.
    pub preview: bool,
    /// Show where the falling piece will land.
    pub ghost: bool,
    pub keys: KeyConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            gravity_rate: 100.0,
            frame_rate: 60.0,
            idle_ms: 10,
            preview: true,
            ghost: false,
            keys: KeyConfig::default(),
        }
    }
}

/// Key lists per action. An empty list unbinds the action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct KeyConfig {
    pub move_left: Vec<KeyName>,
    pub move_right: Vec<KeyName>,
    pub rotate: Vec<KeyName>,
    pub hard_drop: Vec<KeyName>,
    pub quit: Vec<KeyName>,
    pub pause: Vec<KeyName>,
}

impl Default for KeyConfig {
    fn default() -> Self {
        Self {
            move_left: defaults::MOVE_LEFT.to_vec(),
            move_right: defaults::MOVE_RIGHT.to_vec(),
            rotate: defaults::ROTATE.to_vec(),
            hard_drop: defaults::HARD_DROP.to_vec(),
            quit: defaults::QUIT.to_vec(),
            pause: defaults::PAUSE.to_vec(),
        }
    }
}

impl KeyConfig {
    pub fn entries(&self) -> [(Action, &[KeyName]); 6] {
        [
            (Action::Game(Command::MoveLeft), self.move_left.as_slice()),
            (Action::Game(Command::MoveRight), self.move_right.as_slice()),
            (Action::Game(Command::Rotate), self.rotate.as_slice()),
            (Action::Game(Command::HardDrop), self.hard_drop.as_slice()),
            (Action::Game(Command::Quit), self.quit.as_slice()),
            (Action::Pause, self.pause.as_slice()),
        ]
    }
}

impl Config {
    /// Loads the configuration from `path`, or from the default location.
    ///
    /// A file that does not exist yields the defaults.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        match path.map(Path::to_path_buf).or_else(default_path) {
            Some(path) => Self::load_from(&path),
            None => {
                info!("no config directory found, using default configuration");
                Ok(Self::default())
            }
        }
    }

    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                info!(
                    "config file {} not found, using default configuration",
                    path.display()
                );
                return Ok(Self::default());
            }
            Err(e) => {
                return Err(e)
                    .with_context(|| format!("Failed to read config file: {}", path.display()));
            }
        };
        let config: Self = toml::from_str(&text)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        config
            .validate()
            .with_context(|| format!("Invalid config file: {}", path.display()))?;
        info!("loaded configuration from {}", path.display());
        Ok(config)
    }

    fn validate(&self) -> anyhow::Result<()> {
        ensure!(
            self.gravity_rate.is_finite() && self.gravity_rate > 0.0,
            "gravity_rate must be a positive number, got {}",
            self.gravity_rate
        );
        ensure!(
            self.frame_rate.is_finite() && self.frame_rate > 0.0,
            "frame_rate must be a positive number, got {}",
            self.frame_rate
        );
        ensure!(self.idle_ms > 0, "idle_ms must be at least 1");
        Ok(())
    }

    pub fn to_toml(&self) -> anyhow::Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize configuration")
    }

    pub fn idle_cap(&self) -> Duration {
        Duration::from_millis(self.idle_ms)
    }

    pub fn engine_config(&self) -> EngineConfig {
        EngineConfig {
            preview: self.preview,
        }
    }
}

/// Returns `<config dir>/blocktris/config.toml`.
pub fn default_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
}
