// src/config.rs
//! Optional `sixdegrees.toml` settings. CLI flags override anything set
//! here; anything set here overrides the built-in defaults.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

const DEFAULT_PATH: &str = "sixdegrees.toml";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub data: DataFiles,
    #[serde(default)]
    pub game: GameConfig,
}

/// Paths to the three dataset files. None of them has a default; whatever
/// the CLI does not supply must come from here.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DataFiles {
    pub actors: Option<PathBuf>,
    pub movies: Option<PathBuf>,
    pub movie_actors: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GameConfig {
    #[serde(default = "default_center")]
    pub center: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self { center: default_center() }
    }
}

fn default_center() -> String {
    "Kevin Bacon".to_string()
}

impl Config {
    /// Loads the config file, falling back to `sixdegrees.toml` in the
    /// working directory. A missing file is not an error; the defaults
    /// apply.
    ///
    /// # Errors
    /// Returns an error when the file exists but cannot be read or parsed.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = path.unwrap_or(Path::new(DEFAULT_PATH));

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;

        toml::from_str(&content).with_context(|| format!("Invalid TOML in {}", path.display()))
    }
}
