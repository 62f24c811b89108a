//! Layered application configuration.
//!
//! Built-in defaults are overridden by an optional TOML file under the user's
//! config directory, which in turn is overridden by `PICPUZZLE_*` environment
//! variables (`__` separates nested keys, e.g. `PICPUZZLE_PUZZLE__ROWS=4`).

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use config::{Config, Environment, File};
use serde::{de, Deserialize, Deserializer};

use crate::{
    session::DEFAULT_PLAYER_NAME,
    surface::{Rgb, Size},
};

/// Directory under the platform config dir holding `config.toml`.
pub const CONFIG_DIR: &str = "picpuzzle";
/// Prefix for environment overrides.
pub const ENV_PREFIX: &str = "PICPUZZLE";
/// Highest accepted `frame_rate`.
pub const MAX_FRAME_RATE: u32 = 1000;

/// Top-level settings for a run.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Directory holding candidate puzzle images.
    pub asset_dir: PathBuf,
    /// Target frames per second of the main loop.
    pub frame_rate: u32,
    /// Player name before anyone picks one.
    pub player_name: String,
    /// Fixed RNG seed for reproducible shuffles.
    #[serde(default)]
    pub seed: Option<u64>,
    /// Logical drawing surface.
    pub surface: SurfaceConfig,
    /// Puzzle grid settings.
    pub puzzle: PuzzleSettings,
}

/// Logical resolution and background of the drawing surface.
#[derive(Debug, Clone, Deserialize)]
pub struct SurfaceConfig {
    /// Width in logical pixels.
    pub width: u32,
    /// Height in logical pixels.
    pub height: u32,
    /// Fill colour, given as `#rrggbb` or `#rgb`.
    #[serde(deserialize_with = "deserialize_color")]
    pub background: Rgb,
}

impl SurfaceConfig {
    /// Logical size of the surface.
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

/// Grid shape and presentation of the puzzle board.
#[derive(Debug, Clone, Deserialize)]
pub struct PuzzleSettings {
    /// Number of tile rows.
    pub rows: usize,
    /// Number of tile columns.
    pub cols: usize,
    /// Gap around every tile, in logical pixels.
    pub margin: u32,
    /// Downscale images that would not fit on the surface.
    pub fit_to_surface: bool,
}

impl Default for PuzzleSettings {
    fn default() -> Self {
        Self {
            rows: 3,
            cols: 3,
            margin: 2,
            fit_to_surface: true,
        }
    }
}

impl AppConfig {
    /// Load configuration from the default file location and the environment.
    pub fn load() -> Result<Self> {
        Self::load_from(default_config_path().as_deref())
    }

    /// Load configuration using `file` (if it exists) and the environment.
    pub fn load_from(file: Option<&Path>) -> Result<Self> {
        Self::build(file, environment())
    }

    fn build(file: Option<&Path>, env: Environment) -> Result<Self> {
        let mut builder = Config::builder()
            .set_default("asset_dir", "pictures")?
            .set_default("frame_rate", 60_i64)?
            .set_default("player_name", DEFAULT_PLAYER_NAME)?
            .set_default("surface.width", 1280_i64)?
            .set_default("surface.height", 720_i64)?
            .set_default("surface.background", "#000000")?
            .set_default("puzzle.rows", 3_i64)?
            .set_default("puzzle.cols", 3_i64)?
            .set_default("puzzle.margin", 2_i64)?
            .set_default("puzzle.fit_to_surface", true)?;

        if let Some(path) = file {
            builder = builder.add_source(File::from(path).required(false));
        }

        let config: AppConfig = builder
            .add_source(env)
            .build()
            .context("failed to assemble configuration")?
            .try_deserialize()
            .context("failed to parse configuration")?;
        config.validate()?;
        Ok(config)
    }

    /// Reject settings the game cannot run with.
    pub fn validate(&self) -> Result<()> {
        if self.puzzle.rows == 0 || self.puzzle.cols == 0 {
            bail!(
                "puzzle grid must have at least one row and column (got {}x{})",
                self.puzzle.rows,
                self.puzzle.cols
            );
        }
        if self.surface.width == 0 || self.surface.height == 0 {
            bail!("surface dimensions must be non-zero");
        }
        if self.frame_rate == 0 || self.frame_rate > MAX_FRAME_RATE {
            bail!(
                "frame_rate must be between 1 and {MAX_FRAME_RATE} (got {})",
                self.frame_rate
            );
        }

        let gutters = self.puzzle.rows.max(self.puzzle.cols).saturating_add(1);
        let room = self.surface.width.min(self.surface.height);
        let used = u32::try_from(gutters)
            .ok()
            .and_then(|gutters| self.puzzle.margin.checked_mul(gutters));
        if !used.is_some_and(|used| used < room) {
            bail!(
                "puzzle margin {} leaves no room for a {}x{} grid on a {}x{} surface",
                self.puzzle.margin,
                self.puzzle.rows,
                self.puzzle.cols,
                self.surface.width,
                self.surface.height
            );
        }
        Ok(())
    }
}

/// Location of the optional config file, if the platform has a config dir.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR).join("config.toml"))
}

fn environment() -> Environment {
    Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true)
}

fn deserialize_color<'de, D>(deserializer: D) -> Result<Rgb, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_hex_color(&raw).ok_or_else(|| de::Error::custom(format!("invalid colour {raw:?}")))
}

/// Parse `#rrggbb`, `#rgb` or `0xrrggbb` notation.
pub fn parse_hex_color(input: &str) -> Option<Rgb> {
    let trimmed = input.trim();
    let hex = trimmed.strip_prefix('#').unwrap_or(trimmed);
    let hex = hex.strip_prefix("0x").unwrap_or(hex);
    if !hex.is_ascii() {
        return None;
    }
    match hex.len() {
        6 => {
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            Some(Rgb(r, g, b))
        }
        3 => {
            let r = u8::from_str_radix(&hex[0..1].repeat(2), 16).ok()?;
            let g = u8::from_str_radix(&hex[1..2].repeat(2), 16).ok()?;
            let b = u8::from_str_radix(&hex[2..3].repeat(2), 16).ok()?;
            Some(Rgb(r, g, b))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn env_with(pairs: &[(&str, &str)]) -> Environment {
        let map = pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        environment().source(Some(map))
    }

    #[test]
    fn defaults_apply_without_sources() -> Result<()> {
        let config = AppConfig::build(None, env_with(&[]))?;
        assert_eq!(config.asset_dir, PathBuf::from("pictures"));
        assert_eq!(config.frame_rate, 60);
        assert_eq!(config.player_name, "Anonim Tusk");
        assert_eq!(config.seed, None);
        assert_eq!(config.surface.size(), Size::new(1280, 720));
        assert_eq!(config.surface.background, Rgb::BLACK);
        assert_eq!(config.puzzle.rows, 3);
        assert_eq!(config.puzzle.cols, 3);
        assert_eq!(config.puzzle.margin, 2);
        assert!(config.puzzle.fit_to_surface);
        Ok(())
    }

    #[test]
    fn file_then_env_override_defaults() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            r##"
asset_dir = "art"
seed = 7

[surface]
background = "#102030"

[puzzle]
rows = 4
"##,
        )?;

        let config = AppConfig::build(
            Some(&path),
            env_with(&[("PICPUZZLE_PUZZLE__ROWS", "5"), ("PICPUZZLE_FRAME_RATE", "30")]),
        )?;
        assert_eq!(config.asset_dir, PathBuf::from("art"));
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.surface.background, Rgb(0x10, 0x20, 0x30));
        assert_eq!(config.puzzle.rows, 5);
        assert_eq!(config.puzzle.cols, 3);
        assert_eq!(config.frame_rate, 30);
        Ok(())
    }

    #[test]
    fn missing_file_is_not_an_error() -> Result<()> {
        let dir = tempdir()?;
        let config = AppConfig::build(Some(&dir.path().join("absent.toml")), env_with(&[]))?;
        assert_eq!(config.puzzle.rows, 3);
        Ok(())
    }

    #[test]
    fn rejects_empty_grid() {
        let result = AppConfig::build(None, env_with(&[("PICPUZZLE_PUZZLE__COLS", "0")]));
        assert!(result.is_err());
    }

    #[test]
    fn rejects_oversized_margin() {
        let result = AppConfig::build(
            None,
            env_with(&[("PICPUZZLE_PUZZLE__MARGIN", "2000000000")]),
        );
        assert!(result.is_err());

        // 4 gutters of 180 fill the 720 high surface exactly.
        let result = AppConfig::build(None, env_with(&[("PICPUZZLE_PUZZLE__MARGIN", "180")]));
        assert!(result.is_err());
    }

    #[test]
    fn accepts_margin_that_leaves_room() -> Result<()> {
        let config = AppConfig::build(None, env_with(&[("PICPUZZLE_PUZZLE__MARGIN", "179")]))?;
        assert_eq!(config.puzzle.margin, 179);
        Ok(())
    }

    #[test]
    fn rejects_absurd_frame_rate() -> Result<()> {
        let result = AppConfig::build(
            None,
            env_with(&[("PICPUZZLE_FRAME_RATE", "3000000000")]),
        );
        assert!(result.is_err());
        assert!(AppConfig::build(None, env_with(&[("PICPUZZLE_FRAME_RATE", "1001")])).is_err());

        let config = AppConfig::build(None, env_with(&[("PICPUZZLE_FRAME_RATE", "1000")]))?;
        assert_eq!(config.frame_rate, MAX_FRAME_RATE);
        Ok(())
    }

    #[test]
    fn rejects_bad_colour() {
        let result = AppConfig::build(
            None,
            env_with(&[("PICPUZZLE_SURFACE__BACKGROUND", "chartreuse")]),
        );
        assert!(result.is_err());
    }

    #[test]
    fn parses_short_and_long_hex() {
        assert_eq!(parse_hex_color("#fff"), Some(Rgb::WHITE));
        assert_eq!(parse_hex_color("0x00ff00"), Some(Rgb::GREEN));
        assert_eq!(parse_hex_color("#12345"), None);
    }
}
