use crate::consts;
use crate::game::grid::Grid;
use serde::Deserialize;
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

/// Program configuration read from a configuration file
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub(crate) struct Config {
    /// Size of the playing field
    pub(crate) grid: Grid,

    /// Tick rate settings
    pub(crate) speed: SpeedConfig,

    /// Geometry of the render surface
    pub(crate) display: DisplayConfig,

    pub(crate) colors: Palette,

    /// Settings about data files
    pub(crate) files: FileConfig,
}

impl Config {
    /// Return the default configuration file path
    pub(crate) fn default_path() -> Result<PathBuf, ConfigError> {
        dirs::config_local_dir()
            .map(|p| p.join(consts::APP_DIR).join(consts::CONFIG_FILE_NAME))
            .ok_or(ConfigError::NoPath)
    }

    /// Read configuration from a file on disk.  If the file does not exist and
    /// `allow_missing` is true, a default `Config` value is returned.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the file could not be read, if the file's contents
    /// could not be deserialized, or if the resulting values are out of range.
    pub(crate) fn load(path: &Path, allow_missing: bool) -> Result<Config, ConfigError> {
        let content = match fs_err::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound && allow_missing => {
                return Ok(Config::default())
            }
            Err(e) => return Err(ConfigError::Read(e)),
        };
        let config = toml::from_str::<Config>(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that all values are usable by the game
    pub(crate) fn validate(&self) -> Result<(), InvalidConfig> {
        if !(consts::MIN_GRID_WIDTH..=consts::MAX_GRID_SIDE).contains(&self.grid.width) {
            return Err(InvalidConfig::GridWidth(self.grid.width));
        }
        if !(1..=consts::MAX_GRID_SIDE).contains(&self.grid.height) {
            return Err(InvalidConfig::GridHeight(self.grid.height));
        }
        if !(self.speed.initial.is_finite() && self.speed.initial > 0.0) {
            return Err(InvalidConfig::InitialSpeed(self.speed.initial));
        }
        if !(self.speed.step.is_finite() && self.speed.step >= 0.0) {
            return Err(InvalidConfig::SpeedStep(self.speed.step));
        }
        if self.display.cell_size < 2 {
            return Err(InvalidConfig::CellSize(self.display.cell_size));
        }
        for cells in [self.grid.width, self.grid.height] {
            if screen_extent(cells, self.display).is_none() {
                return Err(InvalidConfig::ScreenSize);
            }
        }
        Ok(())
    }

    /// Return the filepath at which the high score should be stored: the file
    /// given in the configuration or, if that is not set, the default path in
    /// the local data directory.  Return `None` if no path is configured and
    /// the default path could not be computed.
    pub(crate) fn high_score_file(&self) -> Option<Cow<'_, Path>> {
        self.files
            .high_score_file
            .as_deref()
            .map(Cow::from)
            .or_else(|| data_file(consts::HIGH_SCORE_FILE_NAME).map(Cow::from))
    }

    /// Return the filepath to which log messages should be written, with the
    /// same fallback rules as [`Config::high_score_file()`]
    pub(crate) fn log_file(&self) -> Option<Cow<'_, Path>> {
        self.files
            .log_file
            .as_deref()
            .map(Cow::from)
            .or_else(|| data_file(consts::LOG_FILE_NAME).map(Cow::from))
    }
}

/// Return the number of pixels spanned by `cells` grid cells plus the margins
/// on both sides, or `None` if that doesn't fit in a `u32`
fn screen_extent(cells: u16, display: DisplayConfig) -> Option<u32> {
    u32::from(cells)
        .checked_mul(display.cell_size)?
        .checked_add(display.margin.checked_mul(2)?)
}

fn data_file(name: &str) -> Option<PathBuf> {
    dirs::data_local_dir().map(|p| p.join(consts::APP_DIR).join(name))
}

#[derive(Clone, Copy, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub(crate) struct SpeedConfig {
    /// Ticks per second at the start of a game
    pub(crate) initial: f64,

    /// Ticks per second added for each food eaten
    pub(crate) step: f64,
}

impl Default for SpeedConfig {
    fn default() -> SpeedConfig {
        SpeedConfig {
            initial: consts::INITIAL_SPEED,
            step: consts::SPEED_STEP,
        }
    }
}

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq)]
#[serde(default, rename_all = "kebab-case")]
pub(crate) struct DisplayConfig {
    /// Size of one grid cell, in pixels
    pub(crate) cell_size: u32,

    /// Empty space around the playing field, in pixels
    pub(crate) margin: u32,
}

impl Default for DisplayConfig {
    fn default() -> DisplayConfig {
        DisplayConfig {
            cell_size: consts::CELL_SIZE,
            margin: consts::MARGIN,
        }
    }
}

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq)]
#[serde(default, rename_all = "kebab-case")]
pub(crate) struct Palette {
    pub(crate) background: Rgb,
    pub(crate) grid: Rgb,
    pub(crate) snake: Rgb,
    pub(crate) snake_head: Rgb,
    pub(crate) food: Rgb,
    pub(crate) text: Rgb,
    pub(crate) accent: Rgb,
    pub(crate) overlay: Rgb,
}

impl Default for Palette {
    fn default() -> Palette {
        Palette {
            background: consts::BACKGROUND_COLOR,
            grid: consts::GRID_COLOR,
            snake: consts::SNAKE_COLOR,
            snake_head: consts::SNAKE_HEAD_COLOR,
            food: consts::FOOD_COLOR,
            text: consts::TEXT_COLOR,
            accent: consts::ACCENT_COLOR,
            overlay: consts::OVERLAY_COLOR,
        }
    }
}

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(default, rename_all = "kebab-case")]
pub(crate) struct FileConfig {
    /// Path at which the high score is stored
    pub(crate) high_score_file: Option<PathBuf>,

    /// Path to which log messages are written
    pub(crate) log_file: Option<PathBuf>,
}

/// An opaque 24-bit color, written as `"#rrggbb"` in configuration files
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq)]
#[serde(try_from = "String")]
pub(crate) struct Rgb(pub(crate) u8, pub(crate) u8, pub(crate) u8);

impl FromStr for Rgb {
    type Err = ParseRgbError;

    fn from_str(s: &str) -> Result<Rgb, ParseRgbError> {
        let hex = s
            .strip_prefix('#')
            .filter(|h| h.len() == 6 && h.chars().all(|c| c.is_ascii_hexdigit()))
            .ok_or_else(|| ParseRgbError(s.to_owned()))?;
        let channel = |i: usize| {
            hex.get(i..i + 2)
                .and_then(|h| u8::from_str_radix(h, 16).ok())
                .ok_or_else(|| ParseRgbError(s.to_owned()))
        };
        Ok(Rgb(channel(0)?, channel(2)?, channel(4)?))
    }
}

impl TryFrom<String> for Rgb {
    type Error = ParseRgbError;

    fn try_from(value: String) -> Result<Rgb, ParseRgbError> {
        value.parse()
    }
}

#[derive(Clone, Debug, Eq, Error, PartialEq)]
#[error("invalid color {0:?}; expected \"#rrggbb\"")]
pub(crate) struct ParseRgbError(String);

#[derive(Debug, Error)]
pub(crate) enum ConfigError {
    #[error("failed to determine path to local configuration directory")]
    NoPath,
    #[error("failed to read configuration file")]
    Read(#[from] std::io::Error),
    #[error("failed to parse configuration file")]
    Parse(#[from] toml::de::Error),
    #[error("invalid configuration")]
    Invalid(#[from] InvalidConfig),
}

#[derive(Clone, Debug, Error, PartialEq)]
pub(crate) enum InvalidConfig {
    #[error(
        "grid width must be between {min} and {max}, got {0}",
        min = consts::MIN_GRID_WIDTH,
        max = consts::MAX_GRID_SIDE
    )]
    GridWidth(u16),
    #[error("grid height must be between 1 and {max}, got {0}", max = consts::MAX_GRID_SIDE)]
    GridHeight(u16),
    #[error("initial speed must be a positive number of ticks per second, got {0}")]
    InitialSpeed(f64),
    #[error("speed step must be a non-negative number, got {0}")]
    SpeedStep(f64),
    #[error("cell size must be at least 2 pixels, got {0}")]
    CellSize(u32),
    #[error("grid, cell size and margin together are too large to draw")]
    ScreenSize,
}
