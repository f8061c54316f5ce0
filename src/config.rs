use crate::cli::Args;
use crate::consts;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// Program configuration read from a configuration file
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq)]
pub(crate) struct Config {
    /// Gameplay options to use when the command line does not override them
    #[serde(default)]
    pub(crate) options: ConfigOptions,
}

impl Config {
    /// Return the default configuration file path
    pub(crate) fn default_path() -> Result<PathBuf, ConfigError> {
        dirs::config_local_dir()
            .map(|p| p.join("serpent").join("config.toml"))
            .ok_or(ConfigError::NoPath)
    }

    /// Read configuration from a file on disk.  If the file does not exist
    /// and `allow_missing` is true, a default `Config` value is returned.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the file could not be read or if the file's contents
    /// could not be deserialized.
    pub(crate) fn load(path: &Path, allow_missing: bool) -> Result<Config, ConfigError> {
        let content = match fs_err::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound && allow_missing => {
                return Ok(Config::default())
            }
            Err(e) => return Err(ConfigError::Read(e)),
        };
        toml::from_str(&content).map_err(Into::into)
    }
}

/// The `[options]` table of the configuration file.  Every key is optional;
/// anything absent falls back to the built-in defaults.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(default, rename_all = "kebab-case")]
pub(crate) struct ConfigOptions {
    width: Option<u16>,
    height: Option<u16>,
    start_length: Option<u16>,
    interval_ms: Option<u64>,
    min_interval_ms: Option<u64>,
    border: Option<char>,
}

impl ConfigOptions {
    /// Merge the configured values with the command-line overrides into a
    /// concrete set of options.  Command-line values win over the file's,
    /// which win over the defaults.
    pub(crate) fn resolve(self, args: &Args) -> Options {
        Options {
            width: args.width.or(self.width).unwrap_or(consts::BOARD_WIDTH),
            height: args.height.or(self.height).unwrap_or(consts::BOARD_HEIGHT),
            start_length: args
                .length
                .or(self.start_length)
                .unwrap_or(consts::INITIAL_SNAKE_LENGTH),
            interval: args
                .interval_ms
                .or(self.interval_ms)
                .map_or(consts::TICK_INTERVAL, Duration::from_millis),
            min_interval: args
                .min_interval_ms
                .or(self.min_interval_ms)
                .map_or(consts::MIN_TICK_INTERVAL, Duration::from_millis),
            border: self.border.unwrap_or(consts::BORDER_GLYPH),
        }
    }
}

/// Fully-resolved gameplay options for one session
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Options {
    /// Width of the board's interior, in cells
    pub(crate) width: u16,

    /// Height of the board's interior, in cells
    pub(crate) height: u16,

    /// Length of the snake before any food has been eaten
    pub(crate) start_length: u16,

    /// Time between snake movements before any food has been eaten
    pub(crate) interval: Duration,

    /// Shortest allowed time between snake movements
    pub(crate) min_interval: Duration,

    /// Glyph the border is drawn with
    pub(crate) border: char,
}

impl Options {
    /// The longest snake that fits between the board's center and the bottom
    /// border, i.e. the largest valid `start_length` for this board height
    fn max_start_length(&self) -> u16 {
        self.height - self.height / 2
    }

    /// Check the options for violations that would make the session
    /// unplayable.  Anything rejected here can never reach the tick loop.
    pub(crate) fn validate(&self) -> Result<(), OptionsError> {
        if self.width < consts::MIN_BOARD_EDGE || self.height < consts::MIN_BOARD_EDGE {
            return Err(OptionsError::BoardTooSmall {
                width: self.width,
                height: self.height,
            });
        }
        if self.start_length == 0 {
            return Err(OptionsError::ZeroLength);
        }
        if self.start_length > self.max_start_length() {
            return Err(OptionsError::SnakeTooLong {
                length: self.start_length,
                max: self.max_start_length(),
            });
        }
        if self.interval.is_zero() {
            return Err(OptionsError::ZeroInterval);
        }
        if self.min_interval.is_zero() || self.min_interval > self.interval {
            return Err(OptionsError::BadMinInterval {
                min_interval: self.min_interval,
                interval: self.interval,
            });
        }
        Ok(())
    }
}

impl Default for Options {
    fn default() -> Options {
        ConfigOptions::default().resolve(&Args::default())
    }
}

#[derive(Debug, Error)]
pub(crate) enum ConfigError {
    #[error("failed to determine path to local configuration directory")]
    NoPath,
    #[error("failed to read configuration file")]
    Read(#[from] std::io::Error),
    #[error("failed to parse configuration file")]
    Parse(#[from] toml::de::Error),
}

#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
pub(crate) enum OptionsError {
    #[error(
        "board must be at least {m}×{m} cells, got {width}×{height}",
        m = consts::MIN_BOARD_EDGE
    )]
    BoardTooSmall { width: u16, height: u16 },
    #[error("initial snake length must be at least 1")]
    ZeroLength,
    #[error(
        "initial snake length {length} does not fit between the board's center and its bottom border (maximum {max})"
    )]
    SnakeTooLong { length: u16, max: u16 },
    #[error("tick interval must be positive")]
    ZeroInterval,
    #[error(
        "minimum tick interval ({min_interval:?}) must be positive and no longer than the tick interval ({interval:?})"
    )]
    BadMinInterval {
        min_interval: Duration,
        interval: Duration,
    },
}
