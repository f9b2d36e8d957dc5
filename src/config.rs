//! Command-line configuration.

use std::fmt;
use std::path::PathBuf;

use tracing::Level;

use crate::generators::Generator;

/// How the CLI draws a maze.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum RenderStyle {
    Ascii,
    #[default]
    Unicode,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Rooms along one side of the maze.
    pub size: u32,
    /// Seed for generation. `None` means the current time.
    pub seed: Option<i64>,
    pub generator: Generator,
    pub style: RenderStyle,
    /// File the log is written to.
    pub log_file: PathBuf,
    pub log_level: Level,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            size: 16,
            seed: None,
            generator: Generator::default(),
            style: RenderStyle::default(),
            log_file: PathBuf::from("mazeseed.log"),
            log_level: Level::INFO,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// An option that needs a value was the last argument.
    MissingValue(String),
    /// An option value could not be parsed.
    InvalidValue { option: String, value: String },
    UnknownOption(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingValue(option) => write!(f, "missing value for {option}"),
            Self::InvalidValue { option, value } => {
                write!(f, "invalid value '{value}' for {option}")
            }
            Self::UnknownOption(option) => write!(f, "unknown option '{option}'"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl Config {
    /// Usage text printed for `--help` and after argument errors.
    pub const USAGE: &'static str = "Usage: mazeseed [--size N] [--seed S] [--strategy branch|room] \
         [--style ascii|unicode] [--log-file PATH] [--verbose]";

    /// Parses long options from the arguments that follow the executable name.
    /// `MAZESEED_DEBUG=1` in the environment raises the log level to debug.
    pub fn from_args(args: impl IntoIterator<Item = String>) -> Result<Self, ConfigError> {
        let mut config = Config::default();
        if matches!(std::env::var("MAZESEED_DEBUG"), Ok(val) if val == "1") {
            config.log_level = Level::DEBUG;
        }

        let mut args = args.into_iter();
        while let Some(option) = args.next() {
            if option == "--verbose" {
                config.log_level = Level::TRACE;
                continue;
            }
            let value = match option.as_str() {
                "--size" | "--seed" | "--strategy" | "--style" | "--log-file" => args
                    .next()
                    .ok_or_else(|| ConfigError::MissingValue(option.clone()))?,
                _ => return Err(ConfigError::UnknownOption(option)),
            };
            let invalid = || ConfigError::InvalidValue {
                option: option.clone(),
                value: value.clone(),
            };
            match option.as_str() {
                "--size" => config.size = value.parse().map_err(|_| invalid())?,
                "--seed" => config.seed = Some(value.parse().map_err(|_| invalid())?),
                "--strategy" => config.generator = value.parse().map_err(|_| invalid())?,
                "--style" => {
                    config.style = match value.as_str() {
                        "ascii" => RenderStyle::Ascii,
                        "unicode" => RenderStyle::Unicode,
                        _ => return Err(invalid()),
                    }
                }
                _ => config.log_file = PathBuf::from(&value),
            }
        }
        Ok(config)
    }
}
