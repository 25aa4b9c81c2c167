use anyhow::Result;
use chrono_tz::Tz;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, FileFormat};
use serde::Deserialize;

use crate::constants::{DEFAULT_CHARSET, DEFAULT_FILENAME, DEFAULT_SUMMARY, DEFAULT_TIMEZONE};
use crate::error::{CoreError, CoreResult};
use crate::types::OutputFormat;


#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub output: OutputConfig,
    pub calendar: CalendarConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub charset: String,
    pub filename: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CalendarConfig {
    pub timezone: String,
    pub summary: String,
}

impl CalendarConfig {
    /// ## Summary
    /// Resolves the configured IANA timezone name.
    ///
    /// ## Errors
    /// Returns `CoreError::InvalidConfiguration` if the name is not a known timezone.
    pub fn tz(&self) -> CoreResult<Tz> {
        self.timezone.parse::<Tz>().map_err(|e| {
            CoreError::InvalidConfiguration(format!("calendar.timezone `{}`: {e}", self.timezone))
        })
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            output: OutputConfig {
                format: OutputFormat::default(),
                charset: DEFAULT_CHARSET.to_string(),
                filename: DEFAULT_FILENAME.to_string(),
            },
            calendar: CalendarConfig {
                timezone: DEFAULT_TIMEZONE.to_string(),
                summary: DEFAULT_SUMMARY.to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
            },
        }
    }
}

impl Settings {
    /// ## Summary
    /// Loads configuration from `cardcast.toml` and `CARDCAST__`-prefixed environment variables.
    /// Environment variables take precedence over file values.
    ///
    /// ## Errors
    /// Returns an error if building the configuration or deserializing it fails.
    pub fn load() -> Result<Self> {
        let settings = Self::with_defaults()?
            // TOML file
            .add_source(config::File::with_name("cardcast").required(false))
            // Env
            .add_source(
                config::Environment::with_prefix("CARDCAST")
                    .prefix_separator("__")
                    .separator("__")
                    .ignore_empty(true),
            )
            .build()?
            .try_deserialize::<Settings>()?;

        settings.validate()?;
        Ok(settings)
    }

    /// ## Summary
    /// Loads configuration from a TOML document layered over the defaults.
    ///
    /// ## Errors
    /// Returns an error if the document is malformed or names an unknown timezone.
    pub fn from_toml(source: &str) -> Result<Self> {
        let settings = Self::with_defaults()?
            .add_source(config::File::from_str(source, FileFormat::Toml))
            .build()?
            .try_deserialize::<Settings>()?;

        settings.validate()?;
        Ok(settings)
    }

    fn with_defaults() -> Result<ConfigBuilder<DefaultState>> {
        Ok(Config::builder()
            .set_default("output.format", OutputFormat::default().as_str())?
            .set_default("output.charset", DEFAULT_CHARSET)?
            .set_default("output.filename", DEFAULT_FILENAME)?
            .set_default("calendar.timezone", DEFAULT_TIMEZONE)?
            .set_default("calendar.summary", DEFAULT_SUMMARY)?
            .set_default("logging.level", "info")?)
    }

    fn validate(&self) -> CoreResult<()> {
        self.calendar.tz()?;
        Ok(())
    }
}

/// ## Summary
/// Loads configuration from environment variables and `.env` file.
///
/// ## Errors
/// Returns an error if loading or deserializing the configuration fails.
pub fn load_config() -> Result<Settings> {
    dotenvy::dotenv().ok();

    Settings::load()
}
