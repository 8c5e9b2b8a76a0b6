use anyhow::Result;
use chrono::NaiveDate;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, Environment, Source};
use serde::{Deserialize, Deserializer};

use crate::constants::{
    CONFIG_FILE_NAME, DEFAULT_END_DATE, DEFAULT_FREQUENCY, DEFAULT_INTERVAL, DEFAULT_LOG_LEVEL,
    DEFAULT_START_DATE, ENV_NESTING_SEPARATOR, ENV_PREFIX,
};
use crate::error::{CoreError, CoreResult};

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub logging: LoggingConfig,
    pub rule: RuleConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

/// Raw recurrence rule as written in configuration.
///
/// Values are kept loosely typed here; `cadence-rule` turns them into a
/// `RecurrenceRule` and rejects unknown frequencies or weekday indices.
#[derive(Debug, Clone, Deserialize)]
pub struct RuleConfig {
    pub frequency: String,
    pub interval: i32,
    /// Weekday indices, 0 = Sunday.
    ///
    /// A single index is accepted as well as a list, since a one-item
    /// environment list such as `CADENCE_RULE__WEEKDAYS=6` arrives as a scalar.
    #[serde(default, deserialize_with = "one_or_many")]
    pub weekdays: Vec<u8>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany {
    One(u8),
    Many(Vec<u8>),
}

fn one_or_many<'de, D>(deserializer: D) -> std::result::Result<Vec<u8>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match OneOrMany::deserialize(deserializer)? {
        OneOrMany::One(index) => vec![index],
        OneOrMany::Many(indices) => indices,
    })
}

impl Settings {
    /// ## Summary
    /// Returns a configuration builder seeded with the built-in defaults.
    ///
    /// ## Errors
    /// Returns an error if a default value cannot be registered.
    fn defaults() -> CoreResult<ConfigBuilder<DefaultState>> {
        Ok(Config::builder()
            .set_default("logging.level", DEFAULT_LOG_LEVEL)?
            .set_default("rule.frequency", DEFAULT_FREQUENCY)?
            .set_default("rule.interval", i64::from(DEFAULT_INTERVAL))?
            .set_default("rule.start_date", DEFAULT_START_DATE.to_string())?
            .set_default("rule.end_date", DEFAULT_END_DATE.to_string())?)
    }

    /// ## Summary
    /// Returns the `CADENCE_*` environment source.
    fn environment() -> Environment {
        Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator(ENV_NESTING_SEPARATOR)
            .list_separator(",")
            .with_list_parse_key("rule.weekdays")
            .ignore_empty(true)
            .try_parsing(true)
    }

    /// ## Summary
    /// Layers a file source and then an environment source over the defaults.
    ///
    /// ## Errors
    /// Returns an error if building the configuration or deserializing it fails.
    fn layered<S>(file: S, env: Environment) -> CoreResult<Self>
    where
        S: Source + Send + Sync + 'static,
    {
        Ok(Self::defaults()?
            .add_source(file)
            .add_source(env)
            .build()?
            .try_deserialize::<Settings>()?)
    }

    /// ## Summary
    /// Loads configuration from `cadence.toml` and `CADENCE_*` environment variables into a `Settings`.
    /// Environment variables take precedence over file values.
    ///
    /// ## Errors
    /// Returns an error if building the configuration or deserializing it fails.
    pub fn load() -> CoreResult<Self> {
        Self::layered(
            config::File::with_name(CONFIG_FILE_NAME).required(false),
            Self::environment(),
        )
    }
}

/// ## Summary
/// Loads configuration from environment variables and `.env` file.
///
/// ## Errors
/// Returns an error if loading or deserializing the configuration fails.
pub fn load_config() -> Result<Settings> {
    dotenvy::dotenv().ok();

    let settings = Settings::load()?;
    tracing::debug!(rule = ?settings.rule, "Rule configuration resolved");

    Ok(settings)
}

impl From<config::ConfigError> for CoreError {
    fn from(err: config::ConfigError) -> Self {
        Self::ConfigError(err.to_string())
    }
}
