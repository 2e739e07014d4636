use std::{
    fmt,
    path::{Path, PathBuf},
    str::FromStr,
    sync::Arc,
    time::Duration,
};

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

use crate::{
    http::HttpRegistrationClient,
    service::{RegistrationService, SimulatedRegistration, DEFAULT_SIMULATED_DELAY},
    validation::ValidationRules,
};

fn deserialize_fromstr<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    <T as FromStr>::Err: std::fmt::Display,
{
    let string = String::deserialize(deserializer)?;
    T::from_str(&string)
        .map_err(|e| de::Error::custom(format!("Error parsing '{}': {}", string, e)))
}

pub fn serialize_to_string<T: std::fmt::Display, S: Serializer>(
    field: T,
    s: S,
) -> Result<S::Ok, S::Error> {
    s.serialize_str(&field.to_string())
}

fn deserialize_millis<'de, D>(deserializer: D) -> Result<Duration, D::Error>
where
    D: Deserializer<'de>,
{
    let millis = u64::deserialize(deserializer)?;
    Ok(Duration::from_millis(millis))
}

pub fn serialize_millis<S: Serializer>(duration: &Duration, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_u64(duration.as_millis() as u64)
}

fn default_loglevel() -> log::LevelFilter {
    log::LevelFilter::Info
}

fn default_delay() -> Duration {
    DEFAULT_SIMULATED_DELAY
}

/// Settings of the simulated registration service.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SimulatedConfig {
    #[serde(
        rename = "delay_ms",
        default = "default_delay",
        deserialize_with = "deserialize_millis",
        serialize_with = "serialize_millis"
    )]
    pub delay: Duration,
}

impl Default for SimulatedConfig {
    fn default() -> Self {
        Self {
            delay: default_delay(),
        }
    }
}

/// Settings of a JSON HTTP registration API.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct HttpConfig {
    pub url: String,
}

/// Where registrations are sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendConfig {
    /// No network call, every registration succeeds after `delay`.
    Simulated { delay: Duration },
    /// Registrations are posted to `<url>/auth/register`.
    Http { url: String },
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self::Simulated {
            delay: default_delay(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Config {
    /// What messages to log
    #[serde(
        deserialize_with = "deserialize_fromstr",
        serialize_with = "serialize_to_string",
        default = "default_loglevel"
    )]
    pub log_level: log::LevelFilter,
    /// A file to read the terms of use from, instead of the bundled ones.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub terms_path: Option<PathBuf>,
    #[serde(default)]
    pub validation: ValidationRules,
    /// Settings specific to the simulated backend, the default one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub simulated_backend: Option<SimulatedConfig>,
    /// Settings specific to the HTTP backend.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub http_backend: Option<HttpConfig>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: default_loglevel(),
            terms_path: None,
            validation: ValidationRules::default(),
            simulated_backend: None,
            http_backend: None,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Could not read configuration file '{0}': {1}")]
    ReadingFile(PathBuf, std::io::Error),
    #[error("Parsing configuration file: {0}")]
    Parsing(#[from] toml::de::Error),
    #[error("Invalid configuration: {0}")]
    Invalid(String),
    #[error("Could not read terms of use '{0}': {1}")]
    ReadingTerms(PathBuf, std::io::Error),
}

impl Config {
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(content)?;
        config.check()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::ReadingFile(path.to_path_buf(), e))?;
        Self::from_toml(&content)
    }

    /// Same as [`Config::from_file`], but a missing file means the default
    /// configuration.
    pub fn from_file_or_default(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            log::info!(
                "No configuration file at '{}', using defaults",
                path.display()
            );
            return Ok(Self::default());
        }
        Self::from_file(path)
    }

    fn check(&self) -> Result<(), ConfigError> {
        if self.validation.min_password_length == Some(0) {
            return Err(ConfigError::Invalid(
                "'min_password_length' must be strictly positive".to_string(),
            ));
        }
        if self.simulated_backend.is_some() && self.http_backend.is_some() {
            return Err(ConfigError::Invalid(
                "only one of 'simulated_backend' and 'http_backend' can be set".to_string(),
            ));
        }
        if let Some(HttpConfig { url }) = &self.http_backend {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(ConfigError::Invalid(format!(
                    "backend url '{}' must start with http:// or https://",
                    url
                )));
            }
        }
        Ok(())
    }

    /// The backend registrations are sent to, simulated if none is set.
    pub fn backend(&self) -> BackendConfig {
        match (&self.http_backend, &self.simulated_backend) {
            (Some(http), _) => BackendConfig::Http {
                url: http.url.clone(),
            },
            (None, Some(simulated)) => BackendConfig::Simulated {
                delay: simulated.delay,
            },
            (None, None) => BackendConfig::default(),
        }
    }

    pub fn service(&self) -> Arc<dyn RegistrationService> {
        match self.backend() {
            BackendConfig::Simulated { delay } => Arc::new(SimulatedRegistration::new(delay)),
            BackendConfig::Http { url } => Arc::new(HttpRegistrationClient::new(url)),
        }
    }

    /// The terms of use from `terms_path`, `None` if it is not set.
    pub fn terms(&self) -> Result<Option<String>, ConfigError> {
        self.terms_path
            .as_ref()
            .map(|path| {
                std::fs::read_to_string(path)
                    .map_err(|e| ConfigError::ReadingTerms(path.clone(), e))
            })
            .transpose()
    }
}

impl fmt::Display for BackendConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Simulated { delay } => write!(f, "simulated ({:?})", delay),
            Self::Http { url } => write!(f, "{}", url),
        }
    }
}
