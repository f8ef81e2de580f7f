use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::core::DEFAULT_TOP_K;
use crate::models::ScoringWeights;

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub dataset: DatasetSettings,
    #[serde(default)]
    pub recommendation: RecommendationSettings,
    #[serde(default)]
    pub scoring: ScoringSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub workers: Option<usize>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: None,
        }
    }
}

fn default_host() -> String { "0.0.0.0".to_string() }
fn default_port() -> u16 { 8080 }

#[derive(Debug, Clone, Deserialize)]
pub struct DatasetSettings {
    #[serde(default = "default_internships_path")]
    pub internships_path: PathBuf,
    pub students_path: Option<PathBuf>,
}

impl Default for DatasetSettings {
    fn default() -> Self {
        Self {
            internships_path: default_internships_path(),
            students_path: None,
        }
    }
}

fn default_internships_path() -> PathBuf { PathBuf::from("data/internships.json") }

#[derive(Debug, Clone, Deserialize)]
pub struct RecommendationSettings {
    #[serde(default = "default_top_k")]
    pub default_top_k: usize,
    #[serde(default = "default_max_top_k")]
    pub max_top_k: usize,
}

impl Default for RecommendationSettings {
    fn default() -> Self {
        Self {
            default_top_k: default_top_k(),
            max_top_k: default_max_top_k(),
        }
    }
}

impl RecommendationSettings {
    /// Resolve a caller-supplied count against the configured default and cap
    pub fn resolve_top_k(&self, requested: Option<usize>) -> usize {
        requested.unwrap_or(self.default_top_k).min(self.max_top_k)
    }
}

fn default_top_k() -> usize { DEFAULT_TOP_K }
fn default_max_top_k() -> usize { 50 }

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScoringSettings {
    #[serde(default)]
    pub weights: WeightsConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WeightsConfig {
    #[serde(default = "default_skill_weight")]
    pub skill: u32,
    #[serde(default = "default_location_weight")]
    pub location: u32,
    #[serde(default = "default_intern_type_weight")]
    pub intern_type: u32,
}

impl Default for WeightsConfig {
    fn default() -> Self {
        Self {
            skill: default_skill_weight(),
            location: default_location_weight(),
            intern_type: default_intern_type_weight(),
        }
    }
}

impl From<&WeightsConfig> for ScoringWeights {
    fn from(config: &WeightsConfig) -> Self {
        Self {
            skill: config.skill,
            location: config.location,
            intern_type: config.intern_type,
        }
    }
}

fn default_skill_weight() -> u32 { 10 }
fn default_location_weight() -> u32 { 50 }
fn default_intern_type_weight() -> u32 { 20 }

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with INTERN_)
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., INTERN__SERVER__PORT -> server.port
            .add_source(environment())
            .build()?;

        let settings = substitute_env_vars(settings)?;

        settings.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(environment())
            .build()?;

        settings.try_deserialize()
    }

    pub fn scoring_weights(&self) -> ScoringWeights {
        ScoringWeights::from(&self.scoring.weights)
    }
}

fn environment() -> Environment {
    Environment::with_prefix("INTERN")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}

/// Apply the short-form dataset path variables on top of the loaded config
///
/// `INTERNSHIPS_PATH` and `STUDENTS_PATH` win over anything set in files.
fn substitute_env_vars(settings: Config) -> Result<Config, ConfigError> {
    use std::env;

    let mut builder = Config::builder().add_source(settings);

    if let Ok(path) = env::var("INTERNSHIPS_PATH") {
        builder = builder.set_override("dataset.internships_path", path)?;
    }
    if let Ok(path) = env::var("STUDENTS_PATH") {
        builder = builder.set_override("dataset.students_path", path)?;
    }
    if let Ok(format) = env::var("LOG_FORMAT") {
        builder = builder.set_override("logging.format", format)?;
    }

    builder.build()
}
