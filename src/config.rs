use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

use crate::core::ResolvedWeights;

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub ranking: RankingSettings,
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
    /// Largest accepted JSON request body
    #[serde(default = "default_max_payload_bytes")]
    pub max_payload_bytes: usize,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: None,
            max_payload_bytes: default_max_payload_bytes(),
        }
    }
}

fn default_host() -> String { "0.0.0.0".to_string() }
fn default_port() -> u16 { 8080 }
fn default_max_payload_bytes() -> usize { 16 * 1024 * 1024 }

#[derive(Debug, Clone, Deserialize)]
pub struct RankingSettings {
    #[serde(default)]
    pub weights: WeightsConfig,
    /// Largest candidate pool a single request may submit
    #[serde(default = "default_max_candidates")]
    pub max_candidates: usize,
}

impl Default for RankingSettings {
    fn default() -> Self {
        Self {
            weights: WeightsConfig::default(),
            max_candidates: default_max_candidates(),
        }
    }
}

fn default_max_candidates() -> usize { 10_000 }

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct WeightsConfig {
    #[serde(default = "default_skills_weight")]
    pub skills: f64,
    #[serde(default = "default_experience_weight")]
    pub experience: f64,
    #[serde(default = "default_education_weight")]
    pub education: f64,
    #[serde(default = "default_location_weight")]
    pub location: f64,
    #[serde(default = "default_salary_weight")]
    pub salary: f64,
    #[serde(default = "default_availability_weight")]
    pub availability: f64,
}

impl Default for WeightsConfig {
    fn default() -> Self {
        Self {
            skills: default_skills_weight(),
            experience: default_experience_weight(),
            education: default_education_weight(),
            location: default_location_weight(),
            salary: default_salary_weight(),
            availability: default_availability_weight(),
        }
    }
}

impl From<WeightsConfig> for ResolvedWeights {
    fn from(config: WeightsConfig) -> Self {
        Self {
            skills: config.skills,
            experience: config.experience,
            education: config.education,
            location: config.location,
            salary: config.salary,
            availability: config.availability,
        }
    }
}

fn default_skills_weight() -> f64 { 40.0 }
fn default_experience_weight() -> f64 { 25.0 }
fn default_education_weight() -> f64 { 15.0 }
fn default_location_weight() -> f64 { 10.0 }
fn default_salary_weight() -> f64 { 5.0 }
fn default_availability_weight() -> f64 { 5.0 }

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
fn default_log_format() -> String { "compact".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with TALENT__)
    pub fn load() -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., TALENT__SERVER__PORT -> server.port
            .add_source(environment())
            .build()?
            .try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(environment())
            .build()?
            .try_deserialize()
    }
}

fn environment() -> Environment {
    Environment::with_prefix("TALENT")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}
