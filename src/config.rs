use anyhow::Result;
use figment::{providers::{Env, Format, Toml}, Figment};
use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub predictor: PredictorConfig,
    pub cache: CacheConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PredictorConfig {
    /// Script handed to the resolved runtime as its first argument.
    pub script: PathBuf,
    /// Executable names probed in order before the venv-relative fallback.
    pub runtime_candidates: Vec<String>,
    /// Hard wall-clock limit on one predictor run.
    pub timeout_seconds: u64,
    pub cache_ttl_seconds: u64,
}

impl Default for PredictorConfig {
    fn default() -> Self {
        Self {
            script: PathBuf::from("ml/node_service.py"),
            runtime_candidates: vec!["python3".into(), "python".into(), "py".into()],
            timeout_seconds: 45,
            cache_ttl_seconds: 3600,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// TTL for forecasts anchored to the current month or later; strictly
    /// past targets cache without expiry.
    pub live_ttl_seconds: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            live_ttl_seconds: 600,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let figment = Figment::new()
            .merge(Toml::file("config/default.toml"))
            .merge(Env::prefixed("ECOSPHERE__").split("__"));
        Ok(figment.extract()?)
    }
}
