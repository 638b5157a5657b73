use std::time::Duration;
use anyhow::{bail, Context, Result};

use crate::env_keys::{EMOTION_API_TIMEOUT_SECS, EMOTION_API_URL, EMOTION_MODEL_ID, HOST, PORT};

pub const DEFAULT_EMOTION_API_URL: &str = "https://sn-watson-emotion.labs.skills.network/v1/watson.runtime.nlp.v1/NlpService/EmotionPredict";
pub const DEFAULT_MODEL_ID: &str = "emotion_aggregated-workflow_lang_en_stock";
pub const MODEL_ID_HEADER: &str = "grpc-metadata-mm-model-id";
pub const DEFAULT_TIMEOUT_SECS: u64 = 3;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 5000;


#[derive(Debug, Clone, PartialEq)]
pub struct DetectorConfig {
    pub host: String,
    pub port: u16,
    pub api_url: String,
    pub model_id: String,
    pub timeout: Duration,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_owned(),
            port: DEFAULT_PORT,
            api_url: DEFAULT_EMOTION_API_URL.to_owned(),
            model_id: DEFAULT_MODEL_ID.to_owned(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl DetectorConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    // Unset or empty keys keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let mut config = Self::default();

        if let Some(host) = get(HOST) {
            config.host = host;
        }
        if let Some(port) = get(PORT) {
            config.port = port.trim().parse().with_context(|| format!("Invalid {}: {}", PORT, port))?;
        }
        if let Some(url) = get(EMOTION_API_URL) {
            config.api_url = url;
        }
        if let Some(model_id) = get(EMOTION_MODEL_ID) {
            config.model_id = model_id;
        }
        if let Some(secs) = get(EMOTION_API_TIMEOUT_SECS) {
            let secs: f64 = secs.trim().parse().with_context(|| format!("Invalid {}: {}", EMOTION_API_TIMEOUT_SECS, secs))?;
            if secs.is_nan() || secs <= 0.0 {
                bail!("Invalid {}: {} (must be positive)", EMOTION_API_TIMEOUT_SECS, secs);
            }
            config.timeout = Duration::try_from_secs_f64(secs).with_context(|| format!("Invalid {}: {}", EMOTION_API_TIMEOUT_SECS, secs))?;
        }

        Ok(config)
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
