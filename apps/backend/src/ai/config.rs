//! Oracle configuration.
//!
//! Read from the environment by the server and simulator, or deserialized
//! from JSON when a caller wants to build one by hand.

use std::env;
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::AiError;

/// Which oracle implementation to construct.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OracleKind {
    OpenAi,
    Scripted,
}

impl FromStr for OracleKind {
    type Err = AiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "openai" => Ok(OracleKind::OpenAi),
            "scripted" => Ok(OracleKind::Scripted),
            other => Err(AiError::Config(format!(
                "Unknown oracle '{other}', expected openai or scripted"
            ))),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OracleConfig {
    #[serde(default = "default_kind")]
    pub kind: OracleKind,
    #[serde(default, skip_serializing)]
    pub api_key: Option<String>,
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_temperature")]
    pub temperature: f32,
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Responses replayed by the scripted oracle, in order.
    #[serde(default)]
    pub script: Vec<String>,
}

fn default_kind() -> OracleKind {
    OracleKind::OpenAi
}

fn default_model() -> String {
    "gpt-3.5-turbo".to_string()
}

fn default_temperature() -> f32 {
    0.9
}

fn default_base_url() -> String {
    "https://api.openai.com/v1".to_string()
}

fn default_timeout_secs() -> u64 {
    60
}

impl Default for OracleConfig {
    fn default() -> Self {
        Self {
            kind: default_kind(),
            api_key: None,
            model: default_model(),
            temperature: default_temperature(),
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            script: Vec::new(),
        }
    }
}

impl OracleConfig {
    /// Build from `HANABI_ORACLE*` and `OPENAI_API_KEY`.
    pub fn from_env() -> Result<Self, AiError> {
        let mut config = Self::default();
        if let Ok(kind) = env::var("HANABI_ORACLE") {
            config.kind = kind.parse()?;
        }
        config.api_key = env::var("OPENAI_API_KEY").ok().filter(|k| !k.is_empty());
        if let Ok(model) = env::var("HANABI_ORACLE_MODEL") {
            config.model = model;
        }
        if let Ok(raw) = env::var("HANABI_ORACLE_TEMPERATURE") {
            config.temperature = raw.parse().map_err(|_| {
                AiError::Config(format!("HANABI_ORACLE_TEMPERATURE is not a number: '{raw}'"))
            })?;
        }
        if let Ok(url) = env::var("HANABI_ORACLE_BASE_URL") {
            config.base_url = url;
        }
        if let Ok(raw) = env::var("HANABI_ORACLE_TIMEOUT_SECS") {
            config.timeout_secs = raw.parse().map_err(|_| {
                AiError::Config(format!("HANABI_ORACLE_TIMEOUT_SECS is not an integer: '{raw}'"))
            })?;
        }
        Ok(config)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Chat-completions endpoint under the configured base URL.
    pub fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.base_url.trim_end_matches('/'))
    }
}
