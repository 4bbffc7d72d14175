//! Configuration stored in ~/.dealflow/config.json.

use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::PipelineError;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Record store base URL including the base path, e.g.
    /// `https://api.example.com/v0/appXXXX`.
    pub store_url: String,
    pub store_api_key: String,
    #[serde(default = "default_table")]
    pub store_table: String,

    /// Build-orchestration service base URL.
    pub build_service_url: String,

    /// Completion endpoint base URL (chat-completions wire format).
    pub ai_url: String,
    pub ai_api_key: String,
    #[serde(default = "default_model")]
    pub ai_model: String,

    /// Display name recorded as the acting user on approvals/rejections.
    /// Absent falls back to "Unknown User" — never blocks the action.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
}

fn default_table() -> String {
    "Jobs".to_string()
}

fn default_model() -> String {
    "gpt-4o-mini".to_string()
}

fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".dealflow").join("config.json"))
}

/// Load configuration from ~/.dealflow/config.json.
pub fn load_config() -> Result<Config, PipelineError> {
    let path = config_path()
        .ok_or_else(|| PipelineError::Configuration("cannot resolve home directory".into()))?;
    let raw = fs::read_to_string(&path).map_err(|e| {
        PipelineError::Configuration(format!("cannot read {}: {}", path.display(), e))
    })?;
    serde_json::from_str(&raw)
        .map_err(|e| PipelineError::Configuration(format!("invalid config: {}", e)))
}
