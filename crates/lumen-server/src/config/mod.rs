//! Server config loader (strict parsing).
//!
//! Every field has a default, so running without a file reproduces the stock
//! behavior: listen on `0.0.0.0:8080`, sample every 5s, JSON logs.

pub mod schema;

use std::fs;

use lumen_core::error::{LumenError, Result};

pub use schema::{LogFormat, LogSection, SamplerSection, ServerConfig, ServerSection};

/// Env var naming an optional YAML config file.
pub const CONFIG_ENV: &str = "LUMEN_CONFIG";

pub fn load_from_file(path: &str) -> Result<ServerConfig> {
    let s = fs::read_to_string(path)
        .map_err(|e| LumenError::Internal(format!("read config failed ({path}): {e}")))?;
    load_from_str(&s)
}

pub fn load_from_str(s: &str) -> Result<ServerConfig> {
    let cfg: ServerConfig = serde_yaml::from_str(s)
        .map_err(|e| LumenError::BadRequest(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}

/// Load from `$LUMEN_CONFIG` when set, otherwise defaults.
pub fn load_from_env() -> Result<ServerConfig> {
    match std::env::var(CONFIG_ENV) {
        Ok(path) if !path.is_empty() => load_from_file(&path),
        _ => Ok(ServerConfig::default()),
    }
}
