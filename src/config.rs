// src/config.rs
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result, bail};

use crate::services::gemini::{DEFAULT_BASE_URL, DEFAULT_MODEL};

#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub port: u16,
    pub model: String,
    pub gemini_base_url: String,
    pub manual_path: PathBuf,
    pub session_ttl: Duration,
    pub cors_origin: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let Some(api_key) = get("GOOGLEAPI").or_else(|| get("GEMINI_API_KEY")) else {
            bail!("GOOGLEAPI (or GEMINI_API_KEY) must be set");
        };

        let port: u16 = match get("PORT") {
            Some(p) => p.parse().with_context(|| format!("PORT is not a valid port: {p}"))?,
            None => 3000,
        };

        let ttl_secs: u64 = match get("SESSION_TTL_SECS") {
            Some(s) => s
                .parse()
                .with_context(|| format!("SESSION_TTL_SECS is not a number: {s}"))?,
            None => 24 * 60 * 60,
        };
        if ttl_secs == 0 {
            bail!("SESSION_TTL_SECS must be greater than zero");
        }

        Ok(Self {
            api_key,
            port,
            model: get("GEMINI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            gemini_base_url: get("GEMINI_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            manual_path: get("AI_MANUAL_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("./aiManual.txt")),
            session_ttl: Duration::from_secs(ttl_secs),
            cors_origin: get("CORS_ORIGIN").unwrap_or_else(|| "http://localhost:5173".to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> Result<Config> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|k| map.get(k).cloned())
    }

    #[test]
    fn defaults_apply() {
        let cfg = config(&[("GOOGLEAPI", "key")]).unwrap();
        assert_eq!(cfg.api_key, "key");
        assert_eq!(cfg.port, 3000);
        assert_eq!(cfg.model, "gemini-2.5-flash");
        assert_eq!(cfg.manual_path, PathBuf::from("./aiManual.txt"));
        assert_eq!(cfg.session_ttl, Duration::from_secs(86_400));
        assert_eq!(cfg.cors_origin, "http://localhost:5173");
    }

    #[test]
    fn api_key_is_required() {
        assert!(config(&[]).is_err());
        assert!(config(&[("GOOGLEAPI", "  ")]).is_err());
        assert_eq!(config(&[("GEMINI_API_KEY", "alt")]).unwrap().api_key, "alt");
    }

    #[test]
    fn overrides_and_bad_numbers() {
        let cfg = config(&[
            ("GOOGLEAPI", "key"),
            ("PORT", "8080"),
            ("SESSION_TTL_SECS", "60"),
            ("AI_MANUAL_PATH", "/etc/manual.txt"),
        ])
        .unwrap();
        assert_eq!(cfg.port, 8080);
        assert_eq!(cfg.session_ttl, Duration::from_secs(60));
        assert_eq!(cfg.manual_path, PathBuf::from("/etc/manual.txt"));

        assert!(config(&[("GOOGLEAPI", "key"), ("PORT", "http")]).is_err());
        assert!(config(&[("GOOGLEAPI", "key"), ("SESSION_TTL_SECS", "0")]).is_err());
    }
}
