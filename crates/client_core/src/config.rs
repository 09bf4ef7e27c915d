use std::{fs, path::Path, time::Duration};

use anyhow::{bail, Context};
use serde::Deserialize;

pub const DEFAULT_CONFIG_PATH: &str = "shortener.toml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Root of the shortening service; `/api/v1/shorten` is appended.
    pub endpoint: String,
    pub request_timeout_secs: u64,
    /// How long the copy button shows its confirmation.
    pub copy_revert_ms: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            endpoint: "http://localhost:8000".into(),
            request_timeout_secs: 10,
            copy_revert_ms: 2000,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct FileSettings {
    endpoint: Option<String>,
    request_timeout_secs: Option<u64>,
    copy_revert_ms: Option<u64>,
}

impl Settings {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn copy_revert_delay(&self) -> Duration {
        Duration::from_millis(self.copy_revert_ms)
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        let parsed = url::Url::parse(&self.endpoint)
            .with_context(|| format!("invalid shortener endpoint '{}'", self.endpoint))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            bail!(
                "shortener endpoint must use http or https, got '{}'",
                parsed.scheme()
            );
        }
        if self.request_timeout_secs == 0 {
            bail!("request_timeout_secs must be greater than zero");
        }
        Ok(())
    }

    fn apply_file(&mut self, file_cfg: FileSettings) {
        if let Some(v) = file_cfg.endpoint {
            self.endpoint = v;
        }
        if let Some(v) = file_cfg.request_timeout_secs {
            self.request_timeout_secs = v;
        }
        if let Some(v) = file_cfg.copy_revert_ms {
            self.copy_revert_ms = v;
        }
    }

    fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(v) = lookup("SHORTENER_ENDPOINT") {
            self.endpoint = v;
        }
        if let Some(v) = lookup("APP__ENDPOINT") {
            self.endpoint = v;
        }
        if let Some(parsed) = lookup("APP__REQUEST_TIMEOUT_SECS").and_then(|v| v.parse().ok()) {
            self.request_timeout_secs = parsed;
        }
        if let Some(parsed) = lookup("APP__COPY_REVERT_MS").and_then(|v| v.parse().ok()) {
            self.copy_revert_ms = parsed;
        }
    }
}

/// Defaults, then `shortener.toml` (or `$SHORTENER_CONFIG`), then environment.
pub fn load_settings() -> anyhow::Result<Settings> {
    let path = std::env::var("SHORTENER_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.into());
    load_settings_from(Path::new(&path), |key| std::env::var(key).ok())
}

pub fn load_settings_from(
    path: &Path,
    lookup: impl Fn(&str) -> Option<String>,
) -> anyhow::Result<Settings> {
    let mut settings = Settings::default();

    if path.exists() {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file '{}'", path.display()))?;
        let file_cfg: FileSettings = toml::from_str(&raw)
            .with_context(|| format!("failed to parse config file '{}'", path.display()))?;
        settings.apply_file(file_cfg);
    }

    settings.apply_env(lookup);
    settings.validate()?;
    Ok(settings)
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
