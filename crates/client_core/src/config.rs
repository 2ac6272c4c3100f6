use std::{collections::HashMap, fs, path::Path};

use anyhow::{bail, Context};
use serde::Deserialize;
use url::Url;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080/api";
pub const SETTINGS_FILE: &str = "dashboard.toml";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Settings {
    pub api_base_url: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.into(),
        }
    }
}

impl Settings {
    pub fn with_api_base_url(mut self, api_base_url: Option<String>) -> Self {
        if let Some(v) = api_base_url {
            self.api_base_url = v;
        }
        self
    }

    pub fn validated_base_url(&self) -> anyhow::Result<Url> {
        let raw = self.api_base_url.trim();
        let url = Url::parse(raw).with_context(|| format!("invalid api base url '{raw}'"))?;
        if !matches!(url.scheme(), "http" | "https") {
            bail!("api base url '{raw}' must use http or https");
        }
        if url.cannot_be_a_base() {
            bail!("api base url '{raw}' cannot carry endpoint paths");
        }
        Ok(url)
    }
}

pub fn load_settings() -> Settings {
    load_settings_from(Path::new(SETTINGS_FILE), |key| std::env::var(key).ok())
}

pub(crate) fn load_settings_from(
    file: &Path,
    env: impl Fn(&str) -> Option<String>,
) -> Settings {
    let mut settings = Settings::default();

    if let Ok(raw) = fs::read_to_string(file) {
        if let Ok(file_cfg) = toml::from_str::<HashMap<String, String>>(&raw) {
            if let Some(v) = file_cfg.get("api_base_url") {
                settings.api_base_url = v.clone();
            }
        }
    }

    if let Some(v) = env("WAREHOUSE_API_URL") {
        settings.api_base_url = v;
    }
    if let Some(v) = env("APP__API_BASE_URL") {
        settings.api_base_url = v;
    }

    settings
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
