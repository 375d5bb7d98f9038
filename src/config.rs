use anyhow::{bail, Context, Result};
use reqwest::Url;

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";
pub const BASE_URL_ENV: &str = "LOSTFOUND_BASE_URL";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointPaths {
    pub passed: String,
    pub failed: String,
    pub pending: String,
    pub districts: String,
    pub categories: String,
    pub login: String,
    pub register: String,
    pub add_item: String,
    pub search_item: String,
}

impl Default for EndpointPaths {
    fn default() -> Self {
        Self {
            passed: "/passed".to_string(),
            failed: "/failed".to_string(),
            pending: "/admin/pending".to_string(),
            districts: "/static/json/Taiwan_dist.json".to_string(),
            categories: "/static/json/categories.json".to_string(),
            login: "/login".to_string(),
            register: "/register".to_string(),
            add_item: "/add".to_string(),
            search_item: "/search".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub base_url: Url,
    pub paths: EndpointPaths,
}

impl AppConfig {
    pub fn from_base_url(raw: &str) -> Result<Self> {
        let base_url = Url::parse(raw.trim())
            .with_context(|| format!("無效的伺服器位址：{raw}"))?;
        if base_url.cannot_be_a_base() || !matches!(base_url.scheme(), "http" | "https") {
            bail!("伺服器位址必須是 http 或 https：{raw}");
        }
        Ok(Self {
            base_url,
            paths: EndpointPaths::default(),
        })
    }

    pub fn load() -> Result<Self> {
        let raw = crate::platform::current::default_base_url()?;
        Self::from_base_url(&raw)
    }
}

/// Base URL for builds that are not running inside a browser page.
#[allow(dead_code)]
pub fn env_base_url() -> String {
    std::env::var(BASE_URL_ENV)
        .ok()
        .filter(|value| !value.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
}
