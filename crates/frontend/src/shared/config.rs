use crate::shared::api_utils::{api_base, join_url};
use contracts::domain::a004_catalog::upload::SignedUpload;
use serde::Deserialize;
use std::collections::HashMap;

#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub pagination: PaginationConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
pub struct ApiConfig {
    /// Empty means "same host as the page, port 3000"
    #[serde(default)]
    pub base_url: String,
    /// Per-feature host, keyed by `categories`, `subcategories`, `gallery`,
    /// `catalog`, `metrics` or `auth`
    #[serde(default)]
    pub overrides: HashMap<String, String>,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct StorageConfig {
    #[serde(default)]
    pub base_url: String,
    #[serde(default = "default_bucket")]
    pub bucket: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            bucket: default_bucket(),
        }
    }
}

fn default_bucket() -> String {
    "catalog".to_string()
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
pub struct PaginationConfig {
    #[serde(default = "default_page_size")]
    pub category_page_size: u32,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            category_page_size: default_page_size(),
        }
    }
}

fn default_page_size() -> u32 {
    8
}

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = r#"
[api]
base_url = ""

[api.overrides]

[storage]
base_url = ""
bucket = "catalog"

[pagination]
category_page_size = 8
"#;

pub fn parse_config(contents: &str) -> Result<Config, toml::de::Error> {
    toml::from_str(contents)
}

pub fn default_config() -> Config {
    parse_config(DEFAULT_CONFIG).unwrap_or_default()
}

/// Load configuration
///
/// Search order:
/// 1. `config.toml` served next to the bundle
/// 2. Falls back to embedded default config
pub async fn load_config() -> Config {
    match gloo_net::http::Request::get("config.toml").send().await {
        Ok(response) if response.ok() => match response.text().await {
            Ok(text) => match parse_config(&text) {
                Ok(config) => {
                    log::info!("Loaded config.toml");
                    return config;
                }
                Err(e) => log::warn!("config.toml is invalid: {}", e),
            },
            Err(e) => log::warn!("config.toml could not be read: {}", e),
        },
        Ok(response) => log::warn!("config.toml not found: HTTP {}", response.status()),
        Err(e) => log::warn!("config.toml request failed: {}", e),
    }

    log::info!("Using default embedded configuration");
    default_config()
}

impl Config {
    /// Host serving the feature `key`
    pub fn api_host(&self, key: &str) -> String {
        if let Some(host) = self.api.overrides.get(key).filter(|h| !h.trim().is_empty()) {
            return host.clone();
        }
        if !self.api.base_url.trim().is_empty() {
            return self.api.base_url.clone();
        }
        api_base()
    }

    pub fn endpoint(&self, key: &str, path: &str) -> String {
        join_url(&self.api_host(key), path)
    }

    /// Storage URL a signed upload is PUT to
    pub fn signed_upload_url(&self, signed: &SignedUpload) -> String {
        format!(
            "{}/storage/v1/object/upload/sign/{}/{}?token={}",
            self.storage.base_url.trim_end_matches('/'),
            self.storage.bucket,
            signed.path.trim_start_matches('/'),
            urlencoding::encode(&signed.token)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config: Result<Config, _> = parse_config(DEFAULT_CONFIG);
        assert!(config.is_ok());
        let config = config.unwrap();
        assert_eq!(config.storage.bucket, "catalog");
        assert_eq!(config.pagination.category_page_size, 8);
    }

    #[test]
    fn overrides_take_precedence() {
        let config = parse_config(
            r#"
            [api]
            base_url = "https://api.example.com"
            [api.overrides]
            gallery = "http://localhost:5000"
            "#,
        )
        .unwrap();
        assert_eq!(
            config.endpoint("gallery", "/api/gallery"),
            "http://localhost:5000/api/gallery"
        );
        assert_eq!(
            config.endpoint("categories", "/api/categories"),
            "https://api.example.com/api/categories"
        );
    }

    #[test]
    fn signed_upload_url_encodes_token() {
        let config = parse_config(
            r#"
            [storage]
            base_url = "https://store.example.com/"
            "#,
        )
        .unwrap();
        let url = config.signed_upload_url(&SignedUpload {
            path: "catalogs/1/a b.pdf".into(),
            token: "t+k/=".into(),
        });
        assert_eq!(
            url,
            "https://store.example.com/storage/v1/object/upload/sign/catalog/catalogs/1/a b.pdf?token=t%2Bk%2F%3D"
        );
    }
}
