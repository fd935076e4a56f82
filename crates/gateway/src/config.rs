use std::{collections::HashMap, fs};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct GatewaySettings {
    pub url: String,
    pub anon_key: String,
}

impl Default for GatewaySettings {
    fn default() -> Self {
        Self {
            url: "http://127.0.0.1:54321".into(),
            anon_key: String::new(),
        }
    }
}

/// Layered settings resolution: built-in defaults, then `site.toml` in the
/// working directory, then environment variables.
pub fn load_settings() -> GatewaySettings {
    let mut settings = GatewaySettings::default();

    if let Ok(raw) = fs::read_to_string("site.toml") {
        if let Ok(file_cfg) = toml::from_str::<HashMap<String, String>>(&raw) {
            if let Some(v) = file_cfg.get("gateway_url") {
                settings.url = v.clone();
            }
            if let Some(v) = file_cfg.get("gateway_anon_key") {
                settings.anon_key = v.clone();
            }
        }
    }

    if let Ok(v) = std::env::var("GATEWAY_URL") {
        settings.url = v;
    }
    if let Ok(v) = std::env::var("APP__GATEWAY_URL") {
        settings.url = v;
    }

    if let Ok(v) = std::env::var("GATEWAY_ANON_KEY") {
        settings.anon_key = v;
    }
    if let Ok(v) = std::env::var("APP__GATEWAY_ANON_KEY") {
        settings.anon_key = v;
    }

    settings.url = normalize_gateway_url(&settings.url);
    settings
}

fn normalize_gateway_url(raw: &str) -> String {
    let raw = raw.trim();
    if raw.is_empty() {
        return GatewaySettings::default().url;
    }
    if raw.contains("://") {
        return raw.to_string();
    }
    format!("https://{raw}")
}
