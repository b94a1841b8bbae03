//! Runtime configuration for the dashboard frontend.
//!
//! The host page may define `window.__FOCUSBOARD_CONFIG__` either as a plain
//! object or as a JSON string. Anything missing falls back to the defaults.

use leptos::prelude::window;
use serde::{Deserialize, Serialize};
use wasm_bindgen::JsValue;

use crate::error::ConfigError;

const CONFIG_GLOBAL: &str = "__FOCUSBOARD_CONFIG__";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AppConfig {
    /// Prefix for all backend calls, without a trailing slash.
    pub api_base: String,
    /// Avatar service; receives the display name as `?name=`.
    pub avatar_base_url: String,
    /// Where the panel sends the user after a successful logout.
    pub login_path: String,
    /// Viewports at least this wide get the docked layout.
    pub wide_breakpoint_px: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base: "/api".to_string(),
            avatar_base_url: "https://ui-avatars.com/api/".to_string(),
            login_path: "/login".to_string(),
            wide_breakpoint_px: 1024,
        }
    }
}

impl AppConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let mut config: AppConfig =
            serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.normalize();
        Ok(config)
    }

    fn from_js(value: JsValue) -> Result<Self, ConfigError> {
        if let Some(json) = value.as_string() {
            return Self::from_json(&json);
        }
        let mut config: AppConfig =
            serde_wasm_bindgen::from_value(value).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.normalize();
        Ok(config)
    }

    /// Read the config the host page injected, or the defaults.
    pub fn load() -> Self {
        let value = match js_sys::Reflect::get(&window(), &JsValue::from_str(CONFIG_GLOBAL)) {
            Ok(value) if !value.is_undefined() && !value.is_null() => value,
            _ => {
                tracing::debug!("no injected config, using defaults");
                return Self::default();
            }
        };

        match Self::from_js(value) {
            Ok(config) => {
                tracing::info!(api_base = %config.api_base, "loaded dashboard config");
                config
            }
            Err(e) => {
                tracing::warn!(error = %e, "ignoring malformed dashboard config");
                Self::default()
            }
        }
    }

    fn normalize(&mut self) {
        while self.api_base.ends_with('/') {
            self.api_base.pop();
        }
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.api_base, path.trim_start_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_uses_defaults() {
        let config = AppConfig::from_json("{}").expect("empty config should parse");
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_partial_override_keeps_other_defaults() {
        let json = r#"{"apiBase": "https://example.test/api/", "wideBreakpointPx": 900}"#;
        let config = AppConfig::from_json(json).expect("partial config should parse");
        assert_eq!(config.api_base, "https://example.test/api");
        assert_eq!(config.wide_breakpoint_px, 900);
        assert_eq!(config.login_path, "/login");
        assert_eq!(config.avatar_base_url, "https://ui-avatars.com/api/");
    }

    #[test]
    fn test_malformed_config_is_an_error() {
        let err = AppConfig::from_json(r#"{"wideBreakpointPx": "wide"}"#).unwrap_err();
        assert!(err.to_string().starts_with("Config parse error"));
    }

    #[test]
    fn test_endpoint_joins_with_single_slash() {
        let config = AppConfig::default();
        assert_eq!(config.endpoint("auth/me"), "/api/auth/me");
        assert_eq!(config.endpoint("/dashboard/summary"), "/api/dashboard/summary");
    }
}
