//! Frontend configuration module
//!
//! This module provides configuration for frontend-specific URLs and
//! settings.

/// Frontend configuration for URLs and external endpoints
#[derive(Debug, Clone)]
pub struct FrontendConfig {
    /// Base URL all API requests are issued under
    pub api_base_url: String,
}

impl Default for FrontendConfig {
    fn default() -> Self {
        Self {
            api_base_url: option_env!("SNAPLINE_API_BASE_URL")
                .unwrap_or("/api")
                .to_string(),
        }
    }
}

impl FrontendConfig {
    /// Create a new frontend configuration instance
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the API base URL
    pub fn api_base_url(&self) -> &str {
        &self.api_base_url
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_frontend_config_default() {
        let config = FrontendConfig::default();
        assert!(!config.api_base_url.is_empty());
    }

    #[wasm_bindgen_test]
    fn test_frontend_config_new() {
        let config = FrontendConfig::new();
        assert!(!config.api_base_url().is_empty());
    }

    #[wasm_bindgen_test]
    fn test_frontend_config_clone() {
        let config1 = FrontendConfig::new();
        let config2 = config1.clone();
        assert_eq!(config1.api_base_url(), config2.api_base_url());
    }

    #[wasm_bindgen_test]
    fn test_frontend_config_debug() {
        let config = FrontendConfig::new();
        let debug_str = format!("{:?}", config);
        assert!(debug_str.contains("FrontendConfig"));
        assert!(debug_str.contains("api_base_url"));
    }
}
