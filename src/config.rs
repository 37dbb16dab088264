//! Client Configuration
//!
//! Compile-time settings and the context value that carries them.

use leptos::prelude::*;

/// Content API host
pub const API_BASE_URL: &str = "http://localhost:1337";

/// Reviews per list page
pub const PAGE_SIZE: u32 = 10;

/// API settings provided via context
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
    pub page_size: u32,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: API_BASE_URL.to_string(),
            page_size: PAGE_SIZE,
        }
    }
}

/// Get the API config from context, falling back to the built-in host
pub fn use_api_config() -> ApiConfig {
    use_context::<ApiConfig>().unwrap_or_default()
}
