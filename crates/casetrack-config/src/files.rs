//! File server configuration.

use serde::{Deserialize, Serialize};

fn default_base_url() -> String {
    "http://paket2.kejaksaan.info:5025/".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FilesConfig {
    /// Base URL prefixed to stored relative document paths in responses.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl Default for FilesConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

impl FilesConfig {
    /// Whether the base URL uses an http(s) scheme.
    pub fn has_http_scheme(&self) -> bool {
        self.base_url.starts_with("http://") || self.base_url.starts_with("https://")
    }
}
