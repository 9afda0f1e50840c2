//! General application configuration.

use casetrack_core::enums::UpdatePolicy;
use serde::{Deserialize, Serialize};

fn default_log_level() -> String {
    "info".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Default tracing filter when `CASETRACK_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// How partial-update bodies pick the fields to write.
    #[serde(default)]
    pub update_policy: UpdatePolicy,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            update_policy: UpdatePolicy::default(),
        }
    }
}
