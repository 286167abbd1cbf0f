use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Configuration for the pms module (`modules.pms`).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PmsConfig {
    /// Session slot file, relative to the home dir unless absolute.
    #[serde(default = "default_session_file")]
    pub session_file: String,
    /// Simulated authentication round trip.
    #[serde(default = "default_auth_delay_ms")]
    pub auth_delay_ms: u64,
    #[serde(default = "default_analytics_base_url")]
    pub analytics_base_url: String,
    #[serde(default = "default_analytics_timeout_ms")]
    pub analytics_timeout_ms: u64,
    #[serde(default = "default_export_dir")]
    pub export_dir: String,
    #[serde(default = "default_report_period")]
    pub default_report_period: String,
}

impl Default for PmsConfig {
    fn default() -> Self {
        Self {
            session_file: default_session_file(),
            auth_delay_ms: default_auth_delay_ms(),
            analytics_base_url: default_analytics_base_url(),
            analytics_timeout_ms: default_analytics_timeout_ms(),
            export_dir: default_export_dir(),
            default_report_period: default_report_period(),
        }
    }
}

impl PmsConfig {
    pub fn auth_delay(&self) -> Duration {
        Duration::from_millis(self.auth_delay_ms)
    }

    pub fn analytics_timeout(&self) -> Duration {
        Duration::from_millis(self.analytics_timeout_ms)
    }

    pub fn session_path(&self, home: &Path) -> PathBuf {
        home.join(&self.session_file)
    }

    pub fn export_path(&self, home: &Path) -> PathBuf {
        home.join(&self.export_dir)
    }
}

fn default_session_file() -> String {
    "pms_user.json".to_string()
}

fn default_auth_delay_ms() -> u64 {
    1000
}

fn default_analytics_base_url() -> String {
    "http://localhost:3000".to_string()
}

fn default_analytics_timeout_ms() -> u64 {
    5000
}

fn default_export_dir() -> String {
    "exports".to_string()
}

fn default_report_period() -> String {
    "q1-2024".to_string()
}
