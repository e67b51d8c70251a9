use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::time::Duration;

/// Configuration from desk.toml. Every section is optional; an absent
/// file yields `DeskConfig::default()`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeskConfig {
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub motion: MotionConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UiConfig {
    /// Color overrides by theme slot name, as "#RRGGBB" strings
    #[serde(default)]
    pub colors: HashMap<String, String>,
}

/// Animation phase durations, in milliseconds
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MotionConfig {
    #[serde(default = "default_duration_ms")]
    pub launch_ms: u64,
    #[serde(default = "default_duration_ms")]
    pub fade_ms: u64,
}

impl Default for MotionConfig {
    fn default() -> Self {
        MotionConfig {
            launch_ms: default_duration_ms(),
            fade_ms: default_duration_ms(),
        }
    }
}

impl MotionConfig {
    pub fn launch_duration(&self) -> Duration {
        Duration::from_millis(self.launch_ms)
    }

    pub fn fade_duration(&self) -> Duration {
        Duration::from_millis(self.fade_ms)
    }
}

/// Both phases run 560ms unless overridden
fn default_duration_ms() -> u64 {
    560
}
