//! Flow configuration: simulated operation timings and the entry screen.
//!
//! Defaults reproduce the shipped onboarding pacing. Native launchers may
//! override them with a `flow.json` next to their assets, e.g.
//! ```json
//! { "initial_screen": "email", "timings": { "splash_ms": 500 } }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::flow::Screen;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlowTimings {
    /// Splash auto-advance.
    pub splash_ms: u64,
    /// Simulated email check before the code is "sent".
    pub email_check_ms: u64,
    pub otp_verify_ms: u64,
    /// Pause on the verified state before moving on.
    pub otp_redirect_ms: u64,
    pub account_creation_ms: u64,
    pub permission_prompt_ms: u64,
    pub toast_ms: u64,
}

impl Default for FlowTimings {
    fn default() -> Self {
        Self {
            splash_ms: 3000,
            email_check_ms: 1000,
            otp_verify_ms: 1500,
            otp_redirect_ms: 1000,
            account_creation_ms: 1500,
            permission_prompt_ms: 800,
            toast_ms: 4000,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlowConfig {
    pub initial_screen: Screen,
    pub timings: FlowTimings,
}

impl Default for FlowConfig {
    fn default() -> Self {
        Self {
            initial_screen: Screen::Splash,
            timings: FlowTimings::default(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read flow config: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid flow config: {0}")]
    Json(#[from] serde_json::Error),
}

impl FlowConfig {
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Load `path` if it exists; a missing file means defaults.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(path)?;
        Self::from_json(&raw)
    }
}
