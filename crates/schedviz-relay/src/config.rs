//! Typed configuration for the relay pipeline.
//!
//! Mirrors the `relay` section of `schedviz-config.yaml`. All fields
//! have defaults, so a missing config file behaves exactly like a
//! hardcoded demo setup.

use std::path::PathBuf;

use serde::Deserialize;

/// Relay pipeline configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RelayConfig {
    /// Path to the pre-compiled scheduler executable. Invoked with no
    /// arguments; its stdout is the event source.
    #[serde(default = "default_executable")]
    pub executable: PathBuf,

    /// Pause between processed lines, in milliseconds.
    ///
    /// A presentation throttle so the browser animation is visible,
    /// not a correctness requirement.
    #[serde(default = "default_line_delay_ms")]
    pub line_delay_ms: u64,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            executable: default_executable(),
            line_delay_ms: default_line_delay_ms(),
        }
    }
}

fn default_executable() -> PathBuf {
    PathBuf::from("./os_project")
}

const fn default_line_delay_ms() -> u64 {
    100
}
