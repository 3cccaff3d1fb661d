// SPDX-License-Identifier: MPL-2.0
//! Stack geometry and option defaults, loadable from a `toasts.toml`.
//!
//! # Examples
//!
//! ```no_run
//! use toast_stack::config;
//! use std::path::Path;
//!
//! let mut config = config::load_from_path(Path::new("toasts.toml"))
//!     .unwrap_or_default();
//! config.gutter = 8.0;
//! config::save_to_path(&config, Path::new("toasts.toml")).expect("Failed to save config");
//! ```

use crate::error::Result;
use crate::options::OptionDefaults;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

/// Vertical gap in px between stacked toasts, and between the first toast
/// and its anchor edge.
pub const DEFAULT_GUTTER: f32 = 12.0;

/// Pause between a toast's visual close and its element's removal,
/// reserved for the exit transition.
pub const DEFAULT_GRACE_DELAY_MS: u64 = 1000;

/// Host-level configuration for a toast [`Manager`](crate::Manager).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StackConfig {
    /// Gap between stacked siblings, px.
    pub gutter: f32,
    /// Grace delay between close and unmount, milliseconds.
    pub grace_delay_ms: u64,
    /// Fallback for every unset per-toast option field.
    pub defaults: OptionDefaults,
}

impl Default for StackConfig {
    fn default() -> Self {
        Self {
            gutter: DEFAULT_GUTTER,
            grace_delay_ms: DEFAULT_GRACE_DELAY_MS,
            defaults: OptionDefaults::default(),
        }
    }
}

impl StackConfig {
    #[must_use]
    pub fn grace_delay(&self) -> Duration {
        Duration::from_millis(self.grace_delay_ms)
    }
}

/// Loads a config from `path`. Invalid TOML falls back to the defaults;
/// only I/O failures surface as errors.
pub fn load_from_path(path: &Path) -> Result<StackConfig> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content).unwrap_or_default())
}

/// Saves `config` to `path`, creating parent directories as needed.
pub fn save_to_path(config: &StackConfig, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
