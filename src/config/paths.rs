// SPDX-License-Identifier: MPL-2.0
//! Config directory resolution.
//!
//! # Resolution Order
//!
//! 1. **Explicit override** - parameter to [`config_dir_with_override`]
//! 2. **CLI argument** (`--config-dir`) - set via [`init_cli_override`]
//! 3. **Environment variable** (`ICED_BANNER_CONFIG_DIR`)
//! 4. **Platform default** - via `dirs` crate

use super::DEFAULT_APP_NAME;
use std::path::PathBuf;
use std::sync::OnceLock;

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "ICED_BANNER_CONFIG_DIR";

static CLI_CONFIG_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Records the `--config-dir` argument. Only the first call has an effect.
pub fn init_cli_override(config_dir: Option<String>) {
    if CLI_CONFIG_DIR.set(config_dir.map(PathBuf::from)).is_err() {
        tracing::warn!("config dir override already initialized");
    }
}

fn cli_config_dir() -> Option<PathBuf> {
    CLI_CONFIG_DIR.get().and_then(Clone::clone)
}

/// Returns the config directory.
///
/// Platform defaults:
/// - Linux: `~/.config/IcedBanner/`
/// - macOS: `~/Library/Application Support/IcedBanner/`
/// - Windows: `C:\Users\<User>\AppData\Roaming\IcedBanner\`
pub fn config_dir() -> Option<PathBuf> {
    config_dir_with_override(None)
}

/// Returns the config directory, preferring `override_path` when given.
pub fn config_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    if let Some(path) = override_path {
        return Some(path);
    }

    if let Some(path) = cli_config_dir() {
        return Some(path);
    }

    if let Ok(env_path) = std::env::var(ENV_CONFIG_DIR) {
        if !env_path.is_empty() {
            return Some(PathBuf::from(env_path));
        }
    }

    dirs::config_dir().map(|mut path| {
        path.push(DEFAULT_APP_NAME);
        path
    })
}
