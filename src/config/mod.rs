// SPDX-License-Identifier: MPL-2.0
//! This module handles the crate's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! The configuration is organized into logical sections:
//! - `[general]` - Language
//! - `[banner]` - Auto-hide delay, default style, surface retry, app identity
//! - `[sound]` - Sound cue played when a banner appears
//! - `[gesture]` - Pan thresholds and landscape mirroring
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable deployments:
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Pass `--config-dir` or set the `ICED_BANNER_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use iced_banner::config::{self, Config};
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! // Modify a setting
//! config.banner.auto_hide_secs = Some(8.0);
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;
pub mod paths;

pub use defaults::*;

use crate::banner::BannerTimings;
use crate::error::{Error, Result};
use crate::gesture::GestureTuning;
use crate::notification::{AutoHide, BannerStyle, SoundCue};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

/// Warning key (i18n) reported when the config file could not be read.
pub const LOAD_WARNING_KEY: &str = "notification-config-load-error";

// =============================================================================
// Section Structs
// =============================================================================

/// General settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

/// Banner presentation settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BannerConfig {
    /// Seconds a collapsed banner stays visible. `0` keeps it until dismissed.
    #[serde(
        default = "default_auto_hide_secs",
        skip_serializing_if = "Option::is_none"
    )]
    pub auto_hide_secs: Option<f64>,

    /// Style used by the demo shell for new banners.
    #[serde(default)]
    pub style: BannerStyle,

    /// Wait before retrying when the host has no surface yet.
    #[serde(
        default = "default_surface_retry_secs",
        skip_serializing_if = "Option::is_none"
    )]
    pub surface_retry_secs: Option<f64>,

    /// Name shown in the banner header.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub app_name: Option<String>,

    /// Icon shown in the banner header. A bordered placeholder is drawn without one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon_path: Option<PathBuf>,
}

impl Default for BannerConfig {
    fn default() -> Self {
        Self {
            auto_hide_secs: default_auto_hide_secs(),
            style: BannerStyle::default(),
            surface_retry_secs: default_surface_retry_secs(),
            app_name: None,
            icon_path: None,
        }
    }
}

/// Sound played when a banner appears.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct SoundConfig {
    /// Resource name without extension. No sound without one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Resource type, e.g. `wav`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,

    #[serde(default)]
    pub vibrate: bool,
}

/// Gesture thresholds. Every field falls back to its default when missing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GestureConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub banner_height: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resting_y: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dismiss_edge: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_divisor: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub portrait_step: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub landscape_step: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latch_velocity: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unlatch_velocity: Option<f32>,

    /// Landscape surfaces are rotated the mirrored way (pan axis is `-x`).
    #[serde(default)]
    pub mirrored_landscape: bool,
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub banner: BannerConfig,

    #[serde(default)]
    pub sound: SoundConfig,

    #[serde(default)]
    pub gesture: GestureConfig,
}

impl Config {
    /// Auto-hide delay for new banners, clamped to `0..=MAX_AUTO_HIDE_SECS`.
    #[must_use]
    pub fn auto_hide(&self) -> AutoHide {
        let secs = self
            .banner
            .auto_hide_secs
            .filter(|secs| !secs.is_nan())
            .unwrap_or(DEFAULT_AUTO_HIDE_SECS)
            .min(MAX_AUTO_HIDE_SECS);
        AutoHide::from_secs(secs)
    }

    /// State machine timings with the configured surface retry delay.
    #[must_use]
    pub fn timings(&self) -> BannerTimings {
        let retry = self
            .banner
            .surface_retry_secs
            .filter(|secs| secs.is_finite())
            .unwrap_or(DEFAULT_SURFACE_RETRY_SECS)
            .clamp(MIN_SURFACE_RETRY_SECS, MAX_SURFACE_RETRY_SECS);
        BannerTimings {
            surface_retry: Duration::from_secs_f64(retry),
            ..BannerTimings::default()
        }
    }

    /// Gesture thresholds with defaults filled in.
    ///
    /// Values that would break the recognizers (non-positive divisor or
    /// steps, latch velocities on the wrong side of zero) fall back to the
    /// defaults.
    #[must_use]
    pub fn gesture_tuning(&self) -> GestureTuning {
        let g = &self.gesture;
        let base = GestureTuning::default();
        let positive = |value: Option<f32>, fallback: f32| {
            value
                .filter(|v| v.is_finite() && *v > 0.0)
                .unwrap_or(fallback)
        };
        GestureTuning {
            banner_height: positive(g.banner_height, base.banner_height),
            resting_y: g
                .resting_y
                .filter(|v| v.is_finite())
                .unwrap_or(base.resting_y),
            dismiss_edge: g
                .dismiss_edge
                .filter(|v| v.is_finite() && *v >= 0.0)
                .unwrap_or(base.dismiss_edge),
            content_divisor: positive(g.content_divisor, base.content_divisor),
            portrait_step: positive(g.portrait_step, base.portrait_step).min(1.0),
            landscape_step: positive(g.landscape_step, base.landscape_step).min(1.0),
            latch_velocity: positive(g.latch_velocity, base.latch_velocity),
            unlatch_velocity: g
                .unlatch_velocity
                .filter(|v| v.is_finite() && *v < 0.0)
                .unwrap_or(base.unlatch_velocity),
        }
    }

    /// Sound cue for new banners, if a sound name is configured.
    #[must_use]
    pub fn sound_cue(&self) -> Option<SoundCue> {
        let name = self.sound.name.as_deref().filter(|n| !n.is_empty())?;
        let kind = self.sound.kind.as_deref().unwrap_or("wav");
        Some(SoundCue::new(name, kind, self.sound.vibrate))
    }
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_auto_hide_secs() -> Option<f64> {
    Some(DEFAULT_AUTO_HIDE_SECS)
}

fn default_surface_retry_secs() -> Option<f64> {
    Some(DEFAULT_SURFACE_RETRY_SECS)
}

// =============================================================================
// Load Functions
// =============================================================================

fn config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with a warning key explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    tracing::warn!(path = %path.display(), error = %err, "using default config");
                    return (Config::default(), Some(LOAD_WARNING_KEY.to_string()));
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================
