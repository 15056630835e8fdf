// SPDX-License-Identifier: MPL-2.0
//! App name and icon shown in the banner header, taken from the config.

use crate::banner::{AppIdentity, IconImage, ResourceLookup};
use crate::config::{Config, DEFAULT_APP_NAME};
use std::path::Path;

#[derive(Debug, Clone)]
pub struct ConfigResources {
    identity: AppIdentity,
}

impl ConfigResources {
    /// Reads the configured icon once. A missing or unreadable icon leaves the
    /// header with its placeholder.
    pub fn from_config(config: &Config) -> Self {
        let name = config
            .banner
            .app_name
            .clone()
            .filter(|name| !name.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_APP_NAME.to_string());
        let icon = config.banner.icon_path.as_deref().and_then(read_icon);

        Self {
            identity: AppIdentity { name, icon },
        }
    }
}

fn read_icon(path: &Path) -> Option<IconImage> {
    match std::fs::read(path) {
        Ok(bytes) if !bytes.is_empty() => Some(IconImage(bytes)),
        Ok(_) => {
            tracing::warn!(path = %path.display(), "app icon is empty");
            None
        }
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "could not read app icon");
            None
        }
    }
}

impl ResourceLookup for ConfigResources {
    fn app_identity(&self) -> AppIdentity {
        self.identity.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn blank_name_falls_back_to_default() {
        let mut config = Config::default();
        config.banner.app_name = Some("  ".to_string());

        let identity = ConfigResources::from_config(&config).app_identity();
        assert_eq!(identity.name, DEFAULT_APP_NAME);
        assert!(identity.icon.is_none());
    }

    #[test]
    fn icon_is_read_from_configured_path() {
        let dir = tempdir().expect("failed to create temp dir");
        let path = dir.path().join("icon.png");
        std::fs::write(&path, [0x89, b'P', b'N', b'G']).expect("failed to write icon");

        let mut config = Config::default();
        config.banner.app_name = Some("Mail".to_string());
        config.banner.icon_path = Some(path);

        let identity = ConfigResources::from_config(&config).app_identity();
        assert_eq!(identity.name, "Mail");
        assert_eq!(identity.icon, Some(IconImage(vec![0x89, b'P', b'N', b'G'])));
    }

    #[test]
    fn missing_icon_is_ignored() {
        let mut config = Config::default();
        config.banner.icon_path = Some("/definitely/not/here.png".into());

        assert!(ConfigResources::from_config(&config).app_identity().icon.is_none());
    }
}
