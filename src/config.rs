use std::path::{Path, PathBuf};

use serde::Deserialize;

/// How often the tick event fires (ms).
pub const TICK_RATE_MS: u64 = 250;

/// How long a status bar message stays visible (s).
pub const STATUS_TTL_SECS: u64 = 3;

/// Header title.
pub const DEFAULT_TITLE: &str = "Drive";

/// Default log filter when RUST_LOG is unset.
pub const DEFAULT_LOG_LEVEL: &str = "info";

pub const CONFIG_FILE_NAME: &str = ".drive.toml";

// ---------------------------------------------------------------------------
// Drive config (.drive.toml)
// ---------------------------------------------------------------------------

#[derive(Debug, Default, Deserialize)]
pub struct DriveConfig {
    pub display: Option<DisplayConfig>,
    pub data: Option<DataConfig>,
    pub links: Option<LinksConfig>,
    pub log: Option<LogConfig>,
}

#[derive(Debug, Deserialize)]
pub struct DisplayConfig {
    pub tick_rate: Option<u64>,
    pub status_ttl: Option<u64>,
    pub title: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct DataConfig {
    /// JSON dataset replacing the built-in sample.
    pub path: Option<PathBuf>,
}

#[derive(Debug, Deserialize)]
pub struct LinksConfig {
    /// Set to false to show file links in the status bar instead of launching a browser.
    pub open: Option<bool>,
}

#[derive(Debug, Deserialize)]
pub struct LogConfig {
    pub file: Option<PathBuf>,
    pub level: Option<String>,
}

impl DriveConfig {
    pub fn tick_rate(&self) -> u64 {
        self.display
            .as_ref()
            .and_then(|d| d.tick_rate)
            .unwrap_or(TICK_RATE_MS)
    }

    pub fn status_ttl(&self) -> u64 {
        self.display
            .as_ref()
            .and_then(|d| d.status_ttl)
            .unwrap_or(STATUS_TTL_SECS)
    }

    pub fn title(&self) -> &str {
        self.display
            .as_ref()
            .and_then(|d| d.title.as_deref())
            .unwrap_or(DEFAULT_TITLE)
    }

    pub fn data_path(&self) -> Option<&Path> {
        self.data.as_ref().and_then(|d| d.path.as_deref())
    }

    pub fn open_links(&self) -> bool {
        self.links.as_ref().and_then(|l| l.open).unwrap_or(true)
    }

    pub fn log_file(&self) -> Option<&Path> {
        self.log.as_ref().and_then(|l| l.file.as_deref())
    }

    pub fn log_level(&self) -> &str {
        self.log
            .as_ref()
            .and_then(|l| l.level.as_deref())
            .unwrap_or(DEFAULT_LOG_LEVEL)
    }
}

/// Load config from `path`, or `.drive.toml` in `cwd` when no path is given.
/// Returns the default config (and the reason) if the file can't be read or parsed.
pub fn load_config(cwd: &Path, path: Option<&Path>) -> (DriveConfig, Option<String>) {
    let path = match path {
        Some(p) => p.to_path_buf(),
        None => cwd.join(CONFIG_FILE_NAME),
    };
    if !path.exists() {
        return (DriveConfig::default(), None);
    }
    let content = match std::fs::read_to_string(&path) {
        Ok(c) => c,
        Err(e) => {
            return (
                DriveConfig::default(),
                Some(format!("{}: {}", path.display(), e)),
            )
        }
    };
    match toml::from_str(&content) {
        Ok(config) => (config, None),
        Err(e) => (
            DriveConfig::default(),
            Some(format!("{}: {}", path.display(), e)),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_when_missing() {
        let dir = tempfile::tempdir().unwrap();
        let (config, problem) = load_config(dir.path(), None);
        assert!(problem.is_none());
        assert_eq!(config.tick_rate(), TICK_RATE_MS);
        assert_eq!(config.title(), "Drive");
        assert!(config.open_links());
        assert!(config.data_path().is_none());
        assert_eq!(config.log_level(), "info");
    }

    #[test]
    fn reads_drive_toml_from_cwd() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(CONFIG_FILE_NAME),
            r#"
[display]
tick_rate = 100
title = "Team Drive"

[data]
path = "tree.json"

[links]
open = false

[log]
file = "drive.log"
level = "debug"
"#,
        )
        .unwrap();
        let (config, problem) = load_config(dir.path(), None);
        assert!(problem.is_none());
        assert_eq!(config.tick_rate(), 100);
        assert_eq!(config.status_ttl(), STATUS_TTL_SECS);
        assert_eq!(config.title(), "Team Drive");
        assert_eq!(config.data_path(), Some(Path::new("tree.json")));
        assert!(!config.open_links());
        assert_eq!(config.log_file(), Some(Path::new("drive.log")));
        assert_eq!(config.log_level(), "debug");
    }

    #[test]
    fn malformed_file_falls_back_with_reason() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.toml");
        std::fs::write(&path, "[display\ntick_rate = ").unwrap();
        let (config, problem) = load_config(dir.path(), Some(&path));
        assert_eq!(config.tick_rate(), TICK_RATE_MS);
        assert!(problem.unwrap().contains("custom.toml"));
    }
}
