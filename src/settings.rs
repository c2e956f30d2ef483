//! Settings infrastructure for rsxls.
//!
//! Loads `rsxls.toml` from the workspace to configure the server, currently
//! just logging verbosity. Missing or malformed settings degrade to defaults;
//! a bad config file must never keep the server from starting.

use std::path::{Path, PathBuf};

use log::LevelFilter;
use serde::Deserialize;

/// Root settings structure loaded from rsxls.toml.
#[derive(Debug, Default, Deserialize)]
pub struct Settings {
    /// Logging configuration.
    pub log: Option<LogSettings>,
}

/// Logging settings.
#[derive(Debug, Default, Deserialize)]
pub struct LogSettings {
    /// Log level: "off", "error", "warn", "info", "debug" or "trace".
    pub level: Option<String>,
}

impl Settings {
    /// The configured log level, if present and valid.
    pub fn log_level(&self) -> Option<LevelFilter> {
        let level = self.log.as_ref()?.level.as_deref()?;
        match level.parse() {
            Ok(filter) => Some(filter),
            Err(_) => {
                log::warn!("invalid log level in rsxls.toml: '{level}'");
                None
            }
        }
    }
}

/// Load settings from an rsxls.toml file.
///
/// Returns default settings if the file doesn't exist or can't be parsed.
pub fn load_settings(path: &Path) -> Settings {
    match std::fs::read_to_string(path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("failed to parse {}: {e}", path.display());
                Settings::default()
            }
        },
        Err(_) => Settings::default(),
    }
}

/// Discover rsxls.toml by searching up the directory tree, then direct children.
///
/// Search order:
/// 1. Walk up from `start_dir` to the filesystem root
/// 2. If not found, check immediate child directories of `start_dir`
///
/// Returns `(settings, settings_dir)` where `settings_dir` is the directory
/// containing the found rsxls.toml. If not found, returns
/// `(Settings::default(), start_dir)`.
pub fn discover_settings(start_dir: &Path) -> (Settings, PathBuf) {
    let mut current = Some(start_dir);
    while let Some(dir) = current {
        let candidate = dir.join("rsxls.toml");
        if candidate.is_file() {
            return (load_settings(&candidate), dir.to_path_buf());
        }
        current = dir.parent();
    }

    if let Ok(entries) = std::fs::read_dir(start_dir) {
        for entry in entries.flatten() {
            if entry.file_type().map(|ft| ft.is_dir()).unwrap_or(false) {
                let candidate = entry.path().join("rsxls.toml");
                if candidate.is_file() {
                    return (load_settings(&candidate), entry.path());
                }
            }
        }
    }

    (Settings::default(), start_dir.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_log_level() {
        let settings: Settings = toml::from_str("[log]\nlevel = \"debug\"\n").unwrap();
        assert_eq!(settings.log_level(), Some(LevelFilter::Debug));
    }

    #[test]
    fn missing_log_section_has_no_level() {
        let settings: Settings = toml::from_str("").unwrap();
        assert_eq!(settings.log_level(), None);
    }

    #[test]
    fn invalid_level_is_ignored() {
        let settings: Settings = toml::from_str("[log]\nlevel = \"chatty\"\n").unwrap();
        assert_eq!(settings.log_level(), None);
    }

    /// Create a unique temp directory for test isolation.
    fn make_test_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir()
            .join("rsxls-test")
            .join(name)
            .join(format!("{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    fn cleanup_test_dir(dir: &Path) {
        let _ = std::fs::remove_dir_all(dir);
    }

    #[test]
    fn load_settings_missing_file_is_default() {
        let dir = make_test_dir("load-missing");
        let settings = load_settings(&dir.join("rsxls.toml"));
        assert!(settings.log.is_none());
        cleanup_test_dir(&dir);
    }

    #[test]
    fn load_settings_malformed_file_is_default() {
        let dir = make_test_dir("load-malformed");
        let path = dir.join("rsxls.toml");
        std::fs::write(&path, "not [valid toml").unwrap();
        let settings = load_settings(&path);
        assert!(settings.log.is_none());
        cleanup_test_dir(&dir);
    }

    #[test]
    fn discover_settings_in_current_dir() {
        let dir = make_test_dir("discover-current");
        std::fs::write(dir.join("rsxls.toml"), "[log]\nlevel = \"trace\"\n").unwrap();

        let (settings, settings_dir) = discover_settings(&dir);
        assert_eq!(settings_dir, dir);
        assert_eq!(settings.log_level(), Some(LevelFilter::Trace));

        cleanup_test_dir(&dir);
    }

    #[test]
    fn discover_settings_in_parent_dir() {
        let parent = make_test_dir("discover-parent");
        let child = parent.join("subdir");
        std::fs::create_dir_all(&child).unwrap();
        std::fs::write(parent.join("rsxls.toml"), "[log]\nlevel = \"warn\"\n").unwrap();

        let (settings, settings_dir) = discover_settings(&child);
        assert_eq!(settings_dir, parent);
        assert_eq!(settings.log_level(), Some(LevelFilter::Warn));

        cleanup_test_dir(&parent);
    }

    #[test]
    fn discover_settings_in_child_dir() {
        let parent = make_test_dir("discover-child");
        let child = parent.join("config");
        std::fs::create_dir_all(&child).unwrap();
        std::fs::write(child.join("rsxls.toml"), "[log]\nlevel = \"error\"\n").unwrap();

        let (settings, settings_dir) = discover_settings(&parent);
        assert_eq!(settings_dir, child);
        assert_eq!(settings.log_level(), Some(LevelFilter::Error));

        cleanup_test_dir(&parent);
    }

    #[test]
    fn discover_settings_not_found() {
        let dir = make_test_dir("discover-none");
        let (settings, settings_dir) = discover_settings(&dir);
        assert_eq!(settings_dir, dir);
        assert!(settings.log.is_none());
        cleanup_test_dir(&dir);
    }
}
