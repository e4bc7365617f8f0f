//! Configuration file support for patternbook.
//!
//! Two configuration file locations are consulted:
//! - Global: `~/.patternbook/config.toml` - User-wide defaults
//! - Project: `.patternbook/config.toml` - Directory-specific overrides
//!
//! Project config takes precedence over global config. An explicit
//! `--config <path>` replaces both.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::core::kind::CapabilityKind;

/// Default token ending the interactive loop.
pub const DEFAULT_EXIT_TOKEN: &str = "0";

/// Default farewell printed when the interactive loop ends.
pub const DEFAULT_FAREWELL: &str = "Thanks for using the program!";

/// patternbook configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Interactive prompt settings
    pub interactive: InteractiveConfig,

    /// Extra menu tokens per capability kind: `kind -> (token -> variant)`
    pub aliases: BTreeMap<String, BTreeMap<String, String>>,
}

/// Interactive prompt settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct InteractiveConfig {
    /// Kind used when `patternbook interactive` gets no argument
    pub default_kind: Option<String>,

    /// Token that ends the loop (default "0")
    pub exit_token: Option<String>,

    /// Message printed when the loop ends
    pub farewell: Option<String>,
}

impl Config {
    /// Load configuration from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;

        toml::from_str(&contents)
            .with_context(|| format!("failed to parse config file: {}", path.display()))
    }

    /// Load configuration with fallback to defaults if file doesn't exist.
    pub fn load_or_default(path: &Path) -> Self {
        if path.exists() {
            Self::load(path).unwrap_or_else(|e| {
                tracing::warn!("Failed to load config from {}: {:#}", path.display(), e);
                Self::default()
            })
        } else {
            Self::default()
        }
    }

    /// Merge another config into this one (other takes precedence).
    pub fn merge(&mut self, other: Config) {
        if other.interactive.default_kind.is_some() {
            self.interactive.default_kind = other.interactive.default_kind;
        }
        if other.interactive.exit_token.is_some() {
            self.interactive.exit_token = other.interactive.exit_token;
        }
        if other.interactive.farewell.is_some() {
            self.interactive.farewell = other.interactive.farewell;
        }

        for (kind, aliases) in other.aliases {
            self.aliases.entry(kind).or_default().extend(aliases);
        }
    }

    /// Parse the default interactive kind.
    pub fn default_kind(&self) -> Option<CapabilityKind> {
        self.interactive
            .default_kind
            .as_ref()
            .and_then(|s| s.parse().ok())
    }

    /// Token ending the interactive loop.
    pub fn exit_token(&self) -> &str {
        self.interactive
            .exit_token
            .as_deref()
            .unwrap_or(DEFAULT_EXIT_TOKEN)
    }

    /// Farewell message for the interactive loop.
    pub fn farewell(&self) -> &str {
        self.interactive
            .farewell
            .as_deref()
            .unwrap_or(DEFAULT_FAREWELL)
    }

    /// Configured aliases for a kind, as `(token, variant)` pairs.
    ///
    /// Tables keyed by an unparseable kind name are ignored.
    pub fn aliases_for(&self, kind: CapabilityKind) -> Vec<(&str, &str)> {
        self.aliases
            .iter()
            .filter(|(name, _)| name.parse::<CapabilityKind>().ok() == Some(kind))
            .flat_map(|(_, table)| table.iter().map(|(t, v)| (t.as_str(), v.as_str())))
            .collect()
    }
}

/// Load merged configuration from global and project locations.
///
/// Order of precedence (highest to lowest):
/// 1. Project config (.patternbook/config.toml)
/// 2. Global config (~/.patternbook/config.toml)
/// 3. Defaults
pub fn load_config(global_path: &Path, project_path: &Path) -> Config {
    let mut config = Config::default();

    if global_path.exists() {
        let global = Config::load_or_default(global_path);
        config.merge(global);
    }

    if project_path.exists() {
        let project = Config::load_or_default(project_path);
        config.merge(project);
    }

    config
}

/// Get the global patternbook config directory (~/.patternbook).
pub fn global_config_dir() -> Option<PathBuf> {
    directories::BaseDirs::new().map(|b| b.home_dir().join(".patternbook"))
}

/// Get the global config path (~/.patternbook/config.toml).
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("config.toml"))
}

/// Get the project config path (.patternbook/config.toml).
pub fn project_config_path(project_root: &Path) -> PathBuf {
    project_root.join(".patternbook").join("config.toml")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert!(config.default_kind().is_none());
        assert_eq!(config.exit_token(), "0");
        assert_eq!(config.farewell(), "Thanks for using the program!");
        assert!(config.aliases.is_empty());
    }

    #[test]
    fn test_config_load() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join("config.toml");

        std::fs::write(
            &config_path,
            r#"
[interactive]
default_kind = "dialog"
exit_token = "q"

[aliases.gui]
windows = "win"
osx = "mac"
"#,
        )
        .unwrap();

        let config = Config::load(&config_path).unwrap();
        assert_eq!(config.default_kind(), Some(CapabilityKind::Dialog));
        assert_eq!(config.exit_token(), "q");
        assert_eq!(
            config.aliases_for(CapabilityKind::Gui),
            vec![("osx", "mac"), ("windows", "win")]
        );
        assert!(config.aliases_for(CapabilityKind::Dialog).is_empty());
    }

    #[test]
    fn test_config_load_invalid_toml() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join("config.toml");
        std::fs::write(&config_path, "[interactive\nexit_token = ").unwrap();

        let err = Config::load(&config_path).unwrap_err();
        assert!(format!("{:#}", err).contains("failed to parse config file"));

        let fallback = Config::load_or_default(&config_path);
        assert_eq!(fallback.exit_token(), "0");
    }

    #[test]
    fn test_config_merge() {
        let mut base = Config::default();
        base.interactive.default_kind = Some("gui".to_string());
        base.interactive.farewell = Some("bye".to_string());
        base.aliases
            .entry("gui".to_string())
            .or_default()
            .insert("windows".to_string(), "win".to_string());

        let mut override_cfg = Config::default();
        override_cfg.interactive.default_kind = Some("payment".to_string());
        override_cfg
            .aliases
            .entry("gui".to_string())
            .or_default()
            .insert("apple".to_string(), "mac".to_string());

        base.merge(override_cfg);

        assert_eq!(base.default_kind(), Some(CapabilityKind::Payment));
        assert_eq!(base.farewell(), "bye"); // Not overridden
        assert_eq!(base.aliases_for(CapabilityKind::Gui).len(), 2);
    }

    #[test]
    fn test_load_config_precedence() {
        let tmp = TempDir::new().unwrap();
        let global = tmp.path().join("global.toml");
        let project = project_config_path(tmp.path());
        std::fs::create_dir_all(project.parent().unwrap()).unwrap();

        std::fs::write(&global, "[interactive]\nexit_token = \"q\"\nfarewell = \"ciao\"\n")
            .unwrap();
        std::fs::write(&project, "[interactive]\nexit_token = \"x\"\n").unwrap();

        let config = load_config(&global, &project);
        assert_eq!(config.exit_token(), "x");
        assert_eq!(config.farewell(), "ciao");
    }

    #[test]
    fn test_load_config_missing_files() {
        let tmp = TempDir::new().unwrap();
        let config = load_config(&tmp.path().join("nope.toml"), &project_config_path(tmp.path()));
        assert_eq!(config.exit_token(), DEFAULT_EXIT_TOKEN);
    }
}
