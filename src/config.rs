use crate::machine_info::DEFAULT_ACT_PROGRAM;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::sync::LazyLock;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse config file '{path}': {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ActConfig {
    /// Program to run; a bare name is looked up on `PATH`.
    pub act_path: String,
    pub filters: FilterDefaults,
}

impl Default for ActConfig {
    fn default() -> Self {
        Self {
            act_path: DEFAULT_ACT_PROGRAM.to_string(),
            filters: FilterDefaults::default(),
        }
    }
}

/// Predicates applied when none are given on the command line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct FilterDefaults {
    pub machines: Option<String>,
    pub compilers: Option<String>,
}

impl ActConfig {
    /// Layers command-line overrides on top of this config.
    pub fn with_overrides(
        &self,
        act_path: Option<&str>,
        machines: Option<&str>,
        compilers: Option<&str>,
    ) -> ActConfig {
        ActConfig {
            act_path: act_path.unwrap_or(&self.act_path).to_string(),
            filters: FilterDefaults {
                machines: machines
                    .map(str::to_string)
                    .or_else(|| self.filters.machines.clone()),
                compilers: compilers
                    .map(str::to_string)
                    .or_else(|| self.filters.compilers.clone()),
            },
        }
    }
}

pub fn load_config(path: Option<&Path>) -> Result<ActConfig, ConfigError> {
    if let Some(path) = path {
        load_config_from_path(path)
    } else {
        Ok(default_config().clone())
    }
}

pub fn load_config_from_path(path: &Path) -> Result<ActConfig, ConfigError> {
    let path_display = path.display().to_string();
    let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path_display.clone(),
        source,
    })?;

    toml::from_str::<ActConfig>(&raw).map_err(|source| ConfigError::Parse {
        path: path_display,
        source,
    })
}

pub fn default_config() -> &'static ActConfig {
    static DEFAULT_CONFIG: LazyLock<ActConfig> = LazyLock::new(ActConfig::default);
    &DEFAULT_CONFIG
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overrides_win_over_file_values() {
        let config = ActConfig {
            act_path: "/opt/act/bin/act".to_string(),
            filters: FilterDefaults {
                machines: Some("(file)".to_string()),
                compilers: Some("(file)".to_string()),
            },
        };

        let merged = config.with_overrides(None, Some("(cli)"), None);
        assert_eq!(merged.act_path, "/opt/act/bin/act");
        assert_eq!(merged.filters.machines.as_deref(), Some("(cli)"));
        assert_eq!(merged.filters.compilers.as_deref(), Some("(file)"));
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: ActConfig = toml::from_str("[filters]\ncompilers = \"(x86)\"\n").unwrap();
        assert_eq!(config.act_path, "act");
        assert_eq!(config.filters.machines, None);
        assert_eq!(config.filters.compilers.as_deref(), Some("(x86)"));
    }
}
