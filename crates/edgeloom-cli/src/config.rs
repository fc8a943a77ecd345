//! CLI configuration

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use edgeloom_core::{Delimiter, DuplicatePolicy, EdgeKind, GrammarConfig, SelfLoopPolicy};

/// Environment variable overriding the config file location
pub const CONFIG_ENV: &str = "EDGELOOM_CONFIG";

/// Get the config file path
pub fn config_file_path() -> PathBuf {
    if let Some(path) = std::env::var_os(CONFIG_ENV) {
        return PathBuf::from(path);
    }
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("edgeloom")
        .join("config.toml")
}

/// Configuration for the CLI
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directories searched for resources, in order
    pub roots: Vec<PathBuf>,
    pub kind: EdgeKind,
    pub duplicates: DuplicatePolicy,
    pub self_loops: SelfLoopPolicy,
    pub format: String,
    pub grammar: GrammarConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            roots: Vec::new(),
            kind: EdgeKind::Undirected,
            duplicates: DuplicatePolicy::Reject,
            self_loops: SelfLoopPolicy::Allow,
            format: "table".to_string(),
            grammar: GrammarConfig::default(),
        }
    }
}

impl Config {
    /// Load the config file, falling back to defaults if it is missing or invalid
    pub fn load() -> Self {
        let path = config_file_path();
        if !path.exists() {
            return Self::default();
        }
        match Self::load_from(&path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Ignoring invalid config at {}: {:#}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Load a config that is about to be modified and saved.
    ///
    /// Unlike [`load`](Self::load), an unreadable or invalid file is an error,
    /// so saving never overwrites keys it failed to read.
    pub fn load_for_update(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::load_from(path).map_err(|e| {
            anyhow::anyhow!(
                "Cannot update invalid config at {}: {:#}. Fix or remove it first.",
                path.display(),
                e
            )
        })
    }

    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&text)?)
    }

    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, toml::to_string_pretty(self)?)?;
        tracing::debug!("Saved config to {}", path.display());
        Ok(())
    }

    /// Keys accepted by `get` and `set`
    pub fn keys() -> &'static [&'static str] {
        &[
            "roots",
            "kind",
            "duplicates",
            "self_loops",
            "format",
            "comment_prefixes",
            "delimiter",
        ]
    }

    pub fn get(&self, key: &str) -> Option<String> {
        let value = match key {
            "roots" => self
                .roots
                .iter()
                .map(|p| p.display().to_string())
                .collect::<Vec<_>>()
                .join(","),
            "kind" => self.kind.to_string(),
            "duplicates" => self.duplicates.to_string(),
            "self_loops" => self.self_loops.to_string(),
            "format" => self.format.clone(),
            "comment_prefixes" => self.grammar.comment_prefixes.join(","),
            "delimiter" => String::from(self.grammar.delimiter),
            _ => return None,
        };
        Some(value)
    }

    pub fn set(&mut self, key: &str, value: &str) -> anyhow::Result<()> {
        match key {
            "roots" => self.roots = split_list(value).map(PathBuf::from).collect(),
            "kind" => self.kind = value.parse::<EdgeKind>().map_err(anyhow::Error::msg)?,
            "duplicates" => {
                self.duplicates = value.parse::<DuplicatePolicy>().map_err(anyhow::Error::msg)?
            }
            "self_loops" => {
                self.self_loops = value.parse::<SelfLoopPolicy>().map_err(anyhow::Error::msg)?
            }
            "format" => match value.to_lowercase().as_str() {
                "table" | "json" | "csv" => self.format = value.to_lowercase(),
                _ => anyhow::bail!("Unknown format '{}' (expected table, json or csv)", value),
            },
            "comment_prefixes" => {
                self.grammar.comment_prefixes = split_list(value).map(str::to_string).collect()
            }
            "delimiter" => {
                self.grammar.delimiter = value.parse::<Delimiter>().map_err(anyhow::Error::msg)?
            }
            _ => anyhow::bail!(
                "Unknown config key: {} (available: {})",
                key,
                Self::keys().join(", ")
            ),
        }
        Ok(())
    }

    /// Reset a key to its default value
    pub fn unset(&mut self, key: &str) -> anyhow::Result<()> {
        let default = Self::default()
            .get(key)
            .ok_or_else(|| anyhow::anyhow!("Unknown config key: {}", key))?;
        self.set(key, &default)
    }
}

fn split_list(value: &str) -> impl Iterator<Item = &str> {
    value.split(',').map(str::trim).filter(|s| !s.is_empty())
}
