//! Configuration settings for Svar.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct Settings {
    pub general: GeneralSettings,
    pub models: ModelSettings,
    pub agent: AgentSettings,
    pub knowledge: KnowledgeSettings,
}

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralSettings {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for GeneralSettings {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// Models used by each agent persona.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelSettings {
    /// Model for the triage assistant.
    pub triage: String,
    /// Model for the account agent.
    pub account: String,
    /// Model for the web-search agent. Must be a search-enabled chat model,
    /// since web retrieval runs entirely on the hosted side.
    pub search: String,
}

impl Default for ModelSettings {
    fn default() -> Self {
        Self {
            triage: "gpt-4o-mini".to_string(),
            account: "gpt-4o-mini".to_string(),
            search: "gpt-4o-search-preview".to_string(),
        }
    }
}

/// Agent runner settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AgentSettings {
    /// Maximum turns (LLM calls) per query before the run is aborted.
    pub max_turns: usize,
}

impl Default for AgentSettings {
    fn default() -> Self {
        Self { max_turns: 10 }
    }
}

/// Hosted knowledge collection settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct KnowledgeSettings {
    /// Default name for newly created collections.
    pub store_name: String,
}

impl Default for KnowledgeSettings {
    fn default() -> Self {
        Self {
            store_name: "ACME Shop Product Knowledge Base".to_string(),
        }
    }
}

impl Settings {
    /// Load settings from the default configuration file.
    pub fn load() -> crate::error::Result<Self> {
        Self::load_from(None)
    }

    /// Load settings from a specific path, or default location if None.
    pub fn load_from(path: Option<&PathBuf>) -> crate::error::Result<Self> {
        let config_path = match path {
            Some(p) => p.clone(),
            None => Self::default_config_path(),
        };

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let settings: Settings = toml::from_str(&content)?;
            Ok(settings)
        } else {
            Ok(Settings::default())
        }
    }

    /// Save settings to the default configuration file.
    pub fn save(&self) -> crate::error::Result<()> {
        self.save_to(&Self::default_config_path())
    }

    /// Save settings to a specific path.
    pub fn save_to(&self, path: &PathBuf) -> crate::error::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)
            .map_err(|e| crate::error::SvarError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Get the default configuration file path.
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("svar")
            .join("config.toml")
    }

    /// Expand shell variables in paths (e.g., ~).
    pub fn expand_path(path: &str) -> PathBuf {
        PathBuf::from(shellexpand::tilde(path).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.models.triage, "gpt-4o-mini");
        assert_eq!(settings.models.search, "gpt-4o-search-preview");
        assert_eq!(settings.agent.max_turns, 10);
        assert!(!settings.knowledge.store_name.is_empty());
    }

    #[test]
    fn test_settings_toml_round_trip() {
        let settings = Settings::default();
        let serialized = toml::to_string_pretty(&settings).unwrap();
        let parsed: Settings = toml::from_str(&serialized).unwrap();
        assert_eq!(parsed.models.account, settings.models.account);
        assert_eq!(parsed.agent.max_turns, settings.agent.max_turns);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let parsed: Settings = toml::from_str("[models]\ntriage = \"gpt-4o\"\n").unwrap();
        assert_eq!(parsed.models.triage, "gpt-4o");
        assert_eq!(parsed.models.account, "gpt-4o-mini");
        assert_eq!(parsed.agent.max_turns, 10);
    }
}
