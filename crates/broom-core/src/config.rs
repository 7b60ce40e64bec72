//! Configuration handling for broom

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::BroomError;

/// Name of the optional per-repository configuration file
pub const CONFIG_FILE: &str = ".broom.toml";

/// Broom configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Branch-related settings
    #[serde(default)]
    pub branches: BranchConfig,
}

/// Branch reconciliation settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BranchConfig {
    /// Pattern for the branch that is never offered for deletion.
    /// Defaults to the historical protected branch name.
    #[serde(default = "default_protected")]
    pub protected: String,
}

fn default_protected() -> String {
    "master".to_string()
}

impl Default for BranchConfig {
    fn default() -> Self {
        Self {
            protected: default_protected(),
        }
    }
}

/// Load configuration from `.broom.toml` at the repository root
///
/// A missing file yields the defaults; an unreadable or malformed file is
/// a [`BroomError::Config`].
pub fn load_config(repo_root: &Path) -> Result<Config, BroomError> {
    let path = repo_root.join(CONFIG_FILE);
    if !path.exists() {
        return Ok(Config::default());
    }

    let content = std::fs::read_to_string(&path).map_err(|e| BroomError::Config {
        reason: format!("failed to read {}: {}", path.display(), e),
    })?;
    toml::from_str(&content).map_err(|e| BroomError::Config {
        reason: format!("failed to parse {}: {}", path.display(), e),
    })
}
