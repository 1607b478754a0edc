//! Run configuration loaded from `config.json`
//!
//! ```json
//! { "repo_path": "/path/to/repo", "branch": "main" }
//! ```

use crate::artifacts::branch::branch_name::BranchName;
use crate::errors::ConfigError;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Default config file name, resolved against the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "config.json";

#[derive(Debug, Deserialize)]
struct RawConfig {
    repo_path: PathBuf,
    branch: String,
}

/// Validated configuration: the repository root and the branch to graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    repo_path: PathBuf,
    branch: BranchName,
}

impl Config {
    pub fn new(repo_path: PathBuf, branch: BranchName) -> Self {
        Config { repo_path, branch }
    }

    /// Load and validate the config file at `path`.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Unreadable {
            path: path.to_path_buf(),
            source,
        })?;

        Self::parse(path, &contents)
    }

    fn parse(path: &Path, contents: &str) -> anyhow::Result<Self> {
        let raw: RawConfig = serde_json::from_str(contents).map_err(|e| ConfigError::Invalid {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        if raw.repo_path.as_os_str().is_empty() {
            return Err(ConfigError::Invalid {
                path: path.to_path_buf(),
                reason: "repo_path cannot be empty".to_string(),
            }
            .into());
        }

        let branch = BranchName::try_parse(raw.branch)?;

        Ok(Config::new(raw.repo_path, branch))
    }

    pub fn repo_path(&self) -> &Path {
        &self.repo_path
    }

    pub fn branch(&self) -> &BranchName {
        &self.branch
    }
}
