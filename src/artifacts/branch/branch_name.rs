use crate::artifacts::branch::INVALID_BRANCH_NAME_REGEX;
use crate::errors::ConfigError;
use anyhow::Context;
use std::path::PathBuf;

/// A validated local branch name such as `main` or `feature/graph`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BranchName(String);

impl BranchName {
    pub fn try_parse(name: String) -> anyhow::Result<Self> {
        if name.is_empty() {
            return Err(ConfigError::InvalidBranch(name).into());
        }

        let refused = regex::Regex::new(INVALID_BRANCH_NAME_REGEX)
            .context("compiling branch name pattern")?
            .is_match(&name);

        match refused {
            true => Err(ConfigError::InvalidBranch(name).into()),
            false => Ok(BranchName(name)),
        }
    }

    /// Relative path of the head file below `refs/heads`
    pub fn to_path(&self) -> PathBuf {
        self.0.split('/').collect()
    }
}

impl AsRef<str> for BranchName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for BranchName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
