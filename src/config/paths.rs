//! Path resolution for breathe configuration.
//!
//! Everything lives under `~/.breathe/`:
//! - `config.yaml` - Display settings (optional)

use std::path::PathBuf;

use crate::error::BreatheError;

/// Paths to breathe configuration files.
#[derive(Debug, Clone)]
pub struct Paths {
    /// Config file: `~/.breathe/config.yaml`
    pub config_file: PathBuf,
}

impl Paths {
    /// Create paths based on the user's home directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, BreatheError> {
        let home = std::env::var("HOME").map_err(|_| {
            BreatheError::Config("Could not determine home directory".to_string())
        })?;

        Ok(Self::with_root(PathBuf::from(home).join(".breathe")))
    }

    /// Create paths with a custom root directory (useful for testing).
    #[must_use]
    pub fn with_root(root: PathBuf) -> Self {
        Self {
            config_file: root.join("config.yaml"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_with_root() {
        let root = PathBuf::from("/tmp/test-breathe");
        let paths = Paths::with_root(root.clone());

        assert_eq!(paths.config_file, root.join("config.yaml"));
    }
}
