use super::types::FinderConfig;
use crate::{FinderError, Result};
use directories::ProjectDirs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

pub const CONFIG_FILE_NAME: &str = "fastfood-finder.yaml";

/// Platform directories for this application
pub fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("", "", "fastfood-finder")
}

/// Finds and loads `fastfood-finder.yaml`
pub struct ConfigLoader {
    /// Candidate locations, first existing one wins
    search_paths: Vec<PathBuf>,
}

impl ConfigLoader {
    /// Search the working directory, then the platform config directory
    pub fn new() -> Self {
        let mut search_paths = vec![PathBuf::from(CONFIG_FILE_NAME)];
        if let Some(dirs) = project_dirs() {
            search_paths.push(dirs.config_dir().join(CONFIG_FILE_NAME));
        }
        Self { search_paths }
    }

    pub fn with_search_paths(search_paths: Vec<PathBuf>) -> Self {
        Self { search_paths }
    }

    /// Load `explicit` if given (it must exist), otherwise the first file
    /// found on the search path, otherwise defaults
    pub fn load(&self, explicit: Option<&Path>) -> Result<FinderConfig> {
        if let Some(path) = explicit {
            return self.load_file(path);
        }

        match self.search_paths.iter().find(|p| p.is_file()) {
            Some(path) => self.load_file(path),
            None => {
                debug!("No config file found, using defaults");
                Ok(FinderConfig::default())
            }
        }
    }

    /// Load a single config file. A relative `catalog` path is resolved
    /// against the config file's directory.
    pub fn load_file<P: AsRef<Path>>(&self, path: P) -> Result<FinderConfig> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| {
            FinderError::Config(format!("Failed to read config file {}: {}", path.display(), e))
        })?;

        let mut config: FinderConfig = serde_yaml_ng::from_str(&contents).map_err(|e| {
            FinderError::Config(format!("Failed to parse config file {}: {}", path.display(), e))
        })?;

        if let Some(catalog) = config.catalog.take() {
            let resolved = if catalog.is_relative() {
                path.parent().unwrap_or_else(|| Path::new(".")).join(catalog)
            } else {
                catalog
            };
            config.catalog = Some(resolved);
        }

        Self::validate(&config)?;
        info!(path = %path.display(), "Loaded configuration");
        Ok(config)
    }

    fn validate(config: &FinderConfig) -> Result<()> {
        if config.budget_step == 0 {
            return Err(FinderError::Config("budget_step must be greater than zero".to_string()));
        }
        if config.currency.trim().is_empty() {
            return Err(FinderError::Config("currency cannot be empty".to_string()));
        }
        Ok(())
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}
