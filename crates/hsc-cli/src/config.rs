//! Configuration file loading for the CLI
//!
//! This module handles finding and loading TOML configuration files
//! from various locations (explicit path, local directory, system directory).

use std::{
    fs,
    path::{Path, PathBuf},
};

use directories::ProjectDirs;
use log::{debug, info};
use thiserror::Error;

use hsc::{HscError, config::AppConfig};

/// Configuration-related errors for CLI
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse TOML configuration in {path}: {message}")]
    Parse { path: PathBuf, message: String },

    #[error("Missing configuration file: {0}")]
    MissingFile(PathBuf),
}

impl From<ConfigError> for HscError {
    fn from(err: ConfigError) -> Self {
        HscError::Config(err.to_string())
    }
}

/// Find and load configuration from various locations
///
/// Search order:
/// 1. Explicit path if provided
/// 2. Local project directory (hsc/config.toml)
/// 3. Platform-specific config directory
/// 4. Default config if none found
///
/// # Errors
///
/// Returns error if:
/// - Explicit path is provided but file doesn't exist
/// - Config file exists but cannot be parsed
pub fn load_config(explicit_path: Option<impl AsRef<Path>>) -> Result<AppConfig, HscError> {
    if let Some(path) = explicit_path {
        let path = path.as_ref();
        info!(path = path.display().to_string(); "Loading configuration from explicit path");
        return load_config_file(path);
    }

    let local_config = Path::new("hsc/config.toml");
    if local_config.exists() {
        info!(path = local_config.display().to_string(); "Loading configuration from local path");
        return load_config_file(local_config);
    }

    if let Some(proj_dirs) = ProjectDirs::from("com", "hsc", "hsc") {
        let system_config = proj_dirs.config_dir().join("config.toml");

        if system_config.exists() {
            info!(path = system_config.display().to_string(); "Loading configuration from system path");
            return load_config_file(system_config);
        }

        debug!(path = system_config.display().to_string(); "System configuration file not found");
    } else {
        debug!("Could not determine platform-specific config directory");
    }

    debug!("No configuration file found, using default configuration");
    Ok(AppConfig::default())
}

/// Load configuration from a TOML file
fn load_config_file(path: impl AsRef<Path>) -> Result<AppConfig, HscError> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(ConfigError::MissingFile(path.to_path_buf()).into());
    }

    let content = fs::read_to_string(path)?;

    let config: AppConfig = toml::from_str(&content).map_err(|e| ConfigError::Parse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use hsc::{config::SourceFormat, group::GroupKind};
    use tempfile::tempdir;

    use super::*;

    #[test]
    fn test_explicit_config_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            "[parse]\nformat = \"raw\"\ngroups = [\"Pencil\"]\n\n[output]\ntokens = true\n",
        )
        .unwrap();

        let config = load_config(Some(&path)).unwrap();
        assert_eq!(config.parse().format(), SourceFormat::Raw);
        assert_eq!(config.parse().groups(), Some(&[GroupKind::Pencil][..]));
        assert!(config.output().tokens());
    }

    #[test]
    fn test_missing_explicit_config_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("absent.toml");

        let err = load_config(Some(&path)).unwrap_err();
        assert!(matches!(err, HscError::Config(_)));
        assert!(err.to_string().contains("Missing configuration file"));
    }

    #[test]
    fn test_malformed_config_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[parse]\ngroups = [\"Data\"]\n").unwrap();

        let err = load_config(Some(&path)).unwrap_err();
        assert!(matches!(err, HscError::Config(_)));
    }
}
