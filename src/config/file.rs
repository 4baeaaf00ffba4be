//! Reading and writing the config file.

use crate::config::Config;
use crate::error::{Error, Result};
use std::io::ErrorKind;
use std::path::Path;

/// Read a config file, treating a missing file as empty configuration.
///
/// Only a file that exists but cannot be read or parsed is an error; a
/// fresh installation has no config file at all.
pub fn load_config_file(path: &Path) -> Result<Config> {
    let contents = match std::fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Config::default()),
        Err(e) => {
            return Err(Error::ConfigRead {
                path: path.to_path_buf(),
                source: e,
            });
        }
    };

    toml::from_str(&contents).map_err(|e| Error::ConfigParse {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Read the config file from its platform location.
pub fn load_default_config() -> Result<Config> {
    match super::config_file_path() {
        Ok(path) => load_config_file(&path),
        // No resolvable config dir on this platform means nothing to load.
        Err(_) => Ok(Config::default()),
    }
}

/// Write a config file, creating parent directories as needed.
pub fn save_config(config: &Config, path: &Path) -> Result<()> {
    let contents =
        toml::to_string_pretty(config).map_err(|e| Error::ConfigSerialize { source: e })?;

    let write = |source| Error::ConfigWrite {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(write)?;
    }
    std::fs::write(path, contents).map_err(write)
}

/// Write the config file to its platform location and return that path.
pub fn save_default_config(config: &Config) -> Result<std::path::PathBuf> {
    let path = super::config_file_path()?;
    save_config(config, &path)?;
    Ok(path)
}
