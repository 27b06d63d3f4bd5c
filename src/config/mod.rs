use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use anyhow::{anyhow, Result, Context};
use lazy_static::lazy_static;
use std::sync::RwLock;

/// Account file configuration
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct StorageConfig {
    /// Path to the flat file holding every account record
    pub path: String,
}

/// Transaction log configuration
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct AuditConfig {
    /// Directory where the per-account `txn_<number>.log` files are written
    pub log_dir: String,
}

/// Account policy configuration
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct AccountsConfig {
    /// Whether two accounts may share the same account number
    pub allow_duplicate_numbers: bool,
}

/// Global application configuration
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Config {
    /// Application name, shown in the menu banner
    pub app_name: String,
    /// Application version
    pub version: String,
    /// Account file configuration
    pub storage: StorageConfig,
    /// Transaction log configuration
    pub audit: AuditConfig,
    /// Account policy configuration
    pub accounts: AccountsConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            app_name: "Bank Management System".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            storage: StorageConfig {
                path: "accounts.dat".to_string(),
            },
            audit: AuditConfig {
                log_dir: ".".to_string(),
            },
            accounts: AccountsConfig {
                allow_duplicate_numbers: true,
            },
        }
    }
}

// Global configuration instance
lazy_static! {
    static ref CONFIG: RwLock<Config> = RwLock::new(Config::default());
}

/// Load configuration from file
pub fn load_config(path: &str) -> Result<()> {
    // A missing file is replaced by the defaults, written out for the operator to edit
    if !Path::new(path).exists() {
        let default_config = Config::default();
        save_config(path, &default_config)?;
        return update_config(default_config);
    }

    let mut file = File::open(path).context(format!("Failed to open config file: {}", path))?;
    let mut contents = String::new();
    file.read_to_string(&mut contents).context("Failed to read config file")?;

    let config = parse_config(path, &contents)?;

    update_config(config)
}

fn parse_config(path: &str, contents: &str) -> Result<Config> {
    let config = match path.ends_with(".json") {
        true => serde_json::from_str(contents).context("Failed to parse JSON config")?,
        false => toml::from_str(contents).context("Failed to parse TOML config")?,
    };
    Ok(config)
}

/// Save configuration to file
pub fn save_config(path: &str, config: &Config) -> Result<()> {
    if let Some(parent) = Path::new(path).parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent).context("Failed to create config directory")?;
        }
    }

    let serialized = match path.ends_with(".json") {
        true => serde_json::to_string_pretty(config).context("Failed to serialize config to JSON")?,
        false => toml::to_string_pretty(config).context("Failed to serialize config to TOML")?,
    };

    std::fs::write(path, serialized).context(format!("Failed to write config to file: {}", path))?;

    Ok(())
}

/// Get a copy of the current config
pub fn get_config() -> Config {
    match CONFIG.read() {
        Ok(config) => config.clone(),
        Err(poisoned) => poisoned.into_inner().clone(),
    }
}

/// Replace the current config
pub fn update_config(config: Config) -> Result<()> {
    let mut current = CONFIG
        .write()
        .map_err(|_| anyhow!("Configuration lock poisoned"))?;
    *current = config;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.app_name, "Bank Management System");
        assert_eq!(config.storage.path, "accounts.dat");
        assert_eq!(config.audit.log_dir, ".");
        assert!(config.accounts.allow_duplicate_numbers);
    }

    #[test]
    fn test_load_save_config() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("test_config.toml");
        let config_path_str = config_path.to_str().unwrap();

        let mut config = Config::default();
        config.storage.path = "data/bank accounts.dat".to_string();
        config.accounts.allow_duplicate_numbers = false;
        save_config(config_path_str, &config).unwrap();

        let contents = std::fs::read_to_string(&config_path).unwrap();
        assert_eq!(parse_config(config_path_str, &contents).unwrap(), config);
    }

    #[test]
    fn test_json_config_is_parsed_by_extension() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("nested").join("config.json");
        let config_path_str = config_path.to_str().unwrap();

        save_config(config_path_str, &Config::default()).unwrap();

        let contents = std::fs::read_to_string(&config_path).unwrap();
        assert!(contents.trim_start().starts_with('{'));
        assert_eq!(parse_config(config_path_str, &contents).unwrap(), Config::default());
    }

    #[test]
    fn test_missing_config_file_is_created() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("fresh.toml");

        load_config(config_path.to_str().unwrap()).unwrap();

        assert!(config_path.exists());
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        assert!(parse_config("config.toml", "app_name = 12").is_err());
    }
}
