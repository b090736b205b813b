//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.ocnav/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::PathBuf;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct OcnavConfig {
    #[serde(default)]
    pub general: GeneralConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Binary name of the wrapped CLI tool.
    pub tool: Option<String>,
    /// How long transient status messages stay up, in milliseconds.
    pub status_flash_ms: Option<u64>,
    /// JSON file replacing the built-in menu (path relative to `~/.ocnav/`).
    pub menu_file: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_TOOL: &str = "oc";
pub const DEFAULT_FLASH_MS: u64 = 2000;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub tool: String,
    pub status_flash_ms: u64,
    pub menu_file: Option<PathBuf>,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        resolve(&OcnavConfig::default(), None)
    }
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.ocnav/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".ocnav").join("config.toml"))
}

/// Load config from `~/.ocnav/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `OcnavConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<OcnavConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(OcnavConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(OcnavConfig::default());
    }

    let contents = fs::read_to_string(&path).map_err(ConfigError::Io)?;
    let config: OcnavConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &PathBuf) {
    let default_content = r#"# ocnav Configuration
# All settings are optional — defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# tool = "oc"              # Wrapped CLI binary; try "kubectl" against plain Kubernetes
# status_flash_ms = 2000   # How long transient status messages stay visible
# menu_file = "menu.json"  # Custom menu tree; path relative to ~/.ocnav/
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env → CLI.
///
/// `cli_tool` is the `--tool` flag (None = not specified).
pub fn resolve(config: &OcnavConfig, cli_tool: Option<&str>) -> ResolvedConfig {
    // Tool: CLI → env → config → default
    let tool = cli_tool
        .map(|s| s.to_string())
        .or_else(|| std::env::var("OCNAV_TOOL").ok())
        .or_else(|| config.general.tool.clone())
        .unwrap_or_else(|| DEFAULT_TOOL.to_string());

    // Menu file path is relative to ~/.ocnav/ unless absolute
    let menu_file = config.general.menu_file.as_ref().map(|file| {
        let path = PathBuf::from(file);
        if path.is_absolute() {
            path
        } else {
            dirs::home_dir()
                .map(|h| h.join(".ocnav").join(file))
                .unwrap_or(path)
        }
    });

    ResolvedConfig {
        tool,
        status_flash_ms: config.general.status_flash_ms.unwrap_or(DEFAULT_FLASH_MS),
        menu_file,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_uses_defaults_when_empty() {
        let resolved = resolve(&OcnavConfig::default(), None);
        assert_eq!(resolved.tool, DEFAULT_TOOL);
        assert_eq!(resolved.status_flash_ms, DEFAULT_FLASH_MS);
        assert!(resolved.menu_file.is_none());
    }

    #[test]
    fn test_resolve_config_values_override_defaults() {
        let config = OcnavConfig {
            general: GeneralConfig {
                tool: Some("kubectl".to_string()),
                status_flash_ms: Some(500),
                menu_file: None,
            },
        };
        let resolved = resolve(&config, None);
        assert_eq!(resolved.tool, "kubectl");
        assert_eq!(resolved.status_flash_ms, 500);
    }

    #[test]
    fn test_resolve_cli_tool_wins() {
        let config = OcnavConfig {
            general: GeneralConfig {
                tool: Some("kubectl".to_string()),
                ..Default::default()
            },
        };
        let resolved = resolve(&config, Some("oc"));
        assert_eq!(resolved.tool, "oc");
    }

    #[test]
    fn test_sparse_toml_parses() {
        // Only override one thing — everything else stays default
        let toml_str = r#"
[general]
status_flash_ms = 1000
"#;
        let config: OcnavConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.general.status_flash_ms, Some(1000));
        assert!(config.general.tool.is_none());
        assert!(config.general.menu_file.is_none());
    }

    #[test]
    fn test_absolute_menu_file_kept_as_is() {
        let config = OcnavConfig {
            general: GeneralConfig {
                menu_file: Some("/etc/ocnav/menu.json".to_string()),
                ..Default::default()
            },
        };
        let resolved = resolve(&config, None);
        assert_eq!(
            resolved.menu_file.as_deref(),
            Some(std::path::Path::new("/etc/ocnav/menu.json"))
        );
    }
}
