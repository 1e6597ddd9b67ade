//! Configuration file management for itinera.
//!
//! Provides a TOML-based config file at `~/.config/itinera/config.toml` and a
//! resolution chain: CLI flag > env var > config file > default.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use itinera_core::{Assembler, CountryCatalog, Gazetteer, RenderSettings};

/// Env var naming an explicit config file.
pub const CONFIG_ENV: &str = "ITINERA_CONFIG";

// -----------------------------------------------------------------------
// Config file types
// -----------------------------------------------------------------------

#[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub render: RenderSettings,
    #[serde(default)]
    pub catalogs: CatalogSection,
}

/// Optional replacements for the embedded lookup tables.
///
/// Relative paths are resolved against the directory of the config file.
#[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogSection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gazetteer: Option<PathBuf>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub countries: Option<PathBuf>,
}

// -----------------------------------------------------------------------
// Paths
// -----------------------------------------------------------------------

/// Return the itinera config directory.
///
/// Always uses XDG layout: `$XDG_CONFIG_HOME/itinera` or `~/.config/itinera`.
pub fn config_dir() -> PathBuf {
    if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
        return PathBuf::from(xdg).join("itinera");
    }
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config")
        .join("itinera")
}

/// Return the default path of the itinera config file.
pub fn config_path() -> PathBuf {
    config_dir().join("config.toml")
}

/// Where the config file is read from: `cli_path` > `ITINERA_CONFIG` >
/// the default path. The flag says whether the path was given explicitly.
pub fn locate_config(cli_path: Option<&Path>) -> (PathBuf, bool) {
    if let Some(path) = cli_path {
        return (path.to_path_buf(), true);
    }
    if let Ok(path) = std::env::var(CONFIG_ENV) {
        if !path.trim().is_empty() {
            return (PathBuf::from(path), true);
        }
    }
    (config_path(), false)
}

// -----------------------------------------------------------------------
// Read / write
// -----------------------------------------------------------------------

/// Load and parse the config file at `path`.
pub fn load_config(path: &Path) -> Result<ConfigFile> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config file at {}", path.display()))?;
    let config: ConfigFile = toml::from_str(&contents)
        .with_context(|| format!("failed to parse config file at {}", path.display()))?;
    Ok(config)
}

/// Serialize and write `config` to `path`, creating parent dirs as needed.
pub fn save_config(path: &Path, config: &ConfigFile) -> Result<()> {
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("failed to create config directory {}", dir.display()))?;
    }

    let contents = toml::to_string_pretty(config).context("failed to serialize config")?;
    std::fs::write(path, &contents)
        .with_context(|| format!("failed to write config file at {}", path.display()))?;

    Ok(())
}

// -----------------------------------------------------------------------
// Resolved config
// -----------------------------------------------------------------------

/// Fully resolved configuration, ready for use.
#[derive(Debug)]
pub struct ItineraConfig {
    /// The file the settings came from, if any was read.
    pub source: Option<PathBuf>,
    pub file: ConfigFile,
}

impl ItineraConfig {
    /// Resolve configuration using the chain: CLI flag > env var > config file > default.
    ///
    /// An explicitly named file (flag or env var) must exist and parse. The
    /// default file is optional; when it is absent the built-in defaults apply.
    pub fn resolve(cli_path: Option<&Path>) -> Result<Self> {
        let (path, explicit) = locate_config(cli_path);

        if !explicit && !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self {
                source: None,
                file: ConfigFile::default(),
            });
        }

        let file = load_config(&path)?;
        tracing::debug!(path = %path.display(), "loaded config file");
        Ok(Self {
            source: Some(path),
            file,
        })
    }

    /// Build an assembler from the settings and catalog overrides.
    pub fn assembler(self) -> Result<Assembler> {
        let base = self
            .source
            .as_deref()
            .and_then(Path::parent)
            .map(Path::to_path_buf)
            .unwrap_or_default();

        let gazetteer = match &self.file.catalogs.gazetteer {
            Some(path) => {
                let path = base.join(path);
                let text = std::fs::read_to_string(&path)
                    .with_context(|| format!("failed to read gazetteer at {}", path.display()))?;
                Gazetteer::from_toml(&text)
                    .with_context(|| format!("invalid gazetteer at {}", path.display()))?
            }
            None => Gazetteer::builtin(),
        };

        let countries = match &self.file.catalogs.countries {
            Some(path) => {
                let path = base.join(path);
                let text = std::fs::read_to_string(&path).with_context(|| {
                    format!("failed to read country catalog at {}", path.display())
                })?;
                CountryCatalog::from_toml(&text)
                    .with_context(|| format!("invalid country catalog at {}", path.display()))?
            }
            None => CountryCatalog::builtin(),
        };

        Ok(Assembler::new(gazetteer, countries, self.file.render))
    }
}

// -----------------------------------------------------------------------
// Tests
// -----------------------------------------------------------------------
