// Keysymgen Config Parser - TOML with Serde
// Parses the optional generator configuration file

use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::emit::OutputFormat;
use crate::overrides::{OverrideExtensions, Overrides};
use crate::parse::SourceKind;

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(String),

    #[error("unable to find {} (searched: {})", .kind.file_name(), join_paths(.searched))]
    MissingInput {
        kind: SourceKind,
        searched: Vec<PathBuf>,
    },

    #[error("failed to read {}: {source}", .path.display())]
    ReadInput { path: PathBuf, source: io::Error },
}

fn join_paths(paths: &[PathBuf]) -> String {
    if paths.is_empty() {
        return "nothing".to_string();
    }
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Root of the configuration file
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Header locations
    #[serde(default)]
    pub inputs: InputsConfig,

    /// Artifact location and format
    #[serde(default)]
    pub output: OutputConfig,

    /// Entries merged into the built-in override tables
    #[serde(default)]
    pub overrides: OverrideExtensions,
}

/// Explicit header paths; unset ones are searched for
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InputsConfig {
    pub keysymdef: Option<PathBuf>,
    pub vendor: Option<PathBuf>,
    pub toolkit: Option<PathBuf>,
}

impl InputsConfig {
    /// Configured path for one source
    pub fn path(&self, kind: SourceKind) -> Option<&Path> {
        match kind {
            SourceKind::Keysymdef => self.keysymdef.as_deref(),
            SourceKind::Vendor => self.vendor.as_deref(),
            SourceKind::Toolkit => self.toolkit.as_deref(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    /// Where to write the artifact
    pub path: Option<PathBuf>,

    /// `rust` or `cpp-header`
    pub format: Option<OutputFormat>,

    /// Name of the generated function
    pub function: Option<String>,
}

impl GeneratorConfig {
    /// Load configuration from a TOML file
    pub fn from_toml_path<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Load configuration from a TOML string
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::TomlParse(e.to_string()))
    }

    /// Get the default config path
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("keysymgen").join("config.toml"))
    }

    /// Load from the default path, or defaults if no file exists there
    pub fn load_default() -> Result<Self, ConfigError> {
        match Self::default_path() {
            Some(path) if path.exists() => {
                log::debug!("loading config from {}", path.display());
                Self::from_toml_path(path)
            }
            _ => Ok(Self::default()),
        }
    }

    /// Built-in override tables extended with the configured entries
    pub fn overrides(&self) -> Overrides {
        if self.overrides.is_empty() {
            return Overrides::builtin().clone();
        }
        Overrides::builtin().clone().with_extensions(&self.overrides)
    }
}
