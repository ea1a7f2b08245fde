use std::{
    fs, io,
    path::{Path, PathBuf},
};

use serde::Deserialize;
use tracing::{debug, info};

use crate::{
    env::Shell,
    error::{Error, Res},
    layout::{ENVIRONMENT_OFFSET, ROOT_LEVELS, ROOT_VARIABLE},
};

/// Name of the optional config file, looked up next to the entry point.
pub const CONFIG_FILE: &str = "idds-env.toml";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub layout: LayoutConfig,
    pub conda: CondaConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LayoutConfig {
    /// Directories between the entry point's directory and the project root,
    /// at least 1.
    pub levels: usize,
    /// Environment directory, relative to the project root.
    pub environment: PathBuf,
    /// Variable the project root is published under.
    pub variable: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CondaConfig {
    /// Conda executable. Falls back to `$CONDA_EXE` when unset.
    pub executable: Option<PathBuf>,
    pub shell: Shell,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            levels: ROOT_LEVELS,
            environment: PathBuf::from(ENVIRONMENT_OFFSET),
            variable: ROOT_VARIABLE.to_string(),
        }
    }
}

impl Config {
    /// Load `idds-env.toml` from `dir`. A missing file gives the defaults.
    pub fn load(dir: &Path) -> Res<Self> {
        let path = dir.join(CONFIG_FILE);

        match fs::read_to_string(&path) {
            Ok(src) => {
                info!("Loading config: {}", path.display());
                Self::parse(&path, &src)
            }
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                debug!("No config at {}, using defaults", path.display());
                Ok(Self::default())
            }
            Err(err) => Err(Error::Config {
                path,
                message: err.to_string(),
            }),
        }
    }

    /// Parse config source. `path` is only used for error messages.
    pub fn parse(path: &Path, src: &str) -> Res<Self> {
        let config: Config = toml::from_str(src).map_err(|err| Error::Config {
            path: path.to_path_buf(),
            message: err.message().to_string(),
        })?;

        if config.layout.levels == 0 {
            return Err(Error::Config {
                path: path.to_path_buf(),
                message: "levels must be at least 1".to_string(),
            });
        }

        if !is_variable_name(&config.layout.variable) {
            return Err(Error::Config {
                path: path.to_path_buf(),
                message: format!("invalid variable name '{}'", config.layout.variable),
            });
        }

        Ok(config)
    }
}

// The name ends up unquoted in shell code.
fn is_variable_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }

    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
