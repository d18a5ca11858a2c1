use std::path::{Path, PathBuf};

/// Config key under `[ports]` naming the broker's publish port.
pub const BROKER_PUB_KEY: &str = "BLACS_Broker_Pub";

/// Environment variable overriding the config file location.
pub const CONFIG_ENV: &str = "INPLOT_CONFIG";

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config file '{}': {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("no config file found; pass --config, set {CONFIG_ENV}, or create '{}'", fallback.display())]
    NotFound { fallback: PathBuf },
    #[error("missing key 'ports.{key}' in '{}'", path.display())]
    MissingKey { key: String, path: PathBuf },
    #[error("'ports.{key}' in '{}' is not a valid TCP port", path.display())]
    InvalidPort { key: String, path: PathBuf },
}

/// Lab-wide TOML configuration store.
///
/// The plot window only ever reads port numbers out of the `[ports]`
/// table, but the file is shared with the rest of the control system.
#[derive(Debug, Clone)]
pub struct LabConfig {
    path: PathBuf,
    table: toml::Table,
}

impl LabConfig {
    /// Load from an explicit path, `$INPLOT_CONFIG`, or the per-user
    /// default location, in that order. Missing config is fatal.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::from_path(path);
        }
        if let Some(path) = std::env::var_os(CONFIG_ENV) {
            return Self::from_path(Path::new(&path));
        }
        let fallback = default_config_path();
        if fallback.exists() {
            Self::from_path(&fallback)
        } else {
            Err(ConfigError::NotFound { fallback })
        }
    }

    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let data = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let table = data.parse::<toml::Table>().map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!("loaded lab config from '{}'", path.display());
        Ok(Self {
            path: path.to_path_buf(),
            table,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The broadcast broker's publish port (`ports.BLACS_Broker_Pub`).
    pub fn broker_pub_port(&self) -> Result<u16, ConfigError> {
        self.port(BROKER_PUB_KEY)
    }

    pub fn port(&self, key: &str) -> Result<u16, ConfigError> {
        let value = self
            .table
            .get("ports")
            .and_then(toml::Value::as_table)
            .and_then(|ports| ports.get(key))
            .ok_or_else(|| ConfigError::MissingKey {
                key: key.to_string(),
                path: self.path.clone(),
            })?;
        value
            .as_integer()
            .and_then(|port| u16::try_from(port).ok())
            .ok_or_else(|| ConfigError::InvalidPort {
                key: key.to_string(),
                path: self.path.clone(),
            })
    }
}

fn default_config_path() -> PathBuf {
    let home = std::env::var_os("HOME").map(PathBuf::from).unwrap_or_default();
    home.join(".config").join("inplot").join("inplot.toml")
}
