//! src/config.rs
//! ============================================================================
//! # Config: Picker Configuration Loader and Saver
//!
//! Loads and saves settings as TOML from the cross-platform config path using
//! the [`directories`](https://docs.rs/directories) crate. Command-line flags
//! override whatever is loaded here.
//!
//! ## Example
//! ```rust,ignore
//! let (config, _origin) = Config::load(None).await?;
//! let root = config.resolve_root(None).await?;
//! ```

use directories::{ProjectDirs, UserDirs};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

use tokio::fs as TokioFs;

use crate::error::AppError;

const QUALIFIER: &str = "org";
const ORGANIZATION: &str = "fpick";
const APPLICATION: &str = "fpick";

/// Where the loaded settings came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigOrigin {
    File(PathBuf),

    /// No file existed; defaults were written here.
    CreatedDefault(PathBuf),
}

impl fmt::Display for ConfigOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File(p) => write!(f, "loaded from {}", p.display()),
            Self::CreatedDefault(p) => write!(f, "defaults written to {}", p.display()),
        }
    }
}

/// Header appearance overrides.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeaderConfig {
    /// Raw background value, `#RRGGBB`.
    pub background: Option<String>,

    /// Palette color name, e.g. `purple`.
    pub color: Option<String>,
}

/// Log file location and verbosity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    pub dir: PathBuf,

    /// `EnvFilter` directive, e.g. `info` or `picker_core=debug`.
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            dir: Config::default_log_dir(),
            level: "info".to_string(),
        }
    }
}

/// Main configuration struct for the picker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Top-level directory; the user's home directory when unset.
    pub root: Option<PathBuf>,

    /// Text of the loading overlay.
    pub loading_message: String,

    /// How long a status-line notice stays visible.
    #[serde(with = "humantime_serde")]
    pub notification_ttl: Duration,

    pub header: HeaderConfig,

    pub logging: LogConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            root: None,
            loading_message: "Loading...".to_string(),
            notification_ttl: Duration::from_secs(3),
            header: HeaderConfig::default(),
            logging: LogConfig::default(),
        }
    }
}

impl Config {
    /// Loads config from `path`, or from the platform config dir when `None`.
    ///
    /// A missing file at the platform location is created with defaults. A
    /// missing explicit path is an error. Nothing is logged here since this
    /// runs before logging is up; the returned origin is logged later.
    pub async fn load(path: Option<&Path>) -> Result<(Self, ConfigOrigin), AppError> {
        let (path, explicit) = match path {
            Some(p) => (p.to_path_buf(), true),
            None => (Self::config_path()?, false),
        };

        if TokioFs::try_exists(&path).await.unwrap_or(false) {
            let text = TokioFs::read_to_string(&path)
                .await
                .map_err(|e| AppError::config_io(&path, e))?;
            let cfg: Self = toml::from_str(&text)?;

            Ok((cfg, ConfigOrigin::File(path)))
        } else if explicit {
            Err(AppError::config_io(
                &path,
                std::io::Error::new(std::io::ErrorKind::NotFound, "config file not found"),
            ))
        } else {
            let default_config = Self::default();
            default_config.save_to(&path).await?;

            Ok((default_config, ConfigOrigin::CreatedDefault(path)))
        }
    }

    /// Startup policy around [`Config::load`]: an explicit path that cannot
    /// be loaded is fatal; any other failure falls back to defaults and hands
    /// the error back for logging.
    pub async fn load_for_launch(
        explicit: Option<&Path>,
    ) -> Result<(Self, Result<ConfigOrigin, AppError>), AppError> {
        match Self::load(explicit).await {
            Ok((cfg, origin)) => Ok((cfg, Ok(origin))),
            Err(e) if explicit.is_some() => Err(e),
            Err(e) => Ok((Self::default(), Err(e))),
        }
    }

    /// Saves config as TOML to `path`, creating parent directories.
    pub async fn save_to(&self, path: &Path) -> Result<(), AppError> {
        if let Some(parent) = path.parent() {
            TokioFs::create_dir_all(parent)
                .await
                .map_err(|e| AppError::config_io(parent, e))?;
        }

        let toml_str = toml::to_string_pretty(self)?;
        TokioFs::write(path, toml_str)
            .await
            .map_err(|e| AppError::config_io(path, e))?;

        Ok(())
    }

    /// Picks the root from the flag, the config, or the home directory, in
    /// that order, and checks that it is a directory.
    pub async fn resolve_root(&self, flag: Option<PathBuf>) -> Result<PathBuf, AppError> {
        let candidate = match flag.or_else(|| self.root.clone()) {
            Some(p) => p,
            None => UserDirs::new()
                .map(|dirs| dirs.home_dir().to_path_buf())
                .ok_or(AppError::NoPlatformDir("home"))?,
        };

        let root = std::path::absolute(&candidate)?;
        match TokioFs::metadata(&root).await {
            Ok(meta) if meta.is_dir() => Ok(root),
            _ => Err(AppError::NotADirectory(root)),
        }
    }

    /// Returns the canonical config file path using `directories::ProjectDirs`.
    pub fn config_path() -> Result<PathBuf, AppError> {
        let proj_dirs = ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
            .ok_or(AppError::NoPlatformDir("config"))?;
        Ok(proj_dirs.config_dir().join("config.toml"))
    }

    /// Platform data dir `logs/`, or `./logs` when none can be determined.
    #[must_use]
    pub fn default_log_dir() -> PathBuf {
        ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION).map_or_else(
            || PathBuf::from("logs"),
            |dirs| dirs.data_local_dir().join("logs"),
        )
    }
}
