//! ``src/model/picker_mode.rs``
//!
//! Launch-time configuration: what the caller is asking for, and the request
//! code echoed back in the result.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Request code for when the caller wants the path to a directory.
pub const REQUEST_DIRECTORY: i32 = 101;

/// Request code for when the caller wants the path to a specific file.
pub const REQUEST_FILE: i32 = 102;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum PickerMode {
    #[default]
    #[value(name = "directory", alias = "dir")]
    SeekDirectory,

    #[value(name = "file")]
    SeekFile,
}

impl fmt::Display for PickerMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SeekDirectory => write!(f, "directory"),
            Self::SeekFile => write!(f, "file"),
        }
    }
}

/// Immutable for the lifetime of one picker run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LaunchConfig {
    pub mode: PickerMode,
    pub request_code: i32,
}

impl Default for LaunchConfig {
    fn default() -> Self {
        Self {
            mode: PickerMode::SeekDirectory,
            request_code: REQUEST_DIRECTORY,
        }
    }
}

impl LaunchConfig {
    /// Fills in defaults for missing launch flags. Without an explicit mode,
    /// the file request code selects file mode.
    #[must_use]
    pub fn resolve(mode: Option<PickerMode>, request_code: Option<i32>) -> Self {
        let request_code = request_code.unwrap_or(REQUEST_DIRECTORY);
        let mode = mode.unwrap_or(if request_code == REQUEST_FILE {
            PickerMode::SeekFile
        } else {
            PickerMode::SeekDirectory
        });

        Self { mode, request_code }
    }
}
