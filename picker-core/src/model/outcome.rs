//! ``src/model/outcome.rs``
//!
//! The single terminal outcome of a picker run and how it is reported to the
//! caller on stdout.

use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use serde::Serialize;

use crate::error::AppError;

/// Key under which the chosen path is reported.
pub const RESULT_PATH_KEY: &str = "fileExtraPath";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ResultStatus {
    #[serde(rename = "OK")]
    Ok,
    #[serde(rename = "CANCELLED")]
    Cancelled,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickerOutcome {
    Confirmed { request_code: i32, path: PathBuf },
    Cancelled { request_code: i32 },
}

/// Output style for [`PickerOutcome::report`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum ReportFormat {
    /// One JSON object per run.
    #[default]
    Json,

    /// The bare path on success, nothing on cancel.
    Plain,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ReportPayload<'a> {
    request_code: i32,
    status: ResultStatus,
    #[serde(rename = "fileExtraPath", skip_serializing_if = "Option::is_none")]
    file_extra_path: Option<&'a str>,
}

impl PickerOutcome {
    /// A successful pick. Refused for paths that are not valid UTF-8, which
    /// the report could only print altered.
    pub fn confirmed(request_code: i32, path: PathBuf) -> Result<Self, AppError> {
        if path.to_str().is_none() {
            return Err(AppError::NonUtf8Path(path));
        }
        Ok(Self::Confirmed { request_code, path })
    }

    #[must_use]
    pub const fn status(&self) -> ResultStatus {
        match self {
            Self::Confirmed { .. } => ResultStatus::Ok,
            Self::Cancelled { .. } => ResultStatus::Cancelled,
        }
    }

    #[must_use]
    pub const fn request_code(&self) -> i32 {
        match self {
            Self::Confirmed { request_code, .. } | Self::Cancelled { request_code } => {
                *request_code
            }
        }
    }

    #[must_use]
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            Self::Confirmed { path, .. } => Some(path),
            Self::Cancelled { .. } => None,
        }
    }

    fn utf8_path(&self) -> Result<Option<&str>, AppError> {
        self.path()
            .map(|p| p.to_str().ok_or_else(|| AppError::NonUtf8Path(p.to_path_buf())))
            .transpose()
    }

    pub fn to_json(&self) -> Result<String, AppError> {
        let payload = ReportPayload {
            request_code: self.request_code(),
            status: self.status(),
            file_extra_path: self.utf8_path()?,
        };
        Ok(serde_json::to_string(&payload)?)
    }

    /// Write the outcome to `out` in `format`.
    pub fn report<W: Write>(&self, format: ReportFormat, out: &mut W) -> Result<(), AppError> {
        match format {
            ReportFormat::Json => writeln!(out, "{}", self.to_json()?)?,
            ReportFormat::Plain => {
                if let Some(path) = self.utf8_path()? {
                    writeln!(out, "{path}")?;
                }
            }
        }
        out.flush()?;
        Ok(())
    }

    #[must_use]
    pub fn exit_code(&self) -> ExitCode {
        match self.status() {
            ResultStatus::Ok => ExitCode::SUCCESS,
            ResultStatus::Cancelled => ExitCode::from(1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confirmed_json_carries_path() {
        let outcome = PickerOutcome::Confirmed {
            request_code: 102,
            path: PathBuf::from("/storage/emulated/0/Download/report.pdf"),
        };

        let value: serde_json::Value = serde_json::from_str(&outcome.to_json().unwrap()).unwrap();
        assert_eq!(value["requestCode"], 102);
        assert_eq!(value["status"], "OK");
        assert_eq!(
            value[RESULT_PATH_KEY],
            "/storage/emulated/0/Download/report.pdf"
        );
    }

    #[test]
    fn test_cancelled_json_has_no_path() {
        let outcome = PickerOutcome::Cancelled { request_code: 101 };

        let value: serde_json::Value = serde_json::from_str(&outcome.to_json().unwrap()).unwrap();
        assert_eq!(value["status"], "CANCELLED");
        assert!(value.get(RESULT_PATH_KEY).is_none());
        assert_eq!(outcome.status(), ResultStatus::Cancelled);
    }

    #[cfg(unix)]
    #[test]
    fn test_non_utf8_path_is_refused() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let path = PathBuf::from(OsStr::from_bytes(b"/tmp/bad\xff.txt"));
        assert!(matches!(
            PickerOutcome::confirmed(102, path.clone()),
            Err(AppError::NonUtf8Path(_))
        ));

        let built = PickerOutcome::Confirmed {
            request_code: 102,
            path,
        };
        assert!(matches!(built.to_json(), Err(AppError::NonUtf8Path(_))));
        assert!(built.report(ReportFormat::Plain, &mut Vec::new()).is_err());
    }

    #[test]
    fn test_plain_report() {
        let mut out = Vec::new();
        PickerOutcome::Confirmed {
            request_code: 101,
            path: PathBuf::from("/tmp/x"),
        }
        .report(ReportFormat::Plain, &mut out)
        .unwrap();
        assert_eq!(out, b"/tmp/x\n");

        let mut out = Vec::new();
        PickerOutcome::Cancelled { request_code: 101 }
            .report(ReportFormat::Plain, &mut out)
            .unwrap();
        assert!(out.is_empty());
    }
}
