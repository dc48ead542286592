//! ``src/controller/selection.rs``
//!
//! What Open and Select mean for a highlighted entry, per picker mode. Pure
//! functions; the controller carries out the returned activation.

use std::path::PathBuf;

use crate::fs::entry::Entry;
use crate::model::picker_mode::PickerMode;

/// Notice shown when Open is used on something that is not a directory.
pub const OPEN_REJECTED: &str = "Open applies to directories only";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Activation {
    /// Hide the action panel and list this directory.
    Navigate(PathBuf),

    /// End the picker with this path.
    Finalize(PathBuf),

    /// Refuse with a notice.
    Reject(&'static str),

    NoOp,
}

/// Open enters directories and refuses everything else.
#[must_use]
pub fn open(entry: &Entry) -> Activation {
    if entry.is_dir {
        Activation::Navigate(entry.path().to_path_buf())
    } else {
        Activation::Reject(OPEN_REJECTED)
    }
}

#[must_use]
pub fn select(mode: PickerMode, entry: &Entry) -> Activation {
    match (mode, entry.is_dir) {
        (PickerMode::SeekDirectory, true) | (PickerMode::SeekFile, false) => {
            Activation::Finalize(entry.path().to_path_buf())
        }
        (PickerMode::SeekDirectory, false) => Activation::NoOp,
        (PickerMode::SeekFile, true) => Activation::Navigate(entry.path().to_path_buf()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dir() -> Entry {
        Entry::new("/r/Download", true)
    }

    fn file() -> Entry {
        Entry::new("/r/report.pdf", false)
    }

    #[test]
    fn test_open() {
        assert_eq!(open(&dir()), Activation::Navigate(PathBuf::from("/r/Download")));
        assert_eq!(open(&file()), Activation::Reject(OPEN_REJECTED));
    }

    #[test]
    fn test_select_seeking_directory() {
        assert_eq!(
            select(PickerMode::SeekDirectory, &dir()),
            Activation::Finalize(PathBuf::from("/r/Download"))
        );
        assert_eq!(select(PickerMode::SeekDirectory, &file()), Activation::NoOp);
    }

    #[test]
    fn test_select_seeking_file() {
        assert_eq!(
            select(PickerMode::SeekFile, &dir()),
            Activation::Navigate(PathBuf::from("/r/Download"))
        );
        assert_eq!(
            select(PickerMode::SeekFile, &file()),
            Activation::Finalize(PathBuf::from("/r/report.pdf"))
        );
    }
}
