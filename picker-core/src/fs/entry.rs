//! `src/fs/entry.rs`
//! ============================================================
//! One row of a listing: a path tagged directory / non-directory.
//! The name is derived once so the table never re-parses paths.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use compact_str::CompactString;
use tokio::fs::DirEntry;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    // Shared absolute path, cloned into results and listing requests.
    pub path: Arc<PathBuf>,

    // Last path segment, rendering only.
    pub name: CompactString,

    pub is_dir: bool,
}

impl Entry {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>, is_dir: bool) -> Self {
        let path: PathBuf = path.into();
        let name = display_name(&path);

        Self {
            path: Arc::new(path),
            name,
            is_dir,
        }
    }

    /// A directory entry for `path`, used for the implicit highlight after
    /// each listing.
    #[must_use]
    pub fn directory(path: &Path) -> Self {
        Self::new(path, true)
    }

    /// Build from a `read_dir` item. A symlink keeps its own path but counts
    /// as a directory when its target is one; a dangling link is a file.
    pub async fn from_dir_entry(entry: &DirEntry) -> std::io::Result<Self> {
        let path = entry.path();
        let file_type = entry.file_type().await?;

        let is_dir = if file_type.is_symlink() {
            tokio::fs::metadata(&path)
                .await
                .is_ok_and(|meta| meta.is_dir())
        } else {
            file_type.is_dir()
        };

        Ok(Self::new(path, is_dir))
    }

    #[inline]
    #[must_use]
    pub fn path(&self) -> &Path {
        self.path.as_path()
    }
}

/// Last path segment, or the whole path for roots like `/`.
#[must_use]
pub fn display_name(path: &Path) -> CompactString {
    path.file_name()
        .and_then(OsStr::to_str)
        .map_or_else(
            || CompactString::new(path.to_string_lossy()),
            CompactString::new,
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_is_last_segment() {
        let entry = Entry::new("/storage/emulated/0/Download", true);
        assert_eq!(entry.name, "Download");
        assert!(entry.is_dir);
    }

    #[test]
    fn test_root_name_falls_back_to_path() {
        assert_eq!(display_name(Path::new("/")), "/");
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_symlinks_follow_target_kind() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path();
        std::fs::create_dir(path.join("real")).unwrap();
        std::fs::write(path.join("file.txt"), b"f").unwrap();
        std::os::unix::fs::symlink(path.join("real"), path.join("dir_link")).unwrap();
        std::os::unix::fs::symlink(path.join("file.txt"), path.join("file_link")).unwrap();
        std::os::unix::fs::symlink(path.join("gone"), path.join("dangling")).unwrap();

        let mut read_dir = tokio::fs::read_dir(path).await.unwrap();
        let mut kinds = Vec::new();
        while let Some(dir_entry) = read_dir.next_entry().await.unwrap() {
            let entry = Entry::from_dir_entry(&dir_entry).await.unwrap();
            kinds.push((entry.name.to_string(), entry.is_dir, entry.path().to_path_buf()));
        }
        kinds.sort();

        let link = kinds.iter().find(|(n, ..)| n == "dir_link").unwrap();
        assert!(link.1);
        // The link's own path is kept.
        assert_eq!(link.2, path.join("dir_link"));

        assert!(!kinds.iter().find(|(n, ..)| n == "file_link").unwrap().1);
        assert!(!kinds.iter().find(|(n, ..)| n == "dangling").unwrap().1);
    }
}
