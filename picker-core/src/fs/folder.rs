//! ``src/fs/folder.rs``
//!
//! Folder creation for names typed into the naming prompt. The controller
//! re-lists the current directory whatever the outcome.

use std::path::{Component, MAIN_SEPARATOR, Path, PathBuf};
use std::sync::Arc;

use tokio::fs;
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;
use tracing::{info, warn};

use crate::controller::event_loop::TaskResult;
use crate::error::AppError;

/// Name used when the prompt is submitted empty or blank.
pub const DEFAULT_FOLDER_NAME: &str = "New Folder";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FolderOutcome {
    Created(PathBuf),

    /// Something (file or directory) already sits at the candidate path.
    AlreadyExists(PathBuf),
}

/// Normalizes prompt input into a relative folder name.
///
/// Leading separators are dropped so the result always joins under the
/// current directory. Inner separators are kept and become nested folders.
#[must_use]
pub fn folder_name(input: &str) -> &str {
    let name = input.trim().trim_start_matches(['/', MAIN_SEPARATOR]);
    if name.trim().is_empty() {
        DEFAULT_FOLDER_NAME
    } else {
        name
    }
}

/// `current_dir/<name>`, refused when the name climbs out with `..` or
/// names another root.
pub fn candidate_path(current_dir: &Path, input: &str) -> Result<PathBuf, AppError> {
    let name = folder_name(input);
    let stays_inside = Path::new(name)
        .components()
        .all(|c| matches!(c, Component::Normal(_) | Component::CurDir));

    if !stays_inside {
        return Err(AppError::InvalidFolderName(name.to_owned()));
    }
    Ok(current_dir.join(name))
}

/// Creates `current_dir/<name>` with any missing intermediate directories,
/// unless something already exists there.
pub async fn create_folder(current_dir: &Path, input: &str) -> Result<FolderOutcome, AppError> {
    let candidate = candidate_path(current_dir, input)?;

    if fs::symlink_metadata(&candidate).await.is_ok() {
        info!("Folder {:?} already exists, leaving it alone", candidate);
        return Ok(FolderOutcome::AlreadyExists(candidate));
    }

    fs::create_dir_all(&candidate)
        .await
        .map_err(|e| AppError::create_folder(&candidate, e))?;

    info!("Created folder {:?}", candidate);
    Ok(FolderOutcome::Created(candidate))
}

/// Runs [`create_folder`] off the interactive task.
pub fn spawn_create_folder(
    current_dir: Arc<PathBuf>,
    input: String,
    task_tx: UnboundedSender<TaskResult>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let result = create_folder(&current_dir, &input).await;
        if let Err(e) = &result {
            warn!("{}", e);
        }

        let _ = task_tx.send(TaskResult::FolderCreated {
            dir: current_dir,
            result,
        });
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_blank_names_use_default() {
        assert_eq!(folder_name(""), DEFAULT_FOLDER_NAME);
        assert_eq!(folder_name("   "), DEFAULT_FOLDER_NAME);
        assert_eq!(folder_name("/"), DEFAULT_FOLDER_NAME);
        assert_eq!(folder_name("  photos "), "photos");
    }

    #[test]
    fn test_leading_separator_stays_under_current() {
        let current = Path::new("/storage/emulated/0");
        assert_eq!(
            candidate_path(current, "/etc").unwrap(),
            PathBuf::from("/storage/emulated/0/etc")
        );
    }

    #[test]
    fn test_parent_components_are_refused() {
        let current = Path::new("/storage/emulated/0");
        for name in ["..", "../escaped", "a/../../x", "./.."] {
            assert!(
                matches!(
                    candidate_path(current, name),
                    Err(AppError::InvalidFolderName(_))
                ),
                "{name} should be refused"
            );
        }
        assert_eq!(
            candidate_path(current, "./a/b").unwrap(),
            PathBuf::from("/storage/emulated/0/./a/b")
        );
    }

    #[tokio::test]
    async fn test_escaping_name_creates_nothing() {
        let tmp = TempDir::new().unwrap();
        let current = tmp.path().join("cur");
        fs::create_dir(&current).await.unwrap();

        let result = create_folder(&current, "../escaped").await;

        assert!(matches!(result, Err(AppError::InvalidFolderName(_))));
        assert!(!tmp.path().join("escaped").exists());
    }

    #[tokio::test]
    async fn test_empty_name_creates_new_folder() {
        let tmp = TempDir::new().unwrap();

        let outcome = create_folder(tmp.path(), "").await.unwrap();

        let expected = tmp.path().join("New Folder");
        assert_eq!(outcome, FolderOutcome::Created(expected.clone()));
        assert!(expected.is_dir());
    }

    #[tokio::test]
    async fn test_collision_is_left_alone() {
        let tmp = TempDir::new().unwrap();
        let existing = tmp.path().join("New Folder");
        fs::create_dir(&existing).await.unwrap();
        fs::write(existing.join("keep.txt"), b"k").await.unwrap();

        let outcome = create_folder(tmp.path(), " ").await.unwrap();

        assert_eq!(outcome, FolderOutcome::AlreadyExists(existing.clone()));
        assert!(existing.join("keep.txt").exists());
    }

    #[tokio::test]
    async fn test_file_collision_is_not_replaced() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("notes"), b"n").await.unwrap();

        let outcome = create_folder(tmp.path(), "notes").await.unwrap();

        assert!(matches!(outcome, FolderOutcome::AlreadyExists(_)));
        assert!(tmp.path().join("notes").is_file());
    }

    #[tokio::test]
    async fn test_nested_segments_are_created() {
        let tmp = TempDir::new().unwrap();

        create_folder(tmp.path(), "a/b/c").await.unwrap();

        assert!(tmp.path().join("a").join("b").join("c").is_dir());
    }
}
