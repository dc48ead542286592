//! ``src/fs/dir_lister.rs``
//!
//! # `Directory Lister`: Asynchronous Directory Enumeration
//!
//! Lists one directory off the interactive task and hands the entries back
//! through the task-result channel. Entries keep the order the file system
//! yields them in; nothing is filtered or sorted.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::fs::{self, ReadDir};
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::controller::event_loop::TaskResult;
use crate::error::AppError;
use crate::fs::entry::Entry;

/// Reads the immediate children of `path`.
///
/// Entries whose type cannot be read are skipped and logged. Failure to open
/// the directory itself is returned to the caller.
pub async fn list_dir(path: &Path) -> Result<Vec<Entry>, AppError> {
    let mut read_dir: ReadDir = fs::read_dir(path)
        .await
        .map_err(|e| AppError::listing_failed(path, e))?;

    let mut entries: Vec<Entry> = Vec::new();

    loop {
        let dir_entry = match read_dir.next_entry().await {
            Ok(Some(e)) => e,
            Ok(None) => break,
            Err(e) => {
                warn!("Error while reading {:?}: {}", path, e);
                break;
            }
        };

        match Entry::from_dir_entry(&dir_entry).await {
            Ok(entry) => entries.push(entry),
            Err(e) => {
                debug!("Skipping {:?}: {}", dir_entry.path(), e);
            }
        }
    }

    Ok(entries)
}

/// Spawns one listing. The result is sent unless `cancel` fires first.
pub fn spawn_listing(
    request_id: u64,
    dir: Arc<PathBuf>,
    cancel: CancellationToken,
    task_tx: UnboundedSender<TaskResult>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let start: Instant = Instant::now();

        let result = tokio::select! {
            biased;

            () = cancel.cancelled() => Err(AppError::Superseded(dir.to_path_buf())),

            listed = list_dir(&dir) => listed,
        };

        let exec: Duration = start.elapsed();

        if result.as_ref().is_err_and(AppError::is_superseded) {
            debug!(request_id, "Listing of {:?} superseded after {:?}", dir, exec);
            return;
        }

        info!(
            marker = "PERF_DIRECTORY_LIST",
            request_id,
            entries = result.as_ref().map_or(0, Vec::len),
            "Listed {} in {:?}",
            dir.display(),
            exec
        );

        let _ = task_tx.send(TaskResult::Listing {
            request_id,
            dir,
            result,
            exec,
        });
    })
}

/// Issues listing requests so that only the latest one counts.
///
/// Each request cancels the previous in-flight one and gets a fresh id; the
/// controller asks [`DirLister::accept`] before applying a completion.
#[derive(Debug)]
pub struct DirLister {
    task_tx: UnboundedSender<TaskResult>,
    next_id: u64,
    in_flight: Option<(u64, CancellationToken)>,
}

impl DirLister {
    #[must_use]
    pub const fn new(task_tx: UnboundedSender<TaskResult>) -> Self {
        Self {
            task_tx,
            next_id: 1,
            in_flight: None,
        }
    }

    /// Start listing `dir`, superseding anything still running.
    pub fn request(&mut self, dir: &Path) -> u64 {
        if let Some((old_id, token)) = self.in_flight.take() {
            debug!(old_id, "Cancelling superseded listing");
            token.cancel();
        }

        let request_id = self.next_id;
        self.next_id += 1;

        let token = CancellationToken::new();
        spawn_listing(
            request_id,
            Arc::new(dir.to_path_buf()),
            token.clone(),
            self.task_tx.clone(),
        );
        self.in_flight = Some((request_id, token));

        request_id
    }

    /// True if `request_id` is the latest request; it is then no longer in
    /// flight. Stale ids return false and change nothing.
    pub fn accept(&mut self, request_id: u64) -> bool {
        match &self.in_flight {
            Some((id, _)) if *id == request_id => {
                self.in_flight = None;
                true
            }
            _ => false,
        }
    }

    #[must_use]
    pub const fn in_flight(&self) -> bool {
        self.in_flight.is_some()
    }
}
