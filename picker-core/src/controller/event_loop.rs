//! ``src/controller/event_loop.rs``
//! ============================================================================
//! # Event Loop
//!
//! Merges terminal events, background task results, a UI tick and the
//! shutdown signal into one stream of [`Action`]s. Nothing here mutates
//! picker state; the controller does that on the same task.

use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};

use crossterm::event::{Event as TermEvent, KeyEventKind};
use futures::{Stream, StreamExt};
use tokio::sync::{Notify, mpsc};
use tokio::time::{Interval, MissedTickBehavior};
use tracing::{debug, info, trace};

use crate::controller::actions::Action;
use crate::error::AppError;
use crate::fs::entry::Entry;
use crate::fs::folder::FolderOutcome;

/// How often animations and notices are advanced.
pub const TICK_RATE: Duration = Duration::from_millis(50);

#[derive(Debug, Clone)]
pub enum TaskResult {
    /// A directory listing finished.
    Listing {
        request_id: u64,
        dir: Arc<PathBuf>,
        result: Result<Vec<Entry>, AppError>,
        exec: Duration,
    },

    /// The folder creation bridge finished.
    FolderCreated {
        dir: Arc<PathBuf>,
        result: Result<FolderOutcome, AppError>,
    },
}

#[derive(Debug, Clone, Copy, Default)]
pub struct MetricsSnap {
    pub terminal_events: u64,
    pub tasks: u64,
    pub ticks: u64,
}

pub struct EventLoop<S> {
    events: S,
    task_rx: mpsc::UnboundedReceiver<TaskResult>,
    shutdown: Arc<Notify>,
    tick: Interval,
    metrics: MetricsSnap,
    started: Instant,
}

impl<S> EventLoop<S>
where
    S: Stream<Item = io::Result<TermEvent>> + Unpin,
{
    pub fn new(
        events: S,
        task_rx: mpsc::UnboundedReceiver<TaskResult>,
        shutdown: Arc<Notify>,
    ) -> Self {
        info!("Initializing event loop");

        let mut tick = tokio::time::interval(TICK_RATE);
        tick.set_missed_tick_behavior(MissedTickBehavior::Skip);

        Self {
            events,
            task_rx,
            shutdown,
            tick,
            metrics: MetricsSnap::default(),
            started: Instant::now(),
        }
    }

    /// Wait for the next action. `None` once every source is exhausted.
    pub async fn next_action(&mut self) -> Option<Action> {
        loop {
            tokio::select! {
                () = self.shutdown.notified() => {
                    info!("Shutdown signal received");
                    return Some(Action::Cancel);
                }

                maybe_event = self.events.next() => {
                    match maybe_event {
                        Some(Ok(event)) => {
                            self.metrics.terminal_events += 1;
                            if let Some(action) = Self::map_terminal_event(event) {
                                return Some(action);
                            }
                        }
                        Some(Err(e)) => {
                            debug!("Terminal event error: {}", e);
                        }
                        None => {
                            info!("Terminal event stream closed");
                            return None;
                        }
                    }
                }

                Some(task_result) = self.task_rx.recv() => {
                    self.metrics.tasks += 1;
                    debug!("Task result received");
                    return Some(Action::TaskResult(task_result));
                }

                _ = self.tick.tick() => {
                    self.metrics.ticks += 1;
                    return Some(Action::Tick);
                }
            }
        }
    }

    fn map_terminal_event(event: TermEvent) -> Option<Action> {
        trace!("Terminal event: {:?}", event);
        match event {
            TermEvent::Key(key) if key.kind != KeyEventKind::Release => Some(Action::Key(key)),
            TermEvent::Resize(w, h) => Some(Action::Resize(w, h)),
            _ => None,
        }
    }

    #[must_use]
    pub const fn snapshot_metrics(&self) -> MetricsSnap {
        self.metrics
    }

    #[must_use]
    pub fn uptime(&self) -> Duration {
        self.started.elapsed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn key(code: KeyCode) -> io::Result<TermEvent> {
        Ok(TermEvent::Key(KeyEvent::new(code, KeyModifiers::NONE)))
    }

    #[tokio::test]
    async fn test_terminal_keys_become_actions() {
        let (_tx, rx) = mpsc::unbounded_channel();
        let events = futures::stream::iter(vec![key(KeyCode::Char('j'))]);
        let mut event_loop = EventLoop::new(events, rx, Arc::new(Notify::new()));

        // The first interval tick fires immediately; skip ticks.
        let mut action = event_loop.next_action().await;
        while matches!(action, Some(Action::Tick)) {
            action = event_loop.next_action().await;
        }

        match action {
            Some(Action::Key(k)) => assert_eq!(k.code, KeyCode::Char('j')),
            other => panic!("Expected key action, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_task_results_are_forwarded() {
        let (tx, rx) = mpsc::unbounded_channel();
        let events = futures::stream::pending::<io::Result<TermEvent>>();
        let mut event_loop = EventLoop::new(events, rx, Arc::new(Notify::new()));

        tx.send(TaskResult::FolderCreated {
            dir: Arc::new(PathBuf::from("/r")),
            result: Ok(FolderOutcome::Created(PathBuf::from("/r/New Folder"))),
        })
        .unwrap();

        let mut action = event_loop.next_action().await;
        while matches!(action, Some(Action::Tick)) {
            action = event_loop.next_action().await;
        }

        assert!(matches!(
            action,
            Some(Action::TaskResult(TaskResult::FolderCreated { .. }))
        ));
        assert_eq!(event_loop.snapshot_metrics().tasks, 1);
    }

    #[tokio::test]
    async fn test_shutdown_cancels() {
        let (_tx, rx) = mpsc::unbounded_channel();
        let shutdown = Arc::new(Notify::new());
        let mut event_loop = EventLoop::new(
            futures::stream::pending::<io::Result<TermEvent>>(),
            rx,
            shutdown.clone(),
        );

        shutdown.notify_one();

        let mut action = event_loop.next_action().await;
        while matches!(action, Some(Action::Tick)) {
            action = event_loop.next_action().await;
        }
        assert!(matches!(action, Some(Action::Cancel)));
    }
}
