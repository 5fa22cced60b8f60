// components/media_downloader/src/worker.rs
use crate::progress::{ProgressHook, ProgressRecord};
use crate::types::DownloadError;
use crate::MediaDownloader;
use download_primitives::DownloadRequest;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::runtime::Handle;
use tokio::sync::mpsc::{self, error::TryRecvError, UnboundedReceiver};

/// Notification from a background download to whoever displays it.
/// Zero or more `Progress` events are followed by exactly one terminal event.
#[derive(Debug, Clone, PartialEq)]
pub enum WorkerEvent {
    Progress(f32),
    Completed,
    Failed(String),
}

impl WorkerEvent {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, WorkerEvent::Progress(_))
    }
}

/// A single download running on a tokio task
pub struct DownloadWorker {
    events: UnboundedReceiver<WorkerEvent>,
    finished: bool,
}

impl DownloadWorker {
    pub fn spawn(
        runtime: &Handle,
        downloader: Arc<MediaDownloader>,
        request: DownloadRequest,
        output_dir: PathBuf,
    ) -> Self {
        let (tx, events) = mpsc::unbounded_channel();

        let progress_tx = tx.clone();
        let hook: ProgressHook = Arc::new(move |record: &ProgressRecord| {
            if !record.is_downloading() {
                return;
            }
            // Unparseable percentages are dropped
            if let Some(percent) = record.percent() {
                let _ = progress_tx.send(WorkerEvent::Progress(percent));
            }
        });

        runtime.spawn(async move {
            tracing::info!("Starting download of {}", request.url);
            let event = match downloader
                .download(&request, Some(output_dir.as_path()), Some(hook))
                .await
            {
                Ok(()) => WorkerEvent::Completed,
                Err(e) => {
                    tracing::error!("Download of {} failed: {}", request.url, e);
                    WorkerEvent::Failed(e.to_string())
                }
            };
            let _ = tx.send(event);
        });

        Self {
            events,
            finished: false,
        }
    }

    /// Next pending event, without waiting
    pub fn try_next(&mut self) -> Option<WorkerEvent> {
        if self.finished {
            return None;
        }
        let event = match self.events.try_recv() {
            Ok(event) => event,
            Err(TryRecvError::Empty) => return None,
            Err(TryRecvError::Disconnected) => {
                WorkerEvent::Failed(DownloadError::WorkerStopped.to_string())
            }
        };
        self.finished = event.is_terminal();
        Some(event)
    }

    /// Wait for the next event; `None` once the terminal event was handed out
    pub async fn next(&mut self) -> Option<WorkerEvent> {
        if self.finished {
            return None;
        }
        let event = self
            .events
            .recv()
            .await
            .unwrap_or_else(|| WorkerEvent::Failed(DownloadError::WorkerStopped.to_string()));
        self.finished = event.is_terminal();
        Some(event)
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }
}
