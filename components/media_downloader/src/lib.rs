// components/media_downloader/src/lib.rs
mod options;
mod progress;
mod types;
mod worker;
mod ytdlp;

use std::path::Path;
use std::sync::Arc;

pub use download_primitives::DownloadRequest;
pub use options::{YtDlpOptions, TITLE_TEMPLATE};
pub use progress::{ProgressHook, ProgressRecord};
pub use types::DownloadError;
pub use worker::{DownloadWorker, WorkerEvent};
pub use ytdlp::{Downloader, YtDlp};

pub struct MediaDownloader {
    downloader: Arc<dyn Downloader + Send + Sync>,
}

impl MediaDownloader {
    /// Create a MediaDownloader backed by the yt-dlp executable at `program`
    pub fn new(program: impl Into<std::path::PathBuf>) -> Self {
        Self::new_with_downloader(Arc::new(YtDlp::new(program)))
    }

    /// Create a new MediaDownloader with a specific downloader implementation
    pub fn new_with_downloader(downloader: Arc<dyn Downloader + Send + Sync>) -> Self {
        Self { downloader }
    }

    /// Download `request`, writing into `output_dir` or the working directory
    pub async fn download(
        &self,
        request: &DownloadRequest,
        output_dir: Option<&Path>,
        progress: Option<ProgressHook>,
    ) -> Result<(), DownloadError> {
        self.downloader.check_available().await?;

        // Create the target directory if it doesn't exist
        if let Some(dir) = output_dir {
            tokio::fs::create_dir_all(dir).await?;
        }

        let options = YtDlpOptions::from_request(request, output_dir);
        tracing::debug!("Download options: {:?}", options);

        self.downloader
            .download(&options, &request.url, progress)
            .await
    }
}
