// bases/download_gui/src/panel.rs
use download_primitives::{AudioQuality, BaseFormat, DownloadRequest, Resolution, VideoCodec};
use media_downloader::{DownloadWorker, MediaDownloader, WorkerEvent};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::runtime::Handle;

pub const MISSING_URL: &str = "Please enter a valid URL";
pub const DOWNLOADING: &str = "Downloading...";
pub const COMPLETED: &str = "Download completed!";

/// Current widget values
#[derive(Debug, Clone, PartialEq)]
pub struct DownloadForm {
    pub url: String,
    pub base_format: BaseFormat,
    pub resolution: Resolution,
    pub codec: VideoCodec,
    pub audio_quality: Option<AudioQuality>,
    pub subtitles: bool,
    pub thumbnail: bool,
    pub description: bool,
    pub info_json: bool,
    pub output_dir: String,
}

impl DownloadForm {
    pub fn new(output_dir: &Path) -> Self {
        Self {
            url: String::new(),
            base_format: BaseFormat::default(),
            resolution: Resolution::default(),
            codec: VideoCodec::default(),
            audio_quality: Some(AudioQuality::Best),
            subtitles: false,
            thumbnail: false,
            description: false,
            info_json: false,
            output_dir: output_dir.display().to_string(),
        }
    }

    /// Only a video-only selection has no audio stream to refine yet
    pub fn accepts_audio_quality(&self) -> bool {
        self.base_format == BaseFormat::VideoOnly
    }

    pub fn to_request(&self) -> DownloadRequest {
        let audio_quality = self
            .audio_quality
            .filter(|_| self.accepts_audio_quality());

        let mut request = DownloadRequest::new(self.url.trim())
            .with_base_format(self.base_format)
            .with_resolution(self.resolution)
            .with_codec(self.codec)
            .with_audio_quality(audio_quality);
        request.subtitles = self.subtitles;
        request.thumbnail = self.thumbnail;
        request.description = self.description;
        request.info_json = self.info_json;
        request
    }

    pub fn output_path(&self) -> PathBuf {
        PathBuf::from(self.output_dir.trim())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Running,
    Completed,
    Failed,
}

/// Display state of the download window, driven by worker events
pub struct DownloadPanel {
    pub form: DownloadForm,
    phase: Phase,
    progress: u8,
    status: String,
    worker: Option<DownloadWorker>,
    downloader: Arc<MediaDownloader>,
    runtime: Handle,
}

impl DownloadPanel {
    pub fn new(form: DownloadForm, downloader: Arc<MediaDownloader>, runtime: Handle) -> Self {
        Self {
            form,
            phase: Phase::Idle,
            progress: 0,
            status: String::new(),
            worker: None,
            downloader,
            runtime,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        self.phase == Phase::Running
    }

    /// Whether the Download button is clickable
    pub fn start_enabled(&self) -> bool {
        !self.is_running()
    }

    /// Percentage shown by the progress bar, 0 to 100
    pub fn progress(&self) -> u8 {
        self.progress
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn start_download(&mut self) {
        if self.is_running() {
            tracing::warn!("Ignoring start request while a download is running");
            return;
        }

        if self.form.url.trim().is_empty() {
            self.status = MISSING_URL.to_string();
            return;
        }

        self.phase = Phase::Running;
        self.progress = 0;
        self.status = DOWNLOADING.to_string();

        let request = self.form.to_request();
        tracing::info!("Queueing {} with selector {}", request.url, request.selector());
        self.worker = Some(DownloadWorker::spawn(
            &self.runtime,
            Arc::clone(&self.downloader),
            request,
            self.form.output_path(),
        ));
    }

    /// Apply everything the worker has reported so far. Returns true when
    /// the display changed.
    pub fn poll(&mut self) -> bool {
        let Some(worker) = self.worker.as_mut() else {
            return false;
        };

        let events: Vec<WorkerEvent> = std::iter::from_fn(|| worker.try_next()).collect();
        if worker.is_finished() {
            self.worker = None;
        }

        let changed = !events.is_empty();
        for event in events {
            self.apply(event);
        }
        changed
    }

    fn apply(&mut self, event: WorkerEvent) {
        match event {
            WorkerEvent::Progress(percent) => {
                self.progress = percent.clamp(0.0, 100.0) as u8;
            }
            WorkerEvent::Completed => {
                self.phase = Phase::Completed;
                self.progress = 100;
                self.status = COMPLETED.to_string();
            }
            WorkerEvent::Failed(message) => {
                self.phase = Phase::Failed;
                self.status = format!("Error: {}", message);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use media_downloader::{DownloadError, Downloader, ProgressHook, ProgressRecord, YtDlpOptions};
    use std::sync::Mutex;
    use std::time::Duration;
    use tempfile::TempDir;

    #[derive(Default)]
    struct RecordingDownloader {
        progress: Vec<ProgressRecord>,
        failure: Option<String>,
        calls: Mutex<Vec<YtDlpOptions>>,
    }

    impl RecordingDownloader {
        fn calls(&self) -> Vec<YtDlpOptions> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl Downloader for RecordingDownloader {
        async fn check_available(&self) -> Result<(), DownloadError> {
            Ok(())
        }

        async fn download(
            &self,
            options: &YtDlpOptions,
            _url: &str,
            progress: Option<ProgressHook>,
        ) -> Result<(), DownloadError> {
            self.calls.lock().unwrap().push(options.clone());
            if let Some(hook) = progress {
                self.progress.iter().for_each(|record| hook(record));
            }
            match &self.failure {
                Some(message) => Err(DownloadError::DownloadFailed(message.clone())),
                None => Ok(()),
            }
        }
    }

    fn panel(stub: Arc<RecordingDownloader>, output_dir: &Path) -> DownloadPanel {
        let downloader = Arc::new(MediaDownloader::new_with_downloader(stub));
        DownloadPanel::new(DownloadForm::new(output_dir), downloader, Handle::current())
    }

    async fn settle(panel: &mut DownloadPanel) {
        tokio::time::timeout(Duration::from_secs(5), async {
            while panel.is_running() {
                panel.poll();
                tokio::time::sleep(Duration::from_millis(5)).await;
            }
        })
        .await
        .expect("worker did not finish");
    }

    #[tokio::test]
    async fn empty_url_never_reaches_the_downloader() {
        let temp_dir = TempDir::new().unwrap();
        let stub = Arc::new(RecordingDownloader::default());
        let mut panel = panel(stub.clone(), temp_dir.path());
        panel.form.url = "   ".to_string();

        panel.start_download();
        tokio::time::sleep(Duration::from_millis(20)).await;
        panel.poll();

        assert_eq!(panel.status(), MISSING_URL);
        assert_eq!(panel.phase(), Phase::Idle);
        assert!(panel.start_enabled());
        assert!(stub.calls().is_empty());
    }

    #[tokio::test]
    async fn start_disables_the_button_and_resets_progress() {
        let temp_dir = TempDir::new().unwrap();
        let stub = Arc::new(RecordingDownloader::default());
        let mut panel = panel(stub, temp_dir.path());
        panel.form.url = "https://example.com/v".to_string();
        panel.progress = 55;

        panel.start_download();

        assert!(!panel.start_enabled());
        assert_eq!(panel.progress(), 0);
        assert_eq!(panel.status(), DOWNLOADING);
        settle(&mut panel).await;
    }

    #[tokio::test]
    async fn success_drives_progress_to_100() {
        let temp_dir = TempDir::new().unwrap();
        let stub = Arc::new(RecordingDownloader {
            progress: vec![
                ProgressRecord::new("downloading", Some("12.0%")),
                ProgressRecord::new("downloading", Some("99.9%")),
            ],
            ..Default::default()
        });
        let mut panel = panel(stub.clone(), temp_dir.path());
        panel.form.url = "https://example.com/v".to_string();

        panel.start_download();
        settle(&mut panel).await;

        assert_eq!(panel.phase(), Phase::Completed);
        assert_eq!(panel.progress(), 100);
        assert_eq!(panel.status(), COMPLETED);
        assert!(panel.start_enabled());
        assert_eq!(stub.calls().len(), 1);
    }

    #[tokio::test]
    async fn failure_keeps_last_progress_and_shows_message() {
        let temp_dir = TempDir::new().unwrap();
        let stub = Arc::new(RecordingDownloader {
            progress: vec![
                ProgressRecord::new("downloading", Some("37.5%")),
                ProgressRecord::new("downloading", Some("garbage")),
            ],
            failure: Some("Unable to download webpage: timed out".to_string()),
            ..Default::default()
        });
        let mut panel = panel(stub, temp_dir.path());
        panel.form.url = "https://example.com/v".to_string();

        panel.start_download();
        settle(&mut panel).await;

        assert_eq!(panel.phase(), Phase::Failed);
        assert!(panel.status().contains("Unable to download webpage: timed out"));
        assert_eq!(panel.progress(), 37);
        assert!(panel.start_enabled());
    }

    #[tokio::test]
    async fn second_start_while_running_is_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let stub = Arc::new(RecordingDownloader::default());
        let mut panel = panel(stub.clone(), temp_dir.path());
        panel.form.url = "https://example.com/v".to_string();

        panel.start_download();
        panel.start_download();
        settle(&mut panel).await;

        assert_eq!(stub.calls().len(), 1);
    }

    #[tokio::test]
    async fn panel_is_reusable_after_failure() {
        let temp_dir = TempDir::new().unwrap();
        let stub = Arc::new(RecordingDownloader {
            failure: Some("boom".to_string()),
            ..Default::default()
        });
        let mut panel = panel(stub.clone(), temp_dir.path());
        panel.form.url = "https://example.com/v".to_string();

        panel.start_download();
        settle(&mut panel).await;
        panel.start_download();
        settle(&mut panel).await;

        assert_eq!(stub.calls().len(), 2);
        assert_eq!(panel.status(), "Error: boom");
    }

    #[tokio::test]
    async fn form_state_reaches_yt_dlp_options() {
        let temp_dir = TempDir::new().unwrap();
        let stub = Arc::new(RecordingDownloader::default());
        let mut panel = panel(stub.clone(), temp_dir.path());
        panel.form.url = " https://example.com/v ".to_string();
        panel.form.base_format = BaseFormat::VideoOnly;
        panel.form.audio_quality = Some(AudioQuality::MinKbps(128));
        panel.form.subtitles = true;

        panel.start_download();
        settle(&mut panel).await;

        let calls = stub.calls();
        assert_eq!(calls[0].format, "bestvideo+worstaudio[abr>=128]");
        assert_eq!(calls[0].subtitle_langs, ["en"]);
        assert!(calls[0].output_template.starts_with(temp_dir.path()));
    }

    #[test]
    fn default_video_only_merges_best_audio() {
        let mut form = DownloadForm::new(Path::new("/tmp"));
        form.url = "https://example.com/v".to_string();

        assert_eq!(form.to_request().selector(), "bestvideo+bestaudio/best");

        form.base_format = BaseFormat::VideoOnly;
        assert_eq!(form.to_request().selector(), "bestvideo+bestaudio");

        form.audio_quality = None;
        assert_eq!(form.to_request().selector(), "bestvideo");
    }

    #[test]
    fn audio_quality_only_refines_video_only() {
        let mut form = DownloadForm::new(Path::new("/tmp"));
        form.url = "https://example.com/v".to_string();
        form.audio_quality = Some(AudioQuality::Best);

        form.base_format = BaseFormat::AudioOnly;
        assert_eq!(form.to_request().selector(), "bestaudio");

        form.base_format = BaseFormat::VideoOnly;
        assert_eq!(form.to_request().selector(), "bestvideo+bestaudio");
    }
}
