// bases/download_cli/src/app.rs
use crate::config::Config;
use crate::output::OutputHandler;
use color_eyre::Result;
use media_downloader::MediaDownloader;
use std::sync::Arc;

pub struct App {
    config: Config,
    downloader: Arc<MediaDownloader>,
    output: OutputHandler,
}

impl App {
    pub fn new(config: Config) -> Self {
        let downloader = Arc::new(MediaDownloader::new(&config.yt_dlp));
        Self::new_with_downloader(config, downloader)
    }

    /// Create an App with a specific downloader
    pub fn new_with_downloader(config: Config, downloader: Arc<MediaDownloader>) -> Self {
        let output = OutputHandler::new(config.verbose);
        Self {
            config,
            downloader,
            output,
        }
    }

    pub async fn run(&self) -> Result<()> {
        tracing::debug!("Using yt-dlp at {}", self.config.yt_dlp.display());
        self.output.print_download_start(&self.config.request);

        // Working directory, yt-dlp draws its own progress
        self.downloader
            .download(&self.config.request, None, None)
            .await?;

        self.output.print_download_complete();

        Ok(())
    }

    /// Run once and report the outcome, returning the process exit code
    pub async fn execute(&self) -> i32 {
        match self.run().await {
            Ok(()) => 0,
            Err(error) => {
                self.output.print_error(&error);
                1
            }
        }
    }
}
