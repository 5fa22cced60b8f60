// components/media_downloader/src/ytdlp.rs
use crate::options::YtDlpOptions;
use crate::progress::{ProgressHook, ProgressRecord};
use crate::types::DownloadError;
use async_trait::async_trait;
use std::path::PathBuf;
use std::process::Stdio;
use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};
use tokio::process::Command;

#[async_trait]
pub trait Downloader {
    /// Check if the downloader is available and has all required dependencies
    async fn check_available(&self) -> Result<(), DownloadError>;

    /// Download a single URL, reporting progress to `progress` when given
    async fn download(
        &self,
        options: &YtDlpOptions,
        url: &str,
        progress: Option<ProgressHook>,
    ) -> Result<(), DownloadError>;
}

pub struct YtDlp {
    program: PathBuf,
}

impl YtDlp {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    fn command(&self, options: &YtDlpOptions, url: &str, with_progress: bool) -> Command {
        let mut command = Command::new(&self.program);
        command.args(options.to_args());
        if with_progress {
            command.args(YtDlpOptions::progress_args());
        }
        command.arg("--").arg(url);
        command.kill_on_drop(true);
        command
    }
}

impl Default for YtDlp {
    fn default() -> Self {
        Self::new("yt-dlp")
    }
}

#[async_trait]
impl Downloader for YtDlp {
    async fn check_available(&self) -> Result<(), DownloadError> {
        which::which(&self.program)
            .map(|_| ())
            .map_err(|_| DownloadError::DependencyNotFound(self.program.display().to_string()))
    }

    async fn download(
        &self,
        options: &YtDlpOptions,
        url: &str,
        progress: Option<ProgressHook>,
    ) -> Result<(), DownloadError> {
        let mut command = self.command(options, url, progress.is_some());
        // Without a hook yt-dlp draws its own progress on the terminal
        if progress.is_some() {
            command.stdout(Stdio::piped());
        } else {
            command.stdout(Stdio::inherit());
        }
        command.stderr(Stdio::piped()).stdin(Stdio::null());

        tracing::info!("Running {} -f {} {}", self.program.display(), options.format, url);
        let mut child = command.spawn()?;

        let stderr = child.stderr.take();
        let stderr_task = tokio::spawn(async move {
            match stderr {
                Some(stderr) => collect_stderr(stderr).await,
                None => Vec::new(),
            }
        });

        if let (Some(hook), Some(stdout)) = (progress, child.stdout.take()) {
            let read = for_each_line(stdout, |line| match ProgressRecord::parse_line(&line) {
                Some(record) => hook(&record),
                None => tracing::debug!("yt-dlp: {}", line),
            })
            .await;
            if let Err(e) = read {
                tracing::warn!("Stopped reading yt-dlp progress: {}", e);
            }
        }

        let status = child.wait().await?;
        let stderr_lines = stderr_task
            .await
            .map_err(|e| DownloadError::DownloadFailed(e.to_string()))?;

        if !status.success() {
            return Err(DownloadError::DownloadFailed(failure_message(
                &stderr_lines,
                &status.to_string(),
            )));
        }

        tracing::info!("yt-dlp finished downloading {}", url);
        Ok(())
    }
}

/// Feed every line of `reader` to `f`. Bytes that are not UTF-8 (titles
/// printed in a legacy code page) are replaced rather than ending the stream.
async fn for_each_line(
    reader: impl AsyncRead + Unpin,
    mut f: impl FnMut(String),
) -> std::io::Result<()> {
    let mut reader = BufReader::new(reader);
    let mut buf = Vec::new();
    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf).await? == 0 {
            return Ok(());
        }
        let line = String::from_utf8_lossy(&buf);
        f(line.trim_end_matches(['\r', '\n']).to_string());
    }
}

async fn collect_stderr(stderr: impl AsyncRead + Unpin) -> Vec<String> {
    let mut collected = Vec::new();
    let read = for_each_line(stderr, |line| {
        tracing::warn!("yt-dlp: {}", line);
        collected.push(line);
    })
    .await;
    if let Err(e) = read {
        tracing::warn!("Stopped reading yt-dlp stderr: {}", e);
    }
    collected
}

/// Pick the text to show the user when yt-dlp exits unsuccessfully
fn failure_message(stderr_lines: &[String], status: &str) -> String {
    let errors: Vec<&str> = stderr_lines
        .iter()
        .filter_map(|line| line.strip_prefix("ERROR:"))
        .map(str::trim)
        .collect();
    if !errors.is_empty() {
        return errors.join("\n");
    }

    let stderr = stderr_lines.join("\n");
    let stderr = stderr.trim();
    if !stderr.is_empty() {
        return stderr.to_string();
    }

    format!("yt-dlp exited with status: {}", status)
}

#[cfg(test)]
pub mod stub {
    use super::*;
    use std::sync::Mutex;

    /// Records every call and replays canned progress
    #[derive(Default)]
    pub struct DownloaderStub {
        pub progress: Vec<ProgressRecord>,
        pub failure: Option<String>,
        pub calls: Mutex<Vec<(YtDlpOptions, String)>>,
    }

    #[async_trait]
    impl Downloader for DownloaderStub {
        async fn check_available(&self) -> Result<(), DownloadError> {
            Ok(())
        }

        async fn download(
            &self,
            options: &YtDlpOptions,
            url: &str,
            progress: Option<ProgressHook>,
        ) -> Result<(), DownloadError> {
            self.calls
                .lock()
                .unwrap()
                .push((options.clone(), url.to_string()));
            if let Some(hook) = progress {
                self.progress.iter().for_each(|record| hook(record));
            }
            match &self.failure {
                Some(message) => Err(DownloadError::DownloadFailed(message.clone())),
                None => Ok(()),
            }
        }
    }
}
