// components/media_downloader/src/progress.rs
use crate::options::PROGRESS_MARKER;
use std::sync::Arc;

/// Callback invoked for every progress record yt-dlp reports
pub type ProgressHook = Arc<dyn Fn(&ProgressRecord) + Send + Sync>;

/// One status update emitted by yt-dlp during a transfer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressRecord {
    /// e.g. "downloading", "finished", "error"
    pub status: String,
    /// Human-readable percentage as yt-dlp printed it, e.g. " 42.3%"
    pub percent_str: Option<String>,
}

impl ProgressRecord {
    pub fn new(status: impl Into<String>, percent_str: Option<&str>) -> Self {
        Self {
            status: status.into(),
            percent_str: percent_str.map(str::to_string),
        }
    }

    /// Parse a line produced by the progress template. Any other output
    /// yields `None`.
    pub fn parse_line(line: &str) -> Option<Self> {
        let rest = line.trim().strip_prefix(PROGRESS_MARKER)?;
        let mut fields = rest.split_whitespace();
        let status = fields.next()?;
        Some(Self::new(status, fields.next()))
    }

    pub fn is_downloading(&self) -> bool {
        self.status == "downloading"
    }

    /// Numeric percentage, if the percent string holds one
    pub fn percent(&self) -> Option<f32> {
        self.percent_str
            .as_deref()?
            .trim()
            .trim_end_matches('%')
            .parse::<f32>()
            .ok()
            .filter(|p| p.is_finite())
    }
}
