// components/media_downloader/src/options.rs
use download_primitives::DownloadRequest;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Output file naming used by both front-ends
pub const TITLE_TEMPLATE: &str = "%(title)s.%(ext)s";

/// Marker prefixed to every machine-readable progress line
pub const PROGRESS_MARKER: &str = "[progress]";

/// Everything yt-dlp is told about one download
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YtDlpOptions {
    pub format: String,
    pub output_template: PathBuf,
    pub write_subtitles: bool,
    pub subtitle_langs: Vec<String>,
    pub write_thumbnail: bool,
    pub write_description: bool,
    pub write_info_json: bool,
}

impl YtDlpOptions {
    /// Options for a request, writing into `output_dir` or the working directory
    pub fn from_request(request: &DownloadRequest, output_dir: Option<&Path>) -> Self {
        let output_template = match output_dir {
            Some(dir) => dir.join(TITLE_TEMPLATE),
            None => PathBuf::from(TITLE_TEMPLATE),
        };
        let subtitle_langs = if request.subtitles {
            vec!["en".to_string()]
        } else {
            Vec::new()
        };

        Self {
            format: request.selector(),
            output_template,
            write_subtitles: request.subtitles,
            subtitle_langs,
            write_thumbnail: request.thumbnail,
            write_description: request.description,
            write_info_json: request.info_json,
        }
    }

    /// Command-line arguments for these options, excluding the URL
    pub fn to_args(&self) -> Vec<OsString> {
        let mut args: Vec<OsString> = vec![
            "-f".into(),
            self.format.clone().into(),
            "-o".into(),
            self.output_template.clone().into_os_string(),
        ];

        if self.write_subtitles {
            args.push("--write-subs".into());
            if !self.subtitle_langs.is_empty() {
                args.push("--sub-langs".into());
                args.push(self.subtitle_langs.join(",").into());
            }
        }
        if self.write_thumbnail {
            args.push("--write-thumbnail".into());
        }
        if self.write_description {
            args.push("--write-description".into());
        }
        if self.write_info_json {
            args.push("--write-info-json".into());
        }

        args
    }

    /// Extra arguments that make yt-dlp print one parseable line per progress update
    pub fn progress_args() -> Vec<OsString> {
        vec![
            "--newline".into(),
            "--no-colors".into(),
            "--progress-template".into(),
            format!(
                "download:{PROGRESS_MARKER} %(progress.status)s %(progress._percent_str)s"
            )
            .into(),
        ]
    }
}
