// bases/download_cli/src/config.rs
use crate::args::Args;
use color_eyre::Result;
use download_primitives::DownloadRequest;
use std::path::PathBuf;

/// Everything one CLI run needs, resolved from the arguments
#[derive(Debug, Clone)]
pub struct Config {
    pub request: DownloadRequest,
    pub yt_dlp: PathBuf,
    pub verbose: bool,
}

impl Config {
    pub fn from_args(args: Args) -> Result<Self> {
        let mut request = DownloadRequest::new(args.url)
            .with_base_format(args.format.parse()?)
            .with_resolution(args.resolution.parse()?)
            .with_codec(args.codec.parse()?);
        request.subtitles = args.subtitles;
        request.thumbnail = args.thumbnail;
        request.description = args.description;
        request.info_json = args.info;

        Ok(Self {
            request,
            yt_dlp: args.yt_dlp,
            verbose: args.verbose,
        })
    }
}
