// bases/download_cli/src/args.rs
use clap::builder::PossibleValuesParser;
use clap::Parser;
use download_primitives::{BaseFormat, Resolution, VideoCodec};
use std::path::PathBuf;

/// YouTube Video Downloader
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// YouTube video URL
    pub url: String,

    /// Download format
    #[arg(
        long,
        default_value = "bestvideo+bestaudio/best",
        value_parser = PossibleValuesParser::new(BaseFormat::CHOICES)
    )]
    pub format: String,

    /// Maximum resolution
    #[arg(
        long,
        default_value = "best",
        value_parser = PossibleValuesParser::new(Resolution::CHOICES)
    )]
    pub resolution: String,

    /// Preferred video codec
    #[arg(
        long,
        default_value = "any",
        value_parser = PossibleValuesParser::new(VideoCodec::CHOICES)
    )]
    pub codec: String,

    /// Download subtitles
    #[arg(long)]
    pub subtitles: bool,

    /// Download thumbnail
    #[arg(long)]
    pub thumbnail: bool,

    /// Save description
    #[arg(long)]
    pub description: bool,

    /// Save video info JSON
    #[arg(long)]
    pub info: bool,

    /// yt-dlp executable to run
    #[arg(long = "yt-dlp", env = "YT_DLP_PATH", default_value = "yt-dlp")]
    pub yt_dlp: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
