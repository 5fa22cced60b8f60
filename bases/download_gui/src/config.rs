// bases/download_gui/src/config.rs
use std::ffi::OsString;
use std::path::PathBuf;

/// Environment variable naming the yt-dlp executable
pub const YT_DLP_ENV: &str = "YT_DLP_PATH";

/// Startup settings for the GUI
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub yt_dlp: PathBuf,
    /// Initial value of the output directory field
    pub output_dir: PathBuf,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_parts(
            std::env::var_os(YT_DLP_ENV),
            dirs::download_dir(),
            dirs::home_dir(),
        )
    }

    fn from_parts(
        yt_dlp: Option<OsString>,
        download_dir: Option<PathBuf>,
        home_dir: Option<PathBuf>,
    ) -> Self {
        let yt_dlp = yt_dlp
            .filter(|program| !program.is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("yt-dlp"));

        let output_dir = download_dir
            .or_else(|| home_dir.map(|home| home.join("Downloads")))
            .unwrap_or_else(|| PathBuf::from("."));

        Self { yt_dlp, output_dir }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_yt_dlp_on_path() {
        let config = Config::from_parts(None, Some(PathBuf::from("/home/a/Downloads")), None);
        assert_eq!(config.yt_dlp, PathBuf::from("yt-dlp"));
        assert_eq!(config.output_dir, PathBuf::from("/home/a/Downloads"));
    }

    #[test]
    fn environment_overrides_program() {
        let config = Config::from_parts(Some("/opt/bin/yt-dlp".into()), None, None);
        assert_eq!(config.yt_dlp, PathBuf::from("/opt/bin/yt-dlp"));
    }

    #[test]
    fn empty_override_is_ignored() {
        let config = Config::from_parts(Some(OsString::new()), None, None);
        assert_eq!(config.yt_dlp, PathBuf::from("yt-dlp"));
    }

    #[test]
    fn falls_back_to_home_then_working_directory() {
        let config = Config::from_parts(None, None, Some(PathBuf::from("/home/a")));
        assert_eq!(config.output_dir, PathBuf::from("/home/a/Downloads"));

        let config = Config::from_parts(None, None, None);
        assert_eq!(config.output_dir, PathBuf::from("."));
    }
}
