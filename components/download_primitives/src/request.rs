use crate::options::{AudioQuality, BaseFormat, Resolution, VideoCodec};
use serde::{Deserialize, Serialize};

/// One download as the user asked for it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DownloadRequest {
    pub url: String,
    pub base_format: BaseFormat,
    pub resolution: Resolution,
    pub codec: VideoCodec,
    /// Only the GUI offers this refinement
    pub audio_quality: Option<AudioQuality>,
    pub subtitles: bool,
    pub thumbnail: bool,
    pub description: bool,
    pub info_json: bool,
}

impl DownloadRequest {
    /// A request with every refinement left at "no preference"
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            base_format: BaseFormat::default(),
            resolution: Resolution::default(),
            codec: VideoCodec::default(),
            audio_quality: None,
            subtitles: false,
            thumbnail: false,
            description: false,
            info_json: false,
        }
    }

    pub fn with_base_format(mut self, base_format: BaseFormat) -> Self {
        self.base_format = base_format;
        self
    }

    pub fn with_resolution(mut self, resolution: Resolution) -> Self {
        self.resolution = resolution;
        self
    }

    pub fn with_codec(mut self, codec: VideoCodec) -> Self {
        self.codec = codec;
        self
    }

    pub fn with_audio_quality(mut self, audio_quality: Option<AudioQuality>) -> Self {
        self.audio_quality = audio_quality;
        self
    }

    /// Format-selector string for this request
    pub fn selector(&self) -> String {
        crate::selector::build_selector(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_request_has_no_refinements() {
        let request = DownloadRequest::new("https://example.com/watch?v=abc");
        assert_eq!(request.base_format, BaseFormat::VideoAudio);
        assert_eq!(request.resolution, Resolution::Best);
        assert_eq!(request.codec, VideoCodec::Any);
        assert_eq!(request.audio_quality, None);
        assert!(!request.subtitles && !request.thumbnail);
        assert!(!request.description && !request.info_json);
    }

    #[test]
    fn test_serialization() {
        let request = DownloadRequest::new("https://example.com/v")
            .with_resolution(Resolution::Height(720))
            .with_audio_quality(Some(AudioQuality::Best));
        let json = serde_json::to_string(&request).unwrap();
        let decoded: DownloadRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(request, decoded);
    }
}
