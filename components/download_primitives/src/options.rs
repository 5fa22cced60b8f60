use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ParseError {
    #[error("Unknown format: {0}")]
    UnknownFormat(String),

    #[error("Unsupported resolution: {0}")]
    UnsupportedResolution(String),

    #[error("Unknown video codec: {0}")]
    UnknownCodec(String),

    #[error("Unsupported audio quality: {0}")]
    UnsupportedAudioQuality(String),
}

/// Coarse stream choice before any refinement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum BaseFormat {
    #[default]
    VideoAudio,
    VideoOnly,
    AudioOnly,
}

impl BaseFormat {
    pub const ALL: [BaseFormat; 3] = [Self::VideoAudio, Self::VideoOnly, Self::AudioOnly];

    pub const CHOICES: [&'static str; 3] = ["bestvideo+bestaudio/best", "bestvideo", "bestaudio"];

    /// Selector literal the refinements are appended to
    pub fn selector(&self) -> &'static str {
        match self {
            BaseFormat::VideoAudio => "bestvideo+bestaudio/best",
            BaseFormat::VideoOnly => "bestvideo",
            BaseFormat::AudioOnly => "bestaudio",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            BaseFormat::VideoAudio => "Video + Audio",
            BaseFormat::VideoOnly => "Video Only",
            BaseFormat::AudioOnly => "Audio Only",
        }
    }
}

impl FromStr for BaseFormat {
    type Err = ParseError;

    /// Parse from the selector literal
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|format| format.selector() == s)
            .ok_or_else(|| ParseError::UnknownFormat(s.to_string()))
    }
}

impl fmt::Display for BaseFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.selector())
    }
}

/// Upper bound on the picked video height
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Resolution {
    /// No cap
    #[default]
    Best,
    Height(u32),
}

impl Resolution {
    pub const HEIGHTS: [u32; 8] = [2160, 1440, 1080, 720, 480, 360, 240, 144];

    pub const CHOICES: [&'static str; 9] = [
        "best", "2160", "1440", "1080", "720", "480", "360", "240", "144",
    ];

    pub fn all() -> impl Iterator<Item = Resolution> {
        std::iter::once(Resolution::Best).chain(Self::HEIGHTS.into_iter().map(Resolution::Height))
    }

    pub fn max_height(&self) -> Option<u32> {
        match self {
            Resolution::Best => None,
            Resolution::Height(height) => Some(*height),
        }
    }
}

impl FromStr for Resolution {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "best" {
            return Ok(Resolution::Best);
        }
        s.parse::<u32>()
            .ok()
            .filter(|height| Self::HEIGHTS.contains(height))
            .map(Resolution::Height)
            .ok_or_else(|| ParseError::UnsupportedResolution(s.to_string()))
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Resolution::Best => f.write_str("best"),
            Resolution::Height(height) => write!(f, "{height}"),
        }
    }
}

/// Preferred video codec, matched as a substring of the stream's vcodec
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum VideoCodec {
    #[default]
    Any,
    Avc1, // H.264
    Vp9,
    Av01, // AV1
}

impl VideoCodec {
    pub const ALL: [VideoCodec; 4] = [Self::Any, Self::Avc1, Self::Vp9, Self::Av01];

    pub const CHOICES: [&'static str; 4] = ["any", "avc1", "vp9", "av01"];

    pub fn tag(&self) -> &'static str {
        match self {
            VideoCodec::Any => "any",
            VideoCodec::Avc1 => "avc1",
            VideoCodec::Vp9 => "vp9",
            VideoCodec::Av01 => "av01",
        }
    }
}

impl FromStr for VideoCodec {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|codec| codec.tag() == s)
            .ok_or_else(|| ParseError::UnknownCodec(s.to_string()))
    }
}

impl fmt::Display for VideoCodec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Audio stream to merge onto the selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AudioQuality {
    Best,
    /// Smallest audio stream with at least this bitrate
    MinKbps(u32),
}

impl AudioQuality {
    pub const BITRATES: [u32; 4] = [192, 128, 96, 64];

    pub fn all() -> impl Iterator<Item = AudioQuality> {
        std::iter::once(AudioQuality::Best)
            .chain(Self::BITRATES.into_iter().map(AudioQuality::MinKbps))
    }
}

impl FromStr for AudioQuality {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "best" {
            return Ok(AudioQuality::Best);
        }
        s.parse::<u32>()
            .ok()
            .filter(|kbps| Self::BITRATES.contains(kbps))
            .map(AudioQuality::MinKbps)
            .ok_or_else(|| ParseError::UnsupportedAudioQuality(s.to_string()))
    }
}

impl fmt::Display for AudioQuality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AudioQuality::Best => f.write_str("best"),
            AudioQuality::MinKbps(kbps) => write!(f, "{kbps}"),
        }
    }
}
