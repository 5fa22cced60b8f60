// components/download_primitives/src/lib.rs
mod options;
mod request;
mod selector;

pub use options::{AudioQuality, BaseFormat, ParseError, Resolution, VideoCodec};
pub use request::DownloadRequest;
pub use selector::build_selector;
