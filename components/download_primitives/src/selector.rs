use crate::options::{AudioQuality, VideoCodec};
use crate::request::DownloadRequest;

/// Build the yt-dlp format selector for a request.
///
/// Clauses are appended left to right in a fixed order: height cap, codec
/// match, then the audio stream. yt-dlp reads the selector positionally, so
/// the order must not change.
pub fn build_selector(request: &DownloadRequest) -> String {
    let mut selector = String::from(request.base_format.selector());

    if let Some(height) = request.resolution.max_height() {
        selector.push_str(&format!("[height<={height}]"));
    }

    if request.codec != VideoCodec::Any {
        selector.push_str(&format!("[vcodec*={}]", request.codec.tag()));
    }

    match request.audio_quality {
        Some(AudioQuality::Best) => selector.push_str("+bestaudio"),
        Some(AudioQuality::MinKbps(kbps)) => {
            selector.push_str(&format!("+worstaudio[abr>={kbps}]"))
        }
        None => {}
    }

    selector
}
