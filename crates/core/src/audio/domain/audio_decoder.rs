use std::path::Path;

use super::audio_clip::AudioClip;

/// Domain interface for decoding a source recording.
pub trait AudioDecoder: Send {
    /// Decode the full file to a mono PCM clip at the given sample rate.
    /// An unreadable file or one without an audio stream is an error.
    fn decode(
        &self,
        path: &Path,
        target_sample_rate: u32,
    ) -> Result<AudioClip, Box<dyn std::error::Error>>;
}
