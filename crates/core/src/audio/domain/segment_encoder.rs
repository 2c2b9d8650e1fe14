use std::path::Path;

use super::audio_clip::AudioClip;

/// Domain interface for writing one audio segment to disk.
pub trait SegmentEncoder: Send {
    /// Encode the clip and write it to `path`. The container format is
    /// chosen by the implementation, not inferred from the path.
    fn encode(&self, path: &Path, clip: &AudioClip) -> Result<(), Box<dyn std::error::Error>>;
}
