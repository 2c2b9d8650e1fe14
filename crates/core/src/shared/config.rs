use std::path::PathBuf;

use crate::shared::constants::DEFAULT_SEGMENT_LENGTH_MS;

/// Directory layout and segmentation settings for one pipeline run.
///
/// Transcription settings (model, prompt, language) live in
/// `TranscriptionRequest` and travel with the injected transcriber.
#[derive(Clone, Debug)]
pub struct PipelineConfig {
    /// Directory containing source recordings (`*.m4a`).
    pub input_dir: PathBuf,
    /// Directory receiving final per-recording transcripts.
    pub output_dir: PathBuf,
    /// Directory receiving split audio segments and their transcripts.
    pub splits_dir: PathBuf,
    pub segment_length_ms: u64,
}

impl PipelineConfig {
    pub fn new(input_dir: PathBuf, output_dir: PathBuf, splits_dir: PathBuf) -> Self {
        Self {
            input_dir,
            output_dir,
            splits_dir,
            segment_length_ms: DEFAULT_SEGMENT_LENGTH_MS,
        }
    }

    pub fn with_segment_length_ms(mut self, segment_length_ms: u64) -> Self {
        self.segment_length_ms = segment_length_ms;
        self
    }
}
