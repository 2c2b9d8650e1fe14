use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::audio::domain::audio_decoder::AudioDecoder;
use crate::audio::domain::segment_encoder::SegmentEncoder;
use crate::pipeline::segment_naming::segment_file_name;
use crate::shared::constants::{
    MAX_SEGMENTS_PER_RECORDING, SEGMENT_EXTENSION, SEGMENT_SAMPLE_RATE,
};

#[derive(Error, Debug)]
pub enum SplitError {
    #[error("segment length must be positive")]
    ZeroSegmentLength,
    #[error("{path}: {count} segments exceeds the {max}-segment naming limit")]
    SegmentCountExceeded {
        path: PathBuf,
        count: usize,
        max: usize,
    },
    #[error("input path has no file stem: {0}")]
    NoFileStem(PathBuf),
}

/// Splits one source recording into fixed-length mp3 segments.
///
/// Slices are consecutive and non-overlapping, numbered 1-based in
/// encounter order; the final slice runs to end-of-audio. A segment file
/// that already exists is reused without re-encoding, so an interrupted
/// run can resume.
pub struct SplitAudioUseCase {
    decoder: Box<dyn AudioDecoder>,
    encoder: Box<dyn SegmentEncoder>,
    segment_length_ms: u64,
}

impl SplitAudioUseCase {
    pub fn new(
        decoder: Box<dyn AudioDecoder>,
        encoder: Box<dyn SegmentEncoder>,
        segment_length_ms: u64,
    ) -> Self {
        Self {
            decoder,
            encoder,
            segment_length_ms,
        }
    }

    /// Split `input` into segments under `splits_dir`, creating the
    /// directory on demand. Returns every segment path (written or
    /// skipped) in numeric order.
    pub fn execute(
        &self,
        input: &Path,
        splits_dir: &Path,
    ) -> Result<Vec<PathBuf>, Box<dyn std::error::Error>> {
        if self.segment_length_ms == 0 {
            return Err(SplitError::ZeroSegmentLength.into());
        }

        let stem = input
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .ok_or_else(|| SplitError::NoFileStem(input.to_path_buf()))?;

        let clip = self.decoder.decode(input, SEGMENT_SAMPLE_RATE)?;
        let total_ms = clip.duration_ms();

        let count = (total_ms.div_ceil(self.segment_length_ms)) as usize;
        if count > MAX_SEGMENTS_PER_RECORDING {
            return Err(SplitError::SegmentCountExceeded {
                path: input.to_path_buf(),
                count,
                max: MAX_SEGMENTS_PER_RECORDING,
            }
            .into());
        }

        fs::create_dir_all(splits_dir)?;

        let mut segments = Vec::with_capacity(count);
        for index in 0..count {
            let start_ms = index as u64 * self.segment_length_ms;
            let segment_path = splits_dir.join(segment_file_name(
                &stem,
                index + 1,
                SEGMENT_EXTENSION,
            ));

            if segment_path.exists() {
                log::info!("skipping {}", segment_path.display());
            } else {
                log::info!("writing {}", segment_path.display());
                let slice = clip.slice_ms(start_ms, start_ms + self.segment_length_ms);
                self.encoder.encode(&segment_path, &slice)?;
            }
            segments.push(segment_path);
        }

        Ok(segments)
    }
}
