use std::path::PathBuf;

use crate::audio::domain::audio_decoder::AudioDecoder;
use crate::audio::domain::segment_encoder::SegmentEncoder;
use crate::pipeline::concatenate_use_case::ConcatenateUseCase;
use crate::pipeline::file_discovery::find_files_with_extension;
use crate::pipeline::split_audio_use_case::SplitAudioUseCase;
use crate::pipeline::transcribe_segments_use_case::TranscribeSegmentsUseCase;
use crate::pipeline::transcript_grouper::group_transcripts;
use crate::shared::config::PipelineConfig;
use crate::shared::constants::RECORDING_EXTENSION;
use crate::transcription::domain::transcriber::SpeechTranscriber;

/// What one batch run did, for end-of-run reporting.
#[derive(Debug)]
pub struct BatchReport {
    pub recordings: usize,
    pub segments: usize,
    pub transcribed: usize,
    pub skipped: usize,
    pub outputs: Vec<PathBuf>,
}

/// The full pipeline: discover recordings, split each into segments,
/// transcribe every segment, group the transcripts by recording, and
/// concatenate each group into one output file.
///
/// Fully sequential and blocking. Any stage error propagates immediately;
/// rerunning is safe because the segmenter and the transcription gating
/// skip outputs that already exist.
pub struct BatchTranscribeUseCase {
    splitter: SplitAudioUseCase,
    transcriber: TranscribeSegmentsUseCase,
    config: PipelineConfig,
}

impl BatchTranscribeUseCase {
    pub fn new(
        decoder: Box<dyn AudioDecoder>,
        encoder: Box<dyn SegmentEncoder>,
        transcriber: Box<dyn SpeechTranscriber>,
        config: PipelineConfig,
    ) -> Self {
        Self {
            splitter: SplitAudioUseCase::new(decoder, encoder, config.segment_length_ms),
            transcriber: TranscribeSegmentsUseCase::new(transcriber),
            config,
        }
    }

    pub fn execute(&self) -> Result<BatchReport, Box<dyn std::error::Error>> {
        let recordings =
            find_files_with_extension(&self.config.input_dir, RECORDING_EXTENSION);
        log::info!("found {} source recordings", recordings.len());

        let mut segments = Vec::new();
        for recording in &recordings {
            log::info!("splitting {}", recording.display());
            segments.extend(self.splitter.execute(recording, &self.config.splits_dir)?);
        }
        log::info!("{} audio segments", segments.len());

        let outcome = self.transcriber.execute(&segments)?;
        log::info!(
            "done transcribing: {} new, {} skipped",
            outcome.transcribed,
            outcome.skipped
        );

        log::info!("concatenating files");
        let groups = group_transcripts(&outcome.transcripts)?;
        let outputs = ConcatenateUseCase.execute(&groups, &self.config.output_dir)?;

        Ok(BatchReport {
            recordings: recordings.len(),
            segments: segments.len(),
            transcribed: outcome.transcribed,
            skipped: outcome.skipped,
            outputs,
        })
    }
}
