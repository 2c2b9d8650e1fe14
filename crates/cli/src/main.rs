use std::path::PathBuf;
use std::process;

use clap::Parser;

use meetscribe_core::audio::infrastructure::ffmpeg_decoder::FfmpegDecoder;
use meetscribe_core::audio::infrastructure::mp3_segment_encoder::Mp3SegmentEncoder;
use meetscribe_core::pipeline::batch_transcribe_use_case::BatchTranscribeUseCase;
use meetscribe_core::shared::config::PipelineConfig;
use meetscribe_core::shared::constants::{
    DEFAULT_LANGUAGE, DEFAULT_MODEL, DEFAULT_PROMPT, DEFAULT_SEGMENT_LENGTH_MS,
};
use meetscribe_core::transcription::domain::transcriber::TranscriptionRequest;
use meetscribe_core::transcription::infrastructure::whisper_api_transcriber::WhisperApiTranscriber;

/// Batch transcription of meeting recordings.
#[derive(Parser)]
#[command(name = "meetscribe")]
struct Cli {
    /// Directory containing the audio files to transcribe (*.m4a).
    #[arg(long)]
    input: PathBuf,

    /// Directory to receive the final per-recording transcripts (*.txt).
    #[arg(long)]
    output: PathBuf,

    /// Directory where split audio segments and their transcripts are stored.
    #[arg(long)]
    splits: PathBuf,

    /// Segment length in milliseconds.
    #[arg(long, default_value_t = DEFAULT_SEGMENT_LENGTH_MS)]
    segment_length_ms: u64,

    /// Transcription model name.
    #[arg(long, default_value = DEFAULT_MODEL)]
    model: String,

    /// Context prompt sent with every segment.
    #[arg(long, default_value = DEFAULT_PROMPT)]
    prompt: String,

    /// Spoken language hint (ISO 639-1).
    #[arg(long, default_value = DEFAULT_LANGUAGE)]
    language: String,
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    validate(&cli)?;

    let api_key = std::env::var("OPENAI_API_KEY")
        .map_err(|_| "OPENAI_API_KEY environment variable is not set")?;

    let request = TranscriptionRequest {
        model: cli.model,
        prompt: cli.prompt,
        language: cli.language,
    };

    let config = PipelineConfig::new(cli.input, cli.output, cli.splits)
        .with_segment_length_ms(cli.segment_length_ms);

    let use_case = BatchTranscribeUseCase::new(
        Box::new(FfmpegDecoder),
        Box::new(Mp3SegmentEncoder),
        Box::new(WhisperApiTranscriber::new(api_key, request)),
        config,
    );

    let report = use_case.execute()?;
    log::info!(
        "{} recordings, {} segments ({} transcribed, {} reused), {} outputs",
        report.recordings,
        report.segments,
        report.transcribed,
        report.skipped,
        report.outputs.len()
    );
    for output in &report.outputs {
        log::info!("wrote {}", output.display());
    }

    Ok(())
}

fn validate(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    if cli.segment_length_ms == 0 {
        return Err("Segment length must be greater than zero".into());
    }
    Ok(())
}
