/// Extension of source recordings discovered under the input directory.
pub const RECORDING_EXTENSION: &str = "m4a";

/// Extension of encoded audio segments written to the splits directory.
pub const SEGMENT_EXTENSION: &str = "mp3";

/// Extension of per-segment (and final per-recording) transcripts.
pub const TRANSCRIPT_EXTENSION: &str = "txt";

/// Default segment length: 10 minutes.
pub const DEFAULT_SEGMENT_LENGTH_MS: u64 = 600_000;

/// Sample rate segments are decoded and encoded at. 16 kHz mono is a valid
/// MPEG-2 layer III rate and all the speech service needs.
pub const SEGMENT_SAMPLE_RATE: u32 = 16_000;

/// Segment numbers are zero-padded to 3 digits; the naming scheme caps out
/// at 999 segments per recording.
pub const MAX_SEGMENTS_PER_RECORDING: usize = 999;

pub const DEFAULT_API_URL: &str = "https://api.openai.com/v1/audio/transcriptions";
pub const DEFAULT_MODEL: &str = "whisper-1";
pub const DEFAULT_LANGUAGE: &str = "en";
pub const DEFAULT_PROMPT: &str = "the prompt is a team meeting where software engineers are \
     discussing a new feature or architecture concern.";
