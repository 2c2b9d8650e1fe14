use crate::shared::constants::{DEFAULT_LANGUAGE, DEFAULT_MODEL, DEFAULT_PROMPT};

/// Per-request configuration for the speech-to-text service.
#[derive(Clone, Debug)]
pub struct TranscriptionRequest {
    pub model: String,
    pub prompt: String,
    pub language: String,
}

impl Default for TranscriptionRequest {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            prompt: DEFAULT_PROMPT.to_string(),
            language: DEFAULT_LANGUAGE.to_string(),
        }
    }
}

/// Domain interface for speech-to-text transcription of one audio segment.
///
/// `file_name` is the segment's file name; services use it to sniff the
/// container format of the uploaded bytes.
pub trait SpeechTranscriber: Send {
    fn transcribe(
        &self,
        audio: Vec<u8>,
        file_name: &str,
    ) -> Result<String, Box<dyn std::error::Error>>;
}
