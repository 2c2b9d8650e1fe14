use reqwest::blocking::multipart;
use serde::Deserialize;
use thiserror::Error;

use crate::shared::constants::DEFAULT_API_URL;
use crate::transcription::domain::transcriber::{SpeechTranscriber, TranscriptionRequest};

#[derive(Error, Debug)]
pub enum TranscribeError {
    #[error("transcription request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("transcription service returned {status}: {message}")]
    Api { status: u16, message: String },
}

#[derive(Deserialize)]
struct ApiErrorBody {
    error: ApiErrorDetail,
}

#[derive(Deserialize)]
struct ApiErrorDetail {
    message: String,
}

/// Speech-to-text via an OpenAI-compatible `/v1/audio/transcriptions`
/// endpoint.
///
/// Requests use `response_format=text`, so a successful response body is
/// the transcript itself.
pub struct WhisperApiTranscriber {
    client: reqwest::blocking::Client,
    endpoint: String,
    api_key: String,
    request: TranscriptionRequest,
}

impl WhisperApiTranscriber {
    pub fn new(api_key: String, request: TranscriptionRequest) -> Self {
        Self::with_endpoint(DEFAULT_API_URL.to_string(), api_key, request)
    }

    pub fn with_endpoint(endpoint: String, api_key: String, request: TranscriptionRequest) -> Self {
        Self {
            client: reqwest::blocking::Client::new(),
            endpoint,
            api_key,
            request,
        }
    }

    fn post(&self, audio: Vec<u8>, file_name: &str) -> Result<String, TranscribeError> {
        let file_part = multipart::Part::bytes(audio).file_name(file_name.to_string());

        let form = multipart::Form::new()
            .text("model", self.request.model.clone())
            .text("prompt", self.request.prompt.clone())
            .text("language", self.request.language.clone())
            .text("response_format", "text")
            .part("file", file_part);

        let response = self
            .client
            .post(&self.endpoint)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .multipart(form)
            .send()?;

        let status = response.status();
        let body = response.text()?;

        if !status.is_success() {
            let message = match serde_json::from_str::<ApiErrorBody>(&body) {
                Ok(parsed) => parsed.error.message,
                Err(_) => body,
            };
            return Err(TranscribeError::Api {
                status: status.as_u16(),
                message,
            });
        }

        Ok(body)
    }
}

impl SpeechTranscriber for WhisperApiTranscriber {
    fn transcribe(
        &self,
        audio: Vec<u8>,
        file_name: &str,
    ) -> Result<String, Box<dyn std::error::Error>> {
        Ok(self.post(audio, file_name)?)
    }
}
