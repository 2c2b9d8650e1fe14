pub mod whisper_api_transcriber;
