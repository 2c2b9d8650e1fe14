use std::fs;
use std::path::PathBuf;

use crate::pipeline::segment_naming::transcript_path_for_audio;
use crate::transcription::domain::transcriber::SpeechTranscriber;

/// Result of one transcription pass over a batch of segments.
pub struct TranscribeOutcome {
    /// Transcript paths, 1:1 with the input segments, in input order.
    pub transcripts: Vec<PathBuf>,
    pub transcribed: usize,
    pub skipped: usize,
}

/// Produces one transcript file per audio segment.
///
/// Idempotence lives here, not in the transcriber: a segment whose
/// transcript file already exists is never sent to the service again.
/// Transcripts are written next to their segments with the extension
/// swapped to `.txt`.
pub struct TranscribeSegmentsUseCase {
    transcriber: Box<dyn SpeechTranscriber>,
}

impl TranscribeSegmentsUseCase {
    pub fn new(transcriber: Box<dyn SpeechTranscriber>) -> Self {
        Self { transcriber }
    }

    pub fn execute(
        &self,
        segments: &[PathBuf],
    ) -> Result<TranscribeOutcome, Box<dyn std::error::Error>> {
        let mut transcripts = Vec::with_capacity(segments.len());
        let mut transcribed = 0;
        let mut skipped = 0;

        for segment in segments {
            let transcript_path = transcript_path_for_audio(segment);

            if transcript_path.exists() {
                log::info!("{} already exists, skipping", transcript_path.display());
                skipped += 1;
            } else {
                log::info!("transcribing {}", segment.display());
                let audio = fs::read(segment)?;
                let file_name = segment
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_default();

                let text = self.transcriber.transcribe(audio, &file_name)?;
                log::info!(
                    "transcribed {} characters to {}",
                    text.len(),
                    transcript_path.display()
                );
                fs::write(&transcript_path, text)?;
                transcribed += 1;
            }

            transcripts.push(transcript_path);
        }

        Ok(TranscribeOutcome {
            transcripts,
            transcribed,
            skipped,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;
    use std::sync::{Arc, Mutex};
    use tempfile::TempDir;

    // ─── Stubs ───

    struct StubTranscriber {
        calls: Arc<Mutex<Vec<String>>>,
    }

    impl SpeechTranscriber for StubTranscriber {
        fn transcribe(
            &self,
            _: Vec<u8>,
            file_name: &str,
        ) -> Result<String, Box<dyn std::error::Error>> {
            self.calls.lock().unwrap().push(file_name.to_string());
            Ok(format!("transcript of {file_name}"))
        }
    }

    struct FailingTranscriber;

    impl SpeechTranscriber for FailingTranscriber {
        fn transcribe(&self, _: Vec<u8>, _: &str) -> Result<String, Box<dyn std::error::Error>> {
            Err("quota exceeded".into())
        }
    }

    fn write_segments(dir: &Path, names: &[&str]) -> Vec<PathBuf> {
        names
            .iter()
            .map(|name| {
                let path = dir.join(name);
                fs::write(&path, b"mp3").unwrap();
                path
            })
            .collect()
    }

    #[test]
    fn test_writes_one_transcript_per_segment() {
        let tmp = TempDir::new().unwrap();
        let segments = write_segments(tmp.path(), &["m-001.mp3", "m-002.mp3"]);
        let calls = Arc::new(Mutex::new(Vec::new()));
        let uc = TranscribeSegmentsUseCase::new(Box::new(StubTranscriber {
            calls: calls.clone(),
        }));

        let outcome = uc.execute(&segments).unwrap();

        assert_eq!(outcome.transcribed, 2);
        assert_eq!(outcome.skipped, 0);
        assert_eq!(outcome.transcripts.len(), 2);
        assert!(outcome.transcripts[0].ends_with("m-001.txt"));
        assert_eq!(
            fs::read_to_string(&outcome.transcripts[0]).unwrap(),
            "transcript of m-001.mp3"
        );
    }

    #[test]
    fn test_existing_transcripts_are_not_regenerated() {
        let tmp = TempDir::new().unwrap();
        let segments = write_segments(tmp.path(), &["m-001.mp3", "m-002.mp3"]);
        fs::write(tmp.path().join("m-001.txt"), "already done").unwrap();

        let calls = Arc::new(Mutex::new(Vec::new()));
        let uc = TranscribeSegmentsUseCase::new(Box::new(StubTranscriber {
            calls: calls.clone(),
        }));

        let outcome = uc.execute(&segments).unwrap();

        assert_eq!(outcome.transcribed, 1);
        assert_eq!(outcome.skipped, 1);
        assert_eq!(calls.lock().unwrap().as_slice(), &["m-002.mp3"]);
        // The skipped transcript keeps its original content
        assert_eq!(
            fs::read_to_string(tmp.path().join("m-001.txt")).unwrap(),
            "already done"
        );
    }

    #[test]
    fn test_service_failure_propagates() {
        let tmp = TempDir::new().unwrap();
        let segments = write_segments(tmp.path(), &["m-001.mp3"]);
        let uc = TranscribeSegmentsUseCase::new(Box::new(FailingTranscriber));

        let result = uc.execute(&segments);
        assert!(result.is_err());
        assert!(!tmp.path().join("m-001.txt").exists());
    }

    #[test]
    fn test_missing_segment_file_is_error() {
        let tmp = TempDir::new().unwrap();
        let uc = TranscribeSegmentsUseCase::new(Box::new(StubTranscriber {
            calls: Arc::new(Mutex::new(Vec::new())),
        }));

        let result = uc.execute(&[tmp.path().join("gone-001.mp3")]);
        assert!(result.is_err());
    }

    #[test]
    fn test_empty_batch_is_ok() {
        let uc = TranscribeSegmentsUseCase::new(Box::new(StubTranscriber {
            calls: Arc::new(Mutex::new(Vec::new())),
        }));

        let outcome = uc.execute(&[]).unwrap();
        assert!(outcome.transcripts.is_empty());
        assert_eq!(outcome.transcribed, 0);
        assert_eq!(outcome.skipped, 0);
    }
}
