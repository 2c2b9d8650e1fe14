pub mod batch_transcribe_use_case;
pub mod concatenate_use_case;
pub mod file_discovery;
pub mod segment_naming;
pub mod split_audio_use_case;
pub mod transcribe_segments_use_case;
pub mod transcript_grouper;
