pub mod audio_clip;
pub mod audio_decoder;
pub mod segment_encoder;
