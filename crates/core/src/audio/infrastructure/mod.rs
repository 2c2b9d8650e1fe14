pub mod ffmpeg_decoder;
pub mod mp3_segment_encoder;
