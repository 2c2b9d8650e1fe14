use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::audio::domain::audio_clip::AudioClip;
use crate::audio::domain::audio_decoder::AudioDecoder;

#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("no audio stream in {0}")]
    NoAudioStream(PathBuf),
    #[error(transparent)]
    Ffmpeg(#[from] ffmpeg_next::Error),
}

/// Decodes a source recording using ffmpeg-next.
///
/// Output is always mono f32 at the requested sample rate; the decoder
/// resamples whatever layout the source uses.
pub struct FfmpegDecoder;

impl AudioDecoder for FfmpegDecoder {
    fn decode(
        &self,
        path: &Path,
        target_sample_rate: u32,
    ) -> Result<AudioClip, Box<dyn std::error::Error>> {
        Ok(decode_file(path, target_sample_rate)?)
    }
}

fn decode_file(path: &Path, target_sample_rate: u32) -> Result<AudioClip, DecodeError> {
    ffmpeg_next::init()?;

    let mut ictx = ffmpeg_next::format::input(path)?;

    let audio_stream = ictx
        .streams()
        .best(ffmpeg_next::media::Type::Audio)
        .ok_or_else(|| DecodeError::NoAudioStream(path.to_path_buf()))?;

    let audio_stream_index = audio_stream.index();
    let codec_params = audio_stream.parameters();

    let codec_ctx = ffmpeg_next::codec::context::Context::from_parameters(codec_params)?;
    let mut decoder = codec_ctx.decoder().audio()?;

    let mut resampler = ffmpeg_next::software::resampling::Context::get(
        decoder.format(),
        decoder.channel_layout(),
        decoder.rate(),
        ffmpeg_next::format::Sample::F32(ffmpeg_next::format::sample::Type::Planar),
        ffmpeg_next::ChannelLayout::MONO,
        target_sample_rate,
    )?;

    let mut all_samples: Vec<f32> = Vec::new();
    let mut decoded_frame = ffmpeg_next::util::frame::audio::Audio::empty();
    let mut resampled_frame = ffmpeg_next::util::frame::audio::Audio::empty();

    for (stream, packet) in ictx.packets() {
        if stream.index() != audio_stream_index {
            continue;
        }

        decoder.send_packet(&packet)?;

        while decoder.receive_frame(&mut decoded_frame).is_ok() {
            resampler.run(&decoded_frame, &mut resampled_frame)?;
            extract_f32_samples(&resampled_frame, &mut all_samples);
        }
    }

    // Flush the decoder
    decoder.send_eof()?;
    while decoder.receive_frame(&mut decoded_frame).is_ok() {
        resampler.run(&decoded_frame, &mut resampled_frame)?;
        extract_f32_samples(&resampled_frame, &mut all_samples);
    }

    // Flush the resampler (may have buffered samples)
    if let Ok(Some(delay)) = resampler.flush(&mut resampled_frame) {
        if delay.output > 0 {
            extract_f32_samples(&resampled_frame, &mut all_samples);
        }
    }

    Ok(AudioClip::new(all_samples, target_sample_rate, 1))
}

/// Extract f32 samples from a planar mono resampled frame.
fn extract_f32_samples(frame: &ffmpeg_next::util::frame::audio::Audio, out: &mut Vec<f32>) {
    let num_samples = frame.samples();
    if num_samples == 0 {
        return;
    }
    let data = frame.data(0);
    let floats = unsafe { std::slice::from_raw_parts(data.as_ptr() as *const f32, num_samples) };
    out.extend_from_slice(floats);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_decode_nonexistent_file() {
        let decoder = FfmpegDecoder;
        let path = if cfg!(windows) {
            Path::new("Z:\\nonexistent\\file.m4a")
        } else {
            Path::new("/nonexistent/file.m4a")
        };
        let result = decoder.decode(path, 16000);
        assert!(result.is_err());
    }
}
