use std::path::Path;

use thiserror::Error;

use crate::audio::domain::audio_clip::AudioClip;
use crate::audio::domain::segment_encoder::SegmentEncoder;

const MP3_BIT_RATE: usize = 64_000;

#[derive(Error, Debug)]
pub enum EncodeError {
    #[error("mp3 encoder not found")]
    NoEncoder,
    #[error(transparent)]
    Ffmpeg(#[from] ffmpeg_next::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Encodes a mono PCM clip to an mp3 file using ffmpeg-next (libmp3lame).
///
/// Writes to a `.part` temp file first, then renames, so an interrupted run
/// never leaves a truncated segment that a rerun would skip over.
pub struct Mp3SegmentEncoder;

impl SegmentEncoder for Mp3SegmentEncoder {
    fn encode(&self, path: &Path, clip: &AudioClip) -> Result<(), Box<dyn std::error::Error>> {
        Ok(encode_file(path, clip)?)
    }
}

fn encode_file(path: &Path, clip: &AudioClip) -> Result<(), EncodeError> {
    ffmpeg_next::init()?;

    let temp_path = path.with_extension("part");
    let mut octx = ffmpeg_next::format::output_as(&temp_path, "mp3")?;

    let mp3_codec =
        ffmpeg_next::encoder::find(ffmpeg_next::codec::Id::MP3).ok_or(EncodeError::NoEncoder)?;
    let mut ost = octx.add_stream(Some(mp3_codec))?;
    let ost_idx = ost.index();

    let mut encoder = ffmpeg_next::codec::context::Context::new_with_codec(mp3_codec)
        .encoder()
        .audio()?;

    encoder.set_rate(clip.sample_rate() as i32);
    encoder.set_channel_layout(ffmpeg_next::ChannelLayout::MONO);
    encoder.set_format(ffmpeg_next::format::Sample::F32(
        ffmpeg_next::format::sample::Type::Planar,
    ));
    encoder.set_bit_rate(MP3_BIT_RATE);

    let mut encoder = encoder.open_as(mp3_codec)?;
    ost.set_parameters(&encoder);

    let enc_time_base = encoder.time_base();
    let frame_size = encoder.frame_size() as usize;

    octx.write_header()?;

    let ost_time_base = octx.stream(ost_idx).map(|s| s.time_base()).unwrap_or(enc_time_base);

    encode_clip(
        &mut encoder,
        clip,
        &mut octx,
        ost_idx,
        enc_time_base,
        ost_time_base,
        frame_size,
    )?;

    octx.write_trailer()?;
    drop(octx);

    std::fs::rename(&temp_path, path)?;
    Ok(())
}

/// Encode an AudioClip into mp3 packets and write them to the output.
fn encode_clip(
    encoder: &mut ffmpeg_next::codec::encoder::audio::Encoder,
    clip: &AudioClip,
    octx: &mut ffmpeg_next::format::context::Output,
    stream_idx: usize,
    enc_time_base: ffmpeg_next::Rational,
    ost_time_base: ffmpeg_next::Rational,
    frame_size: usize,
) -> Result<(), EncodeError> {
    let samples = clip.samples();
    let sample_rate = clip.sample_rate();
    let effective_frame_size = if frame_size == 0 { 1152 } else { frame_size };

    let mut pts: i64 = 0;

    for chunk in samples.chunks(effective_frame_size) {
        let mut frame = ffmpeg_next::util::frame::audio::Audio::new(
            ffmpeg_next::format::Sample::F32(ffmpeg_next::format::sample::Type::Planar),
            chunk.len(),
            ffmpeg_next::ChannelLayout::MONO,
        );
        frame.set_rate(sample_rate);
        frame.set_pts(Some(pts));

        // Copy f32 samples into the frame's data plane
        let dst = frame.data_mut(0);
        let src_bytes =
            unsafe { std::slice::from_raw_parts(chunk.as_ptr() as *const u8, chunk.len() * 4) };
        dst[..src_bytes.len()].copy_from_slice(src_bytes);

        encoder.send_frame(&frame)?;
        flush_packets(encoder, octx, stream_idx, enc_time_base, ost_time_base)?;

        pts += chunk.len() as i64;
    }

    // Flush encoder
    encoder.send_eof()?;
    flush_packets(encoder, octx, stream_idx, enc_time_base, ost_time_base)?;

    Ok(())
}

fn flush_packets(
    encoder: &mut ffmpeg_next::codec::encoder::audio::Encoder,
    octx: &mut ffmpeg_next::format::context::Output,
    stream_idx: usize,
    enc_time_base: ffmpeg_next::Rational,
    ost_time_base: ffmpeg_next::Rational,
) -> Result<(), EncodeError> {
    let mut encoded = ffmpeg_next::Packet::empty();
    while encoder.receive_packet(&mut encoded).is_ok() {
        encoded.set_stream(stream_idx);
        encoded.rescale_ts(enc_time_base, ost_time_base);
        encoded.write_interleaved(octx)?;
    }
    Ok(())
}
