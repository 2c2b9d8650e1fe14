/// Decoded audio: interleaved PCM samples normalized to [-1.0, 1.0].
///
/// The pipeline decodes everything to mono, but the channel count is kept
/// explicit so duration math stays correct for any layout.
#[derive(Clone, Debug)]
pub struct AudioClip {
    samples: Vec<f32>,
    sample_rate: u32,
    channels: u16,
}

impl AudioClip {
    pub fn new(samples: Vec<f32>, sample_rate: u32, channels: u16) -> Self {
        Self {
            samples,
            sample_rate,
            channels,
        }
    }

    pub fn samples(&self) -> &[f32] {
        &self.samples
    }

    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    pub fn channels(&self) -> u16 {
        self.channels
    }

    pub fn duration_ms(&self) -> u64 {
        let samples_per_ms = self.sample_rate as u64 * self.channels as u64;
        if samples_per_ms == 0 {
            return 0;
        }
        (self.samples.len() as u64 * 1000) / samples_per_ms
    }

    /// Slice out `[start_ms, end_ms)`. The end is clamped to the clip length,
    /// so the final slice of a recording may be shorter than requested.
    pub fn slice_ms(&self, start_ms: u64, end_ms: u64) -> AudioClip {
        let start = self.sample_index_at_ms(start_ms).min(self.samples.len());
        let end = self.sample_index_at_ms(end_ms).min(self.samples.len());
        let end = end.max(start);
        AudioClip::new(
            self.samples[start..end].to_vec(),
            self.sample_rate,
            self.channels,
        )
    }

    fn sample_index_at_ms(&self, ms: u64) -> usize {
        ((ms * self.sample_rate as u64 * self.channels as u64) / 1000) as usize
    }
}
