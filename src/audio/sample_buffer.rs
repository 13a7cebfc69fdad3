use std::io::Cursor;

use super::frame::StereoFrame;
use crate::error::PadError;

// A decoded sample: interleaved stereo frames, kept at the source file's own
// rate. Resampling is out of scope here, so duration math always uses the
// buffer's native rate.
#[derive(Clone, Debug)]
pub struct SampleBuffer {
    pub data: Vec<StereoFrame>,
    pub sample_rate: u32,
}

impl SampleBuffer {
    // Decode WAV bytes into the buffer
    pub fn decode_wav(bytes: &[u8]) -> Result<Self, PadError> {
        let mut reader = hound::WavReader::new(Cursor::new(bytes))?;
        let spec = reader.spec();

        let samples: Vec<f32> = match spec.sample_format {
            hound::SampleFormat::Float => reader // float, just pass it through
                .samples::<f32>()
                .collect::<Result<Vec<_>, _>>()?,
            hound::SampleFormat::Int => {
                // int, convert to float capped at the format's max value
                let max = (1i64 << (spec.bits_per_sample - 1)) as f32;
                reader
                    .samples::<i32>()
                    .map(|s| s.map(|x| x as f32 / max))
                    .collect::<Result<Vec<_>, _>>()?
            }
        };

        let channels = spec.channels.max(1) as usize;
        let frames: Vec<StereoFrame> = if channels == 1 {
            // mono, duplicate onto both sides
            samples.into_iter().map(StereoFrame::splat).collect()
        } else {
            // keep the first two channels, drop the rest
            samples
                .chunks_exact(channels)
                .map(|c| StereoFrame {
                    left: c[0],
                    right: c[1],
                })
                .collect()
        };

        Ok(Self {
            data: frames,
            sample_rate: spec.sample_rate,
        })
    }

    pub fn len_frames(&self) -> usize {
        self.data.len()
    }

    pub fn duration_secs(&self) -> f32 {
        if self.sample_rate == 0 {
            return 0.0;
        }
        self.data.len() as f32 / self.sample_rate as f32
    }
}
