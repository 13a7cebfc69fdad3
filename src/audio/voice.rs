use super::frame::StereoFrame;
use super::sample_buffer::SampleBuffer;
use super::sample_id::SampleId;

// One playing instance of a pad's sample. The window is fixed when the voice
// starts; trim edits made afterwards never touch a running voice.
#[derive(Clone, Copy, Debug)]
pub struct Voice {
    pub sample_id: SampleId,
    pub active: bool,
    pos: usize,
    start_frame: usize,
    length: usize,
    gain: f32,
}

impl Voice {
    pub fn silent() -> Self {
        Self {
            sample_id: SampleId(0),
            active: false,
            pos: 0,
            start_frame: 0,
            length: 0,
            gain: 0.0,
        }
    }

    pub fn start(sample_id: SampleId, start_frame: usize, length: usize, gain: f32) -> Self {
        Self {
            sample_id,
            active: true,
            pos: 0,
            start_frame,
            length,
            gain,
        }
    }

    pub fn render_into(&mut self, buffer: &SampleBuffer, out: &mut [StereoFrame]) {
        if !self.active {
            return;
        }
        // the window may outrun the buffer if a shorter sample was reloaded
        // onto the pad after this voice started
        let available = buffer.data.len().saturating_sub(self.start_frame);
        let end = self.length.min(available);
        if end == 0 {
            self.active = false;
            return;
        }

        for frame in out.iter_mut() {
            if self.pos >= end {
                self.active = false;
                break;
            }
            let s = buffer.data[self.start_frame + self.pos];
            frame.left += s.left * self.gain;
            frame.right += s.right * self.gain;
            self.pos += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ramp_buffer(n: usize) -> SampleBuffer {
        SampleBuffer {
            data: (0..n).map(|i| StereoFrame::splat(i as f32)).collect(),
            sample_rate: 4,
        }
    }

    #[test]
    fn test_voice_plays_only_its_window() {
        let buf = ramp_buffer(8);
        let mut v = Voice::start(SampleId(1), 2, 3, 1.0);
        let mut out = [StereoFrame::zero(); 8];
        v.render_into(&buf, &mut out);
        assert_eq!(out[0], StereoFrame::splat(2.0));
        assert_eq!(out[2], StereoFrame::splat(4.0));
        assert_eq!(out[3], StereoFrame::zero());
        assert!(!v.active);
    }

    #[test]
    fn test_voice_applies_gain_additively() {
        let buf = ramp_buffer(4);
        let mut v = Voice::start(SampleId(1), 1, 1, 0.5);
        let mut out = [StereoFrame::splat(1.0); 2];
        v.render_into(&buf, &mut out);
        assert_eq!(out[0], StereoFrame::splat(1.5));
        assert_eq!(out[1], StereoFrame::splat(1.0));
    }

    #[test]
    fn test_window_past_end_goes_silent() {
        let buf = ramp_buffer(4);
        let mut v = Voice::start(SampleId(1), 10, 5, 1.0);
        let mut out = [StereoFrame::zero(); 4];
        v.render_into(&buf, &mut out);
        assert!(!v.active);
        assert_eq!(out[0], StereoFrame::zero());
    }
}
