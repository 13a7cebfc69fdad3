use std::collections::HashMap;

use crate::audio_api::{AudioCommand, TriggerParams};

use super::frame::StereoFrame;
use super::sample_buffer::SampleBuffer;
use super::sample_id::SampleId;
use super::voice::Voice;

const MAX_VOICES: usize = 16; // hard cap so we won't malloc voices in the callback

pub struct Engine {
    samples: HashMap<SampleId, SampleBuffer>,
    voices: [Voice; MAX_VOICES], // fixed pool of voices
}

impl Engine {
    pub fn new() -> Self {
        Self {
            samples: HashMap::new(),
            voices: [Voice::silent(); MAX_VOICES],
        }
    }

    pub fn handle_cmd(&mut self, cmd: AudioCommand) {
        match cmd {
            AudioCommand::RegisterSample { id, buffer } => {
                self.samples.insert(id, buffer);
            }
            AudioCommand::Trigger(t) => self.trigger_voice(t),
            AudioCommand::DropAllSamples => {
                self.samples.clear();
                for v in &mut self.voices {
                    v.active = false;
                }
            }
        }
    }

    fn trigger_voice(&mut self, t: TriggerParams) {
        if !self.samples.contains_key(&t.sample_id) {
            return;
        }
        // next free slot, stealing slot 0 when the pool is full
        let slot = self.voices.iter().position(|v| !v.active).unwrap_or(0);
        self.voices[slot] = Voice::start(t.sample_id, t.start_frame, t.length, t.gain);
    }

    pub fn render_block(&mut self, out: &mut [StereoFrame]) {
        for f in out.iter_mut() {
            *f = StereoFrame::zero();
        }
        let Engine { samples, voices } = self;
        for v in voices.iter_mut() {
            if !v.active {
                continue;
            }
            match samples.get(&v.sample_id) {
                Some(buffer) => v.render_into(buffer, out),
                None => v.active = false,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ramp(id: u64, n: usize) -> AudioCommand {
        AudioCommand::RegisterSample {
            id: SampleId(id),
            buffer: SampleBuffer {
                data: (0..n).map(|i| StereoFrame::splat(i as f32)).collect(),
                sample_rate: 8,
            },
        }
    }

    fn trigger(id: u64, start_frame: usize, length: usize, gain: f32) -> AudioCommand {
        AudioCommand::Trigger(TriggerParams {
            sample_id: SampleId(id),
            start_frame,
            length,
            gain,
        })
    }

    #[test]
    fn test_trigger_renders_the_captured_window() {
        let mut engine = Engine::new();
        engine.handle_cmd(ramp(1, 8));
        engine.handle_cmd(trigger(1, 1, 2, 1.0));

        let mut out = [StereoFrame::splat(9.0); 4];
        engine.render_block(&mut out);
        assert_eq!(out[0], StereoFrame::splat(1.0));
        assert_eq!(out[1], StereoFrame::splat(2.0));
        // block is zeroed past the voice's end, not left as stale input
        assert_eq!(out[2], StereoFrame::zero());
        assert_eq!(out[3], StereoFrame::zero());
    }

    #[test]
    fn test_trigger_for_unknown_sample_is_ignored() {
        let mut engine = Engine::new();
        engine.handle_cmd(trigger(42, 0, 4, 1.0));
        let mut out = [StereoFrame::zero(); 4];
        engine.render_block(&mut out);
        assert_eq!(out, [StereoFrame::zero(); 4]);
    }

    #[test]
    fn test_drop_all_samples_kills_running_voices() {
        let mut engine = Engine::new();
        engine.handle_cmd(ramp(1, 8));
        engine.handle_cmd(trigger(1, 0, 8, 1.0));
        engine.handle_cmd(AudioCommand::DropAllSamples);
        let mut out = [StereoFrame::zero(); 4];
        engine.render_block(&mut out);
        assert_eq!(out, [StereoFrame::zero(); 4]);
    }
}
