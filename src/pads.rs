// The pad bank. Owns the 16 pad records and everything that mutates them;
// playback goes out through an injected sink so all of this can run
// headless, with no audio device anywhere near the tests.

use crate::audio::{next_sample_id, SampleBuffer, SampleId};
use crate::audio_api::{AudioCommand, PlaybackSink, TriggerParams};
use crate::error::PadError;
use crate::loader::fetch;
use crate::shared::NUM_PADS;

#[derive(Clone, Debug)]
pub struct Pad {
    pub index: usize,
    pub name: String,
    pub buffer: Option<SampleBuffer>,
    pub sample_id: Option<SampleId>,
    pub trim_start: f32, // seconds
    pub trim_end: f32,   // seconds
    pub gain: f32,
}

impl Pad {
    fn empty(index: usize) -> Self {
        Self {
            index,
            name: String::new(),
            buffer: None,
            sample_id: None,
            // placeholders until a sample lands here; playback never reads
            // these while the pad is unloaded
            trim_start: 0.0,
            trim_end: 1.0,
            gain: 1.0,
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.buffer.is_some()
    }

    pub fn duration_secs(&self) -> f32 {
        self.buffer.as_ref().map_or(0.0, |b| b.duration_secs())
    }
}

pub struct PadStore {
    pads: Vec<Pad>, // always NUM_PADS entries, created once, reset in place
    sink: Box<dyn PlaybackSink>,
}

impl PadStore {
    pub fn new(sink: Box<dyn PlaybackSink>) -> Self {
        Self {
            pads: (0..NUM_PADS).map(Pad::empty).collect(),
            sink,
        }
    }

    pub fn get_pad(&self, pad: usize) -> Option<&Pad> {
        self.pads.get(pad)
    }

    pub fn all_pads(&self) -> &[Pad] {
        &self.pads
    }

    // Decode raw bytes and drop them onto a pad. A failed decode leaves the
    // pad exactly as it was.
    pub fn load_sound(
        &mut self,
        pad: usize,
        bytes: &[u8],
        name: Option<&str>,
    ) -> Result<&Pad, PadError> {
        if pad >= NUM_PADS {
            return Err(PadError::InvalidIndex(pad));
        }
        let buffer = SampleBuffer::decode_wav(bytes)?;
        let id = next_sample_id();
        self.sink.send(AudioCommand::RegisterSample {
            id,
            buffer: buffer.clone(),
        });

        let slot = &mut self.pads[pad];
        slot.trim_start = 0.0;
        slot.trim_end = buffer.duration_secs();
        slot.sample_id = Some(id);
        if let Some(name) = name {
            slot.name = name.to_string();
        }
        slot.buffer = Some(buffer);
        log::info!(
            "pad {pad}: loaded {:?} ({:.2}s)",
            slot.name,
            slot.trim_end
        );
        Ok(&self.pads[pad])
    }

    // Same, but the bytes come off the network. Progress lands in
    // `on_progress` as a percentage whenever the server reports a total.
    pub fn load_sound_from_url(
        &mut self,
        pad: usize,
        url: &str,
        name: Option<&str>,
        on_progress: Option<&dyn Fn(f32)>,
    ) -> Result<&Pad, PadError> {
        if pad >= NUM_PADS {
            // don't bother the network for a pad that doesn't exist
            return Err(PadError::InvalidIndex(pad));
        }
        let bytes = fetch::fetch_bytes(url, on_progress)?;
        let derived;
        let name = match name {
            Some(n) => n,
            None => {
                derived = fetch::name_from_url(url);
                &derived
            }
        };
        self.load_sound(pad, &bytes, Some(name))
    }

    // Fire-and-forget playback of the pad's current trim window. The window
    // is clamped and captured here, so edits made while the voice runs only
    // affect later triggers.
    pub fn play(&self, pad: usize) {
        let Some(p) = self.pads.get(pad) else {
            log::warn!("play: pad index {pad} out of range");
            return;
        };
        let (Some(buffer), Some(id)) = (&p.buffer, p.sample_id) else {
            log::warn!("play: pad {pad} has no sample loaded");
            return;
        };

        let duration = buffer.duration_secs();
        let start = p.trim_start.clamp(0.0, duration);
        let end = p.trim_end.clamp(0.0, duration).max(start);

        let rate = buffer.sample_rate as f32;
        let start_frame = (start * rate) as usize;
        let end_frame = ((end * rate) as usize).min(buffer.len_frames());

        self.sink.send(AudioCommand::Trigger(TriggerParams {
            sample_id: id,
            start_frame,
            length: end_frame.saturating_sub(start_frame),
            gain: p.gain,
        }));
    }

    // Direct assignment: callers hand us ordered values (the trim controller
    // settles ordering before it gets here). Only the outer bounds are
    // clamped.
    pub fn set_trim_points(&mut self, pad: usize, start: f32, end: f32) {
        let Some(p) = self.pads.get_mut(pad) else {
            log::warn!("set_trim_points: pad index {pad} out of range");
            return;
        };
        if !p.is_loaded() {
            log::warn!("set_trim_points: pad {pad} has no sample loaded");
            return;
        }
        let duration = p.duration_secs();
        p.trim_start = start.max(0.0);
        p.trim_end = end.min(duration);
    }

    pub fn reset_pad(&mut self, pad: usize) {
        let Some(p) = self.pads.get_mut(pad) else {
            log::warn!("reset_pad: pad index {pad} out of range");
            return;
        };
        if !p.is_loaded() {
            return;
        }
        p.trim_start = 0.0;
        p.trim_end = p.duration_secs();
    }

    pub fn clear_all(&mut self) {
        for p in &mut self.pads {
            *p = Pad::empty(p.index);
        }
        self.sink.send(AudioCommand::DropAllSamples);
        log::info!("cleared all pads");
    }
}
