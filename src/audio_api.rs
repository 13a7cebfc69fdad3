pub use crate::audio::{SampleBuffer, SampleId};

// A playback window, captured at trigger time. Trim edits made while a
// voice is running never touch that voice; they only shape later triggers.
#[derive(Clone, Debug, PartialEq)]
pub struct TriggerParams {
    pub sample_id: SampleId,
    pub start_frame: usize,
    pub length: usize, // frames
    pub gain: f32,
}

#[derive(Clone, Debug)]
pub enum AudioCommand {
    // The engine can't load files (interrupts the callback thread), so
    // buffers are decoded on the control thread and registered by id first.
    RegisterSample { id: SampleId, buffer: SampleBuffer },

    // The engine then uses the sample id to start the sound.
    Trigger(TriggerParams),

    // The pad bank was cleared; drop every registered buffer.
    DropAllSamples,
}

// Where pad playback goes. The real impl is the cpal-backed AudioHandle;
// tests swap in a command-collecting fake so the store runs headless.
pub trait PlaybackSink {
    fn send(&self, cmd: AudioCommand);
}
