// Test-only helpers: in-memory wav fixtures and a playback sink that just
// records what it was told.

use std::cell::RefCell;
use std::io::Cursor;
use std::rc::Rc;

use crate::audio_api::{AudioCommand, PlaybackSink};
use crate::pads::PadStore;

pub struct RecordingSink(Rc<RefCell<Vec<AudioCommand>>>);

impl PlaybackSink for RecordingSink {
    fn send(&self, cmd: AudioCommand) {
        self.0.borrow_mut().push(cmd);
    }
}

pub fn recording_store() -> (PadStore, Rc<RefCell<Vec<AudioCommand>>>) {
    let commands = Rc::new(RefCell::new(Vec::new()));
    let store = PadStore::new(Box::new(RecordingSink(commands.clone())));
    (store, commands)
}

pub fn wav_bytes_mono_f32(samples: &[f32], sample_rate: u32) -> Vec<u8> {
    let spec = hound::WavSpec {
        channels: 1,
        sample_rate,
        bits_per_sample: 32,
        sample_format: hound::SampleFormat::Float,
    };
    let mut bytes = Vec::new();
    {
        let mut writer = hound::WavWriter::new(Cursor::new(&mut bytes), spec).unwrap();
        for &s in samples {
            writer.write_sample(s).unwrap();
        }
        writer.finalize().unwrap();
    }
    bytes
}

pub fn wav_bytes_mono_i16(samples: &[i16], sample_rate: u32) -> Vec<u8> {
    let spec = hound::WavSpec {
        channels: 1,
        sample_rate,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };
    let mut bytes = Vec::new();
    {
        let mut writer = hound::WavWriter::new(Cursor::new(&mut bytes), spec).unwrap();
        for &s in samples {
            writer.write_sample(s).unwrap();
        }
        writer.finalize().unwrap();
    }
    bytes
}
