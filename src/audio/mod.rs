use anyhow::Context;
use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use crossbeam_channel::{Receiver, Sender};

use crate::audio_api::{AudioCommand, PlaybackSink};

mod engine;
mod frame;
mod sample_buffer;
mod sample_id;
mod voice;

pub use frame::StereoFrame;
pub use sample_buffer::SampleBuffer;
pub use sample_id::{next_sample_id, SampleId};

use engine::Engine;

pub struct AudioHandle {
    tx: Sender<AudioCommand>,
    _output_stream: cpal::Stream,
}

impl PlaybackSink for AudioHandle {
    fn send(&self, cmd: AudioCommand) {
        let _ = self.tx.try_send(cmd);
    }
}

pub fn start_audio() -> anyhow::Result<AudioHandle> {
    let (tx, rx) = crossbeam_channel::bounded::<AudioCommand>(1024);

    let host = cpal::default_host();
    let device = host
        .default_output_device()
        .context("no default output device")?;
    let config = device
        .default_output_config()
        .context("no default output config")?;

    let channels = config.channels() as usize;
    if channels != 2 {
        anyhow::bail!("only stereo outputs are supported right now");
    }

    match config.sample_format() {
        cpal::SampleFormat::F32 => {
            let output_stream = build_output_stream_f32(&device, &config.into(), rx, channels)?;
            output_stream.play().context("failed to play output stream")?;

            Ok(AudioHandle {
                tx,
                _output_stream: output_stream,
            })
        }
        _ => anyhow::bail!("unsupported sample format (only f32 supported for now)"),
    }
}

// ── Output stream ─────────────────────────────────────────────────

fn build_output_stream_f32(
    device: &cpal::Device,
    config: &cpal::StreamConfig,
    rx: Receiver<AudioCommand>,
    channels: usize,
) -> anyhow::Result<cpal::Stream> {
    let mut engine = Engine::new();

    let err_fn = |err| log::error!("audio output stream error: {err}");

    let stream = device.build_output_stream(
        config,
        move |data: &mut [f32], _info| {
            while let Ok(cmd) = rx.try_recv() {
                engine.handle_cmd(cmd);
            }

            let n_frames = data.len() / channels;
            // stereo interleaved f32 is exactly our frame layout
            let frames: &mut [StereoFrame] = unsafe {
                std::slice::from_raw_parts_mut(data.as_mut_ptr() as *mut StereoFrame, n_frames)
            };
            engine.render_block(frames);
        },
        err_fn,
        None,
    )?;

    Ok(stream)
}
