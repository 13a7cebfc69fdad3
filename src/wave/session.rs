// One waveform editing session: the envelope cache plus the trim bars for
// whatever pad is currently on screen. The envelope is keyed by
// (sample id, width) and recomputed from scratch whenever either changes;
// per tick we advance the extraction by one chunk, so big samples show the
// loading placeholder for a few frames instead of freezing the draw loop.

use crate::audio::SampleId;
use crate::pads::{Pad, PadStore};

use super::peaks::PeakJob;
use super::trim::TrimBars;

pub struct WaveSession {
    pub bars: TrimBars,
    width: usize,
    key: Option<(SampleId, usize)>,
    job: Option<PeakJob>,
    peaks: Option<Vec<f32>>,
}

impl WaveSession {
    pub fn new() -> Self {
        Self {
            bars: TrimBars::new(0.0, 0.0),
            width: 0,
            key: None,
            job: None,
            peaks: None,
        }
    }

    pub fn set_canvas_size(&mut self, width: usize, height: f32) {
        self.width = width;
        self.bars.set_canvas_size(width as f32, height);
    }

    // Per-tick driver. Keeps the cache honest against whatever pad is
    // selected right now and advances a pending extraction by one chunk.
    pub fn present(&mut self, pad: &Pad) {
        let (Some(buffer), Some(id)) = (&pad.buffer, pad.sample_id) else {
            self.key = None;
            self.job = None;
            self.peaks = None;
            return;
        };

        let wanted = (id, self.width);
        if self.key != Some(wanted) {
            self.key = Some(wanted);
            self.peaks = None;
            self.job = Some(PeakJob::new(self.width));
            // a different sample landed under the bars; re-anchor them
            self.bars
                .sync_to_window(pad.trim_start, pad.trim_end, buffer.duration_secs());
        }

        let done = match &mut self.job {
            Some(job) => job.step(buffer),
            None => false,
        };
        if done {
            self.peaks = self.job.take().map(PeakJob::into_peaks);
        }
    }

    // re-anchor the bars from the pad, e.g. after a trim reset
    pub fn sync_bars(&mut self, pad: &Pad) {
        if pad.is_loaded() {
            self.bars
                .sync_to_window(pad.trim_start, pad.trim_end, pad.duration_secs());
        }
    }

    pub fn pointer_up(&mut self, store: &mut PadStore, pad: usize) {
        self.bars.release_into(store, pad);
    }

    pub fn peaks(&self) -> Option<&[f32]> {
        self.peaks.as_deref()
    }

    pub fn is_pending(&self) -> bool {
        self.job.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{recording_store, wav_bytes_mono_f32};
    use crate::wave::peaks::PEAK_CHUNK_COLUMNS;

    #[test]
    fn test_session_shows_pending_then_ready() {
        let (mut store, _commands) = recording_store();
        let bytes = wav_bytes_mono_f32(&vec![0.3; 50_000], 44100);
        store.load_sound(0, &bytes, None).unwrap();

        let mut session = WaveSession::new();
        session.set_canvas_size(PEAK_CHUNK_COLUMNS * 3, 40.0);

        let pad = store.get_pad(0).unwrap();
        session.present(pad);
        assert!(session.is_pending());
        assert!(session.peaks().is_none());

        session.present(pad);
        session.present(pad);
        assert!(!session.is_pending());
        assert_eq!(session.peaks().unwrap().len(), PEAK_CHUNK_COLUMNS * 3);
    }

    #[test]
    fn test_cache_invalidates_on_width_change() {
        let (mut store, _commands) = recording_store();
        let bytes = wav_bytes_mono_f32(&vec![0.3; 100], 44100);
        store.load_sound(0, &bytes, None).unwrap();

        let mut session = WaveSession::new();
        session.set_canvas_size(32, 40.0);
        session.present(store.get_pad(0).unwrap());
        assert_eq!(session.peaks().unwrap().len(), 32);

        session.set_canvas_size(64, 40.0);
        session.present(store.get_pad(0).unwrap());
        session.present(store.get_pad(0).unwrap());
        assert_eq!(session.peaks().unwrap().len(), 64);
    }

    #[test]
    fn test_pad_switch_reanchors_bars() {
        let (mut store, _commands) = recording_store();
        let bytes = wav_bytes_mono_f32(&vec![0.3; 44100], 44100); // 1s
        store.load_sound(0, &bytes, None).unwrap();
        store.load_sound(1, &bytes, None).unwrap();
        store.set_trim_points(1, 0.25, 0.5);

        let mut session = WaveSession::new();
        session.set_canvas_size(100, 40.0);
        session.present(store.get_pad(0).unwrap());
        assert_eq!((session.bars.left.x, session.bars.right.x), (0.0, 100.0));

        session.present(store.get_pad(1).unwrap());
        assert_eq!((session.bars.left.x, session.bars.right.x), (25.0, 50.0));
    }

    #[test]
    fn test_unloaded_pad_clears_the_session() {
        let (mut store, _commands) = recording_store();
        let bytes = wav_bytes_mono_f32(&vec![0.3; 100], 44100);
        store.load_sound(0, &bytes, None).unwrap();

        let mut session = WaveSession::new();
        session.set_canvas_size(32, 40.0);
        session.present(store.get_pad(0).unwrap());
        assert!(session.peaks().is_some());

        store.clear_all();
        session.present(store.get_pad(0).unwrap());
        assert!(session.peaks().is_none());
        assert!(!session.is_pending());
    }
}
