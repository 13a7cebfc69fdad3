// The control layer. Owns the pad bank and the waveform editing session,
// turns semantic input events into store operations; the TUI just renders
// the display snapshot this hands it every frame.

use crate::audio_api::PlaybackSink;
use crate::pads::PadStore;
use crate::shared::{DisplayState, InputEvent, PadView, ScreenRect, NUM_PADS};
use crate::wave::session::WaveSession;

const LIT_FRAMES: u8 = 8; // grid flash length at ~60fps

pub struct Middle {
    pub store: PadStore,
    pub wave: WaveSession,
    selected_pad: usize,
    wave_area: ScreenRect,
    lit: [u8; NUM_PADS],
}

impl Middle {
    pub fn new(sink: Box<dyn PlaybackSink>) -> Self {
        Self {
            store: PadStore::new(sink),
            wave: WaveSession::new(),
            selected_pad: 0,
            wave_area: ScreenRect::default(),
            lit: [0; NUM_PADS],
        }
    }

    // where the waveform canvas ended up on screen this frame
    pub fn set_wave_area(&mut self, area: ScreenRect) {
        if area != self.wave_area {
            self.wave_area = area;
            self.wave
                .set_canvas_size(area.width as usize, area.height as f32);
        }
    }

    pub fn handle_input(&mut self, event: InputEvent) {
        match event {
            InputEvent::PadDown(i) => {
                let i = i as usize % NUM_PADS;
                self.store.play(i);
                self.lit[i] = LIT_FRAMES;
                self.selected_pad = i;
            }
            InputEvent::SelectNext => {
                self.selected_pad = (self.selected_pad + 1) % NUM_PADS;
            }
            InputEvent::SelectPrev => {
                self.selected_pad = (self.selected_pad + NUM_PADS - 1) % NUM_PADS;
            }
            InputEvent::ResetTrim => {
                self.store.reset_pad(self.selected_pad);
                if let Some(pad) = self.store.get_pad(self.selected_pad) {
                    self.wave.sync_bars(pad);
                }
            }
            InputEvent::ClearAll => {
                self.store.clear_all();
            }
            InputEvent::MouseMoved(col, row) | InputEvent::MouseDragged(col, row) => {
                let dragging = self.wave.bars.left.dragged || self.wave.bars.right.dragged;
                if self.wave_area.contains(col, row) || dragging {
                    // while dragging we keep feeding positions even outside
                    // the canvas; the controller clamps for us
                    let (x, y) = self.to_canvas(col, row);
                    self.wave.bars.pointer_moved(x, y);
                } else {
                    self.wave.bars.left.selected = false;
                    self.wave.bars.right.selected = false;
                }
            }
            InputEvent::MouseDown(col, row) => {
                if self.wave_area.contains(col, row) {
                    let (x, y) = self.to_canvas(col, row);
                    self.wave.bars.pointer_down(x, y);
                }
            }
            InputEvent::MouseUp(_, _) => {
                self.wave.pointer_up(&mut self.store, self.selected_pad);
            }
            InputEvent::Quit => {}
        }
    }

    // per-frame upkeep: advance a pending envelope, fade the grid flashes
    pub fn tick(&mut self) {
        for l in &mut self.lit {
            *l = l.saturating_sub(1);
        }
        if let Some(pad) = self.store.get_pad(self.selected_pad) {
            self.wave.present(pad);
        }
    }

    fn to_canvas(&self, col: u16, row: u16) -> (f32, f32) {
        (
            col as f32 - self.wave_area.x as f32,
            row as f32 - self.wave_area.y as f32,
        )
    }

    pub fn display_state(&self) -> DisplayState {
        let pads = self
            .store
            .all_pads()
            .iter()
            .map(|p| PadView {
                name: p.name.clone(),
                loaded: p.is_loaded(),
            })
            .collect();
        let mut lit = [false; NUM_PADS];
        for (i, &l) in self.lit.iter().enumerate() {
            lit[i] = l > 0;
        }
        DisplayState {
            pads,
            selected_pad: self.selected_pad,
            lit,
            status: self.status_line(),
        }
    }

    fn status_line(&self) -> String {
        match self.store.get_pad(self.selected_pad) {
            Some(p) if p.is_loaded() => format!(
                " pad {} {:?}  {:.2}s..{:.2}s of {:.2}s ",
                self.selected_pad + 1,
                p.name,
                p.trim_start,
                p.trim_end,
                p.duration_secs()
            ),
            _ => format!(" pad {}: empty ", self.selected_pad + 1),
        }
    }
}
