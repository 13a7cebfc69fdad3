// Shared constants and the event/display types the tui and the control
// layer trade back and forth.
//
// The idea of the rendering process: the middle layer owns the pad bank and
// the waveform editing session, and the TUI just renders a display snapshot
// on every frame and feeds semantic input events back in.

pub const NUM_PADS: usize = 16;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputEvent {
    // grid keys: trigger the pad and make it the edited one
    PadDown(u8), // index 0-15

    // tab / shift-tab walk the selection without triggering
    SelectNext,
    SelectPrev,

    // 't': trim window back to the full sample
    ResetTrim,

    // backspace: wipe the whole bank
    ClearAll,

    // pointer, in screen cells; the middle layer maps these onto the
    // waveform canvas
    MouseMoved(u16, u16),
    MouseDown(u16, u16),
    MouseDragged(u16, u16),
    MouseUp(u16, u16),

    // quit button (esc)
    Quit,
}

// a screen rectangle in cells, so the middle layer doesn't have to know
// about any particular terminal toolkit
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScreenRect {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl ScreenRect {
    pub fn contains(&self, col: u16, row: u16) -> bool {
        col >= self.x
            && col < self.x + self.width
            && row >= self.y
            && row < self.y + self.height
    }
}

#[derive(Clone, Debug)]
pub struct PadView {
    pub name: String,
    pub loaded: bool,
}

#[derive(Clone, Debug)]
pub struct DisplayState {
    pub pads: Vec<PadView>, // always NUM_PADS entries
    pub selected_pad: usize,
    pub lit: [bool; NUM_PADS], // recently triggered, for the grid flash
    pub status: String,        // one line over the waveform panel
}
