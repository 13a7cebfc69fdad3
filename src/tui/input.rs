use std::time::Duration;

use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind,
};

use crate::shared::InputEvent;

// Grid keys (the 16 pads):
//   1 2 3 4       //  PadDown(0..=3)
//   q w e r       //  PadDown(4..=7)
//   a s d f       //  PadDown(8..=11)
//   z x c v       //  PadDown(12..=15)
//
// Everything else:
//   Tab / Shift-Tab   select the edited pad without triggering it
//   t                 reset the trim window to the full sample
//   Backspace         clear the whole bank
//   Esc               quit
//   mouse             trim-bar editing over the waveform panel
const PAD_KEYS: [char; 16] = [
    '1', '2', '3', '4', 'q', 'w', 'e', 'r', 'a', 's', 'd', 'f', 'z', 'x', 'c', 'v',
];

pub fn poll_input(wait: Duration) -> anyhow::Result<Vec<InputEvent>> {
    let mut events = Vec::new();
    let mut timeout = wait;
    // first poll paces the frame; after that, drain whatever queued up
    while event::poll(timeout)? {
        timeout = Duration::ZERO;
        match event::read()? {
            Event::Key(key) => {
                if let Some(ev) = map_key(key) {
                    events.push(ev);
                }
            }
            Event::Mouse(mouse) => {
                if let Some(ev) = map_mouse(mouse) {
                    events.push(ev);
                }
            }
            _ => {}
        }
    }
    Ok(events)
}

fn map_key(key: KeyEvent) -> Option<InputEvent> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    match key.code {
        KeyCode::Char(c) => {
            let c = c.to_ascii_lowercase();
            if c == 't' {
                return Some(InputEvent::ResetTrim);
            }
            PAD_KEYS
                .iter()
                .position(|&k| k == c)
                .map(|i| InputEvent::PadDown(i as u8))
        }
        KeyCode::Tab => Some(InputEvent::SelectNext),
        KeyCode::BackTab => Some(InputEvent::SelectPrev),
        KeyCode::Backspace => Some(InputEvent::ClearAll),
        KeyCode::Esc => Some(InputEvent::Quit),
        _ => None,
    }
}

fn map_mouse(mouse: MouseEvent) -> Option<InputEvent> {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            Some(InputEvent::MouseDown(mouse.column, mouse.row))
        }
        MouseEventKind::Drag(MouseButton::Left) => {
            Some(InputEvent::MouseDragged(mouse.column, mouse.row))
        }
        MouseEventKind::Up(MouseButton::Left) => Some(InputEvent::MouseUp(mouse.column, mouse.row)),
        MouseEventKind::Moved => Some(InputEvent::MouseMoved(mouse.column, mouse.row)),
        _ => None,
    }
}
