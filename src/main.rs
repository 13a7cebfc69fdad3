mod audio;
mod audio_api;
mod error;
mod loader;
mod middle;
mod pads;
mod shared;
#[cfg(test)]
mod testutil;
mod tui;
mod wave;

use std::path::PathBuf;
use std::time::Duration;

use crossterm::terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use loader::preset::SoundSource;
use middle::Middle;
use shared::InputEvent;

fn main() {
    // set RUST_LOG=debug for verbose output; logs go to stderr, the tui
    // owns stdout
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let audio = audio::start_audio()?;
    let mut middle = Middle::new(Box::new(audio));

    let arg: Option<PathBuf> = std::env::args().nth(1).map(PathBuf::from);
    load_startup_sounds(&mut middle, arg)?;

    terminal::enable_raw_mode()?;
    crossterm::execute!(std::io::stdout(), crossterm::event::EnableMouseCapture)?;
    let _guard = RawModeGuard; // auto drops when out of scope

    let backend = CrosstermBackend::new(std::io::stdout());
    let mut term = Terminal::new(backend)?;
    term.clear()?;

    let tick_rate = Duration::from_millis(16); // ~60fps

    loop {
        let ds = middle.display_state();
        let mut wave_area = shared::ScreenRect::default();
        term.draw(|frame| {
            wave_area = tui::view::render(frame, frame.area(), &ds, &middle.wave);
        })?;
        middle.set_wave_area(wave_area);

        for event in tui::input::poll_input(tick_rate)? {
            if event == InputEvent::Quit {
                drop(term);
                return Ok(());
            }
            middle.handle_input(event);
        }

        middle.tick();
    }
}

// A json file on the command line is a preset; a directory gets its wavs
// indexed straight onto the bank. Either way a half-broken batch still
// leaves us with whatever did load.
fn load_startup_sounds(middle: &mut Middle, arg: Option<PathBuf>) -> anyhow::Result<()> {
    let path = match arg {
        Some(p) => p,
        None => std::env::current_dir()?,
    };

    let sources: Vec<SoundSource> = if path.is_file() {
        let (preset, base) = loader::preset::read_preset_file(&path)?;
        log::info!("loading preset {:?}", preset.name);
        preset.sources(&base)
    } else {
        loader::sample_loader::index_wav_in_dir(&path)?
            .into_iter()
            .map(SoundSource::File)
            .collect()
    };

    if sources.is_empty() {
        log::info!("no sounds found at {}; pads start empty", path.display());
        return Ok(());
    }

    match loader::preset::load_sources(&mut middle.store, &sources) {
        Ok(report) => log::info!(
            "{} sounds on the bank, {} failed",
            report.loaded.len(),
            report.failures.len()
        ),
        Err(e) => log::warn!("nothing loaded: {e}"),
    }
    Ok(())
}

struct RawModeGuard;
impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = crossterm::execute!(std::io::stdout(), crossterm::event::DisableMouseCapture);
        let _ = terminal::disable_raw_mode();
    }
}
