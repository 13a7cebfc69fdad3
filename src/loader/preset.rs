// Batch loading: a list of sound sources goes onto pads 0.., one pad per
// source. Failures are isolated per source and reported in the result; the
// whole batch only errors out when nothing at all loaded.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::PadError;
use crate::pads::PadStore;
use crate::shared::NUM_PADS;

// the preset document shape: either local files or url entries
#[derive(Clone, Debug, Deserialize)]
pub struct Preset {
    pub name: String,
    #[serde(default)]
    pub files: Vec<String>,
    #[serde(default)]
    pub samples: Vec<PresetSample>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct PresetSample {
    pub url: String,
    pub name: Option<String>,
}

impl Preset {
    // relative file entries resolve against the preset's own directory
    pub fn sources(&self, base: &Path) -> Vec<SoundSource> {
        if !self.files.is_empty() {
            self.files
                .iter()
                .map(|f| SoundSource::File(base.join(f)))
                .collect()
        } else {
            self.samples
                .iter()
                .map(|s| SoundSource::Url {
                    url: s.url.clone(),
                    name: s.name.clone(),
                })
                .collect()
        }
    }
}

pub fn read_preset_file(path: &Path) -> Result<(Preset, PathBuf), PadError> {
    let text = std::fs::read_to_string(path)?;
    let preset: Preset = serde_json::from_str(&text)
        .map_err(|e| PadError::Io(std::io::Error::other(e)))?;
    let base = path.parent().unwrap_or(Path::new(".")).to_path_buf();
    Ok((preset, base))
}

#[derive(Clone, Debug)]
pub enum SoundSource {
    File(PathBuf),
    Url { url: String, name: Option<String> },
}

#[derive(Clone, Debug)]
pub struct LoadedSound {
    pub pad: usize,
    pub name: String,
}

#[derive(Debug)]
pub struct BatchFailure {
    pub source_index: usize,
    pub error: PadError,
}

#[derive(Debug, Default)]
pub struct BatchReport {
    pub loaded: Vec<LoadedSound>,
    pub failures: Vec<BatchFailure>,
}

pub fn load_sources(
    store: &mut PadStore,
    sources: &[SoundSource],
) -> Result<BatchReport, PadError> {
    if sources.len() > NUM_PADS {
        log::warn!(
            "batch has {} sources, only the first {NUM_PADS} fit on the bank",
            sources.len()
        );
    }

    let mut report = BatchReport::default();
    for (i, source) in sources.iter().take(NUM_PADS).enumerate() {
        let result = match source {
            SoundSource::File(path) => std::fs::read(path)
                .map_err(PadError::from)
                .and_then(|bytes| {
                    let name = super::sample_loader::name_from_path(path);
                    store
                        .load_sound(i, &bytes, Some(&name))
                        .map(|p| p.name.clone())
                }),
            SoundSource::Url { url, name } => store
                .load_sound_from_url(i, url, name.as_deref(), None)
                .map(|p| p.name.clone()),
        };
        match result {
            Ok(name) => report.loaded.push(LoadedSound { pad: i, name }),
            Err(error) => {
                log::warn!("batch source {i} failed: {error}");
                report.failures.push(BatchFailure {
                    source_index: i,
                    error,
                });
            }
        }
    }

    if report.loaded.is_empty() {
        return Err(PadError::EmptyResult);
    }
    Ok(report)
}
