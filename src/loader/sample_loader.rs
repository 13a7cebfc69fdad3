use std::path::{Path, PathBuf};

// Find the wavs sitting in a project directory, sorted so the pad order is
// stable across runs.
pub fn index_wav_in_dir(dir: &Path) -> anyhow::Result<Vec<PathBuf>> {
    let mut paths: Vec<PathBuf> = std::fs::read_dir(dir)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|p| {
            p.extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case("wav"))
        })
        .collect();
    paths.sort();
    Ok(paths)
}

// "kits/808 kick.wav" -> "808 kick"
pub fn name_from_path(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "sample".to_string())
}
