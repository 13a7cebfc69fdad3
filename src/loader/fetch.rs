use std::io::Read;

use crate::error::PadError;

// Incremental download of sample bytes. Progress is a percentage in
// [0, 100], reported only when the server sends a Content-Length; with an
// unknown total we just stay quiet instead of inventing numbers.
pub fn fetch_bytes(url: &str, on_progress: Option<&dyn Fn(f32)>) -> Result<Vec<u8>, PadError> {
    let response = ureq::get(url).call().map_err(|e| match e {
        ureq::Error::Status(status, _) => PadError::Fetch {
            url: url.to_string(),
            status,
        },
        other => PadError::FetchTransport {
            url: url.to_string(),
            message: other.to_string(),
        },
    })?;

    let total: Option<u64> = response
        .header("Content-Length")
        .and_then(|s| s.parse().ok())
        .filter(|&n| n > 0);

    let mut reader = response.into_reader();
    let mut out: Vec<u8> = Vec::with_capacity(total.unwrap_or(0) as usize);
    let mut buf = [0u8; 8192];
    let mut downloaded: u64 = 0;

    loop {
        let n = reader.read(&mut buf).map_err(|e| PadError::FetchTransport {
            url: url.to_string(),
            message: e.to_string(),
        })?;
        if n == 0 {
            break;
        }
        out.extend_from_slice(&buf[..n]);
        downloaded += n as u64;
        if let (Some(cb), Some(total)) = (on_progress, total) {
            cb((downloaded as f32 / total as f32 * 100.0).min(100.0));
        }
    }

    log::debug!("fetched {} bytes from {url}", out.len());
    Ok(out)
}

// "https://host/kits/808/kick.wav?v=2" -> "kick"
pub fn name_from_url(url: &str) -> String {
    let path = url.split(['?', '#']).next().unwrap_or(url);
    let segment = path.trim_end_matches('/').rsplit('/').next().unwrap_or("");
    let stem = segment.rsplit_once('.').map_or(segment, |(s, _)| s);
    if stem.is_empty() {
        "sample".to_string()
    } else {
        stem.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_from_url_strips_path_and_extension() {
        assert_eq!(name_from_url("https://host/kits/808/kick.wav"), "kick");
        assert_eq!(name_from_url("https://host/kick.wav?v=2#frag"), "kick");
        assert_eq!(name_from_url("https://host/loop.take.2.wav"), "loop.take.2");
        assert_eq!(name_from_url("snare"), "snare");
    }

    #[test]
    fn test_name_from_url_falls_back_on_empty_segment() {
        assert_eq!(name_from_url("https://host/"), "sample");
        assert_eq!(name_from_url(""), "sample");
    }
}
