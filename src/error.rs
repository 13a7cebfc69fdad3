// everything that can go wrong while getting a sound onto a pad

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PadError {
    #[error("pad index {0} is out of range")]
    InvalidIndex(usize),

    #[error("could not decode sample bytes: {0}")]
    Decode(#[from] hound::Error),

    // non-success http response
    #[error("fetching {url} returned status {status}")]
    Fetch { url: String, status: u16 },

    // dns failure, refused connection, broken body read, that kind of thing
    #[error("fetching {url} failed: {message}")]
    FetchTransport { url: String, message: String },

    #[error("no usable sound sources in batch")]
    EmptyResult,

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
