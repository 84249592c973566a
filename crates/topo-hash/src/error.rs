/// Errors produced when parsing object ids.
#[derive(Debug, thiserror::Error)]
pub enum HashError {
    #[error("invalid hex character at position {position}: '{character}'")]
    InvalidHex { position: usize, character: char },

    #[error("invalid object id length: expected 40 or 64 hex digits, got {0}")]
    InvalidLength(usize),
}
