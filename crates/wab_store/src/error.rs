use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Crypto error: {0}")]
    Crypto(#[from] wab_crypto::CryptoError),

    /// The decrypted bytes are not the expected relational structure
    /// (not a SQLite image, or the chat/message relations are missing).
    #[error("Malformed message store: {0}")]
    MalformedStore(String),

    #[error("Unexpected failure: {0}")]
    Unknown(String),
}

// Any SQL failure on a decrypted image means the image does not have the
// structure we expect; there is nothing to retry.
impl From<rusqlite::Error> for StoreError {
    fn from(err: rusqlite::Error) -> Self {
        StoreError::MalformedStore(err.to_string())
    }
}

impl From<std::io::Error> for StoreError {
    fn from(err: std::io::Error) -> Self {
        StoreError::Unknown(err.to_string())
    }
}
