use thiserror::Error;

#[derive(Debug, Error)]
pub enum CryptoError {
    #[error("Invalid key file: must be exactly 158 bytes, got {got}")]
    InvalidKeyLength { got: usize },

    /// Every catalog layout was exhausted. Deliberately says nothing about
    /// which candidate came "closest": GCM gives no partial-success signal.
    #[error(
        "Decryption failed. The key file might be invalid, or the backup is \
         not a supported format (crypt12, crypt14, or crypt15)"
    )]
    DecryptionFailed,
}
