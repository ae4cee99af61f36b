//! Format-fallback authenticated decryption.
//!
//! Each catalog layout is tried in order against the raw file. AES-GCM is a
//! strong oracle here: slicing the IV or ciphertext at the wrong offset
//! fails tag verification instead of producing corrupt plaintext, so the
//! first authenticated success identifies the format.

use std::io::Read;

use aes_gcm::aead::generic_array::typenum::U16;
use aes_gcm::aead::{Aead, KeyInit};
use aes_gcm::aes::Aes256;
use aes_gcm::{AesGcm, Nonce};
use flate2::read::ZlibDecoder;
use thiserror::Error;
use tracing::debug;

use crate::error::CryptoError;
use crate::format::{ContainerFormat, FORMAT_CATALOG};
use crate::key::KeyMaterial;

/// AES-256-GCM parametrised for the 16-byte IV the containers carry.
type BackupCipher = AesGcm<Aes256, U16>;

/// Why a single catalog candidate was rejected. Logged, never escalated.
#[derive(Debug, Error)]
enum TrialError {
    #[error("authentication tag mismatch")]
    Authentication,
    #[error("inflate failed: {0}")]
    Decompression(#[from] std::io::Error),
}

/// Decrypt and decompress a raw backup file.
///
/// Tries every known container layout in catalog order and returns the
/// decompressed database image of the first layout that authenticates.
/// Exhausting the catalog yields [`CryptoError::DecryptionFailed`];
/// per-candidate failures are logged at debug level only.
pub fn decrypt_backup(key: &KeyMaterial, raw: &[u8]) -> Result<Vec<u8>, CryptoError> {
    // The key is always 32 bytes, so cipher construction cannot fail.
    let cipher =
        BackupCipher::new_from_slice(key.key_bytes()).map_err(|_| CryptoError::DecryptionFailed)?;

    for format in &FORMAT_CATALOG {
        // Structural pre-check: header plus trailing tag must fit. No
        // decryption is attempted for files that cannot hold this layout.
        if raw.len() < format.min_file_len() {
            debug!(format = format.name, len = raw.len(), "file too short for layout");
            continue;
        }
        match try_format(&cipher, format, raw) {
            Ok(image) => {
                debug!(format = format.name, bytes = image.len(), "backup decrypted");
                return Ok(image);
            }
            Err(err) => {
                debug!(format = format.name, %err, "candidate rejected");
            }
        }
    }

    Err(CryptoError::DecryptionFailed)
}

/// Attempt one layout: slice the IV and payload, authenticate, inflate.
fn try_format(
    cipher: &BackupCipher,
    format: &ContainerFormat,
    raw: &[u8],
) -> Result<Vec<u8>, TrialError> {
    let iv = &raw[format.iv_offset..format.iv_offset + format.iv_len];
    // Ciphertext runs to end of file, with the 16-byte tag trailing.
    let payload = &raw[format.ciphertext_offset..];

    let compressed = cipher
        .decrypt(Nonce::from_slice(iv), payload)
        .map_err(|_| TrialError::Authentication)?;

    let mut image = Vec::new();
    ZlibDecoder::new(compressed.as_slice()).read_to_end(&mut image)?;
    Ok(image)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use flate2::write::ZlibEncoder;
    use flate2::Compression;

    use super::*;
    use crate::key::KEY_FILE_LEN;

    const TEST_KEY: [u8; 32] = [0xab; 32];

    fn test_key() -> KeyMaterial {
        let mut raw = vec![0u8; KEY_FILE_LEN];
        raw[126..].copy_from_slice(&TEST_KEY);
        KeyMaterial::load(&raw).unwrap()
    }

    /// Build a synthetic container for the given layout.
    fn make_backup(format: &ContainerFormat, key: &[u8; 32], plaintext: &[u8]) -> Vec<u8> {
        let mut enc = ZlibEncoder::new(Vec::new(), Compression::default());
        enc.write_all(plaintext).unwrap();
        let compressed = enc.finish().unwrap();

        let iv = [7u8; 16];
        let cipher = BackupCipher::new_from_slice(key).unwrap();
        let sealed = cipher
            .encrypt(Nonce::from_slice(&iv), compressed.as_slice())
            .unwrap();

        let mut file = vec![0u8; format.ciphertext_offset];
        file[format.iv_offset..format.iv_offset + format.iv_len].copy_from_slice(&iv);
        file.extend_from_slice(&sealed);
        file
    }

    #[test]
    fn decrypts_crypt14_15_layout() {
        let backup = make_backup(&FORMAT_CATALOG[0], &TEST_KEY, b"sqlite image bytes");
        let image = decrypt_backup(&test_key(), &backup).unwrap();
        assert_eq!(image, b"sqlite image bytes");
    }

    #[test]
    fn decrypts_crypt12_layout() {
        let backup = make_backup(&FORMAT_CATALOG[1], &TEST_KEY, b"older layout");
        let image = decrypt_backup(&test_key(), &backup).unwrap();
        assert_eq!(image, b"older layout");
    }

    #[test]
    fn wrong_key_fails() {
        let backup = make_backup(&FORMAT_CATALOG[0], &[0x11; 32], b"payload");
        let err = decrypt_backup(&test_key(), &backup).unwrap_err();
        assert!(matches!(err, CryptoError::DecryptionFailed));
    }

    #[test]
    fn tampered_ciphertext_fails_authentication() {
        let format = &FORMAT_CATALOG[0];
        let mut backup = make_backup(format, &TEST_KEY, b"payload");
        backup[format.ciphertext_offset] ^= 0x01;
        assert!(decrypt_backup(&test_key(), &backup).is_err());
    }

    #[test]
    fn tampered_tag_fails_authentication() {
        let mut backup = make_backup(&FORMAT_CATALOG[0], &TEST_KEY, b"payload");
        let last = backup.len() - 1;
        backup[last] ^= 0x01;
        assert!(decrypt_backup(&test_key(), &backup).is_err());
    }

    #[test]
    fn too_short_for_every_layout_fails() {
        // Below the structural minimum of both catalog entries.
        let err = decrypt_backup(&test_key(), &[0u8; 40]).unwrap_err();
        assert!(matches!(err, CryptoError::DecryptionFailed));
    }

    #[test]
    fn empty_file_fails() {
        assert!(decrypt_backup(&test_key(), &[]).is_err());
    }

    #[test]
    fn valid_tag_but_uncompressed_plaintext_fails() {
        // Authenticates fine but the plaintext is not a zlib stream; the
        // trial must move on and the catalog exhausts.
        let format = &FORMAT_CATALOG[0];
        let iv = [7u8; 16];
        let cipher = BackupCipher::new_from_slice(&TEST_KEY).unwrap();
        let sealed = cipher
            .encrypt(Nonce::from_slice(&iv), &b"not compressed"[..])
            .unwrap();
        let mut file = vec![0u8; format.ciphertext_offset];
        file[format.iv_offset..format.iv_offset + format.iv_len].copy_from_slice(&iv);
        file.extend_from_slice(&sealed);

        let err = decrypt_backup(&test_key(), &file).unwrap_err();
        assert!(matches!(err, CryptoError::DecryptionFailed));
    }
}
