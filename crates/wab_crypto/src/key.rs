//! Key file handling.
//!
//! A backup key file is exactly 158 bytes. The 32-byte AES-256 key sits at
//! a fixed offset near the end; everything before it (server salts, legacy
//! fields, padding) is ignored.

use std::fmt;

use zeroize::ZeroizeOnDrop;

use crate::error::CryptoError;

/// Total length of a valid key file.
pub const KEY_FILE_LEN: usize = 158;

/// Byte offset of the AES key within the key file.
const KEY_OFFSET: usize = 126;

/// 32-byte AES-256-GCM key sliced from a key file. Zeroized on drop.
#[derive(ZeroizeOnDrop)]
pub struct KeyMaterial {
    key: [u8; 32],
}

impl KeyMaterial {
    /// Validate a raw key file and slice out the AES key.
    ///
    /// Fails with [`CryptoError::InvalidKeyLength`] before any decryption
    /// is attempted when the file is not exactly 158 bytes.
    pub fn load(raw: &[u8]) -> Result<Self, CryptoError> {
        if raw.len() != KEY_FILE_LEN {
            return Err(CryptoError::InvalidKeyLength { got: raw.len() });
        }
        let mut key = [0u8; 32];
        key.copy_from_slice(&raw[KEY_OFFSET..KEY_OFFSET + 32]);
        Ok(Self { key })
    }

    pub(crate) fn key_bytes(&self) -> &[u8; 32] {
        &self.key
    }
}

// Key bytes must never reach logs or error messages.
impl fmt::Debug for KeyMaterial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("KeyMaterial(..)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_short_key_file() {
        let err = KeyMaterial::load(&[0u8; 157]).unwrap_err();
        assert!(matches!(err, CryptoError::InvalidKeyLength { got: 157 }));
    }

    #[test]
    fn rejects_long_key_file() {
        let err = KeyMaterial::load(&[0u8; 159]).unwrap_err();
        assert!(matches!(err, CryptoError::InvalidKeyLength { got: 159 }));
    }

    #[test]
    fn rejects_empty_key_file() {
        assert!(KeyMaterial::load(&[]).is_err());
    }

    #[test]
    fn slices_key_at_fixed_offset() {
        // Distinct byte per position so a wrong offset is caught.
        let raw: Vec<u8> = (0..KEY_FILE_LEN as u8).collect();
        let key = KeyMaterial::load(&raw).unwrap();
        assert_eq!(key.key_bytes().as_slice(), &raw[126..158]);
    }

    #[test]
    fn debug_never_prints_key_bytes() {
        let mut raw = vec![0u8; KEY_FILE_LEN];
        let key_slice = hex::decode("ab".repeat(32)).unwrap();
        raw[126..].copy_from_slice(&key_slice);
        let key = KeyMaterial::load(&raw).unwrap();
        let printed = format!("{key:?}");
        assert!(!printed.contains("ab"));
        assert!(!printed.contains("171"));
    }
}
